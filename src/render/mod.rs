//! Presentation sinks for annotated diff records.
//!
//! Sinks consume the ordered `AnnotatedLine` records produced by the diff
//! walker and write them to any `io::Write`. They know nothing about git:
//! classification tags, line numbers, and optional blame attribution are
//! all they see.

pub mod json;
pub mod table;
pub mod terminal;

use crate::diff::{AnnotatedLine, DiffLineKind};
use crate::error::{DifflameError, Result};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Output format for the annotate command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Colored terminal output with line-number gutters (default).
    #[default]
    Terminal,
    /// Comma-separated values, one row per record.
    Csv,
    /// Tab-separated values, one row per record.
    Tsv,
    /// NDJSON: one JSON object per record, preceded by an export header.
    Json,
}

/// Metadata describing one export run.
#[derive(Debug, Clone, Serialize)]
pub struct ExportMeta {
    /// Repository label (basename of the repo root).
    pub label: String,
    /// Old-side revision.
    pub revision_1: String,
    /// New-side revision.
    pub revision_2: String,
    /// When this export was generated.
    pub generated_at: DateTime<Utc>,
}

impl ExportMeta {
    /// Build metadata for a run, stamped with the current time.
    pub fn new(label: String, revision_1: &str, revision_2: &str) -> Self {
        ExportMeta {
            label,
            revision_1: revision_1.to_string(),
            revision_2: revision_2.to_string(),
            generated_at: Utc::now(),
        }
    }

    /// One-line export title, shared by the terminal sink and the stat view.
    pub fn title(&self) -> String {
        format!(
            "{}: diff {} {}",
            self.label, self.revision_1, self.revision_2
        )
    }
}

/// Render records to `writer` in the requested format.
pub fn render<W: Write>(
    format: OutputFormat,
    meta: &ExportMeta,
    records: &[AnnotatedLine],
    writer: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Terminal => terminal::render(meta, records, writer),
        OutputFormat::Csv => table::render(records, writer, ','),
        OutputFormat::Tsv => table::render(records, writer, '\t'),
        OutputFormat::Json => json::render(meta, records, writer),
    }
}

/// Stable textual label for a classification tag, used by the tabular sinks.
pub fn kind_label(kind: DiffLineKind) -> &'static str {
    match kind {
        DiffLineKind::FileMarker => "file",
        DiffLineKind::OldFileHeader => "old_header",
        DiffLineKind::NewFileHeader => "new_header",
        DiffLineKind::HunkHeader => "hunk",
        DiffLineKind::Addition => "addition",
        DiffLineKind::Deletion => "deletion",
        DiffLineKind::Context => "context",
        DiffLineKind::Other => "other",
    }
}

pub(crate) fn write_error(e: std::io::Error) -> DifflameError {
    DifflameError::UserError(format!("failed to write output: {}", e))
}
