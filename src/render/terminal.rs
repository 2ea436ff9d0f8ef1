//! Colored terminal rendering.

use super::ExportMeta;
use crate::diff::{AnnotatedLine, DiffLineKind};
use crate::error::Result;
use colored::Colorize;
use std::io::Write;

/// Render annotated records as a colored listing with before/after
/// line-number gutters and a blame note on attributed lines.
pub fn render<W: Write>(
    meta: &ExportMeta,
    records: &[AnnotatedLine],
    writer: &mut W,
) -> Result<()> {
    writeln!(writer, "{}", meta.title().bold()).map_err(super::write_error)?;
    writeln!(writer).map_err(super::write_error)?;

    for record in records {
        let gutter = format!(
            "{:>6} {:>6}",
            record
                .before_line
                .map(|n| n.to_string())
                .unwrap_or_default(),
            record.after_line.map(|n| n.to_string()).unwrap_or_default(),
        );

        let body = match record.kind {
            DiffLineKind::FileMarker => record.text.bold().to_string(),
            DiffLineKind::OldFileHeader => record.text.red().bold().to_string(),
            DiffLineKind::NewFileHeader => record.text.green().bold().to_string(),
            DiffLineKind::HunkHeader => record.text.blue().to_string(),
            DiffLineKind::Addition => record.text.green().to_string(),
            DiffLineKind::Deletion => record.text.red().to_string(),
            DiffLineKind::Context | DiffLineKind::Other => record.text.clone(),
        };

        let blame_note = record
            .blame
            .as_ref()
            .map(|blame| {
                format!("  [{} {} {}]", blame.commit_hash, blame.author, blame.datetime)
                    .dimmed()
                    .to_string()
            })
            .unwrap_or_default();

        writeln!(writer, "{} {}{}", gutter, body, blame_note).map_err(super::write_error)?;
    }

    Ok(())
}
