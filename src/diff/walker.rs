//! The diff walker: cursor bookkeeping and blame joining.

use crate::blame::{BlameIndex, BlameRecord, BlameSource};
use crate::error::{DifflameError, Result};
use serde::Serialize;
use tracing::warn;

use super::hunk::HunkHeader;
use super::line::{classify, header_path, DiffLineKind};

/// One emitted record: a classified diff line with its resolved positions
/// and, for additions and deletions, optional blame attribution.
///
/// Context lines always carry both a before- and after-line-number;
/// additions carry only after; deletions carry only before.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedLine {
    /// Classification tag.
    pub kind: DiffLineKind,
    /// The raw diff line, verbatim (including its prefix character).
    pub text: String,
    /// Line number in the old-side file, where applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_line: Option<usize>,
    /// Line number in the new-side file, where applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_line: Option<usize>,
    /// Blame attribution for the line, when it could be resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blame: Option<BlameRecord>,
}

impl AnnotatedLine {
    fn plain(kind: DiffLineKind, text: &str) -> Self {
        AnnotatedLine {
            kind,
            text: text.to_string(),
            before_line: None,
            after_line: None,
            blame: None,
        }
    }
}

/// Walker state. `---`/`+++` headers populate file paths in either
/// non-initial state; hunk bodies are only walked while in a hunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkerState {
    /// No active file-marker context yet.
    BetweenFiles,
    /// Between a `diff` marker and the first hunk of that file section.
    InFileHeader,
    /// Actively walking a hunk body.
    InHunk,
}

/// Walks a unified-diff blob and emits blame-annotated records in strict
/// input order.
///
/// The walker exclusively owns the two line cursors and the old/new file
/// path pair for the file section in progress. Blame indexes are owned
/// per-hunk: each `@@` header replaces both sides wholesale, scoped to that
/// hunk's line ranges, so a lookup is a direct line-number probe.
///
/// Blame is an enrichment: a failed or impossible blame fetch degrades that
/// side to unattributed output. The only fatal condition inside a walk is a
/// `@@` line that fails the hunk-header grammar.
pub struct DiffWalker<'a> {
    revision_1: &'a str,
    revision_2: &'a str,
    blame_source: Option<&'a dyn BlameSource>,

    state: WalkerState,
    before_cursor: usize,
    after_cursor: usize,
    before_path: Option<String>,
    after_path: Option<String>,
    before_index: Option<BlameIndex>,
    after_index: Option<BlameIndex>,
}

impl<'a> DiffWalker<'a> {
    /// Create a walker for a diff between `revision_1` (old side) and
    /// `revision_2` (new side).
    ///
    /// With `blame_source` set to `None` every record is emitted
    /// unattributed; the diff structure itself is unaffected.
    pub fn new(
        revision_1: &'a str,
        revision_2: &'a str,
        blame_source: Option<&'a dyn BlameSource>,
    ) -> Self {
        DiffWalker {
            revision_1,
            revision_2,
            blame_source,
            state: WalkerState::BetweenFiles,
            before_cursor: 0,
            after_cursor: 0,
            before_path: None,
            after_path: None,
            before_index: None,
            after_index: None,
        }
    }

    /// Walk the full diff text and return the ordered annotated records.
    ///
    /// End of input in any state is clean termination.
    ///
    /// # Errors
    ///
    /// * `DifflameError::MalformedHunkHeader` - a `@@` line failed the
    ///   hunk-header grammar; identifies the line and its 1-based position.
    pub fn walk(mut self, diff_text: &str) -> Result<Vec<AnnotatedLine>> {
        let mut records = Vec::new();

        for (index, line) in diff_text.lines().enumerate() {
            let record = self.step(line, index + 1)?;
            records.push(record);
        }

        Ok(records)
    }

    /// Process one diff line at 1-based `position` and emit its record.
    fn step(&mut self, line: &str, position: usize) -> Result<AnnotatedLine> {
        match classify(line) {
            DiffLineKind::FileMarker => {
                // New file section: previous paths and indexes are stale.
                self.before_path = None;
                self.after_path = None;
                self.before_index = None;
                self.after_index = None;
                self.state = WalkerState::InFileHeader;
                Ok(AnnotatedLine::plain(DiffLineKind::FileMarker, line))
            }
            DiffLineKind::OldFileHeader => {
                self.before_path = header_path(line, "a/");
                Ok(AnnotatedLine::plain(DiffLineKind::OldFileHeader, line))
            }
            DiffLineKind::NewFileHeader => {
                self.after_path = header_path(line, "b/");
                Ok(AnnotatedLine::plain(DiffLineKind::NewFileHeader, line))
            }
            DiffLineKind::HunkHeader => self.enter_hunk(line, position),
            DiffLineKind::Addition => Ok(self.emit_addition(line)),
            DiffLineKind::Deletion => Ok(self.emit_deletion(line)),
            DiffLineKind::Context => Ok(self.emit_context(line)),
            DiffLineKind::Other => Ok(AnnotatedLine::plain(DiffLineKind::Other, line)),
        }
    }

    /// Handle a `@@` header: reset cursors and fetch fresh per-hunk blame
    /// indexes for whichever sides have a known path.
    fn enter_hunk(&mut self, line: &str, position: usize) -> Result<AnnotatedLine> {
        let header =
            HunkHeader::parse(line).ok_or_else(|| DifflameError::MalformedHunkHeader {
                position,
                line: line.to_string(),
            })?;

        self.before_cursor = header.before_start;
        self.after_cursor = header.after_start;

        self.before_index = self.fetch_index(
            self.revision_1,
            self.before_path.clone(),
            header.before_start,
            header.before_count,
        );
        self.after_index = self.fetch_index(
            self.revision_2,
            self.after_path.clone(),
            header.after_start,
            header.after_count,
        );

        self.state = WalkerState::InHunk;
        Ok(AnnotatedLine::plain(DiffLineKind::HunkHeader, line))
    }

    /// Fetch and build a blame index for one side of a hunk.
    ///
    /// Returns `None` (that side degrades to unattributed output) when no
    /// blame source is configured, the side has no path (`/dev/null`), the
    /// range is empty, or the fetch itself fails.
    fn fetch_index(
        &self,
        revision: &str,
        path: Option<String>,
        start_line: usize,
        line_count: usize,
    ) -> Option<BlameIndex> {
        let source = self.blame_source?;
        let path = path?;
        if line_count == 0 || start_line == 0 {
            return None;
        }

        match source.fetch_blame(revision, &path, start_line, line_count) {
            Ok(text) => Some(BlameIndex::parse(&text)),
            Err(err) => {
                warn!(
                    revision,
                    path = %path,
                    start_line,
                    line_count,
                    error = %err,
                    "blame fetch failed; emitting this side unattributed"
                );
                None
            }
        }
    }

    fn emit_addition(&mut self, line: &str) -> AnnotatedLine {
        if self.state != WalkerState::InHunk {
            return AnnotatedLine::plain(DiffLineKind::Addition, line);
        }

        let blame = self
            .after_index
            .as_ref()
            .and_then(|index| index.get(self.after_cursor))
            .cloned();

        let record = AnnotatedLine {
            kind: DiffLineKind::Addition,
            text: line.to_string(),
            before_line: None,
            after_line: Some(self.after_cursor),
            blame,
        };
        self.after_cursor += 1;
        record
    }

    fn emit_deletion(&mut self, line: &str) -> AnnotatedLine {
        if self.state != WalkerState::InHunk {
            return AnnotatedLine::plain(DiffLineKind::Deletion, line);
        }

        let blame = self
            .before_index
            .as_ref()
            .and_then(|index| index.get(self.before_cursor))
            .cloned();

        let record = AnnotatedLine {
            kind: DiffLineKind::Deletion,
            text: line.to_string(),
            before_line: Some(self.before_cursor),
            after_line: None,
            blame,
        };
        self.before_cursor += 1;
        record
    }

    fn emit_context(&mut self, line: &str) -> AnnotatedLine {
        if self.state != WalkerState::InHunk {
            return AnnotatedLine::plain(DiffLineKind::Context, line);
        }

        let record = AnnotatedLine {
            kind: DiffLineKind::Context,
            text: line.to_string(),
            before_line: Some(self.before_cursor),
            after_line: Some(self.after_cursor),
            blame: None,
        };
        self.before_cursor += 1;
        self.after_cursor += 1;
        record
    }
}
