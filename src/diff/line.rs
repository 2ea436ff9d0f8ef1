//! Classification of single unified-diff lines.

use serde::Serialize;

/// Classification tag for one line of unified-diff text.
///
/// The classifier is pure: it never touches cursors or fetches blame.
/// That bookkeeping belongs to the walker, which acts on the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffLineKind {
    /// `diff --git a/... b/...` file section marker.
    FileMarker,
    /// `--- a/...` old-side file header.
    OldFileHeader,
    /// `+++ b/...` new-side file header.
    NewFileHeader,
    /// `@@ -a,b +c,d @@` hunk header.
    HunkHeader,
    /// `+` prefixed added line.
    Addition,
    /// `-` prefixed deleted line.
    Deletion,
    /// Space-prefixed unchanged line.
    Context,
    /// Anything else: index/mode lines, the "no newline" marker, blank
    /// separators. Passed through untouched.
    Other,
}

/// Classify one raw diff line.
///
/// Rules are applied in priority order so `---`/`+++` headers win over
/// plain deletions/additions. Classification is non-destructive; the raw
/// text is left to the caller.
pub fn classify(line: &str) -> DiffLineKind {
    if line.starts_with("diff ") {
        DiffLineKind::FileMarker
    } else if line.starts_with("--- ") {
        DiffLineKind::OldFileHeader
    } else if line.starts_with("+++ ") {
        DiffLineKind::NewFileHeader
    } else if line.starts_with("@@") {
        DiffLineKind::HunkHeader
    } else if line.starts_with('+') {
        DiffLineKind::Addition
    } else if line.starts_with('-') {
        DiffLineKind::Deletion
    } else if line.starts_with(' ') {
        DiffLineKind::Context
    } else {
        DiffLineKind::Other
    }
}

/// Extract the file path from a `--- ` or `+++ ` header line.
///
/// Strips the VCS-internal `a/` or `b/` prefix. `/dev/null` (file created
/// or deleted) yields `None`: there is nothing to blame on that side.
pub fn header_path(line: &str, vcs_prefix: &str) -> Option<String> {
    let rest = line
        .strip_prefix("--- ")
        .or_else(|| line.strip_prefix("+++ "))?;

    if rest == "/dev/null" {
        return None;
    }

    rest.strip_prefix(vcs_prefix)
        .map(|path| path.trim().to_string())
}
