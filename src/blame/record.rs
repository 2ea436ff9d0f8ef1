//! Parsing of single `git blame` output lines.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// One line of blame attribution.
///
/// Immutable once parsed. The timestamp is kept verbatim as formatted text
/// (date, time, timezone); downstream consumers only display it, so nothing
/// is gained by re-parsing it into a calendar type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlameRecord {
    /// Abbreviated or full commit hash (8-40 lowercase hex characters).
    pub commit_hash: String,
    /// Author display name; may contain spaces.
    pub author: String,
    /// Commit timestamp, verbatim: `YYYY-MM-DD HH:MM:SS +ZZZZ`.
    pub datetime: String,
    /// 1-based line number in the blamed revision of the file.
    pub line_number: usize,
    /// The line content; may be empty.
    pub content: String,
}

/// Matcher for the default `git blame` line format:
///
/// ```text
/// 0e2b5b3d (Mael Kim 2019-11-04 23:04:00 +0900  1) import re
/// ```
///
/// The parenthesized segment is not fixed-width and the author name may
/// itself contain spaces, so the hash and the line-number anchor the author
/// field instead of column offsets. A leading `^` marks a boundary commit
/// and is not part of the hash.
static BLAME_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*\^?(?P<commit_hash>[0-9a-f]{8,40})\s+\((?P<author>.+?)\s+(?P<datetime>\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} [+-]\d{4})\s+(?P<line_number>\d+)\)\s?(?P<content>.*)$",
    )
    .unwrap()
});

impl BlameRecord {
    /// Parse one line of blame-tool output.
    ///
    /// Returns `None` when the line does not match the blame grammar (for
    /// example a tool warning mixed into the output). Callers must treat
    /// `None` as absence, never as a record with zero-valued fields, and
    /// must not index anything for it.
    pub fn parse(line: &str) -> Option<BlameRecord> {
        let caps = BLAME_LINE_RE.captures(line)?;

        // line_number is \d+ by construction; it only overflows usize on
        // absurd input, which we treat as unparseable.
        let line_number: usize = caps["line_number"].parse().ok()?;

        Some(BlameRecord {
            commit_hash: caps["commit_hash"].to_string(),
            author: caps["author"].to_string(),
            datetime: caps["datetime"].to_string(),
            line_number,
            content: caps["content"].to_string(),
        })
    }
}
