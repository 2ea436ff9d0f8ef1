//! Parsing of `git diff --stat` output.
//!
//! The stat table is a simple per-file scan, separate from the unified-diff
//! walker: each row is `<path> | <change> <+/- note>`. Rows that don't
//! match (binary files, the trailing "N files changed" line) pass through
//! raw so nothing is silently dropped.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// One parsed row of the stat table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatEntry {
    /// File path as printed by git (repo-relative).
    pub path: String,
    /// Total changed line count for the file.
    pub change: u64,
    /// Number of `+` marks in the histogram note.
    pub plus: usize,
    /// Number of `-` marks in the histogram note.
    pub minus: usize,
}

/// One line of stat output: a parsed entry or a pass-through raw line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatLine {
    /// A per-file row that matched the table grammar.
    Entry(StatEntry),
    /// Anything else, verbatim.
    Raw(String),
}

static STAT_ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    // The note is absent entirely for zero-change rows
    Regex::new(r"^\s(?P<path>.*?)\s+\|\s+(?P<change>\d+)(?:\s+(?P<note>[-+]*))?\s*$").unwrap()
});

/// Parse a full `git diff --stat` blob into ordered stat lines.
pub fn parse_stat(text: &str) -> Vec<StatLine> {
    text.lines().map(parse_stat_line).collect()
}

fn parse_stat_line(line: &str) -> StatLine {
    let Some(caps) = STAT_ROW_RE.captures(line) else {
        return StatLine::Raw(line.to_string());
    };

    let Ok(change) = caps["change"].parse::<u64>() else {
        return StatLine::Raw(line.to_string());
    };

    let note = caps.name("note").map(|m| m.as_str()).unwrap_or("");
    StatLine::Entry(StatEntry {
        path: caps["path"].to_string(),
        change,
        plus: note.matches('+').count(),
        minus: note.matches('-').count(),
    })
}
