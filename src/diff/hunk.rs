//! Hunk header parsing.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// A parsed `@@ -<start>[,<count>] +<start>[,<count>] @@` header.
///
/// Ephemeral: the walker consumes it immediately to reset its line cursors
/// and scope the per-hunk blame fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HunkHeader {
    /// First line of the hunk on the old side (1-based; 0 for new files).
    pub before_start: usize,
    /// Number of old-side lines covered by the hunk.
    pub before_count: usize,
    /// First line of the hunk on the new side (1-based; 0 for deleted files).
    pub after_start: usize,
    /// Number of new-side lines covered by the hunk.
    pub after_count: usize,
    /// Trailing section-name text after the closing `@@`, if any.
    /// Whitespace-only trailing text is treated the same as empty.
    pub section: Option<String>,
}

/// Hunk-header grammar with the optional-count shorthand.
///
/// A missing count is single-line shorthand and defaults to 1 — not to the
/// start value. This is the most error-prone corner of the format.
static HUNK_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^@@ -(?P<before_start>\d+)(?:,(?P<before_count>\d+))? \+(?P<after_start>\d+)(?:,(?P<after_count>\d+))? @@(?P<section>.*)$",
    )
    .unwrap()
});

impl HunkHeader {
    /// Parse a line beginning with `@@`.
    ///
    /// Returns `None` when the `-<num> +<num>` structure is absent. Callers
    /// must treat that as fatal: a `@@` line that fails the grammar means
    /// an unsupported or corrupted diff, and skipping it would
    /// desynchronize every subsequent line cursor.
    pub fn parse(line: &str) -> Option<HunkHeader> {
        let caps = HUNK_HEADER_RE.captures(line)?;

        let before_start: usize = caps["before_start"].parse().ok()?;
        let after_start: usize = caps["after_start"].parse().ok()?;
        let before_count = match caps.name("before_count") {
            Some(m) => m.as_str().parse().ok()?,
            None => 1,
        };
        let after_count = match caps.name("after_count") {
            Some(m) => m.as_str().parse().ok()?,
            None => 1,
        };

        let section_text = &caps["section"];
        let section = if section_text.trim().is_empty() {
            None
        } else {
            Some(section_text.to_string())
        };

        Some(HunkHeader {
            before_start,
            before_count,
            after_start,
            after_count,
            section,
        })
    }
}
