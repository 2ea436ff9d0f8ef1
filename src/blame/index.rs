//! Line-number index over parsed blame records.

use super::record::BlameRecord;
use std::collections::BTreeMap;
use tracing::warn;

/// Mapping from 1-based line number to its blame attribution.
///
/// Built once per (revision, file-path, line-range) query and scoped to a
/// single hunk's before-side or after-side; the walker replaces indexes
/// wholesale at each hunk header, never merges them.
#[derive(Debug, Clone, Default)]
pub struct BlameIndex {
    records: BTreeMap<usize, BlameRecord>,
}

impl BlameIndex {
    /// Build an index from a raw blame-tool output blob.
    ///
    /// Each line is parsed via [`BlameRecord::parse`]; only lines that
    /// yielded a record are inserted, keyed by that record's line number.
    /// Lines that don't match the blame grammar are excluded with a warning
    /// (the feature is best-effort annotation, so this is a data-integrity
    /// signal, not a fatal error). Duplicate line numbers should not occur
    /// for a well-formed range request; when they do, last write wins.
    pub fn parse(blame_text: &str) -> BlameIndex {
        let mut records = BTreeMap::new();

        for line in blame_text.lines() {
            if line.is_empty() {
                continue;
            }
            match BlameRecord::parse(line) {
                Some(record) => {
                    if let Some(previous) = records.insert(record.line_number, record) {
                        warn!(
                            line_number = previous.line_number,
                            "duplicate line number in blame output; keeping the later record"
                        );
                    }
                }
                None => {
                    warn!(line, "unparseable blame line excluded from index");
                }
            }
        }

        BlameIndex { records }
    }

    /// Look up the attribution for a 1-based line number.
    pub fn get(&self, line_number: usize) -> Option<&BlameRecord> {
        self.records.get(&line_number)
    }

    /// Number of attributed lines in the index.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no line could be attributed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over (line number, record) pairs in line order.
    pub fn iter(&self) -> impl Iterator<Item = (&usize, &BlameRecord)> {
        self.records.iter()
    }
}
