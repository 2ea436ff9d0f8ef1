//! Blame parsing primitives for difflame.
//!
//! This module turns `git blame` text into structured per-line attribution:
//! - [`BlameRecord`] - one parsed blame line (commit, author, timestamp, line)
//! - [`BlameIndex`] - a line-number -> record lookup for one range query
//! - [`BlameSource`] - the external collaborator that supplies raw blame text
//!
//! Blame is an enrichment, never a correctness requirement: lines the blame
//! tool could not attribute simply stay unattributed downstream.

mod index;
mod record;


pub use index::BlameIndex;
pub use record::BlameRecord;

use crate::error::Result;

/// External source of raw blame text for a (revision, path, range) query.
///
/// The production implementation shells out to `git blame`
/// ([`crate::git::GitBlameSource`]); tests substitute canned text. The call
/// is synchronous and has no retry or timeout semantics at this layer.
pub trait BlameSource {
    /// Fetch blame text for `line_count` lines starting at `start_line`
    /// (1-based) of `file_path` at `revision`.
    ///
    /// `start_line` and `line_count` must be passed through verbatim,
    /// including the shorthand-expanded single-line case.
    fn fetch_blame(
        &self,
        revision: &str,
        file_path: &str,
        start_line: usize,
        line_count: usize,
    ) -> Result<String>;
}
