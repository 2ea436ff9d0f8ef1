//! Unified-diff parsing and blame annotation for difflame.
//!
//! This module is the core of the tool:
//! - [`line`] classifies one raw diff line into a typed tag
//! - [`hunk`] parses `@@ ... @@` headers, including the single-line
//!   shorthand where an omitted count means 1
//! - [`walker`] walks a whole diff blob, advances the before/after line
//!   cursors, and joins `+`/`-` lines to per-hunk blame indexes
//!
//! Classification and cursor bookkeeping are kept separate so each is
//! independently testable.

pub mod hunk;
pub mod line;
pub mod walker;


pub use hunk::HunkHeader;
pub use line::DiffLineKind;
pub use walker::{AnnotatedLine, DiffWalker};
