//! Exit code constants for the difflame CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, not a git repository)
//! - 2: Parse failure (corrupted or unsupported diff input)
//! - 3: Git operation failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or not inside a git repository.
pub const USER_ERROR: i32 = 1;

/// Parse failure: the diff text did not match the unified-diff grammar.
pub const PARSE_FAILURE: i32 = 2;

/// Git operation failure: diff or blame subprocess returned non-zero.
pub const GIT_FAILURE: i32 = 3;
