//! Error types for the difflame CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for difflame operations.
///
/// Structural parse errors (a `@@` line that does not match the hunk-header
/// grammar) abort the whole walk: skipping a bad header would desynchronize
/// every subsequent line cursor. Blame gaps are never errors; they degrade
/// to unattributed output.
#[derive(Error, Debug)]
pub enum DifflameError {
    /// User provided invalid arguments or the system is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// A `@@` line failed the hunk-header grammar.
    ///
    /// `position` is the 1-based line number of the offending line within
    /// the diff text.
    #[error("malformed hunk header at diff line {position}: '{line}'")]
    MalformedHunkHeader {
        /// 1-based position of the offending line in the diff text.
        position: usize,
        /// The offending line, verbatim.
        line: String,
    },

    /// Git operation failed (diff or blame subprocess).
    #[error("Git operation failed: {0}")]
    GitError(String),
}

impl DifflameError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DifflameError::UserError(_) => exit_codes::USER_ERROR,
            DifflameError::MalformedHunkHeader { .. } => exit_codes::PARSE_FAILURE,
            DifflameError::GitError(_) => exit_codes::GIT_FAILURE,
        }
    }
}

/// Result type alias for difflame operations.
pub type Result<T> = std::result::Result<T, DifflameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = DifflameError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn malformed_hunk_header_has_correct_exit_code() {
        let err = DifflameError::MalformedHunkHeader {
            position: 4,
            line: "@@ bogus @@".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::PARSE_FAILURE);
    }

    #[test]
    fn git_error_has_correct_exit_code() {
        let err = DifflameError::GitError("blame failed".to_string());
        assert_eq!(err.exit_code(), exit_codes::GIT_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = DifflameError::MalformedHunkHeader {
            position: 12,
            line: "@@ -x +y @@".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed hunk header at diff line 12: '@@ -x +y @@'"
        );

        let err = DifflameError::GitError("git diff failed (exit code 128)".to_string());
        assert!(err.to_string().starts_with("Git operation failed:"));
    }
}
