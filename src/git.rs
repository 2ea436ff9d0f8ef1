//! Git command runner for difflame.
//!
//! Provides a safe wrapper around git commands with captured stdout/stderr
//! and structured error handling. All git operations go through this module:
//! the diff source, the stat source, and the per-hunk blame source.

use crate::blame::BlameSource;
use crate::error::{DifflameError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    /// Create a new GitOutput from raw output bytes.
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Run a git command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(DifflameError::GitError)` - On non-zero exit code (mapped to exit code 3)
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let output = spawn_git(cwd.as_ref(), args)?;
    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        Err(git_failure(args, &output, &git_output))
    }
}

/// Run a git command and return its stdout verbatim, without trimming.
///
/// Diff and blame output is positional: a trailing blank line is a real
/// context line, and leading whitespace in blame content is significant.
pub fn run_git_raw<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<String> {
    let output = spawn_git(cwd.as_ref(), args)?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    } else {
        let git_output = GitOutput::from_output(&output);
        Err(git_failure(args, &output, &git_output))
    }
}

fn spawn_git(cwd: &Path, args: &[&str]) -> Result<Output> {
    Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            DifflameError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })
}

fn git_failure(args: &[&str], output: &Output, git_output: &GitOutput) -> DifflameError {
    let exit_code = output.status.code().unwrap_or(-1);
    let error_msg = if git_output.stderr.is_empty() {
        git_output.stdout.clone()
    } else {
        git_output.stderr.clone()
    };

    DifflameError::GitError(format!(
        "git {} failed (exit code {}): {}",
        args.first().unwrap_or(&""),
        exit_code,
        error_msg
    ))
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// This works correctly from any location within a git repository.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The absolute path to the repository root
/// * `Err(DifflameError::UserError)` - If not inside a git repository (exit code 1)
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let cwd = cwd.as_ref();

    let output = Command::new("git")
        .current_dir(cwd)
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .map_err(|e| {
            DifflameError::UserError(format!("failed to execute git: {} (is git installed?)", e))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(PathBuf::from(&git_output.stdout))
    } else if git_output.stderr.contains("not a git repository")
        || git_output.stderr.contains("fatal:")
    {
        Err(DifflameError::UserError(
            "not inside a git repository. Run this command from within a git repository."
                .to_string(),
        ))
    } else {
        Err(DifflameError::UserError(format!(
            "git command failed: {}",
            if git_output.stderr.is_empty() {
                &git_output.stdout
            } else {
                &git_output.stderr
            }
        )))
    }
}

/// Get a human-readable label for the repository: the basename of the
/// repository root. Used as the export title.
pub fn get_repo_label<P: AsRef<Path>>(cwd: P) -> Result<String> {
    let root = get_repo_root(cwd)?;
    Ok(root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| root.display().to_string()))
}

/// Verify that a revision names a commit in the repository.
///
/// Runs `git rev-parse --verify <revision>^{commit}` and maps failure to a
/// `UserError`: a bad revision argument is the caller's mistake, not a git
/// infrastructure failure.
pub fn verify_revision<P: AsRef<Path>>(cwd: P, revision: &str) -> Result<()> {
    let rev_arg = format!("{}^{{commit}}", revision);
    run_git(cwd, &["rev-parse", "--verify", "--quiet", &rev_arg])
        .map(|_| ())
        .map_err(|_| DifflameError::UserError(format!("unknown revision '{}'", revision)))
}

/// Fetch the full unified diff text between two revisions.
///
/// Runs `git diff <revision_1> <revision_2>` and returns stdout verbatim.
pub fn fetch_diff_text<P: AsRef<Path>>(cwd: P, revision_1: &str, revision_2: &str) -> Result<String> {
    run_git_raw(cwd, &["diff", revision_1, revision_2])
}

/// Fetch the diffstat table between two revisions.
///
/// Runs `git diff --stat=<width> <revision_1> <revision_2>`. The width caps
/// the path column so long paths are not truncated with "...".
pub fn fetch_stat_text<P: AsRef<Path>>(
    cwd: P,
    revision_1: &str,
    revision_2: &str,
    width: u32,
) -> Result<String> {
    let stat_arg = format!("--stat={}", width);
    run_git_raw(cwd, &["diff", &stat_arg, revision_1, revision_2])
}

/// Blame source backed by `git blame`, scoped to a line range per call.
///
/// One instance is shared across the whole walk; the walker calls it at
/// most twice per hunk (old side and new side).
#[derive(Debug, Clone)]
pub struct GitBlameSource {
    cwd: PathBuf,
}

impl GitBlameSource {
    /// Create a blame source that runs git in the given directory.
    pub fn new<P: AsRef<Path>>(cwd: P) -> Self {
        Self {
            cwd: cwd.as_ref().to_path_buf(),
        }
    }
}

impl BlameSource for GitBlameSource {
    /// Fetch blame text for a line range of a file at a revision.
    ///
    /// `start_line` and `line_count` are passed through verbatim as
    /// `-L <start>,+<count>`, including the shorthand-expanded
    /// single-line case (`count` 1).
    fn fetch_blame(
        &self,
        revision: &str,
        file_path: &str,
        start_line: usize,
        line_count: usize,
    ) -> Result<String> {
        let range = format!("{},+{}", start_line, line_count);
        run_git_raw(
            &self.cwd,
            &["blame", "-L", &range, revision, "--", file_path],
        )
    }
}
