use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    init_repo(path);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    temp_dir
}

/// Repository with two commits touching `notes.txt`: the second commit
/// rewrites one line and appends another, so HEAD~1..HEAD has context,
/// deletion, and addition lines for the walker to annotate.
pub(crate) fn create_test_repo_with_history() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    init_repo(path);

    std::fs::write(path.join("notes.txt"), "alpha\nbeta\ngamma\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    std::fs::write(
        path.join("notes.txt"),
        "alpha\nbeta changed\ngamma\ndelta\n",
    )
    .unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Revise notes"]);

    temp_dir
}

fn init_repo(path: &Path) {
    git(path, &["init"]);
    // Ensure the repo uses a deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    // Configure git user for commits
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
}

fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}
