//! The `annotate` command: fetch, walk, render.

use crate::blame::BlameSource;
use crate::cli::AnnotateArgs;
use crate::config::Config;
use crate::diff::DiffWalker;
use crate::error::{DifflameError, Result};
use crate::git::{self, GitBlameSource};
use crate::render::{self, ExportMeta};
use std::fs::File;
use std::io::BufWriter;

/// Annotate the diff between two revisions and render it.
pub fn cmd_annotate(args: AnnotateArgs) -> Result<()> {
    let cwd = std::env::current_dir()
        .map_err(|e| DifflameError::UserError(format!("failed to resolve current directory: {}", e)))?;
    let repo_root = git::get_repo_root(&cwd)?;
    let config = Config::load_from_repo(&repo_root)?;

    let format = args.format.unwrap_or(config.format);
    let label = git::get_repo_label(&repo_root)?;

    git::verify_revision(&repo_root, &args.revision_1)?;
    git::verify_revision(&repo_root, &args.revision_2)?;

    // Everything runs from the repo root so the repo-relative paths in the
    // diff headers line up with the paths handed to git blame.
    let diff_text = git::fetch_diff_text(&repo_root, &args.revision_1, &args.revision_2)?;

    let blame_source = GitBlameSource::new(&repo_root);
    let source: Option<&dyn BlameSource> = if args.no_blame || !config.blame {
        None
    } else {
        Some(&blame_source)
    };

    let records =
        DiffWalker::new(&args.revision_1, &args.revision_2, source).walk(&diff_text)?;
    let meta = ExportMeta::new(label, &args.revision_1, &args.revision_2);

    match &args.output {
        Some(path) => {
            // ANSI escapes in a file would corrupt CSV/JSON consumers
            colored::control::set_override(false);
            let file = File::create(path).map_err(|e| {
                DifflameError::UserError(format!(
                    "failed to create output file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            render::render(format, &meta, &records, &mut writer)?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            render::render(format, &meta, &records, &mut writer)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffLineKind;
    use crate::test_support::create_test_repo_with_history;

    /// End-to-end over a real repository: diff two commits, blame through
    /// git, and check the attribution on added lines.
    #[test]
    fn annotates_real_repository_history() {
        let temp_dir = create_test_repo_with_history();
        let root = temp_dir.path();

        let diff_text = git::fetch_diff_text(root, "HEAD~1", "HEAD").unwrap();
        let blame_source = GitBlameSource::new(root);
        let records = DiffWalker::new("HEAD~1", "HEAD", Some(&blame_source))
            .walk(&diff_text)
            .unwrap();

        assert!(!records.is_empty());

        let additions: Vec<_> = records
            .iter()
            .filter(|r| r.kind == DiffLineKind::Addition)
            .collect();
        assert!(!additions.is_empty(), "history should contain added lines");

        for addition in &additions {
            assert!(addition.after_line.is_some());
            assert!(addition.before_line.is_none());
            let blame = addition
                .blame
                .as_ref()
                .expect("added lines exist at HEAD and must be attributable");
            assert_eq!(blame.author, "Test User");
            assert_eq!(blame.line_number, addition.after_line.unwrap());
        }

        let deletions: Vec<_> = records
            .iter()
            .filter(|r| r.kind == DiffLineKind::Deletion)
            .collect();
        for deletion in &deletions {
            assert!(deletion.before_line.is_some());
            let blame = deletion
                .blame
                .as_ref()
                .expect("deleted lines exist at HEAD~1 and must be attributable");
            assert_eq!(blame.author, "Test User");
        }
    }

    /// Without a blame source the same walk produces the same structure,
    /// just unattributed.
    #[test]
    fn no_blame_walk_matches_structure() {
        let temp_dir = create_test_repo_with_history();
        let root = temp_dir.path();

        let diff_text = git::fetch_diff_text(root, "HEAD~1", "HEAD").unwrap();
        let blame_source = GitBlameSource::new(root);

        let annotated = DiffWalker::new("HEAD~1", "HEAD", Some(&blame_source))
            .walk(&diff_text)
            .unwrap();
        let plain = DiffWalker::new("HEAD~1", "HEAD", None)
            .walk(&diff_text)
            .unwrap();

        assert_eq!(annotated.len(), plain.len());
        for (a, p) in annotated.iter().zip(plain.iter()) {
            assert_eq!(a.kind, p.kind);
            assert_eq!(a.text, p.text);
            assert_eq!(a.before_line, p.before_line);
            assert_eq!(a.after_line, p.after_line);
            assert!(p.blame.is_none());
        }
    }
}
