//! The `stat` command: parsed diffstat table.

use crate::cli::StatArgs;
use crate::config::Config;
use crate::error::{DifflameError, Result};
use crate::git;
use crate::summary::{parse_stat, StatLine};
use colored::Colorize;

/// Print the parsed diffstat between two revisions.
pub fn cmd_stat(args: StatArgs) -> Result<()> {
    let cwd = std::env::current_dir()
        .map_err(|e| DifflameError::UserError(format!("failed to resolve current directory: {}", e)))?;
    let repo_root = git::get_repo_root(&cwd)?;
    let config = Config::load_from_repo(&repo_root)?;

    let width = args.width.unwrap_or(config.stat_width);
    let label = git::get_repo_label(&repo_root)?;

    git::verify_revision(&repo_root, &args.revision_1)?;
    git::verify_revision(&repo_root, &args.revision_2)?;

    let stat_text = git::fetch_stat_text(&repo_root, &args.revision_1, &args.revision_2, width)?;
    let lines = parse_stat(&stat_text);

    println!(
        "{}",
        format!("{}: diff {} {}", label, args.revision_1, args.revision_2).bold()
    );
    println!();

    let path_width = lines
        .iter()
        .filter_map(|line| match line {
            StatLine::Entry(entry) => Some(entry.path.len()),
            StatLine::Raw(_) => None,
        })
        .max()
        .unwrap_or(0);

    for line in &lines {
        match line {
            StatLine::Entry(entry) => {
                println!(
                    " {:<path_width$} | {:>4} {}{}",
                    entry.path,
                    entry.change,
                    "+".repeat(entry.plus).green(),
                    "-".repeat(entry.minus).red(),
                );
            }
            StatLine::Raw(raw) => println!("{}", raw),
        }
    }

    Ok(())
}
