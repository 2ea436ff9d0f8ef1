//! CLI argument parsing for difflame.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::render::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Difflame: annotate git diffs with per-line blame and export them.
///
/// Walks the unified diff between two revisions, resolves before/after line
/// numbers for every change, attributes added and deleted lines to the
/// commits that last touched them, and renders the result as colored
/// terminal output, CSV/TSV, or NDJSON.
#[derive(Parser, Debug)]
#[command(name = "difflame")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for difflame.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Annotate the diff between two revisions with blame attribution.
    ///
    /// Fetches `git diff <revision_1> <revision_2>`, walks it hunk by hunk
    /// fetching blame for each hunk's line ranges, and renders the
    /// annotated records.
    #[command(alias = "diff")]
    Annotate(AnnotateArgs),

    /// Show the parsed diffstat table between two revisions.
    ///
    /// Fetches `git diff --stat` and prints per-file change counts with
    /// their +/- histograms.
    Stat(StatArgs),
}

/// Arguments for the `annotate` command.
#[derive(Parser, Debug)]
pub struct AnnotateArgs {
    /// The first branch, tag name, or revision to be compared (old side).
    pub revision_1: String,

    /// The second branch, tag name, or revision to be compared (new side).
    pub revision_2: String,

    /// Output format. Defaults to the config file setting, then `terminal`.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write output to a file instead of stdout (disables colors).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip blame attribution; emit the diff structure only.
    #[arg(long)]
    pub no_blame: bool,
}

/// Arguments for the `stat` command.
#[derive(Parser, Debug)]
pub struct StatArgs {
    /// The first branch, tag name, or revision to be compared (old side).
    pub revision_1: String,

    /// The second branch, tag name, or revision to be compared (new side).
    pub revision_2: String,

    /// Stat width passed to git (caps path truncation).
    #[arg(long)]
    pub width: Option<u32>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_annotate_with_defaults() {
        let cli = Cli::try_parse_from(["difflame", "annotate", "v1", "v2"]).unwrap();
        match cli.command {
            Command::Annotate(args) => {
                assert_eq!(args.revision_1, "v1");
                assert_eq!(args.revision_2, "v2");
                assert!(args.format.is_none());
                assert!(args.output.is_none());
                assert!(!args.no_blame);
            }
            other => panic!("expected annotate, got {other:?}"),
        }
    }

    #[test]
    fn parses_annotate_flags() {
        let cli = Cli::try_parse_from([
            "difflame", "annotate", "main", "feature", "--format", "csv", "--no-blame",
            "--output", "out.csv",
        ])
        .unwrap();
        match cli.command {
            Command::Annotate(args) => {
                assert_eq!(args.format, Some(OutputFormat::Csv));
                assert!(args.no_blame);
                assert_eq!(args.output.unwrap().to_string_lossy(), "out.csv");
            }
            other => panic!("expected annotate, got {other:?}"),
        }
    }

    #[test]
    fn diff_is_an_alias_for_annotate() {
        let cli = Cli::try_parse_from(["difflame", "diff", "a", "b"]).unwrap();
        assert!(matches!(cli.command, Command::Annotate(_)));
    }

    #[test]
    fn parses_stat_command() {
        let cli = Cli::try_parse_from(["difflame", "stat", "a", "b", "--width", "120"]).unwrap();
        match cli.command {
            Command::Stat(args) => {
                assert_eq!(args.width, Some(120));
            }
            other => panic!("expected stat, got {other:?}"),
        }
    }

    #[test]
    fn missing_revisions_is_an_error() {
        assert!(Cli::try_parse_from(["difflame", "annotate", "only-one"]).is_err());
    }
}
