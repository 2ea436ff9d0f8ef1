//! Command implementations for difflame.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod annotate;
mod stat;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Annotate(args) => annotate::cmd_annotate(args),
        Command::Stat(args) => stat::cmd_stat(args),
    }
}
