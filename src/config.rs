//! Configuration for difflame.
//!
//! An optional `.difflame.yaml` at the repository root supplies defaults
//! that CLI flags override. Unknown fields in the YAML are ignored for
//! forward compatibility; a missing file simply means built-in defaults.

use crate::error::{DifflameError, Result};
use crate::render::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the config file looked up at the repository root.
pub const CONFIG_FILE_NAME: &str = ".difflame.yaml";

/// Configuration defaults for difflame commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format for `annotate`.
    pub format: OutputFormat,

    /// Whether `annotate` fetches blame attribution (the `--no-blame` flag
    /// disables it per run).
    pub blame: bool,

    /// Width passed to `git diff --stat=<width>` so long paths are not
    /// truncated.
    pub stat_width: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: OutputFormat::Terminal,
            blame: true,
            stat_width: default_stat_width(),
        }
    }
}

fn default_stat_width() -> u32 {
    200
}

impl Config {
    /// Load configuration from the given file path.
    ///
    /// A missing file yields `Config::default()`. A present but invalid
    /// file is a user error: silently ignoring a typo would be worse than
    /// failing.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            DifflameError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            DifflameError::UserError(format!(
                "invalid config file '{}': {}\n\
                 Fix: correct the YAML or delete the file to use defaults.",
                path.display(),
                e
            ))
        })
    }

    /// Load configuration from the repository root (best place for a
    /// per-project file), falling back to defaults when absent.
    pub fn load_from_repo<P: AsRef<Path>>(repo_root: P) -> Result<Config> {
        Config::load(repo_root.as_ref().join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config.format, OutputFormat::Terminal);
        assert!(config.blame);
        assert_eq!(config.stat_width, 200);
    }

    #[test]
    fn loads_partial_config_with_defaults_for_rest() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "format: csv\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.format, OutputFormat::Csv);
        assert!(config.blame);
        assert_eq!(config.stat_width, 200);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "blame: false\nfuture_option: 42\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(!config.blame);
    }

    #[test]
    fn invalid_yaml_is_a_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "format: [not-a-format\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, DifflameError::UserError(_)));
        assert!(err.to_string().contains("invalid config file"));
    }

    #[test]
    fn config_round_trips_through_yaml() {
        let config = Config {
            format: OutputFormat::Json,
            blame: false,
            stat_width: 120,
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.format, OutputFormat::Json);
        assert!(!parsed.blame);
        assert_eq!(parsed.stat_width, 120);
    }
}
