//! Configuration file loading for commentary output.
//!
//! Settings are read from a TOML file (`commentary.toml` in the current
//! directory by default). Every field is optional.

use std::path::{Path, PathBuf};

use chess_analysis::{AdvantageThresholds, PassedPawnRule};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Commentary settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CommentaryConfig {
    /// Rule used to decide whether a pawn is passed.
    #[serde(default)]
    pub passed_pawn_rule: PassedPawnRule,
    /// Maximum number of moves described in a line. Defaults to 12.
    #[serde(default = "default_max_line_moves")]
    pub max_line_moves: usize,
    /// Centipawn boundaries for evaluation summaries.
    #[serde(default)]
    pub thresholds: AdvantageThresholds,
}

fn default_max_line_moves() -> usize {
    12
}

impl Default for CommentaryConfig {
    fn default() -> Self {
        Self {
            passed_pawn_rule: PassedPawnRule::default(),
            max_line_moves: default_max_line_moves(),
            thresholds: AdvantageThresholds::default(),
        }
    }
}

impl CommentaryConfig {
    /// Loads configuration from `path`, or the defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Returns the default configuration file path.
    pub fn config_path() -> PathBuf {
        PathBuf::from("commentary.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
passed_pawn_rule = "directional"
max_line_moves = 6

[thresholds]
slight_cp = 30
clear_cp = 120
decisive_cp = 350
"#;

        let config: CommentaryConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.passed_pawn_rule, PassedPawnRule::Directional);
        assert_eq!(config.max_line_moves, 6);
        assert_eq!(config.thresholds.slight_cp, 30);
        assert_eq!(config.thresholds.clear_cp, 120);
        assert_eq!(config.thresholds.decisive_cp, 350);
    }

    #[test]
    fn test_empty_config_defaults() {
        let config: CommentaryConfig = toml::from_str("").unwrap();
        assert_eq!(config, CommentaryConfig::default());
        assert_eq!(config.passed_pawn_rule, PassedPawnRule::FileClear);
        assert_eq!(config.max_line_moves, 12);
    }

    #[test]
    fn test_partial_thresholds() {
        let config: CommentaryConfig = toml::from_str("[thresholds]\nclear_cp = 200\n").unwrap();
        assert_eq!(config.thresholds.slight_cp, 50);
        assert_eq!(config.thresholds.clear_cp, 200);
    }

    #[test]
    fn test_unknown_rule_is_parse_error() {
        let result: Result<CommentaryConfig, _> = toml::from_str("passed_pawn_rule = \"diagonal\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = CommentaryConfig::load(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, CommentaryConfig::default());
    }

    #[test]
    fn test_load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_line_moves = 3").unwrap();

        let config = CommentaryConfig::load(file.path()).unwrap();
        assert_eq!(config.max_line_moves, 3);
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_line_moves = [").unwrap();

        let result = CommentaryConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_config_path() {
        assert_eq!(CommentaryConfig::config_path(), PathBuf::from("commentary.toml"));
    }
}
