//! Front-end configuration loaded from TOML.

use crate::cli::Cli;
use crate::error::ConfigError;
use derive_getters::Getters;
use noughts::{GameMode, GameSettings, Mark};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal front end.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Mode of the first game.
    #[serde(default)]
    mode: GameMode,

    /// Mark the AI plays in single-player games.
    #[serde(default = "default_ai_mark")]
    ai_mark: Mark,

    /// Where tracing output goes (the terminal belongs to the UI).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_ai_mark() -> Mark {
    Mark::X
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            ai_mark: default_ai_mark(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        info!(mode = ?config.mode, ai_mark = %config.ai_mark, "Config loaded successfully");
        Ok(config)
    }

    /// Builds the effective config: file (if any), then command-line overrides.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(mode) = cli.mode {
            config.mode = mode.into();
        }
        if let Some(ai) = cli.ai {
            config.ai_mark = ai.into();
        }
        if let Some(log_file) = &cli.log_file {
            config.log_file = log_file.clone();
        }
        Ok(config)
    }

    /// Settings for the engine.
    pub fn game_settings(&self) -> GameSettings {
        GameSettings::new(self.mode, self.ai_mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{MarkArg, ModeArg};
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write config");
        file
    }

    fn cli(config: Option<PathBuf>) -> Cli {
        Cli {
            config,
            mode: None,
            ai: None,
            log_file: None,
        }
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = write_config("");
        let config = TuiConfig::from_file(file.path()).unwrap();
        assert_eq!(config, TuiConfig::default());
        assert_eq!(*config.ai_mark(), Mark::X);
        assert_eq!(*config.mode(), GameMode::SinglePlayer);
    }

    #[test]
    fn test_parses_all_fields() {
        let file = write_config(
            r#"
mode = "two_player"
ai_mark = "O"
log_file = "/tmp/game.log"
log_filter = "noughts=debug"
"#,
        );
        let config = TuiConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.mode(), GameMode::TwoPlayer);
        assert_eq!(*config.ai_mark(), Mark::O);
        assert_eq!(config.log_file(), &PathBuf::from("/tmp/game.log"));
        assert_eq!(config.log_filter(), "noughts=debug");
    }

    #[test]
    fn test_bad_value_is_an_error() {
        let file = write_config("ai_mark = \"Z\"\n");
        let err = TuiConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TuiConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = write_config("mode = \"two_player\"\nai_mark = \"X\"\n");
        let mut args = cli(Some(file.path().to_path_buf()));
        args.mode = Some(ModeArg::Single);
        args.ai = Some(MarkArg::O);

        let config = TuiConfig::resolve(&args).unwrap();
        assert_eq!(
            config.game_settings(),
            GameSettings::new(GameMode::SinglePlayer, Mark::O)
        );
    }

    #[test]
    fn test_no_file_means_defaults() {
        assert_eq!(TuiConfig::resolve(&cli(None)).unwrap(), TuiConfig::default());
    }
}
