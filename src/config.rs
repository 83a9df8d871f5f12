use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game;

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// The file was missing; built-in defaults are in use
    Defaults { missing: PathBuf },
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Display names for the two markers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub x: String,
    pub o: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            x: "Player 1".to_string(),
            o: "Player 2".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiMode {
    /// Full-screen terminal UI
    #[default]
    Tui,
    /// Line-based prompt loop
    Console,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub mode: UiMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error
    pub level: String,
    /// Log destination. Without it the TUI logs nowhere and the console logs to stderr.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed `level`
    pub fn level(&self) -> Result<tracing::Level, ConfigError> {
        self.level.parse().map_err(|_| {
            ConfigError::Validation(format!(
                "logging.level '{}' is not one of trace, debug, info, warn, error",
                self.level
            ))
        })
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist. The returned source tells the caller which happened, so
    /// it can report the fallback once logging is up.
    pub fn load_or_default(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if path.exists() {
            Ok((Self::load(path)?, ConfigSource::File(path.to_path_buf())))
        } else {
            Ok((
                Self::default(),
                ConfigSource::Defaults {
                    missing: path.to_path_buf(),
                },
            ))
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_name("players.x", &self.players.x)?;
        validate_name("players.o", &self.players.o)?;
        if self.players.x.trim() == self.players.o.trim() {
            return Err(ConfigError::Validation(
                "players.x and players.o must differ".into(),
            ));
        }

        self.logging.level()?;

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

fn validate_name(key: &str, name: &str) -> Result<(), ConfigError> {
    game::validate_name(name)
        .map(|_| ())
        .map_err(|e| ConfigError::Validation(format!("{key}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.ui.mode, UiMode::Tui);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[players]
x = "Ada"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.players.x, "Ada");
        assert_eq!(config.players.o, "Player 2");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.players.x, "Player 1");
        assert_eq!(config.ui.mode, UiMode::Tui);
    }

    #[test]
    fn test_console_mode_parses() {
        let config: AppConfig = toml::from_str("[ui]\nmode = \"console\"\n").unwrap();
        assert_eq!(config.ui.mode, UiMode::Console);
    }

    #[test]
    fn test_unknown_mode_is_a_parse_error() {
        assert!(toml::from_str::<AppConfig>("[ui]\nmode = \"dom\"\n").is_err());
    }

    #[test]
    fn test_validation_rejects_empty_name() {
        let mut config = AppConfig::default();
        config.players.o = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_long_name() {
        let mut config = AppConfig::default();
        config.players.x = "x".repeat(game::MAX_NAME_LEN + 1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_identical_names() {
        let mut config = AppConfig::default();
        config.players.x = "Sam".to_string();
        config.players.o = " Sam".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_level() {
        let mut config = AppConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_level_parses() {
        let mut config = AppConfig::default();
        config.logging.level = "debug".to_string();
        assert_eq!(config.logging.level().unwrap(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let path = Path::new("nonexistent_config.toml");
        let (config, source) = AppConfig::load_or_default(path).unwrap();
        assert_eq!(config.players.o, "Player 2");
        assert_eq!(
            source,
            ConfigSource::Defaults {
                missing: path.to_path_buf()
            }
        );
    }

    #[test]
    fn test_load_or_default_reports_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tictactoe.toml");
        std::fs::write(&path, "[players]\nx = \"Ada\"\n").unwrap();

        let (config, source) = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(config.players.x, "Ada");
        assert_eq!(source, ConfigSource::File(path));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tictactoe.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[players]
o = "Grace"

[logging]
level = "warn"
file = "game.log"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.players.o, "Grace");
        assert_eq!(config.players.x, "Player 1");
        assert_eq!(config.logging.file, Some(PathBuf::from("game.log")));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[players]\nx = \"\"\n").unwrap();

        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
