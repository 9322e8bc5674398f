//! The main config loading module for heft.
//!
//! Handles loading and deserializing settings from `heft.toml`.
//!
//! Provides the main [Config] struct, as well as the internal [RawConfig] used for
//! parsing. A missing file means internal defaults; a broken file is reported
//! on stderr and also falls back to defaults.

use crate::config::{Display, General, InternalGeneral, Keys, LogConfig, Theme};
use crate::error::ConfigError;
use crate::utils::get_home;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Raw configuration as read from the toml file
/// This struct is deserialized directly from the toml file
/// and is then converted into the main [Config] struct.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    display: Display,
    theme: Theme,
    keys: Keys,
    log: LogConfig,
}

/// Main configuration struct for heft
/// This struct holds the processed configuration options.
#[derive(Debug)]
pub struct Config {
    general: InternalGeneral,
    display: Display,
    theme: Theme,
    keys: Keys,
    log: LogConfig,
}

/// Conversion from RawConfig to Config
impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: InternalGeneral::from(raw.general),
            display: raw.display,
            theme: raw.theme,
            keys: raw.keys,
            log: raw.log,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// Called by the entry point before the terminal is set up, so problems
    /// can still be printed to stderr.
    pub fn load() -> Self {
        let path = Self::default_path();

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[heft] {e}. Using internal defaults.");
                Self::default()
            }
        }
    }

    /// Reads and parses a config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let raw = toml::from_str::<RawConfig>(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(raw.into())
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &InternalGeneral {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    #[inline]
    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    /// Determine the default configuration file path.
    /// Checks the HEFT_CONFIG environment variable first,
    /// Checks for XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/heft/heft.toml,
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("HEFT_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("heft/heft.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/heft/heft.toml");
        }
        PathBuf::from("heft.toml")
    }
}

/// Default configuration options
impl Default for Config {
    fn default() -> Self {
        RawConfig::default().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn partial_file_keeps_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        writeln!(
            file,
            r#"
            [general]
            limit = 25

            [display]
            filename_width = 40
            "#
        )?;

        let config = Config::load_from(file.path())?;
        assert_eq!(config.general().limit(), 25);
        assert!(!config.general().move_to_trash());
        assert_eq!(config.display().filename_width(), 40);
        assert_eq!(config.display().directory_width(), 50);
        assert_eq!(config.keys().quit(), Keys::default().quit());
        assert!(!config.log().is_enabled());
        Ok(())
    }

    #[test]
    fn limit_out_of_range_is_clamped() -> Result<(), Box<dyn std::error::Error>> {
        let raw: RawConfig = toml::from_str("[general]\nlimit = 0")?;
        let config = Config::from(raw);
        assert_eq!(config.general().limit(), 1);
        Ok(())
    }

    #[test]
    fn invalid_toml_is_parse_error() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "[general\nlimit = ")?;

        let result = Config::load_from(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
        Ok(())
    }

    #[test]
    fn missing_file_is_read_error() {
        let result = Config::load_from(Path::new("/path/does/not/exist/heft.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
