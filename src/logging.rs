//! File logging for heft.
//!
//! Structured logging through `tracing`. The terminal is owned by the table
//! view, so events are only ever written to a log file, and only when the
//! `[log]` table sets a level.

use crate::config::LogConfig;
use crate::error::ConfigError;

use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber described by `config`.
///
/// Returns `Ok(false)` when logging is disabled, `Ok(true)` once installed.
/// Must run before the terminal enters raw mode so errors can be printed.
pub fn init_logging(config: &LogConfig) -> Result<bool, ConfigError> {
    if !config.is_enabled() {
        return Ok(false);
    }

    let filter = EnvFilter::try_new(config.level())
        .map_err(|_| ConfigError::LogLevel(config.level().to_string()))?;

    let Some(path) = config.file() else {
        return Ok(false);
    };

    let open = || -> std::io::Result<fs::File> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(&path)
    };
    let file = open().map_err(|source| ConfigError::LogFile {
        path: path.clone(),
        source,
    })?;

    let installed = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(file = %path.display(), "logging started");
    }
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_config_installs_nothing() -> Result<(), Box<dyn std::error::Error>> {
        assert!(!init_logging(&LogConfig::default())?);
        Ok(())
    }

    #[test]
    fn bad_level_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let config: LogConfig = toml::from_str("level = \"heft=verbose\"")?;
        let result = init_logging(&config);
        assert!(matches!(result, Err(ConfigError::LogLevel(_))));
        Ok(())
    }
}
