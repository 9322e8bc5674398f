//! Logging configuration options for heft
//!
//! The `[log]` table. Logging is off unless a level is set, and always goes to a
//! file since the terminal belongs to the table view.

use serde::Deserialize;
use std::path::PathBuf;

/// # Examples
/// ```toml
/// [log]
/// level = "debug"
/// file = "/tmp/heft.log"
/// ```
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct LogConfig {
    level: String,
    file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "off".into(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Filter directive, e.g. "info" or "heft_tui=debug".
    #[inline]
    pub fn level(&self) -> &str {
        self.level.trim()
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        let level = self.level();
        !level.is_empty() && !level.eq_ignore_ascii_case("off")
    }

    /// Configured log file, or `<cache_dir>/heft/heft.log`.
    pub fn file(&self) -> Option<PathBuf> {
        self.file
            .clone()
            .or_else(|| dirs::cache_dir().map(|dir| dir.join("heft").join("heft.log")))
    }
}
