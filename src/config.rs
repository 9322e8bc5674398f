//! Configuration module for heft.
//!
//! Reads the optional `heft.toml` into the [Config] struct. Every section is
//! optional and falls back to internal defaults; heft never writes this file.
//!
//! Submodules:
//! - [load]: top-level [Config], file location and parsing.
//! - [general]: row limit and delete mode.
//! - [display]: table column widths, borders and the help line.
//! - [theme]: colors for the table, status line and confirm dialog.
//! - [input]: key bindings for every action.
//! - [log]: optional file logging.

pub mod display;
pub mod general;
pub mod input;
pub mod load;
pub mod log;
pub mod theme;

pub use display::{BorderShape, Display};
pub use general::{General, InternalGeneral};
pub use input::Keys;
pub use load::{Config, RawConfig};
pub use log::LogConfig;
pub use theme::{ColorPair, Theme};
