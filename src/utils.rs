//! Miscellaneous utility functions for heft.
//!
//! - [helpers]: color parsing and home directory display helpers.
//! - [cli]: command-line argument handling and help text.

pub mod cli;
pub mod helpers;

pub use helpers::{get_home, parse_color, shorten_home_path};
