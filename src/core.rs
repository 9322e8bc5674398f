//! Core runtime logic for heft.
//!
//! This module contains the non-UI “engine” pieces used by the application:
//! - [fm]: recursive directory scan into [FileEntry] values (see [scan_dir]).
//! - [rank]: ordering by size and truncation to the top N (see [rank()]).
//! - [formatter]: human readable sizes and display rows (see [human_readable], [DisplayRow]).
//! - [delete]: the file removal backends behind the [Deleter] trait.
//! - [terminal]: terminal setup/teardown and the crossterm/ratatui [Viewer](crate::app::Viewer).

pub mod delete;
pub mod fm;
pub mod formatter;
pub mod rank;
pub mod terminal;

pub use delete::{Deleter, MoveToTrash, RemoveFile, deleter_for};
pub use fm::{FileEntry, scan_dir};
pub use formatter::{DisplayRow, display_rows, human_readable, sanitize_to_exact_width};
pub use rank::rank;
