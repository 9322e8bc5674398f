//! The boundary between heft's state and whatever draws it.
//!
//! [Viewer] is implemented by the ratatui terminal view
//! ([crate::core::terminal::TerminalViewer]) and by scripted viewers in tests.
//! The app state only ever hands it a [ViewModel] and asks it for the next event.

use crate::core::DisplayRow;

use crossterm::event::KeyEvent;
use std::io;
use std::path::Path;

/// Something that can show the ranked table and report key presses.
pub trait Viewer {
    /// Draws the table, status line and help line.
    fn render(&mut self, view: &ViewModel<'_>) -> io::Result<()>;

    /// Draws the view with the yes/no prompt on top.
    fn show_confirmation(&mut self, view: &ViewModel<'_>, prompt: &str) -> io::Result<()>;

    /// Blocks until the next event the app should react to.
    fn next_event(&mut self) -> io::Result<ViewerEvent>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerEvent {
    Key(KeyEvent),
    /// Size changed or the screen needs repainting.
    Redraw,
    /// Input is gone; the app should stop.
    Closed,
}

/// Totals of the last full scan, before ranking cut it down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanSummary {
    pub files: usize,
    pub bytes: u64,
}

/// One-line message shown under the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    text: String,
    is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            is_error: true,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.is_error
    }
}

/// A key (or keys) and what it does, for the help line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub keys: String,
    pub description: &'static str,
}

/// Everything a viewer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct ViewModel<'a> {
    pub root: &'a Path,
    pub rows: &'a [DisplayRow],
    pub selected: Option<usize>,
    pub summary: ScanSummary,
    pub status: Option<&'a StatusMessage>,
    pub help: &'a [HelpEntry],
}
