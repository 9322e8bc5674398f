//! Display configuration options for heft
//!
//! This module defines the `[display]` table: column widths of the ranked table,
//! border shape and whether the help line is drawn.

use ratatui::widgets::BorderType;
use serde::Deserialize;

/// Display configuration options
///
/// Column widths are in terminal cells. Filenames and directories longer than
/// their column are clipped.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Display {
    index_width: u16,
    filename_width: u16,
    directory_width: u16,
    size_width: u16,
    borders: bool,
    border_shape: BorderShape,
    help_line: bool,
}

/// Public methods for accessing display configuration options
impl Display {
    pub fn index_width(&self) -> u16 {
        self.index_width
    }

    pub fn filename_width(&self) -> u16 {
        self.filename_width
    }

    pub fn directory_width(&self) -> u16 {
        self.directory_width
    }

    pub fn size_width(&self) -> u16 {
        self.size_width
    }

    pub fn borders(&self) -> bool {
        self.borders
    }

    pub fn border_shape(&self) -> &BorderShape {
        &self.border_shape
    }

    pub fn help_line(&self) -> bool {
        self.help_line
    }

    /// Widths of the `#`, `Filename`, `Directory` and `Size` columns, in order.
    pub fn column_widths(&self) -> [u16; 4] {
        [
            self.index_width,
            self.filename_width,
            self.directory_width,
            self.size_width,
        ]
    }
}

impl Default for Display {
    fn default() -> Self {
        Display {
            index_width: 5,
            filename_width: 30,
            directory_width: 50,
            size_width: 15,
            borders: true,
            border_shape: BorderShape::Square,
            help_line: true,
        }
    }
}

/// Border shape options
/// This enum defines the different border shapes that can be used in the UI
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BorderShape {
    Square,
    Rounded,
    Double,
    Thick,
}

/// Public methods for accessing border shape options
impl BorderShape {
    pub fn as_border_type(&self) -> BorderType {
        match self {
            BorderShape::Square => BorderType::Plain,
            BorderShape::Rounded => BorderType::Rounded,
            BorderShape::Double => BorderType::Double,
            BorderShape::Thick => BorderType::Thick,
        }
    }
}
