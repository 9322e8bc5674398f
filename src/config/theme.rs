//! Theme configuration options for heft
//!
//! This module defines the `[theme]` table. Every color accepts a name
//! ("red", "darkgray"), a hex code ("#RRGGBB" or "#RGB"), a 0-255 palette index,
//! or "default" to keep the terminal color.

use crate::utils::parse_color;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

/// Theme configuration options
/// # Examples
/// ```toml
/// [theme.selection]
/// fg = "229"
/// bg = "57"
/// [theme.header]
/// fg = "240"
/// ```
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Theme {
    header: ColorPair,
    border: ColorPair,
    entry: ColorPair,
    selection: ColorPair,
    path: ColorPair,
    status_line: ColorPair,
    error: ColorPair,
    help: ColorPair,
    dialog: ColorPair,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            header: ColorPair::default(),
            border: ColorPair {
                fg: Color::Indexed(240),
                ..ColorPair::default()
            },
            entry: ColorPair::default(),
            selection: ColorPair {
                fg: Color::Indexed(229),
                bg: Color::Indexed(57),
            },
            path: ColorPair {
                fg: Color::Magenta,
                ..ColorPair::default()
            },
            status_line: ColorPair::default(),
            error: ColorPair {
                fg: Color::Red,
                ..ColorPair::default()
            },
            help: ColorPair {
                fg: Color::Indexed(241),
                ..ColorPair::default()
            },
            dialog: ColorPair {
                fg: Color::Red,
                ..ColorPair::default()
            },
        }
    }
}

impl Theme {
    pub fn header_style(&self) -> Style {
        self.header.as_style()
    }

    pub fn border_style(&self) -> Style {
        self.border.as_style()
    }

    pub fn entry_style(&self) -> Style {
        self.entry.as_style()
    }

    /// The selection bar. Bold is not applied, matching the header.
    pub fn selection_style(&self) -> Style {
        self.selection.as_style().remove_modifier(Modifier::BOLD)
    }

    pub fn path_style(&self) -> Style {
        self.path.as_style()
    }

    pub fn status_line_style(&self) -> Style {
        self.status_line.as_style()
    }

    pub fn error_style(&self) -> Style {
        self.error.as_style()
    }

    pub fn help_style(&self) -> Style {
        self.help.as_style()
    }

    /// Border and title color of the confirm dialog.
    pub fn dialog_style(&self) -> Style {
        self.dialog.as_style()
    }
}

/// ColorPair struct to hold foreground and background colors.
/// Used throughout the theme configuration.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    #[serde(default, deserialize_with = "deserialize_color_field")]
    fg: Color,
    #[serde(default, deserialize_with = "deserialize_color_field")]
    bg: Color,
}

/// Sets both foreground and background to Color::Reset
impl Default for ColorPair {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

impl ColorPair {
    pub fn as_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }
}

fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(parse_color(&s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_overrides_from_toml() -> Result<(), Box<dyn std::error::Error>> {
        let theme: Theme = toml::from_str(
            r##"
            [selection]
            fg = "#ffffff"
            bg = "12"

            [error]
            fg = "yellow"
            "##,
        )?;

        assert_eq!(
            theme.selection_style(),
            Style::default()
                .fg(Color::Rgb(255, 255, 255))
                .bg(Color::Indexed(12))
                .remove_modifier(Modifier::BOLD)
        );
        assert_eq!(theme.error_style(), Style::default().fg(Color::Yellow).bg(Color::Reset));
        // Untouched tables keep their defaults.
        assert_eq!(
            theme.border_style(),
            Style::default().fg(Color::Indexed(240)).bg(Color::Reset)
        );
        Ok(())
    }
}
