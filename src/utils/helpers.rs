//! Helpers for heft.
//!
//! - Color parsing from names, hex codes or palette indices
//! - Locating the home directory
//! - Displaying home directories as "~" in file paths
//!
//! These helpers are used by the config and ui modules.

use ratatui::style::Color;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Parses a string (color name, hex or palette index) into a ratatui::style::Color
///
/// Supports standard names (red, green, etc.), hex values (#RRGGBB or #RGB)
/// and 256-color palette indices ("57", "229").
/// Anything unrecognised falls back to [Color::Reset].
pub fn parse_color(s: &str) -> Color {
    let s = s.trim();
    match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        _ => {
            if let Ok(idx) = s.parse::<u8>() {
                return Color::Indexed(idx);
            }
            if let Some(color) = s.strip_prefix('#') {
                let expanded = match color.len() {
                    6 => Some(color.to_string()),
                    3 => Some(
                        color
                            .chars()
                            .map(|c| format!("{}{}", c, c))
                            .collect::<String>(),
                    ),
                    _ => None,
                };
                if let Some(hex) = expanded
                    && let Ok(rgb) = u32::from_str_radix(&hex, 16)
                {
                    return Color::Rgb(
                        ((rgb >> 16) & 0xFF) as u8,
                        ((rgb >> 8) & 0xFF) as u8,
                        (rgb & 0xFF) as u8,
                    );
                }
            }
            // fallback
            Color::Reset
        }
    }
}

#[inline]
pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Util function to shorten home directory to ~.
/// Is used by the path line of the table view.
pub fn shorten_home_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if let Some(home_dir) = get_home()
        && let Ok(stripped) = path.strip_prefix(&home_dir)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        } else {
            let mut short = stripped.display().to_string();
            if short.starts_with(MAIN_SEPARATOR) {
                short.remove(0);
            }
            return format!("~{}{}", MAIN_SEPARATOR, short);
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_named_hex_and_indexed() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("default"), Color::Reset);
        assert_eq!(parse_color("#ff8000"), Color::Rgb(255, 128, 0));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("57"), Color::Indexed(57));
        assert_eq!(parse_color(" 229 "), Color::Indexed(229));
    }

    #[test]
    fn parse_garbage_falls_back_to_reset() {
        assert_eq!(parse_color("not-a-color"), Color::Reset);
        assert_eq!(parse_color("#12345"), Color::Reset);
        assert_eq!(parse_color("256"), Color::Reset);
    }

    #[test]
    fn shorten_home() {
        if let Some(home) = get_home() {
            assert_eq!(shorten_home_path(&home), "~");
            let inner = home.join("projects");
            assert_eq!(
                shorten_home_path(&inner),
                format!("~{}projects", MAIN_SEPARATOR)
            );
        }
        assert_eq!(shorten_home_path("/definitely/not/home"), "/definitely/not/home");
    }
}
