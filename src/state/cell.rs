//! Screen cell
//!
//! One styled position in the tracked grid.

use serde::{Deserialize, Serialize};

/// A single cell in the screen grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The character occupying this cell, or empty for a blank cell
    pub data: String,
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    /// Text style attributes
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            data: String::new(),
            fg: Color::Default,
            bg: Color::Default,
            style: Style::default(),
        }
    }
}

impl Cell {
    /// Check if this cell is blank with default styling
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Named ANSI colors plus the "default" sentinel.
///
/// Serializes as the lowercase color name so snapshots carry `"red"`,
/// `"bright_blue"`, `"default"` and so on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Map a standard palette index (0-15) to a named color
    pub fn from_index(index: u8) -> Option<Color> {
        match index {
            0 => Some(Color::Black),
            1 => Some(Color::Red),
            2 => Some(Color::Green),
            3 => Some(Color::Yellow),
            4 => Some(Color::Blue),
            5 => Some(Color::Magenta),
            6 => Some(Color::Cyan),
            7 => Some(Color::White),
            8 => Some(Color::BrightBlack),
            9 => Some(Color::BrightRed),
            10 => Some(Color::BrightGreen),
            11 => Some(Color::BrightYellow),
            12 => Some(Color::BrightBlue),
            13 => Some(Color::BrightMagenta),
            14 => Some(Color::BrightCyan),
            15 => Some(Color::BrightWhite),
            _ => None,
        }
    }

    /// The color's lowercase name, matching its serialized form
    pub fn name(&self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::BrightBlack => "bright_black",
            Color::BrightRed => "bright_red",
            Color::BrightGreen => "bright_green",
            Color::BrightYellow => "bright_yellow",
            Color::BrightBlue => "bright_blue",
            Color::BrightMagenta => "bright_magenta",
            Color::BrightCyan => "bright_cyan",
            Color::BrightWhite => "bright_white",
        }
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl Style {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_default() {
        let cell = Cell::default();
        assert!(cell.is_empty());
        assert_eq!(cell.fg, Color::Default);
        assert_eq!(cell.bg, Color::Default);
        assert!(!cell.style.bold);
    }

    #[test]
    fn test_color_from_index() {
        assert_eq!(Color::from_index(1), Some(Color::Red));
        assert_eq!(Color::from_index(7), Some(Color::White));
        assert_eq!(Color::from_index(9), Some(Color::BrightRed));
        assert_eq!(Color::from_index(16), None);
    }

    #[test]
    fn test_color_name_matches_serialization() {
        let json = serde_json::to_string(&Color::BrightRed).unwrap();
        assert_eq!(json, format!("\"{}\"", Color::BrightRed.name()));
        assert_eq!(Color::Default.name(), "default");
        assert_eq!(Color::Red.name(), "red");
    }

    #[test]
    fn test_style_reset() {
        let mut style = Style {
            bold: true,
            underline: true,
            ..Default::default()
        };
        style.reset();
        assert_eq!(style, Style::default());
    }
}
