//! Cursor state
//!
//! Position plus the active pen attributes applied to subsequently written
//! cells.

use super::cell::{Color, Style};

/// Cursor position and active attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Current row (0 = top)
    pub row: usize,
    /// Current column (0 = left)
    pub col: usize,
    /// Foreground for newly written cells
    pub fg: Color,
    /// Background for newly written cells
    pub bg: Color,
    /// Style for newly written cells
    pub style: Style,
}

impl Cursor {
    /// Reset pen attributes to defaults, leaving the position alone
    pub fn reset_pen(&mut self) {
        self.fg = Color::Default;
        self.bg = Color::Default;
        self.style.reset();
    }

    /// Clamp the position into a width × height grid
    pub fn clamp(&mut self, width: usize, height: usize) {
        self.col = self.col.min(width.saturating_sub(1));
        self.row = self.row.min(height.saturating_sub(1));
    }
}
