//! Terminal state tracker
//!
//! Interprets a cleaned byte stream as terminal output, maintaining a styled
//! screen grid, cursor, and pen state, and producing change-flagged
//! snapshots for incremental rendering.

use tracing::{debug, trace};

use super::cell::{Cell, Color};
use super::cursor::Cursor;
use super::grid::Grid;
use super::parser::{Action, ControlCode, CsiAction, Parser};
use super::snapshot::Snapshot;
use crate::error::{Error, Result};

const TAB_WIDTH: usize = 8;

/// Tracks the screen state produced by a stream of terminal output.
///
/// One tracker per session; the caller serializes `feed`, `resize`, and
/// `snapshot` (none of them are internally synchronized).
#[derive(Debug)]
pub struct Tracker {
    grid: Grid,
    cursor: Cursor,
    parser: Parser,
    /// Grid as of the previous snapshot, for change detection.
    /// `None` until the first snapshot is taken, so it always reports a
    /// change against the implicit "nothing observed" baseline.
    last_observed: Option<Grid>,
    /// Set by resize so the next snapshot reports a change even when the
    /// grid contents end up identical
    force_changed: bool,
}

impl Tracker {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            cursor: Cursor::default(),
            parser: Parser::new(),
            last_observed: None,
            force_changed: false,
        }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Interpret a chunk of cleaned output.
    ///
    /// Malformed and unsupported sequences are absorbed silently; the only
    /// error is a structural violation where the cursor cannot be reconciled
    /// with the grid.
    pub fn feed(&mut self, data: &[u8]) -> Result<()> {
        let actions = self.parser.feed(data);
        for action in actions {
            match action {
                Action::Print(c) => self.print(c)?,
                Action::Control(code) => self.control(code),
                Action::Csi(csi) => self.apply_csi(&csi),
            }
        }
        Ok(())
    }

    /// Change the grid dimensions, preserving overlapping cells.
    ///
    /// Always marks the state changed, even when the dimensions are the same
    /// as before.
    pub fn resize(&mut self, width: usize, height: usize) {
        trace!(width, height, "resizing tracked screen");
        self.grid.resize(width, height);
        self.cursor.clamp(width, height);
        self.force_changed = true;
    }

    /// Take an immutable snapshot of the screen.
    ///
    /// `has_changes` is true iff the grid or its dimensions differ from the
    /// grid as of the previous `snapshot` call; taking a snapshot resets the
    /// comparison baseline.
    pub fn snapshot(&mut self) -> Snapshot {
        let has_changes = self.force_changed
            || self
                .last_observed
                .as_ref()
                .map_or(true, |seen| *seen != self.grid);
        self.force_changed = false;
        self.last_observed = Some(self.grid.clone());

        Snapshot {
            width: self.grid.width(),
            height: self.grid.height(),
            buffer: self.grid.to_buffer(),
            has_changes,
        }
    }

    fn print(&mut self, c: char) -> Result<()> {
        let (row, col) = (self.cursor.row, self.cursor.col);
        let (width, height) = (self.grid.width(), self.grid.height());

        let cell = self
            .grid
            .cell_mut(row, col)
            .ok_or(Error::OutOfBounds {
                row,
                col,
                width,
                height,
            })?;
        *cell = Cell {
            data: c.to_string(),
            fg: self.cursor.fg,
            bg: self.cursor.bg,
            style: self.cursor.style,
        };

        if col + 1 < width {
            self.cursor.col = col + 1;
        } else {
            // Wrap to the next row; on the last row stay put (no scrolling)
            self.cursor.col = 0;
            if row + 1 < height {
                self.cursor.row = row + 1;
            }
        }
        Ok(())
    }

    fn control(&mut self, code: ControlCode) {
        match code {
            ControlCode::CarriageReturn => self.cursor.col = 0,
            ControlCode::LineFeed => {
                if self.cursor.row + 1 < self.grid.height() {
                    self.cursor.row += 1;
                }
            }
            ControlCode::Backspace => self.cursor.col = self.cursor.col.saturating_sub(1),
            ControlCode::Tab => {
                let next_stop = (self.cursor.col / TAB_WIDTH + 1) * TAB_WIDTH;
                self.cursor.col = next_stop.min(self.grid.width().saturating_sub(1));
            }
        }
    }

    fn apply_csi(&mut self, csi: &CsiAction) {
        if csi.private {
            // DEC private modes (cursor visibility, alt screen, ...) do not
            // affect cell content
            return;
        }
        match csi.final_char {
            'm' => self.apply_sgr(&csi.params),
            'H' | 'f' => {
                self.cursor.row = usize::from(csi.param(0, 1).max(1) - 1);
                self.cursor.col = usize::from(csi.param(1, 1).max(1) - 1);
                self.cursor.clamp(self.grid.width(), self.grid.height());
            }
            'A' => {
                let n = usize::from(csi.param(0, 1).max(1));
                self.cursor.row = self.cursor.row.saturating_sub(n);
            }
            'B' => {
                let n = usize::from(csi.param(0, 1).max(1));
                self.cursor.row = (self.cursor.row + n).min(self.grid.height().saturating_sub(1));
            }
            'C' => {
                let n = usize::from(csi.param(0, 1).max(1));
                self.cursor.col = (self.cursor.col + n).min(self.grid.width().saturating_sub(1));
            }
            'D' => {
                let n = usize::from(csi.param(0, 1).max(1));
                self.cursor.col = self.cursor.col.saturating_sub(n);
            }
            'J' => self.erase_display(csi.param(0, 0)),
            'K' => self.erase_line(csi.param(0, 0)),
            _ => {
                debug!(final_char = %csi.final_char, "ignoring unsupported CSI");
            }
        }
    }

    fn erase_display(&mut self, mode: u16) {
        let (row, col) = (self.cursor.row, self.cursor.col);
        let width = self.grid.width();
        match mode {
            0 => {
                self.grid.erase_row_range(row, col, width);
                for r in row + 1..self.grid.height() {
                    self.grid.erase_row_range(r, 0, width);
                }
            }
            1 => {
                for r in 0..row {
                    self.grid.erase_row_range(r, 0, width);
                }
                self.grid.erase_row_range(row, 0, col + 1);
            }
            2 | 3 => self.grid.erase_all(),
            _ => {}
        }
    }

    fn erase_line(&mut self, mode: u16) {
        let (row, col) = (self.cursor.row, self.cursor.col);
        let width = self.grid.width();
        match mode {
            0 => self.grid.erase_row_range(row, col, width),
            1 => self.grid.erase_row_range(row, 0, col + 1),
            2 => self.grid.erase_row_range(row, 0, width),
            _ => {}
        }
    }

    fn apply_sgr(&mut self, params: &[u16]) {
        if params.is_empty() {
            self.cursor.reset_pen();
            return;
        }
        let mut i = 0;
        while i < params.len() {
            match params[i] {
                0 => self.cursor.reset_pen(),
                1 => self.cursor.style.bold = true,
                3 => self.cursor.style.italic = true,
                4 => self.cursor.style.underline = true,
                7 => self.cursor.style.reverse = true,
                22 => self.cursor.style.bold = false,
                23 => self.cursor.style.italic = false,
                24 => self.cursor.style.underline = false,
                27 => self.cursor.style.reverse = false,
                30..=37 => self.cursor.fg = named(params[i] - 30),
                39 => self.cursor.fg = Color::Default,
                40..=47 => self.cursor.bg = named(params[i] - 40),
                49 => self.cursor.bg = Color::Default,
                90..=97 => self.cursor.fg = named(params[i] - 90 + 8),
                100..=107 => self.cursor.bg = named(params[i] - 100 + 8),
                38 | 48 => {
                    // Extended color: consume the argument group so the
                    // following codes stay aligned, but keep the pen as-is
                    // (only the named palette is tracked)
                    i += match params.get(i + 1) {
                        Some(5) => 2,
                        Some(2) => 4,
                        _ => params.len(),
                    };
                }
                other => {
                    debug!(code = other, "ignoring unsupported SGR code");
                }
            }
            i += 1;
        }
    }
}

fn named(index: u16) -> Color {
    Color::from_index(index as u8).unwrap_or(Color::Default)
}
