//! Screen grid
//!
//! A width × height array of cells. Every row always holds exactly `width`
//! cells and there are always exactly `height` rows; resize enforces this
//! synchronously.

use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// The tracked screen area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            rows: (0..height).map(|_| vec![Cell::default(); width]).collect(),
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get a reference to a cell
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Get a mutable reference to a cell
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.rows.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Resize in place, preserving overlapping cells at identical indices.
    /// Grown cells are default; cells beyond the new bounds are discarded.
    pub fn resize(&mut self, width: usize, height: usize) {
        for row in &mut self.rows {
            row.resize(width, Cell::default());
        }
        self.rows.resize_with(height, || vec![Cell::default(); width]);
        self.width = width;
        self.height = height;
    }

    /// Reset a cell to the default blank cell
    pub fn erase_cell(&mut self, row: usize, col: usize) {
        if let Some(cell) = self.cell_mut(row, col) {
            *cell = Cell::default();
        }
    }

    /// Reset a column range within one row (end exclusive, clamped)
    pub fn erase_row_range(&mut self, row: usize, start: usize, end: usize) {
        if let Some(r) = self.rows.get_mut(row) {
            let end = end.min(r.len());
            for cell in &mut r[start.min(end)..end] {
                *cell = Cell::default();
            }
        }
    }

    /// Reset every cell in the grid
    pub fn erase_all(&mut self) {
        for row in &mut self.rows {
            for cell in row {
                *cell = Cell::default();
            }
        }
    }

    /// Clone the cells row-major, for snapshots
    pub fn to_buffer(&self) -> Vec<Vec<Cell>> {
        self.rows.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::cell::Color;

    #[test]
    fn test_grid_new_dimensions() {
        let grid = Grid::new(80, 24);
        assert_eq!(grid.width(), 80);
        assert_eq!(grid.height(), 24);
        assert!(grid.cell(23, 79).is_some());
        assert!(grid.cell(24, 0).is_none());
        assert!(grid.cell(0, 80).is_none());
    }

    #[test]
    fn test_grid_cell_access() {
        let mut grid = Grid::new(10, 5);
        grid.cell_mut(2, 3).unwrap().data = "A".to_string();
        assert_eq!(grid.cell(2, 3).unwrap().data, "A");
    }

    #[test]
    fn test_resize_preserves_overlap() {
        let mut grid = Grid::new(10, 5);
        grid.cell_mut(1, 1).unwrap().data = "X".to_string();
        grid.cell_mut(4, 9).unwrap().data = "Y".to_string();

        grid.resize(6, 3);
        assert_eq!(grid.width(), 6);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.cell(1, 1).unwrap().data, "X");
        assert!(grid.cell(4, 9).is_none());

        grid.resize(12, 6);
        assert_eq!(grid.cell(1, 1).unwrap().data, "X");
        assert!(grid.cell(5, 11).unwrap().is_empty());
    }

    #[test]
    fn test_erase_row_range() {
        let mut grid = Grid::new(5, 1);
        for col in 0..5 {
            let cell = grid.cell_mut(0, col).unwrap();
            cell.data = "x".to_string();
            cell.fg = Color::Red;
        }
        grid.erase_row_range(0, 1, 3);
        assert_eq!(grid.cell(0, 0).unwrap().data, "x");
        assert!(grid.cell(0, 1).unwrap().is_empty());
        assert_eq!(grid.cell(0, 1).unwrap().fg, Color::Default);
        assert!(grid.cell(0, 2).unwrap().is_empty());
        assert_eq!(grid.cell(0, 3).unwrap().data, "x");
    }

    #[test]
    fn test_erase_row_range_clamps_end() {
        let mut grid = Grid::new(3, 1);
        grid.erase_row_range(0, 0, 100);
        grid.erase_row_range(5, 0, 1);
    }

    #[test]
    fn test_erase_all() {
        let mut grid = Grid::new(3, 2);
        grid.cell_mut(1, 2).unwrap().data = "q".to_string();
        grid.erase_all();
        assert!(grid.cell(1, 2).unwrap().is_empty());
    }
}
