//! Board module - manages the settled-cell grid
//!
//! The board is a 10x24 grid: 4 hidden spawn rows on top of a 20-row visible
//! playfield. Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..23
//! (top to bottom).
//!
//! Anything outside the grid reads as solid, so collision checks never need a
//! separate bounds test.

use crate::types::{Cell, PaletteColor, BOARD_HEIGHT, BOARD_WIDTH, HIDDEN_ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 24 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Value returned by [`Board::get`] for out-of-bounds coordinates.
    ///
    /// Black is not a piece color, so it never matches a settled block.
    pub const SOLID: Cell = Some(PaletteColor::Black);

    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board, hidden rows included
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns [`Board::SOLID`] if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Cell {
        match Self::index(x, y) {
            Some(idx) => self.cells[idx],
            None => Self::SOLID,
        }
    }

    /// Set cell at position (x, y)
    /// Out-of-bounds writes are ignored
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) {
        if let Some(idx) = Self::index(x, y) {
            self.cells[idx] = cell;
        }
    }

    /// Check if position is filled (out of bounds counts as filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.get(x, y).is_some()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Cells of one row; empty when `y` is outside the board
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = BOARD_WIDTH as usize;
        let start = y.saturating_mul(width);
        self.cells
            .get(start..start.saturating_add(width))
            .unwrap_or(&[])
    }

    /// Remove row `y`, shift all rows above down and empty the top row.
    fn remove_row(&mut self, y: usize) {
        let width = BOARD_WIDTH as usize;

        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(None);
    }

    /// Clear all full rows and return how many were removed.
    ///
    /// Scans top to bottom. After a removal the rows above have shifted into
    /// the same index, so that index is checked again before moving on.
    pub fn clear_lines(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = 0;
        while y < BOARD_HEIGHT as usize {
            if self.is_row_full(y) {
                self.remove_row(y);
                cleared += 1;
            } else {
                y += 1;
            }
        }
        cleared
    }

    /// True if anything is settled in the hidden spawn rows.
    pub fn has_blocks_in_hidden(&self) -> bool {
        (0..HIDDEN_ROWS as usize).any(|y| self.row(y).iter().any(|cell| cell.is_some()))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty every cell
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
