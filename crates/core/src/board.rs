//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of the
//! piece that was locked there. Uses a flat array for cache locality and
//! zero-allocation.
//!
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom). Rows above the board (y < 0) are open air: they read as
//! empty and never collide, so pieces may overhang the top edge. Columns
//! outside 0..9 and rows at or below the floor are solid.

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// A board cell: `None` is empty, `Some(kind)` is a locked cell of that piece
pub type Cell = Option<PieceKind>;

/// Row indices of full rows, ascending
pub type FullRows = ArrayVec<usize, HEIGHT>;

/// Result of a board lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellQuery {
    /// In range (or above the top edge) and unoccupied
    Empty,
    /// In range and holding a locked cell
    Occupied(PieceKind),
    /// Left of, right of, or below the board
    OutOfBounds,
}

impl CellQuery {
    /// Cell value as stored in snapshots: 0 for empty, the colour id otherwise.
    /// `None` when out of bounds.
    pub fn value(self) -> Option<u8> {
        match self {
            CellQuery::Empty => Some(0),
            CellQuery::Occupied(kind) => Some(kind.id()),
            CellQuery::OutOfBounds => None,
        }
    }
}

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Build a board from cell values (0 = empty, 1..=7 = piece id).
    ///
    /// # Panics
    ///
    /// Panics if a value is not a valid piece id.
    pub fn from_u8_rows(rows: &[[u8; WIDTH]; HEIGHT]) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                board.cells[y * WIDTH + x] = match v {
                    0 => None,
                    id => Some(
                        PieceKind::from_id(id)
                            .unwrap_or_else(|| panic!("invalid cell value {id} at ({x}, {y})")),
                    ),
                };
            }
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= WIDTH as i32 || y < 0 || y >= HEIGHT as i32 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y).
    /// Returns None if outside the stored grid (including above the top).
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y).
    /// Returns false if outside the stored grid.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Three-way lookup: empty, occupied or out of bounds.
    ///
    /// Rows above the board are empty as long as the column is in range.
    pub fn cell_at(&self, x: i32, y: i32) -> CellQuery {
        if x < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return CellQuery::OutOfBounds;
        }
        if y < 0 {
            return CellQuery::Empty;
        }
        match self.cells[(y as usize) * WIDTH + (x as usize)] {
            Some(kind) => CellQuery::Occupied(kind),
            None => CellQuery::Empty,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.cell_at(x, y), CellQuery::Occupied(_))
    }

    /// Would `shape` placed with its box top-left at (x, y) overlap anything?
    ///
    /// Walls and floor are solid; cells above the top edge never collide.
    pub fn collides(&self, shape: &Shape, x: i32, y: i32) -> bool {
        for (row, cells) in shape.iter().enumerate() {
            for (col, &v) in cells.iter().enumerate() {
                if v == 0 {
                    continue;
                }
                let bx = x + col as i32;
                let by = y + row as i32;
                if bx < 0 || bx >= WIDTH as i32 || by >= HEIGHT as i32 {
                    return true;
                }
                if by < 0 {
                    continue;
                }
                if self.cells[(by as usize) * WIDTH + (bx as usize)].is_some() {
                    return true;
                }
            }
        }
        false
    }

    /// Write `kind` under every filled cell of `shape`.
    ///
    /// Targets outside the grid are skipped. Returns how many filled cells
    /// were skipped because they sat above the top edge.
    pub fn lock_cells(&mut self, shape: &Shape, x: i32, y: i32, kind: PieceKind) -> usize {
        let mut above_top = 0;
        for (row, cells) in shape.iter().enumerate() {
            for (col, &v) in cells.iter().enumerate() {
                if v == 0 {
                    continue;
                }
                let by = y + row as i32;
                if by < 0 {
                    above_top += 1;
                    continue;
                }
                self.set(x + col as i32, by, Some(kind));
            }
        }
        above_top
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|cell| cell.is_some())
    }

    /// Indices of all full rows, ascending
    pub fn find_full_rows(&self) -> FullRows {
        (0..HEIGHT).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Remove the given rows and drop everything above them down.
    ///
    /// Rows may be given in any order and need not be adjacent. The board keeps
    /// its height: one empty row appears at the top per removed row.
    /// Uses a two-pointer compaction from the bottom, without allocation.
    ///
    /// # Panics
    ///
    /// Panics if a row index is outside the board.
    pub fn clear_rows(&mut self, rows: &[usize]) {
        let mut remove = [false; HEIGHT];
        for &y in rows {
            assert!(y < HEIGHT, "row {y} is outside the board");
            remove[y] = true;
        }

        let mut write_y = HEIGHT;
        for read_y in (0..HEIGHT).rev() {
            if remove[read_y] {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * WIDTH;
                self.cells.copy_within(src..src + WIDTH, write_y * WIDTH);
            }
        }

        self.cells[..write_y * WIDTH].fill(None);
    }

    /// Clear all full rows and return their indices (ascending)
    pub fn clear_full_rows(&mut self) -> FullRows {
        let rows = self.find_full_rows();
        if !rows.is_empty() {
            self.clear_rows(&rows);
        }
        rows
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the board into a grid of cell values (0 = empty, otherwise colour id)
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * WIDTH;
            for (dst, cell) in row.iter_mut().zip(&self.cells[start..start + WIDTH]) {
                *dst = cell.map_or(0, PieceKind::id);
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
