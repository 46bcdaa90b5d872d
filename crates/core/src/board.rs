//! Board module - manages the match grid
//!
//! The board is a cols x rows grid where each slot is empty or holds a tile
//! kind. Uses flat row-major storage. Coordinates: (row, col) where row 0 is
//! the top of the visible board and col 0 is the leftmost column. Dimensions
//! are fixed for the lifetime of a board instance.

use orbmatch_types::{CellRef, Tile, TileKind, MAX_COLS, MAX_ROWS};

use crate::rng::SimpleRng;

/// The match grid. Mutated in place by swap/clear/collapse; replaced on
/// restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cols: usize,
    rows: usize,
    /// Flat slots, row-major order (row * cols + col)
    cells: Vec<Tile>,
}

impl Board {
    /// Create an empty board. Dimensions are clamped to 1..=MAX.
    pub fn new(cols: usize, rows: usize) -> Self {
        let cols = cols.clamp(1, MAX_COLS);
        let rows = rows.clamp(1, MAX_ROWS);
        Self {
            cols,
            rows,
            cells: vec![None; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Calculate flat index from a cell reference
    #[inline(always)]
    fn index(&self, cell: CellRef) -> Option<usize> {
        if cell.row < 0
            || cell.col < 0
            || cell.row as usize >= self.rows
            || cell.col as usize >= self.cols
        {
            return None;
        }
        Some((cell.row as usize) * self.cols + (cell.col as usize))
    }

    pub fn in_bounds(&self, cell: CellRef) -> bool {
        self.index(cell).is_some()
    }

    /// Get the slot at a cell.
    /// Returns None if out of bounds; Some(None) for an in-bounds empty slot.
    pub fn get(&self, cell: CellRef) -> Option<Tile> {
        self.index(cell).map(|idx| self.cells[idx])
    }

    /// Set the slot at a cell.
    /// Returns false if out of bounds.
    pub fn set(&mut self, cell: CellRef, tile: Tile) -> bool {
        match self.index(cell) {
            Some(idx) => {
                self.cells[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// Exchange the contents of two slots.
    ///
    /// No adjacency requirement at this layer; callers validate adjacency
    /// before invoking. Returns false (board untouched) if either cell is out
    /// of bounds.
    pub fn swap(&mut self, a: CellRef, b: CellRef) -> bool {
        match (self.index(a), self.index(b)) {
            (Some(ia), Some(ib)) => {
                self.cells.swap(ia, ib);
                true
            }
            _ => false,
        }
    }

    /// Mark every given cell empty. Out-of-bounds entries are ignored.
    pub fn clear_cells(&mut self, cells: &[CellRef]) {
        for &cell in cells {
            if let Some(idx) = self.index(cell) {
                self.cells[idx] = None;
            }
        }
    }

    /// Set every slot to an independently drawn tile kind.
    ///
    /// Used at board creation and as the refill source; the result may
    /// contain accidental runs and must be settled before first display.
    pub fn random_fill(&mut self, rng: &mut SimpleRng, kind_count: u8) {
        for slot in &mut self.cells {
            *slot = Some(rng.draw_kind(kind_count));
        }
    }

    /// True when no slot is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|slot| slot.is_some())
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|slot| slot.is_none()).count()
    }

    /// Get a reference to the internal slots (row-major).
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Build a board from per-row kind indices, for tests.
    /// `u8::MAX` marks an empty slot.
    pub fn from_rows(rows_2d: &[Vec<u8>]) -> Self {
        let rows = rows_2d.len();
        let cols = rows_2d.first().map_or(0, Vec::len);
        assert!(rows_2d.iter().all(|row| row.len() == cols));

        let mut board = Self::new(cols, rows);
        for (r, row) in rows_2d.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                let tile = TileKind::from_index(v);
                board.set(CellRef::new(r as i8, c as i8), tile);
            }
        }
        board
    }

    /// The column's slots top to bottom, for tests.
    #[cfg(test)]
    pub fn column(&self, col: usize) -> Vec<Tile> {
        (0..self.rows)
            .map(|r| self.cells[r * self.cols + col])
            .collect()
    }
}
