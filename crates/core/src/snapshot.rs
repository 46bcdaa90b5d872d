//! Read-only board snapshots consumed by renderers.
//!
//! The renderer is a pure sink: it receives dimensions plus per-cell tile
//! state once per frame and never reaches back into live game state.

use orbmatch_types::{CellRef, Tile};

use crate::board::Board;

/// Per-frame copy of the board for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardSnapshot {
    cols: usize,
    rows: usize,
    cells: Vec<Tile>,
}

impl BoardSnapshot {
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, cell: CellRef) -> Tile {
        if cell.row < 0
            || cell.col < 0
            || cell.row as usize >= self.rows
            || cell.col as usize >= self.cols
        {
            return None;
        }
        self.cells[(cell.row as usize) * self.cols + (cell.col as usize)]
    }
}

impl Board {
    /// Copy current board contents into a reusable snapshot.
    ///
    /// Reuses the snapshot's allocation when dimensions are unchanged.
    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.cols = self.cols();
        out.rows = self.rows();
        out.cells.clear();
        out.cells.extend_from_slice(self.cells());
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut snap = BoardSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbmatch_types::TileKind;

    #[test]
    fn test_snapshot_mirrors_board() {
        let board = Board::from_rows(&[vec![0, 1], vec![u8::MAX, 3]]);
        let snap = board.snapshot();

        assert_eq!(snap.cols(), 2);
        assert_eq!(snap.rows(), 2);
        assert_eq!(snap.get(CellRef::new(0, 0)), Some(TileKind::Ruby));
        assert_eq!(snap.get(CellRef::new(1, 0)), None);
        assert_eq!(snap.get(CellRef::new(1, 1)), Some(TileKind::Azure));
    }

    #[test]
    fn test_snapshot_out_of_bounds_reads_as_empty() {
        let snap = Board::from_rows(&[vec![0]]).snapshot();
        assert_eq!(snap.get(CellRef::new(-1, 0)), None);
        assert_eq!(snap.get(CellRef::new(0, 1)), None);
    }

    #[test]
    fn test_snapshot_is_detached_from_board() {
        let mut board = Board::from_rows(&[vec![0, 0]]);
        let snap = board.snapshot();
        board.set(CellRef::new(0, 0), Some(TileKind::Pearl));
        assert_eq!(snap.get(CellRef::new(0, 0)), Some(TileKind::Ruby));
    }
}
