//! Match detection - finds horizontal and vertical runs of length >= MIN_RUN
//!
//! Pure scan over the board, O(rows * cols), no side effects. Empty slots
//! never match: two holes are never "equal" for run purposes, which keeps
//! gravity transitions from producing phantom matches.

use orbmatch_types::{CellRef, Tile, MIN_RUN};

use crate::board::Board;

/// Deduplicated set of matched cells from one detection pass.
///
/// A cell that sits at the intersection of a horizontal and a vertical run
/// ("T" or "L" shapes) appears exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    /// Sorted row-major (row, then col).
    cells: Vec<CellRef>,
}

impl MatchSet {
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[CellRef] {
        &self.cells
    }

    pub fn contains(&self, cell: CellRef) -> bool {
        self.cells.binary_search(&cell).is_ok()
    }

    pub fn take_cells(self) -> Vec<CellRef> {
        self.cells
    }
}

/// Scan the board for all runs of >= MIN_RUN equal adjacent tiles.
pub fn find_matches(board: &Board) -> MatchSet {
    let cols = board.cols();
    let rows = board.rows();
    let mut matched = vec![false; cols * rows];

    // Horizontal runs, one row at a time.
    for row in 0..rows {
        let mut run_start = 0;
        for col in 1..=cols {
            let extends = col < cols
                && tiles_equal(
                    board.get(CellRef::new(row as i8, col as i8)).flatten(),
                    board.get(CellRef::new(row as i8, run_start as i8)).flatten(),
                );
            if extends {
                continue;
            }
            if col - run_start >= MIN_RUN {
                for c in run_start..col {
                    matched[row * cols + c] = true;
                }
            }
            run_start = col;
        }
    }

    // Vertical runs, one column at a time.
    for col in 0..cols {
        let mut run_start = 0;
        for row in 1..=rows {
            let extends = row < rows
                && tiles_equal(
                    board.get(CellRef::new(row as i8, col as i8)).flatten(),
                    board.get(CellRef::new(run_start as i8, col as i8)).flatten(),
                );
            if extends {
                continue;
            }
            if row - run_start >= MIN_RUN {
                for r in run_start..row {
                    matched[r * cols + col] = true;
                }
            }
            run_start = row;
        }
    }

    let cells = (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (r, c)))
        .filter(|&(r, c)| matched[r * cols + c])
        .map(|(r, c)| CellRef::new(r as i8, c as i8))
        .collect();

    MatchSet { cells }
}

/// Equality for run purposes: empty slots never match anything.
#[inline]
fn tiles_equal(a: Tile, b: Tile) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x == y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: u8 = u8::MAX;

    #[test]
    fn test_no_matches_on_checker_board() {
        let board = Board::from_rows(&[
            vec![0, 1, 0, 1],
            vec![1, 0, 1, 0],
            vec![0, 1, 0, 1],
        ]);
        assert!(find_matches(&board).is_empty());
    }

    #[test]
    fn test_horizontal_run_of_three() {
        let board = Board::from_rows(&[
            vec![0, 0, 0, 1],
            vec![1, 2, 1, 2],
        ]);
        let matches = find_matches(&board);
        assert_eq!(matches.len(), 3);
        assert!(matches.contains(CellRef::new(0, 0)));
        assert!(matches.contains(CellRef::new(0, 1)));
        assert!(matches.contains(CellRef::new(0, 2)));
        assert!(!matches.contains(CellRef::new(0, 3)));
    }

    #[test]
    fn test_run_of_two_does_not_match() {
        let board = Board::from_rows(&[
            vec![0, 0, 1, 1],
            vec![2, 2, 3, 3],
        ]);
        assert!(find_matches(&board).is_empty());
    }

    #[test]
    fn test_vertical_run_of_four() {
        let board = Board::from_rows(&[
            vec![0, 1],
            vec![0, 2],
            vec![0, 1],
            vec![0, 2],
        ]);
        let matches = find_matches(&board);
        assert_eq!(matches.len(), 4);
        for row in 0..4 {
            assert!(matches.contains(CellRef::new(row, 0)));
        }
    }

    #[test]
    fn test_run_at_row_end_is_closed() {
        // The run touches the right edge; the scan must close it there.
        let board = Board::from_rows(&[
            vec![1, 0, 0, 0],
            vec![2, 3, 2, 3],
        ]);
        let matches = find_matches(&board);
        assert_eq!(matches.len(), 3);
        assert!(matches.contains(CellRef::new(0, 3)));
    }

    #[test]
    fn test_empty_slots_never_match() {
        let board = Board::from_rows(&[
            vec![E, E, E, E],
            vec![0, 1, 0, 1],
        ]);
        assert!(find_matches(&board).is_empty());
    }

    #[test]
    fn test_empty_slot_breaks_a_run() {
        let board = Board::from_rows(&[
            vec![0, 0, E, 0, 0],
        ]);
        assert!(find_matches(&board).is_empty());
    }

    #[test]
    fn test_l_shape_deduplicates_corner() {
        // Horizontal run in row 0 and vertical run in col 0 share (0, 0).
        let board = Board::from_rows(&[
            vec![0, 0, 0],
            vec![0, 1, 2],
            vec![0, 2, 1],
        ]);
        let matches = find_matches(&board);
        assert_eq!(matches.len(), 5);
        assert!(matches.contains(CellRef::new(0, 0)));
        assert!(matches.contains(CellRef::new(2, 0)));
        assert!(matches.contains(CellRef::new(0, 2)));
    }

    #[test]
    fn test_whole_row_and_column_runs() {
        let board = Board::from_rows(&[
            vec![4, 4, 4, 4, 4],
        ]);
        let matches = find_matches(&board);
        assert_eq!(matches.len(), 5);
    }

    #[test]
    fn test_match_set_ordering_is_row_major() {
        let board = Board::from_rows(&[
            vec![1, 0, 0, 0],
            vec![5, 5, 5, 2],
        ]);
        let matches = find_matches(&board);
        let cells = matches.cells();
        let mut sorted = cells.to_vec();
        sorted.sort();
        assert_eq!(cells, &sorted[..]);
    }
}
