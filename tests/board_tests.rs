//! Board, matcher, and collapse behavior through the public facade.

use orbmatch::types::{CellRef, MAX_COLS, MAX_ROWS};
use orbmatch::{collapse, find_matches, Board, SimpleRng};

const E: u8 = u8::MAX;

#[test]
fn test_dimensions_are_clamped() {
    let tiny = Board::new(0, 0);
    assert_eq!(tiny.cols(), 1);
    assert_eq!(tiny.rows(), 1);

    let huge = Board::new(1000, 1000);
    assert_eq!(huge.cols(), MAX_COLS);
    assert_eq!(huge.rows(), MAX_ROWS);
}

#[test]
fn test_out_of_bounds_reads_and_writes() {
    let mut board = Board::new(3, 3);
    assert_eq!(board.get(CellRef::new(3, 0)), None);
    assert_eq!(board.get(CellRef::new(0, -1)), None);
    assert!(!board.set(CellRef::new(-1, 0), None));
    assert!(!board.swap(CellRef::new(0, 0), CellRef::new(0, 3)));
}

#[test]
fn test_cross_match_is_reported_once_per_cell() {
    // Horizontal and vertical runs of 0 sharing the center cell.
    let board = Board::from_rows(&[
        vec![1, 0, 2],
        vec![0, 0, 0],
        vec![2, 0, 1],
    ]);
    let matches = find_matches(&board);
    assert_eq!(matches.len(), 5);
    assert!(matches.contains(CellRef::new(1, 1)));
}

#[test]
fn test_holes_are_never_part_of_a_run() {
    let board = Board::from_rows(&[
        vec![E, E, E],
        vec![0, E, 0],
        vec![1, 2, 1],
    ]);
    assert!(find_matches(&board).is_empty());
}

#[test]
fn test_collapse_preserves_column_order_and_refills_from_top() {
    let mut board = Board::from_rows(&[
        vec![0, 1],
        vec![E, E],
        vec![1, 2],
        vec![E, 3],
    ]);
    let mut rng = SimpleRng::new(9);
    let refilled = collapse(&mut board, &mut rng, 5);
    assert_eq!(refilled, 3);
    assert!(board.is_full());

    // Survivors keep their top-to-bottom order at the bottom of the column.
    let col0: Vec<u8> = (0..4)
        .map(|r| board.get(CellRef::new(r, 0)).flatten().unwrap().index())
        .collect();
    assert_eq!(&col0[2..], &[0, 1]);
    let col1: Vec<u8> = (0..4)
        .map(|r| board.get(CellRef::new(r, 1)).flatten().unwrap().index())
        .collect();
    assert_eq!(&col1[1..], &[1, 2, 3]);
}

#[test]
fn test_snapshot_mirrors_board_and_detaches() {
    let mut board = Board::from_rows(&[vec![0, 1], vec![2, 3]]);
    let snap = board.snapshot();
    board.clear_cells(&[CellRef::new(0, 0)]);

    // The snapshot still holds the pre-clear tile.
    assert!(snap.get(CellRef::new(0, 0)).is_some());
    assert_eq!(board.get(CellRef::new(0, 0)), Some(None));
}
