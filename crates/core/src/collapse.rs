//! Gravity collapse - compacts each column toward the gravity edge and
//! refills the vacated slots with fresh random tiles.
//!
//! Columns are fully independent; surviving tiles keep their relative order
//! (tiles never pass each other) and never move diagonally.

use arrayvec::ArrayVec;
use orbmatch_types::{CellRef, GravityEdge, TileKind, GRAVITY_EDGE, MAX_ROWS};

use crate::board::Board;
use crate::rng::SimpleRng;

/// Collapse every column toward `GRAVITY_EDGE`, then refill the holes
/// nearest the opposite edge with freshly drawn tiles.
///
/// Returns the number of newly generated tiles.
pub fn collapse(board: &mut Board, rng: &mut SimpleRng, kind_count: u8) -> usize {
    let rows = board.rows();
    let mut refilled = 0;

    for col in 0..board.cols() {
        // Survivors read top to bottom. Board dims are clamped to MAX_ROWS,
        // so the scratch never overflows.
        let mut survivors: ArrayVec<TileKind, MAX_ROWS> = ArrayVec::new();
        for row in 0..rows {
            if let Some(Some(kind)) = board.get(CellRef::new(row as i8, col as i8)) {
                survivors.push(kind);
            }
        }

        let holes = rows - survivors.len();
        if holes == 0 {
            continue;
        }
        refilled += holes;

        match GRAVITY_EDGE {
            GravityEdge::Bottom => {
                // New tiles enter at the top, survivors pack to the bottom.
                for row in 0..rows {
                    let tile = if row < holes {
                        Some(rng.draw_kind(kind_count))
                    } else {
                        Some(survivors[row - holes])
                    };
                    board.set(CellRef::new(row as i8, col as i8), tile);
                }
            }
            GravityEdge::Top => {
                for row in 0..rows {
                    let tile = if row < survivors.len() {
                        Some(survivors[row])
                    } else {
                        Some(rng.draw_kind(kind_count))
                    };
                    board.set(CellRef::new(row as i8, col as i8), tile);
                }
            }
        }
    }

    refilled
}
