//! Pointer-to-swipe mapping.
//!
//! Pure and device-agnostic: consumes raw pointer-down/pointer-up
//! coordinates plus the current grid layout metrics, produces either a
//! swipe (origin cell + destination cell) or nothing. Never reads board
//! contents.

use orbmatch_types::{CellRef, Direction, SWIPE_THRESHOLD};

/// Where the grid sits in pointer-coordinate space.
///
/// Owned by layout/resize logic outside the core; the tracker only reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_w: f32,
    pub cell_h: f32,
    pub cols: usize,
    pub rows: usize,
}

impl GridLayout {
    /// Map a pointer position to the cell under it, or None outside the grid.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<CellRef> {
        if self.cell_w <= 0.0 || self.cell_h <= 0.0 {
            return None;
        }
        let fx = (x - self.origin_x) / self.cell_w;
        let fy = (y - self.origin_y) / self.cell_h;
        if fx < 0.0 || fy < 0.0 {
            return None;
        }
        let (col, row) = (fx as usize, fy as usize);
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(CellRef::new(row as i8, col as i8))
    }

    fn contains(&self, cell: CellRef) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows
            && (cell.col as usize) < self.cols
    }
}

/// A resolved swipe gesture: swap `origin` with `dest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeIntent {
    pub origin: CellRef,
    pub dest: CellRef,
}

/// Tracks one press/release pair and turns it into a swipe.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    layout: GridLayout,
    press: Option<(f32, f32)>,
    /// Minimum drag distance along the dominant axis, in cell units.
    threshold: f32,
}

impl PointerTracker {
    pub fn new(layout: GridLayout) -> Self {
        Self {
            layout,
            press: None,
            threshold: SWIPE_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Replace the layout (terminal resize / DPI change). Drops any press in
    /// flight since its coordinates were measured against the old layout.
    pub fn set_layout(&mut self, layout: GridLayout) {
        self.layout = layout;
        self.press = None;
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.press = Some((x, y));
    }

    pub fn cancel(&mut self) {
        self.press = None;
    }

    /// Complete the gesture.
    ///
    /// Returns None when there was no press, the press started outside the
    /// grid, the drag stays under the threshold, or the destination would
    /// fall off the board.
    pub fn pointer_up(&mut self, x: f32, y: f32) -> Option<SwipeIntent> {
        let (px, py) = self.press.take()?;
        let origin = self.layout.cell_at(px, py)?;

        // Normalize the drag vector to cell units so the threshold does not
        // depend on cell size.
        let dx = (x - px) / self.layout.cell_w;
        let dy = (y - py) / self.layout.cell_h;
        if dx.abs().max(dy.abs()) < self.threshold {
            return None;
        }

        let dir = if dx.abs() >= dy.abs() {
            if dx > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if dy > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        };

        let dest = origin.step(dir);
        if !self.layout.contains(dest) {
            return None;
        }
        Some(SwipeIntent { origin, dest })
    }
}
