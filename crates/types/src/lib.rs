//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default board dimensions (columns x rows).
pub const DEFAULT_COLS: usize = 7;
pub const DEFAULT_ROWS: usize = 9;

/// Hard upper bound on board dimensions.
///
/// Keeps per-column scratch buffers fixed-capacity; `Board::new` clamps to this.
pub const MAX_COLS: usize = 32;
pub const MAX_ROWS: usize = 32;

/// Number of distinct tile kinds drawn for a default game (valid range 1..=6).
pub const DEFAULT_KIND_COUNT: u8 = 5;

/// Minimum run length that counts as a match.
pub const MIN_RUN: usize = 3;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u64 = 16;
/// Delay between discrete cascade steps, so fades and falls can play out.
pub const CASCADE_STEP_MS: u64 = 160;

/// Multiplied by `rows * cols` to cap cascade steps; exceeding the cap is an
/// internal invariant violation, not a hang.
pub const CASCADE_STEP_LIMIT_FACTOR: u32 = 8;

/// Minimum drag distance (in cell units) for a gesture to count as a swipe.
pub const SWIPE_THRESHOLD: f32 = 0.5;

/// Score awarded per cleared tile, before the chain multiplier.
pub const TILE_SCORE: u32 = 10;

/// Orb tile kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Ruby,
    Amber,
    Jade,
    Azure,
    Iris,
    Pearl,
}

impl TileKind {
    /// All kinds, in draw order. Boards built with `kind_count = n` use the
    /// first `n` entries.
    pub const ALL: [TileKind; 6] = [
        TileKind::Ruby,
        TileKind::Amber,
        TileKind::Jade,
        TileKind::Azure,
        TileKind::Iris,
        TileKind::Pearl,
    ];

    /// Look up a kind by draw index.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        match self {
            TileKind::Ruby => 0,
            TileKind::Amber => 1,
            TileKind::Jade => 2,
            TileKind::Azure => 3,
            TileKind::Iris => 4,
            TileKind::Pearl => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TileKind::Ruby => "ruby",
            TileKind::Amber => "amber",
            TileKind::Jade => "jade",
            TileKind::Azure => "azure",
            TileKind::Iris => "iris",
            TileKind::Pearl => "pearl",
        }
    }
}

/// A board slot (None = empty, Some = occupied by a tile kind)
pub type Tile = Option<TileKind>;

/// Reference to one board cell.
///
/// Signed so the input layer can produce out-of-range references that the
/// core rejects uniformly instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellRef {
    pub row: i8,
    pub col: i8,
}

impl CellRef {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// The cell one step away in the given direction.
    pub fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// True if the two cells are exactly one cardinal step apart.
    pub fn is_adjacent(self, other: CellRef) -> bool {
        let dr = (self.row - other.row).abs();
        let dc = (self.col - other.col).abs();
        dr + dc == 1
    }
}

/// Cardinal swipe directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// (d_row, d_col) with row 0 at the top of the visible board.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// The board edge surviving tiles compact toward during collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityEdge {
    Top,
    Bottom,
}

/// Single gravity configuration for the whole system. Rendering orientation
/// must never leak into grid-index semantics; collapse is the only consumer.
pub const GRAVITY_EDGE: GravityEdge = GravityEdge::Bottom;

/// Why an `attempt_swap` request was rejected before touching the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// A cascade is still draining; input is dropped, not queued.
    EngineBusy,
    /// One of the two cells is outside the grid extents.
    OutOfBounds,
    /// The cells are not exactly one cardinal step apart.
    NotAdjacent,
}

impl RejectReason {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::EngineBusy => "engine_busy",
            RejectReason::OutOfBounds => "out_of_bounds",
            RejectReason::NotAdjacent => "not_adjacent",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_index_roundtrip() {
        for kind in TileKind::ALL {
            assert_eq!(TileKind::from_index(kind.index()), Some(kind));
        }
        assert_eq!(TileKind::from_index(6), None);
    }

    #[test]
    fn test_step_deltas() {
        let c = CellRef::new(4, 4);
        assert_eq!(c.step(Direction::Up), CellRef::new(3, 4));
        assert_eq!(c.step(Direction::Down), CellRef::new(5, 4));
        assert_eq!(c.step(Direction::Left), CellRef::new(4, 3));
        assert_eq!(c.step(Direction::Right), CellRef::new(4, 5));
    }

    #[test]
    fn test_adjacency() {
        let c = CellRef::new(2, 2);
        assert!(c.is_adjacent(CellRef::new(1, 2)));
        assert!(c.is_adjacent(CellRef::new(2, 3)));
        assert!(!c.is_adjacent(c));
        // Diagonal neighbors are not adjacent.
        assert!(!c.is_adjacent(CellRef::new(3, 3)));
        assert!(!c.is_adjacent(CellRef::new(0, 2)));
    }

    #[test]
    fn test_step_can_leave_grid() {
        let c = CellRef::new(0, 0);
        assert_eq!(c.step(Direction::Up), CellRef::new(-1, 0));
        assert_eq!(c.step(Direction::Left), CellRef::new(0, -1));
    }
}
