//! Orbmatch: a terminal match-3 with swipe input.
//!
//! The workspace splits along the same seams as the game itself:
//!
//! - [`orbmatch_types`]: shared constants and plain data types.
//! - [`orbmatch_core`]: board, match detection, gravity collapse, RNG.
//! - [`orbmatch_engine`]: the resolution engine driving the cascade.
//! - [`orbmatch_input`]: pointer-to-swipe mapping and key bindings.
//! - [`orbmatch_term`]: framebuffer and crossterm front end.
//!
//! This crate re-exports the lot and carries the playable binary.

pub use orbmatch_core as core;
pub use orbmatch_engine as engine;
pub use orbmatch_input as input;
pub use orbmatch_term as term;
pub use orbmatch_types as types;

pub use orbmatch_core::{collapse, find_matches, Board, BoardSnapshot, MatchSet, SimpleRng};
pub use orbmatch_engine::{EngineState, ResolutionEngine, SwapOutcome};
pub use orbmatch_input::{GridLayout, PointerTracker, SwipeIntent, UiAction};
pub use orbmatch_types::{CellRef, Direction, RejectReason, Tile, TileKind};
