//! Core grid logic - pure, deterministic, and testable
//!
//! This crate holds the board model plus the two pure algorithms the
//! resolution engine orchestrates. It has **zero dependencies** on UI or
//! I/O, making it:
//!
//! - **Deterministic**: the same seed reproduces identical boards, refills,
//!   and cascades
//! - **Testable**: every rule has unit tests with no terminal attached
//! - **Portable**: runs headless, in a terminal front end, or in a bench
//!
//! # Module Structure
//!
//! - [`board`]: the cols x rows grid with get/set/swap/clear primitives
//! - [`matcher`]: run detection for horizontal/vertical runs >= 3
//! - [`collapse`]: per-column gravity compaction with random refill
//! - [`rng`]: seedable LCG used for fills and refills
//! - [`snapshot`]: read-only per-frame board copies for renderers

pub mod board;
pub mod collapse;
pub mod matcher;
pub mod rng;
pub mod snapshot;

pub use orbmatch_types as types;

// Re-export commonly used items for convenience
pub use board::Board;
pub use collapse::collapse;
pub use matcher::{find_matches, MatchSet};
pub use rng::SimpleRng;
pub use snapshot::BoardSnapshot;
