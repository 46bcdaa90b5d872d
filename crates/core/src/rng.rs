//! RNG module - deterministic tile generation
//!
//! A simple LCG keeps board generation and refill fully deterministic per
//! seed, which matters for reproducing cascades in tests.

use orbmatch_types::TileKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Draw a uniformly random tile kind from the first `kind_count` kinds.
    ///
    /// `kind_count` is clamped to 1..=TileKind::ALL.len().
    pub fn draw_kind(&mut self, kind_count: u8) -> TileKind {
        let n = kind_count.clamp(1, TileKind::ALL.len() as u8);
        let idx = self.next_range(u32::from(n)) as u8;
        // Index is < ALL.len() after the clamp.
        TileKind::from_index(idx).unwrap_or(TileKind::Ruby)
    }

    /// Current internal state (for restarting a game with the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
