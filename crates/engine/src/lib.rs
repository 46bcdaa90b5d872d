//! Resolution engine - the state machine that owns all grid mutation
//!
//! One engine instance drives one board through the swap-attempt ->
//! match-check -> removal -> collapse -> cascade-repeat -> idle cycle.
//! Timing lives outside: an external scheduler (render loop or test
//! harness) calls [`ResolutionEngine::step`] at whatever cadence it wants,
//! so game logic never touches wall-clock timers.
//!
//! The `Idle` / `AwaitingCascadeStep` gate serializes input against
//! in-flight cascades: the gate is set before the first cascade mutation
//! and cleared only once a detection pass comes back empty.

use orbmatch_core::{collapse, find_matches, Board, MatchSet, SimpleRng};
use orbmatch_types::{CellRef, RejectReason, CASCADE_STEP_LIMIT_FACTOR, DEFAULT_KIND_COUNT, TILE_SCORE};

/// Engine phases. Input is accepted only in `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    /// Holes exist or a scheduled cascade step is pending.
    AwaitingCascadeStep,
}

/// Result of a swap request. All three arms are ordinary outcomes; free-form
/// pointer input makes rejections frequent and non-exceptional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOutcome {
    /// Request dropped before touching the board.
    Rejected(RejectReason),
    /// Speculative swap produced no match and was reversed ("no-op move").
    Reverted,
    /// Matches found; the engine is now gated and expects `step` calls.
    CascadeStarted,
}

/// The match-resolution state machine.
#[derive(Debug, Clone)]
pub struct ResolutionEngine {
    state: EngineState,
    rng: SimpleRng,
    kind_count: u8,
    /// Matched cells awaiting removal on the next step.
    pending: MatchSet,
    /// Steps taken in the current cascade (for the defensive cap).
    steps_taken: u32,
    /// 1-based chain depth of the next step (scoring multiplier).
    chain: u32,
    score: u32,
}

impl ResolutionEngine {
    pub fn new(seed: u32) -> Self {
        Self::with_kinds(seed, DEFAULT_KIND_COUNT)
    }

    pub fn with_kinds(seed: u32, kind_count: u8) -> Self {
        Self {
            state: EngineState::Idle,
            rng: SimpleRng::new(seed),
            kind_count,
            pending: MatchSet::default(),
            steps_taken: 0,
            chain: 0,
            score: 0,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == EngineState::Idle
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Chain depth of the cascade step about to run (0 when idle).
    pub fn chain(&self) -> u32 {
        self.chain
    }

    pub fn kind_count(&self) -> u8 {
        self.kind_count
    }

    /// Cells that will be cleared by the next step (for fade highlights).
    pub fn pending_matches(&self) -> &MatchSet {
        &self.pending
    }

    /// Current RNG state, for restarting with the same sequence.
    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    /// Create a freshly filled board and silently strip accidental starting
    /// runs. The player never sees the pre-settle arrangement.
    pub fn new_board(&mut self, cols: usize, rows: usize) -> Board {
        let mut board = Board::new(cols, rows);
        board.random_fill(&mut self.rng, self.kind_count);
        self.settle(&mut board);
        board
    }

    /// Try to swap two cells.
    ///
    /// Rejections are synchronous and silent. On `CascadeStarted` the gate
    /// is already set; the caller schedules `step` calls until it returns
    /// false.
    pub fn attempt_swap(&mut self, board: &mut Board, a: CellRef, b: CellRef) -> SwapOutcome {
        if self.state != EngineState::Idle {
            return SwapOutcome::Rejected(RejectReason::EngineBusy);
        }
        if !board.in_bounds(a) || !board.in_bounds(b) {
            return SwapOutcome::Rejected(RejectReason::OutOfBounds);
        }
        if !a.is_adjacent(b) {
            return SwapOutcome::Rejected(RejectReason::NotAdjacent);
        }

        // Speculative swap; bounds were checked above.
        board.swap(a, b);

        let matches = find_matches(board);
        if matches.is_empty() {
            // Normal, errorless outcome: reverse and stay idle.
            board.swap(a, b);
            return SwapOutcome::Reverted;
        }

        // Gate closes before the first cascade mutation.
        self.state = EngineState::AwaitingCascadeStep;
        self.pending = matches;
        self.steps_taken = 0;
        self.chain = 1;
        SwapOutcome::CascadeStarted
    }

    /// Run one discrete cascade step: clear pending matches, collapse,
    /// re-detect. Returns true while the cascade is still draining.
    ///
    /// Exceeding the defensive step cap is an internal invariant violation:
    /// it is logged and the engine force-returns to `Idle`, leaving the
    /// board in its current (possibly still-matching) state.
    pub fn step(&mut self, board: &mut Board) -> bool {
        if self.state != EngineState::AwaitingCascadeStep {
            return false;
        }

        let limit = step_limit(board);
        if self.steps_taken >= limit {
            log::error!(
                "cascade exceeded step cap ({limit}); forcing idle with {} matches unresolved",
                self.pending.len()
            );
            self.abandon_cascade();
            return false;
        }
        self.steps_taken += 1;

        self.score += self.pending.len() as u32 * TILE_SCORE * self.chain;
        board.clear_cells(self.pending.cells());
        collapse(board, &mut self.rng, self.kind_count);

        self.pending = find_matches(board);
        if self.pending.is_empty() {
            self.state = EngineState::Idle;
            self.chain = 0;
            false
        } else {
            self.chain += 1;
            true
        }
    }

    /// Synchronously drain every cascade step (no delays, no scoring).
    ///
    /// Used to auto-resolve freshly generated boards. Returns the number of
    /// clear/collapse passes performed.
    pub fn settle(&mut self, board: &mut Board) -> u32 {
        let limit = step_limit(board);
        let mut steps = 0;
        loop {
            let matches = find_matches(board);
            if matches.is_empty() {
                break;
            }
            if steps >= limit {
                log::error!("settle exceeded step cap ({limit}); board left still matching");
                break;
            }
            steps += 1;
            board.clear_cells(matches.cells());
            collapse(board, &mut self.rng, self.kind_count);
        }
        steps
    }

    /// Discard all in-flight cascade state and the score.
    ///
    /// Restart path: a new game must never resume an old cascade against a
    /// freshly created board.
    pub fn reset(&mut self) {
        self.abandon_cascade();
        self.score = 0;
    }

    fn abandon_cascade(&mut self) {
        self.state = EngineState::Idle;
        self.pending = MatchSet::default();
        self.steps_taken = 0;
        self.chain = 0;
    }
}

fn step_limit(board: &Board) -> u32 {
    (board.rows() * board.cols()) as u32 * CASCADE_STEP_LIMIT_FACTOR
}
