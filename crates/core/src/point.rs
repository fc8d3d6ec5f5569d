//! Explosion point - a single particle advancing under a fixed per-axis rule
//!
//! A point moves towards its *next* position each tick. After a move the new
//! next position is derived from the position the point held *before* the
//! move, so a point re-marks its own cell every other move and covers one
//! step per two moves.
//!
//! States:
//! - `Active`: still moving
//! - `Blocked`: next position was inside a barrier or off the grid (terminal)
//! - `Exhausted`: reached its move cap (terminal)

use crate::types::{Pos, Step, MAX_MOVES};

/// Lifecycle of an explosion point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointState {
    #[default]
    Active,
    Blocked,
    Exhausted,
}

/// Result of asking a point to move once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Point moved and is still active
    Moved,
    /// Point moved and has now used its last move
    Exhausted,
    /// Next position was rejected; the point did not move
    Blocked,
    /// Point was already terminal; nothing happened
    Idle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplosionPoint {
    current: Pos,
    next: Pos,
    step_x: Step,
    step_y: Step,
    moves: u32,
    max_moves: u32,
    state: PointState,
}

impl ExplosionPoint {
    /// Create a point at (x, y). The first next position is the step rule
    /// applied to the start.
    pub fn new(x: i32, y: i32, step_x: Step, step_y: Step) -> Self {
        Self {
            current: Pos::new(x, y),
            next: Pos::new(step_x.apply(x), step_y.apply(y)),
            step_x,
            step_y,
            moves: 0,
            max_moves: MAX_MOVES,
            state: PointState::Active,
        }
    }

    /// Override the move cap. A cap of zero makes the point exhausted at once.
    pub fn with_max_moves(mut self, max_moves: u32) -> Self {
        self.max_moves = max_moves;
        if self.moves >= self.max_moves && self.state == PointState::Active {
            self.state = PointState::Exhausted;
        }
        self
    }

    pub fn current(&self) -> Pos {
        self.current
    }

    pub fn next(&self) -> Pos {
        self.next
    }

    pub fn steps(&self) -> (Step, Step) {
        (self.step_x, self.step_y)
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn max_moves(&self) -> u32 {
        self.max_moves
    }

    pub fn state(&self) -> PointState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == PointState::Active
    }

    pub fn is_blocked(&self) -> bool {
        self.state == PointState::Blocked
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == PointState::Exhausted
    }

    /// Blocked or exhausted
    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }

    /// Mark the point as blocked without moving it.
    pub(crate) fn block(&mut self) {
        if self.is_active() {
            self.state = PointState::Blocked;
        }
    }

    /// Commit a move to the already-validated next position.
    pub(crate) fn advance(&mut self) -> MoveOutcome {
        if !self.is_active() {
            return MoveOutcome::Idle;
        }

        let prev = self.current;
        self.current = self.next;
        self.next = Pos::new(self.step_x.apply(prev.x), self.step_y.apply(prev.y));
        self.moves += 1;

        if self.moves >= self.max_moves {
            self.state = PointState::Exhausted;
            MoveOutcome::Exhausted
        } else {
            MoveOutcome::Moved
        }
    }
}
