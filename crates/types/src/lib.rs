//! Core types module - shared data structures and constants
//!
//! Pure data types with no external dependencies, usable from the simulation,
//! the terminal view and the binary alike.
//!
//! # Grid Dimensions
//!
//! - **Width**: 173 columns (indexed 0-172)
//! - **Height**: 40 rows (indexed 0-39)
//!
//! Coordinates are signed (`i32`) so that a step rule can carry a point past
//! the left or top edge; such positions are simply out of bounds.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 300 | Interval between simulation updates |
//! | `RENDER_MS` | 400 | Interval between full redraws |
//!
//! # Examples
//!
//! ```
//! use ascii_blast_types::{Glyph, Pos, Step, Tint, GRID_WIDTH};
//!
//! let step = Step::Linear(-3);
//! assert_eq!(step.apply(10), 7);
//!
//! let glyph = Glyph::Filled(Tint::White);
//! assert!(glyph.is_filled());
//!
//! let p = Pos::new(GRID_WIDTH / 2, 0);
//! assert_eq!(p.x, 86);
//! ```

/// Grid width in cells
pub const GRID_WIDTH: i32 = 173;

/// Grid height in cells
pub const GRID_HEIGHT: i32 = 40;

/// Moves an explosion point may make before it is exhausted
pub const MAX_MOVES: u32 = 100;

/// Simulation update interval in milliseconds
pub const TICK_MS: u64 = 300;

/// Redraw interval in milliseconds
pub const RENDER_MS: u64 = 400;

/// Character printed for a filled cell
pub const FILLED_CHAR: char = '*';

/// Character printed for a blank cell
pub const BLANK_CHAR: char = ' ';

/// Grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Marker color for a filled cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tint {
    #[default]
    White,
    Red,
    Blue,
    Yellow,
}

/// What a grid cell displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Glyph {
    #[default]
    Blank,
    Filled(Tint),
}

impl Glyph {
    pub fn is_filled(&self) -> bool {
        matches!(self, Glyph::Filled(_))
    }

    /// Character printed for this glyph
    pub fn as_char(&self) -> char {
        match self {
            Glyph::Blank => BLANK_CHAR,
            Glyph::Filled(_) => FILLED_CHAR,
        }
    }
}

/// Per-axis step rule applied to a coordinate when computing the next position
///
/// Saturates at the `i32` range; a saturated coordinate is off the grid, so
/// the point blocks on its next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `d + k`
    Linear(i32),
}

impl Step {
    #[inline]
    pub fn apply(&self, d: i32) -> i32 {
        match *self {
            Step::Linear(k) => d.saturating_add(k),
        }
    }
}

impl Default for Step {
    fn default() -> Self {
        Step::Linear(0)
    }
}

/// Loop control actions triggered from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlAction {
    /// Leave the main loop and restore the terminal
    Quit,
    /// Toggle simulation updates (rendering continues)
    Pause,
    /// Force the next frame to be drawn immediately
    Redraw,
}

impl ControlAction {
    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlAction::Quit => "quit",
            ControlAction::Pause => "pause",
            ControlAction::Redraw => "redraw",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_is_slower_than_updates() {
        assert!(RENDER_MS > TICK_MS);
        assert_eq!(TICK_MS, 300);
        assert_eq!(RENDER_MS, 400);
    }

    #[test]
    fn linear_step_handles_negative_deltas() {
        assert_eq!(Step::Linear(5).apply(0), 5);
        assert_eq!(Step::Linear(-5).apply(2), -3);
        assert_eq!(Step::default().apply(42), 42);
    }

    #[test]
    fn glyph_chars() {
        assert_eq!(Glyph::Blank.as_char(), ' ');
        assert_eq!(Glyph::Filled(Tint::Red).as_char(), '*');
        assert!(!Glyph::default().is_filled());
    }

    #[test]
    fn linear_step_saturates_instead_of_overflowing() {
        assert_eq!(Step::Linear(1).apply(i32::MAX), i32::MAX);
        assert_eq!(Step::Linear(-5).apply(i32::MIN + 2), i32::MIN);
    }

    #[test]
    fn control_action_names() {
        assert_eq!(ControlAction::Quit.as_str(), "quit");
        assert_eq!(ControlAction::Pause.as_str(), "pause");
        assert_eq!(ControlAction::Redraw.as_str(), "redraw");
    }
}
