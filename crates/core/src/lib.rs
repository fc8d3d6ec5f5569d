//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the explosion simulation: the grid, its barriers and
//! the moving points. It has **zero dependencies** on terminal I/O, so every
//! rule can be exercised headless.
//!
//! # Module Structure
//!
//! - [`board`]: 173x40 grid, barrier checks, point movement and tick reports
//! - [`barrier`]: inclusive axis-aligned no-entry rectangles
//! - [`point`]: explosion point state machine (active, blocked, exhausted)
//! - [`scene`]: the standard startup layout
//! - [`cadence`]: fixed-interval scheduling for the update and render loops
//!
//! # Example
//!
//! ```
//! use ascii_blast_core::scene;
//!
//! let mut board = scene::standard();
//! assert_eq!(board.points().len(), 121);
//!
//! let report = board.tick();
//! assert_eq!(report.moved, 121);
//! assert!(!board.is_settled());
//! ```

pub mod barrier;
pub mod board;
pub mod cadence;
pub mod point;
pub mod scene;

pub use ascii_blast_types as types;

pub use barrier::Barrier;
pub use board::{Board, Cell, PointCounts, TickReport};
pub use cadence::Cadence;
pub use point::{ExplosionPoint, MoveOutcome, PointState};
