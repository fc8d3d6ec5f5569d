//! Board module - the display grid, its barriers and the explosion points
//!
//! The board is a 173x40 grid of cells stored as a flat row-major vector.
//! Coordinates: (x, y) where x ranges 0..172 (left to right), y ranges 0..39
//! (top to bottom). Writes outside the grid are silently ignored.

use crate::barrier::Barrier;
use crate::point::{ExplosionPoint, MoveOutcome};
use crate::types::{Glyph, Pos, Step, Tint, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the board
const GRID_SIZE: usize = (GRID_WIDTH * GRID_HEIGHT) as usize;

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub pos: Pos,
    pub glyph: Glyph,
}

/// Counts of points by state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointCounts {
    pub active: usize,
    pub blocked: usize,
    pub exhausted: usize,
}

/// What happened during one call to [`Board::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Points that moved (including the ones that used their last move)
    pub moved: usize,
    /// Points that became blocked this tick
    pub blocked: usize,
    /// Points that used their last move this tick
    pub exhausted: usize,
    /// Points still active after the tick
    pub active: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: Vec<Cell>,
    barriers: Vec<Barrier>,
    points: Vec<ExplosionPoint>,
}

impl Board {
    /// Create a blank board with no barriers and no points
    pub fn new() -> Self {
        let mut cells = Vec::with_capacity(GRID_SIZE);
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                cells.push(Cell {
                    pos: Pos::new(x, y),
                    glyph: Glyph::Blank,
                });
            }
        }
        Self {
            cells,
            barriers: Vec::new(),
            points: Vec::new(),
        }
    }

    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= GRID_WIDTH || y >= GRID_HEIGHT {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> i32 {
        GRID_WIDTH
    }

    pub fn height(&self) -> i32 {
        GRID_HEIGHT
    }

    /// Glyph at (x, y), None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Glyph> {
        Self::index(x, y).map(|idx| self.cells[idx].glyph)
    }

    /// Mark (x, y) with the default white marker
    pub fn mark(&mut self, x: i32, y: i32) {
        self.mark_tinted(x, y, Tint::White);
    }

    /// Mark (x, y) with the given tint. No-op when out of bounds.
    pub fn mark_tinted(&mut self, x: i32, y: i32, tint: Tint) {
        if let Some(idx) = Self::index(x, y) {
            self.cells[idx].glyph = Glyph::Filled(tint);
        }
    }

    /// Check if position is outside the grid
    pub fn out_of_bounds(&self, x: i32, y: i32) -> bool {
        x < 0 || y < 0 || x >= GRID_WIDTH || y >= GRID_HEIGHT
    }

    /// Check if position lies inside any registered barrier
    pub fn in_barrier(&self, x: i32, y: i32) -> bool {
        self.barriers.iter().any(|b| b.contains(x, y))
    }

    /// Register a barrier and paint its footprint
    pub fn add_barrier(&mut self, start_x: i32, end_x: i32, start_y: i32, end_y: i32) {
        let barrier = Barrier::new(start_x, end_x, start_y, end_y);
        for (x, y) in barrier.footprint() {
            self.mark(x, y);
        }
        self.barriers.push(barrier);
    }

    /// Replace the point set with a grid of points fanning out from the
    /// horizontal center of the top rows.
    ///
    /// Produces `(spread_x + 1) * (spread_y + 1)` points. Column `i` starts at
    /// `GRID_WIDTH / 2 + offset + i` with an x step of `offset + i`, where
    /// `offset = spread_x / 2 - spread_x`, and holds one point on each of rows
    /// `0..=spread_x`. Every point moves down by one.
    pub fn seed_explosion(&mut self, spread_x: i32, spread_y: i32) {
        let offset = (spread_x / 2).saturating_sub(spread_x);
        let columns = spread_y.saturating_add(1).max(0) as usize;
        let rows = spread_x.saturating_add(1).max(0) as usize;
        let mut points = Vec::with_capacity(columns.saturating_mul(rows).min(GRID_SIZE));

        for i in 0..=spread_y {
            let step_x = offset.saturating_add(i);
            for j in 0..=spread_x {
                let p = ExplosionPoint::new(
                    (GRID_WIDTH / 2).saturating_add(step_x),
                    j,
                    Step::Linear(step_x),
                    Step::Linear(1),
                );
                let start = p.current();
                self.mark(start.x, start.y);
                points.push(p);
            }
        }

        self.points = points;
    }

    /// Add a single point, marking its start cell
    pub fn push_point(&mut self, point: ExplosionPoint) {
        let start = point.current();
        self.mark(start.x, start.y);
        self.points.push(point);
    }

    /// First point whose current position is (x, y)
    pub fn point_at(&self, x: i32, y: i32) -> Option<&ExplosionPoint> {
        self.points
            .iter()
            .find(|p| p.current() == Pos::new(x, y))
    }

    /// Ask the point at `index` to move once.
    ///
    /// Returns None if there is no such point.
    pub fn move_point(&mut self, index: usize) -> Option<MoveOutcome> {
        let point = self.points.get(index)?;
        if point.is_terminal() {
            return Some(MoveOutcome::Idle);
        }

        let next = point.next();
        if self.in_barrier(next.x, next.y) || self.out_of_bounds(next.x, next.y) {
            self.points[index].block();
            return Some(MoveOutcome::Blocked);
        }

        self.mark(next.x, next.y);
        Some(self.points[index].advance())
    }

    /// Advance every active point once
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();

        for index in 0..self.points.len() {
            match self.move_point(index) {
                Some(MoveOutcome::Moved) => report.moved += 1,
                Some(MoveOutcome::Exhausted) => {
                    report.moved += 1;
                    report.exhausted += 1;
                }
                Some(MoveOutcome::Blocked) => report.blocked += 1,
                Some(MoveOutcome::Idle) | None => {}
            }
        }

        report.active = self.points.iter().filter(|p| p.is_active()).count();
        report
    }

    pub fn counts(&self) -> PointCounts {
        let mut counts = PointCounts::default();
        for p in &self.points {
            if p.is_active() {
                counts.active += 1;
            } else if p.is_blocked() {
                counts.blocked += 1;
            } else {
                counts.exhausted += 1;
            }
        }
        counts
    }

    /// True once no point is active
    pub fn is_settled(&self) -> bool {
        self.points.iter().all(|p| p.is_terminal())
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn barriers(&self) -> &[Barrier] {
        &self.barriers
    }

    pub fn points(&self) -> &[ExplosionPoint] {
        &self.points
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.glyph.is_filled()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(172, 0), Some(172));
        assert_eq!(Board::index(0, 1), Some(173));
        assert_eq!(Board::index(172, 39), Some(GRID_SIZE - 1));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(173, 0), None);
        assert_eq!(Board::index(0, 40), None);
    }

    #[test]
    fn test_cells_know_their_position() {
        let board = Board::new();
        assert_eq!(board.cells().len(), GRID_SIZE);
        for (i, cell) in board.cells().iter().enumerate() {
            assert_eq!(Board::index(cell.pos.x, cell.pos.y), Some(i));
        }
    }

    #[test]
    fn test_add_barrier_registers_once() {
        let mut board = Board::new();
        board.add_barrier(1, 49, 16, 17);
        assert_eq!(board.barriers().len(), 1);
        assert_eq!(board.filled_count(), 48);
    }

    #[test]
    fn test_seed_explosion_negative_spread_is_empty() {
        let mut board = Board::new();
        board.seed_explosion(10, 10);
        board.seed_explosion(i32::MIN, 0);
        assert!(board.points().is_empty());
        board.seed_explosion(0, i32::MIN);
        assert!(board.points().is_empty());
    }

    #[test]
    fn test_move_point_out_of_range_index() {
        let mut board = Board::new();
        assert_eq!(board.move_point(0), None);
    }
}
