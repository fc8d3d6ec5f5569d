//! BoardView: maps `core::Board` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Board;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Glyph, Tint, GRID_HEIGHT, GRID_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Draws the grid one terminal column per cell, anchored at the top-left,
/// with an optional status line under it.
pub struct BoardView {
    show_status: bool,
}

impl Default for BoardView {
    fn default() -> Self {
        Self { show_status: true }
    }
}

impl BoardView {
    pub fn new(show_status: bool) -> Self {
        Self { show_status }
    }

    /// Render the board into `fb`. Cells past the framebuffer edge are clipped.
    pub fn render_into(&self, board: &Board, paused: bool, fb: &mut FrameBuffer) {
        fb.clear(CellStyle::default().into_cell(' '));

        for cell in board.cells() {
            if let Glyph::Filled(tint) = cell.glyph {
                fb.put_char(
                    cell.pos.x as u16,
                    cell.pos.y as u16,
                    cell.glyph.as_char(),
                    tint_style(tint),
                );
            }
        }

        if self.show_status && fb.height() > GRID_HEIGHT as u16 {
            self.draw_status(board, paused, fb, GRID_HEIGHT as u16);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, board: &Board, paused: bool, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, paused, &mut fb);
        fb
    }

    /// Framebuffer size that shows the whole grid plus the status line.
    pub fn full_viewport(&self) -> Viewport {
        let extra = if self.show_status { 1 } else { 0 };
        Viewport::new(GRID_WIDTH as u16, GRID_HEIGHT as u16 + extra)
    }

    fn draw_status(&self, board: &Board, paused: bool, fb: &mut FrameBuffer, y: u16) {
        let label = CellStyle::new(Rgb::new(150, 150, 150), false);
        let value = CellStyle::new(Rgb::new(230, 230, 230), true);
        let counts = board.counts();

        let mut x = fb.put_str(0, y, "active ", label);
        x = fb.put_usize(x, y, counts.active, value);
        x = fb.put_str(x, y, "  blocked ", label);
        x = fb.put_usize(x, y, counts.blocked, value);
        x = fb.put_str(x, y, "  exhausted ", label);
        x = fb.put_usize(x, y, counts.exhausted, value);

        if paused {
            x = fb.put_str(x, y, "  PAUSED", tint_style(Tint::Yellow));
        }
        fb.put_str(x, y, "  [q] quit  [p] pause  [r] redraw", label);
    }
}

/// Foreground color for a marker tint. Markers are always bold.
pub fn tint_style(tint: Tint) -> CellStyle {
    let fg = match tint {
        Tint::White => Rgb::new(235, 235, 235),
        Tint::Red => Rgb::new(230, 70, 70),
        Tint::Blue => Rgb::new(80, 220, 220),
        Tint::Yellow => Rgb::new(240, 220, 80),
    };
    CellStyle::new(fg, true)
}
