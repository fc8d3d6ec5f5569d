//! Terminal rendering layer.
//!
//! The board is mapped into a simple framebuffer ([`BoardView`], pure) which
//! is then flushed to the terminal ([`TerminalRenderer`], I/O). Each flush
//! clears the screen and reprints every cell.

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use ascii_blast_core as core;
pub use ascii_blast_types as types;

pub use board_view::{tint_style, BoardView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_full_into, TerminalRenderer};
