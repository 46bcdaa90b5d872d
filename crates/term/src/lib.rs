//! Terminal front end: framebuffer, board view, and the crossterm session.

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use board_view::{BoardView, HudState, CELL_H, CELL_W};
pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use renderer::TerminalRenderer;
