//! Board presentation: snapshot + match highlights + HUD into a framebuffer.

use orbmatch_core::{BoardSnapshot, MatchSet};
use orbmatch_input::GridLayout;
use orbmatch_types::{CellRef, TileKind};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal cells per board cell. Two columns per orb keeps the aspect
/// ratio roughly square and gives mouse drags some horizontal room.
pub const CELL_W: u16 = 4;
pub const CELL_H: u16 = 2;

const BORDER: Rgb = Rgb::new(90, 90, 110);
const HUD_FG: Rgb = Rgb::new(200, 200, 210);
const EMPTY_FG: Rgb = Rgb::new(60, 60, 70);

fn kind_color(kind: TileKind) -> Rgb {
    match kind {
        TileKind::Ruby => Rgb::new(235, 70, 90),
        TileKind::Amber => Rgb::new(240, 180, 40),
        TileKind::Jade => Rgb::new(70, 210, 120),
        TileKind::Azure => Rgb::new(80, 150, 250),
        TileKind::Iris => Rgb::new(190, 110, 240),
        TileKind::Pearl => Rgb::new(230, 230, 230),
    }
}

/// What the HUD line shows alongside the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct HudState {
    pub score: u32,
    pub chain: u32,
    pub resolving: bool,
}

/// Renders a board snapshot into a framebuffer, centered in the viewport.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardView {
    origin_x: u16,
    origin_y: u16,
}

impl BoardView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the board origin for a viewport, centering when there is
    /// room and pinning to the top-left corner when there is not.
    pub fn layout(&mut self, cols: usize, rows: usize, view_w: u16, view_h: u16) {
        let board_w = cols as u16 * CELL_W + 2;
        let board_h = rows as u16 * CELL_H + 2;
        self.origin_x = view_w.saturating_sub(board_w) / 2;
        // Leave a line above the board for the HUD.
        self.origin_y = (view_h.saturating_sub(board_h) / 2).max(1);
    }

    /// Grid geometry in terminal coordinates, for pointer mapping.
    pub fn grid_layout(&self, cols: usize, rows: usize) -> GridLayout {
        GridLayout {
            origin_x: f32::from(self.origin_x + 1),
            origin_y: f32::from(self.origin_y + 1),
            cell_w: f32::from(CELL_W),
            cell_h: f32::from(CELL_H),
            cols,
            rows,
        }
    }

    pub fn render(
        &self,
        snap: &BoardSnapshot,
        highlight: &MatchSet,
        hud: HudState,
        fb: &mut FrameBuffer,
    ) {
        fb.clear();
        self.draw_border(snap.cols(), snap.rows(), fb);
        self.draw_tiles(snap, highlight, fb);
        self.draw_hud(snap.rows(), hud, fb);
    }

    fn draw_border(&self, cols: usize, rows: usize, fb: &mut FrameBuffer) {
        let style = CellStyle {
            fg: BORDER,
            ..CellStyle::default()
        };
        let w = cols as u16 * CELL_W;
        let h = rows as u16 * CELL_H;
        let (x0, y0) = (self.origin_x, self.origin_y);
        let (x1, y1) = (x0 + w + 1, y0 + h + 1);

        for x in x0 + 1..x1 {
            fb.put_char(x, y0, '─', style);
            fb.put_char(x, y1, '─', style);
        }
        for y in y0 + 1..y1 {
            fb.put_char(x0, y, '│', style);
            fb.put_char(x1, y, '│', style);
        }
        fb.put_char(x0, y0, '┌', style);
        fb.put_char(x1, y0, '┐', style);
        fb.put_char(x0, y1, '└', style);
        fb.put_char(x1, y1, '┘', style);
    }

    fn draw_tiles(&self, snap: &BoardSnapshot, highlight: &MatchSet, fb: &mut FrameBuffer) {
        for row in 0..snap.rows() {
            for col in 0..snap.cols() {
                let cell = CellRef::new(row as i8, col as i8);
                let x = self.origin_x + 1 + col as u16 * CELL_W;
                let y = self.origin_y + 1 + row as u16 * CELL_H;
                match snap.get(cell) {
                    Some(kind) => {
                        let lit = highlight.contains(cell);
                        let style = CellStyle {
                            fg: kind_color(kind),
                            bg: if lit {
                                Rgb::new(70, 70, 50)
                            } else {
                                Rgb::new(0, 0, 0)
                            },
                            bold: lit,
                        };
                        let glyph = if lit { '◉' } else { '●' };
                        // Center the orb in its 4x2 cell.
                        fb.fill_rect(x, y, CELL_W, CELL_H, ' ', style);
                        fb.put_char(x + 1, y, glyph, style);
                    }
                    None => {
                        let style = CellStyle {
                            fg: EMPTY_FG,
                            ..CellStyle::default()
                        };
                        fb.put_char(x + 1, y, '·', style);
                    }
                }
            }
        }
    }

    fn draw_hud(&self, rows: usize, hud: HudState, fb: &mut FrameBuffer) {
        let style = CellStyle {
            fg: HUD_FG,
            ..CellStyle::default()
        };
        let line = if hud.resolving {
            format!("score {}  chain x{}", hud.score, hud.chain)
        } else {
            format!("score {}", hud.score)
        };
        fb.put_str(self.origin_x, self.origin_y.saturating_sub(1), &line, style);

        let help = "drag orbs to swap · r restart · q quit";
        let below = self.origin_y + rows as u16 * CELL_H + 2;
        fb.put_str(self.origin_x, below, help, style);
    }
}
