//! Terminal session management and frame output.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Owns the raw-mode terminal session and flushes framebuffers to it.
///
/// Raw mode, the alternate screen, and mouse capture are entered on
/// construction and restored in `Drop`, so a panic unwinding through the
/// game loop still leaves the terminal usable.
pub struct TerminalRenderer {
    out: io::Stdout,
    width: u16,
    height: u16,
}

impl TerminalRenderer {
    pub fn new() -> Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture,
        )
        .context("failed to enter alternate screen")?;
        let (width, height) = terminal::size().context("failed to query terminal size")?;
        Ok(Self { out, width, height })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Record a resize reported by the event stream.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Write a full frame. Redraws every cell; board frames are small
    /// enough that diffing against the previous frame is not worth it.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        queue!(self.out, cursor::MoveTo(0, 0))?;
        let mut style: Option<CellStyle> = None;
        for y in 0..fb.height().min(self.height) {
            queue!(self.out, cursor::MoveTo(0, y))?;
            for x in 0..fb.width().min(self.width) {
                let glyph = match fb.get(x, y) {
                    Some(g) => g,
                    None => continue,
                };
                if style != Some(glyph.style) {
                    queue!(
                        self.out,
                        SetForegroundColor(to_color(glyph.style.fg)),
                        SetBackgroundColor(to_color(glyph.style.bg)),
                    )?;
                    if glyph.style.bold {
                        queue!(self.out, SetAttribute(Attribute::Bold))?;
                    } else {
                        queue!(self.out, SetAttribute(Attribute::Reset))?;
                        // Attribute::Reset also clears colors.
                        queue!(
                            self.out,
                            SetForegroundColor(to_color(glyph.style.fg)),
                            SetBackgroundColor(to_color(glyph.style.bg)),
                        )?;
                    }
                    style = Some(glyph.style);
                }
                queue!(self.out, Print(glyph.ch))?;
            }
        }
        queue!(self.out, ResetColor)?;
        self.out.flush().context("failed to flush frame")?;
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen,
        );
        let _ = terminal::disable_raw_mode();
    }
}
