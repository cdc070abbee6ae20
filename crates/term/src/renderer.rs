//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after `invalidate`) is a full repaint. Later
//! frames only rewrite the runs of cells that changed since the previous
//! frame. Within a run, consecutive cells of the same color share one color
//! command. The last row is always repainted in full because some terminals
//! drop updates to the bottom line.
//!
//! All output for one draw is encoded into a byte buffer with crossterm
//! commands and written in a single `write_all`.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal, QueueableCommand,
};

use crate::fb::FrameBuffer;
use crate::types::{Cell, PaletteColor};

/// Terminal columns per board cell.
pub const CELL_COLS: u16 = 2;

/// Text printed for one cell; only its background color shows.
const CELL_GLYPH: &str = "  ";

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    /// Screen (row, col) of the framebuffer's top-left cell, 0-based
    origin: (u16, u16),
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            origin: (0, 0),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn origin(&self) -> (u16, u16) {
        self.origin
    }

    /// Move the playfield on screen. Forces a full repaint.
    pub fn set_origin(&mut self, row: u16, col: u16) {
        self.origin = (row, col);
        self.invalidate();
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// True if the next `draw_swap` will repaint everything.
    pub fn needs_full_redraw(&self) -> bool {
        self.last.is_none()
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Draw `current`, diffing against `previous` when given.
    pub fn draw(&mut self, current: &FrameBuffer, previous: Option<&FrameBuffer>) -> Result<()> {
        self.buf.clear();
        match previous {
            Some(prev) => encode_diff_into(prev, current, self.origin, &mut self.buf)?,
            None => encode_full_into(current, self.origin, &mut self.buf)?,
        }
        self.flush_buf()
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers should keep one `FrameBuffer` and pass it in every frame.
    /// The renderer will diff against the previous frame and then swap buffers
    /// so the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        // Take previous out to avoid borrow conflicts (no cloning).
        let prev = self.last.take();
        self.draw(fb, prev.as_ref())?;

        let mut prev = prev.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
        prev.resize(fb.width(), fb.height());

        // Swap current into prev so next frame can diff without cloning.
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    /// Write pre-encoded bytes (HUD text, frame) in one go.
    pub fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.is_empty() {
            return Ok(());
        }
        self.out.write_all(bytes)?;
        self.out.flush()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a full-frame repaint into `out`.
///
/// One cursor move per row, then the whole row.
pub fn encode_full_into(fb: &FrameBuffer, origin: (u16, u16), out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    for y in 0..fb.height() {
        encode_run_into(fb, y, 0, fb.width(), origin, out)?;
    }
    Ok(())
}

/// Encode a diff repaint (changed runs plus the last row) into `out`.
///
/// Falls back to a full repaint when the sizes differ.
pub fn encode_diff_into(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    origin: (u16, u16),
    out: &mut Vec<u8>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        return encode_full_into(next, origin, out);
    }

    out.queue(ResetColor)?;
    for_each_changed_run(prev, next, |x, y, len| {
        encode_run_into(next, y, x, len, origin, out)
    })?;

    if next.height() > 0 {
        encode_run_into(next, next.height() - 1, 0, next.width(), origin, out)?;
    }
    Ok(())
}

/// Position the cursor at cell (x, y) and paint `len` cells, switching color
/// only where it changes.
fn encode_run_into(
    fb: &FrameBuffer,
    y: u16,
    x: u16,
    len: u16,
    origin: (u16, u16),
    out: &mut Vec<u8>,
) -> Result<()> {
    let (row, col) = origin;
    out.queue(cursor::MoveTo(col + x * CELL_COLS, row + y))?;

    // The run starts right after a reset, i.e. on the default background.
    let mut current: Cell = None;
    for dx in 0..len {
        let cell = fb.get(x + dx, y);
        if cell != current {
            out.queue(SetBackgroundColor(cell_to_color(cell)))?;
            current = cell;
        }
        out.queue(Print(CELL_GLYPH))?;
    }

    out.queue(ResetColor)?;
    Ok(())
}

fn cell_to_color(cell: Cell) -> Color {
    match cell {
        None => Color::Reset,
        Some(PaletteColor::Black) => Color::Black,
        Some(PaletteColor::Red) => Color::DarkRed,
        Some(PaletteColor::Green) => Color::DarkGreen,
        Some(PaletteColor::Yellow) => Color::DarkYellow,
        Some(PaletteColor::Blue) => Color::DarkBlue,
        Some(PaletteColor::Magenta) => Color::DarkMagenta,
        Some(PaletteColor::Cyan) => Color::DarkCyan,
        Some(PaletteColor::White) => Color::Grey,
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let (a, b) = (prev.row(y), next.row(y));
        let mut x = 0;
        while x < w {
            if a[x as usize] == b[x as usize] {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && a[x as usize] != b[x as usize] {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
