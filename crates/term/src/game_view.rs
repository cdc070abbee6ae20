//! PlayfieldView: blits a `GameSnapshot` into a framebuffer, plus screen layout.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::FrameBuffer;
use crate::renderer::CELL_COLS;
use crate::types::{BOARD_WIDTH, HIDDEN_ROWS, VISIBLE_HEIGHT};

/// Width reserved right of the playfield for the HUD.
pub const HUD_COLS: u16 = 16;

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

    /// Screen (row, col) of the playfield's top-left cell, centering
    /// playfield, frame and HUD together.
    pub fn playfield_origin(&self) -> (u16, u16) {
        let board_cols = BOARD_WIDTH as u16 * CELL_COLS;
        // frame on both sides, a gap, then the HUD
        let total_w = board_cols + 2 + 2 + HUD_COLS;
        // bottom frame row
        let total_h = VISIBLE_HEIGHT as u16 + 1;

        let col = self.width.saturating_sub(total_w) / 2 + 1;
        let row = self.height.saturating_sub(total_h) / 2;
        (row, col)
    }
}

/// Maps the visible part of the board and the active piece into a framebuffer.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlayfieldView;

impl PlayfieldView {
    /// Render the snapshot into an existing framebuffer.
    ///
    /// Allocation-free once `fb` has the playfield size.
    pub fn render_into(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        fb.resize(BOARD_WIDTH as u16, VISIBLE_HEIGHT as u16);

        for y in 0..VISIBLE_HEIGHT as u16 {
            let board_y = y as usize + HIDDEN_ROWS as usize;
            for (x, &cell) in snap.board.row(board_y).iter().enumerate() {
                fb.set(x as u16, y, cell);
            }
        }

        if let Some(active) = snap.active {
            let color = Some(active.color());
            for (x, y) in active.cells() {
                let screen_y = y as i16 - HIDDEN_ROWS as i16;
                if x >= 0 && screen_y >= 0 {
                    fb.set(x as u16, screen_y as u16, color);
                }
            }
        }
    }

    pub fn render(&self, snap: &GameSnapshot) -> FrameBuffer {
        let mut fb = FrameBuffer::new(BOARD_WIDTH as u16, VISIBLE_HEIGHT as u16);
        self.render_into(snap, &mut fb);
        fb
    }
}
