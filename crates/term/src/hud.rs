//! Text around the playfield: a frame and the score panel.
//!
//! The panel keeps the lines it last drew and only rewrites lines whose text
//! changed, so a quiet tick produces no output at all.

use std::fmt::Write as _;

use anyhow::Result;
use crossterm::{cursor, style::Print, QueueableCommand};

use crate::core::{GameSnapshot, Phase};
use crate::game_view::HUD_COLS;
use crate::renderer::CELL_COLS;
use crate::types::{BOARD_WIDTH, VISIBLE_HEIGHT};

const PANEL_LINES: usize = 12;

#[derive(Debug, Default)]
pub struct Hud {
    drawn: Option<[String; PANEL_LINES]>,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget what is on screen; the next draw repaints frame and panel.
    pub fn invalidate(&mut self) {
        self.drawn = None;
    }

    /// Encode the frame (when invalidated) and any changed panel lines.
    ///
    /// `origin` is the screen (row, col) of the playfield's top-left cell.
    pub fn encode_into(
        &mut self,
        snap: &GameSnapshot,
        origin: (u16, u16),
        out: &mut Vec<u8>,
    ) -> Result<()> {
        let lines = panel_lines(snap);
        let (row, col) = origin;
        let panel_col = col + BOARD_WIDTH as u16 * CELL_COLS + 2;

        let previous = match self.drawn.take() {
            Some(prev) => Some(prev),
            None => {
                encode_frame_into(origin, out)?;
                None
            }
        };

        for (i, line) in lines.iter().enumerate() {
            if previous.as_ref().is_some_and(|p| &p[i] == line) {
                continue;
            }
            out.queue(cursor::MoveTo(panel_col, row + i as u16))?;
            out.queue(Print(format!("{:<width$}", line, width = HUD_COLS as usize)))?;
        }

        self.drawn = Some(lines);
        Ok(())
    }
}

fn panel_lines(snap: &GameSnapshot) -> [String; PANEL_LINES] {
    let mut next = String::new();
    for kind in snap.next_queue {
        let _ = write!(next, "{} ", kind.as_str());
    }

    let banner = match snap.phase {
        Phase::Running => "",
        Phase::Paused => "PAUSED",
        Phase::GameOver => "GAME OVER",
    };
    let hint = match snap.phase {
        Phase::Running => "p pause  q quit",
        Phase::Paused => "p resume",
        Phase::GameOver => "r restart",
    };

    [
        "SCORE".to_string(),
        snap.score.to_string(),
        String::new(),
        "LEVEL".to_string(),
        snap.level.to_string(),
        "LINES".to_string(),
        snap.lines.to_string(),
        String::new(),
        "NEXT".to_string(),
        next.trim_end().to_string(),
        banner.to_string(),
        hint.to_string(),
    ]
}

/// Side walls and floor around the visible playfield.
fn encode_frame_into(origin: (u16, u16), out: &mut Vec<u8>) -> Result<()> {
    let (row, col) = origin;
    let inner = BOARD_WIDTH as u16 * CELL_COLS;
    let left = col.saturating_sub(1);

    for y in 0..VISIBLE_HEIGHT as u16 {
        out.queue(cursor::MoveTo(left, row + y))?;
        out.queue(Print('│'))?;
        out.queue(cursor::MoveTo(col + inner, row + y))?;
        out.queue(Print('│'))?;
    }

    out.queue(cursor::MoveTo(left, row + VISIBLE_HEIGHT as u16))?;
    out.queue(Print('└'))?;
    out.queue(Print("─".repeat(inner as usize)))?;
    out.queue(Print('┘'))?;
    Ok(())
}
