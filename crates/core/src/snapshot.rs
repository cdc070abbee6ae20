use crate::active::ActivePiece;
use crate::board::Board;
use crate::game_state::Phase;
use crate::types::{PieceKind, NEXT_PREVIEW};

/// Everything a frame needs, copied out of the simulation once per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub board: Board,
    pub active: Option<ActivePiece>,
    pub next_queue: [PieceKind; NEXT_PREVIEW],
    pub phase: Phase,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: Board::new(),
            active: None,
            next_queue: [PieceKind::I; NEXT_PREVIEW],
            phase: Phase::Running,
            score: 0,
            level: 1,
            lines: 0,
        }
    }
}
