//! Active piece - the falling tetromino and its kinematics
//!
//! Movement and rotation build a candidate position and validate it against
//! the board; the piece only changes when the candidate is free.

use crate::board::Board;
use crate::pieces::{piece_def, PieceDef, PieceShape, KICKS};
use crate::types::{PaletteColor, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, HIDDEN_ROWS};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivePiece {
    def: &'static PieceDef,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece at an explicit origin, facing north
    pub fn new(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            def: piece_def(kind),
            rotation: Rotation::North,
            x,
            y,
        }
    }

    /// Create a piece at its spawn position.
    ///
    /// The origin sits one row above the first visible row, adjusted by the
    /// catalog's spawn offset.
    pub fn spawn(kind: PieceKind) -> Self {
        let def = piece_def(kind);
        let (sx, sy) = def.spawn;
        Self::new(kind, sx, HIDDEN_ROWS as i8 - 1 + sy)
    }

    pub fn kind(&self) -> PieceKind {
        self.def.kind
    }

    pub fn color(&self) -> PaletteColor {
        self.def.color
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> &'static PieceShape {
        self.def.shape(self.rotation)
    }

    /// Absolute board positions of the four minos
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// True if the piece overlaps walls, the floor, or settled blocks.
    ///
    /// Cells above the grid (`y < 0`) only collide with the side walls.
    pub fn collides(&self, board: &Board) -> bool {
        self.cells().iter().any(|&(x, y)| {
            x < 0
                || x >= BOARD_WIDTH as i8
                || y >= BOARD_HEIGHT as i8
                || (y >= 0 && board.is_occupied(x, y))
        })
    }

    /// Copy of this piece translated by (dx, dy), if that position is free
    pub fn moved(&self, board: &Board, dx: i8, dy: i8) -> Option<Self> {
        let candidate = Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        };
        (!candidate.collides(board)).then_some(candidate)
    }

    /// Translate by (dx, dy). Returns false and leaves the piece untouched on collision.
    pub fn try_move(&mut self, board: &Board, dx: i8, dy: i8) -> bool {
        match self.moved(board, dx, dy) {
            Some(next) => {
                *self = next;
                true
            }
            None => false,
        }
    }

    /// Copy of this piece rotated one step, kicked left, right or up if needed
    pub fn rotated(&self, board: &Board, clockwise: bool) -> Option<Self> {
        let rotation = if clockwise {
            self.rotation.rotate_cw()
        } else {
            self.rotation.rotate_ccw()
        };
        let turned = Self { rotation, ..*self };
        if !turned.collides(board) {
            return Some(turned);
        }

        KICKS
            .iter()
            .find_map(|&(dx, dy)| turned.moved(board, dx, dy))
    }

    /// Rotate with wall kicks. On failure both rotation and position are unchanged.
    pub fn try_rotate(&mut self, board: &Board, clockwise: bool) -> bool {
        match self.rotated(board, clockwise) {
            Some(next) => {
                *self = next;
                true
            }
            None => false,
        }
    }

    /// Rows the piece can fall before it rests on something
    pub fn hard_drop_distance(&self, board: &Board) -> i8 {
        let mut probe = *self;
        let mut distance = 0;
        while probe.try_move(board, 0, 1) {
            distance += 1;
        }
        distance
    }
}
