//! Pieces module - the static tetromino catalog
//!
//! Every kind has four precomputed rotation states, each a set of four
//! `(dx, dy)` offsets from the piece origin (top-left of a 4x4 box), plus a
//! spawn offset and a display color. Rotation is a table lookup; there is no
//! runtime derivation.

use crate::types::{PaletteColor, PieceKind, Rotation};

/// Offset of a single mino relative to piece origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece origin
pub type PieceShape = [MinoOffset; 4];

/// Immutable definition of one piece kind.
#[derive(Debug, PartialEq, Eq)]
pub struct PieceDef {
    pub kind: PieceKind,
    pub color: PaletteColor,
    /// Indexed by [`Rotation::index`]
    pub rotations: [PieceShape; 4],
    /// Horizontal origin and vertical adjustment at spawn
    pub spawn: (i8, i8),
}

impl PieceDef {
    /// Shape for the given rotation
    pub fn shape(&self, rotation: Rotation) -> &PieceShape {
        &self.rotations[rotation.index()]
    }
}

/// The catalog, in [`PieceKind::ALL`] order.
pub static PIECES: [PieceDef; 7] = [
    PieceDef {
        kind: PieceKind::I,
        color: PaletteColor::Cyan,
        rotations: [
            [(0, 1), (1, 1), (2, 1), (3, 1)],
            [(2, 0), (2, 1), (2, 2), (2, 3)],
            [(0, 2), (1, 2), (2, 2), (3, 2)],
            [(1, 0), (1, 1), (1, 2), (1, 3)],
        ],
        spawn: (3, -1),
    },
    PieceDef {
        kind: PieceKind::O,
        color: PaletteColor::Yellow,
        rotations: [[(1, 0), (2, 0), (1, 1), (2, 1)]; 4],
        spawn: (3, 0),
    },
    PieceDef {
        kind: PieceKind::T,
        color: PaletteColor::Magenta,
        rotations: [
            [(1, 0), (0, 1), (1, 1), (2, 1)],
            [(1, 0), (1, 1), (2, 1), (1, 2)],
            [(0, 1), (1, 1), (2, 1), (1, 2)],
            [(1, 0), (0, 1), (1, 1), (1, 2)],
        ],
        spawn: (3, 0),
    },
    PieceDef {
        kind: PieceKind::S,
        color: PaletteColor::Green,
        rotations: [
            [(1, 0), (2, 0), (0, 1), (1, 1)],
            [(1, 0), (1, 1), (2, 1), (2, 2)],
            [(1, 1), (2, 1), (0, 2), (1, 2)],
            [(0, 0), (0, 1), (1, 1), (1, 2)],
        ],
        spawn: (3, 0),
    },
    PieceDef {
        kind: PieceKind::Z,
        color: PaletteColor::Red,
        rotations: [
            [(0, 0), (1, 0), (1, 1), (2, 1)],
            [(2, 0), (1, 1), (2, 1), (1, 2)],
            [(0, 1), (1, 1), (1, 2), (2, 2)],
            [(1, 0), (0, 1), (1, 1), (0, 2)],
        ],
        spawn: (3, 0),
    },
    PieceDef {
        kind: PieceKind::J,
        color: PaletteColor::Blue,
        rotations: [
            [(0, 0), (0, 1), (1, 1), (2, 1)],
            [(1, 0), (2, 0), (1, 1), (1, 2)],
            [(0, 1), (1, 1), (2, 1), (2, 2)],
            [(1, 0), (1, 1), (0, 2), (1, 2)],
        ],
        spawn: (3, 0),
    },
    PieceDef {
        kind: PieceKind::L,
        color: PaletteColor::White,
        rotations: [
            [(2, 0), (0, 1), (1, 1), (2, 1)],
            [(1, 0), (1, 1), (1, 2), (2, 2)],
            [(0, 1), (1, 1), (2, 1), (0, 2)],
            [(0, 0), (1, 0), (1, 1), (1, 2)],
        ],
        spawn: (3, 0),
    },
];

/// Catalog entry for a kind
pub fn piece_def(kind: PieceKind) -> &'static PieceDef {
    &PIECES[kind.index()]
}

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    *piece_def(kind).shape(rotation)
}

/// Wall kicks tried, in order, after a rotation collides: left, right, up.
pub const KICKS: [MinoOffset; 3] = [(-1, 0), (1, 0), (0, -1)];
