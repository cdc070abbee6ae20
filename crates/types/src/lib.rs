//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the simulation, the terminal renderer and the input mapping alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 24 rows, of which the top 4 are hidden spawn rows
//! - **Visible**: rows 4..24 (20 rows)
//!
//! # Timing
//!
//! The simulation advances in fixed ticks (`DEFAULT_TICK_MS`, ~30 per second).
//! Gravity is expressed in ticks per row:
//!
//! | Level | Ticks/row |
//! |-------|-----------|
//! | 1 | 20 |
//! | 2 | 17 |
//! | 3 | 14 |
//! | 4 | 12 |
//! | 5 | 10 |
//! | 6 | 8 |
//! | 7 | 6 |
//! | 8 | 5 |
//! | 9 | 4 |
//! | 10 | 3 |
//! | 11+ | 2 |
//!
//! # Examples
//!
//! ```
//! use termtris_types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::T.as_str(), "T");
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 24);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Rows shown on screen
pub const VISIBLE_HEIGHT: u8 = 20;

/// Spawn buffer rows above the visible area
pub const HIDDEN_ROWS: u8 = 4;

/// Total board height, hidden rows included
pub const BOARD_HEIGHT: u8 = VISIBLE_HEIGHT + HIDDEN_ROWS;

/// Default fixed timestep interval in milliseconds (~30 ticks per second)
pub const DEFAULT_TICK_MS: u64 = 1000 / 30;

/// Gravity interval in ticks per row, indexed by `level - 1`
pub const GRAVITY_TICKS: [u32; 10] = [20, 17, 14, 12, 10, 8, 6, 5, 4, 3];

/// Gravity interval once the level runs past the table
pub const GRAVITY_TICKS_FLOOR: u32 = 2;

/// Gravity interval while soft drop is active
pub const SOFT_DROP_INTERVAL_TICKS: u32 = 1;

/// Ticks a single soft-drop request stays active.
///
/// Terminals report key repeats but not key releases, so a held key shows up
/// as a stream of requests that keep re-arming this window.
pub const SOFT_DROP_GRACE_TICKS: u32 = 5;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Number of upcoming pieces kept for preview
pub const NEXT_PREVIEW: usize = 3;

/// Line clear scoring table
///
/// Base points for clearing N lines in one lock, multiplied by the level:
/// - 1 line: 100
/// - 2 lines: 300
/// - 3 lines: 500
/// - 4 lines: 800
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];


/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Position of this kind in [`PieceKind::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Single uppercase letter, as shown in the HUD
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Rotation states, in clockwise order.
///
/// The cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use termtris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use termtris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Rotation index in 0..4
    pub fn index(self) -> usize {
        self as usize
    }
}

/// The 8 standard terminal colors (SGR 40-47 backgrounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

/// A cell on the board or in a frame buffer
///
/// - `None`: empty
/// - `Some(color)`: a settled block drawn with `color`
pub type Cell = Option<PaletteColor>;

/// Discrete input events understood by the simulation.
///
/// Quitting is not a game action; the event loop handles it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Request fast gravity for a few ticks
    SoftDrop,
    /// Instantly drop piece to lowest valid position and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Toggle pause state
    Pause,
    /// Restart the game
    Restart,
}
