//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the falling-block simulation: the piece catalog, the
//! 7-bag randomizer, the board, the active piece kinematics and the fixed-tick
//! state machine. It has no dependencies on terminals or I/O, so it is:
//!
//! - **Deterministic**: the same seed (or injected [`RandomSource`]) gives the same game
//! - **Testable**: every rule is reachable from plain unit tests
//! - **Allocation-light**: the board is a flat array; ticks do not allocate
//!
//! # Module Structure
//!
//! - [`pieces`]: static tetromino catalog and the wall-kick order
//! - [`rng`]: 7-bag random piece generation
//! - [`board`]: 10x24 grid (4 hidden rows) with line clearing
//! - [`active`]: the falling piece - movement, rotation, collision
//! - [`scoring`]: line clear points, levels and gravity speed
//! - [`game_state`]: the Running / Paused / GameOver state machine
//! - [`snapshot`]: per-tick copy of the state handed to the renderer
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: every 7 consecutive draws of a bag are a permutation of all kinds
//! - **Simple kicks**: a blocked rotation tries left, right, then up by one cell
//! - **No lock delay**: a piece locks on the gravity step where it cannot fall
//! - **Scoring**: 100 / 300 / 500 / 800 for 1-4 lines, times the level
//! - **Levels**: one level per 10 lines, starting at level 1
//!
//! # Example
//!
//! ```
//! use termtris_core::{GameState, Phase};
//! use termtris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//! game.tick();
//!
//! assert_eq!(game.phase(), Phase::Running);
//! ```

pub mod active;
pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use termtris_types as types;

// Re-export commonly used types for convenience
pub use active::ActivePiece;
pub use board::Board;
pub use game_state::{GameState, LockEvent, Phase};
pub use pieces::{get_shape, piece_def, PieceDef, PIECES};
pub use rng::{PieceQueue, RandomSource, SimpleRng};
pub use scoring::{calculate_line_score, gravity_ticks, level_for_lines};
pub use snapshot::GameSnapshot;
