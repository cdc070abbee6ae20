//! Terminal "game renderer" crate.
//!
//! A small, game-oriented rendering layer for terminal gameplay. The
//! simulation snapshot is blitted into a framebuffer of colored cells, and the
//! renderer diffs consecutive framebuffers so each tick only rewrites the
//! cells that changed.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Emit the minimal terminal update per tick, as one write
//! - Allow precise control over aspect ratio (2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod hud;
pub mod renderer;

pub use termtris_core as core;
pub use termtris_types as types;

pub use fb::FrameBuffer;
pub use game_view::{PlayfieldView, Viewport, HUD_COLS};
pub use hud::Hud;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer, CELL_COLS};
