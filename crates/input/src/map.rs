//! Key mapping from terminal events to game actions.
//!
//! Letters are matched case-insensitively. Release events never map to
//! anything; repeats count as presses so a held key keeps moving and keeps a
//! soft drop armed.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// The action bound to a key press, if any.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let action = match key.code {
        KeyCode::Left => GameAction::MoveLeft,
        KeyCode::Right => GameAction::MoveRight,
        KeyCode::Down => GameAction::SoftDrop,
        KeyCode::Up => GameAction::RotateCw,
        KeyCode::Char(c) => char_action(c.to_ascii_lowercase())?,
        _ => return None,
    };
    Some(action)
}

fn char_action(c: char) -> Option<GameAction> {
    let action = match c {
        'h' | 'a' => GameAction::MoveLeft,
        'l' | 'd' => GameAction::MoveRight,
        'j' | 's' => GameAction::SoftDrop,
        'k' | 'w' | 'x' => GameAction::RotateCw,
        'z' | 'y' => GameAction::RotateCcw,
        ' ' => GameAction::HardDrop,
        'p' => GameAction::Pause,
        'r' => GameAction::Restart,
        _ => return None,
    };
    Some(action)
}

/// `q` (either case) or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match key.code {
        KeyCode::Char(c) if c.eq_ignore_ascii_case(&'q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
