//! Game state module - the fixed-tick simulation state machine
//!
//! Ties together board, active piece, randomizer and scoring. Every tick
//! advances a fall counter; when it reaches the gravity interval the piece
//! drops one row, or locks if it is resting on something. Locking writes the
//! piece into the board, clears full rows, scores them and spawns the next
//! piece. A spawn that collides ends the game.

use std::fmt;

use log::{debug, info, trace};

use crate::active::ActivePiece;
use crate::board::Board;
use crate::rng::{PieceQueue, RandomSource, SimpleRng};
use crate::scoring::{calculate_line_score, gravity_ticks, level_for_lines};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Running,
    Paused,
    GameOver,
}

/// What happened when the last piece locked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub line_clear_score: u32,
    /// Settled blocks remain in the hidden spawn rows after the clear
    pub in_hidden_rows: bool,
}

impl fmt::Display for LockEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "locked {}", self.kind.as_str())?;
        if self.lines_cleared > 0 {
            write!(
                f,
                ": cleared {} (+{})",
                self.lines_cleared, self.line_clear_score
            )?;
        }
        if self.in_hidden_rows {
            f.write_str(", hidden rows occupied")?;
        }
        Ok(())
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    board: Board,
    active: Option<ActivePiece>,
    next_queue: [PieceKind; NEXT_PREVIEW],
    piece_queue: PieceQueue<R>,
    phase: Phase,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    last_event: Option<LockEvent>,
    score: u32,
    level: u32,
    lines: u32,
    /// Ticks since the piece last fell a row
    fall_counter: u32,
    /// Remaining ticks of the current soft-drop request
    soft_drop_ticks: u32,
}

impl GameState<SimpleRng> {
    /// Create a new running game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_source(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new running game drawing pieces shuffled by `rng`
    pub fn with_source(rng: R) -> Self {
        let mut state = Self {
            board: Board::new(),
            active: None,
            next_queue: [PieceKind::I; NEXT_PREVIEW],
            piece_queue: PieceQueue::with_source(rng),
            phase: Phase::Running,
            episode_id: 0,
            last_event: None,
            score: 0,
            level: 1,
            lines: 0,
            fall_counter: 0,
            soft_drop_ticks: 0,
        };
        state.spawn_piece();
        state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn next_queue(&self) -> &[PieceKind; NEXT_PREVIEW] {
        &self.next_queue
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board.clone_from(&self.board);
        out.active = self.active;
        out.next_queue = self.next_queue;
        out.phase = self.phase;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn a new piece from the queue.
    ///
    /// Returns false and ends the game if the spawn position is blocked.
    fn spawn_piece(&mut self) -> bool {
        let kind = self.piece_queue.draw();
        let piece = ActivePiece::spawn(kind);

        for (slot, next) in self
            .next_queue
            .iter_mut()
            .zip(self.piece_queue.peek_queue(NEXT_PREVIEW))
        {
            *slot = next;
        }

        self.fall_counter = 0;
        self.soft_drop_ticks = 0;

        if piece.collides(&self.board) {
            info!(
                "game over: {:?} blocked at spawn (score {}, lines {}, level {})",
                kind, self.score, self.lines, self.level
            );
            self.active = None;
            self.phase = Phase::GameOver;
            return false;
        }

        trace!("spawned {:?} at ({}, {})", kind, piece.x, piece.y);
        self.active = Some(piece);
        true
    }

    /// Gravity interval in ticks, shortened while a soft drop is active
    pub fn gravity_interval(&self) -> u32 {
        if self.soft_drop_ticks > 0 {
            SOFT_DROP_INTERVAL_TICKS
        } else {
            gravity_ticks(self.level)
        }
    }

    /// Try to move the active piece
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        match self.active.as_mut() {
            Some(active) => active.try_move(&self.board, dx, dy),
            None => false,
        }
    }

    /// Try to rotate the active piece with the simple kick table
    fn try_rotate(&mut self, clockwise: bool) -> bool {
        match self.active.as_mut() {
            Some(active) => active.try_rotate(&self.board, clockwise),
            None => false,
        }
    }

    /// Drop the active piece to the bottom and lock it. Returns rows dropped.
    fn hard_drop(&mut self) -> u32 {
        let Some(active) = self.active.as_mut() else {
            return 0;
        };

        let distance = active.hard_drop_distance(&self.board);
        active.try_move(&self.board, 0, distance);
        self.lock_piece();
        distance as u32
    }

    /// Lock the active piece onto the board, clear lines, score, and spawn the next piece
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        let color = Some(active.color());
        for (x, y) in active.cells() {
            if y >= 0 {
                self.board.set(x, y, color);
            }
        }

        let lines_cleared = self.board.clear_lines();
        let line_clear_score = calculate_line_score(lines_cleared, self.level);
        if lines_cleared > 0 {
            self.score += line_clear_score;
            self.lines += lines_cleared;

            let level = level_for_lines(self.lines);
            if level != self.level {
                debug!("level {} -> {}", self.level, level);
                self.level = level;
            }
        }

        self.last_event = Some(LockEvent {
            kind: active.kind(),
            lines_cleared,
            line_clear_score,
            in_hidden_rows: self.board.has_blocks_in_hidden(),
        });

        self.spawn_piece();
    }

    /// Take and clear the last lock event.
    ///
    /// Only the most recent lock is kept; callers drain it after every
    /// action and tick.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Rows the active piece would fall on a hard drop
    pub fn hard_drop_distance(&self) -> Option<i8> {
        self.active.map(|p| p.hard_drop_distance(&self.board))
    }

    /// Advance one fixed tick. Returns true if the piece fell or locked.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Running || self.active.is_none() {
            return false;
        }

        let interval = self.gravity_interval();
        self.soft_drop_ticks = self.soft_drop_ticks.saturating_sub(1);

        self.fall_counter += 1;
        if self.fall_counter < interval {
            return false;
        }
        self.fall_counter = 0;

        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    /// Re-initialize board and counters and start a fresh piece
    pub fn restart(&mut self) {
        self.board.reset();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.last_event = None;
        self.phase = Phase::Running;
        info!("restart (episode {})", self.episode_id);
        self.spawn_piece();
    }

    /// Apply a game action. Returns true if it changed the game.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match (self.phase, action) {
            (_, GameAction::Restart) => {
                self.restart();
                true
            }
            (Phase::Running, GameAction::Pause) => {
                self.phase = Phase::Paused;
                true
            }
            (Phase::Paused, GameAction::Pause) => {
                self.phase = Phase::Running;
                true
            }
            (Phase::Running, GameAction::MoveLeft) => self.try_move(-1, 0),
            (Phase::Running, GameAction::MoveRight) => self.try_move(1, 0),
            (Phase::Running, GameAction::RotateCw) => self.try_rotate(true),
            (Phase::Running, GameAction::RotateCcw) => self.try_rotate(false),
            (Phase::Running, GameAction::SoftDrop) => {
                if self.soft_drop_ticks == 0 {
                    // Let the first fast row fall on the very next tick.
                    self.fall_counter = 0;
                }
                self.soft_drop_ticks = SOFT_DROP_GRACE_TICKS;
                true
            }
            (Phase::Running, GameAction::HardDrop) => {
                self.hard_drop();
                true
            }
            _ => false,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always picks index 0, so every bag comes out as O T S Z J L I.
    struct ZeroSource;

    impl RandomSource for ZeroSource {
        fn next_range(&mut self, _max: u32) -> u32 {
            0
        }
    }

    fn fill_row_except(board: &mut Board, y: i8, gaps: &[i8]) {
        for x in 0..BOARD_WIDTH as i8 {
            if !gaps.contains(&x) {
                board.set(x, y, Some(PaletteColor::Red));
            }
        }
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lines, 0);
        assert_eq!(state.episode_id, 0);
        assert!(state.active.is_some());
    }

    #[test]
    fn test_spawned_piece_matches_preview() {
        let mut state = GameState::new(12345);
        let first = state.active.unwrap().kind();
        let next = state.next_queue[0];

        state.apply_action(GameAction::HardDrop);

        assert_eq!(state.active.unwrap().kind(), next);
        // 7-bag: no repeat inside the first bag
        assert_ne!(next, first);
    }

    #[test]
    fn test_gravity_after_interval() {
        let mut state = GameState::new(12345);
        let y0 = state.active.unwrap().y;

        for _ in 0..gravity_ticks(1) - 1 {
            assert!(!state.tick());
        }
        assert_eq!(state.active.unwrap().y, y0);

        assert!(state.tick());
        assert_eq!(state.active.unwrap().y, y0 + 1);
    }

    #[test]
    fn test_soft_drop_falls_every_tick() {
        let mut state = GameState::new(12345);
        let y0 = state.active.unwrap().y;

        assert!(state.apply_action(GameAction::SoftDrop));
        assert_eq!(state.gravity_interval(), SOFT_DROP_INTERVAL_TICKS);
        for i in 1..=SOFT_DROP_GRACE_TICKS as i8 {
            assert!(state.tick());
            assert_eq!(state.active.unwrap().y, y0 + i);
        }

        // Grace window expired: back to normal gravity
        assert_eq!(state.gravity_interval(), gravity_ticks(1));
        assert!(!state.tick());
    }

    #[test]
    fn test_tick_locks_resting_piece() {
        let mut state = GameState::with_source(ZeroSource);
        let kind = state.active.unwrap().kind();
        let distance = state.hard_drop_distance().unwrap();
        state.try_move(0, distance);

        for _ in 0..gravity_ticks(1) {
            state.tick();
        }

        let ev = state.take_last_event().unwrap();
        assert_eq!(ev.kind, kind);
        assert_eq!(ev.lines_cleared, 0);
        assert!(state.board.cells().iter().filter(|c| c.is_some()).count() == 4);
    }

    #[test]
    fn test_hard_drop_locks_immediately() {
        let mut state = GameState::new(12345);
        assert!(state.apply_action(GameAction::HardDrop));

        let ev = state.take_last_event().unwrap();
        assert_eq!(ev.lines_cleared, 0);
        assert!(state.active.is_some());
        let bottom = BOARD_HEIGHT as usize - 1;
        assert!(state.board.row(bottom).iter().any(|c| c.is_some()));
    }

    #[test]
    fn test_hard_drop_scores_double_clear_once() {
        // ZeroSource: first piece drawn is O.
        let mut state = GameState::with_source(ZeroSource);
        assert_eq!(state.active.unwrap().kind(), PieceKind::O);

        // O occupies columns 4 and 5 at spawn x=3.
        let bottom = BOARD_HEIGHT as i8 - 1;
        fill_row_except(&mut state.board, bottom - 1, &[4, 5]);
        fill_row_except(&mut state.board, bottom, &[4, 5]);

        state.apply_action(GameAction::HardDrop);

        let ev = state.take_last_event().unwrap();
        assert_eq!(ev.lines_cleared, 2);
        assert_eq!(ev.line_clear_score, 300);
        assert_eq!(state.score, 300);
        assert_eq!(state.lines, 2);
        assert!(state.board.cells().iter().all(|c| c.is_none()));
    }

    #[test_log::test]
    fn test_level_progression_and_score_multiplier() {
        let mut state = GameState::with_source(ZeroSource);
        state.lines = 9;
        let bottom = BOARD_HEIGHT as i8 - 1;
        fill_row_except(&mut state.board, bottom - 1, &[4, 5]);
        fill_row_except(&mut state.board, bottom, &[4, 5]);
        state.apply_action(GameAction::HardDrop);

        // Scored at the level in force when the piece locked
        assert_eq!(state.score, 300);
        assert_eq!(state.lines, 11);
        assert_eq!(state.level, 2);
        assert_eq!(state.gravity_interval(), gravity_ticks(2));
    }

    #[test_log::test]
    fn test_spawn_collision_is_game_over() {
        let mut state = GameState::new(12345);
        // Block the spawn area, then lock the current piece.
        for y in 0..HIDDEN_ROWS as i8 + 2 {
            fill_row_except(&mut state.board, y, &[0]);
        }
        state.active = Some(ActivePiece::new(PieceKind::O, -1, 10));
        state.lock_piece();

        assert_eq!(state.phase, Phase::GameOver);
        assert!(state.active.is_none());
    }

    #[test]
    fn test_game_over_ignores_everything_but_restart() {
        let mut state = GameState::new(12345);
        state.phase = Phase::GameOver;
        state.active = None;

        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::RotateCw,
            GameAction::RotateCcw,
            GameAction::SoftDrop,
            GameAction::HardDrop,
            GameAction::Pause,
        ] {
            assert!(!state.apply_action(action));
        }
        assert!(!state.tick());
        assert_eq!(state.phase, Phase::GameOver);

        assert!(state.apply_action(GameAction::Restart));
        assert_eq!(state.phase, Phase::Running);
        assert!(state.active.is_some());
    }

    #[test]
    fn test_pause_suspends_gravity_and_input() {
        let mut state = GameState::new(12345);
        let before = state.active.unwrap();

        assert!(state.apply_action(GameAction::Pause));
        assert!(state.paused());
        for _ in 0..100 {
            assert!(!state.tick());
        }
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(!state.apply_action(GameAction::RotateCw));
        assert!(!state.apply_action(GameAction::HardDrop));
        assert_eq!(state.active.unwrap(), before);

        assert!(state.apply_action(GameAction::Pause));
        assert_eq!(state.phase, Phase::Running);
    }

    #[test_log::test]
    fn test_restart_resets_board_and_counters() {
        let mut state = GameState::new(12345);
        state.board.set(0, 20, Some(PaletteColor::Blue));
        state.score = 900;
        state.lines = 12;
        state.level = 2;

        state.apply_action(GameAction::Restart);

        assert_eq!(state.episode_id, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.lines, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.board.get(0, 20), None);
    }

    #[test]
    fn test_lock_above_grid_writes_visible_cells_only() {
        let mut state = GameState::with_source(ZeroSource);
        // Vertical I in column 2 reaching down to row 0.
        let mut piece = ActivePiece::new(PieceKind::I, 0, -3);
        piece.rotation = Rotation::East;
        state.active = Some(piece);
        state.lock_piece();

        // Cells at y = -3..=-1 are dropped; (2, 0) is kept.
        assert_eq!(state.board.get(2, 0), Some(PaletteColor::Cyan));
        assert_eq!(state.board.cells().iter().filter(|c| c.is_some()).count(), 1);
        assert!(state.take_last_event().unwrap().in_hidden_rows);
    }

    #[test]
    fn test_lock_event_summary() {
        let quiet = LockEvent {
            kind: PieceKind::T,
            lines_cleared: 0,
            line_clear_score: 0,
            in_hidden_rows: false,
        };
        assert_eq!(quiet.to_string(), "locked T");

        let tetris = LockEvent {
            kind: PieceKind::I,
            lines_cleared: 4,
            line_clear_score: 1600,
            in_hidden_rows: true,
        };
        assert_eq!(
            tetris.to_string(),
            "locked I: cleared 4 (+1600), hidden rows occupied"
        );
    }

    #[test_log::test]
    fn test_blocked_spawn_ends_game_without_tick() {
        // ZeroSource: O first, then T spawning at (3, 3).
        let mut state = GameState::with_source(ZeroSource);
        assert_eq!(state.active.unwrap().kind(), PieceKind::O);
        assert_eq!(state.next_queue[0], PieceKind::T);

        // Leave a shaft for the O in columns 4 and 5; T also needs (3, 4).
        let spawn_row = HIDDEN_ROWS as i8 - 1;
        fill_row_except(&mut state.board, spawn_row, &[4, 5]);
        fill_row_except(&mut state.board, spawn_row + 1, &[4, 5]);

        assert!(state.apply_action(GameAction::HardDrop));

        assert_eq!(state.phase, Phase::GameOver);
        assert!(state.active.is_none());
        let bottom = BOARD_HEIGHT as i8 - 1;
        assert_eq!(state.board.get(4, bottom), Some(PaletteColor::Yellow));
    }
}
