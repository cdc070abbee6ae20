//! Board tests - grid access, line clearing and the hidden spawn rows

use termtris::core::{Board, PIECES};
use termtris::types::{PaletteColor, BOARD_HEIGHT, BOARD_WIDTH, HIDDEN_ROWS};

const BLOCK: Option<PaletteColor> = Some(PaletteColor::Green);

fn fill_row(board: &mut Board, y: i8) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, BLOCK);
    }
}

fn filled_count(board: &Board) -> usize {
    board.cells().iter().filter(|c| c.is_some()).count()
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), None, "Cell ({}, {}) should be empty", x, y);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds_is_solid() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), Board::SOLID);
    assert_eq!(board.get(0, -1), Board::SOLID);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), Board::SOLID);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), Board::SOLID);
    assert!(board.is_occupied(-1, 5));
    assert!(Board::SOLID.is_some());
}

#[test]
fn test_solid_differs_from_every_piece_color() {
    let mut board = Board::new();
    for def in &PIECES {
        assert_ne!(Some(def.color), Board::SOLID, "{:?}", def.kind);
        board.set(0, 0, Some(def.color));
        assert_ne!(board.get(0, 0), board.get(-1, 0));
    }
}

#[test]
fn test_row_out_of_range_is_empty() {
    let board = Board::new();
    assert_eq!(board.row(BOARD_HEIGHT as usize - 1).len(), BOARD_WIDTH as usize);
    assert!(board.row(BOARD_HEIGHT as usize).is_empty());
    assert!(board.row(usize::MAX).is_empty());
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    board.set(5, 10, Some(PaletteColor::Magenta));
    assert_eq!(board.get(5, 10), Some(PaletteColor::Magenta));

    board.set(5, 10, None);
    assert_eq!(board.get(5, 10), None);
}

#[test]
fn test_board_set_out_of_bounds_is_noop() {
    let mut board = Board::new();

    board.set(-1, 0, BLOCK);
    board.set(0, -1, BLOCK);
    board.set(BOARD_WIDTH as i8, 0, BLOCK);
    board.set(0, BOARD_HEIGHT as i8, BLOCK);

    assert_eq!(filled_count(&board), 0);
}

#[test]
fn test_clear_lines_on_empty_board() {
    let mut board = Board::new();
    assert_eq!(board.clear_lines(), 0);
    assert_eq!(filled_count(&board), 0);
}

#[test]
fn test_clear_single_line() {
    let mut board = Board::new();
    let bottom = BOARD_HEIGHT as i8 - 1;
    fill_row(&mut board, bottom);

    assert_eq!(board.clear_lines(), 1);

    assert!(board.row(bottom as usize).iter().all(|c| c.is_none()));
    assert!(board.row(0).iter().all(|c| c.is_none()));
    assert_eq!(filled_count(&board), 0);
}

#[test]
fn test_clear_two_bottom_lines_in_one_call() {
    let mut board = Board::new();
    let bottom = BOARD_HEIGHT as i8 - 1;
    fill_row(&mut board, bottom);
    fill_row(&mut board, bottom - 1);

    assert_eq!(board.clear_lines(), 2);
    assert_eq!(filled_count(&board), 0);
}

#[test]
fn test_clear_non_contiguous_lines_shifts_remainder() {
    let mut board = Board::new();
    let bottom = BOARD_HEIGHT as i8 - 1;

    fill_row(&mut board, bottom);
    board.set(3, bottom - 1, Some(PaletteColor::Red));
    fill_row(&mut board, bottom - 2);
    board.set(7, bottom - 3, Some(PaletteColor::Blue));

    assert_eq!(board.clear_lines(), 2);

    // The two partial rows fall by the number of full rows below them.
    assert_eq!(board.get(3, bottom), Some(PaletteColor::Red));
    assert_eq!(board.get(7, bottom - 1), Some(PaletteColor::Blue));
    assert_eq!(filled_count(&board), 2);
}

#[test]
fn test_clear_four_lines_with_partial_row_above() {
    let mut board = Board::new();
    let bottom = BOARD_HEIGHT as i8 - 1;
    for y in bottom - 3..=bottom {
        fill_row(&mut board, y);
    }
    board.set(0, bottom - 4, BLOCK);

    assert_eq!(board.clear_lines(), 4);
    assert_eq!(board.get(0, bottom), BLOCK);
    assert_eq!(filled_count(&board), 1);
}

#[test]
fn test_partial_row_is_not_cleared() {
    let mut board = Board::new();
    let bottom = BOARD_HEIGHT as i8 - 1;
    fill_row(&mut board, bottom);
    board.set(9, bottom, None);

    assert!(!board.is_row_full(bottom as usize));
    assert_eq!(board.clear_lines(), 0);
    assert_eq!(filled_count(&board), 9);
}

#[test]
fn test_has_blocks_in_hidden() {
    let mut board = Board::new();
    assert!(!board.has_blocks_in_hidden());

    board.set(4, HIDDEN_ROWS as i8 - 1, BLOCK);
    assert!(board.has_blocks_in_hidden());

    board.set(4, HIDDEN_ROWS as i8 - 1, None);
    assert!(!board.has_blocks_in_hidden());

    // The first visible row does not count
    board.set(4, HIDDEN_ROWS as i8, BLOCK);
    assert!(!board.has_blocks_in_hidden());
}

#[test]
fn test_reset_empties_board() {
    let mut board = Board::new();
    fill_row(&mut board, 10);
    board.set(0, 0, BLOCK);

    board.reset();
    assert_eq!(filled_count(&board), 0);
    assert_eq!(board, Board::default());
}
