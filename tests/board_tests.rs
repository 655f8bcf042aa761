//! Board behavior tests

use blockfall::core::Board;
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Some(PieceKind::I));
    }
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.occupied_count(), 0);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_valid(x, y), "cell ({x}, {y}) should be free");
        }
    }
}

#[test]
fn test_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    // Out of bounds writes are refused.
    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
}

#[test]
fn test_out_of_range_queries_read_as_blocked() {
    let mut board = Board::new();
    board.set(4, 4, Some(PieceKind::S));

    // Filled and out-of-range positions are equally blocked; nothing
    // errors at the walls or floor.
    assert!(board.is_blocked(4, 4));
    assert!(board.is_blocked(-1, 4));
    assert!(board.is_blocked(4, -1));
    assert!(board.is_blocked(BOARD_WIDTH as i8, 4));
    assert!(board.is_blocked(4, BOARD_HEIGHT as i8));
    assert!(!board.is_blocked(5, 4));
}

#[test]
fn test_lock_writes_all_four_cells() {
    let mut board = Board::new();
    let cells = [(0, 0), (1, 0), (0, 1), (1, 1)];

    board.lock(&cells, 4, 18, PieceKind::O);

    assert_eq!(board.occupied_count(), 4);
    for (dx, dy) in cells {
        assert_eq!(board.get(4 + dx, 18 + dy), Some(Some(PieceKind::O)));
    }
}

#[test]
fn test_lock_above_the_roof_drops_those_cells() {
    let mut board = Board::new();
    let cells = [(0, 0), (0, 1), (0, 2), (0, 3)];

    // Anchor two rows above the board: two cells land, two vanish.
    board.lock(&cells, 3, -2, PieceKind::I);

    assert_eq!(board.occupied_count(), 2);
    assert_eq!(board.get(3, 0), Some(Some(PieceKind::I)));
    assert_eq!(board.get(3, 1), Some(Some(PieceKind::I)));
}

#[test]
fn test_full_rows_returns_exactly_the_full_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 19);
    fill_row(&mut board, 18);
    board.set(9, 18, None);
    fill_row(&mut board, 10);

    let rows = board.full_rows();
    assert_eq!(rows.as_slice(), &[19, 10]);
}

#[test]
fn test_remove_rows_drops_ten_cells_per_row() {
    let mut board = Board::new();
    fill_row(&mut board, 19);
    fill_row(&mut board, 18);
    board.set(2, 10, Some(PieceKind::L));

    let before = board.occupied_count();
    let rows = board.full_rows();
    board.remove_rows(&rows);

    assert_eq!(
        board.occupied_count(),
        before - 10 * rows.len(),
        "each removed row accounts for exactly 10 cells"
    );
}

#[test]
fn test_remove_rows_preserves_relative_order() {
    let mut board = Board::new();
    board.set(1, 12, Some(PieceKind::J));
    board.set(1, 14, Some(PieceKind::L));
    fill_row(&mut board, 13);
    fill_row(&mut board, 19);

    board.remove_rows(&[19, 13]);

    // Both markers fell, J still above L.
    assert_eq!(board.get(1, 14), Some(Some(PieceKind::J)));
    assert_eq!(board.get(1, 16), Some(Some(PieceKind::L)));
}

#[test]
fn test_remove_rows_handles_interleaved_rows_atomically() {
    let mut board = Board::new();
    fill_row(&mut board, 19);
    board.set(0, 18, Some(PieceKind::S));
    fill_row(&mut board, 17);
    board.set(9, 16, Some(PieceKind::Z));

    board.remove_rows(&[19, 17]);

    assert_eq!(board.occupied_count(), 2);
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::S)));
    assert_eq!(board.get(9, 18), Some(Some(PieceKind::Z)));
}

#[test]
fn test_copy_grid_matches_cells() {
    let mut board = Board::new();
    board.set(3, 7, Some(PieceKind::T));
    board.set(9, 19, Some(PieceKind::Z));

    let mut grid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    board.copy_grid(&mut grid);

    assert_eq!(grid[7][3], Some(PieceKind::T));
    assert_eq!(grid[19][9], Some(PieceKind::Z));
    assert_eq!(
        grid.iter().flatten().filter(|c| c.is_some()).count(),
        board.occupied_count()
    );
}
