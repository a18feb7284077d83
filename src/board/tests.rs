use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 13);
    assert_eq!(TOTAL_CELLS, 169);
    assert_eq!(WIN_LENGTH, 5);
    assert_eq!(CENTER, Pos::new(6, 6));
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(6, 6);
    assert_eq!(pos.to_index(), 84);
    assert_eq!(Pos::from_index(84), pos);
    assert_eq!(Pos::new(12, 12).to_index(), 168);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(12, 12));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(13, 0));
    assert!(!Pos::is_valid(0, 13));

    assert_eq!(Pos::checked(12, 0), Some(Pos::new(12, 0)));
    assert_eq!(Pos::checked(13, 0), None);
}

#[test]
fn test_pos_offset() {
    let corner = Pos::new(0, 0);
    assert_eq!(corner.offset(1, 1), Some(Pos::new(1, 1)));
    assert_eq!(corner.offset(-1, 0), None);
    assert_eq!(Pos::new(12, 12).offset(0, 1), None);
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 0) < Pos::new(0, 1));
    assert!(Pos::new(0, 12) < Pos::new(1, 0));
    assert_eq!(Pos::all().count(), TOTAL_CELLS);
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(board.is_board_empty());
    assert!(!board.is_full());
    assert!(Pos::all().all(|p| board.get(p) == Stone::Empty));
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::new();
    let pos = Pos::new(3, 9);
    board.place_stone(pos, Stone::White);
    assert_eq!(board.get(pos), Stone::White);
    assert!(!board.is_empty(pos));
    assert_eq!(board.stone_count(), 1);

    board.remove_stone(pos);
    assert!(board.is_empty(pos));

    // removing an empty cell is a no-op
    board.remove_stone(pos);
    assert!(board.is_board_empty());
}

#[test]
fn test_bitboard_iteration_crosses_words() {
    let mut bb = Bitboard::new();
    let cells = [Pos::new(0, 0), Pos::new(4, 11), Pos::new(9, 11), Pos::new(12, 12)];
    for p in cells {
        bb.set(p);
    }
    assert_eq!(bb.count(), 4);
    assert_eq!(bb.iter_ones().collect::<Vec<_>>(), cells.to_vec());
}

#[test]
fn test_full_board() {
    let board = Board::from_stones(Pos::all().map(|p| {
        let stone = if (p.row + p.col) % 2 == 0 { Stone::Black } else { Stone::White };
        (p, stone)
    }));
    assert!(board.is_full());
    assert_eq!(board.occupied().count() as usize, TOTAL_CELLS);
}
