//! Five-in-a-row and full-board detection
//!
//! Both checks look only at the stone that was just played: a win is a run
//! of five or more same-colour stones through that cell in one of the four
//! line directions. Overlines win too.

use tracing::instrument;

use crate::board::{Board, Pos, Stone, WIN_LENGTH};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Count same-colour stones from `pos` (exclusive) stepping by `(dr, dc)`.
#[inline]
fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> usize {
    let mut count = 0;
    let mut cur = pos;
    while let Some(next) = cur.offset(dr, dc) {
        if board.get(next) != color {
            break;
        }
        count += 1;
        cur = next;
    }
    count
}

/// Whether the stone at `pos` completes five or more in a row for `color`.
///
/// Only meaningful right after `color` was placed at `pos`; the rest of the
/// board is not scanned.
#[instrument(level = "trace", skip(board))]
pub fn check_win(board: &Board, pos: Pos, color: Stone) -> bool {
    if color == Stone::Empty {
        return false;
    }
    DIRECTIONS.iter().any(|&(dr, dc)| {
        1 + run_length(board, pos, dr, dc, color) + run_length(board, pos, -dr, -dc, color)
            >= WIN_LENGTH
    })
}

/// Board has no empty cell left.
///
/// Evaluate only after `check_win` failed for the last move: a full board
/// with a five on it is a win, not a draw.
#[inline]
pub fn check_draw(board: &Board) -> bool {
    board.is_full()
}

/// The full contiguous run through `pos` in the first winning direction,
/// ordered from one end to the other.
pub fn winning_line(board: &Board, pos: Pos, color: Stone) -> Option<Vec<Pos>> {
    if color == Stone::Empty || board.get(pos) != color {
        return None;
    }
    for &(dr, dc) in &DIRECTIONS {
        let back = run_length(board, pos, -dr, -dc, color);
        let forward = run_length(board, pos, dr, dc, color);
        if 1 + back + forward < WIN_LENGTH {
            continue;
        }

        let back = back as i32;
        let start = pos.offset(-dr * back, -dc * back)?;
        let line = (0..=(back + forward as i32))
            .filter_map(|i| start.offset(dr * i, dc * i))
            .collect();
        return Some(line);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(stones: &[(u8, u8)], color: Stone) -> Board {
        Board::from_stones(stones.iter().map(|&(r, c)| (Pos::new(r, c), color)))
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let board = board_with(&[(6, 6), (6, 7), (6, 8), (6, 9), (6, 10)], Stone::Black);
        assert!(check_win(&board, Pos::new(6, 10), Stone::Black));
        assert!(check_win(&board, Pos::new(6, 8), Stone::Black));
        assert!(!check_win(&board, Pos::new(6, 10), Stone::White));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let board = board_with(&[(0, 3), (1, 3), (2, 3), (3, 3), (4, 3)], Stone::White);
        assert!(check_win(&board, Pos::new(0, 3), Stone::White));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let board = board_with(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)], Stone::White);
        assert!(check_win(&board, Pos::new(2, 2), Stone::White));
    }

    #[test]
    fn test_five_in_row_anti_diagonal() {
        let board = board_with(&[(4, 8), (5, 7), (6, 6), (7, 5), (8, 4)], Stone::Black);
        assert!(check_win(&board, Pos::new(8, 4), Stone::Black));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let board = board_with(
            &[(12, 0), (12, 1), (12, 2), (12, 3), (12, 4), (12, 5)],
            Stone::Black,
        );
        assert!(check_win(&board, Pos::new(12, 2), Stone::Black));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let board = board_with(&[(6, 0), (6, 1), (6, 2), (6, 3)], Stone::Black);
        assert!(!check_win(&board, Pos::new(6, 3), Stone::Black));
    }

    #[test]
    fn test_broken_line_not_win() {
        let mut board = board_with(&[(6, 0), (6, 1), (6, 3), (6, 4)], Stone::Black);
        board.place_stone(Pos::new(6, 2), Stone::White);
        assert!(!check_win(&board, Pos::new(6, 4), Stone::Black));
    }

    #[test]
    fn test_empty_color_never_wins() {
        let board = Board::new();
        assert!(!check_win(&board, Pos::new(0, 0), Stone::Empty));
    }

    #[test]
    fn test_draw_on_full_board_without_five() {
        // Rows alternate colour in blocks of two columns: no run longer than two.
        let board = Board::from_stones(Pos::all().map(|p| {
            let stone = if (p.col / 2 + p.row) % 2 == 0 { Stone::Black } else { Stone::White };
            (p, stone)
        }));
        assert!(board.is_full());
        let last = Pos::new(12, 12);
        assert!(!check_win(&board, last, board.get(last)));
        assert!(check_draw(&board));
    }

    #[test]
    fn test_no_draw_with_empty_cell() {
        let mut board = Board::from_stones(Pos::all().map(|p| {
            let stone = if (p.col / 2 + p.row) % 2 == 0 { Stone::Black } else { Stone::White };
            (p, stone)
        }));
        board.remove_stone(Pos::new(0, 0));
        assert!(!check_draw(&board));
    }

    #[test]
    fn test_winning_line_covers_overline() {
        let board = board_with(&[(3, 2), (4, 3), (5, 4), (6, 5), (7, 6), (8, 7)], Stone::White);
        let line = winning_line(&board, Pos::new(5, 4), Stone::White).unwrap();
        assert_eq!(line.len(), 6);
        assert_eq!(line[0], Pos::new(3, 2));
        assert_eq!(line[5], Pos::new(8, 7));
    }

    #[test]
    fn test_winning_line_none_for_four() {
        let board = board_with(&[(6, 0), (6, 1), (6, 2), (6, 3)], Stone::Black);
        assert!(winning_line(&board, Pos::new(6, 0), Stone::Black).is_none());
    }
}
