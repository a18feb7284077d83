//! Single-cell line-potential evaluation
//!
//! Scores what a player would gain by putting a stone on a given empty
//! cell: for each of the four line directions the run through the cell is
//! measured and looked up in the shape table, and the four scores are
//! summed. The board is never modified; the stone is only imagined.

use crate::board::{Board, Pos, Stone};
use crate::rules::DIRECTIONS;

use super::patterns::LineShape;

/// Walk from `pos` (exclusive) along `(dr, dc)` over `color` stones.
/// Returns the number of stones crossed and whether the walk ended on the
/// board edge or an opposing stone rather than an empty cell.
#[inline]
fn scan(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> (usize, bool) {
    let mut count = 0;
    let mut cur = pos;
    loop {
        let Some(next) = cur.offset(dr, dc) else {
            return (count, true);
        };
        match board.get(next) {
            Stone::Empty => return (count, false),
            s if s == color => {
                count += 1;
                cur = next;
            }
            _ => return (count, true),
        }
    }
}

/// Shape of the run `color` would form through `pos` along `(dr, dc)`.
pub fn line_shape(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> LineShape {
    let (forward, forward_blocked) = scan(board, pos, dr, dc, color);
    let (backward, backward_blocked) = scan(board, pos, -dr, -dc, color);
    LineShape {
        count: 1 + forward + backward,
        blocked_ends: u8::from(forward_blocked) + u8::from(backward_blocked),
    }
}

/// Total line-potential score for `color` playing at `pos`.
///
/// `pos` is treated as holding a `color` stone whatever it actually holds;
/// callers pass empty cells.
#[must_use]
pub fn evaluate_position(board: &Board, pos: Pos, color: Stone) -> i32 {
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| line_shape(board, pos, dr, dc, color).score())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::PatternScore;

    #[test]
    fn test_lone_stone_scores_zero() {
        let board = Board::new();
        assert_eq!(evaluate_position(&board, Pos::new(6, 6), Stone::Black), 0);
    }

    #[test]
    fn test_diagonal_completion_dominates() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place_stone(Pos::new(i, i), Stone::White);
        }
        let shape = line_shape(&board, Pos::new(4, 4), 1, 1, Stone::White);
        assert_eq!(shape.count, 5);
        // walking back reaches the corner edge
        assert_eq!(shape.blocked_ends, 1);

        let score = evaluate_position(&board, Pos::new(4, 4), Stone::White);
        assert!(score >= PatternScore::FIVE);
        assert!(score < 2 * PatternScore::FIVE);
    }

    #[test]
    fn test_open_and_blocked_ends() {
        let mut board = Board::new();
        board.place_stone(Pos::new(6, 5), Stone::Black);
        board.place_stone(Pos::new(6, 7), Stone::Black);

        let open = line_shape(&board, Pos::new(6, 6), 0, 1, Stone::Black);
        assert_eq!(open, LineShape { count: 3, blocked_ends: 0 });

        board.place_stone(Pos::new(6, 8), Stone::White);
        let closed = line_shape(&board, Pos::new(6, 6), 0, 1, Stone::Black);
        assert_eq!(closed, LineShape { count: 3, blocked_ends: 1 });
        assert_eq!(evaluate_position(&board, Pos::new(6, 6), Stone::Black), PatternScore::CLOSED_THREE);
    }

    #[test]
    fn test_edge_counts_as_blocked() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 1), Stone::Black);
        let shape = line_shape(&board, Pos::new(0, 0), 0, 1, Stone::Black);
        assert_eq!(shape, LineShape { count: 2, blocked_ends: 1 });
    }

    #[test]
    fn test_defensive_view_uses_opponent_stones() {
        let mut board = Board::new();
        for c in 3..6 {
            board.place_stone(Pos::new(2, c), Stone::Black);
        }
        // White looking at (2,6) sees nothing of its own...
        assert_eq!(evaluate_position(&board, Pos::new(2, 6), Stone::White), 0);
        // ...while Black would make an open four there.
        assert_eq!(evaluate_position(&board, Pos::new(2, 6), Stone::Black), PatternScore::OPEN_FOUR);
    }
}
