//! Line-shape scores for move evaluation
//!
//! A shape is the run a hypothetical stone would sit in: its length and how
//! many of its two ends are blocked by the board edge or an opposing stone.

/// Score table for line shapes
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row - immediate win
    pub const FIVE: i32 = 100_000;
    /// Open four: _OOOO_
    pub const OPEN_FOUR: i32 = 10_000;
    /// Closed four: XOOOO_ or _OOOOX
    pub const CLOSED_FOUR: i32 = 1_000;
    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 1_000;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: i32 = 100;
    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 100;
    /// Closed two: XOO_ or _OOX
    pub const CLOSED_TWO: i32 = 10;
}

/// Contiguous run through a cell in one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineShape {
    /// Stones in the run, the evaluated cell included
    pub count: usize,
    /// Ends stopped by the edge or an opposing stone (0..=2)
    pub blocked_ends: u8,
}

impl LineShape {
    /// Score of this shape. Runs of five or more win regardless of ends;
    /// anything shorter than two, or blocked on both sides, is worth nothing.
    pub fn score(self) -> i32 {
        match (self.count, self.blocked_ends) {
            (5.., _) => PatternScore::FIVE,
            (4, 0) => PatternScore::OPEN_FOUR,
            (4, 1) => PatternScore::CLOSED_FOUR,
            (3, 0) => PatternScore::OPEN_THREE,
            (3, 1) => PatternScore::CLOSED_THREE,
            (2, 0) => PatternScore::OPEN_TWO,
            (2, 1) => PatternScore::CLOSED_TWO,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(count: usize, blocked_ends: u8) -> LineShape {
        LineShape { count, blocked_ends }
    }

    #[test]
    fn test_score_table() {
        assert_eq!(shape(5, 0).score(), 100_000);
        assert_eq!(shape(5, 2).score(), 100_000);
        assert_eq!(shape(7, 1).score(), 100_000);
        assert_eq!(shape(4, 0).score(), 10_000);
        assert_eq!(shape(4, 1).score(), 1_000);
        assert_eq!(shape(3, 0).score(), 1_000);
        assert_eq!(shape(3, 1).score(), 100);
        assert_eq!(shape(2, 0).score(), 100);
        assert_eq!(shape(2, 1).score(), 10);
    }

    #[test]
    fn test_dead_shapes_score_zero() {
        assert_eq!(shape(4, 2).score(), 0);
        assert_eq!(shape(3, 2).score(), 0);
        assert_eq!(shape(2, 2).score(), 0);
        assert_eq!(shape(1, 0).score(), 0);
        assert_eq!(shape(1, 1).score(), 0);
    }

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::FIVE > PatternScore::OPEN_FOUR);
        assert!(PatternScore::OPEN_FOUR > PatternScore::CLOSED_FOUR);
        assert!(PatternScore::CLOSED_FOUR >= PatternScore::OPEN_THREE);
        assert!(PatternScore::OPEN_THREE > PatternScore::CLOSED_THREE);
        assert!(PatternScore::OPEN_TWO > PatternScore::CLOSED_TWO);
    }
}
