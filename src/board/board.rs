//! Occupancy grid

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};

/// 13x13 occupancy grid.
///
/// The board holds no history and no turn; the session keeps it in step
/// with its piece list and is the only thing that mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Board {
    /// All cells empty
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Build a board from `(pos, stone)` pairs; later entries overwrite earlier ones
    pub fn from_stones<I>(stones: I) -> Self
    where
        I: IntoIterator<Item = (Pos, Stone)>,
    {
        let mut board = Self::new();
        for (pos, stone) in stones {
            board.remove_stone(pos);
            board.place_stone(pos, stone);
        }
        board
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Set a cell to `stone`. The caller guarantees the cell is empty.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.is_empty(pos), "placing on occupied cell {pos:?}");
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Clear a cell; no-op when it is already empty
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Occupied cells of one colour (None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// All occupied cells regardless of colour
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black | self.white
    }

    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// No empty cell left
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }
}
