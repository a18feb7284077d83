//! Per-colour occupancy sets

use std::ops::BitOr;

use super::{Pos, TOTAL_CELLS};

const WORDS: usize = TOTAL_CELLS.div_ceil(64); // 3 words hold 169 cells

/// Set of board cells packed into `u64` words.
/// Bits past `TOTAL_CELLS` are never set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: [u64; WORDS],
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: [0; WORDS] }
    }

    #[inline]
    fn locate(pos: Pos) -> (usize, u64) {
        let idx = pos.to_index();
        (idx / 64, 1u64 << (idx % 64))
    }

    #[inline]
    pub fn set(&mut self, pos: Pos) {
        let (word, mask) = Self::locate(pos);
        self.bits[word] |= mask;
    }

    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        let (word, mask) = Self::locate(pos);
        self.bits[word] &= !mask;
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        let (word, mask) = Self::locate(pos);
        self.bits[word] & mask != 0
    }

    /// Number of cells in the set
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Iterate over members in row-major order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter {
            bits: self.bits,
            word_idx: 0,
        }
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    fn bitor(mut self, rhs: Bitboard) -> Bitboard {
        for (word, other) in self.bits.iter_mut().zip(rhs.bits) {
            *word |= other;
        }
        self
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: [u64; WORDS],
    word_idx: usize,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word_idx < WORDS {
            let word = &mut self.bits[self.word_idx];
            if *word == 0 {
                self.word_idx += 1;
                continue;
            }
            let bit = word.trailing_zeros() as usize;
            *word &= *word - 1;
            return Some(Pos::from_index(self.word_idx * 64 + bit));
        }
        None
    }
}
