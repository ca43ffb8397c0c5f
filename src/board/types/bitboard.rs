//! Bitboard type used for board occupancy.

use super::square::Coordinate;

/// A 64-bit set of squares, bit `n` standing for the square with index `n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Returns true if the bitboard is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (population count)
    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given square is set
    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Coordinate) -> bool {
        (self.0 & (1 << sq.index())) != 0
    }

    #[inline]
    pub fn insert(&mut self, sq: Coordinate) {
        self.0 |= 1 << sq.index();
    }

    #[inline]
    pub fn remove(&mut self, sq: Coordinate) {
        self.0 &= !(1 << sq.index());
    }

    /// Bitwise AND
    #[inline]
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        Bitboard(self.0 & other.0)
    }

    /// Returns an iterator over the squares set in this bitboard
    #[inline]
    #[must_use]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }
}

fn pop_lsb(bb: &mut Bitboard) -> Coordinate {
    let idx = bb.0.trailing_zeros() as usize;
    bb.0 &= bb.0 - 1;
    Coordinate::from_index(idx)
}

/// Iterator over set bits in a Bitboard, lowest index first
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            Some(pop_lsb(&mut self.0))
        }
    }
}
