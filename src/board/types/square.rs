//! Board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, addressed as (file, rank).
///
/// Both components are in `0..8`: file 0 is the a-file, rank 0 is White's back rank.
/// The fields are private so a `Coordinate` can only come out of a validating
/// constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    file: u8,
    rank: u8,
}

impl Coordinate {
    /// Create a coordinate with bounds checking
    #[must_use]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Coordinate { file, rank })
        } else {
            None
        }
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// Create a coordinate from an index (0-63).
    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Coordinate {
            file: (idx % 8) as u8,
            rank: (idx / 8 % 8) as u8,
        }
    }

    /// The square reached by stepping `df` files and `dr` ranks, if it is on the board.
    #[must_use]
    pub fn offset(self, df: i8, dr: i8) -> Option<Self> {
        let file = self.file as i8 + df;
        let rank = self.rank as i8 + dr;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Coordinate {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Signed (file, rank) distance from `self` to `to`.
    #[inline]
    #[must_use]
    pub const fn delta(self, to: Coordinate) -> (i8, i8) {
        (
            to.file as i8 - self.file as i8,
            to.rank as i8 - self.rank as i8,
        )
    }

    /// Iterate over all 64 squares, a1 first, h8 last.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..64).map(Coordinate::from_index)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file + b'a') as char, self.rank + 1)
    }
}

impl TryFrom<(u8, u8)> for Coordinate {
    type Error = SquareError;

    fn try_from((file, rank): (u8, u8)) -> Result<Self, Self::Error> {
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        Ok(Coordinate { file, rank })
    }
}

impl FromStr for Coordinate {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a',
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => bytes[1] - b'1',
            _ => return Err(invalid()),
        };

        Ok(Coordinate { file, rank })
    }
}
