//! Square type and coordinate conventions.
//!
//! The board is indexed as (rank, file), both 0-7. Rank 0 is White's back
//! rank, so White pawns advance toward rank 7 and Black pawns toward rank 0.
//! Display follows algebraic convention: file letter then one-based rank
//! ("e4" is `Square(3, 4)`).

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, represented as (rank, file).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize);

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank, file))
        } else {
            None
        }
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// Returns true if the square lies on the board.
    ///
    /// The tuple fields are public, so callers can construct off-board
    /// coordinates; state-mutating operations validate with this.
    #[inline]
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.0 < 8 && self.1 < 8
    }

    /// The square offset by (rank delta, file delta), or None if it leaves
    /// the board.
    #[must_use]
    pub fn offset(self, dr: isize, df: isize) -> Option<Square> {
        let rank = self.0 as isize + dr;
        let file = self.1 as isize + df;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square(rank as usize, file as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, self.0 + 1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(rank, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        let file = match chars[0] {
            'a'..='h' => chars[0] as usize - 'a' as usize,
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        let rank = match chars[1] {
            '1'..='8' => chars[1] as usize - '1' as usize,
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        Ok(Square(rank, file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_algebraic() {
        assert_eq!(Square(3, 4).to_string(), "e4");
        assert_eq!(Square(0, 0).to_string(), "a1");
        assert_eq!(Square(7, 7).to_string(), "h8");
    }

    #[test]
    fn test_parse_round_trip() {
        for notation in ["a1", "e4", "h8", "c6"] {
            let sq: Square = notation.parse().unwrap();
            assert_eq!(sq.to_string(), notation);
        }
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("e44".parse::<Square>().is_err());
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Square(3, 4).offset(1, -1), Some(Square(4, 3)));
        assert_eq!(Square(0, 0).offset(-1, 0), None);
        assert_eq!(Square(7, 7).offset(0, 1), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let sq = Square(5, 2);
        let json = serde_json::to_string(&sq).unwrap();
        let back: Square = serde_json::from_str(&json).unwrap();
        assert_eq!(sq, back);
    }
}
