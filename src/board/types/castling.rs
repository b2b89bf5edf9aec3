//! Castling rights and castle side.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

/// Which side of the board a castle goes toward.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    /// Kingside, O-O
    Short,
    /// Queenside, O-O-O
    Long,
}

impl CastleSide {
    /// Both sides in index order (Short=0, Long=1)
    pub const BOTH: [CastleSide; 2] = [CastleSide::Short, CastleSide::Long];

    /// File of the rook participating in this castle
    #[inline]
    #[must_use]
    pub(crate) const fn rook_file(self) -> usize {
        match self {
            CastleSide::Short => 7,
            CastleSide::Long => 0,
        }
    }

    /// File the king ends on
    #[inline]
    #[must_use]
    pub(crate) const fn king_target_file(self) -> usize {
        match self {
            CastleSide::Short => 6,
            CastleSide::Long => 2,
        }
    }

    /// File the rook ends on
    #[inline]
    #[must_use]
    pub(crate) const fn rook_target_file(self) -> usize {
        match self {
            CastleSide::Short => 5,
            CastleSide::Long => 3,
        }
    }
}

const WHITE_SHORT: u8 = 1 << 0;
const WHITE_LONG: u8 = 1 << 1;
const BLACK_SHORT: u8 = 1 << 2;
const BLACK_LONG: u8 = 1 << 3;

/// The four castling rights as a bitmask.
///
/// Rights only ever shrink during a game: a king move forfeits both of its
/// color's bits, a rook leaving (or dying on) its original square forfeits
/// one. Undo restores the mask from the pre-move snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All four castling rights
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(WHITE_SHORT | WHITE_LONG | BLACK_SHORT | BLACK_LONG)
    }

    /// Check whether a specific right is still held
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit_for(color, side) != 0
    }

    /// Grant a specific right
    #[inline]
    pub fn set(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::bit_for(color, side);
    }

    /// Revoke a specific right
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::bit_for(color, side);
    }

    /// Revoke both rights for a color (the king moved)
    #[inline]
    pub fn remove_both(&mut self, color: Color) {
        self.remove(color, CastleSide::Short);
        self.remove(color, CastleSide::Long);
    }

    #[inline]
    const fn bit_for(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::Short) => WHITE_SHORT,
            (Color::White, CastleSide::Long) => WHITE_LONG,
            (Color::Black, CastleSide::Short) => BLACK_SHORT,
            (Color::Black, CastleSide::Long) => BLACK_LONG,
        }
    }
}
