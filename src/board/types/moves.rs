//! Move descriptor.
//!
//! Unlike a packed wire encoding, a `Move` here is a full record of the
//! half-move: mover, endpoints, and capture/promotion/castle/en-passant
//! flags. The record is immutable once generation finalizes it; the board
//! keeps it in the history stack so undo and notation need no extra lookup.

use std::fmt;

use super::castling::CastleSide;
use super::piece::{Color, Piece};
use super::square::Square;

/// A single half-move, with everything needed to apply, undo, and notate it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    piece: Piece,
    color: Color,
    from: Square,
    to: Square,
    captured: Option<Piece>,
    promotion: Option<Piece>,
    castle: Option<CastleSide>,
    is_en_passant: bool,
    is_double_pawn_push: bool,
    gives_check: bool,
}

impl Move {
    /// A plain non-capturing move
    #[must_use]
    pub(crate) const fn quiet(piece: Piece, color: Color, from: Square, to: Square) -> Self {
        Move {
            piece,
            color,
            from,
            to,
            captured: None,
            promotion: None,
            castle: None,
            is_en_passant: false,
            is_double_pawn_push: false,
            gives_check: false,
        }
    }

    /// A capture of `victim` on the destination square
    #[must_use]
    pub(crate) const fn capture(
        piece: Piece,
        color: Color,
        from: Square,
        to: Square,
        victim: Piece,
    ) -> Self {
        let mut mv = Move::quiet(piece, color, from, to);
        mv.captured = Some(victim);
        mv
    }

    /// A two-square pawn advance from the starting rank
    #[must_use]
    pub(crate) const fn double_pawn_push(color: Color, from: Square, to: Square) -> Self {
        let mut mv = Move::quiet(Piece::Pawn, color, from, to);
        mv.is_double_pawn_push = true;
        mv
    }

    /// An en-passant capture: `to` is the square passed through, the
    /// captured pawn stands behind it.
    #[must_use]
    pub(crate) const fn en_passant(color: Color, from: Square, to: Square) -> Self {
        let mut mv = Move::capture(Piece::Pawn, color, from, to, Piece::Pawn);
        mv.is_en_passant = true;
        mv
    }

    /// A castle; `from`/`to` are the king's squares, the rook relocation is
    /// implied by `side`.
    #[must_use]
    pub(crate) const fn new_castle(color: Color, side: CastleSide) -> Self {
        let rank = color.back_rank();
        let mut mv = Move::quiet(
            Piece::King,
            color,
            Square(rank, 4),
            Square(rank, side.king_target_file()),
        );
        mv.castle = Some(side);
        mv
    }

    /// A pawn move onto the promotion rank, becoming `promoted`
    #[must_use]
    pub(crate) const fn new_promotion(
        color: Color,
        from: Square,
        to: Square,
        promoted: Piece,
        victim: Option<Piece>,
    ) -> Self {
        let mut mv = Move::quiet(Piece::Pawn, color, from, to);
        mv.promotion = Some(promoted);
        mv.captured = victim;
        mv
    }

    /// Mark the move as delivering (direct) check. Called once by move
    /// generation before the move is exposed.
    pub(crate) fn mark_check(&mut self) {
        self.gives_check = true;
    }

    /// The piece being moved (the pawn, for promotions)
    #[inline]
    #[must_use]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    /// The color making the move
    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    /// The source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// The destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The captured piece kind, if any (a pawn, for en passant)
    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<Piece> {
        self.captured
    }

    /// The piece a promoting pawn becomes, if any
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    /// Which castle this is, if any
    #[inline]
    #[must_use]
    pub const fn castle(self) -> Option<CastleSide> {
        self.castle
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Returns true if this move is an en-passant capture
    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.is_en_passant
    }

    /// Returns true if this move is a pawn promotion
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Returns true if this move is a castle
    #[inline]
    #[must_use]
    pub const fn is_castle(self) -> bool {
        self.castle.is_some()
    }

    /// Returns true if this move is a two-square pawn advance
    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        self.is_double_pawn_push
    }

    /// Returns true if this move delivers a direct check.
    ///
    /// Discovered checks are not detected; see the movegen module notes.
    #[inline]
    #[must_use]
    pub const fn gives_check(self) -> bool {
        self.gives_check
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {}{}", self.piece.to_char(), self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if self.is_capture() {
            write!(f, " cap")?;
        }
        if self.is_castle() {
            write!(f, " castle")?;
        }
        if self.is_en_passant {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promotion_constructor_feeds_the_accessor() {
        let mv = Move::new_promotion(
            Color::White,
            Square(6, 0),
            Square(7, 1),
            Piece::Queen,
            Some(Piece::Rook),
        );
        assert_eq!(mv.promotion(), Some(Piece::Queen));
        assert_eq!(mv.captured(), Some(Piece::Rook));
        assert!(mv.is_promotion());
        assert_eq!(mv.to_string(), "a7b8q");
    }

    #[test]
    fn test_castle_constructor_feeds_the_accessor() {
        let mv = Move::new_castle(Color::Black, CastleSide::Long);
        assert_eq!(mv.castle(), Some(CastleSide::Long));
        assert!(mv.is_castle());
        assert_eq!(mv.from(), Square(7, 4));
        assert_eq!(mv.to(), Square(7, 2));
        assert_eq!(mv.promotion(), None);
    }
}
