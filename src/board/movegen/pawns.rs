//! Pawn move generation: advances, double steps, captures, en passant,
//! and promotion.
//!
//! Promotion is hard-coded to Queen; no under-promotion choice is exposed
//! to the search or the legality layer.

use super::super::{Board, Color, Move, Piece, Square};

impl Board {
    pub(crate) fn pawn_moves_into(&self, from: Square, out: &mut Vec<Move>) {
        let (color, _) = self.piece_at(from).expect("pawn generation from empty square");
        let dir = color.pawn_direction();

        // Single advance, and the double step from the starting rank.
        // "Has moved" is derived: a pawn off its starting rank has moved.
        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty_square(one) {
                self.push_pawn_advance(color, from, one, out);

                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.is_empty_square(two) {
                            out.push(Move::double_pawn_push(color, from, two));
                        }
                    }
                }
            }
        }

        // Diagonal captures and en passant
        for df in [-1, 1] {
            let Some(to) = from.offset(dir, df) else {
                continue;
            };
            match self.piece_at(to) {
                Some((occupant_color, victim)) if occupant_color != color => {
                    if to.rank() == color.pawn_promotion_rank() {
                        out.push(Move::new_promotion(color, from, to, Piece::Queen, Some(victim)));
                    } else {
                        out.push(Move::capture(Piece::Pawn, color, from, to, victim));
                    }
                }
                Some(_) => {}
                None => {
                    // En passant: only available the ply after the opposing
                    // double push, which is exactly when the target is set.
                    if self.en_passant_target == Some(to) {
                        out.push(Move::en_passant(color, from, to));
                    }
                }
            }
        }
    }

    fn push_pawn_advance(&self, color: Color, from: Square, to: Square, out: &mut Vec<Move>) {
        if to.rank() == color.pawn_promotion_rank() {
            out.push(Move::new_promotion(color, from, to, Piece::Queen, None));
        } else {
            out.push(Move::quiet(Piece::Pawn, color, from, to));
        }
    }
}
