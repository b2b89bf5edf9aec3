//! Sliding piece move generation (bishop, rook, queen rays).

use super::super::{Board, Move, Piece, Square};

impl Board {
    /// Walk outward in each direction: empty squares are added and the walk
    /// continues, an enemy square is added as a capture and stops the walk,
    /// a friendly square stops the walk without a move.
    pub(crate) fn sliding_moves_into(
        &self,
        from: Square,
        piece: Piece,
        directions: &[(isize, isize)],
        out: &mut Vec<Move>,
    ) {
        let (color, _) = self.piece_at(from).expect("slider generation from empty square");

        for &(dr, df) in directions {
            let mut sq = from;
            while let Some(to) = sq.offset(dr, df) {
                match self.piece_at(to) {
                    None => {
                        out.push(Move::quiet(piece, color, from, to));
                        sq = to;
                    }
                    Some((occupant_color, victim)) => {
                        if occupant_color != color {
                            out.push(Move::capture(piece, color, from, to, victim));
                        }
                        break;
                    }
                }
            }
        }
    }
}
