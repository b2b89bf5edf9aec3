//! King move generation, including castling pseudo-moves.

use super::super::{Board, CastleSide, Move, Piece, Square};

const KING_OFFSETS: [(isize, isize); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

impl Board {
    pub(crate) fn king_moves_into(&self, from: Square, out: &mut Vec<Move>) {
        let (color, _) = self.piece_at(from).expect("king generation from empty square");

        for &(dr, df) in &KING_OFFSETS {
            let Some(to) = from.offset(dr, df) else {
                continue;
            };
            match self.piece_at(to) {
                None => out.push(Move::quiet(Piece::King, color, from, to)),
                Some((occupant_color, victim)) => {
                    if occupant_color != color {
                        out.push(Move::capture(Piece::King, color, from, to, victim));
                    }
                }
            }
        }

        // Castling pseudo-moves: gated on the rights flag and an empty lane
        // between king and rook. Whether the king passes through an attacked
        // square is NOT verified (a known rules gap in this engine).
        let back = color.back_rank();
        if from != Square(back, 4) {
            return;
        }
        for side in CastleSide::BOTH {
            if !self.castling_rights.has(color, side) {
                continue;
            }
            let rook_sq = Square(back, side.rook_file());
            if self.piece_at(rook_sq) != Some((color, Piece::Rook)) {
                continue;
            }
            let lane: &[usize] = match side {
                CastleSide::Short => &[5, 6],
                CastleSide::Long => &[1, 2, 3],
            };
            if lane.iter().all(|&file| self.is_empty_square(Square(back, file))) {
                out.push(Move::new_castle(color, side));
            }
        }
    }
}
