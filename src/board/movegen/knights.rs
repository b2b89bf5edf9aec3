//! Knight move generation.

use super::super::{Board, Move, Piece, Square};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

impl Board {
    pub(crate) fn knight_moves_into(&self, from: Square, out: &mut Vec<Move>) {
        let (color, _) = self.piece_at(from).expect("knight generation from empty square");

        for &(dr, df) in &KNIGHT_OFFSETS {
            let Some(to) = from.offset(dr, df) else {
                continue;
            };
            match self.piece_at(to) {
                None => out.push(Move::quiet(Piece::Knight, color, from, to)),
                Some((occupant_color, victim)) => {
                    if occupant_color != color {
                        out.push(Move::capture(Piece::Knight, color, from, to, victim));
                    }
                }
            }
        }
    }
}
