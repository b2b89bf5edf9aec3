//! Pseudo-legal move generation.
//!
//! Generation follows piece geometry and occupancy only: it does not verify
//! that the mover's own king is left out of check, and castling does not
//! verify that the king's path is unattacked. Both are deliberate gaps in
//! this engine's rules model; a king left en prise is simply captured on the
//! next ply, which decides the game.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Move, Piece, Square};

const DIAGONALS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const STRAIGHTS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl Board {
    /// Pseudo-legal moves for the side to move.
    ///
    /// The list is cached until the next `apply_move`/`undo_move`.
    #[must_use]
    pub fn generate_moves(&mut self) -> Vec<Move> {
        if let Some(cached) = &self.cached_moves {
            return cached.clone();
        }

        let color = self.side_to_move;
        let mut moves = Vec::new();
        for rank in 0..8 {
            for file in 0..8 {
                let from = Square(rank, file);
                if let Some((piece_color, piece)) = self.grid[rank][file] {
                    if piece_color == color {
                        self.piece_moves_into(from, piece, &mut moves);
                    }
                }
            }
        }

        for mv in &mut moves {
            if self.move_gives_direct_check(mv) {
                mv.mark_check();
            }
        }

        self.cached_moves = Some(moves.clone());
        moves
    }

    /// Pseudo-legal moves for a single square, for UI piece selection.
    /// Empty if the square does not hold a piece of the side to move.
    #[must_use]
    pub fn moves_from(&mut self, from: Square) -> Vec<Move> {
        self.generate_moves()
            .into_iter()
            .filter(|mv| mv.from() == from)
            .collect()
    }

    /// Generate pseudo-moves for one piece into `out`.
    pub(crate) fn piece_moves_into(&self, from: Square, piece: Piece, out: &mut Vec<Move>) {
        match piece {
            Piece::Pawn => self.pawn_moves_into(from, out),
            Piece::Knight => self.knight_moves_into(from, out),
            Piece::Bishop => self.sliding_moves_into(from, piece, &DIAGONALS, out),
            Piece::Rook => self.sliding_moves_into(from, piece, &STRAIGHTS, out),
            Piece::Queen => {
                self.sliding_moves_into(from, piece, &DIAGONALS, out);
                self.sliding_moves_into(from, piece, &STRAIGHTS, out);
            }
            Piece::King => self.king_moves_into(from, out),
        }
    }

    /// Does this move put the moved piece in direct attack of the enemy king?
    ///
    /// Only direct checks by the moved piece (or the promoted piece) are
    /// detected; discovered checks and checks by the castling rook are not.
    /// The flag feeds notation, nothing in legality depends on it.
    fn move_gives_direct_check(&self, mv: &Move) -> bool {
        let enemy = mv.color().opponent();
        let Some(king_sq) = self.king_square(enemy) else {
            return false;
        };

        let attacker = mv.promotion().unwrap_or(mv.piece());
        let to = mv.to();
        let dr = king_sq.0 as isize - to.0 as isize;
        let df = king_sq.1 as isize - to.1 as isize;

        match attacker {
            Piece::Pawn => {
                dr == mv.color().pawn_direction() && df.abs() == 1
            }
            Piece::Knight => {
                (dr.abs() == 1 && df.abs() == 2) || (dr.abs() == 2 && df.abs() == 1)
            }
            Piece::King => dr.abs().max(df.abs()) == 1,
            Piece::Bishop | Piece::Rook | Piece::Queen => {
                let diagonal = dr.abs() == df.abs() && dr != 0;
                let straight = (dr == 0) != (df == 0);
                let aligned = match attacker {
                    Piece::Bishop => diagonal,
                    Piece::Rook => straight,
                    _ => diagonal || straight,
                };
                if !aligned {
                    return false;
                }
                self.ray_clear_after(mv, to, king_sq, (dr.signum(), df.signum()))
            }
        }
    }

    /// Walk from `to` toward `target` (exclusive); true if every square
    /// between is empty once the move's vacated squares are accounted for.
    fn ray_clear_after(
        &self,
        mv: &Move,
        to: Square,
        target: Square,
        step: (isize, isize),
    ) -> bool {
        let ep_captured = if mv.is_en_passant() {
            to.offset(-mv.color().pawn_direction(), 0)
        } else {
            None
        };

        let mut sq = to;
        loop {
            let Some(next) = sq.offset(step.0, step.1) else {
                return false;
            };
            if next == target {
                return true;
            }
            let vacated = next == mv.from() || Some(next) == ep_captured;
            if !vacated && !self.is_empty_square(next) {
                return false;
            }
            sq = next;
        }
    }
}
