//! Move execution and its exact inverse.
//!
//! `apply_move` and `undo_move` are the only mutations of board state. The
//! invariant they uphold: after any apply/undo pair the grid, side to move,
//! castling rights, and king table are bit-for-bit identical to before the
//! apply, for every move kind (castle, promotion, en passant included).

use super::error::StateError;
use super::state::{HistoryEntry, UnmakeInfo};
use super::{Board, CastleSide, Move, Piece, Square};

impl Board {
    /// Apply a move to the board.
    ///
    /// # Errors
    ///
    /// `StateError::OffBoardDestination` if the destination lies off the
    /// board, `StateError::GameOver` if a king has already been captured.
    /// Both are caller precondition violations; state integrity is not
    /// guaranteed if the caller ignores them and continues.
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), StateError> {
        if !mv.to().in_bounds() {
            return Err(StateError::OffBoardDestination { square: mv.to() });
        }
        if self.is_over() {
            return Err(StateError::GameOver);
        }
        debug_assert_eq!(mv.color(), self.side_to_move, "move applied out of turn");

        let color = mv.color();
        let undo = UnmakeInfo {
            previous_castling_rights: self.castling_rights,
            previous_en_passant_target: self.en_passant_target,
            previous_castled: self.castled,
            previous_king_squares: self.king_squares,
        };

        // Castling rights lost because of this move, before any relocation:
        // a king move forfeits both rights, a rook leaving its original
        // square forfeits that side, and capturing a rook on its original
        // square forfeits the owner's corresponding right.
        match mv.piece() {
            Piece::King => self.castling_rights.remove_both(color),
            Piece::Rook => {
                let back = color.back_rank();
                if mv.from() == Square(back, 0) {
                    self.castling_rights.remove(color, CastleSide::Long);
                } else if mv.from() == Square(back, 7) {
                    self.castling_rights.remove(color, CastleSide::Short);
                }
            }
            _ => {}
        }
        if mv.captured() == Some(Piece::Rook) && !mv.is_en_passant() {
            let opponent = color.opponent();
            let back = opponent.back_rank();
            if mv.to() == Square(back, 0) {
                self.castling_rights.remove(opponent, CastleSide::Long);
            } else if mv.to() == Square(back, 7) {
                self.castling_rights.remove(opponent, CastleSide::Short);
            }
        }

        // Relocate. Removing a captured king clears its king-table entry,
        // which is what decides the game.
        let (_, moved_piece) = self
            .remove_piece(mv.from())
            .expect("apply_move: source square is empty");
        if mv.is_en_passant() {
            let captured_sq = self.en_passant_victim_square(mv);
            self.remove_piece(captured_sq);
        } else {
            self.remove_piece(mv.to());
        }
        let placed = mv.promotion().unwrap_or(moved_piece);
        self.set_piece(mv.to(), color, placed);

        if let Some(side) = mv.castle() {
            let back = color.back_rank();
            let rook = self
                .remove_piece(Square(back, side.rook_file()))
                .expect("apply_move: castling without a rook");
            self.set_piece(Square(back, side.rook_target_file()), rook.0, rook.1);
            self.castled[color.index()] = true;
        }

        self.en_passant_target = if mv.is_double_pawn_push() {
            mv.from().offset(color.pawn_direction(), 0)
        } else {
            None
        };

        self.side_to_move = color.opponent();
        self.cached_moves = None;
        self.history.push(HistoryEntry { mv: *mv, undo });
        Ok(())
    }

    /// Revert the most recent move, restoring the exact pre-apply state.
    ///
    /// # Errors
    ///
    /// `StateError::EmptyHistory` if no move has been applied.
    pub fn undo_move(&mut self) -> Result<Move, StateError> {
        let Some(HistoryEntry { mv, undo }) = self.history.pop() else {
            return Err(StateError::EmptyHistory);
        };
        let color = mv.color();

        // Move the piece back; a promoted queen reverts to the pawn.
        self.remove_piece(mv.to());
        self.set_piece(mv.from(), color, mv.piece());

        if let Some(side) = mv.castle() {
            let back = color.back_rank();
            let rook = self
                .remove_piece(Square(back, side.rook_target_file()))
                .expect("undo_move: castled rook is missing");
            self.set_piece(Square(back, side.rook_file()), rook.0, rook.1);
        }

        // Re-create the captured piece (behind the landing square, for en
        // passant).
        if let Some(victim) = mv.captured() {
            let captured_sq = if mv.is_en_passant() {
                self.en_passant_victim_square(&mv)
            } else {
                mv.to()
            };
            self.set_piece(captured_sq, color.opponent(), victim);
        }

        self.side_to_move = color;
        self.castling_rights = undo.previous_castling_rights;
        self.en_passant_target = undo.previous_en_passant_target;
        self.castled = undo.previous_castled;
        self.king_squares = undo.previous_king_squares;
        self.cached_moves = None;
        Ok(mv)
    }

    /// The square of the pawn removed by an en-passant capture: directly
    /// behind the landing square from the mover's point of view.
    fn en_passant_victim_square(&self, mv: &Move) -> Square {
        mv.to()
            .offset(-mv.color().pawn_direction(), 0)
            .expect("en passant landing square has no square behind it")
    }
}
