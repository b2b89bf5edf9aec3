//! Static evaluation.
//!
//! The search consumes evaluation through the [`Evaluate`] trait so scoring
//! policies can be swapped without touching the search. Scores are in
//! centipawns from White's perspective: positive favors White.

use once_cell::sync::Lazy;

use super::{Board, CastleSide, Color, Piece};

/// Decisive score for a position where a king has been captured.
///
/// Well above any material total, well below the search's infinity bounds.
pub const KING_CAPTURE_SCORE: i32 = 1_000_000;

/// A scoring function over board positions.
///
/// Implementations must be pure: no interior mutation, same board in, same
/// score out.
pub trait Evaluate {
    /// Score `board` from White's perspective, in centipawns.
    fn evaluate(&self, board: &Board) -> i32;
}

const PAWN_ADVANCE_BONUS: i32 = 3;
const CASTLE_RIGHT_BONUS: i32 = 10;
const CASTLED_BONUS: i32 = 25;

/// Bonus for occupying central squares, peaking on the four center squares
/// and falling off toward the rim.
static CENTER_BONUS: Lazy<[[i32; 8]; 8]> = Lazy::new(|| {
    let mut table = [[0i32; 8]; 8];
    for (rank, row) in table.iter_mut().enumerate() {
        for (file, cell) in row.iter_mut().enumerate() {
            let rank_dist = (2 * rank as i32 - 7).abs() / 2;
            let file_dist = (2 * file as i32 - 7).abs() / 2;
            let dist = rank_dist.max(file_dist);
            *cell = (3 - dist).max(0) * 5;
        }
    }
    table
});

/// Material count plus small positional terms: pawn advancement, central
/// occupancy, castling rights held, and a bonus for having castled.
///
/// A missing king short-circuits to `KING_CAPTURE_SCORE` for the winner.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaterialEvaluator;

impl Evaluate for MaterialEvaluator {
    fn evaluate(&self, board: &Board) -> i32 {
        if board.king_square(Color::White).is_none() {
            return -KING_CAPTURE_SCORE;
        }
        if board.king_square(Color::Black).is_none() {
            return KING_CAPTURE_SCORE;
        }

        let mut score = 0;
        for rank in 0..8 {
            for file in 0..8 {
                let Some((color, piece)) = board.grid[rank][file] else {
                    continue;
                };
                let mut contribution = 0;
                if piece != Piece::King {
                    contribution += piece.value();
                    contribution += CENTER_BONUS[rank][file];
                }
                if piece == Piece::Pawn {
                    let advanced = match color {
                        Color::White => rank as i32 - 1,
                        Color::Black => 6 - rank as i32,
                    };
                    contribution += advanced.max(0) * PAWN_ADVANCE_BONUS;
                }
                score += color.sign() * contribution;
            }
        }

        for color in Color::BOTH {
            let mut castling = 0;
            for side in CastleSide::BOTH {
                if board.castling_rights().has(color, side) {
                    castling += CASTLE_RIGHT_BONUS;
                }
            }
            if board.has_castled(color) {
                castling += CASTLED_BONUS;
            }
            score += color.sign() * castling;
        }

        score
    }
}
