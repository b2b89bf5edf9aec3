//! Move ordering for better pruning yield.
//!
//! Captures come first, ordered by descending (victim value - attacker
//! value) so favorable trades are tried early; among the rest, promotions
//! precede plain moves. The sort is stable, so ordering never perturbs the
//! tie-break between equally scored moves and the chosen move is identical
//! with ordering on or off.

use super::super::Move;

/// All captures outrank every non-capture, even the worst trade.
const CAPTURE_BASE: i32 = 100_000;

/// Non-capturing promotions outrank plain quiet moves.
const PROMOTION_SCORE: i32 = 50_000;

pub(crate) fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|mv| std::cmp::Reverse(move_score(mv)));
}

fn move_score(mv: &Move) -> i32 {
    if let Some(victim) = mv.captured() {
        CAPTURE_BASE + victim.value() - mv.piece().value()
    } else if mv.is_promotion() {
        PROMOTION_SCORE
    } else {
        0
    }
}
