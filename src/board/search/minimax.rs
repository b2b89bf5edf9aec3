//! The recursive minimax walk.
//!
//! The call stack is the tree: each frame is (remaining depth, alpha, beta)
//! over the single shared board, with apply/undo bracketing every descent.
//! A move that captures the opposing king short-circuits its node with a
//! decisive score; that stands in for check detection, which this engine
//! does not perform.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use super::super::eval::{Evaluate, KING_CAPTURE_SCORE};
use super::super::{Board, Color, Move, Piece};
use super::{move_order, SearchConfig, SearchProgress, SearchReport, INFINITY};

struct SearchContext<'a> {
    board: &'a mut Board,
    evaluator: &'a dyn Evaluate,
    config: &'a SearchConfig,
    stop: &'a AtomicBool,
    start: Instant,
    nodes: u64,
    cutoffs: u64,
    cancelled: bool,
}

/// Run the search to completion (or cancellation) and build the report.
pub(super) fn run(
    board: &mut Board,
    evaluator: &dyn Evaluate,
    config: &SearchConfig,
    stop: &AtomicBool,
) -> SearchReport {
    let mut ctx = SearchContext {
        board,
        evaluator,
        config,
        stop,
        start: Instant::now(),
        nodes: 0,
        cutoffs: 0,
        cancelled: false,
    };
    ctx.search_root()
}

impl SearchContext<'_> {
    fn search_root(&mut self) -> SearchReport {
        let mut moves = if self.board.is_over() {
            Vec::new()
        } else {
            self.board.generate_moves()
        };

        // No legal move at the root is resignation, not an error.
        if moves.is_empty() {
            let value = self.evaluator.evaluate(self.board);
            return self.report(None, value, 1.0);
        }

        if self.config.order_moves {
            move_order::order_moves(&mut moves);
        }

        let maximizing = self.board.side_to_move() == Color::White;
        let total = moves.len();
        let mut alpha = -INFINITY;
        let mut beta = INFINITY;
        let mut best_move: Option<Move> = None;
        let mut best_value = if maximizing { -INFINITY } else { INFINITY };
        let mut completed = 0usize;

        for mv in &moves {
            if self.stop.load(Ordering::Relaxed) {
                self.cancelled = true;
                break;
            }

            // An immediate king capture is decisive; nothing deeper matters.
            if mv.captured() == Some(Piece::King) {
                let value = decisive_value(mv.color());
                self.publish_progress(Some(*mv), value, 1.0);
                return self.report(Some(*mv), value, 1.0);
            }

            self.board
                .apply_move(mv)
                .expect("search applied an ungenerated move");
            let value = self.minimax(self.config.depth.saturating_sub(1), alpha, beta);
            self.board
                .undo_move()
                .expect("search undo with empty history");

            if self.cancelled {
                break;
            }

            let improved = if maximizing {
                best_move.is_none() || value > best_value
            } else {
                best_move.is_none() || value < best_value
            };
            if improved {
                best_value = value;
                best_move = Some(*mv);
            }
            if self.config.use_alpha_beta {
                if maximizing {
                    alpha = alpha.max(best_value);
                } else {
                    beta = beta.min(best_value);
                }
            }

            completed += 1;
            self.publish_progress(best_move, best_value, completed as f64 / total as f64);
        }

        self.report(best_move, best_value, completed as f64 / total as f64)
    }

    /// Value of the subtree below the move just applied.
    fn minimax(&mut self, depth: u32, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;

        if depth == 0 || self.board.is_over() {
            return self.evaluator.evaluate(self.board);
        }

        let mut moves = self.board.generate_moves();
        if moves.is_empty() {
            return self.evaluator.evaluate(self.board);
        }

        // King capture decides this node outright.
        for mv in &moves {
            if mv.captured() == Some(Piece::King) {
                return decisive_value(mv.color());
            }
        }

        if self.config.order_moves {
            move_order::order_moves(&mut moves);
        }

        let maximizing = self.board.side_to_move() == Color::White;
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for mv in &moves {
            if self.stop.load(Ordering::Relaxed) {
                self.cancelled = true;
                break;
            }

            self.board
                .apply_move(mv)
                .expect("search applied an ungenerated move");
            let value = self.minimax(depth - 1, alpha, beta);
            self.board
                .undo_move()
                .expect("search undo with empty history");

            if self.cancelled {
                break;
            }

            if maximizing {
                best = best.max(value);
                if self.config.use_alpha_beta {
                    if best > beta {
                        // Fail-high: no sibling can matter to the ancestor
                        self.cutoffs += 1;
                        break;
                    }
                    alpha = alpha.max(best);
                }
            } else {
                best = best.min(value);
                if self.config.use_alpha_beta {
                    if best < alpha {
                        // Fail-low
                        self.cutoffs += 1;
                        break;
                    }
                    beta = beta.min(best);
                }
            }
        }

        best
    }

    fn publish_progress(&self, best_move: Option<Move>, best_value: i32, fraction: f64) {
        let Some(callback) = &self.config.progress else {
            return;
        };
        let elapsed = self.start.elapsed();
        let nodes_per_second = if elapsed.as_secs_f64() > 0.0 {
            (self.nodes as f64 / elapsed.as_secs_f64()) as u64
        } else {
            0
        };
        callback(&SearchProgress {
            depth: self.config.depth,
            nodes: self.nodes,
            elapsed,
            nodes_per_second,
            cutoffs: self.cutoffs,
            best_value,
            best_move,
            fraction_complete: fraction,
        });
    }

    fn report(&mut self, best_move: Option<Move>, value: i32, fraction: f64) -> SearchReport {
        // Final publication: observers hear from every search at least once.
        self.publish_progress(best_move, value, fraction);
        SearchReport {
            best_move,
            value,
            nodes: self.nodes,
            cutoffs: self.cutoffs,
            elapsed: self.start.elapsed(),
            cancelled: self.cancelled,
        }
    }
}

/// The decisive score when `mover` captures the opposing king.
const fn decisive_value(mover: Color) -> i32 {
    match mover {
        Color::White => KING_CAPTURE_SCORE,
        Color::Black => -KING_CAPTURE_SCORE,
    }
}
