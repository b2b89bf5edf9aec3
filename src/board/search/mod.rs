//! Game-tree search: minimax with optional alpha-beta pruning and move
//! ordering.
//!
//! The search walks the tree depth-first over the caller's board using the
//! apply/undo discipline; no node objects or transposition table persist
//! across calls. Pruning and ordering are pure performance toggles: they
//! change node counts and cutoff statistics, never the chosen move or its
//! value.

mod minimax;
mod move_order;

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use log::debug;

use super::eval::Evaluate;
use super::{Board, Move};

/// Alpha-beta infinity bound, strictly outside any achievable score.
pub(crate) const INFINITY: i32 = 2 * super::eval::KING_CAPTURE_SCORE;

/// Running statistics published to an observer while a search runs.
#[derive(Debug, Clone)]
pub struct SearchProgress {
    /// Configured search depth
    pub depth: u32,
    /// Nodes visited so far (monotonically non-decreasing per search)
    pub nodes: u64,
    /// Wall time since the search started
    pub elapsed: Duration,
    /// Visit rate so far
    pub nodes_per_second: u64,
    /// Alpha-beta cutoffs so far
    pub cutoffs: u64,
    /// Best value found among completed root siblings
    pub best_value: i32,
    /// Best move so far, if any root sibling has completed
    pub best_move: Option<Move>,
    /// Fraction of root siblings fully explored, in [0, 1]
    pub fraction_complete: f64,
}

/// Callback type for progress reporting.
pub type ProgressCallback = Arc<dyn Fn(&SearchProgress) + Send + Sync>;

/// Configuration for one search. Passed explicitly into the entry point;
/// there are no ambient settings.
#[derive(Clone)]
pub struct SearchConfig {
    /// Full-width search depth in plies
    pub depth: u32,
    /// Alpha-beta pruning toggle (off = plain minimax, same result)
    pub use_alpha_beta: bool,
    /// Move ordering toggle (captures first, best trades first)
    pub order_moves: bool,
    /// Optional observer, called after each completed root sibling and
    /// once at completion
    pub progress: Option<ProgressCallback>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig::depth(4)
    }
}

impl SearchConfig {
    /// A depth-limited search with pruning and ordering enabled.
    #[must_use]
    pub fn depth(depth: u32) -> Self {
        SearchConfig {
            depth,
            use_alpha_beta: true,
            order_moves: true,
            progress: None,
        }
    }

    /// Disable alpha-beta pruning (plain minimax).
    #[must_use]
    pub fn without_pruning(mut self) -> Self {
        self.use_alpha_beta = false;
        self
    }

    /// Disable move ordering.
    #[must_use]
    pub fn without_ordering(mut self) -> Self {
        self.order_moves = false;
        self
    }

    /// Attach a progress observer.
    #[must_use]
    pub fn with_progress(mut self, callback: ProgressCallback) -> Self {
        self.progress = Some(callback);
        self
    }
}

/// The result of a completed (or cancelled) search.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// The chosen move. None means no legal move existed at the root:
    /// the engine resigns. This is ordinary control flow, not an error,
    /// and is distinct from a legal move carrying an extreme score.
    pub best_move: Option<Move>,
    /// Value of the chosen line, centipawns from White's perspective
    pub value: i32,
    /// Total nodes visited
    pub nodes: u64,
    /// Total alpha-beta cutoffs
    pub cutoffs: u64,
    /// Wall time spent
    pub elapsed: Duration,
    /// True if the stop flag ended the search early; `best_move` is then
    /// the best fully-explored root sibling so far, if any
    pub cancelled: bool,
}

/// Run a search over `board` and pick a move for the side to move.
///
/// The board is mutated during the search through apply/undo pairs and is
/// restored exactly before this returns, including on cancellation. The
/// stop flag is checked cooperatively at sibling boundaries at every depth.
pub fn search(
    board: &mut Board,
    evaluator: &dyn Evaluate,
    config: &SearchConfig,
    stop: &AtomicBool,
) -> SearchReport {
    debug!(
        "search started: depth {}, pruning {}, ordering {}",
        config.depth, config.use_alpha_beta, config.order_moves
    );

    let report = minimax::run(board, evaluator, config, stop);

    if report.cancelled {
        debug!(
            "search cancelled after {} nodes in {:?}",
            report.nodes, report.elapsed
        );
    } else {
        match report.best_move {
            Some(mv) => debug!(
                "search finished: {} value {} ({} nodes, {} cutoffs, {:?})",
                mv.to_short_algebraic(),
                report.value,
                report.nodes,
                report.cutoffs,
                report.elapsed
            ),
            None => debug!("search finished: no legal move, resigning"),
        }
    }

    report
}
