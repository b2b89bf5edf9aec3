//! Engine controller implementation.
//!
//! Runs searches on a background thread over a private clone of the
//! caller's board. Cancellation is cooperative through a shared stop
//! flag; the result comes back through a single-writer slot, never
//! through shared mutable search state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::debug;
use parking_lot::Mutex;

use crate::board::{search, Board, Evaluate, MaterialEvaluator, SearchConfig, SearchReport};

/// Search thread stack size (32 MB)
const SEARCH_STACK_SIZE: usize = 32 * 1024 * 1024;

/// Handle to a search running on a background thread.
pub struct SearchJob {
    /// Stop flag for the search
    stop: Arc<AtomicBool>,
    /// Single-writer result slot, filled exactly once by the worker
    result: Arc<Mutex<Option<SearchReport>>>,
    /// Handle to the search thread
    handle: JoinHandle<()>,
}

impl SearchJob {
    /// Signal stop without waiting. The search unwinds at the next
    /// sibling boundary and still publishes a report.
    pub fn signal_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Whether the worker thread has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the search finishes and take its report.
    ///
    /// A worker panic is resumed here rather than masked by a missing
    /// report.
    pub fn wait(self) -> SearchReport {
        if let Err(panic) = self.handle.join() {
            std::panic::resume_unwind(panic);
        }
        self.result
            .lock()
            .take()
            .expect("search thread exited without publishing a report")
    }

    /// Stop the search and wait for its (possibly partial) report.
    pub fn stop_and_wait(self) -> SearchReport {
        self.signal_stop();
        self.wait()
    }
}

/// Owns the game board and at most one background search at a time.
pub struct Controller {
    board: Board,
    evaluator: Arc<dyn Evaluate + Send + Sync>,
    current_job: Option<SearchJob>,
}

impl Controller {
    /// A controller over the standard starting position with the
    /// material evaluator.
    #[must_use]
    pub fn new() -> Self {
        Controller::with_evaluator(Arc::new(MaterialEvaluator))
    }

    /// A controller using a caller-supplied evaluator.
    #[must_use]
    pub fn with_evaluator(evaluator: Arc<dyn Evaluate + Send + Sync>) -> Self {
        Controller {
            board: Board::new(),
            evaluator,
            current_job: None,
        }
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the current board.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the board, stopping any active search first.
    pub fn set_board(&mut self, board: Board) {
        self.stop_search();
        self.board = board;
    }

    /// Reset to the starting position, stopping any active search first.
    pub fn new_game(&mut self) {
        self.set_board(Board::new());
    }

    /// Whether a search job is currently held (it may already be done).
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.current_job.is_some()
    }

    /// Start a search over a clone of the current board.
    ///
    /// Any previous search is stopped and its report discarded. The
    /// controller's own board is never touched by the worker.
    pub fn start_search(&mut self, config: SearchConfig) {
        self.stop_search();

        let stop = Arc::new(AtomicBool::new(false));
        let result: Arc<Mutex<Option<SearchReport>>> = Arc::new(Mutex::new(None));

        let mut search_board = self.board.clone();
        let evaluator = Arc::clone(&self.evaluator);
        let stop_clone = Arc::clone(&stop);
        let result_clone = Arc::clone(&result);

        debug!("starting background search at depth {}", config.depth);

        let handle = thread::Builder::new()
            .name("search".to_string())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                let report = search(&mut search_board, evaluator.as_ref(), &config, &stop_clone);
                *result_clone.lock() = Some(report);
            })
            .expect("failed to spawn search thread");

        self.current_job = Some(SearchJob {
            stop,
            result,
            handle,
        });
    }

    /// Signal stop to the active search without waiting.
    pub fn signal_stop(&self) {
        if let Some(job) = &self.current_job {
            job.signal_stop();
        }
    }

    /// Stop any active search and return its report.
    pub fn stop_search(&mut self) -> Option<SearchReport> {
        self.current_job.take().map(SearchJob::stop_and_wait)
    }

    /// Block until the active search finishes and return its report.
    pub fn wait(&mut self) -> Option<SearchReport> {
        self.current_job.take().map(SearchJob::wait)
    }

    /// Whether the active search has finished (false when none is running).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current_job
            .as_ref()
            .is_some_and(SearchJob::is_finished)
    }
}

impl Default for Controller {
    fn default() -> Self {
        Controller::new()
    }
}
