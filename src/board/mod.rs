//! Chess board representation and game logic.
//!
//! Uses a plain 8x8 grid with pseudo-legal move generation: moves obey
//! piece geometry but may leave the mover's king en prise, and the game
//! ends when a king is actually captured. Castling, en passant, and
//! (auto-queen) promotion are supported.
//!
//! # Example
//! ```
//! use kingtaker::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! println!("Starting position has {} pseudo-legal moves", moves.len());
//! ```

mod builder;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod san;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, SquareError, StateError};
pub use eval::{Evaluate, MaterialEvaluator, KING_CAPTURE_SCORE};
pub use state::{Board, Outcome};
pub use types::{CastleSide, CastlingRights, Color, Move, Piece, Square};

// Public API - search entry point and configuration
pub use search::{search, ProgressCallback, SearchConfig, SearchProgress, SearchReport};
