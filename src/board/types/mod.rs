//! Core value types for the board model.

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;
