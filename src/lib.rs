pub mod board;
pub mod book;
pub mod engine;

pub use board::{Board, Color, Move, Piece, Square};
pub use book::OpeningBook;
pub use engine::Controller;
