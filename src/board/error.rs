//! Error types for board operations.

use std::fmt;

use super::Square;

/// Error type for state-machine precondition violations.
///
/// These indicate a programming error in the caller, not a recoverable
/// condition: once one is returned, board integrity past that point is not
/// guaranteed, so callers should propagate rather than catch-and-continue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// Move destination lies off the board
    OffBoardDestination { square: Square },
    /// The game is already decided (a king has been captured)
    GameOver,
    /// Undo requested with no moves in the history
    EmptyHistory,
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::OffBoardDestination { square } => {
                write!(
                    f,
                    "Move destination ({}, {}) is off the board",
                    square.0, square.1
                )
            }
            StateError::GameOver => {
                write!(f, "Cannot apply a move: the game is already decided")
            }
            StateError::EmptyHistory => {
                write!(f, "Cannot undo: move history is empty")
            }
        }
    }
}

impl std::error::Error for StateError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Too many ranks in the position string
    TooManyRanks { ranks: usize },
    /// Too few ranks in the position string
    TooFewRanks { ranks: usize },
    /// A rank that does not describe exactly 8 files
    InvalidRank { rank: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::TooManyRanks { ranks } => {
                write!(f, "Too many ranks ({ranks}) in FEN")
            }
            FenError::TooFewRanks { ranks } => {
                write!(f, "Too few ranks ({ranks}) in FEN, expected 8")
            }
            FenError::InvalidRank { rank } => {
                write!(f, "Rank {rank} in FEN does not describe 8 files")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
        }
    }
}

impl std::error::Error for FenError {}
