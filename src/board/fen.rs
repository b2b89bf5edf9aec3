//! FEN parsing and serialization.
//!
//! Used by tests and tooling to set up positions; game persistence beyond
//! the in-memory history is out of scope. Only the first four FEN fields
//! are required; move counters are accepted and ignored.

use std::str::FromStr;

use super::error::FenError;
use super::{Board, CastleSide, Color, Piece, Square};

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// # Errors
    ///
    /// Returns a `FenError` describing the first malformed field.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Piece placement: FEN lists rank 8 first, our rank 7
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() > 8 {
            return Err(FenError::TooManyRanks { ranks: ranks.len() });
        }
        if ranks.len() < 8 {
            return Err(FenError::TooFewRanks { ranks: ranks.len() });
        }
        for (fen_rank, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - fen_rank;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: fen_rank,
                            files: file + 1,
                        });
                    }
                    board.set_piece(Square(rank, file), color, piece);
                    file += 1;
                }
            }
            // Digit runs must land exactly on the rank boundary
            if file != 8 {
                return Err(FenError::InvalidRank { rank: fen_rank });
            }
        }

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        for c in parts[2].chars() {
            match c {
                'K' => board.castling_rights.set(Color::White, CastleSide::Short),
                'Q' => board.castling_rights.set(Color::White, CastleSide::Long),
                'k' => board.castling_rights.set(Color::Black, CastleSide::Short),
                'q' => board.castling_rights.set(Color::Black, CastleSide::Long),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            Some(
                Square::from_str(parts[3]).map_err(|_| FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                })?,
            )
        };

        Ok(board)
    }

    /// Serialize the position (placement, side, castling, en passant) to FEN.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for rank in (0..8).rev() {
            let mut empty_run = 0;
            for file in 0..8 {
                match self.grid[rank][file] {
                    None => empty_run += 1,
                    Some((color, piece)) => {
                        if empty_run > 0 {
                            fen.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        fen.push(piece.to_fen_char(color));
                    }
                }
            }
            if empty_run > 0 {
                fen.push_str(&empty_run.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        let mut any_rights = false;
        for (color, side, c) in [
            (Color::White, CastleSide::Short, 'K'),
            (Color::White, CastleSide::Long, 'Q'),
            (Color::Black, CastleSide::Short, 'k'),
            (Color::Black, CastleSide::Long, 'q'),
        ] {
            if self.castling_rights.has(color, side) {
                fen.push(c);
                any_rights = true;
            }
        }
        if !any_rights {
            fen.push('-');
        }

        fen.push(' ');
        match self.en_passant_target {
            Some(sq) => fen.push_str(&sq.to_string()),
            None => fen.push('-'),
        }

        fen
    }
}
