//! Board state: the 8x8 grid, turn tracking, castling rights, and history.

use super::{CastlingRights, Color, Move, Piece, Square};

/// How (or whether) a game has been decided.
///
/// Only the first three variants are ever produced: a game ends when a king
/// is captured. The draw variants are declared extension points; stalemate,
/// fifty-move, and repetition detection are not implemented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    WhiteWins,
    BlackWins,
    Stalemate,
    FiftyMoveDraw,
    RepetitionDraw,
}

/// Everything `undo_move` needs to restore state that a move clobbers.
///
/// The captured piece identity itself lives on the `Move` record; this
/// carries the board-level state that cannot be recomputed from the move.
#[derive(Clone, Copy, Debug)]
pub(crate) struct UnmakeInfo {
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_castled: [bool; 2],
    pub(crate) previous_king_squares: [Option<Square>; 2],
}

/// One entry in the move history stack.
#[derive(Clone, Debug)]
pub(crate) struct HistoryEntry {
    pub(crate) mv: Move,
    pub(crate) undo: UnmakeInfo,
}

/// The game state machine: board grid, side to move, castling rights,
/// king lookup table, and move history.
///
/// The grid owns its pieces by value, so `Clone` is the deep-copy
/// operation: the copy shares nothing with the original and carries the
/// same turn, rights, and history.
#[derive(Clone, Debug)]
pub struct Board {
    /// [rank][file], rank 0 = White's back rank
    pub(crate) grid: [[Option<(Color, Piece)>; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    /// Whether each color has actually castled (evaluation bonus term)
    pub(crate) castled: [bool; 2],
    /// Set for exactly one ply after a double pawn push: the square the
    /// pawn skipped over, i.e. the en-passant capture destination.
    pub(crate) en_passant_target: Option<Square>,
    /// Side-indexed king lookup, None once that king has been captured.
    /// Maintained by set/remove and restored from UnmakeInfo on undo, so
    /// it can never point at a square the king has left.
    pub(crate) king_squares: [Option<Square>; 2],
    pub(crate) history: Vec<HistoryEntry>,
    /// Pseudo-legal moves for the side to move, valid until the next
    /// apply/undo.
    pub(crate) cached_moves: Option<Vec<Move>>,
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, file), Color::White, *piece);
            board.set_piece(Square(7, file), Color::Black, *piece);
            board.set_piece(Square(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square(6, file), Color::Black, Piece::Pawn);
        }
        board.castling_rights = CastlingRights::all();
        board
    }

    /// An empty board with White to move and no castling rights.
    #[must_use]
    pub(crate) fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            castled: [false; 2],
            en_passant_target: None,
            king_squares: [None; 2],
            history: Vec::new(),
            cached_moves: None,
        }
    }

    /// The piece on a square, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.grid[sq.0][sq.1]
    }

    /// Just the piece kind on a square.
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Just the color of the piece on a square.
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub(crate) fn is_empty_square(&self, sq: Square) -> bool {
        self.grid[sq.0][sq.1].is_none()
    }

    /// Place a piece, keeping the king lookup table in sync.
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.grid[sq.0][sq.1] = Some((color, piece));
        if piece == Piece::King {
            self.king_squares[color.index()] = Some(sq);
        }
    }

    /// Remove whatever stands on a square, keeping the king table in sync.
    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<(Color, Piece)> {
        let removed = self.grid[sq.0][sq.1].take();
        if let Some((color, Piece::King)) = removed {
            self.king_squares[color.index()] = None;
        }
        removed
    }

    /// The side to move.
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Current castling rights.
    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Whether this color has castled at some point in the game.
    #[inline]
    #[must_use]
    pub fn has_castled(&self, color: Color) -> bool {
        self.castled[color.index()]
    }

    /// The en-passant capture square, if the last move was a double push.
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Where this color's king stands, or None if it has been captured.
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.king_squares[color.index()]
    }

    /// True once either king has been captured.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.king_squares.iter().any(Option::is_none)
    }

    /// The game result so far.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.king_square(Color::White).is_none() {
            Outcome::BlackWins
        } else if self.king_square(Color::Black).is_none() {
            Outcome::WhiteWins
        } else {
            Outcome::InProgress
        }
    }

    /// Number of half-moves played so far.
    #[must_use]
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// The most recently applied move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|entry| entry.mv)
    }

    /// All moves played so far, oldest first.
    #[must_use]
    pub fn move_history(&self) -> Vec<Move> {
        self.history.iter().map(|entry| entry.mv).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
