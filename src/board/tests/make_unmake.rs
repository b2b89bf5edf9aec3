//! Apply/undo move tests.
//!
//! The invariant under test: after any apply/undo pair the board, side to
//! move, castling rights, and king table are exactly what they were before
//! the apply, for every move kind.

use rand::prelude::*;

use super::movegen::apply_lan;
use crate::board::{
    Board, BoardBuilder, CastleSide, Color, Move, Outcome, Piece, Square, StateError,
};

fn find_move(board: &mut Board, from: Square, to: Square) -> Move {
    board
        .generate_moves()
        .into_iter()
        .find(|mv| mv.from() == from && mv.to() == to)
        .unwrap_or_else(|| panic!("expected move {from}{to} not found"))
}

fn snapshot(board: &Board) -> (String, [Option<Square>; 2], usize) {
    (
        board.to_fen(),
        [
            board.king_square(Color::White),
            board.king_square(Color::Black),
        ],
        board.ply_count(),
    )
}

#[test]
fn test_quiet_move_round_trip() {
    let mut board = Board::new();
    let before = snapshot(&board);

    let mv = find_move(&mut board, Square(1, 4), Square(3, 4));
    board.apply_move(&mv).unwrap();
    assert_eq!(board.side_to_move(), Color::Black);
    assert_eq!(board.en_passant_target(), Some(Square(2, 4)));

    let undone = board.undo_move().unwrap();
    assert_eq!(undone, mv);
    assert_eq!(snapshot(&board), before);
}

#[test]
fn test_capture_round_trip() {
    let mut board = Board::new();
    apply_lan(&mut board, "e2e4");
    apply_lan(&mut board, "d7d5");
    let before = snapshot(&board);

    let mv = find_move(&mut board, Square(3, 4), Square(4, 3));
    assert_eq!(mv.captured(), Some(Piece::Pawn));
    board.apply_move(&mv).unwrap();
    assert_eq!(board.piece_on(Square(4, 3)), Some(Piece::Pawn));
    assert_eq!(board.color_on(Square(4, 3)), Some(Color::White));

    board.undo_move().unwrap();
    assert_eq!(snapshot(&board), before);
}

#[test]
fn test_castle_round_trip_both_sides() {
    for (side, king_to, rook_to, rook_from) in [
        (CastleSide::Short, Square(0, 6), Square(0, 5), Square(0, 7)),
        (CastleSide::Long, Square(0, 2), Square(0, 3), Square(0, 0)),
    ] {
        let mut board =
            Board::try_from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq -").unwrap();
        let before = snapshot(&board);

        let mv = board
            .generate_moves()
            .into_iter()
            .find(|mv| mv.castle() == Some(side))
            .unwrap();
        board.apply_move(&mv).unwrap();

        assert_eq!(board.piece_on(king_to), Some(Piece::King));
        assert_eq!(board.piece_on(rook_to), Some(Piece::Rook));
        assert!(board.piece_at(rook_from).is_none());
        assert!(board.has_castled(Color::White));
        assert!(!board.castling_rights().has(Color::White, CastleSide::Short));
        assert!(!board.castling_rights().has(Color::White, CastleSide::Long));
        assert_eq!(board.king_square(Color::White), Some(king_to));

        board.undo_move().unwrap();
        assert_eq!(snapshot(&board), before);
        assert!(!board.has_castled(Color::White));
        assert!(board.castling_rights().has(Color::White, CastleSide::Short));
    }
}

#[test]
fn test_promotion_round_trip() {
    let mut board = BoardBuilder::new()
        .piece(Square(6, 0), Color::White, Piece::Pawn)
        .piece(Square(0, 4), Color::White, Piece::King)
        .piece(Square(7, 4), Color::Black, Piece::King)
        .build();
    let before = snapshot(&board);

    let mv = find_move(&mut board, Square(6, 0), Square(7, 0));
    assert_eq!(mv.promotion(), Some(Piece::Queen));
    board.apply_move(&mv).unwrap();
    assert_eq!(
        board.piece_at(Square(7, 0)),
        Some((Color::White, Piece::Queen))
    );

    board.undo_move().unwrap();
    assert_eq!(
        board.piece_at(Square(6, 0)),
        Some((Color::White, Piece::Pawn))
    );
    assert_eq!(snapshot(&board), before);
}

#[test]
fn test_en_passant_round_trip() {
    let mut board = Board::new();
    for lan in ["e2e4", "a7a6", "e4e5", "d7d5"] {
        apply_lan(&mut board, lan);
    }
    let before = snapshot(&board);

    let mv = find_move(&mut board, Square(4, 4), Square(5, 3));
    assert!(mv.is_en_passant());
    board.apply_move(&mv).unwrap();
    // The captured pawn disappears from behind the landing square.
    assert!(board.piece_at(Square(4, 3)).is_none());
    assert_eq!(board.piece_on(Square(5, 3)), Some(Piece::Pawn));

    board.undo_move().unwrap();
    assert_eq!(
        board.piece_at(Square(4, 3)),
        Some((Color::Black, Piece::Pawn))
    );
    assert_eq!(snapshot(&board), before);
}

#[test]
fn test_rook_capture_clears_both_long_rights() {
    let mut board = Board::try_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq -").unwrap();

    // Ra1xa8: White's rook leaves a1, Black's rook dies on a8.
    let mv = find_move(&mut board, Square(0, 0), Square(7, 0));
    assert_eq!(mv.captured(), Some(Piece::Rook));
    board.apply_move(&mv).unwrap();

    let rights = board.castling_rights();
    assert!(!rights.has(Color::White, CastleSide::Long));
    assert!(!rights.has(Color::Black, CastleSide::Long));
    assert!(rights.has(Color::White, CastleSide::Short));
    assert!(rights.has(Color::Black, CastleSide::Short));

    board.undo_move().unwrap();
    assert_eq!(board.castling_rights(), crate::board::CastlingRights::all());
}

#[test]
fn test_king_move_clears_both_rights() {
    let mut board = Board::try_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq -").unwrap();

    let mv = find_move(&mut board, Square(0, 4), Square(1, 4));
    board.apply_move(&mv).unwrap();

    assert!(!board.castling_rights().has(Color::White, CastleSide::Short));
    assert!(!board.castling_rights().has(Color::White, CastleSide::Long));
    assert!(board.castling_rights().has(Color::Black, CastleSide::Short));
}

#[test]
fn test_king_capture_decides_the_game() {
    let mut board = Board::try_from_fen("4k3/4Q3/8/8/8/8/8/4K3 b - -").unwrap();
    assert_eq!(board.outcome(), Outcome::InProgress);

    let mv = find_move(&mut board, Square(7, 4), Square(6, 4));
    assert_eq!(mv.captured(), Some(Piece::Queen));
    board.apply_move(&mv).unwrap();
    assert_eq!(board.outcome(), Outcome::InProgress);

    // White recaptures the king.
    let mv = find_move(&mut board, Square(0, 4), Square(1, 4));
    board.apply_move(&mv).unwrap();

    // Now capture it for real from a fresh position.
    let mut board = Board::try_from_fen("4k3/8/4Q3/8/8/8/8/4K3 w - -").unwrap();
    let mv = find_move(&mut board, Square(5, 4), Square(7, 4));
    assert_eq!(mv.captured(), Some(Piece::King));
    board.apply_move(&mv).unwrap();

    assert!(board.is_over());
    assert_eq!(board.outcome(), Outcome::WhiteWins);
    assert_eq!(board.king_square(Color::Black), None);

    board.undo_move().unwrap();
    assert!(!board.is_over());
    assert_eq!(board.king_square(Color::Black), Some(Square(7, 4)));
}

#[test]
fn test_apply_rejected_after_game_over() {
    let mut board = Board::try_from_fen("4k3/8/4Q3/8/8/8/8/4K3 w - -").unwrap();
    let capture = find_move(&mut board, Square(5, 4), Square(7, 4));
    board.apply_move(&capture).unwrap();
    assert!(board.is_over());

    let mv = Move::quiet(Piece::King, Color::Black, Square(7, 3), Square(7, 2));
    assert_eq!(board.apply_move(&mv), Err(StateError::GameOver));
}

#[test]
fn test_apply_rejects_off_board_destination() {
    let mut board = Board::new();
    let mv = Move::quiet(Piece::Knight, Color::White, Square(0, 1), Square(8, 2));
    assert_eq!(
        board.apply_move(&mv),
        Err(StateError::OffBoardDestination {
            square: Square(8, 2)
        })
    );
}

#[test]
fn test_undo_with_empty_history() {
    let mut board = Board::new();
    assert_eq!(board.undo_move(), Err(StateError::EmptyHistory));
}

#[test]
fn test_clone_is_independent() {
    let mut board = Board::new();
    let mut copy = board.clone();
    apply_lan(&mut copy, "e2e4");

    assert_eq!(board.ply_count(), 0);
    assert!(board.piece_at(Square(1, 4)).is_some());
    assert!(copy.piece_at(Square(1, 4)).is_none());
    assert_eq!(board.generate_moves().len(), 20);
}

#[test]
fn test_random_playout_round_trip() {
    let mut board = Board::new();
    let before = snapshot(&board);
    let initial_rights = board.castling_rights();

    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut applied = 0;
    for _ in 0..120 {
        if board.is_over() {
            break;
        }
        let moves = board.generate_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        board.apply_move(&mv).unwrap();
        applied += 1;
    }

    for _ in 0..applied {
        board.undo_move().unwrap();
    }

    assert_eq!(snapshot(&board), before);
    assert_eq!(board.castling_rights(), initial_rights);
}
