//! Property-based tests using proptest.

use proptest::prelude::*;

use crate::board::{Board, Color, Move};

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Strategy to generate a seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random pseudo-legal moves; returns how many were
/// actually applied (the playout stops early at a king capture).
fn random_playout(board: &mut Board, seed: u64, num_moves: usize) -> usize {
    use rand::prelude::*;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut applied = 0;
    for _ in 0..num_moves {
        if board.is_over() {
            break;
        }
        let moves = board.generate_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        board.apply_move(&mv).expect("generated move failed to apply");
        applied += 1;
    }
    applied
}

proptest! {
    /// Property: apply followed by undo restores the position exactly,
    /// across random playouts of every length.
    #[test]
    fn prop_apply_undo_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let initial_fen = board.to_fen();
        let initial_kings = [
            board.king_square(Color::White),
            board.king_square(Color::Black),
        ];

        let applied = random_playout(&mut board, seed, num_moves);
        for _ in 0..applied {
            board.undo_move().unwrap();
        }

        prop_assert_eq!(board.to_fen(), initial_fen);
        prop_assert_eq!(board.king_square(Color::White), initial_kings[0]);
        prop_assert_eq!(board.king_square(Color::Black), initial_kings[1]);
        prop_assert_eq!(board.ply_count(), 0);
    }

    /// Property: FEN round-trip preserves position, turn, rights, and the
    /// en passant window.
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        random_playout(&mut board, seed, num_moves);

        let fen = board.to_fen();
        let restored = Board::try_from_fen(&fen).unwrap();

        prop_assert_eq!(restored.to_fen(), fen);
        prop_assert_eq!(restored.side_to_move(), board.side_to_move());
        prop_assert_eq!(restored.castling_rights(), board.castling_rights());
        prop_assert_eq!(restored.en_passant_target(), board.en_passant_target());
    }

    /// Property: every generated move is in bounds, belongs to the side to
    /// move, and never lands on a friendly piece.
    #[test]
    fn prop_generated_moves_well_formed(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        random_playout(&mut board, seed, num_moves);
        if board.is_over() {
            return Ok(());
        }

        let side = board.side_to_move();
        let moves: Vec<Move> = board.generate_moves();
        for mv in &moves {
            prop_assert!(mv.to().in_bounds(), "off-board destination: {:?}", mv);
            prop_assert_eq!(mv.color(), side);
            prop_assert_ne!(board.color_on(mv.to()), Some(side), "friendly capture: {:?}", mv);
            prop_assert_eq!(board.piece_on(mv.from()), Some(mv.piece()));
        }
    }

    /// Property: the SAN rendering of a generated move always agrees with
    /// its structural flags, for every move kind the playout produces.
    #[test]
    fn prop_san_matches_structure(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        random_playout(&mut board, seed, num_moves);
        if board.is_over() {
            return Ok(());
        }

        for mv in board.generate_moves() {
            let san = mv.to_short_algebraic();
            prop_assert!(mv.matches_san(&san), "{:?} does not match its own SAN {}", mv, san);
            prop_assert_eq!(san.contains('x'), mv.is_capture());
            prop_assert_eq!(san.contains('='), mv.is_promotion());
            prop_assert_eq!(san.starts_with('O'), mv.is_castle());
            prop_assert_eq!(san.ends_with('+'), mv.gives_check());
        }
    }
}
