//! Opening book: suggests moves from a corpus of recorded games.
//!
//! The book is a flat list of game lines in short algebraic notation.
//! Given the SAN history of the game so far, it collects every
//! continuation played after that exact prefix in the corpus and picks
//! one at random. Suggestions stop after `max_plies` half-moves.
//!
//! The book never inspects engine state: a suggestion is resolved purely
//! by matching SAN against the board's generated moves.

use rand::seq::SliceRandom;

use crate::board::{Board, Move};

const DEFAULT_MAX_PLIES: usize = 10;

/// An in-memory opening book.
#[derive(Clone, Debug)]
pub struct OpeningBook {
    lines: Vec<Vec<String>>,
    max_plies: usize,
}

impl Default for OpeningBook {
    fn default() -> Self {
        OpeningBook::new(DEFAULT_MAX_PLIES)
    }
}

impl OpeningBook {
    /// An empty book that suggests within the first `max_plies` half-moves.
    #[must_use]
    pub fn new(max_plies: usize) -> Self {
        OpeningBook {
            lines: Vec::new(),
            max_plies,
        }
    }

    /// A book preloaded with a handful of mainline openings.
    #[must_use]
    pub fn standard() -> Self {
        let mut book = OpeningBook::new(DEFAULT_MAX_PLIES);
        for line in [
            "e4 e5 Nf3 Nc6 Bb5 a6 Ba4 Nf6 O-O",
            "e4 e5 Nf3 Nc6 Bc4 Bc5 c3 Nf6 d3",
            "e4 e5 Nf3 Nc6 d4 xd4 Nxd4 Nf6",
            "e4 c5 Nf3 d6 d4 xd4 Nxd4 Nf6 Nc3",
            "e4 c5 Nf3 Nc6 d4 xd4 Nxd4 g6",
            "e4 e6 d4 d5 Nc3 Bb4",
            "e4 c6 d4 d5 Nc3 xe4 Nxe4 Bf5",
            "d4 d5 c4 e6 Nc3 Nf6 Bg5 Be7",
            "d4 d5 c4 c6 Nf3 Nf6 Nc3 xc4",
            "d4 Nf6 c4 e6 Nc3 Bb4 e3 O-O",
            "d4 Nf6 c4 g6 Nc3 Bg7 e4 d6",
            "c4 e5 Nc3 Nf6 Nf3 Nc6 g3 d5",
            "Nf3 d5 g3 Nf6 Bg2 e6 O-O Be7",
        ] {
            book.add_line(line);
        }
        book
    }

    /// How many half-moves deep this book will suggest.
    #[must_use]
    pub fn max_plies(&self) -> usize {
        self.max_plies
    }

    /// Number of game lines in the corpus.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True if the corpus is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one game line, given as whitespace-separated SAN moves.
    /// Move-number tokens ("1.", "2.") are skipped.
    pub fn add_line(&mut self, line: &str) {
        let plies: Vec<String> = line
            .split_whitespace()
            .filter(|token| !token.ends_with('.'))
            .map(str::to_string)
            .collect();
        if !plies.is_empty() {
            self.lines.push(plies);
        }
    }

    /// Suggest a move for the position reached by `history`.
    ///
    /// Collects every distinct continuation the corpus plays after this
    /// exact SAN prefix, picks one at random, and resolves it against the
    /// board's generated moves. Returns `None` past `max_plies`, when no
    /// line matches the prefix, or when no matching SAN resolves to a
    /// generated move.
    pub fn suggest(&self, history: &[String], board: &mut Board) -> Option<Move> {
        if history.len() >= self.max_plies {
            return None;
        }

        let mut continuations: Vec<&str> = Vec::new();
        for line in &self.lines {
            if line.len() <= history.len() {
                continue;
            }
            let prefix_matches = history
                .iter()
                .zip(line.iter())
                .all(|(played, recorded)| same_san(played, recorded));
            if prefix_matches {
                let next = line[history.len()].as_str();
                if !continuations.contains(&next) {
                    continuations.push(next);
                }
            }
        }

        let mut rng = rand::thread_rng();
        continuations.shuffle(&mut rng);

        let moves = board.generate_moves();
        for san in continuations {
            if let Some(mv) = moves.iter().find(|mv| mv.matches_san(san)) {
                return Some(*mv);
            }
        }
        None
    }
}

/// SAN equality ignoring check/mate suffixes, so a recorded "Nf3" matches
/// a played "Nf3+".
fn same_san(a: &str, b: &str) -> bool {
    a.trim_end_matches(['+', '#']) == b.trim_end_matches(['+', '#'])
}
