//! Short algebraic notation (SAN) rendering.
//!
//! Produces "O-O"/"O-O-O" for castles, "e4" for plain pawn moves, "Nf3" for
//! plain piece moves, an "x" before the destination for captures, "=Q" for
//! promotions, and a trailing "+" when the move gives check.
//!
//! Known limitation: no disambiguation is emitted when two pieces of the
//! same kind can reach the same destination ("Rad1" is rendered "Rd1"), and
//! pawn captures omit the source file ("exd5" is rendered "xd5"). Book
//! matching strips check suffixes, so lookups tolerate "+"/"#" differences
//! but not disambiguated source squares.

use super::{CastleSide, Move, Piece};

impl Move {
    /// Render this move in short algebraic notation.
    #[must_use]
    pub fn to_short_algebraic(&self) -> String {
        let mut san = String::new();

        if let Some(side) = self.castle() {
            san.push_str(match side {
                CastleSide::Short => "O-O",
                CastleSide::Long => "O-O-O",
            });
        } else {
            if self.piece() != Piece::Pawn {
                san.push(self.piece().to_char().to_ascii_uppercase());
            }
            if self.is_capture() {
                san.push('x');
            }
            san.push_str(&self.to().to_string());
            if let Some(promo) = self.promotion() {
                san.push('=');
                san.push(promo.to_char().to_ascii_uppercase());
            }
        }

        if self.gives_check() {
            san.push('+');
        }
        san
    }

    /// Whether this move matches a SAN string from a game record.
    ///
    /// Check/checkmate suffixes are ignored on both sides: the recorded
    /// game knows about checks this engine does not detect.
    #[must_use]
    pub fn matches_san(&self, san: &str) -> bool {
        let rendered = self.to_short_algebraic();
        strip_check_suffix(&rendered) == strip_check_suffix(san)
    }
}

fn strip_check_suffix(san: &str) -> &str {
    san.trim_end_matches(['+', '#'])
}
