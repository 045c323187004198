//! Canonical chess-rule constants.
//!
//! Static rule literals: the standard starting position FEN, the home
//! squares that gate castling rights, and the square masks each castling
//! move needs empty.

use crate::game_state::chess_types::Square;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

// King and rook home squares, used for castling-rights maintenance.
pub const WHITE_KING_HOME: Square = 4;
pub const BLACK_KING_HOME: Square = 60;
pub const WHITE_QUEENSIDE_ROOK_HOME: Square = 0;
pub const WHITE_KINGSIDE_ROOK_HOME: Square = 7;
pub const BLACK_QUEENSIDE_ROOK_HOME: Square = 56;
pub const BLACK_KINGSIDE_ROOK_HOME: Square = 63;

// Squares that must be empty between king and rook for each castle.
pub const WHITE_KINGSIDE_BETWEEN: u64 = (1u64 << 5) | (1u64 << 6);
pub const WHITE_QUEENSIDE_BETWEEN: u64 = (1u64 << 1) | (1u64 << 2) | (1u64 << 3);
pub const BLACK_KINGSIDE_BETWEEN: u64 = (1u64 << 61) | (1u64 << 62);
pub const BLACK_QUEENSIDE_BETWEEN: u64 = (1u64 << 57) | (1u64 << 58) | (1u64 << 59);
