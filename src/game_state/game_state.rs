//! Core board state representation.
//!
//! `GameState` is the central model for the engine. It stores the twelve
//! piece bitboards, occupancy caches, turn/state flags, and the FEN
//! clocks. It is a small fixed-size value: callers that need speculative
//! positions (legality simulation, parallel search) clone it per branch
//! rather than sharing one mutable instance.

use crate::errors::ChessResult;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::legal_moves_for;
use crate::move_generation::pseudo_legal::moves_for;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::move_notation::parse_move_notation;

#[derive(Debug, Clone)]
pub struct GameState {
    // --- Bitboard representation ---
    // [color][piece_kind]; the twelve sets are mutually disjoint.
    pub pieces: [[u64; 6]; 2],

    // Occupancy caches, refreshed on every mutation.
    pub occupancy_by_color: [u64; 2],
    pub occupancy_all: u64,

    // --- Side and state flags ---
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    // --- FEN clocks (tracked, never interpreted by move generation) ---
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,

            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl GameState {
    /// An empty board with no pieces and default flags.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// The standard opening position: White to move, all four castling
    /// rights, no en-passant target.
    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// The piece occupying `square`, or `None` for an empty square.
    pub fn piece_at(&self, square: Square) -> Option<(Color, PieceKind)> {
        let mask = 1u64 << square;
        for color in [Color::White, Color::Black] {
            for piece in ALL_PIECE_KINDS {
                if (self.pieces[color.index()][piece.index()] & mask) != 0 {
                    return Some((color, piece));
                }
            }
        }
        None
    }

    /// Union of all twelve piece sets.
    #[inline]
    pub fn occupied(&self) -> u64 {
        self.occupancy_all
    }

    /// Pseudo-legal destination mask for the piece on `square`, ignoring
    /// self-check.
    #[inline]
    pub fn moves_for(&self, square: Square) -> ChessResult<u64> {
        moves_for(self, square)
    }

    /// Legal destination mask for the piece on `square`: turn-checked and
    /// filtered against leaving the own king attacked.
    #[inline]
    pub fn legal_moves_for(&self, square: Square) -> ChessResult<u64> {
        legal_moves_for(self, square)
    }

    /// Apply a validated move in place. The state is only overwritten
    /// after the move fully validates, so a rejected move leaves no
    /// partial mutation observable.
    pub fn apply_move(&mut self, from: Square, to: Square) -> ChessResult<()> {
        let next = apply_move(self, from, to)?;
        debug_assert!(next.is_consistent());
        *self = next;
        Ok(())
    }

    /// Apply a move given in two-square notation, for example `"g1 f3"`.
    pub fn apply_move_notation(&mut self, notation: &str) -> ChessResult<()> {
        let (from, to) = parse_move_notation(notation)?;
        self.apply_move(from, to)
    }

    /// Recompute the occupancy caches from the piece bitboards.
    pub fn recalc_occupancy(&mut self) {
        for color in [Color::White, Color::Black] {
            self.occupancy_by_color[color.index()] = self.pieces[color.index()]
                .iter()
                .copied()
                .fold(0u64, |acc, bb| acc | bb);
        }
        self.occupancy_all =
            self.occupancy_by_color[Color::White.index()] | self.occupancy_by_color[Color::Black.index()];
    }

    /// Structural invariant check: one king per side, mutually disjoint
    /// piece sets, accurate occupancy caches, and an en-passant target
    /// (if any) on rank 3 or rank 6.
    pub fn is_consistent(&self) -> bool {
        for color in [Color::White, Color::Black] {
            if self.pieces[color.index()][PieceKind::King.index()].count_ones() != 1 {
                return false;
            }
        }

        let mut seen = 0u64;
        let mut populated = 0u32;
        for color in [Color::White, Color::Black] {
            for piece in ALL_PIECE_KINDS {
                let bb = self.pieces[color.index()][piece.index()];
                seen |= bb;
                populated += bb.count_ones();
            }
        }
        if seen.count_ones() != populated {
            return false;
        }
        if seen != self.occupancy_all {
            return false;
        }

        if let Some(ep) = self.en_passant_square {
            let rank = ep / 8;
            if rank != 2 && rank != 5 {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::utils::algebraic::algebraic_to_square;

    fn piece_on(game: &GameState, square: &str) -> Option<(Color, PieceKind)> {
        let sq = algebraic_to_square(square).expect("test square should parse");
        game.piece_at(sq)
    }

    #[test]
    fn new_game_places_both_kings_on_their_home_squares() {
        let game = GameState::new_game();
        assert_eq!(piece_on(&game, "e1"), Some((Color::White, PieceKind::King)));
        assert_eq!(piece_on(&game, "e8"), Some((Color::Black, PieceKind::King)));
    }

    #[test]
    fn new_game_has_thirty_two_pieces_and_thirty_two_empty_squares() {
        let game = GameState::new_game();
        assert_eq!(game.occupied().count_ones(), 32);
        let empty = (0..64u8).filter(|sq| game.piece_at(*sq).is_none()).count();
        assert_eq!(empty, 32);
    }

    #[test]
    fn new_game_back_ranks_match_the_standard_placement() {
        let game = GameState::new_game();
        let white_back = [
            ("a1", PieceKind::Rook),
            ("b1", PieceKind::Knight),
            ("c1", PieceKind::Bishop),
            ("d1", PieceKind::Queen),
            ("e1", PieceKind::King),
            ("f1", PieceKind::Bishop),
            ("g1", PieceKind::Knight),
            ("h1", PieceKind::Rook),
        ];
        for (square, kind) in white_back {
            assert_eq!(piece_on(&game, square), Some((Color::White, kind)));
        }
        for file in b'a'..=b'h' {
            let pawn = format!("{}2", file as char);
            assert_eq!(piece_on(&game, &pawn), Some((Color::White, PieceKind::Pawn)));
            let enemy_pawn = format!("{}7", file as char);
            assert_eq!(
                piece_on(&game, &enemy_pawn),
                Some((Color::Black, PieceKind::Pawn))
            );
        }
    }

    #[test]
    fn new_game_is_structurally_consistent() {
        let game = GameState::new_game();
        assert!(game.is_consistent());
        assert_eq!(game.side_to_move, Color::White);
        assert_eq!(game.castling_rights, 0b1111);
        assert_eq!(game.en_passant_square, None);
    }

    #[test]
    fn copies_are_independent_values() {
        let mut original = GameState::new_game();
        let snapshot = original.clone();
        original
            .apply_move_notation("e2 e4")
            .expect("e2 e4 should be legal from the start");
        assert_ne!(original.get_fen(), snapshot.get_fen());
        assert_eq!(snapshot.get_fen(), GameState::new_game().get_fen());
    }
}
