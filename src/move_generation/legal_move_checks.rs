//! Check and attack detection.
//!
//! Answers "is this square attacked by that color" with symmetric attack
//! lookups: a pawn on `square` of the defender's color would attack
//! exactly the squares enemy pawns attack it from, and likewise for every
//! other piece class, so each class needs one mask intersection rather
//! than a per-attacker scan.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    let kings = game_state.pieces[color.index()][PieceKind::King.index()];
    if kings == 0 {
        None
    } else {
        Some(kings.trailing_zeros() as Square)
    }
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let attackers = &game_state.pieces[attacker_color.index()];

    // A defender-colored pawn on `square` would capture exactly where
    // attacking pawns stand.
    let pawns = attackers[PieceKind::Pawn.index()];
    if pawn_attacks(attacker_color.opposite(), square) & pawns != 0 {
        return true;
    }

    if knight_attacks(square) & attackers[PieceKind::Knight.index()] != 0 {
        return true;
    }

    if king_attacks(square) & attackers[PieceKind::King.index()] != 0 {
        return true;
    }

    let diagonal_sliders =
        attackers[PieceKind::Bishop.index()] | attackers[PieceKind::Queen.index()];
    if bishop_attacks(square, game_state.occupancy_all) & diagonal_sliders != 0 {
        return true;
    }

    let orthogonal_sliders =
        attackers[PieceKind::Rook.index()] | attackers[PieceKind::Queen.index()];
    if rook_attacks(square, game_state.occupancy_all) & orthogonal_sliders != 0 {
        return true;
    }

    false
}
