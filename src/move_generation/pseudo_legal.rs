//! Pseudo-legal move generation.
//!
//! Computes the destination bitmask for the piece on a given square,
//! obeying piece-movement rules but ignoring whether the move would leave
//! the mover's own king in check. Dispatch is an exhaustive match over the
//! closed `PieceKind` set.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;
use crate::utils::algebraic::rank_of;

/// Candidate destination squares for the piece on `square`, ignoring
/// self-check. Fails with `InvalidArgument` if `square` is out of range or
/// empty.
pub fn moves_for(game_state: &GameState, square: Square) -> ChessResult<u64> {
    if square > 63 {
        return Err(ChessErrors::InvalidArgument(format!(
            "square index {square} exceeds 63"
        )));
    }

    let Some((color, piece)) = game_state.piece_at(square) else {
        return Err(ChessErrors::InvalidArgument(format!(
            "no piece on square {square}"
        )));
    };

    let own_occ = game_state.occupancy_by_color[color.index()];
    let occupancy = game_state.occupancy_all;

    let destinations = match piece {
        PieceKind::Pawn => pawn_destinations(game_state, color, square),
        PieceKind::Knight => knight_attacks(square) & !own_occ,
        PieceKind::Bishop => bishop_attacks(square, occupancy) & !own_occ,
        PieceKind::Rook => rook_attacks(square, occupancy) & !own_occ,
        PieceKind::Queen => queen_attacks(square, occupancy) & !own_occ,
        PieceKind::King => {
            (king_attacks(square) & !own_occ) | castling_destinations(game_state, color, square)
        }
    };

    Ok(destinations)
}

fn pawn_destinations(game_state: &GameState, color: Color, from: Square) -> u64 {
    let empty = !game_state.occupancy_all;
    let enemy_occ = game_state.occupancy_by_color[color.opposite().index()];

    let (forward, home_rank): (i8, u8) = match color {
        Color::White => (8, 1),
        Color::Black => (-8, 6),
    };

    let mut destinations = 0u64;

    let one_step = from as i8 + forward;
    if (0..64).contains(&one_step) {
        let one_mask = 1u64 << one_step;
        if (one_mask & empty) != 0 {
            destinations |= one_mask;

            // Double step: only from the home rank, through an empty
            // intermediate, onto an empty destination.
            if rank_of(from) == home_rank {
                let two_mask = 1u64 << (from as i8 + 2 * forward);
                if (two_mask & empty) != 0 {
                    destinations |= two_mask;
                }
            }
        }
    }

    // Diagonal captures, with the en-passant target treated as if an
    // enemy pawn stood on it.
    let en_passant_mask = game_state
        .en_passant_square
        .map_or(0u64, |sq| 1u64 << sq);
    destinations |= pawn_attacks(color, from) & (enemy_occ | en_passant_mask);

    destinations
}

/// Castling destinations two squares toward the rook: requires the right
/// to still be held, the squares between king and rook empty, and the
/// king not currently in check. Whether the king would pass through an
/// attacked square is the legality filter's concern.
fn castling_destinations(game_state: &GameState, color: Color, from: Square) -> u64 {
    let rights = game_state.castling_rights;
    let occupancy = game_state.occupancy_all;
    let enemy = color.opposite();

    let (home, kingside_right, queenside_right, kingside_between, queenside_between) = match color {
        Color::White => (
            WHITE_KING_HOME,
            CASTLE_WHITE_KINGSIDE,
            CASTLE_WHITE_QUEENSIDE,
            WHITE_KINGSIDE_BETWEEN,
            WHITE_QUEENSIDE_BETWEEN,
        ),
        Color::Black => (
            BLACK_KING_HOME,
            CASTLE_BLACK_KINGSIDE,
            CASTLE_BLACK_QUEENSIDE,
            BLACK_KINGSIDE_BETWEEN,
            BLACK_QUEENSIDE_BETWEEN,
        ),
    };

    if from != home || (rights & (kingside_right | queenside_right)) == 0 {
        return 0;
    }

    // Castling out of check is never available.
    if is_square_attacked(game_state, from, enemy) {
        return 0;
    }

    let mut destinations = 0u64;
    if (rights & kingside_right) != 0 && (occupancy & kingside_between) == 0 {
        destinations |= 1u64 << (home + 2);
    }
    if (rights & queenside_right) != 0 && (occupancy & queenside_between) == 0 {
        destinations |= 1u64 << (home - 2);
    }
    destinations
}
