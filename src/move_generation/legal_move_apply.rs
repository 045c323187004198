//! Move application.
//!
//! Builds the successor state for a `(from, to)` square pair on a scratch
//! copy: capture removal (including the en-passant victim), piece
//! relocation, auto-queen promotion, castling rook relocation,
//! castling-rights maintenance, the en-passant window, clock updates, and
//! the side flip. The validated entry point rejects anything outside the
//! legal-move set before any state is touched, so callers that overwrite
//! their state with the result observe the move atomically.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::legal_moves_for;
use crate::utils::algebraic::{file_of, rank_of};

/// Apply a move after validating it against the legal-move set of the
/// piece on `from`. Fails with `IllegalMove` if `to` is not a member.
pub fn apply_move(game_state: &GameState, from: Square, to: Square) -> ChessResult<GameState> {
    let legal = legal_moves_for(game_state, from)?;

    if to > 63 || (legal & (1u64 << to)) == 0 {
        return Err(ChessErrors::IllegalMove { from, to });
    }

    apply_unvalidated(game_state, from, to)
}

/// Apply a move assumed to come from a pseudo-legal destination mask.
/// Used by the legality filter's scratch-copy simulation and by perft,
/// where the validation has already happened.
pub(crate) fn apply_unvalidated(
    game_state: &GameState,
    from: Square,
    to: Square,
) -> ChessResult<GameState> {
    let (color, piece) = game_state.piece_at(from).ok_or_else(|| {
        ChessErrors::InvalidArgument(format!("no piece on from-square {from}"))
    })?;
    let enemy = color.opposite();
    let from_mask = 1u64 << from;
    let to_mask = 1u64 << to;

    let mut next = game_state.clone();

    // Lift the moving piece off its origin.
    next.pieces[color.index()][piece.index()] &= !from_mask;

    // Captures. A pawn landing diagonally on the en-passant target takes
    // the pawn behind the target square; every other capture sits on the
    // destination itself.
    let is_pawn = piece == PieceKind::Pawn;
    let en_passant_capture = is_pawn
        && game_state.en_passant_square == Some(to)
        && file_of(from) != file_of(to);
    let plain_capture = (game_state.occupancy_by_color[enemy.index()] & to_mask) != 0;

    if en_passant_capture {
        let victim = match color {
            Color::White => to - 8,
            Color::Black => to + 8,
        };
        next.pieces[enemy.index()][PieceKind::Pawn.index()] &= !(1u64 << victim);
    } else if plain_capture {
        for kind in ALL_PIECE_KINDS {
            next.pieces[enemy.index()][kind.index()] &= !to_mask;
        }
    }

    // Place the piece, promoting a pawn that reaches the last rank to a
    // queen (apply_move carries no promotion choice).
    let last_rank = match color {
        Color::White => 7,
        Color::Black => 0,
    };
    if is_pawn && rank_of(to) == last_rank {
        next.pieces[color.index()][PieceKind::Queen.index()] |= to_mask;
    } else {
        next.pieces[color.index()][piece.index()] |= to_mask;
    }

    // A castling king drags its rook across.
    if piece == PieceKind::King {
        match (color, from, to) {
            (Color::White, WHITE_KING_HOME, 6) => {
                relocate_rook(&mut next, color, WHITE_KINGSIDE_ROOK_HOME, 5)
            }
            (Color::White, WHITE_KING_HOME, 2) => {
                relocate_rook(&mut next, color, WHITE_QUEENSIDE_ROOK_HOME, 3)
            }
            (Color::Black, BLACK_KING_HOME, 62) => {
                relocate_rook(&mut next, color, BLACK_KINGSIDE_ROOK_HOME, 61)
            }
            (Color::Black, BLACK_KING_HOME, 58) => {
                relocate_rook(&mut next, color, BLACK_QUEENSIDE_ROOK_HOME, 59)
            }
            _ => {}
        }
    }

    update_castling_rights(&mut next, color, from, to, piece);

    // The en-passant window lasts exactly one move: set it on a double
    // step, clear it otherwise.
    next.en_passant_square = if is_pawn && (from as i8 - to as i8).abs() == 16 {
        Some(((from as u16 + to as u16) / 2) as Square)
    } else {
        None
    };

    if is_pawn || en_passant_capture || plain_capture {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if color == Color::Black {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.side_to_move = enemy;
    next.recalc_occupancy();

    Ok(next)
}

fn relocate_rook(game_state: &mut GameState, color: Color, from: Square, to: Square) {
    let rooks = &mut game_state.pieces[color.index()][PieceKind::Rook.index()];
    *rooks &= !(1u64 << from);
    *rooks |= 1u64 << to;
}

fn update_castling_rights(
    game_state: &mut GameState,
    color: Color,
    from: Square,
    to: Square,
    piece: PieceKind,
) {
    if piece == PieceKind::King {
        let both = match color {
            Color::White => CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
            Color::Black => CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
        };
        game_state.castling_rights &= !both;
    }

    if piece == PieceKind::Rook {
        clear_right_for_home_square(game_state, from);
    }

    // Capturing a rook on its home square also removes the right.
    clear_right_for_home_square(game_state, to);
}

fn clear_right_for_home_square(game_state: &mut GameState, square: Square) {
    let cleared = match square {
        WHITE_QUEENSIDE_ROOK_HOME => CASTLE_WHITE_QUEENSIDE,
        WHITE_KINGSIDE_ROOK_HOME => CASTLE_WHITE_KINGSIDE,
        BLACK_QUEENSIDE_ROOK_HOME => CASTLE_BLACK_QUEENSIDE,
        BLACK_KINGSIDE_ROOK_HOME => CASTLE_BLACK_KINGSIDE,
        _ => return,
    };
    game_state.castling_rights &= !cleared;
}
