//! Uniform random move suggestion.
//!
//! Picks a legal move at random for the side to move. Primarily useful
//! for diagnostics, integration testing, and low-strength gameplay.

use rand::prelude::IndexedRandom;

use crate::errors::ChessResult;
use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::all_legal_moves;

/// Returns a uniformly random legal move, or `None` when the side to
/// move has no legal moves (checkmate or stalemate).
pub fn suggest_move(game_state: &GameState) -> ChessResult<Option<(Square, Square)>> {
    let legal_moves = all_legal_moves(game_state)?;
    if legal_moves.is_empty() {
        return Ok(None);
    }

    let mut rng = rand::rng();
    Ok(legal_moves.as_slice().choose(&mut rng).copied())
}
