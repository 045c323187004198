//! Perft: legal-move tree node counting.
//!
//! Walks every legal move to a fixed depth and counts leaf nodes. The
//! known node counts for standard positions exercise the whole pipeline
//! (generation, legality filtering, and application) in one number.

use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_unvalidated;
use crate::move_generation::legal_move_generator::all_legal_moves;

pub fn perft(game_state: &GameState, depth: u8) -> ChessResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let mut nodes = 0u64;
    for (from, to) in all_legal_moves(game_state)? {
        let next = apply_unvalidated(game_state, from, to)?;
        nodes += perft(&next, depth - 1)?;
    }

    Ok(nodes)
}
