//! Two-square move notation, for example `"g1 g3"`.
//!
//! The external move format is a start square and an end square separated
//! by a single space, each in algebraic notation. It is decoupled from the
//! engine's internal square indices; this module is the only place that
//! translates between the two.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Square;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Parse `"e2 e4"` into a `(from, to)` square pair.
pub fn parse_move_notation(notation: &str) -> ChessResult<(Square, Square)> {
    let mut tokens = notation.split(' ');

    let from_token = tokens
        .next()
        .ok_or_else(|| ChessErrors::InvalidNotation(notation.to_owned()))?;
    let to_token = tokens
        .next()
        .ok_or_else(|| ChessErrors::InvalidNotation(notation.to_owned()))?;
    if tokens.next().is_some() {
        return Err(ChessErrors::InvalidNotation(notation.to_owned()));
    }

    let from = algebraic_to_square(from_token)?;
    let to = algebraic_to_square(to_token)?;
    Ok((from, to))
}

/// Format a `(from, to)` square pair back to `"e2 e4"` notation.
pub fn format_move_notation(from: Square, to: Square) -> ChessResult<String> {
    Ok(format!(
        "{} {}",
        square_to_algebraic(from)?,
        square_to_algebraic(to)?
    ))
}
