//! Errors used throughout the board engine.
//!
//! This module defines the canonical error type returned by square
//! addressing, the FEN codec, move generation, and move application. The
//! enum `ChessErrors` is used as the single error type across the crate to
//! simplify propagation and matching. Each variant carries contextual
//! information where appropriate to aid diagnostics.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, Square};

pub type ChessResult<T> = Result<T, ChessErrors>;

/// Unified error type for the board engine.
///
/// All validation happens at the public operation boundaries (`moves_for`,
/// `legal_moves_for`, `apply_move`, the codec, and the addressing helpers);
/// once inputs are validated, internal computation cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A square given in algebraic notation did not match `[a-h][1-8]`.
    ///
    /// Payload: the offending text.
    InvalidNotation(String),

    /// A rank, file, or square index fell outside the board bounds.
    ///
    /// Payload: a description of the offending value.
    OutOfRange(String),

    /// A comparison or generation helper received malformed or
    /// out-of-board input.
    ///
    /// Payload: a description of the offending argument.
    InvalidArgument(String),

    /// A move query or move was attempted for the side not currently to
    /// move.
    ///
    /// Payload: the color that tried to act.
    WrongTurn(Color),

    /// The requested destination is not in the legal-move set for the
    /// piece on the origin square.
    IllegalMove { from: Square, to: Square },

    /// A FEN string violated the field grammar (bad placement rank sums,
    /// unknown characters, missing fields, and similar).
    ///
    /// Payload: a description of the violation.
    MalformedInterchangeText(String),

    /// Internal piece dispatch fell through to an unknown kind code.
    ///
    /// With the closed `PieceKind` set no code path constructs this; it is
    /// reserved so dispatch fallthrough stays distinguishable.
    UnknownPieceKind(u8),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidNotation(text) => {
                write!(f, "invalid square notation: {text}")
            }
            ChessErrors::OutOfRange(what) => write!(f, "out of board range: {what}"),
            ChessErrors::InvalidArgument(what) => write!(f, "invalid argument: {what}"),
            ChessErrors::WrongTurn(color) => {
                write!(f, "it is not {color:?}'s turn to move")
            }
            ChessErrors::IllegalMove { from, to } => {
                write!(f, "illegal move from square {from} to square {to}")
            }
            ChessErrors::MalformedInterchangeText(what) => {
                write!(f, "malformed FEN: {what}")
            }
            ChessErrors::UnknownPieceKind(code) => {
                write!(f, "unknown piece kind code {code}")
            }
        }
    }
}

impl Error for ChessErrors {}
