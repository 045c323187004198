//! FEN-to-GameState decoder.
//!
//! Builds a fully populated board state from a Forsyth-Edwards Notation
//! string: piece bitboards, side to move, castling rights, en-passant
//! target, clocks, and occupancy caches. The clock fields are optional on
//! input (the source design accepted strings ending after the en-passant
//! field) and default to `0` and `1`.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut fields = fen.split_whitespace();

    let placement = fields
        .next()
        .ok_or_else(|| malformed("missing piece placement field"))?;
    let side = fields
        .next()
        .ok_or_else(|| malformed("missing side-to-move field"))?;
    let castling = fields
        .next()
        .ok_or_else(|| malformed("missing castling rights field"))?;
    let en_passant = fields
        .next()
        .ok_or_else(|| malformed("missing en-passant field"))?;
    let halfmove = fields.next();
    let fullmove = fields.next();

    if fields.next().is_some() {
        return Err(malformed("trailing fields after fullmove number"));
    }

    let mut game_state = GameState::new_empty();

    parse_placement(placement, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side)?;
    game_state.castling_rights = parse_castling_rights(castling)?;
    game_state.en_passant_square = parse_en_passant(en_passant)?;
    game_state.halfmove_clock = parse_clock(halfmove, "halfmove clock", 0)?;
    game_state.fullmove_number = parse_clock(fullmove, "fullmove number", 1)?;

    game_state.recalc_occupancy();

    for color in [Color::White, Color::Black] {
        if game_state.pieces[color.index()][PieceKind::King.index()].count_ones() != 1 {
            return Err(malformed("each side must have exactly one king"));
        }
    }

    Ok(game_state)
}

fn malformed(what: &str) -> ChessErrors {
    ChessErrors::MalformedInterchangeText(what.to_owned())
}

fn parse_placement(placement: &str, game_state: &mut GameState) -> ChessResult<()> {
    let mut rank: i32 = 7;
    let mut file: i32 = 0;

    for ch in placement.chars() {
        match ch {
            '/' => {
                if file != 8 {
                    return Err(malformed("placement rank does not sum to 8 files"));
                }
                rank -= 1;
                file = 0;
                if rank < 0 {
                    return Err(malformed("placement has more than 8 ranks"));
                }
            }
            '1'..='8' => {
                file += (ch as u8 - b'0') as i32;
                if file > 8 {
                    return Err(malformed("placement rank overruns 8 files"));
                }
            }
            _ => {
                let (color, piece) = piece_from_fen_char(ch).ok_or_else(|| {
                    ChessErrors::MalformedInterchangeText(format!(
                        "unrecognized placement character '{ch}'"
                    ))
                })?;
                if file >= 8 {
                    return Err(malformed("placement rank overruns 8 files"));
                }
                let square = (rank * 8 + file) as u8;
                game_state.pieces[color.index()][piece.index()] |= 1u64 << square;
                file += 1;
            }
        }
    }

    if rank != 0 || file != 8 {
        return Err(malformed("placement must describe exactly 8 ranks of 8 files"));
    }

    Ok(())
}

fn parse_side_to_move(side: &str) -> ChessResult<Color> {
    match side {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessErrors::MalformedInterchangeText(format!(
            "unrecognized side-to-move field '{side}'"
        ))),
    }
}

fn parse_castling_rights(castling: &str) -> ChessResult<CastlingRights> {
    if castling == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => {
                return Err(ChessErrors::MalformedInterchangeText(format!(
                    "unrecognized castling rights character '{ch}'"
                )))
            }
        }
    }

    Ok(rights)
}

fn parse_en_passant(en_passant: &str) -> ChessResult<Option<Square>> {
    if en_passant == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant).map_err(|_| {
        ChessErrors::MalformedInterchangeText(format!(
            "unrecognized en-passant field '{en_passant}'"
        ))
    })?;

    // The skipped square of a double step is always on rank 3 or rank 6.
    let rank = square / 8;
    if rank != 2 && rank != 5 {
        return Err(ChessErrors::MalformedInterchangeText(format!(
            "en-passant square '{en_passant}' is not on rank 3 or 6"
        )));
    }

    Ok(Some(square))
}

fn parse_clock(field: Option<&str>, name: &str, default: u16) -> ChessResult<u16> {
    let Some(text) = field else {
        return Ok(default);
    };
    text.parse::<u16>().map_err(|_| {
        ChessErrors::MalformedInterchangeText(format!("invalid {name} '{text}'"))
    })
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let piece = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, piece))
}
