//! Plain-text board renderer.
//!
//! Produces the diagnostic 8x8 view consumed by text front ends: one
//! character per square, rank 8 first, each rank newline-terminated.
//! White pieces are uppercase letters, black pieces lowercase, and empty
//! squares alternate between `'X'` and `' '` to show the board shading.

use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_state::GameState;

pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::with_capacity(72);

    for rank in (0..8u8).rev() {
        for file in 0..8u8 {
            let square = rank * 8 + file;
            let glyph = match game_state.piece_at(square) {
                Some((color, piece)) => piece_letter(color, piece),
                None => {
                    if (rank + file) % 2 == 1 {
                        'X'
                    } else {
                        ' '
                    }
                }
            };
            out.push(glyph);
        }
        out.push('\n');
    }

    out
}

fn piece_letter(color: Color, piece: PieceKind) -> char {
    let lower = match piece {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match color {
        Color::White => lower.to_ascii_uppercase(),
        Color::Black => lower,
    }
}
