//! GameState-to-FEN encoder.
//!
//! Emits the six space-separated fields exactly: piece placement with
//! empty-square runs collapsed, side to move, castling rights in fixed
//! `KQkq` order (`-` when none remain), en-passant target in algebraic
//! notation (`-` when absent), and the two clocks. `encode(decode(s))`
//! reproduces `s` byte for byte for any `s` this encoder produced.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::square_to_algebraic;

const CASTLING_FIELD_ORDER: [(CastlingRights, char); 4] = [
    (CASTLE_WHITE_KINGSIDE, 'K'),
    (CASTLE_WHITE_QUEENSIDE, 'Q'),
    (CASTLE_BLACK_KINGSIDE, 'k'),
    (CASTLE_BLACK_QUEENSIDE, 'q'),
];

pub fn generate_fen(game_state: &GameState) -> String {
    format!(
        "{} {} {} {} {} {}",
        placement_field(game_state),
        match game_state.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        },
        castling_field(game_state.castling_rights),
        en_passant_field(game_state.en_passant_square),
        game_state.halfmove_clock,
        game_state.fullmove_number
    )
}

fn placement_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_run = 0u8;

        for file in 0..8u8 {
            let square = rank * 8 + file;
            match game_state.piece_at(square) {
                Some((color, piece)) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(fen_char(color, piece));
                }
                None => empty_run += 1,
            }
        }

        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn fen_char(color: Color, piece: PieceKind) -> char {
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

fn castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();
    for (flag, ch) in CASTLING_FIELD_ORDER {
        if (rights & flag) != 0 {
            out.push(ch);
        }
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}

fn en_passant_field(square: Option<Square>) -> String {
    match square.and_then(|sq| square_to_algebraic(sq).ok()) {
        Some(notation) => notation,
        None => "-".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::game_state::GameState;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn round_trip_starting_position_fen() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(generate_fen(&parsed), STARTING_POSITION_FEN);
    }

    #[test]
    fn round_trip_is_stable_across_reencoding() {
        let game = GameState::new_game();
        let once = game.get_fen();
        let twice = GameState::from_fen(&once)
            .expect("encoded FEN should decode")
            .get_fen();
        assert_eq!(once, twice);
    }

    #[test]
    fn round_trip_custom_position_with_partial_rights() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6";
        let parsed = parse_fen(fen).expect("custom FEN should parse");
        assert_eq!(generate_fen(&parsed), fen);
    }

    #[test]
    fn en_passant_target_is_emitted_in_algebraic_notation() {
        let fen = "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2";
        let parsed = parse_fen(fen).expect("FEN with en-passant target should parse");
        assert_eq!(generate_fen(&parsed), fen);
    }

    #[test]
    fn exhausted_rights_collapse_to_a_dash() {
        let fen = "rnbq1bnr/ppppkppp/8/4p3/4P3/8/PPPPKPPP/RNBQ1BNR w - - 2 3";
        let parsed = parse_fen(fen).expect("rights-free FEN should parse");
        assert_eq!(generate_fen(&parsed), fen);
    }

    #[test]
    fn clockless_input_reencodes_with_default_clocks() {
        let parsed = parse_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3")
            .expect("clockless FEN should parse");
        assert_eq!(
            generate_fen(&parsed),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
    }
}
