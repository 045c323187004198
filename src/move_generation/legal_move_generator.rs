//! Legality filtering.
//!
//! Narrows pseudo-legal destination masks by turn ownership and king
//! safety: each candidate is applied to a scratch copy and discarded if
//! the mover's own king ends up attacked. Castling additionally requires
//! the square the king passes through to be safe, which a plain
//! destination simulation cannot see.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_unvalidated;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::pseudo_legal::moves_for;

/// Legal destination mask for the piece on `square`. Fails with
/// `InvalidArgument` for an empty or out-of-range square and with
/// `WrongTurn` when the piece does not belong to the side to move.
pub fn legal_moves_for(game_state: &GameState, square: Square) -> ChessResult<u64> {
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

    if color != game_state.side_to_move {
        return Err(ChessErrors::WrongTurn(color));
    }

    let pseudo = moves_for(game_state, square)?;
    let mut legal = 0u64;

    let mut remaining = pseudo;
    while remaining != 0 {
        let to = remaining.trailing_zeros() as Square;
        remaining &= remaining - 1;

        // A castling king may not pass through an attacked square. The
        // simulation below only sees the landing square.
        if piece == PieceKind::King && square.abs_diff(to) == 2 {
            let transit = ((square as u16 + to as u16) / 2) as Square;
            if is_square_attacked(game_state, transit, color.opposite()) {
                continue;
            }
        }

        let next = apply_unvalidated(game_state, square, to)?;
        if !is_king_in_check(&next, color) {
            legal |= 1u64 << to;
        }
    }

    Ok(legal)
}

/// Every legal `(from, to)` pair for the side to move.
pub fn all_legal_moves(game_state: &GameState) -> ChessResult<Vec<(Square, Square)>> {
    let mut moves = Vec::new();

    let mut own = game_state.occupancy_by_color[game_state.side_to_move.index()];
    while own != 0 {
        let from = own.trailing_zeros() as Square;
        own &= own - 1;

        let mut destinations = legal_moves_for(game_state, from)?;
        while destinations != 0 {
            let to = destinations.trailing_zeros() as Square;
            destinations &= destinations - 1;
            moves.push((from, to));
        }
    }

    Ok(moves)
}

pub fn has_any_legal_move(game_state: &GameState) -> ChessResult<bool> {
    let mut own = game_state.occupancy_by_color[game_state.side_to_move.index()];
    while own != 0 {
        let from = own.trailing_zeros() as Square;
        own &= own - 1;
        if legal_moves_for(game_state, from)? != 0 {
            return Ok(true);
        }
    }
    Ok(false)
}

/// The side to move is in check and has no legal reply.
pub fn is_checkmate(game_state: &GameState) -> ChessResult<bool> {
    Ok(is_king_in_check(game_state, game_state.side_to_move)
        && !has_any_legal_move(game_state)?)
}

/// The side to move is not in check but has no legal reply.
pub fn is_stalemate(game_state: &GameState) -> ChessResult<bool> {
    Ok(!is_king_in_check(game_state, game_state.side_to_move)
        && !has_any_legal_move(game_state)?)
}

#[cfg(test)]
mod tests {
    use super::{all_legal_moves, is_checkmate, is_stalemate, legal_moves_for};
    use crate::errors::ChessErrors;
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::{algebraic_to_bitboard, algebraic_to_square};

    fn square(notation: &str) -> u8 {
        algebraic_to_square(notation).expect("test square should parse")
    }

    fn bit(notation: &str) -> u64 {
        algebraic_to_bitboard(notation).expect("test square should parse")
    }

    #[test]
    fn starting_position_has_twenty_legal_moves() {
        let game = GameState::new_game();
        let moves = all_legal_moves(&game).expect("startpos should generate");
        assert_eq!(moves.len(), 20);
    }

    #[test]
    fn querying_the_wrong_side_fails_with_wrong_turn() {
        let game = GameState::new_game();
        assert!(matches!(
            legal_moves_for(&game, square("e7")),
            Err(ChessErrors::WrongTurn(Color::Black))
        ));

        let mut black_to_move = game.clone();
        black_to_move
            .apply_move_notation("e2 e4")
            .expect("e2 e4 should be legal");
        assert!(matches!(
            legal_moves_for(&black_to_move, square("d2")),
            Err(ChessErrors::WrongTurn(Color::White))
        ));
    }

    #[test]
    fn a_pinned_piece_may_not_expose_its_king() {
        // The d2 knight is pinned along the d-file: rook d8, king d1.
        let game = GameState::from_fen("3r3k/8/8/8/8/8/3N4/3K4 w - - 0 1")
            .expect("pin FEN should parse");
        assert_eq!(
            legal_moves_for(&game, square("d2")).expect("pinned knight should generate"),
            0
        );
    }

    #[test]
    fn the_king_may_not_step_into_an_attacked_square() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/r7/4K3 w - - 0 1")
            .expect("cut-off FEN should parse");
        let moves = legal_moves_for(&game, square("e1")).expect("king should generate");
        assert_eq!(moves & (bit("d2") | bit("e2") | bit("f2")), 0);
        assert_eq!(moves, bit("d1") | bit("f1"));
    }

    #[test]
    fn in_check_only_resolving_moves_remain() {
        let game = GameState::from_fen("4k3/8/8/8/4r3/8/3P4/4K3 w - - 0 1")
            .expect("check FEN should parse");
        // The d2 pawn's only legal contribution is nothing: pushing does
        // not block the e-file. The king must move off the file.
        assert_eq!(
            legal_moves_for(&game, square("d2")).expect("pawn should generate"),
            0
        );
        let king_moves = legal_moves_for(&game, square("e1")).expect("king should generate");
        assert_eq!(king_moves & bit("e2"), 0, "e2 stays on the attacked file");
        assert_ne!(king_moves & bit("d1"), 0);
    }

    #[test]
    fn castling_is_illegal_through_an_attacked_transit_square() {
        // Black's rook eyes f1: castling kingside would march the king
        // through check, while queenside stays legal.
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("castling FEN should parse");
        let open = legal_moves_for(&game, square("e1")).expect("king should generate");
        assert_ne!(open & bit("g1"), 0);
        assert_ne!(open & bit("c1"), 0);

        let guarded = GameState::from_fen("r3kr2/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("guarded-f-file FEN should parse");
        let moves = legal_moves_for(&guarded, square("e1")).expect("king should generate");
        assert_eq!(moves & bit("g1"), 0, "f1 transit is attacked");
        assert_ne!(moves & bit("c1"), 0, "queenside unaffected");
    }

    #[test]
    fn castling_requires_empty_squares_even_with_rights() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3KB1R w KQkq - 0 1")
            .expect("blocked-castle FEN should parse");
        let moves = legal_moves_for(&game, square("e1")).expect("king should generate");
        assert_eq!(moves & bit("g1"), 0, "f1 bishop blocks the castle");
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut game = GameState::new_game();
        for mv in ["f2 f3", "e7 e5", "g2 g4", "d8 h4"] {
            game.apply_move_notation(mv).expect("fool's mate line should be legal");
        }
        assert!(is_checkmate(&game).expect("checkmate query should succeed"));
        assert!(!is_stalemate(&game).expect("stalemate query should succeed"));
    }

    #[test]
    fn a_cornered_king_with_no_moves_is_stalemate() {
        let game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1")
            .expect("stalemate FEN should parse");
        assert!(is_stalemate(&game).expect("stalemate query should succeed"));
        assert!(!is_checkmate(&game).expect("checkmate query should succeed"));
    }
}
