//! Crate root module declarations for the Quince Chess board engine.
//!
//! This file exposes the top-level subsystems (game state, attack masks,
//! move generation, and text utilities) so tests, benches, and external
//! front ends can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_suggestion;
    pub mod perft;
    pub mod pseudo_legal;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod move_notation;
    pub mod render_game_state;
}
