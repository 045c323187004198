//! Pawn capture masks.
//!
//! Precomputed diagonal-capture tables per color. Forward pushes depend on
//! occupancy and therefore live in the pseudo-legal generator; these masks
//! cover only the capturing squares, which makes them reusable for attack
//! detection from either side's point of view.

use crate::game_state::chess_types::Color;

pub const WHITE_PAWN_ATTACKS: [u64; 64] = build_pawn_attacks(1);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = build_pawn_attacks(-1);

#[inline]
pub const fn pawn_attacks(color: Color, square: u8) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

const fn build_pawn_attacks(forward: i32) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut targets = 0u64;

        let capture_rank = rank + forward;
        if capture_rank >= 0 && capture_rank < 8 {
            if file > 0 {
                targets |= 1u64 << (capture_rank * 8 + file - 1);
            }
            if file < 7 {
                targets |= 1u64 << (capture_rank * 8 + file + 1);
            }
        }

        table[sq] = targets;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{pawn_attacks, BLACK_PAWN_ATTACKS, WHITE_PAWN_ATTACKS};
    use crate::game_state::chess_types::Color;

    #[test]
    fn white_pawn_attacks_from_e2() {
        let e2 = 12u8;
        let expected = (1u64 << 19) | (1u64 << 21); // d3 and f3
        assert_eq!(WHITE_PAWN_ATTACKS[e2 as usize], expected);
        assert_eq!(pawn_attacks(Color::White, e2), expected);
    }

    #[test]
    fn black_pawn_attacks_from_e7() {
        let e7 = 52u8;
        let expected = (1u64 << 43) | (1u64 << 45); // d6 and f6
        assert_eq!(BLACK_PAWN_ATTACKS[e7 as usize], expected);
        assert_eq!(pawn_attacks(Color::Black, e7), expected);
    }

    #[test]
    fn edge_file_pawns_attack_a_single_square() {
        let a2 = 8u8;
        assert_eq!(pawn_attacks(Color::White, a2), 1u64 << 17); // b3 only
        let h7 = 55u8;
        assert_eq!(pawn_attacks(Color::Black, h7), 1u64 << 46); // g6 only
    }
}
