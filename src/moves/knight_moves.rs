//! Knight attack masks.
//!
//! Precomputed 64-entry leap table built from the fixed set of eight
//! L-shaped offsets, clipped at the board edge so masks never wrap files.

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KNIGHT_ATTACKS: [u64; 64] = build_knight_attacks();

#[inline]
pub const fn knight_attacks(square: u8) -> u64 {
    KNIGHT_ATTACKS[square as usize]
}

const fn build_knight_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut targets = 0u64;

        let mut i = 0usize;
        while i < KNIGHT_OFFSETS.len() {
            let (d_file, d_rank) = KNIGHT_OFFSETS[i];
            let f = file + d_file;
            let r = rank + d_rank;
            if f >= 0 && f < 8 && r >= 0 && r < 8 {
                targets |= 1u64 << (r * 8 + f);
            }
            i += 1;
        }

        table[sq] = targets;
        sq += 1;
    }

    table
}
