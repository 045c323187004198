//! King attack masks.
//!
//! Precomputed 64-entry table of the up-to-eight adjacent squares.
//! Castling destinations are not part of these masks; they are attached by
//! the pseudo-legal generator, which knows rights and occupancy.

const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub const KING_ATTACKS: [u64; 64] = build_king_attacks();

#[inline]
pub const fn king_attacks(square: u8) -> u64 {
    KING_ATTACKS[square as usize]
}

const fn build_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut targets = 0u64;

        let mut i = 0usize;
        while i < KING_OFFSETS.len() {
            let (d_file, d_rank) = KING_OFFSETS[i];
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
