//! Bishop attack computation.
//!
//! Diagonal ray casting against an occupancy mask, with the same stop and
//! no-wrap rules as the rook rays.

const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub fn bishop_attacks(square: u8, occupancy: u64) -> u64 {
    let mut attacks = 0u64;

    for (file_step, rank_step) in BISHOP_DIRECTIONS {
        let mut file = (square % 8) as i32 + file_step;
        let mut rank = (square / 8) as i32 + rank_step;

        while (0..8).contains(&file) && (0..8).contains(&rank) {
            let bit = 1u64 << (rank * 8 + file);
            attacks |= bit;

            if (occupancy & bit) != 0 {
                break;
            }

            file += file_step;
            rank += rank_step;
        }
    }

    attacks
}
