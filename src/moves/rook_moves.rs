//! Rook attack computation.
//!
//! Orthogonal ray casting against an occupancy mask. A ray extends square
//! by square until it leaves the board or hits a piece; the first occupied
//! square is included so callers can distinguish captures by masking with
//! the opponent's occupancy. File/rank stepping cannot wrap board edges.

const ROOK_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub fn rook_attacks(square: u8, occupancy: u64) -> u64 {
    let mut attacks = 0u64;

    for (file_step, rank_step) in ROOK_DIRECTIONS {
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
