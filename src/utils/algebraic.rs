//! Square addressing: algebraic coordinates, masks, and comparisons.
//!
//! Converts between human-readable coordinates (e.g. `e4`) and the
//! internal square/bitboard representations, produces whole-rank and
//! whole-file masks, and offers the signed rank/file distance helpers the
//! move generators use to test alignment without re-parsing. All functions
//! are pure.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Square;

const FILE_A_MASK: u64 = 0x0101_0101_0101_0101;
const RANK_1_MASK: u64 = 0xFF;

/// Convert algebraic notation (for example "e4") to a square index.
#[inline]
pub fn algebraic_to_square(notation: &str) -> ChessResult<Square> {
    let bytes = notation.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidNotation(notation.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidNotation(notation.to_owned()));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// Convert algebraic notation to a one-hot bitboard.
#[inline]
pub fn algebraic_to_bitboard(notation: &str) -> ChessResult<u64> {
    let square = algebraic_to_square(notation)?;
    Ok(1u64 << square)
}

/// Convert a square index (`0..=63`) back to algebraic notation.
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if square > 63 {
        return Err(ChessErrors::OutOfRange(format!(
            "square index {square} exceeds 63"
        )));
    }

    let file_char = char::from(b'a' + file_of(square));
    let rank_char = char::from(b'1' + rank_of(square));
    Ok(format!("{file_char}{rank_char}"))
}

/// Convert a one-hot bitboard back to algebraic notation.
#[inline]
pub fn bitboard_to_algebraic(bitboard: u64) -> ChessResult<String> {
    if bitboard.count_ones() != 1 {
        return Err(ChessErrors::InvalidArgument(format!(
            "bitboard must contain exactly one set bit, got {}",
            bitboard.count_ones()
        )));
    }

    square_to_algebraic(bitboard.trailing_zeros() as Square)
}

/// Zero-based rank (row) of a square index.
#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}

/// Zero-based file (column) of a square index.
#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

/// Mask of all eight squares on a rank, taking the one-based rank number
/// (`1..=8`) retained from the source design.
#[inline]
pub fn rank_mask(rank: u8) -> ChessResult<u64> {
    if !(1..=8).contains(&rank) {
        return Err(ChessErrors::OutOfRange(format!("rank {rank} outside 1..=8")));
    }
    Ok(RANK_1_MASK << ((rank - 1) * 8))
}

/// Mask of all eight squares on a file, addressed by letter (`'a'..='h'`).
#[inline]
pub fn file_mask(file: char) -> ChessResult<u64> {
    if !('a'..='h').contains(&file) {
        return Err(ChessErrors::OutOfRange(format!(
            "file '{file}' outside 'a'..='h'"
        )));
    }
    file_mask_from_index(file as u8 - b'a' + 1)
}

/// Mask of all eight squares on a file, addressed by one-based index
/// (`1..=8`), the second call convention retained from the source design.
#[inline]
pub fn file_mask_from_index(file: u8) -> ChessResult<u64> {
    if !(1..=8).contains(&file) {
        return Err(ChessErrors::OutOfRange(format!("file {file} outside 1..=8")));
    }
    Ok(FILE_A_MASK << (file - 1))
}

/// Signed rank distance between a position and a one-based target rank:
/// positive when the position sits above the target.
pub fn compare_rank(position: &str, target_rank: u8) -> ChessResult<i8> {
    if !(1..=8).contains(&target_rank) {
        return Err(ChessErrors::InvalidArgument(format!(
            "target rank {target_rank} outside 1..=8"
        )));
    }

    let square = algebraic_to_square(position)
        .map_err(|_| ChessErrors::InvalidArgument(format!("invalid position '{position}'")))?;
    Ok((rank_of(square) + 1) as i8 - target_rank as i8)
}

/// `compare_rank` with the target given as text, for example "4".
pub fn compare_rank_text(position: &str, target_rank: &str) -> ChessResult<i8> {
    let digit = target_rank
        .bytes()
        .next()
        .ok_or_else(|| ChessErrors::InvalidArgument("empty target rank".to_owned()))?;
    if !digit.is_ascii_digit() {
        return Err(ChessErrors::InvalidArgument(format!(
            "target rank '{target_rank}' is not a digit"
        )));
    }
    compare_rank(position, digit - b'0')
}

/// Signed file distance between a position and a target file letter:
/// positive when the position sits to the right of the target.
pub fn compare_file(position: &str, target_file: char) -> ChessResult<i8> {
    if !('a'..='h').contains(&target_file) {
        return Err(ChessErrors::InvalidArgument(format!(
            "target file '{target_file}' outside 'a'..='h'"
        )));
    }
    compare_file_from_index(position, target_file as u8 - b'a' + 1)
}

/// `compare_file` with the target as a one-based file index (`1..=8`).
pub fn compare_file_from_index(position: &str, target_file: u8) -> ChessResult<i8> {
    if !(1..=8).contains(&target_file) {
        return Err(ChessErrors::InvalidArgument(format!(
            "target file {target_file} outside 1..=8"
        )));
    }

    let square = algebraic_to_square(position)
        .map_err(|_| ChessErrors::InvalidArgument(format!("invalid position '{position}'")))?;
    Ok((file_of(square) + 1) as i8 - target_file as i8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ChessErrors;

    #[test]
    fn algebraic_to_square_is_a_bijection_onto_the_board() {
        let mut seen = [false; 64];
        for file in b'a'..=b'h' {
            for rank in b'1'..=b'8' {
                let notation = format!("{}{}", file as char, rank as char);
                let square = algebraic_to_square(&notation).expect("valid notation should parse");
                assert!(square < 64);
                assert!(!seen[square as usize], "{notation} collided");
                seen[square as usize] = true;
                assert_eq!(
                    square_to_algebraic(square).expect("square should convert back"),
                    notation
                );
            }
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn malformed_notation_is_rejected() {
        for bad in ["", "e", "e44", "i4", "a9", "a0", "`4", "4e"] {
            assert!(matches!(
                algebraic_to_square(bad),
                Err(ChessErrors::InvalidNotation(_))
            ));
        }
    }

    #[test]
    fn round_trip_bitboard_conversion() {
        let e4 = algebraic_to_bitboard("e4").expect("e4 should parse");
        assert_eq!(e4, 1u64 << 28);
        assert_eq!(
            bitboard_to_algebraic(e4).expect("one-hot bitboard should convert"),
            "e4"
        );
        assert!(bitboard_to_algebraic(0).is_err());
        assert!(bitboard_to_algebraic(e4 | 1).is_err());
    }

    #[test]
    fn rank_and_file_masks_cover_eight_squares_each() {
        assert_eq!(rank_mask(1).expect("rank 1 should mask"), 0xFF);
        assert_eq!(rank_mask(8).expect("rank 8 should mask"), 0xFF << 56);
        assert_eq!(file_mask('a').expect("file a should mask"), FILE_A_MASK);
        assert_eq!(
            file_mask('h').expect("file h should mask"),
            file_mask_from_index(8).expect("index 8 should mask")
        );
        for mask in [rank_mask(4), file_mask('d')] {
            assert_eq!(mask.expect("mask should build").count_ones(), 8);
        }
    }

    #[test]
    fn out_of_range_masks_are_rejected() {
        assert!(matches!(rank_mask(0), Err(ChessErrors::OutOfRange(_))));
        assert!(matches!(rank_mask(9), Err(ChessErrors::OutOfRange(_))));
        assert!(matches!(file_mask('i'), Err(ChessErrors::OutOfRange(_))));
        assert!(matches!(
            file_mask_from_index(0),
            Err(ChessErrors::OutOfRange(_))
        ));
    }

    #[test]
    fn compare_rank_reports_signed_distance() {
        assert_eq!(compare_rank("e4", 4).expect("e4 vs 4"), 0);
        assert!(compare_rank("e5", 6).expect("e5 vs 6") < 0);
        assert!(compare_rank("e2", 1).expect("e2 vs 1") > 0);
        assert_eq!(compare_rank_text("e4", "4").expect("text target"), 0);
    }

    #[test]
    fn compare_rank_rejects_malformed_input() {
        assert!(compare_rank("e9", 4).is_err());
        assert!(compare_rank("e0", 4).is_err());
        assert!(compare_rank("e4", 9).is_err());
        assert!(compare_rank("e4", 0).is_err());
        assert!(compare_rank_text("e4", "x").is_err());
        assert!(compare_rank_text("e4", "").is_err());
    }

    #[test]
    fn compare_file_reports_signed_distance() {
        assert_eq!(compare_file("e4", 'e').expect("e4 vs e"), 0);
        assert!(compare_file("f4", 'g').expect("f4 vs g") < 0);
        assert!(compare_file("d4", 'c').expect("d4 vs c") > 0);
        assert_eq!(compare_file_from_index("e4", 5).expect("index target"), 0);
    }

    #[test]
    fn compare_file_rejects_malformed_input() {
        assert!(compare_file("i4", 'e').is_err());
        assert!(compare_file("`4", '0').is_err());
        assert!(compare_file("e4", 'z').is_err());
        assert!(compare_file_from_index("e4", 0).is_err());
        assert!(compare_file_from_index("e4", 9).is_err());
    }
}
