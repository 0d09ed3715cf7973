//! Keccak-f[1600] round constants and rotation tables.
//!
//! These are the published constants from the Keccak reference; they must
//! not be altered or digests stop matching data already on chain.

/// Number of rounds in Keccak-f[1600]
pub const KECCAK_ROUNDS: usize = 24;

/// Iota step round constants, one per round
pub const ROUND_CONSTANTS: [u64; KECCAK_ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// Rho step rotation offsets, indexed in pi traversal order
pub const ROTATION_OFFSETS: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Pi step lane traversal order (lane 1 walks this cycle through the state)
pub const PI_LANE_ORDER: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lengths() {
        assert_eq!(ROUND_CONSTANTS.len(), KECCAK_ROUNDS);
        assert_eq!(ROTATION_OFFSETS.len(), 24);
        assert_eq!(PI_LANE_ORDER.len(), 24);
    }

    #[test]
    fn test_pi_order_is_a_permutation_cycle() {
        // Every lane except 0 appears exactly once; lane 0 is fixed by pi.
        let mut seen = [false; 25];
        for &lane in &PI_LANE_ORDER {
            assert!(lane > 0 && lane < 25);
            assert!(!seen[lane], "lane {lane} visited twice");
            seen[lane] = true;
        }
    }

    #[test]
    fn test_rotation_offsets_in_range() {
        for &offset in &ROTATION_OFFSETS {
            assert!(offset > 0 && offset < 64);
        }
    }
}
