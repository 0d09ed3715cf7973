//! Keccak-256 sponge hash.
//!
//! This is the original Keccak as standardized before SHA-3: the final
//! padding byte is `0x01`, not the SHA-3 domain-separated `0x06`. The
//! CryptoNote family hashes transactions and address payloads with this
//! variant, so digests here must match chain data bit for bit.
//!
//! The sponge runs at rate 136 bytes / capacity 512 bits and always emits
//! a 32-byte digest, which never exceeds the rate — a single squeeze reads
//! straight out of the lane state.

pub mod constants;

use constants::{KECCAK_ROUNDS, PI_LANE_ORDER, ROTATION_OFFSETS, ROUND_CONSTANTS};

/// Length of a digest in bytes
pub const HASH_LENGTH: usize = 32;

/// Length of an address checksum in bytes
pub const CHECKSUM_LENGTH: usize = 4;

/// Sponge rate in bytes: 200-byte state minus 2 * 32-byte capacity
pub const BLOCK_LENGTH: usize = 200 - 2 * HASH_LENGTH;

/// Lanes of the state covered by the rate
const BLOCK_LANES: usize = BLOCK_LENGTH / 8;

/// Apply the Keccak-f[1600] permutation to a 25-lane state.
///
/// The state is owned exclusively by the caller for the duration of the
/// permutation; it is mutated in place through all 24 rounds of theta,
/// rho + pi, chi, and iota.
fn keccak_f1600(state: &mut [u64; 25]) {
    let mut parity = [0u64; 5];

    for round in 0..KECCAK_ROUNDS {
        // Theta: XOR each lane with the parities of two neighboring columns
        for x in 0..5 {
            parity[x] = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
        }
        for x in 0..5 {
            let d = parity[(x + 4) % 5] ^ parity[(x + 1) % 5].rotate_left(1);
            for y in (0..25).step_by(5) {
                state[y + x] ^= d;
            }
        }

        // Rho + Pi: rotate each lane and move it along the pi cycle
        let mut carried = state[1];
        for i in 0..24 {
            let next = PI_LANE_ORDER[i];
            let rotated = carried.rotate_left(ROTATION_OFFSETS[i]);
            carried = state[next];
            state[next] = rotated;
        }

        // Chi: combine each lane with the two lanes to its right in the row
        for y in (0..25).step_by(5) {
            let row = [
                state[y],
                state[y + 1],
                state[y + 2],
                state[y + 3],
                state[y + 4],
            ];
            for x in 0..5 {
                state[y + x] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
            }
        }

        // Iota
        state[0] ^= ROUND_CONSTANTS[round];
    }
}

/// XOR one rate-sized block into the low lanes of the state, little-endian
/// per 64-bit lane.
fn absorb_block(state: &mut [u64; 25], block: &[u8]) {
    debug_assert_eq!(block.len(), BLOCK_LENGTH);

    for lane in 0..BLOCK_LANES {
        let mut lane_bytes = [0u8; 8];
        lane_bytes.copy_from_slice(&block[lane * 8..lane * 8 + 8]);
        state[lane] ^= u64::from_le_bytes(lane_bytes);
    }
}

/// Compute the Keccak-256 digest of `data`.
///
/// One call hashes one complete input; there is no streaming mode. The
/// final block is always padded and absorbed, even when the input length
/// is an exact multiple of the rate.
#[must_use]
pub fn keccak256(data: &[u8]) -> [u8; HASH_LENGTH] {
    let mut state = [0u64; 25];

    let mut blocks = data.chunks_exact(BLOCK_LENGTH);
    for block in blocks.by_ref() {
        absorb_block(&mut state, block);
        keccak_f1600(&mut state);
    }

    // Final padded block: tail bytes, a single 0x01, zero fill, and 0x80
    // OR'd into the last byte of the block.
    let tail = blocks.remainder();
    let mut last = [0u8; BLOCK_LENGTH];
    last[..tail.len()].copy_from_slice(tail);
    last[tail.len()] = 0x01;
    last[BLOCK_LENGTH - 1] |= 0x80;
    absorb_block(&mut state, &last);
    keccak_f1600(&mut state);

    let mut digest = [0u8; HASH_LENGTH];
    for (i, chunk) in digest.chunks_exact_mut(8).enumerate() {
        chunk.copy_from_slice(&state[i].to_le_bytes());
    }
    digest
}

/// Compute the 4-byte address checksum of `data`.
///
/// This is the first [`CHECKSUM_LENGTH`] bytes of [`keccak256`], the
/// quantity the base58 address encoder appends to its payload.
#[must_use]
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let digest = keccak256(data);
    let mut prefix = [0u8; CHECKSUM_LENGTH];
    prefix.copy_from_slice(&digest[..CHECKSUM_LENGTH]);
    prefix
}
