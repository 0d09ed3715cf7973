//! # sable-wire-core
//!
//! Core wire-format library for Sable, a CryptoNote wallet backend.
//!
//! This crate provides the two consensus-critical primitives every other
//! Sable component builds on:
//!
//! - **Binary transaction decoding**: a sequential byte cursor, the 7-bit
//!   varint codec, and a decoder for the binary transaction grammar
//!   (version, inputs with ring offsets and key images, outputs, tagged
//!   extra data). The encoding carries no delimiters — every field's
//!   position is fixed by the schema, so decoding is a single forward walk.
//! - **Keccak-256 hashing**: the Keccak-f[1600] permutation and sponge with
//!   the original (pre-SHA3) padding, as used for transaction ids and the
//!   4-byte address checksum across the CryptoNote ecosystem.
//!
//! Both must be bit-exact against data already on chain, which is why the
//! permutation and the codec are implemented here rather than pulled in:
//! this crate is the single place the wire rules live.
//!
//! ## Architecture
//!
//! 1. **`no_std` Compatible**: can run in WASM environments (enable no
//!    default features; `alloc` is required)
//! 2. **Borrowing decoder**: the archive borrows the input blob; decoding
//!    allocates only for the structured output
//! 3. **Strict failure**: a malformed blob yields a typed error, never a
//!    partially populated transaction
//!
//! ## Modules
//!
//! - [`types`]: transaction record types and error types
//! - [`serialization`]: varint codec, byte archive, transaction decoder
//! - [`keccak`]: Keccak-f[1600] sponge, digest, and address checksum
//!
//! ## Example
//!
//! ```rust
//! use sable_wire_core::{decode_transaction, encode_varint};
//!
//! // version 1, no inputs, no outputs, empty extra
//! let mut blob = encode_varint(1);
//! blob.extend(encode_varint(0));
//! blob.extend(encode_varint(0));
//! blob.extend(encode_varint(0));
//!
//! let tx = decode_transaction(&blob).unwrap();
//! assert_eq!(tx.version, 1);
//! assert!(tx.vin.is_empty());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

extern crate alloc;

pub mod keccak;
pub mod serialization;
pub mod types;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::types::errors::*;
    pub use crate::types::transaction::*;
}

/// Re-export commonly used types at crate root
pub use types::errors::{WireError, WireResult};

// Re-export transaction record types
pub use types::transaction::{
    ExtraEntry, KeyImage, Transaction, TxInToKey, TxOutToKey, KEY_IMAGE_LENGTH, PUBLIC_KEY_LENGTH,
};

// Re-export the decoding surface
pub use serialization::archive::BinaryArchive;
pub use serialization::decoder::{decode_transaction, TransactionDecoder, MAX_SUPPORTED_TX_VERSION};
pub use serialization::varint::{decode_varint, encode_varint, packed_size};

// Re-export hashing
pub use keccak::{checksum, keccak256, CHECKSUM_LENGTH, HASH_LENGTH};
