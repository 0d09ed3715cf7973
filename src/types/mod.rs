//! Core type definitions for sable-wire-core
//!
//! This module contains:
//! - Error types for wire decoding
//! - Transaction record types produced by the decoder

pub mod errors;
pub mod transaction;

// Re-export error types
pub use errors::{WireError, WireResult};

// Re-export transaction types
pub use transaction::{
    ExtraEntry, KeyImage, Transaction, TxInToKey, TxOutToKey, EXTRA_TAG_NONCE, EXTRA_TAG_PUBKEY,
    KEY_IMAGE_LENGTH, PUBLIC_KEY_LENGTH,
};
