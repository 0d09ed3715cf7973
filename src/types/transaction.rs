//! Transaction record types produced by the binary decoder
//!
//! These are the structured counterparts of the wire grammar: a transaction
//! prefix with its inputs, outputs, and tagged extra data. All byte fields
//! hold wire bytes verbatim; no cryptographic interpretation happens here.

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

// =============================================================================
// Lengths and tags
// =============================================================================

/// Length of a key image in bytes (an ed25519 point on the wire)
pub const KEY_IMAGE_LENGTH: usize = 32;

/// Length of a public key in bytes
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Extra tag marking a transaction public key entry
pub const EXTRA_TAG_PUBKEY: u8 = 0x01;

/// Extra tag marking a variable-length nonce entry
pub const EXTRA_TAG_NONCE: u8 = 0x02;

// =============================================================================
// Key Image
// =============================================================================

/// Key image attached to a transaction input (32 bytes)
///
/// Key images are used to detect double-spending. Their cryptographic
/// construction happens in the signing layer; on the wire they are opaque
/// fixed-length blobs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyImage(pub [u8; KEY_IMAGE_LENGTH]);

impl KeyImage {
    /// Create a new key image from bytes
    #[must_use]
    pub const fn new(bytes: [u8; KEY_IMAGE_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Create from a hex string
    pub fn from_hex(hex_str: &str) -> Result<Self, &'static str> {
        if hex_str.len() != KEY_IMAGE_LENGTH * 2 {
            return Err("Invalid hex length for key image");
        }

        let mut bytes = [0u8; KEY_IMAGE_LENGTH];
        hex::decode_to_slice(hex_str, &mut bytes).map_err(|_| "Invalid hex characters")?;
        Ok(Self(bytes))
    }

    /// Convert to hex string
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Get the underlying bytes
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; KEY_IMAGE_LENGTH] {
        &self.0
    }
}

impl AsRef<[u8]> for KeyImage {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// =============================================================================
// Inputs and outputs
// =============================================================================

/// A to-key transaction input
///
/// `key_offsets` are relative ring-member offsets: each entry is the
/// distance from the previous referenced output's global index, with the
/// first entry absolute. The decoder keeps them relative, exactly as
/// encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInToKey {
    /// Relative offsets of the ring members referenced by this input
    pub key_offsets: Vec<u64>,
    /// Key image of the spent output
    pub key_image: KeyImage,
}

impl TxInToKey {
    /// Number of ring members this input references
    #[must_use]
    pub fn ring_size(&self) -> usize {
        self.key_offsets.len()
    }
}

/// A to-key transaction output
///
/// The per-field wire grammar of an output (stealth address, concealing
/// point, amount commitment, blinded asset id, encrypted amount, mix
/// attribute) has not been pinned down against the authoritative protocol
/// definition yet, so the decoder consumes no output bytes and returns this
/// empty record. Field order, sizes, and types must come from the protocol
/// owners, not be guessed here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutToKey;

// =============================================================================
// Extra entries
// =============================================================================

/// One entry of a transaction's extra region
///
/// The extra region is a tagged, extensible byte area. Entries this crate
/// recognizes are decoded into their own variants; the first unrecognized
/// tag makes the parser capture the tag byte and everything after it
/// verbatim as [`ExtraEntry::Unknown`] and stop. That capture is a
/// conservative compatibility measure — it keeps blobs with newer tag types
/// decodable — but it also hides any tag decoder we simply have not written
/// yet, so treat `Unknown` data as "unparsed", not "padding".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtraEntry {
    /// Transaction public key (tag 0x01), 32 bytes
    PublicKey([u8; PUBLIC_KEY_LENGTH]),
    /// Nonce blob (tag 0x02), varint length followed by raw bytes
    Nonce(Vec<u8>),
    /// First unrecognized tag and every byte after it, verbatim
    Unknown(Vec<u8>),
}

// =============================================================================
// Transaction
// =============================================================================

/// A decoded transaction prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction format version
    pub version: u64,
    /// Inputs, in wire order
    pub vin: Vec<TxInToKey>,
    /// Outputs, in wire order
    pub vout: Vec<TxOutToKey>,
    /// Parsed extra entries, in wire order
    pub extra: Vec<ExtraEntry>,
}

impl Transaction {
    /// Return the transaction public key, if any, present in the extra
    /// entries.
    #[must_use]
    pub fn tx_pubkey(&self) -> Option<[u8; PUBLIC_KEY_LENGTH]> {
        self.extra.iter().find_map(|entry| match entry {
            ExtraEntry::PublicKey(key) => Some(*key),
            _ => None,
        })
    }

    /// Key images of all inputs, in wire order
    pub fn key_images(&self) -> impl Iterator<Item = &KeyImage> {
        self.vin.iter().map(|input| &input.key_image)
    }
}
