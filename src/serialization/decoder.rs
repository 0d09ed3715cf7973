//! Transaction decoder
//!
//! A single linear forward pass over a [`BinaryArchive`], producing a
//! [`Transaction`] record or a typed error. The grammar, in fixed order
//! with every field mandatory:
//!
//! 1. `version` — varint, checked against the decoder's version cap
//! 2. `vin` — varint count, then per input: varint count of ring offsets,
//!    the offsets as varints, and a 32-byte key image
//! 3. `vout` — varint count of outputs (see [`TxOutToKey`] for why their
//!    bodies are not consumed yet)
//! 4. `extra` — varint byte count, then that many raw bytes, parsed
//!    best-effort into tagged entries

use alloc::vec::Vec;

use super::archive::BinaryArchive;
use crate::types::errors::{WireError, WireResult};
use crate::types::transaction::{
    ExtraEntry, KeyImage, Transaction, TxInToKey, TxOutToKey, EXTRA_TAG_NONCE, EXTRA_TAG_PUBKEY,
    KEY_IMAGE_LENGTH, PUBLIC_KEY_LENGTH,
};

/// Highest transaction version the decoder accepts by default.
///
/// This is the pre-fork wire version; blobs claiming a newer version are
/// rejected before any further bytes are read.
pub const MAX_SUPPORTED_TX_VERSION: u64 = 1;

/// Decode one transaction from `blob` with the default version cap.
///
/// Convenience wrapper around [`TransactionDecoder`].
pub fn decode_transaction(blob: &[u8]) -> WireResult<Transaction> {
    TransactionDecoder::new(blob).decode_transaction()
}

/// Stateful walk over a transaction blob
///
/// A decoder is built for exactly one decode call: it owns its cursor,
/// and [`TransactionDecoder::decode_transaction`] consumes it.
#[derive(Debug)]
pub struct TransactionDecoder<'a> {
    archive: BinaryArchive<'a>,
    max_version: u64,
}

impl<'a> TransactionDecoder<'a> {
    /// Create a decoder with the default version cap
    #[must_use]
    pub const fn new(blob: &'a [u8]) -> Self {
        Self::with_max_version(blob, MAX_SUPPORTED_TX_VERSION)
    }

    /// Create a decoder accepting versions up to `max_version`
    #[must_use]
    pub const fn with_max_version(blob: &'a [u8], max_version: u64) -> Self {
        Self {
            archive: BinaryArchive::new(blob),
            max_version,
        }
    }

    /// Decode the transaction and consume the decoder.
    ///
    /// Trailing bytes beyond the decoded object are tolerated: the extra
    /// region is length-prefixed, so the object has a definite end, and
    /// callers may carry concatenated data after it. Inspect the blob
    /// length yourself if strict end-of-input matters.
    pub fn decode_transaction(mut self) -> WireResult<Transaction> {
        let version = self.archive.read_varint()?;
        if version > self.max_version {
            return Err(WireError::UnsupportedVersion {
                version,
                max_supported: self.max_version,
            });
        }

        let vin = self.decode_array(Self::read_txin_to_key)?;
        let vout = self.decode_array(Self::read_txout_to_key)?;
        let extra = self.read_extra()?;

        Ok(Transaction {
            version,
            vin,
            vout,
            extra,
        })
    }

    /// Read a varint element count and check it against the platform's
    /// addressable bound.
    fn begin_array(&mut self) -> WireResult<usize> {
        let declared = self.archive.read_varint()?;
        usize::try_from(declared).map_err(|_| WireError::ArrayTooLarge { declared })
    }

    /// Decode a counted array: the count varint, then exactly that many
    /// elements back to back. No delimiters exist between elements.
    fn decode_array<T>(
        &mut self,
        mut element: impl FnMut(&mut Self) -> WireResult<T>,
    ) -> WireResult<Vec<T>> {
        let count = self.begin_array()?;

        // The count is untrusted wire data; grow as elements actually decode.
        let mut items = Vec::new();
        for _ in 0..count {
            items.push(element(self)?);
        }
        Ok(items)
    }

    fn read_txin_to_key(&mut self) -> WireResult<TxInToKey> {
        let key_offsets = self.decode_array(|decoder| decoder.archive.read_varint())?;

        let mut key_image = [0u8; KEY_IMAGE_LENGTH];
        key_image.copy_from_slice(self.archive.read_blob(KEY_IMAGE_LENGTH)?);

        Ok(TxInToKey {
            key_offsets,
            key_image: KeyImage::new(key_image),
        })
    }

    // Output bodies are not consumed: their per-field grammar is pending
    // the authoritative protocol definition (see TxOutToKey).
    #[allow(clippy::unused_self, clippy::unnecessary_wraps)]
    fn read_txout_to_key(&mut self) -> WireResult<TxOutToKey> {
        Ok(TxOutToKey)
    }

    fn read_extra(&mut self) -> WireResult<Vec<ExtraEntry>> {
        let length = self.begin_array()?;
        let region = self.archive.read_blob(length)?;
        Ok(parse_extra_entries(region))
    }
}

/// Parse the extra region front to back into tagged entries.
///
/// The region's length was already consensus-framed by its varint prefix,
/// so its interior is best-effort: the first unrecognized tag — or a
/// recognized entry truncated inside the region — captures the rest of
/// the region verbatim as [`ExtraEntry::Unknown`] and stops.
fn parse_extra_entries(region: &[u8]) -> Vec<ExtraEntry> {
    let mut entries = Vec::new();
    let mut cursor = BinaryArchive::new(region);

    while !cursor.eof() {
        let checkpoint = cursor.position();
        match parse_extra_entry(&mut cursor) {
            Some(entry) => entries.push(entry),
            None => {
                entries.push(ExtraEntry::Unknown(region[checkpoint..].to_vec()));
                break;
            }
        }
    }

    entries
}

fn parse_extra_entry(cursor: &mut BinaryArchive<'_>) -> Option<ExtraEntry> {
    let tag = cursor.read_u8().ok()?;

    match tag {
        EXTRA_TAG_PUBKEY => {
            let mut key = [0u8; PUBLIC_KEY_LENGTH];
            key.copy_from_slice(cursor.read_blob(PUBLIC_KEY_LENGTH).ok()?);
            Some(ExtraEntry::PublicKey(key))
        }
        EXTRA_TAG_NONCE => {
            let length = usize::try_from(cursor.read_varint().ok()?).ok()?;
            Some(ExtraEntry::Nonce(cursor.read_blob(length).ok()?.to_vec()))
        }
        _ => None,
    }
}
