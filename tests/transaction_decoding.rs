//! Integration tests: decoding a full transaction blob end to end.
//!
//! Exercises the pipeline a Sable service runs on every incoming blob:
//! 1. Wire bytes → `BinaryArchive` → `TransactionDecoder`
//! 2. Structured `Transaction` record with inputs, outputs, extra entries
//! 3. Keccak-256 checksum over decoded material
//!
//! Run: `cargo test --test transaction_decoding`

use sha3::{Digest, Keccak256};

use sable_wire_core::{
    checksum, decode_transaction, encode_varint, keccak256, ExtraEntry, Transaction,
    TransactionDecoder, WireError, CHECKSUM_LENGTH,
};

// =====================================================================
// Helpers
// =====================================================================

/// Wire-encode a transaction with one ringed input, `output_count`
/// placeholder outputs, and a raw extra region.
fn encode_transaction(version: u64, output_count: u64, extra: &[u8]) -> Vec<u8> {
    let mut blob = encode_varint(version);

    // vin: one input, ring of three, key image 0x42..42
    blob.extend(encode_varint(1));
    blob.extend(encode_varint(3));
    for offset in [70_000u64, 122, 5] {
        blob.extend(encode_varint(offset));
    }
    blob.extend_from_slice(&[0x42; 32]);

    blob.extend(encode_varint(output_count));

    blob.extend(encode_varint(extra.len() as u64));
    blob.extend_from_slice(extra);

    blob
}

// =====================================================================
// Tests
// =====================================================================

#[test]
fn decodes_full_transaction() {
    let mut extra = vec![0x01];
    extra.extend_from_slice(&[0xaa; 32]); // tx pubkey
    extra.push(0xd0); // unrecognized tag
    extra.extend_from_slice(b"future tag payload");

    let blob = encode_transaction(1, 2, &extra);
    let tx: Transaction = decode_transaction(&blob).expect("valid blob must decode");

    assert_eq!(tx.version, 1);

    assert_eq!(tx.vin.len(), 1);
    assert_eq!(tx.vin[0].key_offsets, vec![70_000, 122, 5]);
    assert_eq!(tx.vin[0].key_image.0, [0x42; 32]);

    assert_eq!(tx.vout.len(), 2);

    assert_eq!(tx.extra.len(), 2);
    assert_eq!(tx.tx_pubkey(), Some([0xaa; 32]));
    let mut expected_unknown = vec![0xd0];
    expected_unknown.extend_from_slice(b"future tag payload");
    assert_eq!(tx.extra[1], ExtraEntry::Unknown(expected_unknown));
}

#[test]
fn rejects_newer_version_without_reading_further() {
    let blob = encode_transaction(2, 0, &[]);
    assert_eq!(
        decode_transaction(&blob),
        Err(WireError::UnsupportedVersion {
            version: 2,
            max_supported: 1,
        })
    );

    // A decoder configured for the newer version accepts the same bytes.
    let tx = TransactionDecoder::with_max_version(&blob, 2)
        .decode_transaction()
        .expect("raised cap must accept version 2");
    assert_eq!(tx.version, 2);
}

#[test]
fn truncated_blob_never_yields_a_partial_record() {
    let blob = encode_transaction(1, 0, &[]);

    // Chop the blob at every length short of complete: each prefix must
    // decode to an error, never to a record missing trailing fields.
    for cut in 0..blob.len() {
        assert!(
            decode_transaction(&blob[..cut]).is_err(),
            "prefix of {cut} bytes decoded successfully"
        );
    }

    assert!(decode_transaction(&blob).is_ok());
}

#[test]
fn checksum_of_decoded_key_image_matches_reference() {
    let blob = encode_transaction(1, 0, &[]);
    let tx = decode_transaction(&blob).unwrap();
    let key_image = &tx.vin[0].key_image;

    let check = checksum(key_image.as_ref());
    assert_eq!(check.len(), CHECKSUM_LENGTH);

    let expected: [u8; 32] = Keccak256::digest(key_image.as_ref()).into();
    assert_eq!(check, expected[..CHECKSUM_LENGTH]);
    assert_eq!(keccak256(key_image.as_ref()), expected);
}

#[test]
fn address_payload_checksum_shape() {
    // An address payload the external base58 encoder would frame:
    // tag, flag, spend key, view key — checksum goes over all of it.
    let mut payload = vec![0xc5, 0x01];
    payload.extend_from_slice(&[0x11; 32]);
    payload.extend_from_slice(&[0x22; 32]);

    let check = checksum(&payload);
    assert_eq!(check, keccak256(&payload)[..CHECKSUM_LENGTH]);

    // Flipping any payload byte must change the checksum
    let mut tampered = payload.clone();
    tampered[1] ^= 0x80;
    assert_ne!(checksum(&tampered), check);
}
