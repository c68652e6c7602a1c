//! Negative and edge-case coverage for the container codec.
//!
//! Each test defends against a specific real risk: truncated blobs,
//! header fields pointing past the buffer, and bit-level tampering
//! anywhere in the container.

use privkit::container::{FileContainer, MIN_LEN};
use privkit::ContainerError;

// ── Structural format errors ─────────────────────────────────────────

#[test]
fn empty_input_is_a_format_error() {
    let err = FileContainer::from_bytes(&[]).unwrap_err();
    assert!(matches!(err, ContainerError::Format(_)), "got: {err:?}");
}

#[test]
fn inputs_below_minimum_header_are_rejected() {
    for len in 0..MIN_LEN {
        let err = FileContainer::from_bytes(&vec![0u8; len]).unwrap_err();
        assert!(
            matches!(err, ContainerError::Format(_)),
            "length {len} should be a format error, got: {err:?}"
        );
    }
}

#[test]
fn exactly_minimum_header_parses_but_never_opens() {
    // 30 zero bytes: structurally valid (empty filename, empty
    // ciphertext) but can never authenticate.
    let container = FileContainer::from_bytes(&[0u8; MIN_LEN]).expect("parse");
    assert_eq!(container.filename(), "");
    let err = container.open("pw").unwrap_err();
    assert!(matches!(err, ContainerError::Crypto), "got: {err:?}");
}

#[test]
fn filename_length_past_buffer_end_is_a_format_error() {
    let mut input = vec![0u8; MIN_LEN];
    // Claim a 100-byte filename with nothing after the header.
    input[28..30].copy_from_slice(&100u16.to_le_bytes());
    let err = FileContainer::from_bytes(&input).unwrap_err();
    assert!(matches!(err, ContainerError::Format(_)), "got: {err:?}");
}

#[test]
fn filename_length_one_past_end_is_a_format_error() {
    let blob = privkit::encrypt_file(b"x", "ab", "pw").unwrap();
    let mut truncated = blob.clone();
    truncated.truncate(MIN_LEN + 1); // claims 2 name bytes, has 1
    let err = FileContainer::from_bytes(&truncated).unwrap_err();
    assert!(matches!(err, ContainerError::Format(_)), "got: {err:?}");
}

#[test]
fn truncated_ciphertext_fails_auth_not_format() {
    // Structure is intact, so this is a crypto failure: the tag can no
    // longer verify.
    let blob = privkit::encrypt_file(b"some payload", "f.bin", "pw").unwrap();
    let truncated = &blob[..blob.len() - 4];
    let err = privkit::decrypt_file(truncated, "pw").unwrap_err();
    assert!(matches!(err, ContainerError::Crypto), "got: {err:?}");
}

// ── Bit-level tamper detection ───────────────────────────────────────

#[test]
fn single_bit_flip_in_salt_fails_auth() {
    let blob = privkit::encrypt_file(b"tamper the salt", "t.txt", "pw").unwrap();
    let mut evil = blob.clone();
    evil[0] ^= 0x01;
    let err = privkit::decrypt_file(&evil, "pw").unwrap_err();
    assert!(matches!(err, ContainerError::Crypto), "got: {err:?}");
}

#[test]
fn single_bit_flip_in_iv_fails_auth() {
    let blob = privkit::encrypt_file(b"tamper the iv", "t.txt", "pw").unwrap();
    let mut evil = blob.clone();
    evil[16] ^= 0x80;
    let err = privkit::decrypt_file(&evil, "pw").unwrap_err();
    assert!(matches!(err, ContainerError::Crypto), "got: {err:?}");
}

#[test]
fn every_bit_of_ciphertext_and_tag_is_authenticated() {
    let blob = privkit::encrypt_file(b"short", "t.txt", "pw").unwrap();
    let ct_start = MIN_LEN + "t.txt".len();

    // Flip one bit per ciphertext/tag byte; each flip must fail closed.
    for i in ct_start..blob.len() {
        let mut evil = blob.clone();
        evil[i] ^= 1 << (i % 8);
        let err = privkit::decrypt_file(&evil, "pw").unwrap_err();
        assert!(
            matches!(err, ContainerError::Crypto),
            "flipping byte {i} should fail auth, got: {err:?}"
        );
    }
}

#[test]
fn appended_garbage_fails_auth() {
    let mut blob = privkit::encrypt_file(b"payload", "g.txt", "pw").unwrap();
    blob.extend_from_slice(&[0xAB; 32]);
    let err = privkit::decrypt_file(&blob, "pw").unwrap_err();
    assert!(matches!(err, ContainerError::Crypto), "got: {err:?}");
}

#[test]
fn tampered_filename_changes_name_but_payload_still_opens() {
    // The filename sits outside the AEAD envelope: flipping a bit there
    // alters presentation metadata without breaking decryption. This is
    // a documented property of the format, not a regression.
    let blob = privkit::encrypt_file(b"payload", "aa.txt", "pw").unwrap();
    let mut evil = blob.clone();
    evil[MIN_LEN] ^= 0x02; // 'a' -> 'c'
    let recovered = privkit::decrypt_file(&evil, "pw").expect("payload still authentic");
    assert_eq!(&recovered.data[..], b"payload");
    assert_eq!(recovered.filename, "ca.txt");
}

// ── Hostile parse inputs ─────────────────────────────────────────────

#[test]
fn arbitrary_garbage_never_panics() {
    // Deterministic xorshift garbage at assorted lengths; parser must
    // return Ok or Err, never panic.
    let mut state: u32 = 0x1234_5678;
    for len in [0usize, 1, 29, 30, 31, 64, 257, 4096] {
        let mut buf = Vec::with_capacity(len);
        for _ in 0..len {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            buf.push(state as u8);
        }
        match FileContainer::from_bytes(&buf) {
            Ok(c) => {
                // Structurally parseable garbage must still fail auth.
                assert!(c.open("pw").is_err());
            }
            Err(e) => {
                assert!(matches!(e, ContainerError::Format(_)));
            }
        }
    }
}

#[test]
fn non_utf8_filename_bytes_parse_lossily() {
    let mut input = vec![0u8; MIN_LEN + 2];
    input[28..30].copy_from_slice(&2u16.to_le_bytes());
    input[30] = 0xFF;
    input[31] = 0xFE;
    let container = FileContainer::from_bytes(&input).expect("parse");
    assert_eq!(container.filename(), "\u{FFFD}\u{FFFD}");
}
