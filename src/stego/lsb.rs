//! LSB substitution codec over an RGBA pixel buffer.
//!
//! Encoding model: each UTF-16 code unit of the message contributes its
//! low 8 bits as one embedded byte, MSB-first. The 9-byte delimiter from
//! the parent module marks end-of-message; there is no length field.
//!
//! Only messages within the Latin-1 range round-trip exactly — the high
//! 8 bits of each code unit are discarded. Callers needing full Unicode
//! fidelity must transport the message some other way.

use super::{bytes_to_bits, usable_bits, DELIMITER, SCAN_CAP_CHARS};
use crate::error::StegoError;

/// Embed `message` into a copy of `pixels` (RGBA byte order).
///
/// Walks the buffer byte by byte, skipping every 4th byte (alpha), and
/// overwrites one LSB per visited byte until the framed message is
/// exhausted; remaining bytes are untouched. The input slice is never
/// mutated — on [`StegoError::Capacity`] no buffer is produced at all.
pub fn embed_message(pixels: &[u8], message: &str) -> Result<Vec<u8>, StegoError> {
    let units: Vec<u8> = message.encode_utf16().map(|u| u as u8).collect();
    let total_bits = (units.len() + DELIMITER.len()) * 8;

    let capacity = usable_bits(pixels.len());
    if total_bits > capacity {
        return Err(StegoError::Capacity {
            max_chars: (capacity / 8).saturating_sub(DELIMITER.len()),
        });
    }

    let bits = bytes_to_bits(units.iter().chain(DELIMITER.iter()), total_bits);

    let mut out = pixels.to_vec();
    let mut cursor = 0usize;
    for (i, byte) in out.iter_mut().enumerate() {
        if i % 4 == 3 {
            continue; // alpha
        }
        if cursor >= bits.len() {
            break;
        }
        *byte = (*byte & 0xFE) | bits[cursor] as u8;
        cursor += 1;
    }

    Ok(out)
}

/// Recover a hidden message from `pixels`, or an empty string if none is
/// found. "No hidden message" is a valid outcome, never an error.
///
/// Bytes are reconstructed incrementally and checked against the
/// delimiter with a 9-byte suffix comparison per byte — linear time, no
/// rescans of the accumulated text. The walk stops at the delimiter or
/// at the scan cap, whichever comes first.
pub fn extract_message(pixels: &[u8]) -> String {
    let mut bytes: Vec<u8> = Vec::new();
    let mut acc = 0u8;
    let mut nbits = 0u8;

    for (i, &byte) in pixels.iter().enumerate() {
        if i % 4 == 3 {
            continue; // alpha
        }

        acc = (acc << 1) | (byte & 1);
        nbits += 1;
        if nbits < 8 {
            continue;
        }

        bytes.push(acc);
        acc = 0;
        nbits = 0;

        if bytes.ends_with(DELIMITER) {
            bytes.truncate(bytes.len() - DELIMITER.len());
            // Inverse of the low-8-bit framing: each byte is one
            // Latin-1 code point.
            return bytes.into_iter().map(char::from).collect();
        }
        if bytes.len() >= SCAN_CAP_CHARS {
            break;
        }
    }

    String::new()
}
