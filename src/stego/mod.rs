//! Steganographic bit channel over RGBA pixel data.
//!
//! The message is framed by a fixed sentinel rather than a length field,
//! expanded to one bit per color byte (alpha is never touched), and
//! written into the least significant bits of the carrier.

pub mod lsb;

/// End-of-message sentinel appended to the plaintext before embedding.
/// NUL bytes around an ASCII marker — a sequence that cannot occur in
/// ordinary text.
pub const DELIMITER: &[u8; 9] = b"\x00\x00\x00END\x00\x00\x00";

/// Extraction scan cap: give up after this many reconstructed characters
/// if no delimiter has appeared. Hitting the cap is not an error — it
/// means the image carries no message.
pub const SCAN_CAP_CHARS: usize = 100_000;

/// Usable embedding bits in a raw RGBA buffer: 3 of every 4 bytes
/// (R, G, B) carry one bit each.
pub fn usable_bits(pixel_bytes: usize) -> usize {
    pixel_bytes / 4 * 3
}

/// Maximum embeddable message length in characters for a width × height
/// RGBA image, after reserving room for the delimiter.
///
/// Clamped at zero for degenerate images too small to hold even the
/// delimiter; zero capacity means no message can be embedded.
pub fn max_chars(width: u32, height: u32) -> usize {
    let bits = (width as usize) * (height as usize) * 3;
    (bits / 8).saturating_sub(DELIMITER.len())
}

/// Expand bytes to bits, MSB-first per byte.
pub(crate) fn bytes_to_bits<'a>(
    bytes: impl Iterator<Item = &'a u8>,
    expected_bits: usize,
) -> Vec<bool> {
    let mut bits = Vec::with_capacity(expected_bits);
    for &b in bytes {
        for i in (0..8).rev() {
            bits.push(((b >> i) & 1) == 1);
        }
    }
    bits
}
