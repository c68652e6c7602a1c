#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the LSB extractor with arbitrary pixel buffers.
///
/// Hostile buffers may be empty, not a multiple of four bytes, or
/// crafted to contain near-delimiter bit patterns. Extraction must not
/// panic and must terminate within the scan cap.
fuzz_target!(|data: &[u8]| {
    let _ = privkit::stego::lsb::extract_message(data);
});
