#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the container parser with arbitrary bytes.
///
/// This exercises `FileContainer::from_bytes` against malformed,
/// truncated, corrupted, and hostile inputs. The parser must never
/// panic — only return `Ok` or `Err`.
fuzz_target!(|data: &[u8]| {
    let _ = privkit::container::FileContainer::from_bytes(data);
});
