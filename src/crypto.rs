//! Password-based key derivation and AEAD primitives.
//!
//! One fixed suite: PBKDF2-HMAC-SHA256 for key stretching and
//! AES-256-GCM for authenticated encryption. The iteration count is part
//! of the wire contract — decode re-derives with the same count.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::error::ContainerError;

/// PBKDF2-HMAC-SHA256 iteration count. Intentionally expensive: this is
/// the brute-force deterrent for password guessing.
pub const KDF_ITERATIONS: u32 = 100_000;

/// Derived key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// AES-GCM nonce length in bytes (96 bits).
pub const IV_LEN: usize = 12;

/// AES-GCM authentication tag length in bytes (128 bits).
pub const TAG_LEN: usize = 16;

/// Fill a fixed-size array from the OS RNG.
pub fn random_bytes<const N: usize>() -> Result<[u8; N], ContainerError> {
    let mut out = [0u8; N];
    getrandom::getrandom(&mut out).map_err(|_| ContainerError::Random)?;
    Ok(out)
}

/// Derive a 256-bit AEAD key from a password and a per-container salt.
///
/// Deterministic given `(password, salt)` so decode can reconstruct the
/// encoding key. No caching: every call pays the full iteration cost.
pub fn derive_key(password: &str, salt: &[u8]) -> Zeroizing<[u8; KEY_LEN]> {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, KDF_ITERATIONS, &mut *key);
    key
}

/// AEAD seal: returns ciphertext with the 16-byte tag appended.
/// No associated data.
pub fn aead_seal(
    key: &[u8; KEY_LEN],
    iv: &[u8; IV_LEN],
    plaintext: &[u8],
) -> Result<Vec<u8>, ContainerError> {
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| ContainerError::Crypto)?;
    cipher
        .encrypt(Nonce::from_slice(iv), plaintext)
        .map_err(|_| ContainerError::Crypto)
}

/// AEAD open: verifies the tag and decrypts.
///
/// A failure here means wrong password OR modified bytes — the two causes
/// are indistinguishable, so the error carries no detail.
pub fn aead_open(
    key: &[u8; KEY_LEN],
    iv: &[u8; IV_LEN],
    ciphertext: &[u8],
) -> Result<Vec<u8>, ContainerError> {
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| ContainerError::Crypto)?;
    cipher
        .decrypt(Nonce::from_slice(iv), ciphertext)
        .map_err(|_| ContainerError::Crypto)
}
