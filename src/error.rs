use thiserror::Error;

/// Errors from the encrypted container codec.
///
/// Wrong-password and tampered-ciphertext failures are deliberately
/// collapsed into a single [`ContainerError::Crypto`] variant: the AEAD
/// tag verification cannot tell them apart, and the caller must not be
/// able to either.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// Filename does not fit the 16-bit length field. Rejected before any
    /// cryptographic work is done.
    #[error("filename is too long to encrypt safely: {0} bytes (max 65535)")]
    FilenameTooLong(usize),

    /// Input is structurally not a valid container.
    #[error("invalid encrypted file format: {0}")]
    Format(&'static str),

    /// AEAD tag verification failed: wrong password or corrupted data,
    /// indistinguishable by construction.
    #[error("decryption failed: wrong password or corrupted data")]
    Crypto,

    /// The OS secure random source was unavailable.
    #[error("secure random source unavailable")]
    Random,
}

/// Errors from the LSB steganographic channel codec.
#[derive(Debug, Error)]
pub enum StegoError {
    /// Message (plus delimiter) does not fit the carrier. The pixel
    /// buffer is left untouched.
    #[error("message too long: maximum {max_chars} characters for this image")]
    Capacity { max_chars: usize },

    /// Carrier image could not be decoded.
    #[error("image load error: {0}")]
    ImageLoad(String),

    /// Carrier image could not be encoded or written.
    #[error("image save error: {0}")]
    ImageSave(String),
}
