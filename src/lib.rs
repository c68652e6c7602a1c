//! privkit core library.
//!
//! Client-side privacy codecs:
//! - Encrypted file container: password → PBKDF2-HMAC-SHA256 key →
//!   AES-256-GCM, packed into a self-describing blob with the original
//!   filename (`container`)
//! - LSB steganography: hide a text message in the low bits of an RGBA
//!   image's color channels, framed by a fixed sentinel (`stego`)
//! - Carrier image I/O restricted to lossless output (`carrier`)
//! - Extension → MIME lookup for presenting decrypted files (`mime`)
//!
//! Every operation is a pure, single-shot transformation over
//! caller-owned buffers: no shared state, no retries, and failures leave
//! all inputs untouched.

pub mod carrier;
pub mod container;
pub mod crypto;
pub mod error;
pub mod mime;
pub mod stego;

pub use error::{ContainerError, StegoError};

use container::FileContainer;
use zeroize::Zeroizing;

/// A decrypted file: recovered bytes plus the filename stored at
/// encryption time. Plaintext is zeroized on drop.
#[derive(Debug)]
pub struct DecryptedFile {
    pub data: Zeroizing<Vec<u8>>,
    pub filename: String,
}

impl DecryptedFile {
    /// MIME type guessed from the recovered filename's extension.
    /// Presentation only — it has no security role.
    pub fn mime_type(&self) -> &'static str {
        mime::mime_for_filename(&self.filename)
    }
}

/// Encrypt `data` under `password` into a self-describing container blob.
///
/// The blob carries its own salt and IV; only the original password is
/// needed to decrypt it.
pub fn encrypt_file(
    data: &[u8],
    filename: &str,
    password: &str,
) -> Result<Vec<u8>, ContainerError> {
    let container = FileContainer::seal(data, filename, password)?;
    Ok(container.to_bytes())
}

/// Decrypt a container blob produced by [`encrypt_file`].
pub fn decrypt_file(blob: &[u8], password: &str) -> Result<DecryptedFile, ContainerError> {
    let container = FileContainer::from_bytes(blob)?;
    let data = container.open(password)?;
    Ok(DecryptedFile {
        data,
        filename: container.filename().to_string(),
    })
}

/// Embed a text message into a copy of an RGBA pixel buffer.
/// See [`stego::lsb::embed_message`].
pub fn hide_message(pixels: &[u8], message: &str) -> Result<Vec<u8>, StegoError> {
    stego::lsb::embed_message(pixels, message)
}

/// Recover a hidden message from an RGBA pixel buffer, or an empty
/// string if the buffer carries none. See [`stego::lsb::extract_message`].
pub fn reveal_message(pixels: &[u8]) -> String {
    stego::lsb::extract_message(pixels)
}
