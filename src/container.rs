//! Self-describing encrypted file container.
//!
//! Wire layout (all integers little-endian):
//!
//! ```text
//! offset  size       field
//!  0      16         salt (PBKDF2)
//! 16      12         IV / AES-GCM nonce
//! 28       2         filename length (u16 LE)
//! 30       N         filename (UTF-8)
//! 30+N    remaining  ciphertext ∥ 16-byte auth tag
//! ```
//!
//! The container carries everything needed to decrypt except the
//! password. Salt and IV are drawn fresh on every seal; a `(key, IV)`
//! pair is never reused.

use zeroize::Zeroizing;

use crate::crypto::{self, IV_LEN};
use crate::error::ContainerError;

/// Salt length for key derivation.
pub const SALT_LEN: usize = 16;

/// Width of the filename length field.
pub const FILENAME_LEN_BYTES: usize = 2;

/// Minimum structurally valid container: header with an empty filename
/// and no ciphertext is already rejected later, but anything shorter than
/// this cannot even be sliced.
pub const MIN_LEN: usize = SALT_LEN + IV_LEN + FILENAME_LEN_BYTES;

/// An encrypted `(bytes, filename)` pair ready for storage or transfer.
#[derive(Debug, Clone)]
pub struct FileContainer {
    salt: [u8; SALT_LEN],
    iv: [u8; IV_LEN],
    filename: String,
    /// AEAD output: ciphertext with the 16-byte tag appended.
    ciphertext: Vec<u8>,
}

impl FileContainer {
    /// Encrypt `plaintext` under `password`, recording `filename` in the
    /// clear portion of the header.
    ///
    /// The filename length check happens before any cryptographic work so
    /// an over-long name never costs a key derivation.
    pub fn seal(
        plaintext: &[u8],
        filename: &str,
        password: &str,
    ) -> Result<Self, ContainerError> {
        let filename_len = filename.len();
        if filename_len > u16::MAX as usize {
            return Err(ContainerError::FilenameTooLong(filename_len));
        }

        let salt = crypto::random_bytes::<SALT_LEN>()?;
        let iv = crypto::random_bytes::<IV_LEN>()?;

        let key = crypto::derive_key(password, &salt);
        let ciphertext = crypto::aead_seal(&key, &iv, plaintext)?;

        Ok(Self {
            salt,
            iv,
            filename: filename.to_string(),
            ciphertext,
        })
    }

    /// Verify and decrypt the payload.
    ///
    /// Fails with [`ContainerError::Crypto`] on a wrong password or any
    /// modified byte in the salt, IV, ciphertext, or tag — the causes are
    /// indistinguishable and no retry can succeed with the same inputs.
    pub fn open(&self, password: &str) -> Result<Zeroizing<Vec<u8>>, ContainerError> {
        let key = crypto::derive_key(password, &self.salt);
        let plaintext = crypto::aead_open(&key, &self.iv, &self.ciphertext)?;
        Ok(Zeroizing::new(plaintext))
    }

    /// Original filename recorded at seal time.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Serialize to the wire layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let name = self.filename.as_bytes();
        let mut out =
            Vec::with_capacity(MIN_LEN + name.len() + self.ciphertext.len());
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.iv);
        out.extend_from_slice(&(name.len() as u16).to_le_bytes());
        out.extend_from_slice(name);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Parse the wire layout. Only structural validation happens here;
    /// authenticity is checked by [`FileContainer::open`].
    pub fn from_bytes(input: &[u8]) -> Result<Self, ContainerError> {
        if input.len() < MIN_LEN {
            return Err(ContainerError::Format(
                "shorter than the minimum container header",
            ));
        }

        let mut salt = [0u8; SALT_LEN];
        salt.copy_from_slice(&input[..SALT_LEN]);
        let mut iv = [0u8; IV_LEN];
        iv.copy_from_slice(&input[SALT_LEN..SALT_LEN + IV_LEN]);

        let filename_len = u16::from_le_bytes(
            input[SALT_LEN + IV_LEN..MIN_LEN]
                .try_into()
                .expect("slice length checked"),
        ) as usize;

        let filename_end = MIN_LEN + filename_len;
        if filename_end > input.len() {
            return Err(ContainerError::Format(
                "filename length field points past end of buffer",
            ));
        }

        // Lossy decode: the encoder only ever writes well-formed UTF-8,
        // so this is lossless for any container we produced. The filename
        // sits outside the AEAD envelope and is presentation-only.
        let filename = String::from_utf8_lossy(&input[MIN_LEN..filename_end]).into_owned();
        let ciphertext = input[filename_end..].to_vec();

        Ok(Self {
            salt,
            iv,
            filename,
            ciphertext,
        })
    }
}
