//! Image carrier loading and saving for the LSB channel.
//!
//! Thin wrapper over the `image` crate: decode any supported raster
//! format into RGBA, run the pure codecs over the raw buffer, and always
//! write PNG on the way out. The hidden bits live in the low bit of each
//! color byte and do not survive lossy re-encoding, so output is
//! restricted to lossless formats.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::StegoError;
use crate::stego::{self, lsb};

/// An RGBA carrier image for steganographic embedding and extraction.
pub struct Carrier {
    image: RgbaImage,
}

impl Carrier {
    /// Load a carrier from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, StegoError> {
        let image = image::open(path)
            .map_err(|e| StegoError::ImageLoad(e.to_string()))?
            .to_rgba8();
        Ok(Self { image })
    }

    /// Load a carrier from encoded image bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StegoError> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| StegoError::ImageLoad(e.to_string()))?
            .to_rgba8();
        Ok(Self { image })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Maximum message length this carrier can hold, in characters.
    pub fn max_chars(&self) -> usize {
        stego::max_chars(self.image.width(), self.image.height())
    }

    /// Embed `message`, returning a new carrier; `self` is unchanged.
    pub fn embed(&self, message: &str) -> Result<Self, StegoError> {
        let data = lsb::embed_message(self.image.as_raw(), message)?;
        let image = RgbaImage::from_raw(self.image.width(), self.image.height(), data)
            .expect("embedding preserves buffer length");
        Ok(Self { image })
    }

    /// Extract the hidden message, or an empty string if none is found.
    pub fn extract(&self) -> String {
        lsb::extract_message(self.image.as_raw())
    }

    /// Write the carrier as PNG regardless of the path's extension.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), StegoError> {
        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| StegoError::ImageSave(e.to_string()))
    }

    /// Encode the carrier as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, StegoError> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| StegoError::ImageSave(e.to_string()))?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageBuffer;

    fn gradient_carrier(width: u32, height: u32) -> Carrier {
        let image = ImageBuffer::from_fn(width, height, |x, y| {
            image::Rgba([
                ((x * 17) % 256) as u8,
                ((y * 23) % 256) as u8,
                (((x + y) * 31) % 256) as u8,
                255,
            ])
        });
        Carrier { image }
    }

    #[test]
    fn png_roundtrip_preserves_message() {
        let carrier = gradient_carrier(48, 48);
        let encoded = carrier.embed("survives png").unwrap();

        let png = encoded.to_png_bytes().unwrap();
        let reloaded = Carrier::from_bytes(&png).unwrap();
        assert_eq!(reloaded.extract(), "survives png");
    }

    #[test]
    fn capacity_matches_estimator() {
        let carrier = gradient_carrier(10, 10);
        assert_eq!(carrier.max_chars(), 28);
    }
}
