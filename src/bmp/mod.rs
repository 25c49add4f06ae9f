//! 24-bit uncompressed BMP codec (internal).
//!
//! Use top-level [`crate::decode_bmp`], [`crate::encode_bmp`], or
//! [`Bitmap::read`] / [`Bitmap::write`].

pub(crate) mod decode;
mod encode;

use crate::bitmap::{Bitmap, geometry};
use crate::error::BitmapError;
use crate::limits::Limits;
use alloc::vec::Vec;

/// Decode BMP data, enforcing `limits` before the pixel buffer is allocated.
pub(crate) fn decode(data: &[u8], limits: Option<&Limits>) -> Result<Bitmap, BitmapError> {
    let header = decode::parse_bmp_header(data)?;
    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
        let (_, len) = geometry(header.width, header.height)?;
        limits.check_memory(len)?;
    }
    decode::decode_bmp_pixels(data, &header)
}

/// Encode to BMP.
pub(crate) fn encode(bitmap: &Bitmap) -> Vec<u8> {
    encode::encode_bmp(bitmap)
}

impl Bitmap {
    /// Encode to BMP bytes.
    pub fn to_bmp(&self) -> Vec<u8> {
        encode(self)
    }

    /// Load a BMP file.
    ///
    /// The whole file is read and the handle closed before decoding starts.
    #[cfg(feature = "std")]
    pub fn read(path: impl AsRef<std::path::Path>) -> Result<Self, BitmapError> {
        let data = std::fs::read(path)?;
        decode(&data, None)
    }

    /// Write this bitmap as a BMP file, replacing any existing file.
    #[cfg(feature = "std")]
    pub fn write(&self, path: impl AsRef<std::path::Path>) -> Result<(), BitmapError> {
        std::fs::write(path, self.to_bmp())?;
        Ok(())
    }
}
