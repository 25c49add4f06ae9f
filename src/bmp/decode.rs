//! 24-bit uncompressed BMP decoder.
//!
//! Only the exact layout produced by the encoder is accepted: a 14-byte file
//! header and a 40-byte BITMAPINFOHEADER, pixel data at offset 54, 24 bits per
//! pixel, no compression, bottom-up rows.

use crate::bitmap::{Bitmap, HEADER_LEN, geometry};
use crate::error::BitmapError;

/// Fields of interest from a validated header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct BmpHeader {
    pub file_size: u32,
    pub width: u32,
    pub height: u32,
    /// Horizontal pixels per meter; the vertical field is ignored.
    pub ppm: i32,
}

fn le_u16(data: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([data[at], data[at + 1]])
}

fn le_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

fn le_i32(data: &[u8], at: usize) -> i32 {
    le_u32(data, at) as i32
}

/// Parse and validate the 54-byte header.
///
/// Checks run in a fixed order (signature, declared size, data offset, bit
/// count, compression) and the first failure is reported.
pub(crate) fn parse_bmp_header(data: &[u8]) -> Result<BmpHeader, BitmapError> {
    if !data.starts_with(b"BM") {
        return Err(BitmapError::InvalidHeader);
    }
    if data.len() < HEADER_LEN {
        return Err(BitmapError::UnexpectedEof);
    }

    let file_size = le_u32(data, 2);
    if file_size as usize > data.len() {
        return Err(BitmapError::InvalidSize {
            declared: file_size,
            actual: data.len(),
        });
    }

    let data_offset = le_u32(data, 10);
    if data_offset as usize != HEADER_LEN {
        return Err(BitmapError::InvalidOffset(data_offset));
    }

    let width = le_i32(data, 18);
    let height = le_i32(data, 22);

    let bit_count = le_u16(data, 28);
    if bit_count != 24 {
        return Err(BitmapError::UnsupportedDepth(bit_count));
    }

    let compression = le_u32(data, 30);
    if compression != 0 {
        return Err(BitmapError::UnsupportedCompression(compression));
    }

    // Negative height would mean top-down rows, which this layout never uses.
    if width <= 0 || height <= 0 {
        return Err(BitmapError::InvalidDimension {
            width: i64::from(width),
            height: i64::from(height),
        });
    }

    Ok(BmpHeader {
        file_size,
        width: width as u32,
        height: height as u32,
        ppm: le_i32(data, 38),
    })
}

/// Copy the pixel data following a validated header into a new [`Bitmap`].
///
/// Exactly `stride * height` bytes are taken from offset 54; anything after
/// them is ignored.
pub(crate) fn decode_bmp_pixels(data: &[u8], header: &BmpHeader) -> Result<Bitmap, BitmapError> {
    let (stride, len) = geometry(header.width, header.height)?;
    let pixel_data = data.get(HEADER_LEN..).ok_or(BitmapError::UnexpectedEof)?;
    let pixels = pixel_data
        .get(..len)
        .ok_or(BitmapError::TruncatedPixelData {
            needed: len,
            actual: pixel_data.len(),
        })?;
    Ok(Bitmap::from_raw_parts(
        header.width,
        header.height,
        stride,
        header.ppm,
        pixels.to_vec(),
    ))
}
