//! BMP encoder: 54-byte header followed by the raw bottom-up buffer.

use alloc::vec::Vec;

use crate::bitmap::{Bitmap, HEADER_LEN};

/// Encode a bitmap to BMP bytes.
///
/// Cannot fail: [`Bitmap`] construction already guarantees the file size fits
/// the 32-bit header field.
pub(crate) fn encode_bmp(bitmap: &Bitmap) -> Vec<u8> {
    let pixels = bitmap.as_bytes();
    let file_size = HEADER_LEN + pixels.len();

    let mut out = Vec::with_capacity(file_size);
    write_bmp_header(
        &mut out,
        file_size as u32,
        bitmap.width(),
        bitmap.height(),
        bitmap.pixels_per_meter(),
    );
    out.extend_from_slice(pixels);
    out
}

fn write_bmp_header(out: &mut Vec<u8>, file_size: u32, width: u32, height: u32, ppm: i32) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(HEADER_LEN as u32).to_le_bytes()); // data offset

    // DIB header (BITMAPINFOHEADER, 40 bytes)
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&0u32.to_le_bytes()); // image size, optional for BI_RGB
    out.extend_from_slice(&ppm.to_le_bytes()); // h resolution
    out.extend_from_slice(&ppm.to_le_bytes()); // v resolution
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
}
