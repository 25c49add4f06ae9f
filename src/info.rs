use crate::bmp::decode::parse_bmp_header;
use crate::error::BitmapError;
use crate::resolution::dpi_from_ppm;

/// Header-level facts about a BMP file, read without touching pixel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    /// Resolution rounded from `pixels_per_meter`.
    pub dpi: i32,
    pub pixels_per_meter: i32,
    /// File size declared in the header (may be smaller than the input).
    pub file_size: u32,
}

impl ImageInfo {
    /// Probe the header, applying the same validation as a full decode.
    ///
    /// Truncated pixel data is not detected here.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BitmapError> {
        let header = parse_bmp_header(data)?;
        Ok(Self {
            width: header.width,
            height: header.height,
            dpi: dpi_from_ppm(header.ppm),
            pixels_per_meter: header.ppm,
            file_size: header.file_size,
        })
    }
}
