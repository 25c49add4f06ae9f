//! The in-memory 24-bit raster.
//!
//! Pixels are kept exactly as they appear in a BMP file: rows bottom-up,
//! each row `stride` bytes long (padded to a multiple of 4), each pixel in
//! B,G,R byte order. Encoding is therefore a header plus a plain copy.

use alloc::vec;
use alloc::vec::Vec;

use rgb::RGB8;

use crate::error::BitmapError;
use crate::resolution::{DEFAULT_DPI, dpi_from_ppm, ppm_from_dpi};

/// Size of the file header plus BITMAPINFOHEADER.
pub(crate) const HEADER_LEN: usize = 54;

/// Row stride of a 24-bit scanline: `width * 3` rounded up to a multiple of 4.
pub(crate) fn row_stride(width: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(3)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
}

/// Validated stride and buffer length for a `width` x `height` bitmap.
///
/// Both dimensions must be positive and fit the signed header fields, and the
/// whole file (`54 + stride * height`) must fit the 32-bit size field.
pub(crate) fn geometry(width: u32, height: u32) -> Result<(usize, usize), BitmapError> {
    if width == 0 || height == 0 {
        return Err(BitmapError::InvalidDimension {
            width: i64::from(width),
            height: i64::from(height),
        });
    }
    let too_large = BitmapError::DimensionsTooLarge { width, height };
    if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
        return Err(too_large);
    }
    let stride = row_stride(width).ok_or(too_large)?;
    let len = stride
        .checked_mul(height as usize)
        .filter(|len| {
            len.checked_add(HEADER_LEN)
                .is_some_and(|total| u32::try_from(total).is_ok())
        })
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    Ok((stride, len))
}

/// Clamp an arbitrary channel value into `0..=255`.
fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// A 24-bit RGB image with a fixed size and a DPI tag.
///
/// Writes outside the canvas are silently ignored, while reads outside the
/// canvas return the nearest edge pixel. Neither ever fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    stride: usize,
    /// Pixels per meter, shared by both axes.
    ppm: i32,
    buf: Vec<u8>,
}

impl Bitmap {
    /// Create a black bitmap at 96 DPI.
    pub fn new(width: u32, height: u32) -> Result<Self, BitmapError> {
        Self::with_dpi(width, height, DEFAULT_DPI)
    }

    /// Create a black bitmap with the given resolution.
    pub fn with_dpi(width: u32, height: u32, dpi: i32) -> Result<Self, BitmapError> {
        Self::with_ppm(width, height, ppm_from_dpi(dpi))
    }

    pub(crate) fn with_ppm(width: u32, height: u32, ppm: i32) -> Result<Self, BitmapError> {
        let (stride, len) = geometry(width, height)?;
        Ok(Self {
            width,
            height,
            stride,
            ppm,
            buf: vec![0u8; len],
        })
    }

    /// Adopt an already validated bottom-up BGR buffer.
    pub(crate) fn from_raw_parts(
        width: u32,
        height: u32,
        stride: usize,
        ppm: i32,
        buf: Vec<u8>,
    ) -> Self {
        debug_assert_eq!(buf.len(), stride * height as usize);
        Self {
            width,
            height,
            stride,
            ppm,
            buf,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per scanline, including row padding.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Raw pixel buffer: bottom-up rows of padded BGR triples.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Resolution as stored in the header.
    pub fn pixels_per_meter(&self) -> i32 {
        self.ppm
    }

    /// Resolution in dots per inch, rounded from the stored pixels per meter.
    pub fn dpi(&self) -> i32 {
        dpi_from_ppm(self.ppm)
    }

    /// Set the resolution of both axes.
    pub fn set_dpi(&mut self, dpi: i32) {
        self.ppm = ppm_from_dpi(dpi);
    }

    /// Fill every pixel with one color. Channels are clamped to `0..=255`.
    ///
    /// Row padding is filled with the blue value.
    pub fn clear(&mut self, r: i32, g: i32, b: i32) {
        let (r, g, b) = (clamp_channel(r), clamp_channel(g), clamp_channel(b));
        let mut line = vec![b; self.stride];
        for px in line[..self.width as usize * 3].chunks_exact_mut(3) {
            px[1] = g;
            px[2] = r;
        }
        for row in self.buf.chunks_exact_mut(self.stride) {
            row.copy_from_slice(&line);
        }
    }

    /// Fill every pixel with white.
    pub fn clear_white(&mut self) {
        self.clear(255, 255, 255);
    }

    /// Write one pixel. Channels are clamped to `0..=255`; coordinates
    /// outside the canvas leave the image untouched.
    pub fn set_pixel(&mut self, x: i32, y: i32, r: i32, g: i32, b: i32) {
        let (Some(x), Some(y)) = (self.column(x), self.line(y)) else {
            return;
        };
        let off = self.offset(x, y);
        self.buf[off] = clamp_channel(b);
        self.buf[off + 1] = clamp_channel(g);
        self.buf[off + 2] = clamp_channel(r);
    }

    /// Read one pixel. Coordinates are clamped onto the canvas, so reads
    /// past an edge return the edge pixel.
    pub fn get_pixel(&self, x: i32, y: i32) -> RGB8 {
        let x = x.clamp(0, self.width as i32 - 1) as u32;
        let y = y.clamp(0, self.height as i32 - 1) as u32;
        let off = self.offset(x, y);
        RGB8::new(self.buf[off + 2], self.buf[off + 1], self.buf[off])
    }

    fn column(&self, x: i32) -> Option<u32> {
        u32::try_from(x).ok().filter(|&x| x < self.width)
    }

    fn line(&self, y: i32) -> Option<u32> {
        u32::try_from(y).ok().filter(|&y| y < self.height)
    }

    /// Byte offset of in-bounds `(x, y)`; `y = 0` is the top row, stored last.
    fn offset(&self, x: u32, y: u32) -> usize {
        (self.height - 1 - y) as usize * self.stride + x as usize * 3
    }

    /// Copy into a top-down, unpadded [`imgref::ImgVec`].
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<RGB8> {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut pixels = Vec::with_capacity(w * h);
        for row in self.buf.chunks_exact(self.stride).rev() {
            pixels.extend(
                row[..w * 3]
                    .chunks_exact(3)
                    .map(|bgr| RGB8::new(bgr[2], bgr[1], bgr[0])),
            );
        }
        imgref::ImgVec::new(pixels, w, h)
    }

    /// Build a bitmap from a top-down [`imgref::ImgRef`].
    #[cfg(feature = "imgref")]
    pub fn from_imgref(img: imgref::ImgRef<'_, RGB8>, dpi: i32) -> Result<Self, BitmapError> {
        let width = u32::try_from(img.width()).unwrap_or(u32::MAX);
        let height = u32::try_from(img.height()).unwrap_or(u32::MAX);
        let mut bmp = Self::with_dpi(width, height, dpi)?;
        for (y, src) in img.rows().enumerate() {
            let start = bmp.offset(0, y as u32);
            let dst = &mut bmp.buf[start..start + img.width() * 3];
            for (bgr, px) in dst.chunks_exact_mut(3).zip(src) {
                bgr.copy_from_slice(&[px.b, px.g, px.r]);
            }
        }
        Ok(bmp)
    }
}
