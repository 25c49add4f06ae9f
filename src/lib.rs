//! # zenbmp24
//!
//! A 24-bit RGB bitmap held in memory in BMP row order, with an encoder and a
//! strict decoder for uncompressed 24-bit BMP files.
//!
//! ## Pixel model
//!
//! [`Bitmap`] stores rows bottom-up, padded to 4 bytes, in B,G,R order (the
//! exact BMP pixel layout), so encoding is a header plus one copy. Coordinates
//! are top-down: `(0, 0)` is the top-left pixel.
//!
//! - [`Bitmap::set_pixel`] ignores writes outside the canvas.
//! - [`Bitmap::get_pixel`] clamps reads onto the canvas, returning the edge pixel.
//! - Channel values are clamped into `0..=255`.
//!
//! ## Supported files
//!
//! Only the layout written by [`encode_bmp`] is accepted: pixel data at offset
//! 54, 24 bits per pixel, no compression, positive width and height. Anything
//! else is rejected with a specific [`BitmapError`].
//!
//! ## Non-Goals
//!
//! - Compressed, palettized, or non-24-bit BMP variants
//! - Alpha channels
//! - Other image formats
//!
//! ## Usage
//!
//! ```
//! use zenbmp24::{Bitmap, decode_bmp, encode_bmp};
//!
//! let mut canvas = Bitmap::new(64, 64)?;
//! canvas.clear(224, 224, 224);
//! canvas.set_pixel(10, 10, 255, 0, 0);
//!
//! let corner = canvas.clip(0, 0, 15, 15);
//! let mut other = Bitmap::with_dpi(32, 32, 150)?;
//! other.paste(corner.as_ref(), 8, 8);
//!
//! let bytes = encode_bmp(&other);
//! let back = decode_bmp(&bytes)?;
//! assert_eq!(back.get_pixel(18, 18), zenbmp24::RGB8::new(255, 0, 0));
//! assert_eq!(back.dpi(), 150);
//! # Ok::<(), zenbmp24::BitmapError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bitmap;
mod bmp;
mod decode;
mod error;
mod info;
mod limits;
mod ops;
pub mod resolution;

// Re-exports
pub use bitmap::Bitmap;
pub use decode::DecodeRequest;
pub use error::BitmapError;
pub use info::ImageInfo;
pub use limits::Limits;
pub use rgb::RGB8;

/// Decode a 24-bit uncompressed BMP.
pub fn decode_bmp(data: &[u8]) -> Result<Bitmap, BitmapError> {
    DecodeRequest::new(data).decode()
}

/// Encode a bitmap as a 24-bit uncompressed BMP.
pub fn encode_bmp(bitmap: &Bitmap) -> alloc::vec::Vec<u8> {
    bmp::encode(bitmap)
}
