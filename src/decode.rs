use crate::bitmap::Bitmap;
use crate::error::BitmapError;
use crate::limits::Limits;

/// Builder for decoding BMP bytes into a [`Bitmap`].
///
/// ```
/// use zenbmp24::{Bitmap, DecodeRequest, Limits};
///
/// let data = Bitmap::new(8, 8)?.to_bmp();
/// let limits = Limits { max_pixels: Some(1 << 20), ..Default::default() };
/// let bmp = DecodeRequest::new(&data).with_limits(&limits).decode()?;
/// assert_eq!(bmp.width(), 8);
/// # Ok::<(), zenbmp24::BitmapError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images exceeding `limits` before allocating pixel memory.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Validate the header and copy the pixel data.
    pub fn decode(self) -> Result<Bitmap, BitmapError> {
        crate::bmp::decode(self.data, self.limits)
    }
}
