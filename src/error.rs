use alloc::string::String;

/// Errors from BMP decoding, bitmap construction and file I/O.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("invalid header: signature is not \"BM\"")]
    InvalidHeader,

    #[error("invalid size: header declares {declared} bytes, input has {actual}")]
    InvalidSize { declared: u32, actual: usize },

    #[error("invalid pixel data offset {0} (expected 54)")]
    InvalidOffset(u32),

    #[error("unsupported color depth: {0} bits per pixel")]
    UnsupportedDepth(u16),

    #[error("unsupported compression method {0}")]
    UnsupportedCompression(u32),

    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimension { width: i64, height: i64 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("truncated pixel data: need {needed} bytes, got {actual}")]
    TruncatedPixelData { needed: usize, actual: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
