use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemapError {
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("pixel buffer has {actual} pixels, expected {expected}")]
    PixelCountMismatch { expected: usize, actual: usize },

    #[error("byte buffer length {0} is not a multiple of 4")]
    UnalignedBytes(usize),
}
