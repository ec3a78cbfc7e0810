/// Errors that can occur while reading or writing a map file.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("invalid magic bytes (expected TSRM)")]
    InvalidMagic,

    #[error("unsupported map format version {0}")]
    UnsupportedVersion(u16),

    #[error("unknown map kind {0}")]
    UnknownKind(u8),

    #[error("unknown payload encoding {0}")]
    UnknownEncoding(u8),

    #[error("file too small ({0} bytes, minimum {1})")]
    FileTooSmall(usize, usize),

    #[error("truncated file: expected {expected} bytes, got {actual}")]
    TruncatedFile { expected: usize, actual: usize },

    #[error("LZ4 decompression failed: {0}")]
    DecompressError(String),

    #[error("invalid payload size: expected {expected}, got {actual}")]
    InvalidPayloadSize { expected: usize, actual: usize },

    #[error("payload checksum mismatch (header {expected:08x}, computed {actual:08x})")]
    ChecksumMismatch { expected: u32, actual: u32 },

    #[error("payload of {0} bytes does not fit the header length field")]
    PayloadTooLarge(usize),

    #[error(transparent)]
    InvalidMap(#[from] tessera_core::TesseraError),
}
