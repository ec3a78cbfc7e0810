use crate::error::PersistError;

/// Compress a map payload using LZ4 with the uncompressed size prepended.
pub fn compress_payload(data: &[u8]) -> Vec<u8> {
    lz4_flex::compress_prepend_size(data)
}

/// Decompress an LZ4 payload, validating the output size.
///
/// The prepended size is checked against `expected_len` before anything is
/// allocated for the output.
pub fn decompress_payload(compressed: &[u8], expected_len: usize) -> Result<Vec<u8>, PersistError> {
    let prefix: [u8; 4] = compressed
        .get(..4)
        .and_then(|b| b.try_into().ok())
        .ok_or_else(|| PersistError::DecompressError("missing size prefix".to_string()))?;
    let declared = u32::from_le_bytes(prefix) as usize;
    if declared != expected_len {
        return Err(PersistError::InvalidPayloadSize {
            expected: expected_len,
            actual: declared,
        });
    }

    let decompressed = lz4_flex::decompress_size_prepended(compressed)
        .map_err(|e| PersistError::DecompressError(e.to_string()))?;

    if decompressed.len() != expected_len {
        return Err(PersistError::InvalidPayloadSize {
            expected: expected_len,
            actual: decompressed.len(),
        });
    }

    Ok(decompressed)
}
