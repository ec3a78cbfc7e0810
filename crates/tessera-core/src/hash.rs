//! Deterministic rolling polynomial hash over raw bytes.
//!
//! Pure function, no state. Not collision or preimage resistant: it exists to
//! turn a seed string into reproducible phase parameters, and to fingerprint
//! map payloads on disk.

use crate::error::TesseraError;

/// Fold `bytes` into a residue in `[0, modulus)`.
///
/// Each step computes `h = (h * prime + byte) mod modulus` with a 64-bit
/// intermediate, so the product never wraps before the reduction.
pub fn rolling_hash(bytes: &[u8], prime: u32, modulus: u32) -> Result<u32, TesseraError> {
    if modulus == 0 {
        return Err(TesseraError::invalid("hash modulus must be non-zero"));
    }

    let modulus = modulus as u64;
    let prime = prime as u64;
    let mut h = 0u64;
    for &b in bytes {
        // h < 2^32 and prime < 2^32, so h * prime + 255 < 2^64.
        h = (h * prime + b as u64) % modulus;
    }

    Ok(h as u32)
}

/// Hash `bytes` to a normalized value in `[0, 1)`.
///
/// The empty string hashes to `0.0`.
pub fn deterministic_hash(bytes: &[u8], prime: u32, modulus: u32) -> Result<f64, TesseraError> {
    let h = rolling_hash(bytes, prime, modulus)?;
    Ok(h as f64 / modulus as f64)
}
