use tessera_core::constants::{START_MODULUS, START_PRIME};
use tessera_core::{rolling_hash, DisplacementMap, Grid};

use crate::compress;
use crate::error::PersistError;
use crate::format::*;
use crate::quantize;

/// Parsed map file.
#[derive(Debug)]
pub struct LoadedMap {
    pub header: MapHeader,
    pub encoding: Encoding,
    pub map: DisplacementMap,
}

fn decode_payload(payload: &[u8], encoding: Encoding) -> Vec<f32> {
    match encoding {
        Encoding::F32 => payload
            .chunks_exact(4)
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect(),
        Encoding::Rgb8 => quantize::dequantize(payload),
    }
}

/// Load and parse a map file from raw bytes.
pub fn load(bytes: &[u8]) -> Result<LoadedMap, PersistError> {
    if bytes.len() < HEADER_SIZE {
        return Err(PersistError::FileTooSmall(bytes.len(), HEADER_SIZE));
    }

    let header: MapHeader = bytemuck::pod_read_unaligned(&bytes[..HEADER_SIZE]);
    let (kind, encoding) = validate_header(&header)?;
    let grid = Grid::new(header.width as i64, header.height as i64)?;

    let payload_end = HEADER_SIZE + header.payload_len as usize;
    if bytes.len() < payload_end {
        return Err(PersistError::TruncatedFile {
            expected: payload_end,
            actual: bytes.len(),
        });
    }
    if bytes.len() > payload_end {
        log::warn!(
            "ignoring {} trailing bytes after map payload",
            bytes.len() - payload_end
        );
    }

    let expected_len = grid.total() * encoding.bytes_per_cell();
    let payload = compress::decompress_payload(&bytes[HEADER_SIZE..payload_end], expected_len)?;

    let checksum = rolling_hash(&payload, START_PRIME, START_MODULUS)?;
    if checksum != header.checksum {
        return Err(PersistError::ChecksumMismatch {
            expected: header.checksum,
            actual: checksum,
        });
    }

    let values = decode_payload(&payload, encoding);
    let map = DisplacementMap::from_raw(grid, kind, values)?;

    log::debug!(
        "loaded {:?} map {}x{} ({:?})",
        kind,
        grid.width(),
        grid.height(),
        encoding
    );

    Ok(LoadedMap {
        header,
        encoding,
        map,
    })
}
