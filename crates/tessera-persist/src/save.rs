use tessera_core::constants::{START_MODULUS, START_PRIME};
use tessera_core::{rolling_hash, DisplacementMap};

use crate::compress;
use crate::error::PersistError;
use crate::format::*;
use crate::quantize;

/// Serialize the raw (uncompressed) payload for `map` in `encoding`.
pub fn encode_payload(map: &DisplacementMap, encoding: Encoding) -> Vec<u8> {
    match encoding {
        Encoding::F32 => {
            let values = map.as_slice();
            let mut out = Vec::with_capacity(values.len() * 4);
            for v in values {
                out.extend_from_slice(&v.to_le_bytes());
            }
            out
        }
        Encoding::Rgb8 => quantize::quantize(map.as_slice()),
    }
}

/// Serialize a displacement map into the tessera map binary format.
///
/// Layout: header (24B) + LZ4 block with prepended size.
pub fn save(map: &DisplacementMap, encoding: Encoding) -> Result<Vec<u8>, PersistError> {
    let payload = encode_payload(map, encoding);
    let checksum = rolling_hash(&payload, START_PRIME, START_MODULUS)?;
    let compressed = compress::compress_payload(&payload);
    let payload_len = u32::try_from(compressed.len())
        .map_err(|_| PersistError::PayloadTooLarge(compressed.len()))?;

    let grid = map.grid();
    let header = MapHeader {
        magic: MAGIC,
        version: FORMAT_VERSION,
        kind: kind_to_u8(map.kind()),
        encoding: encoding.to_u8(),
        width: grid.width(),
        height: grid.height(),
        payload_len,
        checksum,
    };

    let mut output = Vec::with_capacity(HEADER_SIZE + compressed.len());
    output.extend_from_slice(bytemuck::bytes_of(&header));
    output.extend_from_slice(&compressed);

    log::debug!(
        "saved {:?} map {}x{} as {:?} ({} payload bytes, {} compressed)",
        map.kind(),
        grid.width(),
        grid.height(),
        encoding,
        payload.len(),
        compressed.len()
    );

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::generate;

    #[test]
    fn test_save_produces_valid_binary() {
        let maps = generate(6, 4, "save-test").expect("maps");
        let data = save(&maps.unshuffle, Encoding::F32).expect("save");

        assert_eq!(&data[0..4], b"TSRM");
        let version = u16::from_le_bytes([data[4], data[5]]);
        assert_eq!(version, FORMAT_VERSION);
        assert_eq!(data[6], 1, "unshuffle kind");
        assert_eq!(data[7], 0, "f32 encoding");
        assert_eq!(u32::from_le_bytes(data[8..12].try_into().expect("slice")), 6);
        assert_eq!(u32::from_le_bytes(data[12..16].try_into().expect("slice")), 4);

        let payload_len = u32::from_le_bytes(data[16..20].try_into().expect("slice"));
        assert_eq!(data.len(), HEADER_SIZE + payload_len as usize);
    }

    #[test]
    fn test_payload_sizes() {
        let maps = generate(5, 5, "sizes").expect("maps");
        assert_eq!(encode_payload(&maps.shuffle, Encoding::F32).len(), 25 * 8);
        assert_eq!(encode_payload(&maps.shuffle, Encoding::Rgb8).len(), 25 * 3);
    }

    #[test]
    fn test_checksum_matches_payload() {
        let maps = generate(9, 3, "checksum").expect("maps");
        let data = save(&maps.shuffle, Encoding::Rgb8).expect("save");
        let header: MapHeader = bytemuck::pod_read_unaligned(&data[..HEADER_SIZE]);
        let payload = encode_payload(&maps.shuffle, Encoding::Rgb8);
        let expected = rolling_hash(&payload, START_PRIME, START_MODULUS).expect("hash");
        assert_eq!(header.checksum, expected);
    }
}
