use tessera_core::MapKind;

use crate::error::PersistError;

// The header is written with `bytemuck::bytes_of`, which is only the
// little-endian file layout on little-endian targets.
#[cfg(not(target_endian = "little"))]
compile_error!("tessera map files require a little-endian target");

/// Magic bytes identifying a tessera map file.
pub const MAGIC: [u8; 4] = *b"TSRM";

/// Current map format version.
pub const FORMAT_VERSION: u16 = 1;

/// Size of the file header in bytes.
pub const HEADER_SIZE: usize = 24;

/// Payload bytes per cell for each encoding.
pub const F32_BYTES_PER_CELL: usize = 8;
pub const RGB8_BYTES_PER_CELL: usize = 3;

/// How displacement values are stored in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    /// Little-endian `f32` pairs, lossless.
    #[default]
    F32,
    /// One RGB8 texel per cell: red = dx, green = dy, blue = 0.
    Rgb8,
}

impl Encoding {
    pub fn to_u8(self) -> u8 {
        match self {
            Encoding::F32 => 0,
            Encoding::Rgb8 => 1,
        }
    }

    pub fn from_u8(value: u8) -> Result<Self, PersistError> {
        match value {
            0 => Ok(Encoding::F32),
            1 => Ok(Encoding::Rgb8),
            other => Err(PersistError::UnknownEncoding(other)),
        }
    }

    pub fn bytes_per_cell(self) -> usize {
        match self {
            Encoding::F32 => F32_BYTES_PER_CELL,
            Encoding::Rgb8 => RGB8_BYTES_PER_CELL,
        }
    }
}

pub fn kind_to_u8(kind: MapKind) -> u8 {
    match kind {
        MapKind::Shuffle => 0,
        MapKind::Unshuffle => 1,
    }
}

pub fn kind_from_u8(value: u8) -> Result<MapKind, PersistError> {
    match value {
        0 => Ok(MapKind::Shuffle),
        1 => Ok(MapKind::Unshuffle),
        other => Err(PersistError::UnknownKind(other)),
    }
}

/// Map file header. Fixed 24 bytes, repr(C) for byte-level serialization.
///
/// `checksum` is the rolling hash residue of the uncompressed payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MapHeader {
    pub magic: [u8; 4],
    pub version: u16,
    pub kind: u8,
    pub encoding: u8,
    pub width: u32,
    pub height: u32,
    pub payload_len: u32,
    pub checksum: u32,
}

/// Check magic and version, returning the decoded kind and encoding.
pub fn validate_header(header: &MapHeader) -> Result<(MapKind, Encoding), PersistError> {
    if header.magic != MAGIC {
        return Err(PersistError::InvalidMagic);
    }
    if header.version != FORMAT_VERSION {
        return Err(PersistError::UnsupportedVersion(header.version));
    }
    Ok((kind_from_u8(header.kind)?, Encoding::from_u8(header.encoding)?))
}
