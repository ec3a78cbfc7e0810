pub mod constants;
pub mod error;
pub mod grid;
pub mod hash;
pub mod offset;
pub mod permutation;
pub mod sequence;

pub use error::TesseraError;
pub use grid::Grid;
pub use hash::{deterministic_hash, rolling_hash};
pub use offset::{generate, DisplacementMap, MapKind, OffsetMaps};
pub use permutation::Permutation;
