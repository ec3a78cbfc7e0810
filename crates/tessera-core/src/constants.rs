//! Hash parameters and defaults shared by the generator, the map file format
//! and the CLI. Changing any of these changes every permutation ever produced.

/// Prime used when hashing the seed into the starting phase.
pub const START_PRIME: u32 = 31;

/// Modulus used when hashing the seed into the starting phase (2^32 - 1).
pub const START_MODULUS: u32 = u32::MAX;

/// Prime used when hashing the seed into the phase step.
pub const STEP_PRIME: u32 = 37;

/// Modulus used when hashing the seed into the phase step (2^32 - 2).
pub const STEP_MODULUS: u32 = u32::MAX - 1;

/// Appended to the seed before deriving the phase step.
pub const STEP_SUFFIX: &[u8] = b"_step";

/// Number of `f32` values stored per cell (dx, dy).
pub const CHANNELS_PER_CELL: usize = 2;

/// Default map side length used by the generator tooling.
pub const DEFAULT_MAP_SIZE: u32 = 80;
