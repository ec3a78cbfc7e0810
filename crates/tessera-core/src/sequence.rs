//! Seeded sine sequence that supplies one sort key per cell.
//!
//! `value(i) = sin(start_phase + i * step)`. The phase and step both come from
//! the seed through [`deterministic_hash`], so every key can be computed on its
//! own without walking the sequence.

use std::f64::consts::PI;

use crate::constants::{START_MODULUS, START_PRIME, STEP_MODULUS, STEP_PRIME, STEP_SUFFIX};
use crate::error::TesseraError;
use crate::grid::Grid;
use crate::hash::deterministic_hash;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSequence {
    start_phase: f64,
    step: f64,
}

impl PhaseSequence {
    /// Derive the phase parameters for `seed` on `grid`.
    ///
    /// The step is scaled by the longer grid side so that larger grids sweep
    /// the sine more slowly per cell.
    pub fn from_seed(grid: &Grid, seed: &[u8]) -> Result<Self, TesseraError> {
        if seed.is_empty() {
            return Err(TesseraError::invalid("seed must not be empty"));
        }

        let start_hash = deterministic_hash(seed, START_PRIME, START_MODULUS)?;

        let mut step_seed = Vec::with_capacity(seed.len() + STEP_SUFFIX.len());
        step_seed.extend_from_slice(seed);
        step_seed.extend_from_slice(STEP_SUFFIX);
        let step_hash = deterministic_hash(&step_seed, STEP_PRIME, STEP_MODULUS)?;

        Ok(Self {
            start_phase: start_hash * PI * 2.0,
            step: step_hash * PI / grid.max_side() as f64,
        })
    }

    pub fn start_phase(&self) -> f64 {
        self.start_phase
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Sort key for linear cell `index`.
    #[inline]
    pub fn value(&self, index: usize) -> f64 {
        (self.start_phase + index as f64 * self.step).sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_seed_rejected() {
        let grid = Grid::new(4, 4).expect("grid");
        assert!(matches!(
            PhaseSequence::from_seed(&grid, b""),
            Err(TesseraError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_phase_parameters() {
        let grid = Grid::new(8, 4).expect("grid");
        let seq = PhaseSequence::from_seed(&grid, b"abc").expect("sequence");

        let start = deterministic_hash(b"abc", 31, u32::MAX).expect("hash");
        let step = deterministic_hash(b"abc_step", 37, u32::MAX - 1).expect("hash");
        assert_eq!(seq.start_phase(), start * PI * 2.0);
        assert_eq!(seq.step(), step * PI / 8.0);
        assert!((0.0..2.0 * PI).contains(&seq.start_phase()));
        assert!((0.0..PI / 8.0).contains(&seq.step()));
    }

    #[test]
    fn test_values_bounded() {
        let grid = Grid::new(16, 16).expect("grid");
        let seq = PhaseSequence::from_seed(&grid, b"bounded").expect("sequence");
        for i in 0..grid.total() {
            let v = seq.value(i);
            assert!((-1.0..=1.0).contains(&v), "value {v} at {i} out of range");
        }
    }

    #[test]
    fn test_step_depends_on_longer_side() {
        let wide = Grid::new(10, 2).expect("grid");
        let tall = Grid::new(2, 10).expect("grid");
        let a = PhaseSequence::from_seed(&wide, b"seed").expect("sequence");
        let b = PhaseSequence::from_seed(&tall, b"seed").expect("sequence");
        assert_eq!(a, b);
    }
}
