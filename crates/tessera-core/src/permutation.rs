//! Seed-selected bijection over the linear cell indices of a grid.
//!
//! The forward map is the rank of each cell's sort key: pairs
//! `(sequence value, index)` are ordered lexicographically, and `π(i)` is the
//! position of cell `i` in that order. The index tie-break makes the order
//! total, so the result never depends on sort stability.

use crate::error::TesseraError;
use crate::grid::Grid;
use crate::sequence::PhaseSequence;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    grid: Grid,
    /// `forward[original] = shuffled`
    forward: Vec<u32>,
    /// `inverse[shuffled] = original`
    inverse: Vec<u32>,
}

impl Permutation {
    /// Build the permutation selected by `seed` on `grid`.
    pub fn from_seed(grid: Grid, seed: &[u8]) -> Result<Self, TesseraError> {
        let sequence = PhaseSequence::from_seed(&grid, seed)?;
        let total = grid.total();

        let mut keyed: Vec<(f64, u32)> = (0..total)
            .map(|i| (sequence.value(i), i as u32))
            .collect();
        keyed.sort_unstable_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        let mut forward = vec![0u32; total];
        for (rank, &(_, original)) in keyed.iter().enumerate() {
            forward[original as usize] = rank as u32;
        }

        let mut inverse = vec![0u32; total];
        for (original, &shuffled) in forward.iter().enumerate() {
            inverse[shuffled as usize] = original as u32;
        }

        log::debug!(
            "built permutation over {}x{} grid (phase {:.6}, step {:.6})",
            grid.width(),
            grid.height(),
            sequence.start_phase(),
            sequence.step()
        );

        Ok(Self {
            grid,
            forward,
            inverse,
        })
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// `π(original)`: where the cell at `original` moves to.
    #[inline]
    pub fn forward(&self, original: usize) -> usize {
        self.forward[original] as usize
    }

    /// `π⁻¹(shuffled)`: which original cell lands at `shuffled`.
    #[inline]
    pub fn inverse(&self, shuffled: usize) -> usize {
        self.inverse[shuffled] as usize
    }

    pub fn forward_table(&self) -> &[u32] {
        &self.forward
    }

    pub fn inverse_table(&self) -> &[u32] {
        &self.inverse
    }
}
