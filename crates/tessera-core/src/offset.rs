//! Displacement-vector encodings of a [`Permutation`].
//!
//! Each map stores one normalized `(dx, dy)` pair per cell, row-major and
//! interleaved, which is the memory layout of a two-channel float texture of
//! the grid's size. A sampler adds the pair at a cell to that cell's
//! normalized coordinate to reach the partner cell in the other space.
//!
//! * The shuffle map, at shuffled cell `t`, points to original cell `π⁻¹(t)`.
//! * The unshuffle map, at original cell `o`, points to shuffled cell `π(o)`.

use glam::{UVec2, Vec2};

use crate::constants::CHANNELS_PER_CELL;
use crate::error::TesseraError;
use crate::grid::Grid;
use crate::permutation::Permutation;

/// Which direction a displacement map encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapKind {
    Shuffle,
    Unshuffle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplacementMap {
    grid: Grid,
    kind: MapKind,
    data: Vec<f32>,
}

impl DisplacementMap {
    /// Wrap an existing interleaved buffer, checking its length against `grid`.
    pub fn from_raw(grid: Grid, kind: MapKind, data: Vec<f32>) -> Result<Self, TesseraError> {
        let expected = grid.total() * CHANNELS_PER_CELL;
        if data.len() != expected {
            return Err(TesseraError::invalid(format!(
                "displacement buffer has {} values, expected {expected}",
                data.len()
            )));
        }
        Ok(Self { grid, kind, data })
    }

    fn encode(permutation: &Permutation, kind: MapKind) -> Self {
        let grid = permutation.grid();
        let w = grid.width() as f64;
        let h = grid.height() as f64;
        let mut data = vec![0.0f32; grid.total() * CHANNELS_PER_CELL];

        for (index, cell) in grid.cells().enumerate() {
            let partner = match kind {
                MapKind::Shuffle => permutation.inverse(index),
                MapKind::Unshuffle => permutation.forward(index),
            };
            let target = grid.decode(partner);
            let dx = (target.x as f64 - cell.x as f64) / w;
            let dy = (target.y as f64 - cell.y as f64) / h;
            data[index * CHANNELS_PER_CELL] = dx as f32;
            data[index * CHANNELS_PER_CELL + 1] = dy as f32;
        }

        Self { grid, kind, data }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn kind(&self) -> MapKind {
        self.kind
    }

    /// Interleaved `(dx, dy)` values, `2 * total` long.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Native-endian byte view for uploading as an RG32F texture.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Displacement stored at `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` lies outside the map's grid.
    #[inline]
    pub fn get(&self, cell: UVec2) -> Vec2 {
        let i = self.grid.encode(cell) * CHANNELS_PER_CELL;
        Vec2::new(self.data[i], self.data[i + 1])
    }

    /// Partner cell reached from `cell`, denormalizing and rounding the
    /// stored displacement.
    ///
    /// # Panics
    ///
    /// Panics if `cell` lies outside the map's grid.
    pub fn target_cell(&self, cell: UVec2) -> UVec2 {
        let d = self.get(cell);
        let x = cell.x as f64 + (d.x as f64 * self.grid.width() as f64).round();
        let y = cell.y as f64 + (d.y as f64 * self.grid.height() as f64).round();
        UVec2::new(
            x.clamp(0.0, (self.grid.width() - 1) as f64) as u32,
            y.clamp(0.0, (self.grid.height() - 1) as f64) as u32,
        )
    }
}

/// Both encodings of one permutation.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetMaps {
    pub shuffle: DisplacementMap,
    pub unshuffle: DisplacementMap,
}

impl OffsetMaps {
    pub fn from_permutation(permutation: &Permutation) -> Self {
        Self {
            shuffle: DisplacementMap::encode(permutation, MapKind::Shuffle),
            unshuffle: DisplacementMap::encode(permutation, MapKind::Unshuffle),
        }
    }
}

/// Generate the shuffle and unshuffle maps for a `width x height` grid.
///
/// Fails with [`TesseraError::InvalidArgument`] for non-positive dimensions or
/// an empty seed, before any work is done.
pub fn generate(
    width: i64,
    height: i64,
    seed: impl AsRef<[u8]>,
) -> Result<OffsetMaps, TesseraError> {
    let seed = seed.as_ref();
    let grid = Grid::new(width, height)?;
    if seed.is_empty() {
        return Err(TesseraError::invalid("seed must not be empty"));
    }

    let permutation = Permutation::from_seed(grid, seed)?;
    let maps = OffsetMaps::from_permutation(&permutation);
    log::debug!(
        "generated offset maps for {}x{} grid ({} cells)",
        grid.width(),
        grid.height(),
        grid.total()
    );
    Ok(maps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_rejection() {
        for (w, h, seed) in [(0, 5, "seed"), (5, -1, "seed"), (5, 5, "")] {
            let err = generate(w, h, seed).unwrap_err();
            assert!(
                matches!(err, TesseraError::InvalidArgument(_)),
                "({w}, {h}, {seed:?}) should be rejected"
            );
        }
    }

    #[test]
    fn test_deterministic_bytes() {
        let a = generate(12, 9, "determinism").expect("maps");
        let b = generate(12, 9, "determinism").expect("maps");
        assert_eq!(a.shuffle.as_bytes(), b.shuffle.as_bytes());
        assert_eq!(a.unshuffle.as_bytes(), b.unshuffle.as_bytes());
    }

    #[test]
    fn test_buffer_layout() {
        let maps = generate(5, 3, "layout").expect("maps");
        assert_eq!(maps.shuffle.as_slice().len(), 5 * 3 * 2);
        assert_eq!(maps.unshuffle.as_bytes().len(), 5 * 3 * 2 * 4);
        assert_eq!(maps.shuffle.kind(), MapKind::Shuffle);
        assert_eq!(maps.unshuffle.kind(), MapKind::Unshuffle);
    }

    #[test]
    fn test_range_bound() {
        let maps = generate(31, 17, "range").expect("maps");
        for map in [&maps.shuffle, &maps.unshuffle] {
            for &v in map.as_slice() {
                assert!(v > -1.0 && v < 1.0, "displacement {v} out of (-1, 1)");
            }
        }
    }

    #[test]
    fn test_round_trip_2x2() {
        let grid = Grid::new(2, 2).expect("grid");
        let p = Permutation::from_seed(grid, b"abc").expect("permutation");
        let maps = generate(2, 2, "abc").expect("maps");

        for cell in grid.cells() {
            let i = grid.encode(cell);
            assert_eq!(maps.unshuffle.target_cell(cell), grid.decode(p.forward(i)));
            assert_eq!(maps.shuffle.target_cell(cell), grid.decode(p.inverse(i)));
        }
    }

    #[test]
    fn test_maps_compose_to_identity() {
        let maps = generate(16, 10, "compose").expect("maps");
        let grid = maps.shuffle.grid();
        for cell in grid.cells() {
            let shuffled = maps.unshuffle.target_cell(cell);
            assert_eq!(maps.shuffle.target_cell(shuffled), cell);
        }
    }

    #[test]
    #[should_panic]
    fn test_get_outside_grid_panics() {
        let maps = generate(3, 3, "bounds").expect("maps");
        maps.shuffle.get(UVec2::new(0, 3));
    }

    #[test]
    fn test_from_raw_length_check() {
        let grid = Grid::new(2, 2).expect("grid");
        assert!(DisplacementMap::from_raw(grid, MapKind::Shuffle, vec![0.0; 8]).is_ok());
        assert!(DisplacementMap::from_raw(grid, MapKind::Shuffle, vec![0.0; 7]).is_err());
    }
}
