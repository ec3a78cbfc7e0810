use glam::UVec2;

use crate::error::TesseraError;

/// Rectangular grid of cells addressed row-major: `index = y * width + x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    width: u32,
    height: u32,
}

impl Grid {
    /// Validate dimensions and build a grid.
    ///
    /// Signed inputs are accepted so that negative sizes coming from callers
    /// are reported instead of wrapping. The cell count must fit in a `u32`
    /// because permutation entries are stored as `u32`.
    pub fn new(width: i64, height: i64) -> Result<Self, TesseraError> {
        if width <= 0 || height <= 0 {
            return Err(TesseraError::invalid(format!(
                "grid dimensions must be positive, got {width}x{height}"
            )));
        }
        let too_large = || {
            TesseraError::invalid(format!("grid {width}x{height} has too many cells to index"))
        };
        let w = u32::try_from(width).map_err(|_| too_large())?;
        let h = u32::try_from(height).map_err(|_| too_large())?;
        if (w as u64) * (h as u64) > u32::MAX as u64 {
            return Err(too_large());
        }
        Ok(Self {
            width: w,
            height: h,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells.
    pub fn total(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Larger of the two sides.
    pub fn max_side(&self) -> u32 {
        self.width.max(self.height)
    }

    /// Linear index to `(x, y)`.
    #[inline]
    pub fn decode(&self, index: usize) -> UVec2 {
        let w = self.width as usize;
        UVec2::new((index % w) as u32, (index / w) as u32)
    }

    /// `(x, y)` to linear index.
    #[inline]
    pub fn encode(&self, cell: UVec2) -> usize {
        cell.y as usize * self.width as usize + cell.x as usize
    }

    /// Every cell coordinate in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = UVec2> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| UVec2::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive() {
        assert!(Grid::new(0, 5).is_err());
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::new(5, -1).is_err());
        assert!(Grid::new(-3, -3).is_err());
    }

    #[test]
    fn test_rejects_oversized() {
        assert!(Grid::new(1 << 32, 1).is_err());
        assert!(Grid::new(1 << 16, 1 << 16).is_err());
        assert!(Grid::new(1 << 16, (1 << 16) - 1).is_ok());
    }

    #[test]
    fn test_encode_decode() {
        let grid = Grid::new(7, 3).expect("valid grid");
        assert_eq!(grid.total(), 21);
        assert_eq!(grid.decode(0), UVec2::new(0, 0));
        assert_eq!(grid.decode(8), UVec2::new(1, 1));
        assert_eq!(grid.decode(20), UVec2::new(6, 2));
        for i in 0..grid.total() {
            assert_eq!(grid.encode(grid.decode(i)), i);
        }
    }

    #[test]
    fn test_cells_row_major() {
        let grid = Grid::new(3, 2).expect("valid grid");
        let cells: Vec<UVec2> = grid.cells().collect();
        assert_eq!(cells.len(), 6);
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(grid.encode(*cell), i);
        }
    }
}
