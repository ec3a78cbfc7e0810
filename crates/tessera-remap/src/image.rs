use glam::UVec2;

use crate::error::RemapError;

/// Owned RGBA8 image, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Image {
    pub fn new(width: u32, height: u32, pixels: Vec<[u8; 4]>) -> Result<Self, RemapError> {
        if width == 0 || height == 0 {
            return Err(RemapError::EmptyImage { width, height });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(RemapError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Caller guarantees `pixels.len() == width * height` and non-zero sides.
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<[u8; 4]>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Build from tightly packed RGBA bytes.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, RemapError> {
        if bytes.len() % 4 != 0 {
            return Err(RemapError::UnalignedBytes(bytes.len()));
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|p| [p[0], p[1], p[2], p[3]])
            .collect();
        Self::new(width, height, pixels)
    }

    /// Build by evaluating `f` at every pixel.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(UVec2) -> [u8; 4],
    ) -> Result<Self, RemapError> {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(UVec2::new(x, y)));
            }
        }
        Self::new(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    pub fn get(&self, p: UVec2) -> [u8; 4] {
        self.pixels[p.y as usize * self.width as usize + p.x as usize]
    }
}
