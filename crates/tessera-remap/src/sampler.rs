use glam::{UVec2, Vec2};
use tessera_core::DisplacementMap;

use crate::image::Image;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemapOptions {
    /// Replace RGB with `255 - c` after sampling; alpha is kept.
    pub invert_colors: bool,
}

/// Nearest-neighbour texel index for normalized coordinate `u` on an axis of
/// `size` texels, clamped to the edge.
#[inline]
fn nearest(u: f32, size: u32) -> u32 {
    let t = (u * size as f32).floor();
    t.clamp(0.0, (size - 1) as f32) as u32
}

/// Resample `image` through `map`.
///
/// The output has the image's size. The map may be coarser than the image;
/// each map cell then moves a whole block of pixels. When the image sides are
/// integer multiples of the map sides, remapping with a shuffle map and then
/// with the matching unshuffle map reproduces the input exactly.
pub fn remap(image: &Image, map: &DisplacementMap, options: RemapOptions) -> Image {
    let (w, h) = (image.width(), image.height());
    let grid = map.grid();
    let size = Vec2::new(w as f32, h as f32);

    let mut pixels = Vec::with_capacity(w as usize * h as usize);
    for py in 0..h {
        for px in 0..w {
            let uv = (Vec2::new(px as f32, py as f32) + 0.5) / size;
            let cell = UVec2::new(nearest(uv.x, grid.width()), nearest(uv.y, grid.height()));
            let sample_uv = uv + map.get(cell);
            let src = UVec2::new(nearest(sample_uv.x, w), nearest(sample_uv.y, h));

            let mut c = image.get(src);
            if options.invert_colors {
                for channel in &mut c[..3] {
                    *channel = 255 - *channel;
                }
            }
            pixels.push(c);
        }
    }

    log::debug!(
        "remapped {}x{} image through {:?} map {}x{}",
        w,
        h,
        map.kind(),
        grid.width(),
        grid.height()
    );

    // Same dimensions and pixel count as the validated input.
    Image::from_parts(w, h, pixels)
}
