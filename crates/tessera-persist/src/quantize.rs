//! RGB8 quantization of displacement pairs.
//!
//! A component `d` in `[-1, 1]` maps to `round((d + 1) / 2 * 255)`; blue is
//! always zero. Decoding gives back `d` within `1 / 255` in normalized
//! coordinates. A sampler multiplies that by the image side, so the error is
//! `side / 255` pixels: nearest sampling stays exact only while every image
//! side is below [`RGB8_EXACT_MAX_SIDE`] + 1 pixels, whatever the grid size.

use tessera_core::constants::CHANNELS_PER_CELL;

use crate::format::RGB8_BYTES_PER_CELL;

/// Largest image side, in pixels, for which an RGB8 map still lands every
/// sample on the exact source pixel (`127 / 255 < 0.5`).
pub const RGB8_EXACT_MAX_SIDE: u32 = 127;

/// Whether RGB8 maps resample a `width x height` image without error.
pub fn rgb8_exact_for(width: u32, height: u32) -> bool {
    width <= RGB8_EXACT_MAX_SIDE && height <= RGB8_EXACT_MAX_SIDE
}

#[inline]
pub fn quantize_component(d: f32) -> u8 {
    (((d + 1.0) / 2.0) * 255.0).round().clamp(0.0, 255.0) as u8
}

#[inline]
pub fn dequantize_component(c: u8) -> f32 {
    c as f32 / 255.0 * 2.0 - 1.0
}

/// Interleaved `(dx, dy)` values to packed RGB8 texels.
pub fn quantize(values: &[f32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(values.len() / CHANNELS_PER_CELL * RGB8_BYTES_PER_CELL);
    for pair in values.chunks_exact(CHANNELS_PER_CELL) {
        out.push(quantize_component(pair[0]));
        out.push(quantize_component(pair[1]));
        out.push(0);
    }
    out
}

/// Packed RGB8 texels back to interleaved `(dx, dy)` values.
pub fn dequantize(texels: &[u8]) -> Vec<f32> {
    let mut out = Vec::with_capacity(texels.len() / RGB8_BYTES_PER_CELL * CHANNELS_PER_CELL);
    for texel in texels.chunks_exact(RGB8_BYTES_PER_CELL) {
        out.push(dequantize_component(texel[0]));
        out.push(dequantize_component(texel[1]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(quantize_component(-1.0), 0);
        assert_eq!(quantize_component(0.0), 128);
        assert_eq!(quantize_component(1.0), 255);
        assert_eq!(quantize_component(-3.0), 0);
        assert_eq!(quantize_component(3.0), 255);
        assert_eq!(dequantize_component(0), -1.0);
        assert_eq!(dequantize_component(255), 1.0);
    }

    #[test]
    fn test_error_within_one_step() {
        let values: Vec<f32> = (-100..=100).map(|i| i as f32 / 101.0).collect();
        let back = dequantize(&quantize(&values));
        assert_eq!(back.len(), values.len());
        for (a, b) in values.iter().zip(&back) {
            assert!((a - b).abs() <= 1.0 / 255.0 + 1e-6, "{a} decoded as {b}");
        }
    }

    #[test]
    fn test_exact_side_bound() {
        assert!(rgb8_exact_for(127, 127));
        assert!(rgb8_exact_for(16, 127));
        assert!(!rgb8_exact_for(128, 16));
        assert!(!rgb8_exact_for(160, 160));
        // Worst-case error in pixels stays under half a pixel up to the bound.
        assert!(RGB8_EXACT_MAX_SIDE as f32 / 255.0 < 0.5);
        assert!((RGB8_EXACT_MAX_SIDE + 1) as f32 / 255.0 > 0.5);
    }

    #[test]
    fn test_blue_channel_zero() {
        let texels = quantize(&[0.5, -0.5, 0.25, 0.75]);
        assert_eq!(texels.len(), 6);
        assert_eq!(texels[2], 0);
        assert_eq!(texels[5], 0);
    }
}
