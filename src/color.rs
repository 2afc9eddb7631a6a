//! Per-pixel color remaps and the rounding rule shared with convolution.

use rayon::prelude::*;
use crate::buffer::{clamp_channel, Color, PixelBuffer};

/// Perceptual luminance weights, in thousandths (0.299, 0.587, 0.114)
const LUMA_WEIGHTS: [i32; 3] = [299, 587, 114];
const LUMA_SCALE: i32 = 1000;

/// Exact `round(numerator / denominator)` with halves rounded up, then clamped
///
/// `denominator` must be positive. Floor division keeps negative sums rounding
/// toward +inf on a tie, matching `floor(v + 0.5)`.
#[inline]
pub fn round_half_up(numerator: i64, denominator: i64) -> u8 {
    debug_assert!(denominator > 0);
    let rounded = (2 * numerator + denominator).div_euclid(2 * denominator);
    clamp_channel(rounded.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
}

/// Luminance of a color, rounded half up
pub fn luminance(color: Color) -> u8 {
    let weighted: i32 = color
        .channels()
        .iter()
        .zip(LUMA_WEIGHTS)
        .map(|(&c, w)| c as i32 * w)
        .sum();
    round_half_up(weighted as i64, LUMA_SCALE as i64)
}

/// Apply a position-independent transform to every sample
pub fn map_pixels<F>(input: &PixelBuffer, transform: F) -> PixelBuffer
where
    F: Fn(Color) -> Color + Sync,
{
    let mut output = input.clone();
    output
        .pixels_mut()
        .par_iter_mut()
        .for_each(|pixel| *pixel = transform(*pixel));
    output
}

/// Replace each pixel with (L, L, L)
pub fn grayscale(input: &PixelBuffer) -> PixelBuffer {
    map_pixels(input, |color| {
        let l = luminance(color);
        Color::new(l, l, l)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(5, 2), 3); // 2.5
        assert_eq!(round_half_up(7, 3), 2); // 2.33
        assert_eq!(round_half_up(8, 3), 3); // 2.67
        assert_eq!(round_half_up(-5, 2), 0); // -2.5 -> -2 -> clamped
        assert_eq!(round_half_up(600, 1), 255);
    }

    #[test]
    fn test_luminance_primaries() {
        assert_eq!(luminance(Color::new(255, 0, 0)), 76); // 76.245
        assert_eq!(luminance(Color::new(0, 255, 0)), 150); // 149.685
        assert_eq!(luminance(Color::new(0, 0, 255)), 29); // 29.07
        assert_eq!(luminance(Color::WHITE), 255);
        assert_eq!(luminance(Color::BLACK), 0);
    }

    #[test]
    fn test_grayscale_red() {
        let buf = PixelBuffer::filled(1, 1, Color::new(255, 0, 0));
        assert_eq!(grayscale(&buf).get(0, 0).unwrap(), Color::new(76, 76, 76));
    }

    #[test]
    fn test_grayscale_fixed_point() {
        let buf = PixelBuffer::from_pixels(
            3,
            1,
            vec![Color::new(12, 200, 45), Color::new(255, 128, 0), Color::new(9, 9, 250)],
        )
        .unwrap();
        let once = grayscale(&buf);
        assert_eq!(grayscale(&once), once);
        assert!(once.pixels().iter().all(|c| c.red == c.green && c.green == c.blue));
    }

    #[test]
    fn test_grayscale_leaves_input() {
        let buf = PixelBuffer::filled(2, 2, Color::new(0, 0, 255));
        let _ = grayscale(&buf);
        assert_eq!(buf.get(1, 1).unwrap(), Color::new(0, 0, 255));
    }
}
