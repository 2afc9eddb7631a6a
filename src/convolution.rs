//! 3x3 Convolution Filters
//!
//! Every convolution filter runs the same pass:
//! 1. Read neighbors from an immutable snapshot of the input
//! 2. Out-of-range neighbors replicate the nearest edge sample
//! 3. Per channel: weighted sum / divisor + bias, rounded half up, clamped
//!
//! The output is written into a separate buffer, so no pixel ever sees a
//! neighbor that has already been filtered.

use rayon::prelude::*;
use crate::buffer::{Color, PixelBuffer};
use crate::color::round_half_up;

// ============================================================================
// KERNELS
// ============================================================================

/// Fixed 3x3 weight matrix, centered on the output pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    /// Row-major weights; `weights[1][1]` is the center
    pub weights: [[i32; 3]; 3],
    /// Positive normalization divisor
    pub divisor: i32,
    /// Added after normalization
    pub bias: i32,
}

impl Kernel {
    pub const SHARPEN: Kernel = Kernel {
        weights: [[-1, -1, -1], [-1, 9, -1], [-1, -1, -1]],
        divisor: 1,
        bias: 0,
    };

    pub const SOFTEN: Kernel = Kernel {
        weights: [[1, 1, 1], [1, 1, 1], [1, 1, 1]],
        divisor: 9,
        bias: 0,
    };

    pub const EDGE_DETECT: Kernel = Kernel {
        weights: [[-1, -1, -1], [-1, 8, -1], [-1, -1, -1]],
        divisor: 1,
        bias: 0,
    };

    pub const EDGE_HIGHLIGHT: Kernel = Kernel {
        weights: [[0, -1, 0], [-1, 4, -1], [0, -1, 0]],
        divisor: 1,
        bias: 0,
    };

    /// Sum of all weights
    pub fn weight_sum(&self) -> i32 {
        self.weights.iter().flatten().sum()
    }

    /// Result for a pixel whose whole neighborhood equals `value`
    pub fn uniform_response(&self, value: u8) -> u8 {
        self.normalize(self.weight_sum() as i64 * value as i64)
    }

    #[inline]
    fn normalize(&self, sum: i64) -> u8 {
        let divisor = self.divisor as i64;
        round_half_up(sum + self.bias as i64 * divisor, divisor)
    }
}

// ============================================================================
// CONVOLUTION PASS
// ============================================================================

/// Edge-replicating coordinate: `max(0, min(c, len - 1))`
#[inline]
pub fn clamp_coord(c: isize, len: usize) -> usize {
    c.clamp(0, len as isize - 1) as usize
}

/// Convolve `input` with `kernel` into a new buffer of the same size
pub fn convolve(input: &PixelBuffer, kernel: &Kernel) -> PixelBuffer {
    let (width, height) = (input.width(), input.height());
    let mut output = input.clone();
    if width == 0 || height == 0 {
        return output;
    }

    // The clone above is the write target; `input` stays the read-only snapshot
    output
        .pixels_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row_out)| {
            let rows: [&[Color]; 3] = [-1isize, 0, 1]
                .map(|dy| input.row(clamp_coord(y as isize + dy, height)));

            for (x, out) in row_out.iter_mut().enumerate() {
                let mut sums = [0i64; 3];
                for (ky, row) in rows.iter().enumerate() {
                    for kx in 0..3 {
                        let weight = kernel.weights[ky][kx] as i64;
                        if weight == 0 {
                            continue;
                        }
                        let sx = clamp_coord(x as isize + kx as isize - 1, width);
                        for (sum, c) in sums.iter_mut().zip(row[sx].channels()) {
                            *sum += weight * c as i64;
                        }
                    }
                }
                *out = Color::from_channels(sums.map(|s| kernel.normalize(s)));
            }
        });

    output
}

pub fn sharpen(input: &PixelBuffer) -> PixelBuffer {
    convolve(input, &Kernel::SHARPEN)
}

pub fn soften(input: &PixelBuffer) -> PixelBuffer {
    convolve(input, &Kernel::SOFTEN)
}

pub fn edge_detect(input: &PixelBuffer) -> PixelBuffer {
    convolve(input, &Kernel::EDGE_DETECT)
}

pub fn edge_highlight(input: &PixelBuffer) -> PixelBuffer {
    convolve(input, &Kernel::EDGE_HIGHLIGHT)
}

// ============================================================================
// TESTS
// ============================================================================
