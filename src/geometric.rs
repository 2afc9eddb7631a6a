//! Index-permutation filters. No channel arithmetic happens here.

use rayon::prelude::*;
use crate::buffer::PixelBuffer;

/// Mirror left to right: output(x, y) = input(W-1-x, y)
pub fn flip_horizontal(input: &PixelBuffer) -> PixelBuffer {
    let mut output = input.clone();
    let width = input.width();
    if width == 0 {
        return output;
    }
    output
        .pixels_mut()
        .par_chunks_mut(width)
        .for_each(|row| row.reverse());
    output
}

/// Mirror top to bottom: output(x, y) = input(x, H-1-y)
pub fn flip_vertical(input: &PixelBuffer) -> PixelBuffer {
    let mut output = input.clone();
    let width = input.width();
    if width == 0 {
        return output;
    }
    output
        .pixels_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| row.copy_from_slice(input.row(input.height() - 1 - y)));
    output
}
