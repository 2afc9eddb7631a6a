use snapshop::convolution::Kernel;
use snapshop::{apply, apply_filter, Color, Filter, PixelBuffer};

fn noise(width: usize, height: usize, seed: u32) -> PixelBuffer {
    // xorshift keeps fixtures reproducible without a rand dependency
    let mut state = seed.max(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        (state & 0xff) as u8
    };
    let pixels = (0..width * height)
        .map(|_| Color::new(next(), next(), next()))
        .collect();
    PixelBuffer::from_pixels(width, height, pixels).unwrap()
}

const SIZES: [(usize, usize); 7] = [(0, 0), (1, 1), (2, 2), (3, 5), (6, 4), (7, 7), (1, 9)];

#[test]
fn flips_are_self_inverse() {
    for (w, h) in SIZES {
        let input = noise(w, h, 7);
        for filter in [Filter::FlipHorizontal, Filter::FlipVertical] {
            let twice = apply_filter(filter, &apply_filter(filter, &input));
            assert_eq!(twice, input, "{} on {}x{}", filter, w, h);
        }
    }
}

#[test]
fn every_filter_preserves_dimensions() {
    for (w, h) in SIZES {
        let input = noise(w, h, 11);
        for filter in Filter::ALL {
            let out = apply_filter(filter, &input);
            assert_eq!((out.width(), out.height()), (w, h), "{}", filter);
        }
    }
}

#[test]
fn grayscale_is_idempotent() {
    let input = noise(9, 6, 3);
    let once = apply_filter(Filter::Grayscale, &input);
    assert_eq!(apply_filter(Filter::Grayscale, &once), once);
}

#[test]
fn filters_are_deterministic_and_leave_input_alone() {
    let input = noise(8, 5, 42);
    let copy = input.clone();
    for filter in Filter::ALL {
        let a = apply(filter.id(), &input).unwrap();
        let b = apply(filter.id(), &input).unwrap();
        assert_eq!(a.to_bytes(), b.to_bytes(), "{}", filter);
    }
    assert_eq!(input, copy);
}

#[test]
fn single_pixel_scales_by_kernel_sum() {
    let pixel = Color::new(37, 140, 251);
    let input = PixelBuffer::filled(1, 1, pixel);
    for filter in Filter::ALL {
        let Some(kernel) = filter.kernel() else { continue };
        let expected = pixel.channels().map(|c| {
            let scaled = c as i32 * kernel.weight_sum() / kernel.divisor + kernel.bias;
            scaled.clamp(0, 255) as u8
        });
        let out = apply_filter(filter, &input).get(0, 0).unwrap();
        assert_eq!(out.channels(), expected, "{}", filter);
    }
}

#[test]
fn horizontal_flip_example() {
    let input = PixelBuffer::from_rows(vec![
        vec![Color::new(255, 0, 0), Color::new(0, 255, 0)],
        vec![Color::new(0, 0, 255), Color::new(255, 255, 255)],
    ])
    .unwrap();
    let expected = PixelBuffer::from_rows(vec![
        vec![Color::new(0, 255, 0), Color::new(255, 0, 0)],
        vec![Color::new(255, 255, 255), Color::new(0, 0, 255)],
    ])
    .unwrap();
    assert_eq!(apply("flip_horizontal", &input).unwrap(), expected);
}

#[test]
fn grayscale_of_red() {
    let input = PixelBuffer::filled(1, 1, Color::new(255, 0, 0));
    let out = apply("grayscale", &input).unwrap();
    assert_eq!(out.get(0, 0).unwrap(), Color::new(76, 76, 76));
}

#[test]
fn sharpen_keeps_uniform_buffer() {
    let input = PixelBuffer::filled(5, 4, Color::new(17, 99, 230));
    assert_eq!(apply_filter(Filter::Sharpen, &input), input);
    assert_eq!(Kernel::SHARPEN.weight_sum(), Kernel::SHARPEN.divisor);
}

#[test]
fn unknown_identifier_is_rejected() {
    assert!(apply("posterize", &noise(2, 2, 1)).is_err());
}
