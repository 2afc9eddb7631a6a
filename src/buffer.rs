//! Pixel Buffer
//!
//! The in-memory image every filter works on: a dense, row-major grid of
//! RGB samples with bounds-checked access. Channels are stored as `u8`, so a
//! stored sample is always inside [0, 255]; wider intermediate values go
//! through [`Color::from_clamped`] before they reach the grid.
//!
//! Conversions to and from `image::RgbImage` sit at the edge of this module so
//! decoding and encoding stay outside the filter engine.

use image::{Rgb, RgbImage};
use crate::error::{Result, SnapshopError};

// ============================================================================
// COLOR
// ============================================================================

/// A single RGB sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Build a color from wide channel values, clamping each into [0, 255]
    pub fn from_clamped(red: i32, green: i32, blue: i32) -> Self {
        Self {
            red: clamp_channel(red),
            green: clamp_channel(green),
            blue: clamp_channel(blue),
        }
    }

    /// Channels in (red, green, blue) order
    pub fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    pub fn from_channels([red, green, blue]: [u8; 3]) -> Self {
        Self { red, green, blue }
    }
}

impl From<Rgb<u8>> for Color {
    fn from(pixel: Rgb<u8>) -> Self {
        Self::from_channels(pixel.0)
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Rgb(color.channels())
    }
}

/// Clamp a wide channel value into the storable range
#[inline]
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

// ============================================================================
// PIXEL BUFFER
// ============================================================================

/// W x H grid of colors, row-major
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Create a buffer filled with a single color
    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// Create a black buffer
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Color::BLACK)
    }

    /// Wrap an existing row-major sample grid
    ///
    /// Rejects grids whose length does not equal `width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Color>) -> Result<Self> {
        let expected = width.checked_mul(height);
        if expected != Some(pixels.len()) {
            return Err(SnapshopError::MalformedBuffer {
                width,
                height,
                samples: pixels.len(),
            });
        }
        Ok(Self { width, height, pixels })
    }

    /// Build a buffer from rows of equal length
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let samples: usize = rows.iter().map(Vec::len).sum();
        if rows.iter().any(|row| row.len() != width) {
            return Err(SnapshopError::MalformedBuffer { width, height, samples });
        }
        Self::from_pixels(width, height, rows.into_iter().flatten().collect())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when the buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    fn index_of(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(SnapshopError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Color> {
        let idx = self.index_of(x, y)?;
        Ok(self.pixels[idx])
    }

    pub fn set(&mut self, x: usize, y: usize, color: Color) -> Result<()> {
        let idx = self.index_of(x, y)?;
        self.pixels[idx] = color;
        Ok(())
    }

    /// Store wide channel values, clamping each into [0, 255]
    pub fn set_clamped(&mut self, x: usize, y: usize, channels: [i32; 3]) -> Result<()> {
        let [r, g, b] = channels;
        self.set(x, y, Color::from_clamped(r, g, b))
    }

    /// All samples in row-major order
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// One row of samples; `y` must be below `height()`
    pub fn row(&self, y: usize) -> &[Color] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        // chunks() panics on zero, and a zero-width buffer has no samples anyway
        self.pixels.chunks(self.width.max(1))
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Packed RGB bytes, row-major
    pub fn to_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.channels()).collect()
    }

    // ========================================================================
    // image crate boundary
    // ========================================================================

    /// Convert a decoded RGB image
    pub fn from_rgb_image(img: &RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width: width as usize,
            height: height as usize,
            pixels: img.pixels().map(|&p| Color::from(p)).collect(),
        }
    }

    /// Convert into an RGB image for encoding or display
    pub fn to_rgb_image(&self) -> Result<RgbImage> {
        let width = u32::try_from(self.width)
            .map_err(|_| SnapshopError::InvalidParameter(format!("width {} too large", self.width)))?;
        let height = u32::try_from(self.height)
            .map_err(|_| SnapshopError::InvalidParameter(format!("height {} too large", self.height)))?;
        RgbImage::from_raw(width, height, self.to_bytes()).ok_or(SnapshopError::MalformedBuffer {
            width: self.width,
            height: self.height,
            samples: self.pixels.len(),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
