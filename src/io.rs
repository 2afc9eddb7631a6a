//! Decoding and encoding at the edge of the engine.
//!
//! Format detection and codecs come from the `image` crate; alpha is dropped on
//! load since filters work on RGB samples only.

use std::io::Cursor;
use std::path::Path;
use crate::buffer::PixelBuffer;
use crate::error::{Result, SnapshopError};

/// Load an image from disk into a pixel buffer
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)
        .map_err(|e| SnapshopError::Processing(format!("Failed to load {}: {}", path.display(), e)))?;
    Ok(PixelBuffer::from_rgb_image(&img.to_rgb8()))
}

/// Save a pixel buffer; the format follows the file extension
pub fn save_image(buffer: &PixelBuffer, path: &Path, create_missing_dirs: bool) -> Result<()> {
    if create_missing_dirs {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
    }
    buffer.to_rgb_image()?.save(path)?;
    Ok(())
}

/// Encode as PNG bytes (for display without file I/O)
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    buffer
        .to_rgb_image()?
        .write_to(&mut bytes, image::ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Decode in-memory image bytes, guessing the format from content
pub fn decode_bytes(bytes: &[u8]) -> Result<PixelBuffer> {
    let img = image::load_from_memory(bytes)?;
    Ok(PixelBuffer::from_rgb_image(&img.to_rgb8()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Color;

    fn sample() -> PixelBuffer {
        PixelBuffer::from_pixels(
            2,
            2,
            vec![Color::new(255, 0, 0), Color::new(0, 255, 0), Color::new(0, 0, 255), Color::WHITE],
        )
        .unwrap()
    }

    #[test]
    fn test_png_bytes_decode() {
        let png = encode_png(&sample()).unwrap();
        assert_eq!(&png[1..4], b"PNG");
        assert_eq!(decode_bytes(&png).unwrap(), sample());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.png");
        save_image(&sample(), &path, true).unwrap();
        assert_eq!(load_image(&path).unwrap(), sample());
    }

    #[test]
    fn test_save_without_parent_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        assert!(save_image(&sample(), &path, false).is_err());
    }

    #[test]
    fn test_load_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.png");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(load_image(&path).is_err());
        assert!(decode_bytes(b"nope").is_err());
    }
}
