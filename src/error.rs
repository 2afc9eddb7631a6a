use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshopError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Pixel ({x}, {y}) is outside a {width}x{height} buffer")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Malformed buffer: {samples} samples for {width}x{height}")]
    MalformedBuffer {
        width: usize,
        height: usize,
        samples: usize,
    },

    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    #[error("No image is loaded")]
    NoImageLoaded,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Processing error: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, SnapshopError>;

// Lets hosts that report errors as JSON pass them through unchanged
impl serde::Serialize for SnapshopError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = SnapshopError::OutOfBounds { x: 4, y: 1, width: 3, height: 2 };
        assert_eq!(err.to_string(), "Pixel (4, 1) is outside a 3x2 buffer");
    }

    #[test]
    fn test_serializes_as_message() {
        let err = SnapshopError::UnknownFilter("blur".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"Unknown filter: blur\"");
    }
}
