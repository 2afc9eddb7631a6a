//! The closed set of filters and their identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::buffer::PixelBuffer;
use crate::error::SnapshopError;
use crate::{color, convolution, geometric};

/// One of the seven supported pixel transformations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    EdgeDetect,
    EdgeHighlight,
    FlipHorizontal,
    FlipVertical,
    Grayscale,
    Sharpen,
    Soften,
}

/// How a filter computes each output pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterCategory {
    /// Pure index permutation
    Geometric,
    /// Depends only on the same input pixel
    ColorRemap,
    /// Depends on a 3x3 neighborhood
    Convolution,
}

impl Filter {
    /// Every filter, in toolbar order
    pub const ALL: [Filter; 7] = [
        Filter::EdgeDetect,
        Filter::EdgeHighlight,
        Filter::FlipHorizontal,
        Filter::FlipVertical,
        Filter::Grayscale,
        Filter::Sharpen,
        Filter::Soften,
    ];

    /// Canonical identifier
    pub fn id(self) -> &'static str {
        match self {
            Filter::EdgeDetect => "edge_detect",
            Filter::EdgeHighlight => "edge_highlight",
            Filter::FlipHorizontal => "flip_horizontal",
            Filter::FlipVertical => "flip_vertical",
            Filter::Grayscale => "grayscale",
            Filter::Sharpen => "sharpen",
            Filter::Soften => "soften",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Filter::EdgeDetect => "Edge Detect",
            Filter::EdgeHighlight => "Edge Highlight",
            Filter::FlipHorizontal => "Flip Horizontal",
            Filter::FlipVertical => "Flip Vertical",
            Filter::Grayscale => "Grayscale",
            Filter::Sharpen => "Sharpen",
            Filter::Soften => "Soften",
        }
    }

    pub fn category(self) -> FilterCategory {
        match self {
            Filter::FlipHorizontal | Filter::FlipVertical => FilterCategory::Geometric,
            Filter::Grayscale => FilterCategory::ColorRemap,
            Filter::EdgeDetect | Filter::EdgeHighlight | Filter::Sharpen | Filter::Soften => {
                FilterCategory::Convolution
            }
        }
    }

    /// Kernel used by a convolution filter
    pub fn kernel(self) -> Option<&'static convolution::Kernel> {
        match self {
            Filter::EdgeDetect => Some(&convolution::Kernel::EDGE_DETECT),
            Filter::EdgeHighlight => Some(&convolution::Kernel::EDGE_HIGHLIGHT),
            Filter::Sharpen => Some(&convolution::Kernel::SHARPEN),
            Filter::Soften => Some(&convolution::Kernel::SOFTEN),
            Filter::FlipHorizontal | Filter::FlipVertical | Filter::Grayscale => None,
        }
    }

    /// Compute the filtered image; `input` is left untouched
    pub fn apply(self, input: &PixelBuffer) -> PixelBuffer {
        match self {
            Filter::FlipHorizontal => geometric::flip_horizontal(input),
            Filter::FlipVertical => geometric::flip_vertical(input),
            Filter::Grayscale => color::grayscale(input),
            Filter::EdgeDetect => convolution::edge_detect(input),
            Filter::EdgeHighlight => convolution::edge_highlight(input),
            Filter::Sharpen => convolution::sharpen(input),
            Filter::Soften => convolution::soften(input),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Lowercase with separators dropped, so "Edge Detect", "edge-detect",
/// "edge_detect" and "EdgeDetect" all compare equal
fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Filter {
    type Err = SnapshopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s.trim());
        Filter::ALL
            .into_iter()
            .find(|f| normalize_name(f.id()) == wanted)
            .ok_or_else(|| SnapshopError::UnknownFilter(s.to_string()))
    }
}
