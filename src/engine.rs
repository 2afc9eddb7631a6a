//! Filter dispatch: pick a filter by identifier and run it.

use std::time::Instant;
use crate::buffer::PixelBuffer;
use crate::error::Result;
use crate::filter::Filter;

/// Run one filter and return the new buffer
pub fn apply_filter(filter: Filter, input: &PixelBuffer) -> PixelBuffer {
    let started = Instant::now();
    let output = filter.apply(input);
    tracing::debug!(
        filter = filter.id(),
        width = input.width(),
        height = input.height(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "Applied filter"
    );
    output
}

/// Run the filter named by `filter_id`
///
/// Identifiers come from a fixed list, so an unknown one is a caller bug and
/// is returned as `UnknownFilter` before any pixel work happens.
pub fn apply(filter_id: &str, input: &PixelBuffer) -> Result<PixelBuffer> {
    let filter: Filter = filter_id.parse()?;
    Ok(apply_filter(filter, input))
}

/// Run filters left to right, each on the previous result
pub fn apply_chain(filters: &[Filter], input: &PixelBuffer) -> PixelBuffer {
    filters
        .iter()
        .fold(input.clone(), |current, &filter| apply_filter(filter, &current))
}
