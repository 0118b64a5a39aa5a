//! Per-decode parameter bundle.
//!
//! Keeping `color_depth`, `filter`, `width`, `height`, and the rolling
//! filter predictor as process-global statics would be a concurrency
//! hazard: two decodes running on different threads would stomp on each
//! other's state. This struct is constructed once per call to the façade
//! and threaded explicitly through the Huffman, block, and filter stages
//! instead.

use crate::header::{FilterType, Header};
use crate::pixel::Pixel;

/// Decode parameters established once the header is known.
pub struct DecodeSession {
    pub color_depth: u32,
    pub filter: FilterType,
    pub width: u16,
    pub height: u16,
    /// Rolling predictor for the post-filter.
    pub previous_value: Pixel,
}

impl DecodeSession {
    pub fn new(header: &Header) -> Self {
        let previous_value = if header.color_depth == 24 {
            Pixel::from_u32(0xFFFFFF00)
        } else {
            Pixel::from_u32(0x0000_0000)
        };
        Self {
            color_depth: header.color_depth,
            filter: header.filter,
            width: header.width,
            height: header.height,
            previous_value,
        }
    }

    pub fn pixel_count(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}
