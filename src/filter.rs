//! Differential post-filter, applied once after block decoding.
//!
//! `SUB` traverses the buffer in row-major order; `UP` traverses it
//! column-major (the transpose mapping), so each pixel's predictor is the
//! pixel above it in the final image. Channel arithmetic is modulo-256,
//! wrapping rather than saturating, and the rolling predictor carries
//! across row/column boundaries with no per-row reset.

use crate::header::FilterType;
use crate::pixel::Pixel;
use crate::session::DecodeSession;

/// Maps traversal order `i` to the in-buffer index for the session's
/// filter mode.
fn traversal_index(i: usize, session: &DecodeSession) -> usize {
    match session.filter {
        FilterType::Up => {
            let height = usize::from(session.height);
            let width = usize::from(session.width);
            width * (i % height) + (i / height)
        }
        FilterType::Sub | FilterType::None => i,
    }
}

/// Applies the differential unfilter in place, updating
/// `session.previous_value` to the final rolling predictor.
pub fn apply_filter(pixels: &mut [Pixel], session: &mut DecodeSession) {
    if session.filter == FilterType::None {
        return;
    }

    let mut prev = session.previous_value;
    for i in 0..pixels.len() {
        let index = traversal_index(i, session);
        let cur = pixels[index];

        let r = prev.r().wrapping_add(cur.r());
        let g = prev.g().wrapping_add(cur.g());
        let b = prev.b().wrapping_add(cur.b());
        let a = if session.color_depth == 32 { prev.a().wrapping_add(cur.a()) } else { 0xFF };

        let updated = Pixel::from_channels(r, g, b, a);
        pixels[index] = updated;
        prev = updated;
    }
    session.previous_value = prev;
}
