//! Glyph measurement and outline geometry seams.

use crate::constants::WIDTH_MARKER;
use glam::Vec2;

/// Flattened outline of one glyph in local units (origin at the pen
/// position, y up), as a line list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlyphOutline {
    pub segments: Vec<[Vec2; 2]>,
}

impl GlyphOutline {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Font-backed measurement and shape provider.
pub trait GlyphMetrics {
    /// Rightmost ink extent (bounding-box max X) of `text` laid out at `size`.
    /// Text without ink measures as zero.
    fn extent(&self, text: &str, size: f32) -> f32;

    /// Outline of a single character at `size`. Whitespace yields an empty outline.
    fn outline(&self, ch: char, size: f32) -> GlyphOutline;
}

/// Extent of every prefix `message[..i]` with `WIDTH_MARKER` appended, one
/// entry per character of `message`.
///
/// Each entry measures a fresh string, so this is quadratic in the message
/// length; it is meant for a single short word.
pub fn cumulative_widths<M: GlyphMetrics + ?Sized>(message: &str, metrics: &M, size: f32) -> Vec<f32> {
    let chars: Vec<char> = message.chars().collect();
    let mut partial = String::with_capacity(message.len() + WIDTH_MARKER.len_utf8());
    (0..chars.len())
        .map(|i| {
            partial.clear();
            partial.extend(&chars[..i]);
            partial.push(WIDTH_MARKER);
            metrics.extent(&partial, size)
        })
        .collect()
}
