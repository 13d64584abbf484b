//! Distribution of a repeated word along the curve.

use crate::curve::Curve;
use crate::metrics::{cumulative_widths, GlyphMetrics, GlyphOutline};
use crate::positioner::{position_on_curve, GlyphPose};
use fnv::FnvHashMap;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub struct TypeSettings {
    pub word: String,
    pub font_size: f32,
    pub word_repeats: u32,
    /// Stretch or compress spacing so the repeated word spans the curve exactly once.
    pub fixed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutEntry {
    pub character: char,
    pub target_arc_length: f32,
}

/// `word` repeated `repeats` times, joined by single spaces.
pub fn repeated_message(word: &str, repeats: u32) -> String {
    vec![word; repeats as usize].join(" ")
}

/// Arc-length offset of every character of the repeated message, before
/// curve-length filtering.
pub fn accumulated_offsets(accum: &[f32], repeats: u32, space_width: f32) -> Vec<f32> {
    let Some(&word_width) = accum.last() else {
        return Vec::new();
    };
    let repeats = repeats as usize;
    let mut offsets = Vec::with_capacity(repeats * (accum.len() + 1));
    for repeat in 0..repeats {
        let shift = repeat as f32 * (word_width + space_width);
        offsets.extend(accum.iter().map(|a| a + shift));
        if repeat + 1 < repeats {
            let last = offsets.last().copied().unwrap_or(0.0);
            offsets.push(last + space_width);
        }
    }
    offsets
}

/// Spread `offsets` so the slot after the last glyph lands on `curve_length`.
///
/// Each entry `i` gains `i * (curve_length - used) / n`, where `used` is the
/// last offset plus one space.
pub fn fix_to_length(offsets: &mut [f32], curve_length: f32, space_width: f32) {
    let Some(&last) = offsets.last() else {
        return;
    };
    let total_width_used = last + space_width;
    let per_letter = (curve_length - total_width_used) / offsets.len() as f32;
    for (i, offset) in offsets.iter_mut().enumerate() {
        *offset += per_letter * i as f32;
    }
}

/// Target arc lengths for the repeated word. Characters that would land past
/// `curve_length` are dropped.
pub fn layout<M: GlyphMetrics + ?Sized>(
    settings: &TypeSettings,
    metrics: &M,
    curve_length: f32,
) -> Vec<LayoutEntry> {
    if settings.word.is_empty() || settings.word_repeats == 0 {
        return Vec::new();
    }
    let accum = cumulative_widths(&settings.word, metrics, settings.font_size);
    let space_width = settings.font_size;
    let mut offsets = accumulated_offsets(&accum, settings.word_repeats, space_width);
    if settings.fixed {
        fix_to_length(&mut offsets, curve_length, space_width);
    }

    repeated_message(&settings.word, settings.word_repeats)
        .chars()
        .zip(offsets)
        .filter(|&(_, offset)| offset <= curve_length)
        .map(|(character, target_arc_length)| LayoutEntry {
            character,
            target_arc_length,
        })
        .collect()
}

/// One character instantiated on the curve.
#[derive(Clone, Debug)]
pub struct PlacedGlyph {
    pub entry: LayoutEntry,
    pub outline: Arc<GlyphOutline>,
    pub pose: GlyphPose,
    pub scale: f32,
    /// Accumulated vertical displacement, used by drifting vertical motion.
    pub drift: f32,
}

/// Create one glyph per entry and put it at its arc length (no scroll offset).
/// Repeated characters share a single outline.
pub fn place_glyphs<M: GlyphMetrics + ?Sized>(
    entries: &[LayoutEntry],
    curve: &Curve,
    metrics: &M,
    font_size: f32,
) -> Vec<PlacedGlyph> {
    let mut outlines: FnvHashMap<char, Arc<GlyphOutline>> = FnvHashMap::default();
    entries
        .iter()
        .map(|entry| {
            let outline = outlines
                .entry(entry.character)
                .or_insert_with(|| Arc::new(metrics.outline(entry.character, font_size)))
                .clone();
            PlacedGlyph {
                entry: *entry,
                outline,
                pose: position_on_curve(curve, entry.target_arc_length, 0.0, font_size),
                scale: 1.0,
                drift: 0.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulated_offsets_insert_one_space_between_repeats() {
        let offsets = accumulated_offsets(&[1.0, 2.0], 3, 0.5);
        // word width 2.0, stride 2.5
        assert_eq!(offsets, vec![1.0, 2.0, 2.5, 3.5, 4.5, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn single_repeat_has_no_trailing_space() {
        assert_eq!(accumulated_offsets(&[0.0, 1.0], 1, 0.5), vec![0.0, 1.0]);
    }

    #[test]
    fn fix_to_length_puts_the_next_slot_on_curve_end() {
        let mut offsets = vec![0.0, 1.0, 2.0, 3.0];
        fix_to_length(&mut offsets, 10.0, 0.5);
        let per_letter = (10.0 - 3.5) / 4.0;
        assert!((offsets[3] + 0.5 + per_letter - 10.0).abs() < 1e-5);
        assert_eq!(offsets[0], 0.0);
    }

    #[test]
    fn repeated_message_joins_with_spaces() {
        assert_eq!(repeated_message("AB", 3), "AB AB AB");
        assert_eq!(repeated_message("AB", 1), "AB");
    }
}
