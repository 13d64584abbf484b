// Host-side tests for glyph measurement and text distribution.

mod common;

use common::{circle_arms, StubMetrics, ADVANCE};
use tangle_core::constants::{CURVE_STEPS, WIDTH_MARKER};
use tangle_core::{
    accumulated_offsets, build_curve, cumulative_widths, layout, place_glyphs, GlyphMetrics,
    TypeSettings,
};

fn settings(word: &str, repeats: u32, fixed: bool) -> TypeSettings {
    TypeSettings {
        word: word.to_string(),
        font_size: 0.1,
        word_repeats: repeats,
        fixed,
    }
}

#[test]
fn cumulative_widths_append_marker_to_each_prefix() {
    let metrics = StubMetrics;
    let widths = cumulative_widths("AB C", &metrics, 0.1);
    assert_eq!(widths.len(), 4);
    let expected: Vec<f32> = ["", "A", "AB", "AB "]
        .iter()
        .map(|prefix| metrics.extent(&format!("{prefix}{WIDTH_MARKER}"), 0.1))
        .collect();
    assert_eq!(widths, expected);
    // the trailing space still advances the caret because the marker follows it
    assert!(widths[3] > widths[2]);
}

#[test]
fn two_letter_word_places_two_glyphs() {
    let curve = build_curve(&circle_arms(0.36), CURVE_STEPS);
    let metrics = StubMetrics;
    let entries = layout(&settings("AB", 1, false), &metrics, curve.length());
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].character, 'A');
    assert_eq!(entries[1].character, 'B');
    assert_eq!(entries[0].target_arc_length, metrics.extent("I", 0.1));
    assert_eq!(entries[1].target_arc_length, metrics.extent("AI", 0.1));
}

#[test]
fn layout_is_idempotent() {
    let curve = build_curve(&circle_arms(0.36), CURVE_STEPS);
    for fixed in [false, true] {
        let s = settings("DIA STUDIO", 3, fixed);
        let first = layout(&s, &StubMetrics, curve.length());
        let second = layout(&s, &StubMetrics, curve.length());
        assert_eq!(first, second);
    }
}

#[test]
fn repeats_are_joined_by_spaces() {
    let entries = layout(&settings("AB", 3, false), &StubMetrics, 100.0);
    let text: String = entries.iter().map(|e| e.character).collect();
    assert_eq!(text, "AB AB AB");
}

#[test]
fn unfixed_offsets_increase_monotonically() {
    let word = "TANGLE";
    let entries = layout(&settings(word, 4, false), &StubMetrics, 100.0);
    let stride = word.chars().count() + 1;
    for repeat in entries.chunks(stride) {
        let letters = &repeat[..word.chars().count()];
        for pair in letters.windows(2) {
            assert!(
                pair[0].target_arc_length < pair[1].target_arc_length,
                "{pair:?}"
            );
        }
    }
    for pair in entries.windows(2) {
        assert!(pair[0].target_arc_length <= pair[1].target_arc_length);
    }
}

#[test]
fn fixed_mode_spans_the_curve_once() {
    let curve = build_curve(&circle_arms(0.36), CURVE_STEPS);
    let length = curve.length();
    let space = 0.1;
    let raw = layout(&settings("AB", 3, false), &StubMetrics, f32::MAX);
    let fixed = layout(&settings("AB", 3, true), &StubMetrics, length);
    assert_eq!(raw.len(), fixed.len());

    let n = raw.len() as f32;
    let raw_last = raw.last().map(|e| e.target_arc_length).unwrap_or_default();
    let per_letter = (length - (raw_last + space)) / n;
    for (i, (r, f)) in raw.iter().zip(&fixed).enumerate() {
        let expected = r.target_arc_length + per_letter * i as f32;
        assert!((f.target_arc_length - expected).abs() < 1e-5, "entry {i}");
    }
    // one more slot after the last glyph lands exactly on the curve end
    let last = fixed.last().map(|e| e.target_arc_length).unwrap_or_default();
    assert!((last + space + per_letter - length).abs() < 1e-5);
}

#[test]
fn overflowing_characters_are_dropped() {
    let length = 0.3;
    let entries = layout(&settings("ABCDEFG", 3, false), &StubMetrics, length);
    let accum = cumulative_widths("ABCDEFG", &StubMetrics, 0.1);
    let all = accumulated_offsets(&accum, 3, 0.1);
    let expected = all.iter().filter(|&&o| o <= length).count();
    assert_eq!(entries.len(), expected);
    assert!(entries.len() < all.len());
    assert!(entries.iter().all(|e| e.target_arc_length <= length));
    // each kept glyph advances the stub's fixed pitch
    assert!((entries[1].target_arc_length - ADVANCE * 0.1).abs() < 1e-6);
}

#[test]
fn empty_word_lays_out_nothing() {
    assert!(layout(&settings("", 5, true), &StubMetrics, 10.0).is_empty());
}

#[test]
fn placed_glyphs_share_outlines_per_character() {
    let curve = build_curve(&circle_arms(0.36), CURVE_STEPS);
    let entries = layout(&settings("AA B", 2, false), &StubMetrics, curve.length());
    let glyphs = place_glyphs(&entries, &curve, &StubMetrics, 0.1);
    assert_eq!(glyphs.len(), entries.len());
    assert!(std::sync::Arc::ptr_eq(&glyphs[0].outline, &glyphs[1].outline));
    // spaces still get a slot, with empty geometry
    assert!(glyphs[2].outline.is_empty());
    assert!(glyphs.iter().all(|g| g.scale == 1.0 && g.drift == 0.0));
}
