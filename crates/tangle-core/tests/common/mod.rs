// Shared fixtures for host-side tests: a font-free metrics stub and arm presets.

#![allow(dead_code)]

use glam::{Vec2, Vec3};
use tangle_core::{ArmSet, ArmSpec, GlyphMetrics, GlyphOutline, Params};

pub const ADVANCE: f32 = 0.7; // pen advance per character, in em
pub const INK: f32 = 0.6; // ink width of every non-space glyph except 'I', in em

/// Fixed-advance font: 'I' is a hairline at the pen position, spaces have no ink.
pub struct StubMetrics;

impl GlyphMetrics for StubMetrics {
    fn extent(&self, text: &str, size: f32) -> f32 {
        let mut right = 0.0f32;
        for (i, ch) in text.chars().enumerate() {
            if ch == ' ' {
                continue;
            }
            let pen = i as f32 * ADVANCE * size;
            let ink = if ch == 'I' { 0.0 } else { INK * size };
            right = right.max(pen + ink);
        }
        right
    }

    fn outline(&self, ch: char, size: f32) -> GlyphOutline {
        if ch == ' ' {
            return GlyphOutline::default();
        }
        GlyphOutline {
            segments: vec![[Vec2::ZERO, Vec2::new(INK * size, size)]],
        }
    }
}

pub fn circle_arms(radius: f32) -> ArmSet {
    let mut arms = ArmSet::new();
    arms.push(ArmSpec::new(radius, Vec3::ZERO, 1.0));
    arms
}

/// Defaults with the self-rotating arm switched off so the curve stays put.
pub fn still_params() -> Params {
    let mut params = Params::default();
    params.animate_rotation_z = false;
    params
}
