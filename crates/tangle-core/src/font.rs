//! `ab_glyph`-backed glyph measurement and outline extraction.

use crate::constants::GLYPH_CURVE_SEGMENTS;
use crate::error::TangleError;
use crate::metrics::{GlyphMetrics, GlyphOutline};
use ab_glyph::{Font as _, FontVec, GlyphId, OutlineCurve, Point};
use glam::Vec2;
use std::path::Path;

pub struct FontMetrics {
    font: FontVec,
    units_per_em: f32,
}

impl FontMetrics {
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, TangleError> {
        let font = FontVec::try_from_vec(data)?;
        let units_per_em = font.units_per_em().unwrap_or(1000.0);
        Ok(Self { font, units_per_em })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TangleError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| TangleError::FontRead {
            path: path.to_path_buf(),
            source,
        })?;
        let metrics = Self::from_bytes(data)?;
        log::info!(
            "[font] loaded {} ({} glyphs, {} units/em)",
            path.display(),
            metrics.font.glyph_count(),
            metrics.units_per_em
        );
        Ok(metrics)
    }

    #[inline]
    fn scale(&self, size: f32) -> f32 {
        size / self.units_per_em
    }

    fn glyph(&self, ch: char) -> GlyphId {
        self.font.glyph_id(ch)
    }
}

impl GlyphMetrics for FontMetrics {
    fn extent(&self, text: &str, size: f32) -> f32 {
        let mut caret = 0.0f32;
        let mut previous: Option<GlyphId> = None;
        let mut max_x: Option<f32> = None;
        for ch in text.chars() {
            let id = self.glyph(ch);
            if let Some(prev) = previous {
                caret += self.font.kern_unscaled(prev, id);
            }
            if let Some(outline) = self.font.outline(id) {
                let right = caret + outline.bounds.max.x;
                max_x = Some(max_x.map_or(right, |m| m.max(right)));
            }
            caret += self.font.h_advance_unscaled(id);
            previous = Some(id);
        }
        max_x.unwrap_or(0.0) * self.scale(size)
    }

    fn outline(&self, ch: char, size: f32) -> GlyphOutline {
        let Some(outline) = self.font.outline(self.glyph(ch)) else {
            return GlyphOutline::default();
        };
        let scale = self.scale(size);
        let mut segments = Vec::new();
        for curve in &outline.curves {
            flatten_curve(curve, scale, &mut segments);
        }
        GlyphOutline { segments }
    }
}

#[inline]
fn to_vec2(p: Point, scale: f32) -> Vec2 {
    Vec2::new(p.x * scale, p.y * scale)
}

fn flatten_curve(curve: &OutlineCurve, scale: f32, out: &mut Vec<[Vec2; 2]>) {
    match *curve {
        OutlineCurve::Line(p0, p1) => out.push([to_vec2(p0, scale), to_vec2(p1, scale)]),
        OutlineCurve::Quad(p0, p1, p2) => {
            let (a, b, c) = (to_vec2(p0, scale), to_vec2(p1, scale), to_vec2(p2, scale));
            push_polyline(out, |t| {
                let mt = 1.0 - t;
                a * (mt * mt) + b * (2.0 * mt * t) + c * (t * t)
            });
        }
        OutlineCurve::Cubic(p0, p1, p2, p3) => {
            let (a, b, c, d) = (
                to_vec2(p0, scale),
                to_vec2(p1, scale),
                to_vec2(p2, scale),
                to_vec2(p3, scale),
            );
            push_polyline(out, |t| {
                let mt = 1.0 - t;
                a * (mt * mt * mt) + b * (3.0 * mt * mt * t) + c * (3.0 * mt * t * t) + d * (t * t * t)
            });
        }
    }
}

fn push_polyline(out: &mut Vec<[Vec2; 2]>, eval: impl Fn(f32) -> Vec2) {
    let mut last = eval(0.0);
    for k in 1..=GLYPH_CURVE_SEGMENTS {
        let p = eval(k as f32 / GLYPH_CURVE_SEGMENTS as f32);
        out.push([last, p]);
        last = p;
    }
}
