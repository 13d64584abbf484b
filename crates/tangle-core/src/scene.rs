//! Line geometry handed to the renderer.

use crate::layout::PlacedGlyph;
use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl LineVertex {
    #[inline]
    pub fn new(position: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }
}

/// Line-list vertices for a polyline (two vertices per segment).
pub fn polyline_vertices(points: &[Vec3], color: [f32; 4]) -> Vec<LineVertex> {
    points
        .windows(2)
        .flat_map(|pair| [LineVertex::new(pair[0], color), LineVertex::new(pair[1], color)])
        .collect()
}

/// World transform of a placed glyph: scale about its origin, then pose.
#[inline]
pub fn glyph_model_matrix(glyph: &PlacedGlyph) -> Mat4 {
    Mat4::from_scale_rotation_translation(
        Vec3::splat(glyph.scale),
        glyph.pose.rotation,
        glyph.pose.position,
    )
}

/// Append world-space outline segments of every glyph to `out`.
pub fn append_glyph_vertices(glyphs: &[PlacedGlyph], color: [f32; 4], out: &mut Vec<LineVertex>) {
    for glyph in glyphs {
        let model = glyph_model_matrix(glyph);
        for [a, b] in &glyph.outline.segments {
            out.push(LineVertex::new(model.transform_point3(a.extend(0.0)), color));
            out.push(LineVertex::new(model.transform_point3(b.extend(0.0)), color));
        }
    }
}
