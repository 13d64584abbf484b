//! Distance-along-curve to glyph pose.

use crate::curve::Curve;
use glam::{Mat3, Quat, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Position and orientation of a glyph placed on the curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphPose {
    pub position: Vec3,
    pub rotation: Quat,
}

/// Wrap `distance + offset` into `[0, length)`. A zero-length curve maps everything to 0.
#[inline]
pub fn wrap_distance(distance: f32, offset: f32, length: f32) -> f32 {
    if length <= 0.0 {
        return 0.0;
    }
    let wrapped = (distance + offset).rem_euclid(length);
    // rem_euclid may round up to `length` for tiny negative inputs
    if wrapped >= length {
        0.0
    } else {
        wrapped
    }
}

/// Place a glyph `distance` along the curve, shifted by the scroll `offset`.
///
/// The glyph's +Z axis follows the curve tangent, then it is yawed by -90°
/// so its baseline (+X) runs along the curve, and finally shifted back by
/// half the font size along its own X axis.
pub fn position_on_curve(curve: &Curve, distance: f32, offset: f32, font_size: f32) -> GlyphPose {
    let effective = wrap_distance(distance, offset, curve.length());
    let u = curve.u_for_distance(effective);
    let point = curve.point_at(u);
    let tangent = curve.tangent_at(u);

    let rotation = look_along(tangent, Vec3::Y) * Quat::from_rotation_y(-FRAC_PI_2);
    let position = point + rotation * Vec3::X * (-font_size / 2.0);
    GlyphPose { position, rotation }
}

/// Rotation that points local +Z along `direction` with local +Y as close to `up` as possible.
pub fn look_along(direction: Vec3, up: Vec3) -> Quat {
    let mut z = if direction.length_squared() == 0.0 {
        Vec3::Z
    } else {
        direction.normalize()
    };
    let mut x = up.cross(z);
    if x.length_squared() == 0.0 {
        if up.z.abs() == 1.0 {
            z.x += 0.0001;
        } else {
            z.z += 0.0001;
        }
        z = z.normalize();
        x = up.cross(z);
    }
    let x = x.normalize();
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z))
}
