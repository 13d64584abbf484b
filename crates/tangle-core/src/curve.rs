//! Spirograph curve construction and arc-length lookup.
//!
//! The curve is a centripetal Catmull-Rom spline through the chained arm
//! endpoints. Two tables are derived from it when it is built:
//!
//! - `arc_lengths`: cumulative length at uniformly spaced spline parameters,
//!   used to convert an arc-length fraction `u` into a spline parameter `t`.
//! - `spaced_points` / `spaced_cumulative`: points spaced uniformly by arc
//!   length, used to convert a distance along the curve into `u`.
//!
//! Both are owned by the `Curve` value, so replacing the curve replaces them.

use crate::arm::ArmSpec;
use crate::constants::{ARC_LENGTH_DIVISIONS, SPACED_POINT_DIVISIONS, TANGENT_DELTA};
use glam::{EulerRot, Quat, Vec3};
use std::f32::consts::TAU;

/// Chain every arm for each of `steps + 1` uniformly spaced parameters.
///
/// Arm 0 circles the origin; arm `i` circles the endpoint of arm `i - 1`.
/// An empty arm list yields points at the origin.
pub fn sample_arm_points(arms: &[ArmSpec], steps: usize) -> Vec<Vec3> {
    let denom = steps.max(1) as f32;
    let rotations: Vec<Quat> = arms
        .iter()
        .map(|arm| Quat::from_euler(EulerRot::XYZ, arm.rotation.x, arm.rotation.y, arm.rotation.z))
        .collect();

    (0..=steps)
        .map(|step| {
            let s = step as f32 / denom;
            arms.iter()
                .zip(&rotations)
                .fold(Vec3::ZERO, |origin, (arm, rotation)| {
                    let angle = TAU * s * arm.frequency;
                    let local = Vec3::new(arm.length * angle.cos(), arm.length * angle.sin(), 0.0);
                    origin + *rotation * local
                })
        })
        .collect()
}

/// Build the curve for `arms` with `steps + 1` control points.
pub fn build_curve(arms: &[ArmSpec], steps: usize) -> Curve {
    let curve = Curve::from_points(sample_arm_points(arms, steps));
    log::debug!(
        "[curve] rebuilt from {} arms: {} points, length {:.4}",
        arms.len(),
        curve.control_points().len(),
        curve.length()
    );
    curve
}

/// Open centripetal Catmull-Rom spline.
#[derive(Clone, Debug)]
struct CatmullRom {
    points: Vec<Vec3>,
}

impl CatmullRom {
    fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    fn point(&self, t: f32) -> Vec3 {
        let points = &self.points;
        let l = points.len();
        match points.as_slice() {
            [] => return Vec3::ZERO,
            [only] => return *only,
            _ => {}
        }
        let p = (l - 1) as f32 * t.clamp(0.0, 1.0);
        let mut index = p.floor() as usize;
        let mut weight = p - index as f32;
        if index >= l - 1 {
            index = l - 2;
            weight = 1.0;
        }

        let p1 = points[index];
        let p2 = points[index + 1];
        let p0 = if index > 0 {
            points[index - 1]
        } else {
            p1 + (p1 - p2)
        };
        let p3 = if index + 2 < l {
            points[index + 2]
        } else {
            p2 + (p2 - p1)
        };

        let mut dt0 = p0.distance_squared(p1).powf(0.25);
        let mut dt1 = p1.distance_squared(p2).powf(0.25);
        let mut dt2 = p2.distance_squared(p3).powf(0.25);
        if dt1 < 1e-4 {
            dt1 = 1.0;
        }
        if dt0 < 1e-4 {
            dt0 = dt1;
        }
        if dt2 < 1e-4 {
            dt2 = dt1;
        }

        Vec3::new(
            nonuniform_segment(p0.x, p1.x, p2.x, p3.x, dt0, dt1, dt2, weight),
            nonuniform_segment(p0.y, p1.y, p2.y, p3.y, dt0, dt1, dt2, weight),
            nonuniform_segment(p0.z, p1.z, p2.z, p3.z, dt0, dt1, dt2, weight),
        )
    }
}

/// Cubic Hermite segment between `x1` and `x2` with non-uniform Catmull-Rom tangents.
#[allow(clippy::too_many_arguments)]
#[inline]
fn nonuniform_segment(x0: f32, x1: f32, x2: f32, x3: f32, dt0: f32, dt1: f32, dt2: f32, w: f32) -> f32 {
    let t1 = ((x1 - x0) / dt0 - (x2 - x0) / (dt0 + dt1) + (x2 - x1) / dt1) * dt1;
    let t2 = ((x2 - x1) / dt1 - (x3 - x1) / (dt1 + dt2) + (x3 - x2) / dt2) * dt1;
    let c2 = -3.0 * x1 + 3.0 * x2 - 2.0 * t1 - t2;
    let c3 = 2.0 * x1 - 2.0 * x2 + t1 + t2;
    x1 + t1 * w + c2 * w * w + c3 * w * w * w
}

#[derive(Clone, Debug)]
pub struct Curve {
    spline: CatmullRom,
    arc_lengths: Vec<f32>,
    spaced_points: Vec<Vec3>,
    spaced_cumulative: Vec<f32>,
}

impl Curve {
    pub fn from_points(points: Vec<Vec3>) -> Self {
        Self::with_divisions(points, ARC_LENGTH_DIVISIONS, SPACED_POINT_DIVISIONS)
    }

    pub fn with_divisions(points: Vec<Vec3>, arc_divisions: usize, spaced_divisions: usize) -> Self {
        let spline = CatmullRom::new(points);
        let arc_divisions = arc_divisions.max(1);
        let mut arc_lengths = Vec::with_capacity(arc_divisions + 1);
        let mut last = spline.point(0.0);
        let mut total = 0.0f32;
        arc_lengths.push(0.0);
        for d in 1..=arc_divisions {
            let p = spline.point(d as f32 / arc_divisions as f32);
            total += p.distance(last);
            arc_lengths.push(total);
            last = p;
        }

        let mut curve = Self {
            spline,
            arc_lengths,
            spaced_points: Vec::new(),
            spaced_cumulative: Vec::new(),
        };
        curve.spaced_points = curve.sample_uniform(spaced_divisions.max(1));
        curve.spaced_cumulative = cumulative_distances(&curve.spaced_points);
        curve
    }

    /// Points the spline interpolates.
    pub fn control_points(&self) -> &[Vec3] {
        &self.spline.points
    }

    pub fn spaced_points(&self) -> &[Vec3] {
        &self.spaced_points
    }

    pub fn length(&self) -> f32 {
        self.arc_lengths.last().copied().unwrap_or(0.0)
    }

    /// Spline point at arc-length fraction `u` in [0, 1].
    pub fn point_at(&self, u: f32) -> Vec3 {
        self.spline.point(self.u_to_t(u))
    }

    /// Unit tangent at arc-length fraction `u`; zero on a degenerate curve.
    pub fn tangent_at(&self, u: f32) -> Vec3 {
        let t = self.u_to_t(u);
        let t1 = (t - TANGENT_DELTA).max(0.0);
        let t2 = (t + TANGENT_DELTA).min(1.0);
        (self.spline.point(t2) - self.spline.point(t1)).normalize_or_zero()
    }

    /// `segments + 1` points uniformly spaced by arc length.
    pub fn sample_uniform(&self, segments: usize) -> Vec<Vec3> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|d| self.point_at(d as f32 / segments as f32))
            .collect()
    }

    /// Map an arc-length fraction to a spline parameter.
    pub fn u_to_t(&self, u: f32) -> f32 {
        let u = u.clamp(0.0, 1.0);
        let n = self.arc_lengths.len();
        let total = self.length();
        if n < 2 || total <= 0.0 {
            return u;
        }
        let target = u * total;
        let i = self.arc_lengths.partition_point(|&l| l < target);
        if i >= n {
            return 1.0;
        }
        if self.arc_lengths[i] == target {
            return i as f32 / (n - 1) as f32;
        }
        let before = self.arc_lengths[i - 1];
        let after = self.arc_lengths[i];
        let fraction = (target - before) / (after - before);
        ((i - 1) as f32 + fraction) / (n - 1) as f32
    }

    /// Arc-length fraction reached after travelling `distance` over the
    /// spaced-point table.
    ///
    /// Returns `(i - 1) / (len - 1)` for the first table index `i >= 1` whose
    /// accumulated distance is `>= distance`, or `1.0` past the end. Callers
    /// wrap `distance` themselves.
    pub fn u_for_distance(&self, distance: f32) -> f32 {
        let n = self.spaced_cumulative.len();
        if n < 2 {
            return 1.0;
        }
        let j = self.spaced_cumulative[1..].partition_point(|&c| c < distance);
        if j == n - 1 {
            1.0
        } else {
            j as f32 / (n - 1) as f32
        }
    }
}

fn cumulative_distances(points: &[Vec3]) -> Vec<f32> {
    let mut acc = 0.0f32;
    let mut out = Vec::with_capacity(points.len());
    out.push(0.0);
    for pair in points.windows(2) {
        acc += pair[1].distance(pair[0]);
        out.push(acc);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spline_passes_through_control_points() {
        let points = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.5, 0.0),
            Vec3::new(2.0, -0.5, 0.3),
            Vec3::new(3.0, 0.0, 0.0),
        ];
        let spline = CatmullRom::new(points.clone());
        for (i, p) in points.iter().enumerate() {
            let t = i as f32 / (points.len() - 1) as f32;
            assert!(spline.point(t).distance(*p) < 1e-5, "mismatch at control point {i}");
        }
    }

    #[test]
    fn single_point_spline_is_constant() {
        let spline = CatmullRom::new(vec![Vec3::ONE]);
        assert_eq!(spline.point(0.0), Vec3::ONE);
        assert_eq!(spline.point(0.5), Vec3::ONE);
        assert_eq!(spline.point(1.0), Vec3::ONE);
    }

    #[test]
    fn empty_spline_sits_at_origin() {
        let spline = CatmullRom::new(Vec::new());
        assert_eq!(spline.point(0.3), Vec3::ZERO);
    }

    #[test]
    fn zero_steps_yield_a_single_point() {
        let arms = [ArmSpec::new(0.36, Vec3::ZERO, 1.0)];
        assert_eq!(sample_arm_points(&arms, 0), vec![Vec3::new(0.36, 0.0, 0.0)]);
        let curve = build_curve(&arms, 0);
        assert_eq!(curve.control_points().len(), 1);
        assert_eq!(curve.length(), 0.0);
        assert_eq!(curve.point_at(0.5), Vec3::new(0.36, 0.0, 0.0));
    }

    #[test]
    fn cumulative_distances_start_at_zero() {
        let pts = [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0)];
        assert_eq!(cumulative_distances(&pts), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn u_to_t_is_identity_on_a_straight_uniform_line() {
        let points: Vec<Vec3> = (0..=10).map(|i| Vec3::new(i as f32, 0.0, 0.0)).collect();
        let curve = Curve::with_divisions(points, 100, 50);
        for k in 0..=20 {
            let u = k as f32 / 20.0;
            assert!((curve.u_to_t(u) - u).abs() < 1e-3, "u={u}");
        }
    }
}
