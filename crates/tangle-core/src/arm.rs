//! Arm descriptors for the spirograph construction.
//!
//! Each arm sweeps a circle of `length` radius, tilted by a fixed XYZ Euler
//! rotation, at `frequency` turns per curve traversal. Arm `i` is centered on
//! the endpoint of arm `i - 1`.

use crate::constants::CANONICAL_ARMS;
use glam::Vec3;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArmSpec {
    pub length: f32,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: Vec3,
    pub frequency: f32,
}

impl ArmSpec {
    pub const fn new(length: f32, rotation: Vec3, frequency: f32) -> Self {
        Self {
            length,
            rotation,
            frequency,
        }
    }
}

/// Ordered arm collection. Three arms is the usual shape, any N >= 1 works.
pub type ArmSet = SmallVec<[ArmSpec; 3]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArmField {
    Length,
    RotationX,
    RotationY,
    RotationZ,
    Frequency,
}

pub fn canonical_arms() -> ArmSet {
    CANONICAL_ARMS
        .iter()
        .map(|&(length, rotation, frequency)| {
            ArmSpec::new(length, Vec3::from(rotation), frequency)
        })
        .collect()
}

/// Single circle of radius 0.5; the remaining arms collapse to nothing.
pub fn zeroed_arms() -> ArmSet {
    let mut arms = ArmSet::new();
    arms.push(ArmSpec::new(0.5, Vec3::ZERO, 1.0));
    arms.push(ArmSpec::new(0.0, Vec3::ZERO, 0.0));
    arms.push(ArmSpec::new(0.0, Vec3::ZERO, 0.0));
    arms
}

/// Redraw every arm in place: length in [0, 0.5), each rotation axis in
/// [0, PI), integer frequency in 0..=10.
pub fn randomize_arms<R: Rng + ?Sized>(arms: &mut ArmSet, rng: &mut R) {
    for arm in arms.iter_mut() {
        arm.length = rng.gen_range(0.0..0.5);
        arm.rotation = Vec3::new(
            rng.gen_range(0.0..PI),
            rng.gen_range(0.0..PI),
            rng.gen_range(0.0..PI),
        );
        arm.frequency = rng.gen_range(0..=10) as f32;
    }
}
