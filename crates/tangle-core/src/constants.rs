use std::ops::RangeInclusive;

// Shared tuning constants and control ranges used by the core and the native frontend.

// Curve sampling
pub const CURVE_STEPS: usize = 1000; // control points = CURVE_STEPS + 1
pub const SPACED_POINT_DIVISIONS: usize = 5000; // arc-length lookup table = divisions + 1 points
pub const ARC_LENGTH_DIVISIONS: usize = 200; // samples used for t <-> arc length mapping
pub const CURVE_PREVIEW_SEGMENTS: usize = 1000; // polyline segments for the curve visual
pub const TANGENT_DELTA: f32 = 0.0001;

// Glyph geometry
pub const GLYPH_CURVE_SEGMENTS: usize = 12; // line segments per quadratic/cubic outline curve
pub const WIDTH_MARKER: char = 'I'; // appended when measuring to keep right-side bearing stable

// Animation
pub const TICKER_FIXED_STEP: f32 = 0.001; // scroll per tick = ticker_speed * step
pub const ROTATING_ARM_INDEX: usize = 2;

// Startup values
pub const DEFAULT_WORD: &str = "DIA STUDIO";
pub const DEFAULT_FONT_SIZE: f32 = 0.1;
pub const DEFAULT_WORD_REPEATS: u32 = 14;
pub const DEFAULT_TICKER_SPEED: f32 = 3.0;
pub const DEFAULT_SCALE_TARGET: f32 = 33.0;
pub const DEFAULT_SCALE_DELAY_FACTOR: f32 = 0.5;
pub const DEFAULT_POSITION_AMPLITUDE: f32 = 0.0;
pub const DEFAULT_POSITION_DELAY_FACTOR: f32 = 0.5;
pub const DEFAULT_ROTATION_Z_SPEED: f32 = 1.0; // degrees per tick
pub const DEFAULT_CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 2.0];

// Canonical arm configuration: (length, rotation radians xyz, frequency)
pub const CANONICAL_ARMS: [(f32, [f32; 3], f32); 3] = [
    (0.36, [0.0, 0.0, 0.0], 1.0),
    (0.43, [1.66, 0.0, 0.0], 4.0),
    (0.19, [3.68, 1.54, 1.71], 5.0),
];

// Control panel ranges
pub const FONT_SIZE_RANGE: RangeInclusive<f32> = 0.05..=0.25;
pub const WORD_REPEATS_RANGE: RangeInclusive<u32> = 1..=20;
pub const TICKER_OFFSET_RANGE: RangeInclusive<f32> = 0.0..=50.0;
pub const TICKER_SPEED_RANGE: RangeInclusive<f32> = 0.0..=30.0;
pub const SCALE_TARGET_RANGE: RangeInclusive<f32> = 1.0..=150.0;
pub const SCALE_DELAY_RANGE: RangeInclusive<f32> = 0.0..=5.0;
pub const POSITION_AMPLITUDE_RANGE: RangeInclusive<f32> = 0.0..=0.3;
pub const POSITION_DELAY_RANGE: RangeInclusive<f32> = 0.0..=5.0;
pub const ARM_LENGTH_RANGE: RangeInclusive<f32> = 0.0..=0.5;
pub const ARM_ROTATION_DEG_RANGE: RangeInclusive<f32> = 0.0..=360.0;
pub const ARM_FREQUENCY_RANGE: RangeInclusive<f32> = 0.0..=10.0;
pub const CAMERA_POSITION_XY_RANGE: RangeInclusive<f32> = -10.0..=10.0;
pub const CAMERA_POSITION_Z_RANGE: RangeInclusive<f32> = 0.0..=20.0;
pub const CAMERA_ROTATION_RANGE: RangeInclusive<f32> =
    -std::f32::consts::PI..=std::f32::consts::PI;
pub const ROTATION_Z_SPEED_RANGE: RangeInclusive<f32> = 0.0..=10.0;

// Camera projection
pub const CAMERA_FOVY_DEGREES: f32 = 70.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Colors
pub const CURVE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub const GLYPH_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

#[inline]
pub fn clamp_to(range: &RangeInclusive<f32>, value: f32) -> f32 {
    value.clamp(*range.start(), *range.end())
}
