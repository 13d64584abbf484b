//! User-tunable parameters and the command reducer that edits them.
//!
//! Every control-panel edit is a `Command`. `Params::apply` writes the value
//! (clamped to the panel range) and reports which derived data is now stale.

use crate::arm::{canonical_arms, randomize_arms, zeroed_arms, ArmField, ArmSet};
use crate::constants::*;
use crate::layout::TypeSettings;
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerticalMotion {
    /// Oscillation added on top of the freshly placed glyph each tick.
    #[default]
    Offset,
    /// Oscillation deltas accumulate across ticks.
    Drift,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MotionSettings {
    pub play_ticker: bool,
    pub ticker_speed: f32,
    /// Percent of full size reached at the bottom of the pulse.
    pub scale_target: f32,
    pub scale_delay_factor: f32,
    pub position_amplitude: f32,
    pub position_delay_factor: f32,
    pub vertical_motion: VerticalMotion,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            play_ticker: true,
            ticker_speed: DEFAULT_TICKER_SPEED,
            scale_target: DEFAULT_SCALE_TARGET,
            scale_delay_factor: DEFAULT_SCALE_DELAY_FACTOR,
            position_amplitude: DEFAULT_POSITION_AMPLITUDE,
            position_delay_factor: DEFAULT_POSITION_DELAY_FACTOR,
            vertical_motion: VerticalMotion::Offset,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    /// XYZ Euler angles in radians.
    pub rotation: Vec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::from(DEFAULT_CAMERA_POSITION),
            rotation: Vec3::ZERO,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    pub text: TypeSettings,
    pub motion: MotionSettings,
    pub arms: ArmSet,
    pub show_geometry: bool,
    pub camera: CameraPose,
    pub animate_rotation_z: bool,
    /// Degrees added to the rotating arm's Z angle per tick.
    pub rotation_z_speed: f32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            text: TypeSettings {
                word: DEFAULT_WORD.to_string(),
                font_size: DEFAULT_FONT_SIZE,
                word_repeats: DEFAULT_WORD_REPEATS,
                fixed: true,
            },
            motion: MotionSettings::default(),
            arms: canonical_arms(),
            show_geometry: true,
            camera: CameraPose::default(),
            animate_rotation_z: true,
            rotation_z_speed: DEFAULT_ROTATION_Z_SPEED,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    SetWord(String),
    SetFontSize(f32),
    SetWordRepeats(u32),
    SetFixed(bool),
    SetPlayTicker(bool),
    SetTickerOffset(f32),
    SetTickerSpeed(f32),
    SetScaleTarget(f32),
    SetScaleDelayFactor(f32),
    SetPositionAmplitude(f32),
    SetPositionDelayFactor(f32),
    SetVerticalMotion(VerticalMotion),
    SetShowGeometry(bool),
    /// Rotation fields take degrees, as shown on the panel.
    SetArm {
        index: usize,
        field: ArmField,
        value: f32,
    },
    ResetArms,
    RandomizeArms,
    ZeroArms,
    SetCameraPosition(Vec3),
    SetCameraRotation(Vec3),
    SetAnimateRotationZ(bool),
    SetRotationZSpeed(f32),
}

/// Derived data invalidated by a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rebuild {
    None,
    Curve,
    Layout,
    Both,
}

impl Rebuild {
    pub fn curve(self) -> bool {
        matches!(self, Rebuild::Curve | Rebuild::Both)
    }

    pub fn layout(self) -> bool {
        matches!(self, Rebuild::Layout | Rebuild::Both)
    }
}

impl Params {
    /// Apply one edit. `SetTickerOffset` is not stored here; the caller owns
    /// the scroll offset and reads the value from the command.
    pub fn apply<R: Rng + ?Sized>(&mut self, command: Command, rng: &mut R) -> Rebuild {
        match command {
            Command::SetWord(word) => {
                self.text.word = word;
                Rebuild::Layout
            }
            Command::SetFontSize(size) => {
                self.text.font_size = clamp_to(&FONT_SIZE_RANGE, size);
                Rebuild::Layout
            }
            Command::SetWordRepeats(repeats) => {
                self.text.word_repeats =
                    repeats.clamp(*WORD_REPEATS_RANGE.start(), *WORD_REPEATS_RANGE.end());
                Rebuild::Layout
            }
            Command::SetFixed(fixed) => {
                self.text.fixed = fixed;
                Rebuild::Layout
            }
            Command::SetPlayTicker(play) => {
                self.motion.play_ticker = play;
                Rebuild::None
            }
            Command::SetTickerOffset(_) => Rebuild::None,
            Command::SetTickerSpeed(speed) => {
                self.motion.ticker_speed = clamp_to(&TICKER_SPEED_RANGE, speed);
                Rebuild::None
            }
            Command::SetScaleTarget(target) => {
                self.motion.scale_target = clamp_to(&SCALE_TARGET_RANGE, target);
                Rebuild::None
            }
            Command::SetScaleDelayFactor(factor) => {
                self.motion.scale_delay_factor = clamp_to(&SCALE_DELAY_RANGE, factor);
                Rebuild::None
            }
            Command::SetPositionAmplitude(amplitude) => {
                self.motion.position_amplitude = clamp_to(&POSITION_AMPLITUDE_RANGE, amplitude);
                Rebuild::None
            }
            Command::SetPositionDelayFactor(factor) => {
                self.motion.position_delay_factor = clamp_to(&POSITION_DELAY_RANGE, factor);
                Rebuild::None
            }
            Command::SetVerticalMotion(motion) => {
                self.motion.vertical_motion = motion;
                Rebuild::None
            }
            Command::SetShowGeometry(show) => {
                self.show_geometry = show;
                Rebuild::None
            }
            Command::SetArm {
                index,
                field,
                value,
            } => self.set_arm(index, field, value),
            Command::ResetArms => {
                self.arms = canonical_arms();
                Rebuild::Both
            }
            Command::RandomizeArms => {
                randomize_arms(&mut self.arms, rng);
                Rebuild::Both
            }
            Command::ZeroArms => {
                self.arms = zeroed_arms();
                Rebuild::Both
            }
            Command::SetCameraPosition(position) => {
                self.camera.position = Vec3::new(
                    clamp_to(&CAMERA_POSITION_XY_RANGE, position.x),
                    clamp_to(&CAMERA_POSITION_XY_RANGE, position.y),
                    clamp_to(&CAMERA_POSITION_Z_RANGE, position.z),
                );
                Rebuild::None
            }
            Command::SetCameraRotation(rotation) => {
                self.camera.rotation = Vec3::new(
                    clamp_to(&CAMERA_ROTATION_RANGE, rotation.x),
                    clamp_to(&CAMERA_ROTATION_RANGE, rotation.y),
                    clamp_to(&CAMERA_ROTATION_RANGE, rotation.z),
                );
                Rebuild::None
            }
            Command::SetAnimateRotationZ(animate) => {
                self.animate_rotation_z = animate;
                Rebuild::None
            }
            Command::SetRotationZSpeed(speed) => {
                self.rotation_z_speed = clamp_to(&ROTATION_Z_SPEED_RANGE, speed);
                Rebuild::None
            }
        }
    }

    fn set_arm(&mut self, index: usize, field: ArmField, value: f32) -> Rebuild {
        let Some(arm) = self.arms.get_mut(index) else {
            log::warn!("[params] arm {index} does not exist ({} arms)", self.arms.len());
            return Rebuild::None;
        };
        match field {
            ArmField::Length => {
                let length = clamp_to(&ARM_LENGTH_RANGE, value);
                let changed = arm.length != length;
                arm.length = length;
                if changed {
                    Rebuild::Both
                } else {
                    Rebuild::Curve
                }
            }
            ArmField::Frequency => {
                let frequency = clamp_to(&ARM_FREQUENCY_RANGE, value);
                let changed = arm.frequency != frequency;
                arm.frequency = frequency;
                if changed {
                    Rebuild::Both
                } else {
                    Rebuild::Curve
                }
            }
            ArmField::RotationX | ArmField::RotationY | ArmField::RotationZ => {
                let radians = clamp_to(&ARM_ROTATION_DEG_RANGE, value).to_radians();
                match field {
                    ArmField::RotationX => arm.rotation.x = radians,
                    ArmField::RotationY => arm.rotation.y = radians,
                    _ => arm.rotation.z = radians,
                }
                Rebuild::Curve
            }
        }
    }

    /// Advance the rotating arm's Z angle by `rotation_z_speed` degrees,
    /// wrapping at 360. Returns false when there is no such arm.
    pub fn advance_rotation_z(&mut self) -> bool {
        let speed = self.rotation_z_speed;
        let Some(arm) = self.arms.get_mut(ROTATING_ARM_INDEX) else {
            return false;
        };
        let mut degrees = arm.rotation.z.to_degrees() + speed;
        if degrees >= 360.0 {
            degrees -= 360.0;
        }
        arm.rotation.z = degrees.to_radians();
        true
    }
}
