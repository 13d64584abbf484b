// Keyboard stand-in for the control panel: every key press maps to at most
// one `Command`, computed from the current parameters. Lowercase letters step
// a value up, the shifted letter steps it down.

use tangle_core::constants::ARM_FREQUENCY_RANGE;
use tangle_core::{ArmField, Command, Params, VerticalMotion};
use winit::keyboard::{Key, NamedKey};

const FONT_SIZE_STEP: f32 = 0.01;
const TICKER_SPEED_STEP: f32 = 1.0;
const SCALE_TARGET_STEP: f32 = 5.0;
const DELAY_STEP: f32 = 0.1;
const POSITION_AMPLITUDE_STEP: f32 = 0.01;
const ARM_LENGTH_STEP: f32 = 0.01;
const ARM_ROTATION_STEP_DEG: f32 = 15.0;
const ROTATION_Z_SPEED_STEP: f32 = 0.5;
const CAMERA_STEP: f32 = 0.1;
const CAMERA_ROTATION_STEP: f32 = 0.05;

/// Panel state that lives between key presses.
#[derive(Debug, Default)]
pub struct KeyPanel {
    selected_arm: usize,
    word_draft: Option<String>,
}

impl KeyPanel {
    /// True while a new word is being typed; Enter commits, Escape cancels.
    pub fn is_editing(&self) -> bool {
        self.word_draft.is_some()
    }

    pub fn command_for_key(&mut self, key: &Key, params: &Params) -> Option<Command> {
        if self.word_draft.is_some() {
            return self.edit_word(key);
        }
        match key {
            Key::Named(NamedKey::Enter) => {
                self.word_draft = Some(String::new());
                log::info!("[keys] editing word, Enter to apply");
                None
            }
            Key::Named(named) => named_command(*named, params),
            Key::Character(text) => self.character_command(text.as_str(), params),
            _ => None,
        }
    }

    fn edit_word(&mut self, key: &Key) -> Option<Command> {
        let draft = self.word_draft.as_mut()?;
        match key {
            Key::Named(NamedKey::Enter) => self.word_draft.take().map(Command::SetWord),
            Key::Named(NamedKey::Escape) => {
                self.word_draft = None;
                None
            }
            Key::Named(NamedKey::Backspace) => {
                draft.pop();
                None
            }
            Key::Named(NamedKey::Space) => {
                draft.push(' ');
                None
            }
            Key::Character(text) => {
                draft.push_str(text.as_str());
                None
            }
            _ => None,
        }
    }

    fn character_command(&mut self, text: &str, params: &Params) -> Option<Command> {
        let type_settings = &params.text;
        let motion = &params.motion;
        let rotation = params.camera.rotation;
        let command = match text {
            "1" | "2" | "3" => {
                let index = text.parse::<usize>().ok()? - 1;
                if index < params.arms.len() {
                    self.selected_arm = index;
                    log::info!("[keys] arm {} selected", index + 1);
                }
                return None;
            }
            "j" | "J" | "k" | "K" | "u" | "U" | "i" | "I" | "o" | "O" => {
                return self.arm_command(text, params);
            }
            "[" => Command::SetFontSize(type_settings.font_size - FONT_SIZE_STEP),
            "]" => Command::SetFontSize(type_settings.font_size + FONT_SIZE_STEP),
            "-" => Command::SetWordRepeats(type_settings.word_repeats.saturating_sub(1)),
            "=" => Command::SetWordRepeats(type_settings.word_repeats + 1),
            "," => Command::SetTickerSpeed(motion.ticker_speed - TICKER_SPEED_STEP),
            "." => Command::SetTickerSpeed(motion.ticker_speed + TICKER_SPEED_STEP),
            ";" => Command::SetScaleTarget(motion.scale_target - SCALE_TARGET_STEP),
            "'" => Command::SetScaleTarget(motion.scale_target + SCALE_TARGET_STEP),
            "9" => Command::SetPositionAmplitude(motion.position_amplitude - POSITION_AMPLITUDE_STEP),
            "0" => Command::SetPositionAmplitude(motion.position_amplitude + POSITION_AMPLITUDE_STEP),
            "d" => Command::SetScaleDelayFactor(motion.scale_delay_factor + DELAY_STEP),
            "D" => Command::SetScaleDelayFactor(motion.scale_delay_factor - DELAY_STEP),
            "p" => Command::SetPositionDelayFactor(motion.position_delay_factor + DELAY_STEP),
            "P" => Command::SetPositionDelayFactor(motion.position_delay_factor - DELAY_STEP),
            "s" => Command::SetRotationZSpeed(params.rotation_z_speed + ROTATION_Z_SPEED_STEP),
            "S" => Command::SetRotationZSpeed(params.rotation_z_speed - ROTATION_Z_SPEED_STEP),
            "t" | "T" => Command::SetTickerOffset(0.0),
            "v" => Command::SetCameraRotation(rotation + glam::Vec3::X * CAMERA_ROTATION_STEP),
            "V" => Command::SetCameraRotation(rotation - glam::Vec3::X * CAMERA_ROTATION_STEP),
            "b" => Command::SetCameraRotation(rotation + glam::Vec3::Y * CAMERA_ROTATION_STEP),
            "B" => Command::SetCameraRotation(rotation - glam::Vec3::Y * CAMERA_ROTATION_STEP),
            "m" => Command::SetCameraRotation(rotation + glam::Vec3::Z * CAMERA_ROTATION_STEP),
            "M" => Command::SetCameraRotation(rotation - glam::Vec3::Z * CAMERA_ROTATION_STEP),
            _ => match text.to_ascii_lowercase().as_str() {
                "f" => Command::SetFixed(!type_settings.fixed),
                "g" => Command::SetShowGeometry(!params.show_geometry),
                "r" => Command::ResetArms,
                "n" => Command::RandomizeArms,
                "z" => Command::ZeroArms,
                "a" => Command::SetAnimateRotationZ(!params.animate_rotation_z),
                "w" => Command::SetVerticalMotion(match motion.vertical_motion {
                    VerticalMotion::Offset => VerticalMotion::Drift,
                    VerticalMotion::Drift => VerticalMotion::Offset,
                }),
                _ => return None,
            },
        };
        Some(command)
    }

    /// Edits of the selected arm: `j` length, `k` frequency, `u`/`i`/`o`
    /// rotation about X/Y/Z.
    fn arm_command(&self, text: &str, params: &Params) -> Option<Command> {
        let index = self.selected_arm;
        let arm = params.arms.get(index)?;
        let up = text.chars().all(|c| c.is_ascii_lowercase());
        let sign = if up { 1.0 } else { -1.0 };
        let (field, value) = match text.to_ascii_lowercase().as_str() {
            "j" => (ArmField::Length, arm.length + sign * ARM_LENGTH_STEP),
            "k" => (ArmField::Frequency, step_frequency(arm.frequency, up)),
            "u" => (ArmField::RotationX, step_degrees(arm.rotation.x, sign)),
            "i" => (ArmField::RotationY, step_degrees(arm.rotation.y, sign)),
            "o" => (ArmField::RotationZ, step_degrees(arm.rotation.z, sign)),
            _ => return None,
        };
        Some(Command::SetArm {
            index,
            field,
            value,
        })
    }
}

fn named_command(key: NamedKey, params: &Params) -> Option<Command> {
    let position = params.camera.position;
    let delta = match key {
        NamedKey::Space => return Some(Command::SetPlayTicker(!params.motion.play_ticker)),
        NamedKey::ArrowLeft => glam::Vec3::new(-CAMERA_STEP, 0.0, 0.0),
        NamedKey::ArrowRight => glam::Vec3::new(CAMERA_STEP, 0.0, 0.0),
        NamedKey::ArrowUp => glam::Vec3::new(0.0, CAMERA_STEP, 0.0),
        NamedKey::ArrowDown => glam::Vec3::new(0.0, -CAMERA_STEP, 0.0),
        NamedKey::PageUp => glam::Vec3::new(0.0, 0.0, -CAMERA_STEP),
        NamedKey::PageDown => glam::Vec3::new(0.0, 0.0, CAMERA_STEP),
        _ => return None,
    };
    Some(Command::SetCameraPosition(position + delta))
}

/// Next whole frequency, wrapping at both ends of the panel range.
fn step_frequency(current: f32, up: bool) -> f32 {
    let (lo, hi) = (*ARM_FREQUENCY_RANGE.start(), *ARM_FREQUENCY_RANGE.end());
    if up {
        let next = current.floor() + 1.0;
        if next > hi {
            lo
        } else {
            next
        }
    } else {
        let next = current.ceil() - 1.0;
        if next < lo {
            hi
        } else {
            next
        }
    }
}

/// Rotation in degrees after one step, kept within [0, 360).
fn step_degrees(radians: f32, sign: f32) -> f32 {
    (radians.to_degrees() + sign * ARM_ROTATION_STEP_DEG).rem_euclid(360.0)
}
