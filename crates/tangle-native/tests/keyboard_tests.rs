// Host-side tests for the keyboard panel.

mod keyboard {
    include!("../src/keyboard.rs");
}

use glam::Vec3;
use keyboard::KeyPanel;
use tangle_core::{ArmField, Command, Params, VerticalMotion};
use winit::keyboard::{Key, NamedKey};

fn ch(text: &str) -> Key {
    Key::Character(text.into())
}

fn press(text: &str, params: &Params) -> Option<Command> {
    KeyPanel::default().command_for_key(&ch(text), params)
}

#[test]
fn toggles_flip_the_current_value() {
    let mut panel = KeyPanel::default();
    let mut params = Params::default();
    let space = Key::Named(NamedKey::Space);
    assert_eq!(panel.command_for_key(&space, &params), Some(Command::SetPlayTicker(false)));
    params.motion.play_ticker = false;
    assert_eq!(panel.command_for_key(&space, &params), Some(Command::SetPlayTicker(true)));
    assert_eq!(press("f", &params), Some(Command::SetFixed(false)));
    assert_eq!(press("G", &params), Some(Command::SetShowGeometry(false)));
    assert_eq!(press("a", &params), Some(Command::SetAnimateRotationZ(false)));
    assert_eq!(
        press("w", &params),
        Some(Command::SetVerticalMotion(VerticalMotion::Drift))
    );
}

#[test]
fn arm_presets() {
    let params = Params::default();
    assert_eq!(press("r", &params), Some(Command::ResetArms));
    assert_eq!(press("n", &params), Some(Command::RandomizeArms));
    assert_eq!(press("z", &params), Some(Command::ZeroArms));
}

#[test]
fn steppers_are_relative_to_current_params() {
    let params = Params::default();
    assert_eq!(
        press("=", &params),
        Some(Command::SetWordRepeats(params.text.word_repeats + 1))
    );
    assert_eq!(
        press("-", &params),
        Some(Command::SetWordRepeats(params.text.word_repeats - 1))
    );
    match press(".", &params) {
        Some(Command::SetTickerSpeed(speed)) => {
            assert!((speed - (params.motion.ticker_speed + 1.0)).abs() < 1e-6)
        }
        other => panic!("unexpected {other:?}"),
    }
    match press("]", &params) {
        Some(Command::SetFontSize(size)) => assert!(size > params.text.font_size),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn shifted_letters_step_down() {
    let params = Params::default();
    let motion = &params.motion;
    match (press("d", &params), press("D", &params)) {
        (Some(Command::SetScaleDelayFactor(up)), Some(Command::SetScaleDelayFactor(down))) => {
            assert!(up > motion.scale_delay_factor && down < motion.scale_delay_factor)
        }
        other => panic!("unexpected {other:?}"),
    }
    match (press("p", &params), press("P", &params)) {
        (
            Some(Command::SetPositionDelayFactor(up)),
            Some(Command::SetPositionDelayFactor(down)),
        ) => assert!(up > motion.position_delay_factor && down < motion.position_delay_factor),
        other => panic!("unexpected {other:?}"),
    }
    match (press("s", &params), press("S", &params)) {
        (Some(Command::SetRotationZSpeed(up)), Some(Command::SetRotationZSpeed(down))) => {
            assert!(up > params.rotation_z_speed && down < params.rotation_z_speed)
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn camera_rotation_keys_turn_one_axis() {
    let params = Params::default();
    match press("b", &params) {
        Some(Command::SetCameraRotation(r)) => {
            assert!((r - Vec3::new(0.0, 0.05, 0.0)).length() < 1e-6)
        }
        other => panic!("unexpected {other:?}"),
    }
    match press("V", &params) {
        Some(Command::SetCameraRotation(r)) => assert!(r.x < 0.0 && r.y == 0.0 && r.z == 0.0),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn ticker_offset_rewinds() {
    assert_eq!(press("t", &Params::default()), Some(Command::SetTickerOffset(0.0)));
}

#[test]
fn number_keys_select_the_arm_that_letters_edit() {
    let mut panel = KeyPanel::default();
    let mut params = Params::default();
    assert_eq!(panel.command_for_key(&ch("2"), &params), None);
    assert_eq!(
        panel.command_for_key(&ch("k"), &params),
        Some(Command::SetArm {
            index: 1,
            field: ArmField::Frequency,
            value: 5.0,
        })
    );
    match panel.command_for_key(&ch("J"), &params) {
        Some(Command::SetArm {
            index: 1,
            field: ArmField::Length,
            value,
        }) => assert!((value - (params.arms[1].length - 0.01)).abs() < 1e-6),
        other => panic!("unexpected {other:?}"),
    }

    panel.command_for_key(&ch("3"), &params);
    params.arms[2].frequency = 10.0;
    assert_eq!(
        panel.command_for_key(&ch("k"), &params),
        Some(Command::SetArm {
            index: 2,
            field: ArmField::Frequency,
            value: 0.0,
        })
    );

    params.arms.truncate(1);
    assert_eq!(panel.command_for_key(&ch("k"), &params), None);
}

#[test]
fn arm_rotation_steps_wrap_within_a_turn() {
    let mut panel = KeyPanel::default();
    let mut params = Params::default();
    params.arms[0].rotation.x = 350.0f32.to_radians();
    panel.command_for_key(&ch("1"), &params);
    match panel.command_for_key(&ch("u"), &params) {
        Some(Command::SetArm {
            index: 0,
            field: ArmField::RotationX,
            value,
        }) => assert!((value - 5.0).abs() < 1e-3),
        other => panic!("unexpected {other:?}"),
    }
    match panel.command_for_key(&ch("I"), &params) {
        Some(Command::SetArm {
            index: 0,
            field: ArmField::RotationY,
            value,
        }) => assert!((value - 345.0).abs() < 1e-3),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn enter_starts_and_commits_a_word() {
    let mut panel = KeyPanel::default();
    let params = Params::default();
    let enter = Key::Named(NamedKey::Enter);
    assert_eq!(panel.command_for_key(&enter, &params), None);
    assert!(panel.is_editing());
    for key in [ch("H"), ch("f"), Key::Named(NamedKey::Space), ch("x")] {
        assert_eq!(panel.command_for_key(&key, &params), None);
    }
    panel.command_for_key(&Key::Named(NamedKey::Backspace), &params);
    assert_eq!(
        panel.command_for_key(&enter, &params),
        Some(Command::SetWord("Hf ".to_string()))
    );
    assert!(!panel.is_editing());
}

#[test]
fn escape_cancels_a_word_edit() {
    let mut panel = KeyPanel::default();
    let params = Params::default();
    panel.command_for_key(&Key::Named(NamedKey::Enter), &params);
    panel.command_for_key(&ch("Q"), &params);
    assert_eq!(panel.command_for_key(&Key::Named(NamedKey::Escape), &params), None);
    assert!(!panel.is_editing());
    assert_eq!(press("r", &params), Some(Command::ResetArms));
}

#[test]
fn arrows_move_the_camera() {
    let mut panel = KeyPanel::default();
    let params = Params::default();
    let start = params.camera.position;
    match panel.command_for_key(&Key::Named(NamedKey::PageDown), &params) {
        Some(Command::SetCameraPosition(p)) => {
            assert!((p - (start + Vec3::new(0.0, 0.0, 0.1))).length() < 1e-6)
        }
        other => panic!("unexpected {other:?}"),
    }
    match panel.command_for_key(&Key::Named(NamedKey::ArrowLeft), &params) {
        Some(Command::SetCameraPosition(p)) => assert!(p.x < start.x),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn unmapped_keys_do_nothing() {
    let mut panel = KeyPanel::default();
    let params = Params::default();
    assert_eq!(panel.command_for_key(&ch("q"), &params), None);
    assert_eq!(panel.command_for_key(&Key::Named(NamedKey::Tab), &params), None);
}
