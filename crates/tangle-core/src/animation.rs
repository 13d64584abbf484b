//! Per-tick scroll and oscillation of placed glyphs.

use crate::constants::TICKER_FIXED_STEP;
use crate::curve::Curve;
use crate::layout::PlacedGlyph;
use crate::params::{MotionSettings, VerticalMotion};
use crate::positioner::position_on_curve;
use instant::Instant;
use std::cell::Cell;

/// Monotonic time source, in seconds, for the oscillation phase.
pub trait Clock {
    fn now_secs(&self) -> f64;
}

/// Wall-clock time since construction.
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Hand-driven clock for deterministic ticks.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_secs: f64) -> Self {
        Self {
            now: Cell::new(start_secs),
        }
    }

    pub fn set(&self, secs: f64) {
        self.now.set(secs);
    }

    pub fn advance(&self, secs: f64) {
        self.now.set(self.now.get() + secs);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> f64 {
        self.now.get()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationState {
    /// Scroll offset along the curve, in arc-length units.
    pub scroll_offset: f32,
    /// Time of the most recent tick, in seconds.
    pub time: f64,
}

impl AnimationState {
    /// Scroll backwards by `speed * TICKER_FIXED_STEP`, wrapping below zero.
    pub fn advance_ticker(&mut self, speed: f32, curve_length: f32) {
        self.scroll_offset -= speed * TICKER_FIXED_STEP;
        if self.scroll_offset < 0.0 {
            self.scroll_offset += curve_length;
        }
    }
}

/// Scale for glyph `index`: pulses between `scale_target / 100` and 1.
#[inline]
pub fn pulse_scale(time: f64, index: usize, scale_target: f32, delay_factor: f32) -> f32 {
    let effect = (((time + index as f64 * delay_factor as f64).sin() + 1.0) * 0.5) as f32;
    (scale_target / 100.0) * (1.0 - effect) + effect
}

/// Vertical displacement delta for glyph `index` this tick.
#[inline]
pub fn vertical_delta(time: f64, index: usize, amplitude: f32, delay_factor: f32) -> f32 {
    ((time + index as f64 * delay_factor as f64).sin() as f32) * amplitude
}

/// Re-place every glyph for the current scroll offset and apply the
/// oscillations.
pub fn animate_glyphs(
    glyphs: &mut [PlacedGlyph],
    curve: &Curve,
    motion: &MotionSettings,
    state: &AnimationState,
    font_size: f32,
) {
    for (i, glyph) in glyphs.iter_mut().enumerate() {
        glyph.pose = position_on_curve(
            curve,
            glyph.entry.target_arc_length,
            state.scroll_offset,
            font_size,
        );
        glyph.scale = pulse_scale(
            state.time,
            i,
            motion.scale_target,
            motion.scale_delay_factor,
        );
        let delta = vertical_delta(
            state.time,
            i,
            motion.position_amplitude,
            motion.position_delay_factor,
        );
        let lift = match motion.vertical_motion {
            VerticalMotion::Offset => delta,
            VerticalMotion::Drift => {
                glyph.drift += delta;
                glyph.drift
            }
        };
        glyph.pose.position.y += lift;
    }
}
