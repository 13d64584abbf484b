//! Owns the parameter record and everything derived from it.
//!
//! Data flow: arms -> curve (+ arc-length tables) -> layout -> placed glyphs,
//! then `tick` scrolls and oscillates the glyphs once per frame. Commands
//! report which stages are stale and the visualizer rebuilds exactly those.

use crate::animation::{animate_glyphs, AnimationState, Clock, SystemClock};
use crate::constants::{clamp_to, CURVE_COLOR, CURVE_PREVIEW_SEGMENTS, CURVE_STEPS, GLYPH_COLOR, TICKER_OFFSET_RANGE};
use crate::curve::{build_curve, Curve};
use crate::layout::{layout, place_glyphs, PlacedGlyph};
use crate::metrics::GlyphMetrics;
use crate::params::{Command, Params, Rebuild};
use crate::scene::{append_glyph_vertices, polyline_vertices, LineVertex};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct Visualizer<M: GlyphMetrics, C: Clock = SystemClock> {
    params: Params,
    metrics: M,
    clock: C,
    rng: StdRng,
    curve: Option<Curve>,
    curve_preview: Vec<LineVertex>,
    glyphs: Vec<PlacedGlyph>,
    animation: AnimationState,
    warned_missing_curve: bool,
}

impl<M: GlyphMetrics, C: Clock> Visualizer<M, C> {
    /// Nothing is built until `init`; the font behind `metrics` is already loaded.
    pub fn new(params: Params, metrics: M, clock: C, seed: u64) -> Self {
        Self {
            params,
            metrics,
            clock,
            rng: StdRng::seed_from_u64(seed),
            curve: None,
            curve_preview: Vec::new(),
            glyphs: Vec::new(),
            animation: AnimationState::default(),
            warned_missing_curve: false,
        }
    }

    /// Build the curve, then lay the text out on it.
    pub fn init(&mut self) {
        self.create_geometry();
        self.distribute_text();
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn curve(&self) -> Option<&Curve> {
        self.curve.as_ref()
    }

    pub fn glyphs(&self) -> &[PlacedGlyph] {
        &self.glyphs
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn apply(&mut self, command: Command) -> Rebuild {
        if let Command::SetTickerOffset(offset) = command {
            self.animation.scroll_offset = clamp_to(&TICKER_OFFSET_RANGE, offset);
        }
        let rebuild = self.params.apply(command, &mut self.rng);
        if rebuild.curve() {
            self.create_geometry();
        }
        if rebuild.layout() {
            self.distribute_text();
        }
        rebuild
    }

    /// Replace the curve, its lookup tables and its preview geometry.
    pub fn create_geometry(&mut self) {
        let curve = build_curve(&self.params.arms, CURVE_STEPS);
        self.curve_preview = polyline_vertices(&curve.sample_uniform(CURVE_PREVIEW_SEGMENTS), CURVE_COLOR);
        self.curve = Some(curve);
        self.warned_missing_curve = false;
    }

    /// Drop the previous glyphs and place the repeated word on the current curve.
    pub fn distribute_text(&mut self) {
        self.glyphs.clear();
        let Some(curve) = self.curve.as_ref() else {
            log::error!("[layout] curve is not built; skipping text distribution");
            return;
        };
        let text = &self.params.text;
        let entries = layout(text, &self.metrics, curve.length());
        self.glyphs = place_glyphs(&entries, curve, &self.metrics, text.font_size);
        log::info!(
            "[layout] placed {} glyphs of {:?} x{} on curve length {:.4} (fixed: {})",
            self.glyphs.len(),
            text.word,
            text.word_repeats,
            curve.length(),
            text.fixed
        );
    }

    /// One display-refresh step.
    pub fn tick(&mut self) {
        // The rotating arm only turns once there is a curve to rebuild.
        if self.params.animate_rotation_z
            && self.curve.is_some()
            && self.params.advance_rotation_z()
        {
            self.create_geometry();
        }
        self.animation.time = self.clock.now_secs();

        let Some(curve) = self.curve.as_ref() else {
            if !self.warned_missing_curve {
                log::warn!("[tick] curve is not built; glyphs stay put");
                self.warned_missing_curve = true;
            }
            return;
        };
        if self.glyphs.is_empty() {
            return;
        }
        let motion = &self.params.motion;
        if motion.play_ticker {
            self.animation.advance_ticker(motion.ticker_speed, curve.length());
        }
        animate_glyphs(
            &mut self.glyphs,
            curve,
            motion,
            &self.animation,
            self.params.text.font_size,
        );
    }

    /// Line-list vertices for this frame: the curve (if shown) then every glyph.
    pub fn line_vertices(&self, out: &mut Vec<LineVertex>) {
        out.clear();
        if self.params.show_geometry {
            out.extend_from_slice(&self.curve_preview);
        }
        append_glyph_vertices(&self.glyphs, GLYPH_COLOR, out);
    }
}
