// Command-line flags. Values outside the panel ranges are clamped the same
// way panel edits are.

use std::path::PathBuf;

use clap::Parser;
use tangle_core::constants::{clamp_to, FONT_SIZE_RANGE, WORD_REPEATS_RANGE};
use tangle_core::Params;

#[derive(Parser, Debug)]
#[command(name = "tangle", about = "Kinetic typography along a spirograph curve")]
pub struct Cli {
    /// TrueType or OpenType font used for the glyph outlines
    #[arg(long)]
    pub font: PathBuf,
    /// Word repeated along the curve
    #[arg(long)]
    pub word: Option<String>,
    /// How many times the word is repeated
    #[arg(long)]
    pub repeats: Option<u32>,
    /// Glyph size in world units
    #[arg(long)]
    pub font_size: Option<f32>,
    /// Seed for the arm randomizer
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

impl Cli {
    /// Startup parameters: defaults overridden by the given flags.
    pub fn params(&self) -> Params {
        let mut params = Params::default();
        if let Some(word) = &self.word {
            params.text.word = word.clone();
        }
        if let Some(repeats) = self.repeats {
            let clamped = repeats.clamp(*WORD_REPEATS_RANGE.start(), *WORD_REPEATS_RANGE.end());
            if clamped != repeats {
                log::warn!("[cli] --repeats {repeats} clamped to {clamped}");
            }
            params.text.word_repeats = clamped;
        }
        if let Some(size) = self.font_size {
            let clamped = clamp_to(&FONT_SIZE_RANGE, size);
            if clamped != size {
                log::warn!("[cli] --font-size {size} clamped to {clamped}");
            }
            params.text.font_size = clamped;
        }
        params
    }
}
