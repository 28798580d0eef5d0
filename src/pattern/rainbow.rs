//! Rainbow fills, plain and glittered.

use embassy_time::Instant;

use super::Pattern;
use crate::{
    color::{Rgb, add_saturating, fill_rainbow},
    math8::Prng,
};

/// Hue distance between neighboring pixels.
const DELTA_HUE: u8 = 7;

/// Sparkle probability per frame, out of 256.
const GLITTER_CHANCE: u8 = 80;

const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Smooth rainbow marching along the strip from the base hue.
#[derive(Debug, Clone, Default)]
pub struct RainbowPattern;

impl RainbowPattern {
    pub const fn new() -> Self {
        Self
    }
}

impl Pattern for RainbowPattern {
    fn render(&mut self, _now: Instant, base_hue: u8, leds: &mut [Rgb]) {
        fill_rainbow(leds, base_hue, DELTA_HUE);
    }
}

/// Rainbow with an occasional white sparkle on a random pixel.
#[derive(Debug, Clone)]
pub struct GlitterbowPattern {
    rng: Prng,
}

impl Default for GlitterbowPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl GlitterbowPattern {
    pub const fn new() -> Self {
        Self {
            rng: Prng::new(0x517A),
        }
    }
}

impl Pattern for GlitterbowPattern {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, _now: Instant, base_hue: u8, leds: &mut [Rgb]) {
        fill_rainbow(leds, base_hue, DELTA_HUE);

        if leds.is_empty() {
            return;
        }
        if self.rng.random8() < GLITTER_CHANCE {
            let pos = self.rng.random16_below(leds.len() as u16) as usize;
            leds[pos] = add_saturating(leds[pos], WHITE);
        }
    }
}
