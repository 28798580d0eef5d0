//! Confetti: colored speckles that blink in and fade smoothly.

use embassy_time::Instant;

use super::Pattern;
use crate::{
    color::{Hsv, Rgb, add_saturating, fade_to_black_by, hsv2rgb},
    math8::Prng,
};

const FADE_AMOUNT: u8 = 10;
const HUE_SPREAD: u8 = 64;

#[derive(Debug, Clone)]
pub struct ConfettiPattern {
    rng: Prng,
}

impl Default for ConfettiPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfettiPattern {
    pub const fn new() -> Self {
        Self {
            rng: Prng::new(0xC0FE),
        }
    }
}

impl Pattern for ConfettiPattern {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, _now: Instant, base_hue: u8, leds: &mut [Rgb]) {
        fade_to_black_by(leds, FADE_AMOUNT);

        if leds.is_empty() {
            return;
        }
        let pos = self.rng.random16_below(leds.len() as u16) as usize;
        let speckle = hsv2rgb(Hsv {
            hue: base_hue.wrapping_add(self.rng.random8_below(HUE_SPREAD)),
            sat: 200,
            val: 255,
        });
        leds[pos] = add_saturating(leds[pos], speckle);
    }
}
