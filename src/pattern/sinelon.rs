//! Sinelon: a colored dot sweeping back and forth with a fading trail.

use embassy_time::Instant;

use super::Pattern;
use crate::{
    color::{Hsv, Rgb, add_saturating, fade_to_black_by, hsv2rgb},
    math8::beatsin16,
};

const FADE_AMOUNT: u8 = 20;
const SWEEP_BPM: u8 = 13;

#[derive(Debug, Clone, Default)]
pub struct SinelonPattern;

impl SinelonPattern {
    pub const fn new() -> Self {
        Self
    }
}

impl Pattern for SinelonPattern {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, now: Instant, base_hue: u8, leds: &mut [Rgb]) {
        fade_to_black_by(leds, FADE_AMOUNT);

        if leds.is_empty() {
            return;
        }
        let pos = beatsin16(SWEEP_BPM, 0, leds.len() as u16 - 1, now) as usize;
        let dot = hsv2rgb(Hsv {
            hue: base_hue,
            sat: 255,
            val: 192,
        });
        leds[pos] = add_saturating(leds[pos], dot);
    }
}
