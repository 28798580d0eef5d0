//! Juggle: eight colored dots weaving in and out of sync.

use embassy_time::Instant;

use super::Pattern;
use crate::{
    color::{Hsv, Rgb, fade_to_black_by, hsv2rgb, max_channels},
    math8::beatsin16,
};

const FADE_AMOUNT: u8 = 20;
const DOT_COUNT: u8 = 8;
const DOT_HUE_STEP: u8 = 32;

#[derive(Debug, Clone, Default)]
pub struct JugglePattern;

impl JugglePattern {
    pub const fn new() -> Self {
        Self
    }
}

impl Pattern for JugglePattern {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, now: Instant, _base_hue: u8, leds: &mut [Rgb]) {
        fade_to_black_by(leds, FADE_AMOUNT);

        if leds.is_empty() {
            return;
        }
        let mut dot_hue: u8 = 0;
        for i in 0..DOT_COUNT {
            // Slightly different tempo per dot keeps them drifting
            // through each other instead of moving in lockstep.
            let pos = beatsin16(i + 7, 0, leds.len() as u16 - 1, now) as usize;
            let dot = hsv2rgb(Hsv {
                hue: dot_hue,
                sat: 200,
                val: 255,
            });
            leds[pos] = max_channels(leds[pos], dot);
            dot_hue = dot_hue.wrapping_add(DOT_HUE_STEP);
        }
    }
}
