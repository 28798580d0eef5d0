//! BPM: palette stripes pulsing at a fixed tempo.

use embassy_time::Instant;

use super::Pattern;
use crate::{
    color::{Rgb, blend_colors, rgb_from_u32},
    math8::{beatsin8, scale8},
};

/// Pulse tempo in beats per minute.
const PULSE_BPM: u8 = 62;

/// Pulse floor; the wave swings between this and full brightness.
const PULSE_FLOOR: u8 = 64;

// Party palette: saturated purples, reds, oranges and blues.
const PALETTE: [Rgb; 16] = [
    rgb_from_u32(0x5500AB),
    rgb_from_u32(0x84007C),
    rgb_from_u32(0xB5004B),
    rgb_from_u32(0xE5001B),
    rgb_from_u32(0xE81700),
    rgb_from_u32(0xB84700),
    rgb_from_u32(0xAB7700),
    rgb_from_u32(0xABAB00),
    rgb_from_u32(0xAB5500),
    rgb_from_u32(0xDD2200),
    rgb_from_u32(0xF2000E),
    rgb_from_u32(0xC2003E),
    rgb_from_u32(0x8F0071),
    rgb_from_u32(0x5F00A1),
    rgb_from_u32(0x2F00D0),
    rgb_from_u32(0x0007F9),
];

/// Look up a palette color on the 0-255 index circle, blending
/// between neighboring entries, then scale by `brightness`.
fn color_from_palette(index: u8, brightness: u8) -> Rgb {
    let hi4 = (index >> 4) as usize;
    let lo4 = index & 0x0F;

    let entry = PALETTE[hi4];
    let next = PALETTE[(hi4 + 1) % PALETTE.len()];
    let blended = blend_colors(entry, next, lo4 << 4);

    Rgb {
        r: scale8(blended.r, brightness),
        g: scale8(blended.g, brightness),
        b: scale8(blended.b, brightness),
    }
}

#[derive(Debug, Clone, Default)]
pub struct BpmPattern;

impl BpmPattern {
    pub const fn new() -> Self {
        Self
    }
}

impl Pattern for BpmPattern {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, now: Instant, base_hue: u8, leds: &mut [Rgb]) {
        let beat = beatsin8(PULSE_BPM, PULSE_FLOOR, 255, now);

        for (i, led) in leds.iter_mut().enumerate() {
            let i = i as u8;
            let index = base_hue.wrapping_add(i.wrapping_mul(2));
            let brightness = beat
                .wrapping_sub(base_hue)
                .wrapping_add(i.wrapping_mul(10));
            *led = color_from_palette(index, brightness);
        }
    }
}
