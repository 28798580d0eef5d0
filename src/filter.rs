//! Frame post-processing applied before transmission.

use crate::color::Rgb;
use crate::math8::scale8;

/// Master brightness default, well under the strip maximum.
pub const DEFAULT_BRIGHTNESS: u8 = 32;

/// Per-channel correction for the common WS2812 strip phosphors.
pub const TYPICAL_STRIP_CORRECTION: Rgb = Rgb {
    r: 255,
    g: 176,
    b: 240,
};

/// Scales every pixel by a master brightness and a per-channel strip
/// color correction.
#[derive(Debug, Clone)]
pub struct FrameFilter {
    brightness: u8,
    correction: Rgb,
}

impl Default for FrameFilter {
    fn default() -> Self {
        Self::new(DEFAULT_BRIGHTNESS, TYPICAL_STRIP_CORRECTION)
    }
}

impl FrameFilter {
    pub const fn new(brightness: u8, correction: Rgb) -> Self {
        Self {
            brightness,
            correction,
        }
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Apply the filter to a frame in place.
    pub fn apply(&self, frame: &mut [Rgb]) {
        for led in frame {
            led.r = scale8(scale8(led.r, self.correction.r), self.brightness);
            led.g = scale8(scale8(led.g, self.correction.g), self.brightness);
            led.b = scale8(scale8(led.b, self.correction.b), self.brightness);
        }
    }
}
