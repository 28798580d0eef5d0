//! Pattern system with compile-time known animation variants.
//!
//! The six strip animations form a closed set: [`PatternId`] names
//! them, [`PatternSlot`] stores the active renderer without heap
//! allocation, and every dispatch is an exhaustive match.

mod bpm;
mod confetti;
mod juggle;
mod rainbow;
mod sinelon;

use embassy_time::Instant;

pub use bpm::BpmPattern;
pub use confetti::ConfettiPattern;
pub use juggle::JugglePattern;
pub use rainbow::{GlitterbowPattern, RainbowPattern};
pub use sinelon::SinelonPattern;

use crate::color::Rgb;
use crate::menu::Direction;

const PATTERN_NAME_RAINBOW: &str = "Rainbow";
const PATTERN_NAME_GLITTERBOW: &str = "Glitterbow";
const PATTERN_NAME_CONFETTI: &str = "Confetti";
const PATTERN_NAME_SINELON: &str = "Sinelon";
const PATTERN_NAME_JUGGLE: &str = "Juggle";
const PATTERN_NAME_BPM: &str = "BPM";

pub trait Pattern {
    /// Render a single frame at the given base hue.
    fn render(&mut self, now: Instant, base_hue: u8, leds: &mut [Rgb]);
}

/// Known pattern ids, in catalog order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PatternId {
    Rainbow = 0,
    Glitterbow = 1,
    Confetti = 2,
    Sinelon = 3,
    Juggle = 4,
    Bpm = 5,
}

impl PatternId {
    pub const COUNT: u8 = 6;

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::Rainbow,
            1 => Self::Glitterbow,
            2 => Self::Confetti,
            3 => Self::Sinelon,
            4 => Self::Juggle,
            5 => Self::Bpm,
            _ => return None,
        })
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Display name shown on the menu's value line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rainbow => PATTERN_NAME_RAINBOW,
            Self::Glitterbow => PATTERN_NAME_GLITTERBOW,
            Self::Confetti => PATTERN_NAME_CONFETTI,
            Self::Sinelon => PATTERN_NAME_SINELON,
            Self::Juggle => PATTERN_NAME_JUGGLE,
            Self::Bpm => PATTERN_NAME_BPM,
        }
    }

    /// Neighboring pattern in the given direction, wrapping at both
    /// ends of the catalog.
    pub const fn stepped(self, direction: Direction) -> Self {
        let index = self.index();
        let next = match direction {
            Direction::Increase => {
                if index + 1 >= Self::COUNT {
                    0
                } else {
                    index + 1
                }
            }
            Direction::Decrease => {
                if index == 0 {
                    Self::COUNT - 1
                } else {
                    index - 1
                }
            }
        };
        match Self::from_raw(next) {
            Some(id) => id,
            None => self,
        }
    }

    /// Instantiate the renderer for this id with fresh state.
    pub fn to_slot(self) -> PatternSlot {
        match self {
            Self::Rainbow => PatternSlot::Rainbow(RainbowPattern::new()),
            Self::Glitterbow => PatternSlot::Glitterbow(GlitterbowPattern::new()),
            Self::Confetti => PatternSlot::Confetti(ConfettiPattern::new()),
            Self::Sinelon => PatternSlot::Sinelon(SinelonPattern::new()),
            Self::Juggle => PatternSlot::Juggle(JugglePattern::new()),
            Self::Bpm => PatternSlot::Bpm(BpmPattern::new()),
        }
    }
}

/// Pattern slot - enum containing all possible renderers
#[derive(Debug, Clone)]
pub enum PatternSlot {
    Rainbow(RainbowPattern),
    Glitterbow(GlitterbowPattern),
    Confetti(ConfettiPattern),
    Sinelon(SinelonPattern),
    Juggle(JugglePattern),
    Bpm(BpmPattern),
}

impl Default for PatternSlot {
    fn default() -> Self {
        Self::Rainbow(RainbowPattern::new())
    }
}

impl PatternSlot {
    /// Render the current pattern
    pub fn render(&mut self, now: Instant, base_hue: u8, leds: &mut [Rgb]) {
        match self {
            Self::Rainbow(pattern) => pattern.render(now, base_hue, leds),
            Self::Glitterbow(pattern) => pattern.render(now, base_hue, leds),
            Self::Confetti(pattern) => pattern.render(now, base_hue, leds),
            Self::Sinelon(pattern) => pattern.render(now, base_hue, leds),
            Self::Juggle(pattern) => pattern.render(now, base_hue, leds),
            Self::Bpm(pattern) => pattern.render(now, base_hue, leds),
        }
    }

    /// Get the pattern ID for external observation
    pub fn id(&self) -> PatternId {
        match self {
            Self::Rainbow(_) => PatternId::Rainbow,
            Self::Glitterbow(_) => PatternId::Glitterbow,
            Self::Confetti(_) => PatternId::Confetti,
            Self::Sinelon(_) => PatternId::Sinelon,
            Self::Juggle(_) => PatternId::Juggle,
            Self::Bpm(_) => PatternId::Bpm,
        }
    }
}
