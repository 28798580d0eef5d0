//! Settings store: every dial-adjustable parameter in one place.
//!
//! All mutation is bounded — cyclic indices wrap, the hue wraps mod
//! 256, and the millisecond/fps values step over [1, 255] with the
//! zero skipped — so no reachable operation can leave the store in an
//! illegal state.

use crate::menu::{Direction, MenuItem};
use crate::pattern::PatternId;
use embassy_time::Duration;

/// Hue auto-advance period default, in milliseconds per hue step.
pub const DEFAULT_HUE_SPEED_MS: u8 = 20;

/// Frame rate default.
pub const DEFAULT_FPS: u8 = 120;

/// Which line of the menu input currently targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavFocus {
    /// Line 1: rotation steps through the menu items.
    Title,
    /// Line 2: rotation edits the selected item's value.
    Value,
}

impl NavFocus {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Title => Self::Value,
            Self::Value => Self::Title,
        }
    }
}

/// The complete adjustable state of the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Menu row the dial is parked on.
    pub selected_item: MenuItem,
    /// Animation rendered to the strip.
    pub selected_pattern: PatternId,
    /// Base hue handed to the active pattern. Wraps mod 256.
    pub hue: u8,
    /// Milliseconds between automatic hue steps. Never 0.
    pub hue_speed_ms: u8,
    /// Strip frame rate. Never 0.
    pub fps: u8,
    /// Whether input targets the title or the value line.
    pub nav_focus: NavFocus,
    /// Cycle patterns automatically every few seconds.
    pub pattern_mode_auto: bool,
    /// Advance the hue automatically at `hue_speed_ms`.
    pub hue_mode_auto: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            selected_item: MenuItem::PatternMode,
            selected_pattern: PatternId::Rainbow,
            hue: 0,
            hue_speed_ms: DEFAULT_HUE_SPEED_MS,
            fps: DEFAULT_FPS,
            nav_focus: NavFocus::Title,
            pattern_mode_auto: true,
            hue_mode_auto: true,
        }
    }
}

impl Settings {
    /// Restore every field to its default in one assignment.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Pacing delay between frames at the configured rate.
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps))
    }

    /// Step the base hue by one; 0 and 255 are adjacent.
    pub fn step_hue(&mut self, direction: Direction) {
        self.hue = match direction {
            Direction::Increase => self.hue.wrapping_add(1),
            Direction::Decrease => self.hue.wrapping_sub(1),
        };
    }

    /// Step the hue speed by one over [1, 255], skipping zero.
    pub fn step_hue_speed(&mut self, direction: Direction) {
        self.hue_speed_ms = step_skip_zero(self.hue_speed_ms, direction);
    }

    /// Step the frame rate by one over [1, 255], skipping zero.
    pub fn step_fps(&mut self, direction: Direction) {
        self.fps = step_skip_zero(self.fps, direction);
    }
}

/// Step a [1, 255] value by one, wrapping past the zero it must never
/// hold: incrementing from 255 lands on 2, decrementing from 1 lands
/// on 255.
pub(crate) const fn step_skip_zero(value: u8, direction: Direction) -> u8 {
    match direction {
        Direction::Increase => {
            if value == u8::MAX {
                2
            } else {
                value + 1
            }
        }
        Direction::Decrease => {
            if value == 1 {
                u8::MAX
            } else {
                value - 1
            }
        }
    }
}
