//! Menu navigation and edit state machine.
//!
//! Two events exist: [`select`] (the dial's push button) and
//! [`adjust`] (a rotation step). Both are total over every valid
//! [`Settings`] value; the per-item dispatch is a closed match, so
//! there is no unknown-item case to guard at runtime.

use log::debug;

use crate::settings::{NavFocus, Settings};

/// Rotation step direction. Clockwise increases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

/// The fixed menu rows, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItem {
    PatternMode,
    SelectPattern,
    HueMode,
    HueSpeed,
    HueColor,
    Fps,
    ResetDefaults,
}

impl MenuItem {
    pub const COUNT: u8 = 7;

    pub const fn from_index(index: u8) -> Self {
        match index {
            0 => Self::PatternMode,
            1 => Self::SelectPattern,
            2 => Self::HueMode,
            3 => Self::HueSpeed,
            4 => Self::HueColor,
            5 => Self::Fps,
            _ => Self::ResetDefaults,
        }
    }

    pub const fn index(self) -> u8 {
        match self {
            Self::PatternMode => 0,
            Self::SelectPattern => 1,
            Self::HueMode => 2,
            Self::HueSpeed => 3,
            Self::HueColor => 4,
            Self::Fps => 5,
            Self::ResetDefaults => 6,
        }
    }

    /// Title shown on the display's first line.
    pub const fn label(self) -> &'static str {
        match self {
            Self::PatternMode => "Pattern Mode",
            Self::SelectPattern => "Select Pattern",
            Self::HueMode => "Set Hue Mode",
            Self::HueSpeed => "Set Hue Speed",
            Self::HueColor => "Set Hue Color",
            Self::Fps => "Set FPS",
            Self::ResetDefaults => "Reset Defaults",
        }
    }

    /// Neighboring row in the given direction, wrapping at both ends.
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
        Self::from_index(next)
    }
}

/// Push-button event.
///
/// Toggles which line input targets — except on the reset row, where
/// a press on the already-focused value line is the confirmation and
/// restores every setting to its default.
pub fn select(settings: &mut Settings) {
    if settings.nav_focus == NavFocus::Value
        && settings.selected_item == MenuItem::ResetDefaults
    {
        settings.reset();
        debug!("menu: reset confirmed, defaults restored");
        return;
    }

    settings.nav_focus = settings.nav_focus.toggled();
    debug!("menu: focus -> {:?}", settings.nav_focus);
}

/// Rotation event.
///
/// With title focus, steps the selected row; with value focus,
/// dispatches the edit bound to the selected row. Editing the pattern
/// or the hue directly drops the matching auto mode.
pub fn adjust(settings: &mut Settings, direction: Direction) {
    match settings.nav_focus {
        NavFocus::Title => {
            settings.selected_item = settings.selected_item.stepped(direction);
            debug!("menu: row -> {:?}", settings.selected_item);
        }
        NavFocus::Value => adjust_value(settings, direction),
    }
}

fn adjust_value(settings: &mut Settings, direction: Direction) {
    match settings.selected_item {
        MenuItem::PatternMode => {
            settings.pattern_mode_auto = !settings.pattern_mode_auto;
        }
        MenuItem::SelectPattern => {
            settings.selected_pattern = settings.selected_pattern.stepped(direction);
            settings.pattern_mode_auto = false;
        }
        MenuItem::HueMode => {
            settings.hue_mode_auto = !settings.hue_mode_auto;
        }
        MenuItem::HueSpeed => settings.step_hue_speed(direction),
        MenuItem::HueColor => {
            settings.step_hue(direction);
            settings.hue_mode_auto = false;
        }
        MenuItem::Fps => settings.step_fps(direction),
        // Rotation does not confirm a reset; only a press does.
        MenuItem::ResetDefaults => {}
    }
}
