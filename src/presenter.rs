//! Display derivation for the two-line character LCD.
//!
//! [`screen`] is a pure function of the settings store; [`draw`]
//! pushes the derived screen through the display capability as a full
//! clear-and-redraw, so the panel can never show a stale partial
//! update.

use core::fmt::Write;

use heapless::String;

use crate::CharacterDisplay;
use crate::menu::MenuItem;
use crate::settings::{NavFocus, Settings};

/// Character columns on the panel.
pub const LCD_COLS: u8 = 16;

/// Column where the focus blink indicator parks.
pub const CURSOR_COL: u8 = LCD_COLS - 1;

/// Derived display state: two text lines plus the blink row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuScreen {
    /// Name of the selected menu item.
    pub line1: &'static str,
    /// Formatted value of the selected item.
    pub line2: String<16>,
    /// Row holding the blink indicator: 0 with title focus, 1 with
    /// value focus.
    pub cursor_row: u8,
}

/// Derive the screen for the current settings.
pub fn screen(settings: &Settings) -> MenuScreen {
    let mut line2: String<16> = String::new();

    match settings.selected_item {
        MenuItem::PatternMode => {
            let _ = line2.push_str(mode_text(settings.pattern_mode_auto));
        }
        MenuItem::SelectPattern => {
            let _ = line2.push_str(settings.selected_pattern.as_str());
        }
        MenuItem::HueMode => {
            let _ = line2.push_str(mode_text(settings.hue_mode_auto));
        }
        MenuItem::HueSpeed => {
            let _ = write!(line2, "ms/Hue: {}", settings.hue_speed_ms);
        }
        MenuItem::HueColor => {
            let _ = write!(line2, "Hue Val: {}", settings.hue);
        }
        MenuItem::Fps => {
            let _ = write!(line2, "Val: {}", settings.fps);
        }
        MenuItem::ResetDefaults => {
            let _ = line2.push_str("Press to confirm");
        }
    }

    MenuScreen {
        line1: settings.selected_item.label(),
        line2,
        cursor_row: match settings.nav_focus {
            NavFocus::Title => 0,
            NavFocus::Value => 1,
        },
    }
}

/// Push a derived screen to the display capability.
///
/// Always the same fixed sequence: clear, both lines, then park the
/// blink indicator on the focused row's last column.
pub fn draw<D: CharacterDisplay>(display: &mut D, screen: &MenuScreen) {
    display.clear();
    display.set_cursor(0, 0);
    display.print(screen.line1);
    display.set_cursor(0, 1);
    display.print(&screen.line2);
    display.set_cursor(CURSOR_COL, screen.cursor_row);
    display.blink();
}

const fn mode_text(auto: bool) -> &'static str {
    if auto { "AUTO" } else { "MANUAL" }
}
