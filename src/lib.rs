#![no_std]

pub mod color;
pub mod controller;
pub mod filter;
pub mod input;
pub mod math8;
pub mod menu;
pub mod pattern;
pub mod presenter;
pub mod settings;

pub use controller::{Controller, ControllerConfig, FrameResult, IntervalGate};
pub use filter::FrameFilter;
pub use input::{BUTTON_DEBOUNCE, DebouncedButton, EncoderDecoder, InputSample, InputSource};
pub use menu::{Direction, MenuItem};
pub use pattern::{Pattern, PatternId, PatternSlot};
pub use presenter::MenuScreen;
pub use settings::{NavFocus, Settings};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The controller is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

/// Two-line character display capability.
///
/// The presenter drives it with a fixed clear-and-redraw sequence;
/// implementations only need to relay the calls to the panel.
pub trait CharacterDisplay {
    /// Blank the panel.
    fn clear(&mut self);
    /// Move the write position to `(col, row)`.
    fn set_cursor(&mut self, col: u8, row: u8);
    /// Write text at the current position.
    fn print(&mut self, text: &str);
    /// Enable the blink indicator at the current position.
    fn blink(&mut self);
}
