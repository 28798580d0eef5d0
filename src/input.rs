//! Input capability and the decoding/debounce policies applied to it.
//!
//! The control loop samples the raw pin states once per iteration;
//! everything stateful about turning those samples into events lives
//! here, with the current instant injected so the policies are
//! testable on synthetic timelines.

use embassy_time::{Duration, Instant};

use crate::menu::Direction;

/// Debounce interval for the push button.
pub const BUTTON_DEBOUNCE: Duration = Duration::from_millis(50);

/// One raw sample of the control head.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSample {
    /// Encoder primary channel level.
    pub clk: bool,
    /// Encoder secondary channel level.
    pub dt: bool,
    /// Push button, already resolved from its active-low wiring.
    pub pressed: bool,
}

/// Polled input capability.
pub trait InputSource {
    type Error;

    fn sample(&mut self) -> Result<InputSample, Self::Error>;
}

/// Quadrature edge decoder for the rotary dial.
///
/// A step is reported on every primary-channel transition; the
/// secondary channel's level at that instant gives the direction.
#[derive(Debug, Clone)]
pub struct EncoderDecoder {
    last_clk: bool,
}

impl EncoderDecoder {
    pub const fn new(initial_clk: bool) -> Self {
        Self {
            last_clk: initial_clk,
        }
    }

    /// Feed one sample; returns the decoded step, if any.
    pub fn update(&mut self, clk: bool, dt: bool) -> Option<Direction> {
        if clk == self.last_clk {
            return None;
        }
        self.last_clk = clk;

        // Secondary matching the new primary level means the primary
        // led the transition: clockwise.
        if dt == clk {
            Some(Direction::Increase)
        } else {
            Some(Direction::Decrease)
        }
    }
}

/// Debounce gate for the push button: fire once per press.
///
/// The asserted timestamp re-arms on every asserted reading, so a
/// held button fires exactly once; it must be released for longer
/// than the debounce interval before it can fire again.
#[derive(Debug, Clone, Default)]
pub struct DebouncedButton {
    last_asserted: Option<Instant>,
}

impl DebouncedButton {
    pub const fn new() -> Self {
        Self {
            last_asserted: None,
        }
    }

    /// Feed one button reading; returns whether a press fires.
    pub fn poll(&mut self, pressed: bool, now: Instant) -> bool {
        if !pressed {
            return false;
        }

        let fired = match self.last_asserted {
            None => true,
            Some(last) => now.as_millis() > last.as_millis() + BUTTON_DEBOUNCE.as_millis(),
        };
        self.last_asserted = Some(now);
        fired
    }
}
