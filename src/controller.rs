//! Cooperative control loop: one tick per frame, no blocking inside.
//!
//! Every tick samples the dial, applies menu events, renders the
//! active pattern and hands the frame to the LED capability, then
//! services the elapsed-time gates (hue advance, pattern advance,
//! display refresh). The caller owns the pacing sleep between ticks
//! using the returned [`FrameResult`].

use embassy_time::{Duration, Instant};
use log::warn;

use crate::color::Rgb;
use crate::filter::{DEFAULT_BRIGHTNESS, FrameFilter, TYPICAL_STRIP_CORRECTION};
use crate::input::{DebouncedButton, EncoderDecoder, InputSource};
use crate::menu::{self, Direction};
use crate::pattern::PatternSlot;
use crate::presenter;
use crate::settings::Settings;
use crate::{CharacterDisplay, OutputDriver};

/// Pattern auto-advance period.
pub const PATTERN_CHANGE_INTERVAL: Duration = Duration::from_secs(10);

/// Forced display refresh period, so auto-advanced values stay
/// current on screen without input.
pub const DISPLAY_REFRESH_INTERVAL: Duration = Duration::from_millis(1000);

/// Default strip length.
pub const DEFAULT_LED_COUNT: usize = 32;

/// Result of a control loop tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// Pacing delay the caller should sleep before the next tick;
    /// `1000 / fps` milliseconds.
    pub frame_delay: Duration,
}

/// Configuration for the controller
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Number of LEDs actually driven (clamped to the buffer size).
    pub led_count: usize,
    /// Master brightness applied to every frame.
    pub brightness: u8,
    /// Per-channel strip color correction.
    pub color_correction: Rgb,
    /// Pattern auto-advance period.
    pub pattern_change_interval: Duration,
    /// Forced display refresh period.
    pub display_refresh_interval: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            led_count: DEFAULT_LED_COUNT,
            brightness: DEFAULT_BRIGHTNESS,
            color_correction: TYPICAL_STRIP_CORRECTION,
            pattern_change_interval: PATTERN_CHANGE_INTERVAL,
            display_refresh_interval: DISPLAY_REFRESH_INTERVAL,
        }
    }
}

/// Elapsed-time gate: fires when more than `interval` has passed
/// since it last fired, then re-bases itself on the firing instant.
#[derive(Debug, Clone)]
pub struct IntervalGate {
    last_fired: Instant,
}

impl IntervalGate {
    pub const fn new(start: Instant) -> Self {
        Self { last_fired: start }
    }

    pub fn fire(&mut self, now: Instant, interval: Duration) -> bool {
        if now.as_millis() > self.last_fired.as_millis() + interval.as_millis() {
            self.last_fired = now;
            true
        } else {
            false
        }
    }
}

/// The controller - owns the settings, the active pattern and every
/// capability handle.
pub struct Controller<IN, DSP, OUT, const MAX_LEDS: usize>
where
    IN: InputSource,
    DSP: CharacterDisplay,
    OUT: OutputDriver,
{
    // External capabilities
    input: IN,
    display: DSP,
    output: OUT,

    // State
    settings: Settings,
    pattern: PatternSlot,
    frame_buffer: [Rgb; MAX_LEDS],

    // Input policies
    encoder: EncoderDecoder,
    button: DebouncedButton,

    // Timers and output shaping
    hue_gate: IntervalGate,
    pattern_gate: IntervalGate,
    refresh_gate: IntervalGate,
    filter: FrameFilter,
    led_count: usize,
    pattern_change_interval: Duration,
    display_refresh_interval: Duration,
}

impl<IN, DSP, OUT, const MAX_LEDS: usize> Controller<IN, DSP, OUT, MAX_LEDS>
where
    IN: InputSource,
    DSP: CharacterDisplay,
    OUT: OutputDriver,
{
    /// Create the controller and draw the initial menu screen.
    ///
    /// The encoder decoder is seeded from one initial sample so the
    /// first real transition is not misread as a step.
    pub fn new(
        mut input: IN,
        display: DSP,
        output: OUT,
        config: &ControllerConfig,
        start: Instant,
    ) -> Self {
        let initial_clk = match input.sample() {
            Ok(sample) => sample.clk,
            Err(_) => false,
        };

        let settings = Settings::default();
        let mut controller = Self {
            input,
            display,
            output,
            pattern: settings.selected_pattern.to_slot(),
            settings,
            frame_buffer: [Rgb::default(); MAX_LEDS],
            encoder: EncoderDecoder::new(initial_clk),
            button: DebouncedButton::new(),
            hue_gate: IntervalGate::new(start),
            pattern_gate: IntervalGate::new(start),
            refresh_gate: IntervalGate::new(start),
            filter: FrameFilter::new(config.brightness, config.color_correction),
            led_count: config.led_count.min(MAX_LEDS),
            pattern_change_interval: config.pattern_change_interval,
            display_refresh_interval: config.display_refresh_interval,
        };
        controller.redraw();
        controller
    }

    /// Run one loop iteration.
    ///
    /// Input handling always precedes rendering, so a just-applied
    /// edit shows on the very next frame.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        self.poll_input(now);

        // Render and transmit
        let frame = &mut self.frame_buffer[..self.led_count];
        self.pattern.render(now, self.settings.hue, frame);
        self.filter.apply(frame);
        self.output.write(frame);

        // Timed hue advance
        let hue_interval = Duration::from_millis(u64::from(self.settings.hue_speed_ms));
        if self.settings.hue_mode_auto && self.hue_gate.fire(now, hue_interval) {
            self.settings.hue = self.settings.hue.wrapping_add(1);
        }

        // Timed pattern advance
        if self.settings.pattern_mode_auto
            && self.pattern_gate.fire(now, self.pattern_change_interval)
        {
            self.settings.selected_pattern =
                self.settings.selected_pattern.stepped(Direction::Increase);
            self.sync_pattern();
        }

        if self.refresh_gate.fire(now, self.display_refresh_interval) {
            self.redraw();
        }

        FrameResult {
            frame_delay: self.settings.frame_delay(),
        }
    }

    /// Current settings, for observation.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn poll_input(&mut self, now: Instant) {
        let Ok(sample) = self.input.sample() else {
            warn!("input: sample failed, skipping events this tick");
            return;
        };

        if let Some(direction) = self.encoder.update(sample.clk, sample.dt) {
            menu::adjust(&mut self.settings, direction);
            self.sync_pattern();
            self.redraw();
        }

        if self.button.poll(sample.pressed, now) {
            menu::select(&mut self.settings);
            self.sync_pattern();
            self.redraw();
        }
    }

    /// Re-instantiate the pattern slot when the selection moved away
    /// from it (manual edit, auto-advance or reset).
    fn sync_pattern(&mut self) {
        if self.pattern.id() != self.settings.selected_pattern {
            self.pattern = self.settings.selected_pattern.to_slot();
        }
    }

    fn redraw(&mut self) {
        let screen = presenter::screen(&self.settings);
        presenter::draw(&mut self.display, &screen);
    }
}
