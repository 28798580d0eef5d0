mod tests {
    use embassy_time::Instant;
    use strip_dial::input::{DebouncedButton, EncoderDecoder};
    use strip_dial::menu::Direction;

    #[test]
    fn test_encoder_reports_nothing_while_stable() {
        let mut decoder = EncoderDecoder::new(false);
        assert_eq!(decoder.update(false, false), None);
        assert_eq!(decoder.update(false, true), None);
    }

    #[test]
    fn test_encoder_direction_from_secondary_at_transition() {
        let mut decoder = EncoderDecoder::new(false);
        // Secondary equals the new primary level: clockwise.
        assert_eq!(decoder.update(true, true), Some(Direction::Increase));
        // Next falling edge, secondary matches again.
        assert_eq!(decoder.update(false, false), Some(Direction::Increase));
        // Secondary differs: counter-clockwise.
        assert_eq!(decoder.update(true, false), Some(Direction::Decrease));
        assert_eq!(decoder.update(false, true), Some(Direction::Decrease));
    }

    #[test]
    fn test_button_first_press_fires() {
        let mut button = DebouncedButton::new();
        assert!(button.poll(true, Instant::from_millis(0)));
    }

    #[test]
    fn test_button_released_reads_never_fire() {
        let mut button = DebouncedButton::new();
        assert!(!button.poll(false, Instant::from_millis(0)));
        assert!(!button.poll(false, Instant::from_millis(500)));
    }

    #[test]
    fn test_button_rearm_timeline() {
        // Fires at t=0; the asserted reads at 30 and 60 both re-arm
        // the timestamp, so neither fires even though 60 is more than
        // the debounce interval after 0.
        let mut button = DebouncedButton::new();
        assert!(button.poll(true, Instant::from_millis(0)));
        assert!(!button.poll(true, Instant::from_millis(30)));
        assert!(!button.poll(true, Instant::from_millis(60)));

        // Released long enough: the next press fires again.
        assert!(!button.poll(false, Instant::from_millis(120)));
        assert!(button.poll(true, Instant::from_millis(200)));
    }

    #[test]
    fn test_button_held_fires_once() {
        let mut button = DebouncedButton::new();
        assert!(button.poll(true, Instant::from_millis(0)));
        for t in (10u64..1000).step_by(10) {
            assert!(!button.poll(true, Instant::from_millis(t)), "t={t}");
        }
    }

    #[test]
    fn test_button_boundary_is_strict() {
        let mut button = DebouncedButton::new();
        assert!(button.poll(true, Instant::from_millis(0)));
        assert!(!button.poll(false, Instant::from_millis(10)));
        // Exactly the debounce interval after the last asserted read
        // is still suppressed; one past it fires.
        assert!(!button.poll(true, Instant::from_millis(50)));
        assert!(button.poll(true, Instant::from_millis(101)));
    }
}
