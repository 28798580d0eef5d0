mod tests {
    use strip_dial::Rgb;
    use strip_dial::filter::{FrameFilter, TYPICAL_STRIP_CORRECTION};

    #[test]
    fn test_full_brightness_white_correction_is_identity() {
        let filter = FrameFilter::new(
            255,
            Rgb {
                r: 255,
                g: 255,
                b: 255,
            },
        );
        let mut frame = [Rgb { r: 10, g: 128, b: 255 }; 4];
        let before = frame;
        filter.apply(&mut frame);
        assert_eq!(frame, before);
    }

    #[test]
    fn test_correction_scales_channels_independently() {
        let filter = FrameFilter::new(255, TYPICAL_STRIP_CORRECTION);
        let mut frame = [Rgb {
            r: 255,
            g: 255,
            b: 255,
        }];
        filter.apply(&mut frame);
        assert_eq!(frame[0], TYPICAL_STRIP_CORRECTION);
    }

    #[test]
    fn test_set_brightness_takes_effect() {
        let mut filter = FrameFilter::new(
            255,
            Rgb {
                r: 255,
                g: 255,
                b: 255,
            },
        );
        filter.set_brightness(0);
        let mut frame = [Rgb { r: 200, g: 50, b: 9 }];
        filter.apply(&mut frame);
        assert_eq!(frame[0], Rgb::default());
    }

    #[test]
    fn test_default_brightness_dims_the_frame() {
        let filter = FrameFilter::default();
        let mut frame = [Rgb {
            r: 255,
            g: 255,
            b: 255,
        }];
        filter.apply(&mut frame);
        let led = frame[0];
        assert!(led.r < 40 && led.g < 40 && led.b < 40);
        assert!(led.r > 0 && led.g > 0 && led.b > 0);
    }
}
