mod tests {
    use strip_dial::color::{
        Hsv, Rgb, add_saturating, blend_colors, fade_to_black_by, fill_rainbow, hsv2rgb,
        max_channels, rgb_from_u32,
    };

    #[test]
    fn test_rgb_from_u32() {
        let color = rgb_from_u32(0x5500AB);
        assert_eq!(color, Rgb { r: 0x55, g: 0, b: 0xAB });
    }

    #[test]
    fn test_blend_colors_endpoints() {
        let a = Rgb { r: 10, g: 20, b: 30 };
        let b = Rgb { r: 200, g: 100, b: 0 };
        assert_eq!(blend_colors(a, b, 0), a);
        assert_eq!(blend_colors(a, b, 255), b);
    }

    #[test]
    fn test_fill_rainbow_starts_at_initial_hue() {
        let mut leds = [Rgb::default(); 8];
        fill_rainbow(&mut leds, 42, 7);

        let expected = hsv2rgb(Hsv {
            hue: 42,
            sat: 240,
            val: 255,
        });
        assert_eq!(leds[0], expected);

        let second = hsv2rgb(Hsv {
            hue: 49,
            sat: 240,
            val: 255,
        });
        assert_eq!(leds[1], second);
    }

    #[test]
    fn test_fade_to_black_by_full_amount_blanks() {
        let mut leds = [Rgb { r: 255, g: 128, b: 7 }; 4];
        fade_to_black_by(&mut leds, 255);
        assert!(leds.iter().all(|led| *led == Rgb::default()));
    }

    #[test]
    fn test_fade_to_black_by_zero_keeps_everything() {
        let mut leds = [Rgb { r: 255, g: 128, b: 7 }; 4];
        let before = leds;
        fade_to_black_by(&mut leds, 0);
        assert_eq!(leds, before);
    }

    #[test]
    fn test_add_saturating_clamps_at_full() {
        let a = Rgb { r: 200, g: 1, b: 0 };
        let b = Rgb { r: 100, g: 2, b: 255 };
        assert_eq!(add_saturating(a, b), Rgb { r: 255, g: 3, b: 255 });
    }

    #[test]
    fn test_max_channels_is_per_channel() {
        let a = Rgb { r: 200, g: 1, b: 50 };
        let b = Rgb { r: 100, g: 2, b: 50 };
        assert_eq!(max_channels(a, b), Rgb { r: 200, g: 2, b: 50 });
    }
}
