mod tests {
    use stripfx::bar::FractionalBar;
    use stripfx::bounds::SegmentBounds;
    use stripfx::color::{BLACK, Rgb, WHITE};
    use stripfx::palette::{BlendType, Palette16};

    #[test]
    fn test_edge_brightness_sums_to_full() {
        for position in -32..64 {
            let (first, last) = FractionalBar::new(position, 3, 0).edge_brightness();
            assert_eq!(u16::from(first) + u16::from(last), 255, "position {position}");
        }
        assert_eq!(FractionalBar::new(32, 3, 0).edge_brightness(), (255, 0));
        assert_eq!(FractionalBar::new(40, 3, 0).edge_brightness(), (127, 128));
    }

    #[test]
    fn test_draw_stays_inside_bounds() {
        let palette = Palette16::solid(WHITE);
        let bounds = SegmentBounds::new(2, 5);

        for position in [16, 24] {
            let mut leds = [BLACK; 10];
            FractionalBar::new(position, 5, 0).draw(
                &mut leds,
                bounds,
                &palette,
                BlendType::Linear,
                255,
            );
            assert_eq!(leds[0], BLACK);
            assert_eq!(leds[1], BLACK, "one pixel before start, position {position}");
            assert_eq!(&leds[2..=5], &[WHITE; 4]);
            assert_eq!(leds[6], BLACK, "one pixel past stop, position {position}");
            assert!(leds[7..].iter().all(|led| *led == BLACK));
        }
    }

    #[test]
    fn test_draw_is_additive() {
        let palette = Palette16::solid(Rgb::new(0, 0, 100));
        let mut leds = [Rgb::new(50, 0, 0); 6];
        FractionalBar::new(16, 3, 0).draw(
            &mut leds,
            SegmentBounds::new(0, 5),
            &palette,
            BlendType::Linear,
            255,
        );
        assert_eq!(leds[2], Rgb::new(50, 0, 100));
        assert_eq!(leds[0], Rgb::new(50, 0, 0));
    }

    #[test]
    fn test_draw_partially_before_buffer() {
        let palette = Palette16::solid(WHITE);
        let mut leds = [BLACK; 4];
        FractionalBar::new(-16, 2, 0).draw(
            &mut leds,
            SegmentBounds::new(0, 3),
            &palette,
            BlendType::Linear,
            255,
        );
        assert_eq!(leds[0], WHITE);
        assert_eq!(leds[1], BLACK);
    }

    #[test]
    fn test_draw_past_buffer_end() {
        let palette = Palette16::solid(WHITE);
        let mut leds = [BLACK; 4];
        FractionalBar::new(48, 4, 0).draw(
            &mut leds,
            SegmentBounds::new(0, 10),
            &palette,
            BlendType::Linear,
            255,
        );
        assert_eq!(leds[3], WHITE);
        assert_eq!(&leds[..3], &[BLACK; 3]);
    }

    #[test]
    fn test_max_brightness_dims_interior() {
        let palette = Palette16::solid(WHITE);
        let mut leds = [BLACK; 4];
        FractionalBar::new(0, 3, 0).with_max_brightness(128).draw(
            &mut leds,
            SegmentBounds::new(0, 3),
            &palette,
            BlendType::Linear,
            255,
        );
        assert_eq!(leds[0], WHITE);
        assert_eq!(leds[1], Rgb::new(128, 128, 128));
    }
}
