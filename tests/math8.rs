mod tests {
    use stripfx::math8::{
        attack_decay_wave8, blend8, ease_in_out_cubic, ease_in_out_quad, map8, map_range, scale8,
        scale8_video,
    };

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(255, 255), 255);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_scale8_video_keeps_lit_values() {
        assert_eq!(scale8_video(1, 1), 1);
        assert_eq!(scale8_video(255, 16), 16);
        assert_eq!(scale8_video(0, 200), 0);
        assert_eq!(scale8_video(200, 0), 0);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_map8() {
        assert_eq!(map8(0, 24, 255), 24);
        assert_eq!(map8(255, 24, 255), 255);
        assert_eq!(map8(128, 0, 100), 50);
    }

    #[test]
    fn test_map_range() {
        assert_eq!(map_range(5, 0, 10, 0, 100), 50);
        assert_eq!(map_range(0, 0, 65535, 16, 112), 16);
        assert_eq!(map_range(65535, 0, 65535, 16, 112), 112);
        assert_eq!(map_range(10, 0, 10, 100, 0), 0);
    }

    #[test]
    fn test_map_range_degenerate_input() {
        assert_eq!(map_range(3, 3, 3, 7, 9), 7);
        assert_eq!(map_range(-40, 0, 0, -5, 5), -5);
    }

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_in_out_quad(0), 0);
        assert_eq!(ease_in_out_quad(255), 255);
        assert_eq!(ease_in_out_cubic(0), 0);
        assert_eq!(ease_in_out_cubic(255), 255);
    }

    #[test]
    fn test_ease_cubic_is_monotonic_enough() {
        let mut previous = 0;
        for i in 0..=255u8 {
            let eased = ease_in_out_cubic(i);
            assert!(
                u16::from(eased) + 2 >= u16::from(previous),
                "dip at {i}: {previous} -> {eased}"
            );
            previous = eased;
        }
    }

    #[test]
    fn test_attack_decay_wave8() {
        assert_eq!(attack_decay_wave8(0), 0);
        assert_eq!(attack_decay_wave8(85), 255);
        assert_eq!(attack_decay_wave8(86), 255);
        assert_eq!(attack_decay_wave8(255), 2);
    }
}
