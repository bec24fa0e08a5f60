mod tests {
    use stripfx::wave::{
        beat88, beatsin88, cubicwave16, ease16_in_out_cubic, ease16_in_out_quad, inoise8,
        quadwave16, sin8, sin16, triwave8, triwave16,
    };

    #[test]
    fn test_triwave16_is_symmetric() {
        for phase in 0..=u16::MAX {
            assert_eq!(triwave16(phase), triwave16(u16::MAX - phase), "phase {phase}");
        }
    }

    #[test]
    fn test_triwave16_rises_then_falls() {
        for phase in 1..=0x7FFF {
            assert!(triwave16(phase) > triwave16(phase - 1));
        }
        assert_eq!(triwave16(0), 0);
        assert_eq!(triwave16(0x7FFF), 0xFFFE);
        assert_eq!(triwave16(0x8000), 0xFFFE);
    }

    #[test]
    fn test_triwave8() {
        assert_eq!(triwave8(0), 0);
        assert_eq!(triwave8(127), 254);
        assert_eq!(triwave8(128), 254);
        assert_eq!(triwave8(255), 0);
    }

    #[test]
    fn test_cubic_ease_covers_full_range() {
        assert_eq!(ease16_in_out_cubic(0), 0);
        assert_eq!(ease16_in_out_cubic(0x8000), 0x8000);
        assert_eq!(ease16_in_out_cubic(0xFFFF), 0xFFFF);
        assert_eq!(cubicwave16(0), 0);
        assert_eq!(cubicwave16(0x7FFF), 0xFFFF);
    }

    #[test]
    fn test_cubic_ease_never_decreases() {
        for i in 1..=u16::MAX {
            assert!(ease16_in_out_cubic(i) >= ease16_in_out_cubic(i - 1), "input {i}");
        }
        assert_eq!(ease16_in_out_cubic(u16::MAX), 0xFFFF);
    }

    #[test]
    fn test_quad_ease_never_decreases() {
        assert_eq!(ease16_in_out_quad(0), 0);
        for i in 1..=u16::MAX {
            assert!(ease16_in_out_quad(i) >= ease16_in_out_quad(i - 1), "input {i}");
        }
        assert_eq!(ease16_in_out_quad(u16::MAX), 0xFFFF);
    }

    #[test]
    fn test_quadwave16_is_symmetric() {
        for phase in 0..=u16::MAX {
            assert_eq!(quadwave16(phase), quadwave16(u16::MAX - phase), "phase {phase}");
        }
        assert_eq!(quadwave16(0), 0);
        assert_eq!(quadwave16(0x7FFF), 0xFFFF);
    }

    #[test]
    fn test_noise_drifts_smoothly() {
        for x in [12, 30, 200] {
            let mut previous = inoise8(x, 0);
            let mut lowest = previous;
            let mut highest = previous;
            for y in 1..=4096 {
                let value = inoise8(x, y);
                assert!(value.abs_diff(previous) <= 3, "x {x}, y {y}");
                lowest = lowest.min(value);
                highest = highest.max(value);
                previous = value;
            }
            assert!(highest - lowest >= 128, "x {x} barely moves");
        }
    }

    #[test]
    fn test_sin16_quadrants() {
        assert_eq!(sin16(0), 0);
        assert_eq!(sin16(0x4000), 32645);
        assert_eq!(sin16(0xC000), -32645);
    }

    #[test]
    fn test_sin8_quadrants() {
        assert_eq!(sin8(0), 128);
        assert_eq!(sin8(64), 255);
        assert_eq!(sin8(192), 1);
    }

    #[test]
    fn test_beat88_starts_at_timebase() {
        assert_eq!(beat88(256, 1000, 1000), 0);
        assert!(beat88(256, 1100, 1000) > 0);
    }

    #[test]
    fn test_beat88_across_clock_rollover() {
        let before = beat88(1000, 10, 0);
        let across = beat88(1000, 5, u32::MAX - 4);
        assert_eq!(before, across);
    }

    #[test]
    fn test_beatsin88_stays_in_range() {
        for now in (0..20_000).step_by(7) {
            let value = beatsin88(2000, 100, 300, now, 0);
            assert!((100..=300).contains(&value), "{value} at {now}");
        }
    }

    #[test]
    fn test_beatsin88_inverted_range() {
        assert_eq!(beatsin88(2000, 300, 100, 1234, 0), 300);
    }
}
