mod tests {
    use stripfx::ModeId;
    use stripfx::mode::MODE_COUNT;

    #[test]
    fn test_from_raw() {
        assert_eq!(MODE_COUNT, 39);
        assert_eq!(ModeId::from_raw(0), Some(ModeId::Static));
        assert_eq!(ModeId::from_raw(34), Some(ModeId::Off));
        assert_eq!(ModeId::from_raw(38), Some(ModeId::Custom));
        assert_eq!(ModeId::from_raw(39), None);
    }

    #[test]
    fn test_from_raw_clamped() {
        assert_eq!(ModeId::from_raw_clamped(3), ModeId::Plasma);
        assert_eq!(ModeId::from_raw_clamped(200), ModeId::Custom);
    }

    #[test]
    fn test_raw_matches_order() {
        for (i, mode) in ModeId::ALL.iter().enumerate() {
            assert_eq!(usize::from(mode.as_raw()), i);
            assert_eq!(ModeId::from_raw(mode.as_raw()), Some(*mode));
        }
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(ModeId::Static.next(), ModeId::Ease);
        assert_eq!(ModeId::BubbleSort.next(), ModeId::Off);
        assert_eq!(ModeId::FillBeat.next(), ModeId::Custom);
        assert_eq!(ModeId::Custom.next(), ModeId::Static);
    }

    #[test]
    fn test_names() {
        assert_eq!(ModeId::Static.as_str(), "Static");
        assert_eq!(ModeId::Plasma.as_str(), "Plasma Effect");
        assert_eq!(ModeId::FireFlickerSoft.as_str(), "Fire Flicker (soft)");
        assert_eq!(ModeId::parse_from_str("Fire 2012"), Some(ModeId::Fire2012));
        assert_eq!(ModeId::parse_from_str("fire 2012"), None);
        assert_eq!(ModeId::TwinkleNoiseMover.as_str(), "Twinkle iNoise8 Mover");
        assert_eq!(ModeId::parse_from_str("Color Fill Beat"), Some(ModeId::FillBeat));
        for mode in ModeId::ALL {
            assert!(!mode.as_str().is_empty());
            assert_eq!(ModeId::parse_from_str(mode.as_str()), Some(mode));
        }
    }
}
