mod tests {
    use stripfx::color::{BLACK, Rgb, WHITE};
    use stripfx::palette::{
        BlendType, PALETTE_COUNT, Palette16, PaletteCrossfade, PaletteSlot, find_palette,
        palette_name,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

    fn ramp() -> Palette16 {
        let mut entries = [BLACK; 16];
        for (i, entry) in entries.iter_mut().enumerate() {
            *entry = Rgb::new(i as u8 * 16, 0, 0);
        }
        Palette16::new(entries)
    }

    #[test]
    fn test_solid_lookup_is_flat() {
        let palette = Palette16::solid(RED);
        for index in 0..=255u8 {
            assert_eq!(palette.lookup(index, 255, BlendType::Linear), RED);
            assert_eq!(palette.lookup(index, 255, BlendType::NoBlend), RED);
        }
    }

    #[test]
    fn test_lookup_no_blend_uses_lower_stop() {
        let palette = ramp();
        assert_eq!(palette.lookup(0x35, 255, BlendType::NoBlend), Rgb::new(48, 0, 0));
        assert_eq!(palette.lookup(0x30, 255, BlendType::Linear), Rgb::new(48, 0, 0));
    }

    #[test]
    fn test_lookup_linear_midpoint() {
        let mut entries = [BLACK; 16];
        entries[1] = WHITE;
        let palette = Palette16::new(entries);
        assert_eq!(
            palette.lookup(0x08, 255, BlendType::Linear),
            Rgb::new(128, 128, 128)
        );
    }

    #[test]
    fn test_lookup_last_stop_wraps_to_first() {
        let mut entries = [BLACK; 16];
        entries[0] = WHITE;
        let palette = Palette16::new(entries);
        assert!(palette.lookup(0xF8, 255, BlendType::Linear).r > 0);
        assert_eq!(palette.lookup(0xF8, 255, BlendType::NoBlend), BLACK);
    }

    #[test]
    fn test_lookup_scales_brightness() {
        let palette = Palette16::solid(WHITE);
        assert_eq!(palette.lookup(0, 128, BlendType::Linear), Rgb::new(128, 128, 128));
        assert_eq!(palette.lookup(0, 0, BlendType::Linear), BLACK);
    }

    #[test]
    fn test_crossfade_converges() {
        let target = Palette16::solid(Rgb::new(200, 100, 50));
        let mut current = Palette16::solid(BLACK);
        let mut steps = 0;
        while current.crossfade_toward(&target, 1) {
            steps += 1;
            assert!(steps <= 200);
        }
        assert_eq!(steps, 200);
        assert_eq!(current, target);
        assert!(!current.crossfade_toward(&target, 1));
    }

    #[test]
    fn test_crossfade_large_step() {
        let target = Palette16::solid(Rgb::new(200, 100, 50));
        let mut current = Palette16::solid(BLACK);
        let mut steps = 0;
        while current.crossfade_toward(&target, 10) {
            steps += 1;
        }
        assert_eq!(steps, 20);
        assert_eq!(current, target);
    }

    #[test]
    fn test_background() {
        assert_eq!(Palette16::solid(RED).background(), Rgb::new(16, 0, 0));
        assert_eq!(Palette16::solid(BLACK).background(), BLACK);
        assert_eq!(ramp().background(), BLACK);
    }

    #[test]
    fn test_crossfade_adopts_target_name_on_completion() {
        let mut fade = PaletteCrossfade::new(PaletteSlot::named(Palette16::solid(BLACK), "Dark"));
        fade.set_target(PaletteSlot::named(
            Palette16::solid(Rgb::new(3, 0, 0)),
            "Dim",
        ));

        assert!(!fade.advance(1));
        assert_eq!(fade.current().name(), "Dark");
        assert!(!fade.advance(1));
        assert!(fade.advance(1));
        assert_eq!(fade.current().name(), "Dim");
        assert!(fade.is_settled());
        assert!(!fade.advance(1));
    }

    #[test]
    fn test_crossfade_to_catalog_entry() {
        let mut fade = PaletteCrossfade::new(PaletteSlot::catalog(0));
        fade.set_target(PaletteSlot::catalog(1));
        assert!(fade.advance(255));
        assert_eq!(fade.current().name(), palette_name(1));
        assert_eq!(fade.current().index(), Some(1));
    }

    #[test]
    fn test_catalog() {
        assert_eq!(PALETTE_COUNT, 17);
        assert_eq!(palette_name(0), "Rainbow Colors");
        assert_eq!(palette_name(PALETTE_COUNT), "");
        assert_eq!(find_palette("Lava Colors"), Some(1));
        assert_eq!(find_palette("lava colors"), None);
    }

    #[test]
    fn test_catalog_index_wraps() {
        let slot = PaletteSlot::catalog(PALETTE_COUNT + 3);
        assert_eq!(slot.index(), Some(3));
        assert_eq!(slot.name(), palette_name(3));
    }

    #[test]
    fn test_next_in_catalog() {
        assert_eq!(PaletteSlot::catalog(0).next_in_catalog().index(), Some(1));
        assert_eq!(
            PaletteSlot::catalog(PALETTE_COUNT - 1).next_in_catalog().index(),
            Some(0)
        );
        assert_eq!(PaletteSlot::solid(RED).next_in_catalog().index(), Some(0));
    }

    #[test]
    fn test_named_slot() {
        let slot = PaletteSlot::named(Palette16::solid(RED), "Heat Colors");
        assert_eq!(slot.index(), find_palette("Heat Colors"));

        let long = PaletteSlot::named(Palette16::solid(RED), "A very long palette name indeed");
        assert_eq!(long.name(), "A very long palette name");
        assert_eq!(long.index(), None);

        assert_eq!(PaletteSlot::solid(RED).name(), "Custom");
    }
}
