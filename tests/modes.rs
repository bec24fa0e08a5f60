mod common;

mod tests {
    use stripfx::segment::SegmentRuntime;
    use stripfx::{
        Engine, EngineConfig, ModeContext, ModeId, Palette16, Random, RandomSource, Rgb, Segment,
    };

    use crate::common::{BLACK, ManualClock, RED, RecordingOutput, ScriptedRandom};

    const STRIP: usize = 12;

    /// Run `mode` on `[start, stop]` and check nothing leaks out of it
    fn run_confined<R: RandomSource>(mode: ModeId, start: u16, stop: u16, rng: R) {
        let clock = ManualClock::new(0);
        let mut engine =
            Engine::<_, STRIP, R>::with_random(&clock, EngineConfig::default(), rng);
        let mut output = RecordingOutput::default();
        engine.set_segment(0, Segment::new(start, stop).with_mode(mode).with_beat88(2000));
        engine.init(&mut output);
        engine.start();

        for _ in 0..400 {
            engine.service(&mut output);
            clock.advance(7);
        }

        let (start, stop) = (usize::from(start), usize::from(stop));
        for (i, led) in engine.frame().iter().enumerate() {
            if i < start || i > stop {
                assert_eq!(*led, BLACK, "{mode:?} leaked into pixel {i}");
            }
        }
        for (i, led) in engine.working_frame().iter().enumerate() {
            if i < start || i > stop {
                assert_eq!(*led, BLACK, "{mode:?} drew pixel {i}");
            }
        }
    }

    #[test]
    fn test_every_mode_stays_inside_its_segment() {
        for mode in ModeId::ALL {
            run_confined(mode, 3, 8, stripfx::Random::with_seed(7));
        }
    }

    #[test]
    fn test_every_mode_on_tiny_segments() {
        for mode in ModeId::ALL {
            for (start, stop) in [(5, 5), (5, 6), (5, 7)] {
                run_confined(mode, start, stop, stripfx::Random::with_seed(11));
            }
        }
    }

    #[test]
    fn test_every_mode_with_extreme_randomness() {
        for mode in ModeId::ALL {
            run_confined(mode, 2, 9, ScriptedRandom::new(&[0]));
            run_confined(mode, 2, 9, ScriptedRandom::new(&[255]));
        }
    }

    #[test]
    fn test_every_mode_on_full_strip() {
        for mode in ModeId::ALL {
            let clock = ManualClock::new(u32::MAX - 1000);
            let mut engine = Engine::<_, STRIP>::new(&clock, EngineConfig::default());
            let mut output = RecordingOutput::default();
            engine.set_segment(0, Segment::new(0, 200).with_mode(mode).with_reverse(true));
            engine.start();
            for _ in 0..300 {
                assert!(engine.service(&mut output));
                clock.advance(9);
            }
            assert_eq!(output.count(), 300);
        }
    }

    #[test]
    fn test_most_modes_light_something() {
        let dark_allowed = [
            ModeId::SoftTwinkles,
            ModeId::Firework,
            ModeId::Confetti,
            ModeId::Off,
        ];
        for mode in ModeId::ALL {
            if dark_allowed.contains(&mode) {
                continue;
            }
            let clock = ManualClock::new(0);
            let mut engine = Engine::<_, 30>::new(&clock, EngineConfig::default());
            let mut output = RecordingOutput::default();
            engine.set_segment(0, Segment::new(0, 29).with_mode(mode));
            engine.start();
            let mut lit = false;
            for _ in 0..500 {
                engine.service(&mut output);
                clock.advance(10);
                lit |= engine.working_frame().iter().any(|led| *led != BLACK);
            }
            assert!(lit, "{mode:?} never lit a pixel");
        }
    }

    #[test]
    fn test_off_blanks_its_segment() {
        let clock = ManualClock::new(0);
        let mut engine = Engine::<_, STRIP>::new(&clock, EngineConfig::default());
        let mut output = RecordingOutput::default();
        engine.set_segment(0, Segment::new(0, 5));
        engine.set_segment(1, Segment::new(6, 11).with_mode(ModeId::Off));
        engine.start();
        for _ in 0..10 {
            engine.service(&mut output);
            clock.advance(16);
        }

        let frame = engine.frame();
        assert!(frame[..6].iter().any(|led| *led != BLACK));
        assert!(frame[6..].iter().all(|led| *led == BLACK));
    }

    #[test]
    fn test_noise_mover_wanders() {
        let clock = ManualClock::new(0);
        let mut engine = Engine::<_, 30>::new(&clock, EngineConfig::default());
        let mut output = RecordingOutput::default();
        engine.set_segment(0, Segment::new(0, 29).with_mode(ModeId::NoiseMover));
        engine.start();

        let mut lowest = usize::MAX;
        let mut highest = 0;
        for _ in 0..2000 {
            engine.service(&mut output);
            clock.advance(16);
            let brightest = engine
                .working_frame()
                .iter()
                .enumerate()
                .max_by_key(|(_, led)| u16::from(led.r) + u16::from(led.g) + u16::from(led.b))
                .map_or(0, |(i, _)| i);
            lowest = lowest.min(brightest);
            highest = highest.max(brightest);
        }
        assert!(highest > lowest + 2, "bar stayed around pixel {lowest}");
    }

    #[test]
    fn test_travel_range_on_long_strips() {
        let segment = Segment::new(5000, 6000);
        let mut runtime = SegmentRuntime::default();
        let palette = Palette16::solid(RED);
        let mut leds: [Rgb; 0] = [];
        let mut scratch: [u8; 0] = [];
        let mut rng = Random::with_seed(3);
        let mut ctx = ModeContext {
            now: 0,
            segment: &segment,
            runtime: &mut runtime,
            palette: &palette,
            brightness: 255,
            frame_delay: 16,
            in_transition: false,
            leds: &mut leds,
            scratch: &mut scratch,
            rng: &mut rng,
        };

        let (low, high) = ctx.travel16(6);
        assert_eq!((low, high), (80_000, 95_904));
        for now in (0..60_000).step_by(250) {
            ctx.now = now;
            let pos = ctx.beatsin_travel(2000, low, high);
            assert!((low..=high).contains(&pos), "{pos} at {now}");
        }
    }
}
