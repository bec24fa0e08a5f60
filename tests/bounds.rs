mod common;

mod tests {
    use stripfx::bounds::{MAX_INDEX, SegmentBounds};
    use stripfx::{Engine, EngineConfig};

    use crate::common::{ManualClock, RecordingOutput};

    #[test]
    fn test_len_counts_inclusive_range() {
        assert_eq!(SegmentBounds::new(0, 0).len(), 1);
        assert_eq!(SegmentBounds::new(3, 8).len(), 6);
        assert_eq!(SegmentBounds::new(8, 3), SegmentBounds::new(8, 8));
    }

    #[test]
    fn test_len_in_empty_buffer() {
        let bounds = SegmentBounds::new(0, 7).clamped(0);
        assert_eq!(bounds.len_in(0), 0);
        assert_eq!(SegmentBounds::new(2, 9).len_in(5), 3);
        assert_eq!(SegmentBounds::new(6, 9).len_in(5), 0);
    }

    #[test]
    fn test_clamped_lengths_fit() {
        let bounds = SegmentBounds::new(0, u16::MAX).clamped(100_000);
        assert_eq!(bounds.stop, MAX_INDEX);
        assert_eq!(bounds.len(), u16::MAX);
        assert_eq!(bounds.len_in(100_000), u16::MAX);
    }

    #[test]
    fn test_zero_length_engine() {
        let clock = ManualClock::new(0);
        let mut engine = Engine::<_, 0>::new(&clock, EngineConfig::default());
        let mut output = RecordingOutput::default();
        assert_eq!(engine.length(), 0);

        engine.init(&mut output);
        engine.start();
        for _ in 0..5 {
            assert!(engine.service(&mut output));
            clock.advance(16);
        }
        assert_eq!(output.count(), 6);
        assert_eq!(output.last(), Some(&[][..]));
    }
}
