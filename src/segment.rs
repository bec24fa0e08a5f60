//! Segment configuration and per-segment runtime state.

use embassy_time::Duration;

use crate::{
    bounds::SegmentBounds,
    mode::ModeId,
    palette::BlendType,
    time::{deadline_reached, duration_ms},
};

/// Maximum number of segments per engine
pub const MAX_SEGMENTS: usize = 10;

/// Slowest allowed speed
pub const BEAT88_MIN: u16 = 1;
/// Fastest allowed speed
pub const BEAT88_MAX: u16 = 65535;
pub const DEFAULT_BEAT88: u16 = 255;

pub const DEFAULT_HUE_DELTA: u8 = 1;
pub const DEFAULT_HUE_PERIOD: Duration = Duration::from_millis(5000);
/// Full replacement of the display by the working buffer
pub const DEFAULT_BLUR: u8 = 255;

pub const DEFAULT_TWINKLE_SPEED: u8 = 4;
pub const DEFAULT_TWINKLE_DENSITY: u8 = 5;
/// Highest twinkle speed or density
pub const TWINKLE_MAX: u8 = 8;
pub const DEFAULT_COOLING: u8 = 55;
pub const DEFAULT_SPARKING: u8 = 120;

pub const DEFAULT_AUTOPLAY_DWELL: Duration = Duration::from_secs(30);
pub const DEFAULT_AUTO_PALETTE_DWELL: Duration = Duration::from_secs(30);

/// Clamp a speed into `[BEAT88_MIN, BEAT88_MAX]`
pub const fn clamp_beat88(beat88: u16) -> u16 {
    if beat88 < BEAT88_MIN { BEAT88_MIN } else { beat88 }
}

/// Configuration of one independently animated range of the strip
///
/// Built with the `with_*` methods and installed through
/// [`Engine::set_segment`](crate::Engine::set_segment), which fits the
/// bounds into the pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub(crate) bounds: SegmentBounds,
    pub(crate) mode: ModeId,
    pub(crate) beat88: u16,
    pub(crate) hue_delta: u8,
    pub(crate) hue_period_ms: u32,
    pub(crate) blend_type: BlendType,
    pub(crate) reverse: bool,
    pub(crate) blur: u8,
    pub(crate) twinkle_speed: u8,
    pub(crate) twinkle_density: u8,
    pub(crate) cooling: u8,
    pub(crate) sparking: u8,
    pub(crate) autoplay: bool,
    pub(crate) autoplay_ms: u32,
    pub(crate) auto_palette: bool,
    pub(crate) auto_palette_ms: u32,
}

impl Segment {
    pub const fn new(start: u16, stop: u16) -> Self {
        Self {
            bounds: SegmentBounds::new(start, stop),
            mode: ModeId::Static,
            beat88: DEFAULT_BEAT88,
            hue_delta: DEFAULT_HUE_DELTA,
            hue_period_ms: duration_ms(DEFAULT_HUE_PERIOD),
            blend_type: BlendType::Linear,
            reverse: false,
            blur: DEFAULT_BLUR,
            twinkle_speed: DEFAULT_TWINKLE_SPEED,
            twinkle_density: DEFAULT_TWINKLE_DENSITY,
            cooling: DEFAULT_COOLING,
            sparking: DEFAULT_SPARKING,
            autoplay: false,
            autoplay_ms: duration_ms(DEFAULT_AUTOPLAY_DWELL),
            auto_palette: false,
            auto_palette_ms: duration_ms(DEFAULT_AUTO_PALETTE_DWELL),
        }
    }

    pub const fn with_mode(mut self, mode: ModeId) -> Self {
        self.mode = mode;
        self
    }

    pub const fn with_beat88(mut self, beat88: u16) -> Self {
        self.beat88 = clamp_beat88(beat88);
        self
    }

    pub const fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub const fn with_blend_type(mut self, blend_type: BlendType) -> Self {
        self.blend_type = blend_type;
        self
    }

    pub const fn with_blur(mut self, blur: u8) -> Self {
        self.blur = blur;
        self
    }

    /// Rotate the base hue by `delta` every `period`
    pub const fn with_hue_rotation(mut self, delta: u8, period: Duration) -> Self {
        self.hue_delta = delta;
        self.hue_period_ms = duration_ms(period);
        self
    }

    /// Twinkle speed and density, each `0..=8`
    pub const fn with_twinkle(mut self, speed: u8, density: u8) -> Self {
        self.twinkle_speed = if speed > TWINKLE_MAX { TWINKLE_MAX } else { speed };
        self.twinkle_density = if density > TWINKLE_MAX { TWINKLE_MAX } else { density };
        self
    }

    pub const fn with_fire(mut self, cooling: u8, sparking: u8) -> Self {
        self.cooling = cooling;
        self.sparking = sparking;
        self
    }

    /// Advance to the next mode after every `dwell`
    pub const fn with_autoplay(mut self, dwell: Duration) -> Self {
        self.autoplay = true;
        self.autoplay_ms = duration_ms(dwell);
        self
    }

    /// Advance to the next catalog palette after every `dwell`
    pub const fn with_auto_palette(mut self, dwell: Duration) -> Self {
        self.auto_palette = true;
        self.auto_palette_ms = duration_ms(dwell);
        self
    }

    pub const fn bounds(&self) -> SegmentBounds {
        self.bounds
    }

    pub const fn len(&self) -> u16 {
        self.bounds.len()
    }

    pub const fn mode(&self) -> ModeId {
        self.mode
    }

    pub const fn beat88(&self) -> u16 {
        self.beat88
    }

    pub const fn hue_delta(&self) -> u8 {
        self.hue_delta
    }

    pub const fn hue_period_ms(&self) -> u32 {
        self.hue_period_ms
    }

    pub const fn blend_type(&self) -> BlendType {
        self.blend_type
    }

    pub const fn reverse(&self) -> bool {
        self.reverse
    }

    pub const fn blur(&self) -> u8 {
        self.blur
    }

    pub const fn twinkle_speed(&self) -> u8 {
        self.twinkle_speed
    }

    pub const fn twinkle_density(&self) -> u8 {
        self.twinkle_density
    }

    pub const fn cooling(&self) -> u8 {
        self.cooling
    }

    pub const fn sparking(&self) -> u8 {
        self.sparking
    }

    pub const fn autoplay(&self) -> bool {
        self.autoplay
    }

    pub const fn auto_palette(&self) -> bool {
        self.auto_palette
    }
}

impl Default for Segment {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// Time-derived state of one segment
///
/// Every instant is an engine millisecond timestamp and is compared with
/// [`deadline_reached`]. Rebuilt whenever the segment is (re)configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentRuntime {
    /// Phase origin for the segment's wave functions
    pub timebase: u32,
    pub next_service: u32,
    pub next_hue: u32,
    pub next_autoplay: u32,
    pub next_auto_palette: u32,
    /// Rolling hue offset added to palette indices
    pub base_hue: u8,
    /// Wrapping counter for effects that keep an index across frames
    pub step: u32,
}

impl SegmentRuntime {
    /// Fresh runtime whose schedule starts at `now`
    pub const fn starting_at(now: u32, segment: &Segment) -> Self {
        Self {
            timebase: now,
            next_service: now,
            next_hue: now.wrapping_add(segment.hue_period_ms),
            next_autoplay: now.wrapping_add(segment.autoplay_ms),
            next_auto_palette: now.wrapping_add(segment.auto_palette_ms),
            base_hue: 0,
            step: 0,
        }
    }

    /// Restart every schedule from `now`, keeping the hue and the step
    pub fn reschedule(&mut self, now: u32, segment: &Segment) {
        *self = Self {
            base_hue: self.base_hue,
            step: self.step,
            ..Self::starting_at(now, segment)
        };
    }

    /// Move the phase origin to `now`
    pub fn rebase(&mut self, now: u32) {
        self.timebase = now;
    }

    /// Rotate the base hue if its instant has come
    pub fn rotate_hue(&mut self, segment: &Segment, now: u32) {
        if !deadline_reached(now, self.next_hue) {
            return;
        }
        self.base_hue = if segment.reverse {
            self.base_hue.wrapping_sub(segment.hue_delta)
        } else {
            self.base_hue.wrapping_add(segment.hue_delta)
        };
        self.next_hue = now.wrapping_add(segment.hue_period_ms);
    }
}
