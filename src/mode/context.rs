use crate::{
    bar::FractionalBar,
    bounds::SegmentBounds,
    color::{Rgb, WHITE, add_colors, fade_to_black_by, is_lit},
    math8::map_range,
    palette::{Palette16, fill_palette},
    random::RandomSource,
    segment::{Segment, SegmentRuntime},
    wave::{beat88, beatsin88},
};

/// Everything a mode may read or touch while drawing one frame
///
/// `leds` and `scratch` span the whole strip; a mode must only write the
/// cells inside [`ModeContext::bounds`]. The helpers here clip for it.
pub struct ModeContext<'a> {
    /// Engine time in milliseconds
    pub now: u32,
    pub segment: &'a Segment,
    pub runtime: &'a mut SegmentRuntime,
    /// Current (rendered) palette
    pub palette: &'a Palette16,
    pub brightness: u8,
    /// Frame interval derived from the target FPS
    pub frame_delay: u16,
    /// A mode crossfade is running
    pub in_transition: bool,
    /// Working buffer
    pub leds: &'a mut [Rgb],
    /// Per-pixel bytes kept across frames
    pub scratch: &'a mut [u8],
    pub rng: &'a mut dyn RandomSource,
}

impl ModeContext<'_> {
    pub const fn bounds(&self) -> SegmentBounds {
        self.segment.bounds()
    }

    /// Number of the segment's pixels in the working buffer
    pub fn len(&self) -> u16 {
        self.segment.bounds().len_in(self.leds.len())
    }

    pub const fn base_hue(&self) -> u8 {
        self.runtime.base_hue
    }

    /// Phase of a `bpm88` beat measured from the segment timebase
    pub fn beat(&self, bpm88: u16) -> u16 {
        beat88(bpm88, self.now, self.runtime.timebase)
    }

    /// Sine between `lowest` and `highest` at `bpm88`
    pub fn beatsin(&self, bpm88: u16, lowest: u16, highest: u16) -> u16 {
        beatsin88(bpm88, lowest, highest, self.now, self.runtime.timebase)
    }

    /// Travel range, in 1/16 pixel, for a bar of `width` that stays inside
    /// the segment
    pub fn travel16(&self, width: u16) -> (i32, i32) {
        let bounds = self.bounds();
        let low = bounds.start16();
        let high = bounds.stop16() - i32::from(width) * 16;
        (low, high.max(low))
    }

    /// Sine between the ends of a [`ModeContext::travel16`] range at `bpm88`
    pub fn beatsin_travel(&self, bpm88: u16, low: i32, high: i32) -> i32 {
        let wave = self.beatsin(bpm88, 0, u16::MAX);
        map_range(i32::from(wave), 0, i32::from(u16::MAX), low, high)
    }

    /// Palette color using the segment's blend type
    pub fn color(&self, index: u8, brightness: u8) -> Rgb {
        self.palette
            .lookup(index, brightness, self.segment.blend_type())
    }

    /// The segment's slice of the working buffer
    pub fn pixels(&mut self) -> &mut [Rgb] {
        self.segment.bounds().slice_mut(self.leds)
    }

    /// The segment's slice of the scratch buffer
    pub fn scratch(&mut self) -> &mut [u8] {
        self.segment.bounds().bytes_mut(self.scratch)
    }

    /// Write `color` to a global pixel index if it belongs to the segment
    pub fn set_pixel(&mut self, index: u16, color: Rgb) {
        if let Some(led) = self.pixel_mut(index) {
            *led = color;
        }
    }

    pub fn pixel_mut(&mut self, index: u16) -> Option<&mut Rgb> {
        if !self.bounds().contains(i32::from(index)) {
            return None;
        }
        self.leds.get_mut(usize::from(index))
    }

    pub fn pixel(&self, index: u16) -> Rgb {
        if !self.bounds().contains(i32::from(index)) {
            return Rgb::default();
        }
        self.leds.get(usize::from(index)).copied().unwrap_or_default()
    }

    pub fn fill_palette(&mut self, start_index: u8, step: u8, brightness: u8) {
        let bounds = self.segment.bounds();
        fill_palette(
            bounds.slice_mut(self.leds),
            start_index,
            step,
            self.palette,
            brightness,
            self.segment.blend_type(),
        );
    }

    pub fn fade_out(&mut self, amount: u8) {
        fade_to_black_by(self.pixels(), amount);
    }

    /// Blend weight for bars, faster segments overwrite more
    pub fn bar_mix(&self) -> u8 {
        ((self.segment.beat88() >> 8) as u8).saturating_add(24)
    }

    pub fn draw_bar(&mut self, bar: FractionalBar) {
        let mix = self.bar_mix();
        bar.draw(
            self.leds,
            self.segment.bounds(),
            self.palette,
            self.segment.blend_type(),
            mix,
        );
    }

    /// With a chance of `1 / probability`, light one random pixel
    ///
    /// The spark is white or a palette color near the base hue. With
    /// `on_black_only` a lit pixel is left alone.
    pub fn add_sparks(&mut self, probability: u8, on_black_only: bool, white: bool) {
        if self.rng.random8_lim(probability) != 0 {
            return;
        }
        let bounds = self.bounds();
        let index = self
            .rng
            .random16_range(bounds.start, bounds.stop.saturating_add(1));
        let current = self.pixel(index);
        if on_black_only && is_lit(current) {
            return;
        }
        let spark = if white {
            WHITE
        } else {
            let hue = self.base_hue();
            let color_index = self.rng.random8_range(hue, hue.wrapping_add(64));
            let brightness = self.rng.random8_range(92, 255);
            self.color(color_index, brightness)
        };
        self.set_pixel(index, add_colors(current, spark));
    }
}
