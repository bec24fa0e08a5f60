use crate::Rgb;

/// Highest pixel index a fitted segment may reach
pub const MAX_INDEX: u16 = u16::MAX - 1;

/// Inclusive pixel range `[start, stop]` owned by a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentBounds {
    pub start: u16,
    pub stop: u16,
}

#[allow(clippy::cast_lossless)]
impl SegmentBounds {
    /// Create bounds, raising `stop` to `start` if they are inverted
    pub const fn new(start: u16, stop: u16) -> Self {
        let stop = if stop < start { start } else { stop };
        Self { start, stop }
    }

    /// Fit the bounds into a buffer of `len` pixels
    ///
    /// Indices stop at [`MAX_INDEX`] so every fitted length fits a `u16`.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn clamped(self, len: usize) -> Self {
        let last = if len == 0 {
            0
        } else if len - 1 > MAX_INDEX as usize {
            MAX_INDEX
        } else {
            (len - 1) as u16
        };
        let stop = if self.stop > last { last } else { self.stop };
        let start = if self.start > stop { stop } else { self.start };
        Self { start, stop }
    }

    /// Get the number of LEDs in the segment
    ///
    /// Saturates for `[0, u16::MAX]`, which [`SegmentBounds::clamped`]
    /// never produces.
    pub const fn len(self) -> u16 {
        (self.stop - self.start).saturating_add(1)
    }

    /// Number of the segment's LEDs present in a buffer of `buffer_len`
    #[allow(clippy::cast_possible_truncation)]
    pub const fn len_in(self, buffer_len: usize) -> u16 {
        let (start, end) = self.window(buffer_len);
        let count = end - start;
        if count > u16::MAX as usize { u16::MAX } else { count as u16 }
    }

    /// Returns center of the segment, relative to `start`
    pub const fn center(self) -> u16 {
        let count = self.len();
        let mut center_len = count / 2;
        if !count.is_multiple_of(2) {
            center_len += 1;
        }
        if center_len <= count { center_len } else { count }
    }

    /// Whether a global pixel index falls inside the segment
    pub const fn contains(self, index: i32) -> bool {
        index >= self.start as i32 && index <= self.stop as i32
    }

    /// First pixel in sixteenths of a pixel
    pub const fn start16(self) -> i32 {
        self.start as i32 * 16
    }

    /// Last pixel in sixteenths of a pixel
    pub const fn stop16(self) -> i32 {
        self.stop as i32 * 16
    }

    /// The segment's pixels within `leds`; cells beyond the buffer are cut off
    pub fn slice_mut(self, leds: &mut [Rgb]) -> &mut [Rgb] {
        let (start, end) = self.window(leds.len());
        &mut leds[start..end]
    }

    pub fn slice(self, leds: &[Rgb]) -> &[Rgb] {
        let (start, end) = self.window(leds.len());
        &leds[start..end]
    }

    /// Same as [`SegmentBounds::slice_mut`] for byte buffers
    pub fn bytes_mut(self, bytes: &mut [u8]) -> &mut [u8] {
        let (start, end) = self.window(bytes.len());
        &mut bytes[start..end]
    }

    const fn window(self, len: usize) -> (usize, usize) {
        let end = if self.stop as usize + 1 < len { self.stop as usize + 1 } else { len };
        let start = if (self.start as usize) < end { self.start as usize } else { end };
        (start, end)
    }
}
