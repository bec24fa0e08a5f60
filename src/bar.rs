//! Anti-aliased light bars at sub-pixel positions.
//!
//! Positions are in sixteenths of a pixel. A bar of width `w` touches
//! `w + 1` pixels: the first and last are partially lit so that their
//! brightness always sums to 255, interior pixels are fully lit.

use crate::{
    bounds::SegmentBounds,
    color::{Rgb, add_colors, blend_colors},
    palette::{BlendType, Palette16},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FractionalBar {
    /// Position of the leading edge in 1/16 pixel
    pub position: i32,
    /// Width in whole pixels
    pub width: u16,
    pub color_index: u8,
    /// Brightness of the interior pixels
    pub max_brightness: u8,
}

impl FractionalBar {
    pub const fn new(position: i32, width: u16, color_index: u8) -> Self {
        Self {
            position,
            width,
            color_index,
            max_brightness: 255,
        }
    }

    pub const fn with_max_brightness(mut self, max_brightness: u8) -> Self {
        self.max_brightness = max_brightness;
        self
    }

    /// Brightness of the first and the last pixel
    #[allow(clippy::cast_sign_loss)]
    pub const fn edge_brightness(&self) -> (u8, u8) {
        let frac = self.position.rem_euclid(16) as u8;
        let first = 255 - frac * 16;
        (first, 255 - first)
    }

    /// Composite the bar onto `leds`
    ///
    /// Pixels outside `bounds` (or outside the buffer) are skipped. Each
    /// touched pixel moves toward `existing + bar color` by `mix`.
    #[allow(clippy::cast_sign_loss)]
    pub fn draw(
        &self,
        leds: &mut [Rgb],
        bounds: SegmentBounds,
        palette: &Palette16,
        blend: BlendType,
        mix: u8,
    ) {
        let first_pixel = self.position.div_euclid(16);
        let width = i32::from(self.width);
        let (first, last) = self.edge_brightness();

        for n in 0..=width {
            let pixel = first_pixel + n;
            if !bounds.contains(pixel) {
                continue;
            }
            let Some(led) = leds.get_mut(pixel as usize) else {
                continue;
            };
            let brightness = if n == 0 {
                first
            } else if n == width {
                last
            } else {
                self.max_brightness
            };
            let color = palette.lookup(self.color_index, brightness, blend);
            *led = blend_colors(*led, add_colors(*led, color), mix);
        }
    }
}
