//! Whole-segment palette fills
//!
//! Every pixel is redrawn each frame, so these modes are stable under the
//! engine's per-frame decay.

use super::{Mode, ModeContext};
use crate::{
    color::{BLACK, blend_colors, mirror_half},
    math8::{map8, scale8},
    palette::fill_palette,
    wave::{quadwave8, triwave8},
};

/// Redraw interval of a dark segment
const OFF_IDLE_MS: u16 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillKind {
    /// All pixels black
    Off,
    /// Constant palette spread across the segment
    Static,
    /// Palette spread that drifts and pulses
    Wave,
    Breath,
    Fade,
    /// Slowly rotating spread with waving brightness
    Bright,
    /// Whole segment in one color cycling through the palette
    Rainbow,
    /// Palette spread cycling along the segment
    RainbowCycle,
    /// Bars growing from both ends toward the center
    ToInner,
    /// Brightness and color waves sliding over each other
    Beat,
}

#[derive(Debug, Clone)]
pub struct PaletteFill {
    kind: FillKind,
}

impl PaletteFill {
    pub const fn new(kind: FillKind) -> Self {
        Self { kind }
    }
}

/// Palette index step that spreads one palette turn over `len` pixels
const fn spread_step(len: u16) -> u8 {
    if len > 255 { 1 } else { (255 / len + 1) as u8 }
}

impl Mode for PaletteFill {
    fn render(&mut self, ctx: &mut ModeContext<'_>) -> u16 {
        let beat = ctx.segment.beat88();
        let hue = ctx.base_hue();
        let len = ctx.len();
        let brightness = ctx.brightness;

        match self.kind {
            FillKind::Off => {
                ctx.pixels().fill(BLACK);
                return OFF_IDLE_MS;
            }
            FillKind::Static => ctx.fill_palette(hue, spread_step(len), brightness),
            FillKind::Wave => {
                let shift = ctx.beatsin(beat.wrapping_mul(2), 0, 255) as u8;
                let level = ctx.beatsin(beat, 48, 255) as u8;
                ctx.fill_palette(
                    hue.wrapping_add(shift),
                    spread_step(len).max(1),
                    scale8(level, brightness),
                );
            }
            FillKind::Breath => {
                let level = ctx.beatsin(beat.wrapping_mul(2), 15, 255) as u8;
                ctx.fill_palette(hue, 5, scale8(level, brightness));
            }
            FillKind::Fade => {
                let phase = (ctx.beat(beat.wrapping_mul(10)) >> 8) as u8;
                let level = map8(triwave8(phase), 24, 255);
                ctx.fill_palette(hue, 5, scale8(level, brightness));
            }
            FillKind::Bright => {
                let start = (ctx.beat((beat / 56).max(2)) >> 8) as u8;
                let level = ctx.beatsin((beat / 112).max(1), 16, 255) as u8;
                ctx.fill_palette(start, spread_step(len).max(1), scale8(level, brightness));
            }
            FillKind::Rainbow => {
                let index = (ctx.beat(beat) >> 8) as u8;
                let color = ctx.color(index, brightness);
                ctx.pixels().fill(color);
            }
            FillKind::RainbowCycle => {
                let index = (ctx.beat(beat) >> 8) as u8;
                ctx.fill_palette(index, spread_step(len), brightness);
            }
            FillKind::ToInner => {
                ctx.fade_out(64);
                let speed = if beat < 13107 { beat * 5 } else { beat };
                let count = usize::from(ctx.beatsin(speed, 0, len / 2 + 1));
                let palette = ctx.palette;
                let blend = ctx.segment.blend_type();
                let pixels = ctx.pixels();
                let count = count.min(pixels.len());
                fill_palette(&mut pixels[..count], hue, 5, palette, brightness, blend);
                mirror_half(pixels);
            }
            FillKind::Beat => fill_beat(ctx),
        }

        ctx.frame_delay
    }
}

#[allow(clippy::cast_possible_truncation)]
fn fill_beat(ctx: &mut ModeContext<'_>) {
    let beat = ctx.segment.beat88();
    let shift = (u32::from(beat) * 6 * 255 / 65535) as u8;
    let brightness_offset = triwave8(shift).wrapping_add(ctx.beatsin(beat, 0, 5) as u8);
    let color_phase = (ctx.beat(beat.wrapping_mul(6).max(1)) >> 8) as u8;
    let color_offset = color_phase
        .wrapping_add(ctx.beatsin(beat, 0, 4) as u8)
        .wrapping_add(ctx.base_hue());
    let mix = ctx.bar_mix();
    let bounds = ctx.bounds();

    for index in bounds.start..=bounds.stop {
        let k = index as u8;
        let wave = quadwave8(k.wrapping_mul(2).wrapping_sub(brightness_offset));
        let level = wave.checked_rem(ctx.brightness).unwrap_or(0);
        let color = ctx.color(k.wrapping_add(color_offset), level);
        if let Some(led) = ctx.pixel_mut(index) {
            *led = blend_colors(*led, color, mix);
        }
    }
}
