//! Flames and fireworks

use super::{Mode, ModeContext};
use crate::{
    color::{Rgb, blur1d, is_lit, sub_colors},
    math8::{map_range, scale8},
    segment::BEAT88_MAX,
};

/// Palette fill with random darkening on every pixel
///
/// Lower `reverse_intensity` means deeper flicker.
#[derive(Debug, Clone)]
pub struct FireFlicker {
    reverse_intensity: u8,
}

impl FireFlicker {
    pub const fn new(reverse_intensity: u8) -> Self {
        Self { reverse_intensity }
    }
}

impl Mode for FireFlicker {
    #[allow(clippy::cast_sign_loss)]
    fn render(&mut self, ctx: &mut ModeContext<'_>) -> u16 {
        let bounds = ctx.bounds();
        let depth = 255 / self.reverse_intensity.max(1);
        let hue = ctx.base_hue();

        for index in bounds.start..=bounds.stop {
            let flicker = ctx.rng.random8_lim(depth);
            let along = map_range(
                i32::from(index),
                i32::from(bounds.start),
                i32::from(bounds.stop),
                0,
                255,
            ) as u8;
            let color = ctx.color(along.wrapping_add(hue), ctx.brightness);
            let dim = Rgb::new(
                ctx.rng.random8_lim(flicker),
                ctx.rng.random8_lim(flicker),
                ctx.rng.random8_lim(flicker),
            );
            ctx.set_pixel(index, sub_colors(color, dim));
        }
        (BEAT88_MAX - ctx.segment.beat88()) / 256
    }
}

/// Heat simulation rising from the segment start
///
/// The heat of each cell lives in the scratch buffer.
#[derive(Debug, Clone, Default)]
pub struct Fire2012 {
    primed: bool,
}

impl Fire2012 {
    pub const fn new() -> Self {
        Self { primed: false }
    }
}

impl Mode for Fire2012 {
    fn render(&mut self, ctx: &mut ModeContext<'_>) -> u16 {
        let bounds = ctx.bounds();
        let segment = ctx.segment;
        let heat = bounds.bytes_mut(ctx.scratch);
        let rng = &mut *ctx.rng;
        if !self.primed {
            heat.fill(0);
            self.primed = true;
        }
        let len = heat.len();
        if len == 0 {
            return ctx.frame_delay;
        }

        let cooling = (usize::from(segment.cooling()) * 10 / len + 2).min(255) as u8;
        for cell in heat.iter_mut() {
            *cell = cell.saturating_sub(rng.random8_range(0, cooling));
        }

        for k in (2..len).rev() {
            heat[k] = ((u16::from(heat[k - 1]) + 2 * u16::from(heat[k - 2])) / 3) as u8;
        }

        if rng.random8() < segment.sparking() {
            let y = usize::from(rng.random8_lim(7)).min(len - 1);
            heat[y] = heat[y].saturating_add(rng.random8_range(160, 255));
        }

        for j in 0..len {
            let temperature = heat[j];
            let color = ctx
                .palette
                .lookup(scale8(temperature, 240), ctx.brightness, segment.blend_type());
            let offset = if segment.reverse() { len - 1 - j } else { j };
            if let Some(led) = ctx.leds.get_mut(usize::from(bounds.start) + offset) {
                *led = color;
            }
        }
        ctx.frame_delay
    }

    fn reset(&mut self) {
        self.primed = false;
    }
}

/// Single sparks lit on dark spots and smeared out by blurring
#[derive(Debug, Clone, Default)]
pub struct Firework;

impl Mode for Firework {
    fn render(&mut self, ctx: &mut ModeContext<'_>) -> u16 {
        let beat = ctx.segment.beat88();
        let bounds = ctx.bounds();
        let len = ctx.len();
        blur1d(ctx.pixels(), (255 - (beat >> 8) as u8).saturating_add(2) % 172);

        let range = (len / 7).clamp(6, 255) as u8;
        let chance = (len / 14).clamp(3, 255) as u8;
        if ctx.rng.random8_lim(range) > chance || len < 3 {
            return ctx.frame_delay;
        }

        let index = ctx.rng.random16_range(bounds.start + 1, bounds.stop);
        let color_index = ctx.rng.random8().wrapping_add(ctx.base_hue());
        let crowded = (index - 1..=index + 1)
            .filter(|&i| i < bounds.stop)
            .any(|i| is_lit(ctx.pixel(i)));
        if !crowded {
            let color = ctx.color(color_index, 255);
            ctx.set_pixel(index, color);
        }
        ctx.frame_delay
    }
}
