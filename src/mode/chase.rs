//! Theater-style chases and running lights

use super::{Mode, ModeContext};
use crate::{
    color::{BLACK, blend_colors},
    math8::{map_range, scale8},
    palette::Palette16,
    wave::sin8,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChaseKind {
    /// Every third pixel lit, the rest dark
    Theater,
    /// Every third pixel lit, the rest from the opposite side of the palette
    TheaterDualPalette,
    /// Every third pixel lit in one color that cycles through the palette
    TheaterRainbow,
    /// Sine-shaped brightness running along the segment
    RunningLights,
}

#[derive(Debug, Clone)]
pub struct Chase {
    kind: ChaseKind,
}

impl Chase {
    pub const fn new(kind: ChaseKind) -> Self {
        Self { kind }
    }
}

/// Palette index for offset `i` spread over `len` pixels
#[allow(clippy::cast_sign_loss)]
fn spread_index(i: u16, len: u16) -> u8 {
    map_range(i32::from(i), 0, i32::from(len) - 1, 0, 255) as u8
}

/// Global pixel for segment offset `i`, honouring the segment direction
fn placed(ctx: &ModeContext<'_>, i: u16) -> u16 {
    let bounds = ctx.segment.bounds();
    if ctx.segment.reverse() {
        bounds.stop - i
    } else {
        bounds.start + i
    }
}

fn theater(ctx: &mut ModeContext<'_>, lit: &Palette16, unlit: &Palette16) {
    let off = ((ctx.beat(ctx.segment.beat88()) >> 8) % 3) as u16;
    let len = ctx.len();
    let hue = ctx.base_hue();
    let blend = ctx.segment.blend_type();

    for i in 0..len {
        let index = spread_index(i, len).wrapping_add(hue);
        let color = if i % 3 == off {
            lit.lookup(index, ctx.brightness, blend)
        } else {
            unlit.lookup(index.wrapping_add(128), ctx.brightness, blend)
        };
        let pixel = placed(ctx, i);
        ctx.set_pixel(pixel, color);
    }
}

#[allow(clippy::cast_sign_loss)]
fn running_lights(ctx: &mut ModeContext<'_>) {
    let beat = ctx.segment.beat88();
    let len = ctx.len();
    let hue = ctx.base_hue();
    let mix = ((beat >> 8) as u8).saturating_add(16);
    let shift = map_range(i32::from(ctx.beat(beat)), 0, 65535, 0, i32::from(len) - 1) as u16;

    for i in 0..len {
        let level = sin8(spread_index(i, len)).saturating_sub(2);
        let offset = ((u32::from(shift) + u32::from(i)) % u32::from(len)) as u16;
        let color = ctx.color(
            spread_index(offset, len).wrapping_add(hue),
            scale8(level, ctx.brightness),
        );
        let pixel = placed(ctx, offset);
        if let Some(led) = ctx.pixel_mut(pixel) {
            *led = blend_colors(*led, color, mix);
        }
    }
}

impl Mode for Chase {
    fn render(&mut self, ctx: &mut ModeContext<'_>) -> u16 {
        let palette = ctx.palette;
        match self.kind {
            ChaseKind::Theater => theater(ctx, palette, &Palette16::solid(BLACK)),
            ChaseKind::TheaterDualPalette => theater(ctx, palette, palette),
            ChaseKind::TheaterRainbow => {
                ctx.runtime.step = (ctx.runtime.step + 1) & 0xFF;
                let color = ctx.color(ctx.runtime.step as u8, 255);
                theater(ctx, &Palette16::solid(color), &Palette16::solid(BLACK));
            }
            ChaseKind::RunningLights => running_lights(ctx),
        }
        ctx.frame_delay
    }
}
