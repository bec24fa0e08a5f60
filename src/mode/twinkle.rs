//! Sparkling modes: confetti, fading sparks, TwinkleFox and soft twinkles

use super::{Mode, ModeContext};
use crate::{
    bar::FractionalBar,
    color::{BLACK, Rgb, add_colors, average_light, blend_colors, is_lit, sub_colors},
    math8::{attack_decay_wave8, scale8},
    segment::TWINKLE_MAX,
    wave::sin8,
};

/// Delay returned by confetti when it skips a frame
const CONFETTI_IDLE_MS: u16 = 20;

const PRNG16_SEED: u16 = 11337;
const PRNG16_MUL: u16 = 2053;
const PRNG16_INC: u16 = 1384;

const SOFT_LIGHT: Rgb = Rgb { r: 8, g: 7, b: 1 };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwinkleKind {
    /// Short bars popping up on dark spots
    Confetti,
    /// Random sparks fading out
    Fade,
    /// Per-pixel twinkles derived from a repeatable sequence
    Fox,
    /// Pixels slowly brightening and dimming in warm white steps
    Soft,
}

#[derive(Debug, Clone)]
pub struct Twinkle {
    kind: TwinkleKind,
}

impl Twinkle {
    pub const fn new(kind: TwinkleKind) -> Self {
        Self { kind }
    }
}

impl Mode for Twinkle {
    fn render(&mut self, ctx: &mut ModeContext<'_>) -> u16 {
        match self.kind {
            TwinkleKind::Confetti => confetti(ctx),
            TwinkleKind::Fade => {
                ctx.fade_out(((ctx.segment.beat88() >> 8) as u8).saturating_add(12));
                ctx.add_sparks(4, true, false);
                ctx.frame_delay
            }
            TwinkleKind::Fox => twinkle_fox(ctx),
            TwinkleKind::Soft => soft_twinkles(ctx),
        }
    }
}

#[allow(clippy::cast_sign_loss)]
fn confetti(ctx: &mut ModeContext<'_>) -> u16 {
    ctx.fade_out(8);
    if ctx.rng.random8_lim(3) != 0 {
        return CONFETTI_IDLE_MS;
    }

    let bounds = ctx.bounds();
    let index = (ctx.beatsin(ctx.segment.beat88(), 0, 255) as u8).wrapping_add(ctx.base_hue());
    let floor = if ctx.brightness == 0 {
        0
    } else {
        192 % ctx.brightness
    };
    let brightness = ctx.rng.random8_range(floor, ctx.brightness);
    let low = bounds.start.saturating_add(1).saturating_mul(16);
    let high = bounds.stop.saturating_sub(2).saturating_mul(16).saturating_sub(32);
    let pos = ctx.rng.random16_range(low, high);

    let center = i32::from(pos / 16);
    let crowded = (center - 1..=center + 1)
        .filter(|&i| i >= i32::from(bounds.start) && i < i32::from(bounds.stop))
        .any(|i| is_lit(ctx.pixel(i as u16)));
    if !crowded {
        ctx.draw_bar(FractionalBar::new(i32::from(pos), 1, index).with_max_brightness(brightness));
    }
    ctx.frame_delay
}

#[allow(clippy::cast_sign_loss)]
fn twinkle_fox(ctx: &mut ModeContext<'_>) -> u16 {
    let background = ctx.palette.background();
    let background_light = average_light(background);
    let bounds = ctx.bounds();
    let mut prng = PRNG16_SEED;

    for index in bounds.start..=bounds.stop {
        prng = prng.wrapping_mul(PRNG16_MUL).wrapping_add(PRNG16_INC);
        let clock_offset = prng;
        prng = prng.wrapping_mul(PRNG16_MUL).wrapping_add(PRNG16_INC);
        // Speed factor in eighths, from 8/8 to 23/8
        let speed = u32::from((((prng & 0xFF) >> 4) + (prng & 0x0F)) & 0x0F) + 8;
        let clock = (ctx.now.wrapping_mul(speed) >> 3).wrapping_add(u32::from(clock_offset));
        let salt = (prng >> 8) as u8;

        let color = one_twinkle(ctx, clock, salt);
        let delta = i16::from(average_light(color)) - i16::from(background_light);
        let pixel = if delta >= 32 || !is_lit(background) {
            color
        } else if delta > 0 {
            blend_colors(background, color, (delta * 8) as u8)
        } else {
            background
        };
        ctx.set_pixel(index, pixel);
    }
    ctx.frame_delay
}

/// Color of one twinkling pixel at pseudo-time `clock`
///
/// The low bits of the clock drive brightness, the high bits pick the
/// color and whether the pixel lights at all this cycle.
fn one_twinkle(ctx: &ModeContext<'_>, clock: u32, salt: u8) -> Rgb {
    let speed = ctx.segment.twinkle_speed().min(TWINKLE_MAX);
    let ticks = (clock >> (8 - speed)) as u16;
    let fast_cycle = ticks as u8;
    let mut slow_cycle = (ticks >> 8).wrapping_add(u16::from(salt));
    slow_cycle = slow_cycle.wrapping_add(u16::from(sin8(slow_cycle as u8)));
    slow_cycle = slow_cycle.wrapping_mul(PRNG16_MUL).wrapping_add(PRNG16_INC);
    let slow_cycle8 = (slow_cycle as u8).wrapping_add((slow_cycle >> 8) as u8);

    if (slow_cycle8 & 0x0E) / 2 >= ctx.segment.twinkle_density() {
        return BLACK;
    }
    let brightness = attack_decay_wave8(fast_cycle);
    if brightness == 0 {
        return BLACK;
    }
    ctx.color(
        slow_cycle8.wrapping_sub(salt),
        scale8(brightness, ctx.brightness),
    )
}

fn soft_twinkles(ctx: &mut ModeContext<'_>) -> u16 {
    for led in ctx.pixels().iter_mut().filter(|led| is_lit(**led)) {
        *led = if led.r & 1 == 1 {
            sub_colors(*led, SOFT_LIGHT)
        } else {
            add_colors(*led, SOFT_LIGHT)
        };
    }

    // A new pixel starts on an even red value, so it brightens first
    if ctx.rng.random8() < 200 && !ctx.in_transition {
        let bounds = ctx.bounds();
        if bounds.len() >= 3 {
            let j = ctx.rng.random16_range(bounds.start + 1, bounds.stop);
            let dark = [j - 1, j, j + 1].iter().all(|&i| !is_lit(ctx.pixel(i)));
            if dark {
                ctx.set_pixel(j, SOFT_LIGHT);
            }
        }
    }
    ctx.frame_delay
}
