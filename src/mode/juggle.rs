//! Dots sweeping the segment on independent waves

use super::{Mode, ModeContext};
use crate::{
    bar::FractionalBar,
    math8::map_range,
    time::deadline_reached,
    wave::{beat88, cubicwave16, quadwave16, triwave16},
};

const JUGGLE_DOTS: u16 = 3;
const JUGGLE_HUE_INTERVAL_MS: u32 = 100;

/// Three dots on sine waves of slightly different speed
#[derive(Debug, Clone, Default)]
pub struct Juggle {
    hue: u8,
    next_hue_change: Option<u32>,
}

impl Juggle {
    pub const fn new() -> Self {
        Self {
            hue: 0,
            next_hue_change: None,
        }
    }
}

impl Mode for Juggle {
    fn render(&mut self, ctx: &mut ModeContext<'_>) -> u16 {
        let width = (ctx.len() / 15).max(2);
        let mut hue = self.hue;
        if self
            .next_hue_change
            .is_none_or(|deadline| deadline_reached(ctx.now, deadline))
        {
            self.hue = ctx.rng.random8_range(hue, hue.wrapping_add(8));
            self.next_hue_change = Some(ctx.now.wrapping_add(JUGGLE_HUE_INTERVAL_MS));
        }

        ctx.fade_out(96);
        let (low, high) = ctx.travel16(width);
        let base = (ctx.segment.beat88() / 2).max(1);
        for dot in 0..JUGGLE_DOTS {
            let bpm = base.wrapping_add(dot * 256).wrapping_add(762);
            let pos = ctx.beatsin_travel(bpm, low, high);
            let bar = FractionalBar::new(pos, width, hue)
                .with_max_brightness(ctx.brightness);
            ctx.draw_bar(bar);

            let delta = ctx.rng.random8_lim(9);
            hue = if delta < 5 {
                hue.wrapping_sub(delta)
            } else {
                hue.wrapping_add(delta / 2)
            }
            .wrapping_add(ctx.base_hue());
        }
        ctx.frame_delay
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

const DOT_WIDTH: u16 = 2;
const DOT_BEAT_MIN: i32 = 256;
const DOT_BEAT_MAX: i32 = 65535 - 512;

/// Three dots on triangle, quadratic and cubic waves
///
/// Each dot has its own speed and timebase; whenever a dot returns to
/// the segment start its speed jitters and it picks a new color.
#[derive(Debug, Clone, Default)]
pub struct DotBeat {
    beats: [u16; 3],
    timebases: [u32; 3],
    rearm: [bool; 3],
    color_offsets: [u8; 3],
    seeded_for: Option<u16>,
}

impl DotBeat {
    pub const fn new() -> Self {
        Self {
            beats: [0; 3],
            timebases: [0; 3],
            rearm: [false; 3],
            color_offsets: [0; 3],
            seeded_for: None,
        }
    }

    fn seed(&mut self, ctx: &mut ModeContext<'_>) {
        let beat = ctx.segment.beat88();
        let hue = ctx.base_hue();
        for dot in 0..3 {
            let divisor = u16::from(ctx.rng.random8_range(1, 3));
            let factor = u16::from(ctx.rng.random8_range(3, 6));
            self.beats[dot] = (beat / divisor).wrapping_mul(factor).max(beat);
            self.timebases[dot] = ctx.now;
            self.rearm[dot] = false;
            self.color_offsets[dot] = ctx.rng.random8_range(hue, hue.wrapping_add(32));
        }
        self.seeded_for = Some(beat);
    }
}

impl Mode for DotBeat {
    #[allow(clippy::cast_sign_loss)]
    fn render(&mut self, ctx: &mut ModeContext<'_>) -> u16 {
        let beat = ctx.segment.beat88();
        if self.seeded_for != Some(beat) {
            self.seed(ctx);
        }

        ctx.fade_out(64);
        let (low, high) = ctx.travel16(DOT_WIDTH);
        let bounds = ctx.bounds();
        let hue = ctx.base_hue();

        for dot in 0..3 {
            let phase = beat88(self.beats[dot], ctx.now, self.timebases[dot]);
            let wave = match dot {
                0 => triwave16(phase),
                1 => quadwave16(phase),
                _ => cubicwave16(phase),
            };
            let pos = map_range(i32::from(wave), 0, 65535, low, high);

            if pos == low {
                if self.rearm[dot] {
                    self.timebases[dot] = ctx.now;
                    self.rearm[dot] = false;
                }
                let jitter = 256 - i32::from(ctx.rng.random16_range(0, 512));
                self.beats[dot] = (i32::from(self.beats[dot]) + jitter)
                    .max(i32::from(beat))
                    .clamp(DOT_BEAT_MIN, DOT_BEAT_MAX) as u16;
                self.color_offsets[dot] = ctx.rng.random8_range(hue, hue.wrapping_add(64));
            } else {
                self.rearm[dot] = true;
            }

            let along = map_range(
                pos / 16,
                i32::from(bounds.start),
                i32::from(bounds.stop),
                0,
                255,
            );
            let color_index = self.color_offsets[dot].wrapping_add(along as u8);
            let bar = FractionalBar::new(pos, DOT_WIDTH, color_index)
                .with_max_brightness(ctx.brightness);
            ctx.draw_bar(bar);
        }
        ctx.frame_delay
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
