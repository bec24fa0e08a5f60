//! Two mirrored bars easing back and forth
//!
//! Each time the bars cross the center the speed takes a random step,
//! so the motion never settles into a fixed rhythm.

use super::{Mode, ModeContext};
use crate::{bar::FractionalBar, segment::BEAT88_MIN};

const WIDTH: u16 = 1;

#[derive(Debug, Clone)]
pub struct Ease {
    sparks: bool,
    state: Option<EaseState>,
}

#[derive(Debug, Clone, Copy)]
struct EaseState {
    /// Speed currently used for the motion
    beat: u16,
    /// Segment speed the walk started from
    origin: u16,
    previous: i32,
}

impl Ease {
    /// With `sparks`, random pixels light up on the dark background
    pub const fn new(sparks: bool) -> Self {
        Self {
            sparks,
            state: None,
        }
    }
}

impl Mode for Ease {
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn render(&mut self, ctx: &mut ModeContext<'_>) -> u16 {
        let segment_beat = ctx.segment.beat88();
        let (low, high) = ctx.travel16(WIDTH);
        let center = low + (high - low) / 2;
        let state = self.state.get_or_insert(EaseState {
            beat: segment_beat,
            origin: segment_beat,
            previous: low,
        });

        ctx.fade_out((segment_beat >> 5).min(255) as u8);

        let pos = ctx.beatsin_travel(state.beat, low, high);
        if (state.previous < center) != (pos < center) {
            if state.origin != segment_beat {
                state.beat = segment_beat;
                state.origin = segment_beat;
            }
            ctx.runtime.rebase(ctx.now);
            let step = i16::from(ctx.rng.random8());
            state.beat = if state.beat < 255 {
                state.beat.wrapping_add_signed(2 * step)
            } else {
                state.beat.wrapping_add_signed(2 * (128 - step))
            }
            .max(BEAT88_MIN);
        }
        state.previous = pos;

        let start = i32::from(ctx.bounds().start);
        let color_index = ((pos / 16 - start) as u8).wrapping_add(ctx.base_hue());
        let mirrored = high - (pos - low);
        for position in [pos, mirrored] {
            let bar = FractionalBar::new(position, WIDTH, color_index)
                .with_max_brightness(ctx.brightness);
            ctx.draw_bar(bar);
        }

        if self.sparks {
            ctx.add_sparks(10, true, false);
        }
        ctx.frame_delay
    }

    fn reset(&mut self) {
        self.state = None;
    }
}
