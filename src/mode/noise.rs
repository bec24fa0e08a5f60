//! A bar wandering along the segment on a noise track

use super::{Mode, ModeContext};
use crate::{bar::FractionalBar, math8::map_range, wave::inoise8};

const WIDTH: u16 = 6;
const Y_OFFSET: u16 = 30;
const START_DISTANCE: u16 = 1234;

#[derive(Debug, Clone)]
pub struct NoiseMover {
    sparks: bool,
    /// Position along the noise track
    distance: u16,
}

impl NoiseMover {
    /// With `sparks`, random pixels light up on the dark background
    pub const fn new(sparks: bool) -> Self {
        Self {
            sparks,
            distance: START_DISTANCE,
        }
    }
}

impl Mode for NoiseMover {
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn render(&mut self, ctx: &mut ModeContext<'_>) -> u16 {
        let location = inoise8(ctx.len(), self.distance.wrapping_add(Y_OFFSET));
        let (low, high) = ctx.travel16(WIDTH);
        let pos = map_range(i32::from(location), 0, 255, low, high);

        ctx.fade_out(48);
        let color_index = ((pos / 64) as u8).wrapping_add(ctx.base_hue());
        let bar = FractionalBar::new(pos, WIDTH, color_index).with_max_brightness(ctx.brightness);
        ctx.draw_bar(bar);

        let step = ctx.beatsin(ctx.segment.beat88(), 1, 6);
        self.distance = self.distance.wrapping_add(step);

        if self.sparks {
            ctx.add_sparks(10, true, false);
        }
        ctx.frame_delay
    }

    fn reset(&mut self) {
        self.distance = START_DISTANCE;
    }
}
