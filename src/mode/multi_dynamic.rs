use super::{Mode, ModeContext};
use crate::{random::random_wheel_index, segment::BEAT88_MAX, time::deadline_reached};

/// Every pixel jumps to a new palette color at once
///
/// Neighbouring pixels are kept apart on the color wheel so the strip
/// never shows two similar colors side by side.
#[derive(Debug, Clone, Default)]
pub struct MultiDynamic {
    next_change: Option<u32>,
}

impl MultiDynamic {
    pub const fn new() -> Self {
        Self { next_change: None }
    }
}

impl Mode for MultiDynamic {
    fn render(&mut self, ctx: &mut ModeContext<'_>) -> u16 {
        if self
            .next_change
            .is_some_and(|deadline| !deadline_reached(ctx.now, deadline))
        {
            return ctx.frame_delay;
        }

        let bounds = ctx.bounds();
        let mut hue = ctx.base_hue();
        for index in bounds.start..=bounds.stop {
            hue = random_wheel_index(&mut *ctx.rng, hue);
            let color = ctx.color(hue, ctx.brightness);
            ctx.set_pixel(index, color);
        }

        let hold = u32::from((BEAT88_MAX - ctx.segment.beat88()) >> 7);
        self.next_change = Some(ctx.now.wrapping_add(hold));
        ctx.frame_delay
    }

    fn reset(&mut self) {
        self.next_change = None;
    }
}
