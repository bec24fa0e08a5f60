use super::{Mode, ModeContext};

/// Delay after the strip is fully sorted, before shuffling again
const SORTED_HOLD_MS: u16 = 5000;
/// Brightness of pixels that are not being compared
const BACKGROUND_LEVEL: u8 = 32;

/// Visualised bubble sort of random hues
///
/// The hues live in the scratch buffer. The two compared pixels are drawn
/// at full brightness, and after a swap the moved value is walked back
/// to the outer cursor before sorting resumes.
#[derive(Debug, Clone, Default)]
pub struct BubbleSort {
    shuffled: bool,
    walking_back: bool,
    inner: usize,
    outer: usize,
    walker: usize,
}

impl BubbleSort {
    pub const fn new() -> Self {
        Self {
            shuffled: false,
            walking_back: false,
            inner: 0,
            outer: 0,
            walker: 0,
        }
    }
}

fn draw_hues(ctx: &mut ModeContext<'_>) {
    let bounds = ctx.bounds();
    let hues = bounds.bytes_mut(ctx.scratch);
    let leds = bounds.slice_mut(ctx.leds);
    for (led, &hue) in leds.iter_mut().zip(hues.iter()) {
        *led = ctx
            .palette
            .lookup(hue, BACKGROUND_LEVEL, ctx.segment.blend_type());
    }
}

/// Light the pixel at segment offset `at` with the hue stored at `hue_of`
fn highlight(ctx: &mut ModeContext<'_>, at: usize, hue_of: usize) {
    let hue = ctx.scratch().get(hue_of).copied().unwrap_or_default();
    let color = ctx.color(hue, ctx.brightness);
    if let Some(led) = ctx.pixels().get_mut(at) {
        *led = color;
    }
}

impl Mode for BubbleSort {
    fn render(&mut self, ctx: &mut ModeContext<'_>) -> u16 {
        if !self.shuffled {
            let bounds = ctx.bounds();
            for hue in bounds.bytes_mut(ctx.scratch).iter_mut() {
                *hue = ctx.rng.random8();
            }
            draw_hues(ctx);
            *self = Self {
                shuffled: true,
                ..Self::new()
            };
            return ctx.frame_delay;
        }

        let len = ctx.scratch().len();
        if self.walking_back {
            draw_hues(ctx);
            highlight(ctx, self.outer, self.inner);
            highlight(ctx, self.walker, self.walker);
            if self.walker <= self.outer {
                self.walking_back = false;
            }
            self.walker = self.walker.saturating_sub(1);
            return ctx.frame_delay;
        }

        if self.outer >= len {
            self.shuffled = false;
            return SORTED_HOLD_MS;
        }
        if self.inner < len {
            let hues = ctx.scratch();
            if hues[self.inner] > hues[self.outer] {
                hues.swap(self.inner, self.outer);
                self.walker = self.inner;
                self.walking_back = true;
            }
            self.inner += 1;
        } else {
            self.outer += 1;
            self.inner = self.outer;
        }

        draw_hues(ctx);
        highlight(ctx, self.inner, self.inner);
        highlight(ctx, self.outer, self.inner);
        ctx.frame_delay
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
