use super::{Mode, ModeContext};
use crate::{color::blend_colors, math8::scale8, wave::sin16};

/// Slowly shifting bands of palette color with rolling brightness
#[derive(Debug, Clone)]
pub struct Pride {
    glitter: bool,
    pseudotime: u16,
    hue16: u16,
    last_ms: Option<u32>,
}

impl Pride {
    /// With `glitter`, white sparks are sprinkled on top
    pub const fn new(glitter: bool) -> Self {
        Self {
            glitter,
            pseudotime: 0,
            hue16: 0,
            last_ms: None,
        }
    }
}

impl Mode for Pride {
    #[allow(clippy::cast_sign_loss)]
    fn render(&mut self, ctx: &mut ModeContext<'_>) -> u16 {
        let beat = ctx.segment.beat88();
        let depth = ctx.beatsin(beat / 3 + 1, 96, 224) as u8;
        let theta_step = ctx.beatsin(beat / 5 + 1, 25 * 256, 40 * 256);
        let time_multiplier = ctx.beatsin(beat / 7 + 1, 23, 60);
        let hue_step = ctx.beatsin(beat / 9 + 1, 1, 3000);
        let hue_speed = ctx.beatsin((beat / 5).wrapping_mul(2).wrapping_add(1), 5, 9);

        let elapsed = self
            .last_ms
            .map_or(0, |last| ctx.now.wrapping_sub(last)) as u16;
        self.last_ms = Some(ctx.now);
        self.pseudotime = self
            .pseudotime
            .wrapping_add(elapsed.wrapping_mul(time_multiplier));
        self.hue16 = self.hue16.wrapping_add(elapsed.wrapping_mul(hue_speed));

        let mut hue16 = self.hue16;
        let mut theta = self.pseudotime;
        let bounds = ctx.bounds();
        // Drawn from the segment end backwards
        for index in (bounds.start..=bounds.stop).rev() {
            hue16 = hue16.wrapping_add(hue_step);
            theta = theta.wrapping_add(theta_step);
            let wave = (i32::from(sin16(theta)) + 32768) as u32;
            let squared = (wave * wave) >> 16;
            let level = ((squared * u32::from(depth)) >> 16) as u8;
            let level = level.wrapping_add(255 - depth);

            let color = ctx.color((hue16 >> 8) as u8, scale8(level, ctx.brightness));
            if let Some(led) = ctx.pixel_mut(index) {
                *led = blend_colors(*led, color, 64);
            }
        }

        if self.glitter {
            ctx.add_sparks(10, false, true);
        }
        ctx.frame_delay
    }

    fn reset(&mut self) {
        *self = Self::new(self.glitter);
    }
}
