use super::{Mode, ModeContext};
use crate::{
    color::blend_colors,
    math8::scale8,
    wave::{cos8, cubicwave8},
};

/// Two interfering waves mapped through the palette
#[derive(Debug, Clone, Default)]
pub struct Plasma;

/// `beat * num / den`, saturating at the 16-bit range
fn scaled_beat(beat: u16, num: u32, den: u32) -> u16 {
    (u32::from(beat) * num / den).min(u32::from(u16::MAX)) as u16
}

impl Mode for Plasma {
    fn render(&mut self, ctx: &mut ModeContext<'_>) -> u16 {
        let beat = ctx.segment.beat88();
        let this_phase = ctx.beatsin(beat, 0, 255) as u8;
        let that_phase = ctx.beatsin(scaled_beat(beat, 11, 10), 0, 255) as u8;
        let dimming = ctx.beatsin(scaled_beat(beat, 12, 10), 0, 128) as u8;
        let hue = ctx.base_hue();
        let bounds = ctx.bounds();

        for k in bounds.start..=bounds.stop {
            let k8 = k as u8;
            let index = (cubicwave8(k8.wrapping_mul(15).wrapping_add(this_phase)) / 2)
                .wrapping_add(cos8(k8.wrapping_mul(8).wrapping_add(that_phase)) / 2)
                .wrapping_add(hue);
            let level = index.saturating_sub(dimming);
            let color = ctx.color(index, scale8(level, ctx.brightness));
            if let Some(led) = ctx.pixel_mut(k) {
                *led = blend_colors(*led, color, 64);
            }
        }
        ctx.frame_delay
    }
}
