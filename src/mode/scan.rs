//! Bars running along the segment

use super::{Mode, ModeContext};
use crate::{bar::FractionalBar, color::BLACK, math8::map_range, wave::triwave16};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanKind {
    /// One bar bouncing between the ends on a black background
    Scan,
    /// Two bars bouncing in opposite directions
    DualScan,
    /// Bouncing bar leaving a fading trail
    Larson,
    /// Bar shot from one end to the other, leaving a trail
    Comet,
}

#[derive(Debug, Clone)]
pub struct Scanner {
    kind: ScanKind,
}

impl Scanner {
    pub const fn new(kind: ScanKind) -> Self {
        Self { kind }
    }
}

const SCAN_WIDTH: u16 = 2;

fn trail_width(len: u16) -> u16 {
    (len / 15).max(1)
}

/// Palette index of a bar at `pos` within `[low, high]`
#[allow(clippy::cast_sign_loss)]
fn index_along(pos: i32, low: i32, high: i32, hue: u8) -> u8 {
    (map_range(pos, low, high, 0, 255) as u8).wrapping_add(hue)
}

impl Mode for Scanner {
    #[allow(clippy::cast_sign_loss)]
    fn render(&mut self, ctx: &mut ModeContext<'_>) -> u16 {
        let beat = ctx.segment.beat88();
        let hue = ctx.base_hue();
        let phase = ctx.beat(beat);

        match self.kind {
            ScanKind::Scan | ScanKind::DualScan => {
                let (low, high) = ctx.travel16(SCAN_WIDTH);
                let pos = map_range(i32::from(triwave16(phase)), 0, 65535, low, high);
                let mirrored = high - (pos - low);
                ctx.pixels().fill(BLACK);

                let forward =
                    FractionalBar::new(pos, SCAN_WIDTH, ((pos / 16) as u8).wrapping_add(hue));
                let backward = FractionalBar::new(
                    mirrored,
                    SCAN_WIDTH,
                    (255 - (pos / 16) as u8).wrapping_add(hue),
                );
                let (draw_forward, draw_backward) = match (self.kind, ctx.segment.reverse()) {
                    (ScanKind::DualScan, _) => (true, true),
                    (_, true) => (false, true),
                    _ => (true, false),
                };
                if draw_backward {
                    ctx.draw_bar(backward.with_max_brightness(ctx.brightness));
                }
                if draw_forward {
                    ctx.draw_bar(forward.with_max_brightness(ctx.brightness));
                }
            }
            ScanKind::Larson => {
                let width = trail_width(ctx.len());
                ctx.fade_out(96);
                let (low, high) = ctx.travel16(width);
                let pos = map_range(i32::from(triwave16(phase)), 0, 65535, low, high);
                let bar = FractionalBar::new(pos, width, index_along(pos, low, high, hue))
                    .with_max_brightness(ctx.brightness);
                ctx.draw_bar(bar);
            }
            ScanKind::Comet => {
                let width = trail_width(ctx.len());
                ctx.fade_out(96);
                let bounds = ctx.bounds();
                let travel = map_range(i32::from(phase), 0, 65535, 0, i32::from(ctx.len()) * 16);
                let pos = if ctx.segment.reverse() {
                    bounds.stop16() - travel
                } else {
                    bounds.start16() + travel
                };
                let color_index = index_along(pos, bounds.start16(), bounds.stop16(), hue);
                let bar = FractionalBar::new(pos, width, color_index)
                    .with_max_brightness(ctx.brightness);
                ctx.draw_bar(bar);
            }
        }
        ctx.frame_delay
    }
}
