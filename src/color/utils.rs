use crate::{
    color::{BLACK, Rgb},
    math8::{blend8, scale8, scale8_video},
};

/// Mirror the first half of the array around the center
pub fn mirror_half(leds: &mut [Rgb]) {
    if leds.is_empty() {
        return;
    }
    let leds_len = leds.len();
    let mut center = leds_len / 2;
    if !leds_len.is_multiple_of(2) {
        center += 1;
    }
    center = center.min(leds_len);
    for i in 0..center {
        let mirrored = leds_len - 1 - i;
        leds[mirrored] = leds[i];
    }
}

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Move every pixel of `existing` toward `overlay` by `amount_of_overlay`
///
/// `255` copies the overlay, `0` leaves `existing` untouched. Extra
/// elements of the longer slice are ignored.
pub fn nblend(existing: &mut [Rgb], overlay: &[Rgb], amount_of_overlay: u8) {
    match amount_of_overlay {
        0 => {}
        255 => {
            let len = existing.len().min(overlay.len());
            existing[..len].copy_from_slice(&overlay[..len]);
        }
        amount => {
            for (dst, src) in existing.iter_mut().zip(overlay) {
                *dst = blend_colors(*dst, *src, amount);
            }
        }
    }
}

/// Scale every channel by `scale` (255 keeps the color)
#[inline]
pub const fn scale_color(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
    }
}

/// Scale a color without letting lit channels drop to zero
#[inline]
pub const fn nscale8_video(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale8_video(color.r, scale),
        g: scale8_video(color.g, scale),
        b: scale8_video(color.b, scale),
    }
}

/// Dim every pixel by `amount` (255 turns it black)
pub fn fade_to_black_by(leds: &mut [Rgb], amount: u8) {
    if amount == 0 {
        return;
    }
    let keep = 255 - amount;
    for led in leds {
        *led = scale_color(*led, keep);
    }
}

/// Channel-wise saturating sum
#[inline]
pub const fn add_colors(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.saturating_add(b.r),
        g: a.g.saturating_add(b.g),
        b: a.b.saturating_add(b.b),
    }
}

/// Channel-wise saturating difference
#[inline]
pub const fn sub_colors(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.saturating_sub(b.r),
        g: a.g.saturating_sub(b.g),
        b: a.b.saturating_sub(b.b),
    }
}

#[inline]
pub const fn is_lit(color: Rgb) -> bool {
    color.r != 0 || color.g != 0 || color.b != 0
}

/// Approximate perceived light level, the mean of the three channels
#[inline]
pub const fn average_light(color: Rgb) -> u8 {
    scale8(color.r, 85) + scale8(color.g, 85) + scale8(color.b, 85)
}

/// One-dimensional blur
///
/// Each pixel keeps `255 - amount` of itself and leaks half of `amount`
/// into each neighbour.
pub fn blur1d(leds: &mut [Rgb], amount: u8) {
    let keep = 255 - amount;
    let seep = amount >> 1;
    let mut carry = BLACK;
    for i in 0..leds.len() {
        let part = scale_color(leds[i], seep);
        let cur = add_colors(scale_color(leds[i], keep), carry);
        if i > 0 {
            leds[i - 1] = add_colors(leds[i - 1], part);
        }
        leds[i] = cur;
        carry = part;
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
