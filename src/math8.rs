//! 8-bit fixed-point helpers.
//!
//! All values treat `0..=255` as `0.0..=1.0`.

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale that never dims a non-zero value down to zero
///
/// Used where a faint pixel must stay visibly lit.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8_video(value: u8, scale: u8) -> u8 {
    let scaled = ((value as u16 * scale as u16) >> 8) as u8;
    if value != 0 && scale != 0 {
        scaled + 1
    } else {
        scaled
    }
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16;
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    );
    partial = partial.wrapping_add(0x8000);

    (partial >> 16) as u8
}

/// Map `value` into the `[start, end]` range
#[inline]
pub const fn map8(value: u8, start: u8, end: u8) -> u8 {
    start.wrapping_add(scale8(value, end.wrapping_sub(start)))
}

/// Linear re-mapping of `value` from one range onto another
///
/// A degenerate input range maps everything onto `out_min`.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn map_range(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    if in_max == in_min {
        return out_min;
    }
    let scaled = (value - in_min) as i64 * (out_max - out_min) as i64 / (in_max - in_min) as i64;
    scaled as i32 + out_min
}

/// Ease in out quadratic
pub const fn ease_in_out_quad(i: u8) -> u8 {
    let j = if i & 0x80 != 0 { 255 - i } else { i };
    let jj = scale8(j, j);
    let jj2 = jj << 1;
    if i & 0x80 == 0 { jj2 } else { 255 - jj2 }
}

/// Ease in out cubic, `3x^2 - 2x^3`
#[allow(clippy::cast_lossless)]
pub const fn ease_in_out_cubic(i: u8) -> u8 {
    let ii = scale8(i, i) as u16;
    let iii = scale8(ii as u8, i) as u16;
    let r = 3 * ii - 2 * iii;
    if r > 0xFF { 0xFF } else { r as u8 }
}

/// Fast attack, slow decay envelope over one 8-bit period
pub const fn attack_decay_wave8(i: u8) -> u8 {
    if i < 86 {
        i * 3
    } else {
        let i = i - 86;
        255 - (i + (i / 2))
    }
}
