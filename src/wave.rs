//! Fixed-point wave and easing primitives.
//!
//! Every function here is pure. Phases are unsigned and wrap, so a full
//! 16-bit (or 8-bit) turn is exactly one period. Time arithmetic is
//! modular `u32`, which keeps the phase accumulators correct across clock
//! rollover.

use crate::math8::{blend8, ease_in_out_cubic, ease_in_out_quad};

const SIN16_BASE: [u16; 8] = [0, 6393, 12539, 18204, 23170, 27245, 30273, 32137];
const SIN16_SLOPE: [u8; 8] = [49, 48, 44, 38, 31, 23, 14, 4];
const SIN8_INTERLEAVE: [u8; 8] = [0, 49, 49, 41, 90, 27, 117, 10];

/// Scale a 16-bit value by a 16-bit factor, keeping the upper 16 bits
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale16(value: u16, scale: u16) -> u16 {
    ((value as u32 * (1 + scale as u32)) >> 16) as u16
}

/// Symmetric triangle wave over the full 16-bit phase
///
/// Rises linearly on `[0, 0x7FFF]` and falls on `[0x8000, 0xFFFF]`.
#[inline]
pub const fn triwave16(phase: u16) -> u16 {
    let folded = if phase & 0x8000 != 0 { 0xFFFF - phase } else { phase };
    folded << 1
}

/// Quadratic ease in/out over the 16-bit range
pub const fn ease16_in_out_quad(i: u16) -> u16 {
    let j = if i & 0x8000 != 0 { 0xFFFF - i } else { i };
    let jj2 = scale16(j, j) << 1;
    if i & 0x8000 != 0 { 0xFFFF - jj2 } else { jj2 }
}

/// Cubic ease in/out over the 16-bit range, `3x^2 - 2x^3`
///
/// Evaluated in one wide intermediate with rounding so the curve never
/// steps backwards. The result clamps to `u16::MAX`.
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn ease16_in_out_cubic(i: u16) -> u16 {
    const FULL: u64 = u16::MAX as u64;
    let x = i as u64;
    let numerator = 3 * x * x * FULL - 2 * x * x * x;
    let denominator = FULL * FULL;
    let r = (numerator + denominator / 2) / denominator;
    if r > 0xFFFF { 0xFFFF } else { r as u16 }
}

/// Triangle wave shaped by quadratic easing
#[inline]
pub const fn quadwave16(phase: u16) -> u16 {
    ease16_in_out_quad(triwave16(phase))
}

/// Triangle wave shaped by cubic easing
#[inline]
pub const fn cubicwave16(phase: u16) -> u16 {
    ease16_in_out_cubic(triwave16(phase))
}

/// Piecewise-linear sine approximation, `-32645..=32645`
#[allow(clippy::cast_possible_wrap)]
pub const fn sin16(theta: u16) -> i16 {
    let mut offset = (theta & 0x3FFF) >> 3;
    if theta & 0x4000 != 0 {
        offset = 2047 - offset;
    }
    let section = (offset / 256) as usize;
    let base = SIN16_BASE[section];
    let slope = SIN16_SLOPE[section] as u16;
    let secoffset = ((offset as u8) / 2) as u16;

    let y = (slope * secoffset + base) as i16;
    if theta & 0x8000 != 0 { -y } else { y }
}

/// Piecewise-linear sine approximation scaled to `0..=255`
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub const fn sin8(theta: u8) -> u8 {
    let mut offset = theta;
    if theta & 0x40 != 0 {
        offset = 255 - offset;
    }
    offset &= 0x3F;

    let mut secoffset = offset & 0x0F;
    if theta & 0x40 != 0 {
        secoffset += 1;
    }

    let section = (offset >> 4) as usize * 2;
    let base = SIN8_INTERLEAVE[section];
    let slope = SIN8_INTERLEAVE[section + 1];
    let mx = ((slope as u16 * secoffset as u16) >> 4) as u8;

    let mut y = mx.wrapping_add(base) as i8;
    if theta & 0x80 != 0 {
        y = y.wrapping_neg();
    }
    (y as u8).wrapping_add(128)
}

/// Cosine companion of [`sin8`]
#[inline]
pub const fn cos8(theta: u8) -> u8 {
    sin8(theta.wrapping_add(64))
}

/// 8-bit triangle wave
#[inline]
pub const fn triwave8(phase: u8) -> u8 {
    let folded = if phase & 0x80 != 0 { 255 - phase } else { phase };
    folded << 1
}

#[inline]
pub const fn quadwave8(phase: u8) -> u8 {
    ease_in_out_quad(triwave8(phase))
}

#[inline]
pub const fn cubicwave8(phase: u8) -> u8 {
    ease_in_out_cubic(triwave8(phase))
}

/// Phase accumulator driven by a `beat88` speed
///
/// `bpm88` is beats per minute in Q8.8. The result advances one full
/// 16-bit turn per beat, measured from `timebase`.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn beat88(bpm88: u16, now: u32, timebase: u32) -> u16 {
    (now.wrapping_sub(timebase)
        .wrapping_mul(bpm88 as u32)
        .wrapping_mul(280)
        >> 16) as u16
}

/// Sine oscillation between `lowest` and `highest` at a `beat88` rate
///
/// An inverted range collapses onto `lowest`.
#[allow(clippy::cast_sign_loss, clippy::cast_lossless)]
pub const fn beatsin88(bpm88: u16, lowest: u16, highest: u16, now: u32, timebase: u32) -> u16 {
    let beat = beat88(bpm88, now, timebase);
    let beatsin = (sin16(beat) as i32 + 32768) as u16;
    let range = highest.saturating_sub(lowest);
    lowest + scale16(beatsin, range)
}

/// Pseudo-random byte attached to a noise lattice point
#[allow(clippy::cast_lossless)]
const fn lattice8(x: u8, y: u8) -> u8 {
    let mut h = (x as u32).wrapping_mul(0x9E37_79B1) ^ (y as u32).wrapping_mul(0x85EB_CA77);
    h ^= h >> 15;
    h = h.wrapping_mul(0x2C1B_3C6D);
    h ^= h >> 12;
    (h >> 24) as u8
}

/// Smooth 2D value noise
///
/// Coordinates are in 1/256 of a lattice cell, so moving `y` by a few
/// units per frame gives a slow continuous drift. The result stays
/// between the values of the four surrounding lattice points.
#[allow(clippy::cast_possible_truncation)]
pub const fn inoise8(x: u16, y: u16) -> u8 {
    let (cell_x, cell_y) = ((x >> 8) as u8, (y >> 8) as u8);
    let fx = ease_in_out_quad(x as u8);
    let fy = ease_in_out_quad(y as u8);
    let next_x = cell_x.wrapping_add(1);
    let next_y = cell_y.wrapping_add(1);
    let top = blend8(lattice8(cell_x, cell_y), lattice8(next_x, cell_y), fx);
    let bottom = blend8(lattice8(cell_x, next_y), lattice8(next_x, next_y), fx);
    blend8(top, bottom, fy)
}
