//! Pseudo-random source used by effects.

/// Minimum hue distance on the 8-bit wheel for [`random_wheel_index`]
pub const MIN_WHEEL_DISTANCE: u8 = 42;

const WHEEL_ATTEMPTS: u8 = 16;

/// Source of pseudo-random numbers
///
/// Only `random8` and `random16` are required. The bounded helpers scale
/// the raw value instead of rejecting, so they never loop.
pub trait RandomSource {
    fn random8(&mut self) -> u8;

    fn random16(&mut self) -> u16;

    /// Value in `0..lim`
    fn random8_lim(&mut self, lim: u8) -> u8 {
        ((u16::from(self.random8()) * u16::from(lim)) >> 8) as u8
    }

    /// Value in `min..max`, computed with wrapping 8-bit arithmetic
    fn random8_range(&mut self, min: u8, max: u8) -> u8 {
        min.wrapping_add(self.random8_lim(max.wrapping_sub(min)))
    }

    /// Value in `0..lim`
    fn random16_lim(&mut self, lim: u16) -> u16 {
        ((u32::from(self.random16()) * u32::from(lim)) >> 16) as u16
    }

    /// Value in `min..max`; an empty range yields `min`
    fn random16_range(&mut self, min: u16, max: u16) -> u16 {
        if max <= min {
            return min;
        }
        min + self.random16_lim(max - min)
    }
}

/// Seeded generator backed by `fastrand`
#[derive(Debug, Clone)]
pub struct Random {
    rng: fastrand::Rng,
}

impl Random {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl RandomSource for Random {
    fn random8(&mut self) -> u8 {
        self.rng.u8(..)
    }

    fn random16(&mut self) -> u16 {
        self.rng.u16(..)
    }
}

/// Shortest distance between two hues on the 8-bit color wheel
pub const fn wheel_distance(a: u8, b: u8) -> u8 {
    let direct = a.abs_diff(b);
    let around = 255 - direct;
    if direct < around { direct } else { around }
}

/// Pick a random hue at least [`MIN_WHEEL_DISTANCE`] away from `pos`
///
/// Gives up after a bounded number of draws and returns the opposite hue.
pub fn random_wheel_index<R: RandomSource + ?Sized>(rng: &mut R, pos: u8) -> u8 {
    for _ in 0..WHEEL_ATTEMPTS {
        let candidate = rng.random8();
        if wheel_distance(pos, candidate) >= MIN_WHEEL_DISTANCE {
            return candidate;
        }
    }
    pos.wrapping_add(128)
}
