//! Millisecond clock and wrap-safe deadline arithmetic.
//!
//! Engine time is a `u32` millisecond counter that is allowed to wrap
//! (about every 49.7 days). Deadlines are never compared with `>`; a
//! deadline has been reached when the signed distance `now - deadline`
//! is non-negative, which stays correct across rollover as long as no
//! deadline is scheduled more than `i32::MAX` ms ahead.

use embassy_time::{Duration, Instant};

/// Monotonic millisecond time source
pub trait Clock {
    /// Current time in milliseconds. Wraps at `u32::MAX`.
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Clock backed by the `embassy-time` driver
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}

/// Returns `true` once `now` is at or past `deadline`
#[inline]
#[allow(clippy::cast_possible_wrap)]
pub const fn deadline_reached(now: u32, deadline: u32) -> bool {
    (now.wrapping_sub(deadline) as i32) >= 0
}

/// Convert a duration to engine milliseconds, saturating at `u32::MAX`
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn duration_ms(duration: Duration) -> u32 {
    let ms = duration.as_millis();
    if ms > u32::MAX as u64 { u32::MAX } else { ms as u32 }
}
