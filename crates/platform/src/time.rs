//! Millisecond time base shared by every task.
//!
//! The board's SysTick increments a free-running 32-bit millisecond counter.
//! It wraps after ~49.7 days; every comparison here uses wrapping
//! subtraction so a deadline that straddles the wrap still expires on time.

/// A point on the 1 ms system clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Instant(u32);

impl Instant {
    /// Clock value at reset.
    pub const ZERO: Self = Self(0);

    /// Build an instant from a raw millisecond counter value.
    #[must_use]
    pub const fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    /// Raw millisecond counter value.
    #[must_use]
    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Milliseconds from `earlier` to `self`, modulo 2^32.
    #[must_use]
    pub const fn elapsed_since(self, earlier: Self) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// `true` once at least `period_ms` have passed since `start`.
    #[must_use]
    pub const fn is_time_up(self, start: Self, period_ms: u32) -> bool {
        self.elapsed_since(start) >= period_ms
    }

    /// This instant moved `ms` forward, wrapping at 2^32.
    #[must_use]
    pub const fn wrapping_add_ms(self, ms: u32) -> Self {
        Self(self.0.wrapping_add(ms))
    }
}
