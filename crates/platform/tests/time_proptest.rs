//! Property-based tests for the wrapping millisecond time base.
//! Deadlines must behave the same wherever they sit relative to the wrap.
// period >= 1 in every generated case.
#![allow(clippy::arithmetic_side_effects)]

use platform::indicator::BlinkRate;
use platform::{Command, Instant};

proptest::proptest! {
    /// Moving forward `d` ms always reads back as exactly `d` elapsed.
    #[test]
    fn elapsed_inverts_add(start in 0u32..=u32::MAX, d in 0u32..=u32::MAX) {
        let t0 = Instant::from_millis(start);
        assert_eq!(t0.wrapping_add_ms(d).elapsed_since(t0), d);
    }

    /// A deadline expires exactly at `period` ms, across the wrap too.
    #[test]
    fn time_up_exactly_at_period(start in 0u32..=u32::MAX, period in 1u32..=100_000u32) {
        let t0 = Instant::from_millis(start);
        assert!(!t0.wrapping_add_ms(period - 1).is_time_up(t0, period));
        assert!(t0.wrapping_add_ms(period).is_time_up(t0, period));
    }

    /// A zero period is always up.
    #[test]
    fn zero_period_is_always_up(start in 0u32..=u32::MAX, now in 0u32..=u32::MAX) {
        assert!(Instant::from_millis(now).is_time_up(Instant::from_millis(start), 0));
    }
}

#[test]
fn blink_half_periods_are_nonzero() {
    for rate in [BlinkRate::Hz1, BlinkRate::Hz2, BlinkRate::Hz4, BlinkRate::Hz8] {
        assert!(rate.half_period_ms() > 0);
    }
}

#[test]
fn command_table_covers_every_command() {
    assert_eq!(Command::COUNT, 3);
    let names: Vec<&str> = Command::ALL.iter().map(|c| c.name()).collect();
    assert_eq!(names, ["play/pause", "previous", "next"]);
}
