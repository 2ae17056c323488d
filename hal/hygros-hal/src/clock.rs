//! Microsecond clock abstraction
//!
//! The sensor protocol is decoded by measuring pulse widths in the
//! tens-of-microseconds range, so implementations need ≤ 1 µs
//! resolution. The counter is free-running from process start and is
//! never reset.

/// Free-running monotonic microsecond counter
///
/// The counter wraps at `u32::MAX` (about 71 minutes at 1 MHz).
/// Consumers must use [`MicrosClock::elapsed_us`] rather than comparing
/// timestamps directly so a single wraparound is handled correctly.
pub trait MicrosClock {
    /// Current counter value in microseconds.
    fn now_us(&self) -> u32;

    /// Microseconds elapsed since `start`.
    ///
    /// Computed with wrapping subtraction, so it stays correct across
    /// one counter wraparound.
    fn elapsed_us(&self, start: u32) -> u32 {
        self.now_us().wrapping_sub(start)
    }
}

impl<T: MicrosClock> MicrosClock for &T {
    fn now_us(&self) -> u32 {
        (**self).now_us()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClock(u32);

    impl MicrosClock for FixedClock {
        fn now_us(&self) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_elapsed_simple() {
        let clock = FixedClock(1_500);
        assert_eq!(clock.elapsed_us(1_000), 500);
    }

    #[test]
    fn test_elapsed_across_wraparound() {
        // Counter wrapped: started near the top, now just past zero
        let clock = FixedClock(40);
        assert_eq!(clock.elapsed_us(u32::MAX - 60), 101);
    }
}
