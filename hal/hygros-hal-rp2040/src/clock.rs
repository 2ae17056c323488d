//! Microsecond clock over the embassy time driver
//!
//! The RP2040 TIMER peripheral runs at 1 MHz, so the embassy instant
//! is already a microsecond count; truncating to u32 gives the
//! wrapping counter the decoder expects.

use hygros_hal::MicrosClock;

/// Free-running microsecond clock
///
/// Zero-sized; the underlying counter is the chip's TIMER, started by
/// `embassy_rp::init` and never reset.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerClock;

impl TimerClock {
    pub const fn new() -> Self {
        Self
    }
}

impl MicrosClock for TimerClock {
    fn now_us(&self) -> u32 {
        embassy_time::Instant::now().as_micros() as u32
    }
}
