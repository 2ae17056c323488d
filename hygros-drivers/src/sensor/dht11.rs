//! DHT11 single-wire protocol decoder
//!
//! The DHT11 has no clock line: every bit is encoded in how long the
//! data line stays high, so the decoder self-times each phase against
//! the microsecond clock and bounds every wait with a timeout. One call
//! is exactly one acquisition attempt; there are no internal retries.
//!
//! Transaction shape:
//!
//! ```text
//! host:   ──┐        ┌──settle──
//!           └──18ms──┘
//! sensor:            ····┐    ┌────┐  ┌─bit─┐  ┌─bit─┐ ...
//!                        └80µs┘    └──┘     └──┘
//!                         ack   ack   sep  high  sep
//! ```
//!
//! After the ack pulse the sensor sends 40 bits, each a ~50 µs low
//! separator followed by a high pulse: short (~26 µs) for a 0, long
//! (~70 µs) for a 1. Bits arrive MSB-first.

use hygros_core::reading::{RawFrame, Reading};
use hygros_core::traits::{ClimateSensor, SensorError};
use hygros_hal::{DataLine, MicrosClock};

/// Protocol timing constants
///
/// These are properties of the sensor family, not tunables.
pub mod timing {
    /// Start signal: how long the host holds the line low
    pub const START_HOLD_US: u32 = 18_000;
    /// Settle after releasing the line, before listening
    pub const RELEASE_SETTLE_US: u32 = 30;
    /// Settle after switching the pin to input mode
    pub const INPUT_SETTLE_US: u32 = 10;
    /// Timeout for each edge of the ack handshake
    pub const HANDSHAKE_TIMEOUT_US: u32 = 100;
    /// Timeout for a data bit's rising edge (hard failure)
    pub const BIT_START_TIMEOUT_US: u32 = 70;
    /// Timeout for a data bit's falling edge (tolerated, see below)
    pub const BIT_HIGH_TIMEOUT_US: u32 = 120;
    /// High pulses longer than this decode as a 1 bit
    pub const BIT_ONE_THRESHOLD_US: u32 = 50;
}

/// Result of one bounded busy-wait for a line edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WaitOutcome {
    /// The level was not observed within the timeout
    TimedOut,
    /// The level was observed; payload is the clock timestamp
    EdgeObserved(u32),
}

/// DHT11 sensor bound to a data line and a microsecond clock
///
/// Holds no state between acquisitions beyond the bound hardware.
/// `&mut` ownership of the line guarantees one acquisition at a time.
pub struct Dht11<Line, Clock> {
    line: Line,
    clock: Clock,
}

impl<Line, Clock> Dht11<Line, Clock>
where
    Line: DataLine,
    Clock: MicrosClock,
{
    /// Bind a sensor to its line and clock
    pub fn new(line: Line, clock: Clock) -> Self {
        Self { line, clock }
    }

    /// Perform one acquisition and return the raw 5 byte frame.
    ///
    /// The line is returned to its idle (released, pulled-up) state on
    /// every path, including failures.
    pub fn read(&mut self) -> Result<RawFrame, SensorError> {
        self.send_start();
        let result = self
            .await_ack()
            .and_then(|()| self.read_frame());
        self.restore_idle();
        result
    }

    /// Perform one acquisition and validate the checksum.
    pub fn acquire_once(&mut self) -> Result<Reading, SensorError> {
        self.read()?.validate()
    }

    /// Busy-wait until the clock has advanced by `us` microseconds.
    fn pause_us(&mut self, us: u32) {
        let start = self.clock.now_us();
        while self.clock.elapsed_us(start) < us {}
    }

    /// Busy-wait for the line to reach `level`, bounded by `timeout_us`.
    ///
    /// A single named wait so the timeout policy of each protocol phase
    /// stays testable in isolation.
    fn wait_for_level(&mut self, level: bool, timeout_us: u32) -> WaitOutcome {
        let start = self.clock.now_us();
        loop {
            if self.line.sense() == level {
                return WaitOutcome::EdgeObserved(self.clock.now_us());
            }
            if self.clock.elapsed_us(start) > timeout_us {
                return WaitOutcome::TimedOut;
            }
        }
    }

    /// Drive the start condition: hold low 18 ms, release, settle.
    fn send_start(&mut self) {
        self.line.drive(false);
        self.pause_us(timing::START_HOLD_US);
        self.line.drive(true);
        self.pause_us(timing::RELEASE_SETTLE_US);
        // First sense() switches the pin to input mode; give the line
        // a moment under the pull-up before timing anything.
        let _ = self.line.sense();
        self.pause_us(timing::INPUT_SETTLE_US);
    }

    /// Wait out the sensor's ack pulse: low, high, then low again
    /// marking the start of data.
    fn await_ack(&mut self) -> Result<(), SensorError> {
        for level in [false, true, false] {
            match self.wait_for_level(level, timing::HANDSHAKE_TIMEOUT_US) {
                WaitOutcome::EdgeObserved(_) => {}
                WaitOutcome::TimedOut => return Err(SensorError::NoResponse),
            }
        }
        Ok(())
    }

    /// Sample the 40 data bits by pulse-width discrimination.
    fn read_frame(&mut self) -> Result<RawFrame, SensorError> {
        let mut data = [0u8; 5];

        for index in 0..RawFrame::BITS {
            // Rising edge ends the low separator. Missing it means the
            // sensor stopped talking mid-frame.
            let rise = match self.wait_for_level(true, timing::BIT_START_TIMEOUT_US) {
                WaitOutcome::EdgeObserved(timestamp) => timestamp,
                WaitOutcome::TimedOut => return Err(SensorError::BitTimeout),
            };

            // The falling-edge timeout is deliberately NOT a failure:
            // some sensors stretch the final high pulse past the
            // datasheet timing, so we stop waiting and classify
            // whatever duration elapsed.
            let pulse_us = match self.wait_for_level(false, timing::BIT_HIGH_TIMEOUT_US) {
                WaitOutcome::EdgeObserved(timestamp) => timestamp.wrapping_sub(rise),
                WaitOutcome::TimedOut => self.clock.elapsed_us(rise),
            };

            if pulse_us > timing::BIT_ONE_THRESHOLD_US {
                data[index / 8] |= 1 << (7 - (index % 8));
            }
        }

        Ok(RawFrame(data))
    }

    /// Return the line to its idle pulled-up state.
    fn restore_idle(&mut self) {
        self.line.drive(false);
        self.line.drive(true);
    }
}

impl<Line, Clock> ClimateSensor for Dht11<Line, Clock>
where
    Line: DataLine,
    Clock: MicrosClock,
{
    fn acquire(&mut self) -> Result<Reading, SensorError> {
        self.acquire_once()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use std::rc::Rc;
    use std::vec;
    use std::vec::Vec;

    /// Shared state of the simulated bus.
    ///
    /// Time advances by one microsecond per clock read, which makes
    /// every busy-wait in the decoder terminate deterministically and
    /// gives the simulated line ~1 µs sampling resolution.
    struct SimInner {
        now: u32,
        host_low: bool,
        released_at: Option<u32>,
        /// Sensor behavior after the host releases the line:
        /// (offset from release in µs, level from that offset on).
        schedule: Vec<(u32, bool)>,
    }

    impl SimInner {
        fn level(&self) -> bool {
            if self.host_low {
                return false;
            }
            let Some(released_at) = self.released_at else {
                return true;
            };
            let offset = self.now.wrapping_sub(released_at);
            let mut level = true;
            for &(at, value) in &self.schedule {
                if offset >= at {
                    level = value;
                } else {
                    break;
                }
            }
            level
        }
    }

    #[derive(Clone)]
    struct SimBus(Rc<RefCell<SimInner>>);

    impl SimBus {
        fn new(schedule: Vec<(u32, bool)>, start_at: u32) -> Self {
            Self(Rc::new(RefCell::new(SimInner {
                now: start_at,
                host_low: false,
                released_at: None,
                schedule,
            })))
        }

        fn now(&self) -> u32 {
            self.0.borrow().now
        }

        fn line(&self) -> SimLine {
            SimLine(self.clone())
        }

        fn clock(&self) -> SimClock {
            SimClock(self.clone())
        }
    }

    struct SimLine(SimBus);

    impl DataLine for SimLine {
        fn drive(&mut self, released: bool) {
            let mut inner = self.0 .0.borrow_mut();
            inner.host_low = !released;
            if released {
                let now = inner.now;
                inner.released_at = Some(now);
            }
        }

        fn sense(&mut self) -> bool {
            self.0 .0.borrow().level()
        }
    }

    struct SimClock(SimBus);

    impl MicrosClock for SimClock {
        fn now_us(&self) -> u32 {
            let mut inner = self.0 .0.borrow_mut();
            let now = inner.now;
            inner.now = now.wrapping_add(1);
            now
        }
    }

    /// Build the sensor's line schedule for one transaction:
    /// ack pulse, then 40 bits with the given high-pulse durations.
    fn transaction(bit_highs: &[u32]) -> Vec<(u32, bool)> {
        assert_eq!(bit_highs.len(), RawFrame::BITS);
        let mut schedule = vec![(0, true)];
        let mut t = 30; // sensor reacts ~30 µs after release
        schedule.push((t, false)); // ack low
        t += 80;
        schedule.push((t, true)); // ack high
        t += 80;
        for &high in bit_highs {
            schedule.push((t, false)); // bit separator
            t += 50;
            schedule.push((t, true)); // bit high pulse
            t += high;
        }
        schedule.push((t, false)); // trailing low before idle
        t += 50;
        schedule.push((t, true));
        schedule
    }

    const SHORT: u32 = 26;
    const LONG: u32 = 70;

    /// High-pulse durations encoding the given frame MSB-first.
    fn pulses_for(frame: [u8; 5]) -> Vec<u32> {
        let mut pulses = Vec::with_capacity(RawFrame::BITS);
        for byte in frame {
            for bit in (0..8).rev() {
                pulses.push(if byte & (1 << bit) != 0 { LONG } else { SHORT });
            }
        }
        pulses
    }

    fn read_with(schedule: Vec<(u32, bool)>, start_at: u32) -> Result<RawFrame, SensorError> {
        let bus = SimBus::new(schedule, start_at);
        let mut dht = Dht11::new(bus.line(), bus.clock());
        dht.read()
    }

    #[test]
    fn decodes_a_known_frame() {
        let frame = [55, 0, 22, 0, 77];
        let result = read_with(transaction(&pulses_for(frame)), 0).unwrap();
        assert_eq!(result, RawFrame(frame));
        assert!(result.is_valid());
    }

    #[test]
    fn short_then_long_bits_decode_to_00_ff() {
        // Bits 0-7 short, 8-15 long, checksum constructed consistently
        let frame = [0x00, 0xFF, 0x00, 0x00, 0xFF];
        let result = read_with(transaction(&pulses_for(frame)), 0).unwrap();
        assert_eq!(result.0[0], 0x00);
        assert_eq!(result.0[1], 0xFF);

        let reading = result.validate().unwrap();
        assert_eq!(reading.humidity, 0.0);
    }

    #[test]
    fn decoding_is_deterministic_across_clock_wraparound() {
        let frame = [0xA5, 0, 0x3C, 0, 0xE1];
        let pulses = pulses_for(frame);

        let at_zero = read_with(transaction(&pulses), 0).unwrap();
        // Wraps during the 18 ms start hold
        let wrap_in_start = read_with(transaction(&pulses), u32::MAX - 10_000).unwrap();
        // Wraps mid bit-loop
        let wrap_in_bits = read_with(transaction(&pulses), u32::MAX - 20_000).unwrap();

        assert_eq!(at_zero, RawFrame(frame));
        assert_eq!(wrap_in_start, at_zero);
        assert_eq!(wrap_in_bits, at_zero);
    }

    #[test]
    fn silent_line_times_out_as_no_response() {
        // Sensor never pulls the line low
        let bus = SimBus::new(vec![(0, true)], 0);
        let mut dht = Dht11::new(bus.line(), bus.clock());

        let before = bus.now();
        let result = dht.read();
        let elapsed = bus.now().wrapping_sub(before);

        assert_eq!(result, Err(SensorError::NoResponse));
        // Start signal plus settle plus one 100 µs handshake timeout,
        // with a small measurement tolerance - must not block longer.
        let budget = timing::START_HOLD_US
            + timing::RELEASE_SETTLE_US
            + timing::INPUT_SETTLE_US
            + timing::HANDSHAKE_TIMEOUT_US;
        assert!(elapsed <= budget + 50, "blocked for {} µs", elapsed);
    }

    #[test]
    fn sensor_stopping_mid_frame_is_a_bit_timeout() {
        // Ack completes, then only 5 bits arrive before the line goes
        // quiet (idle high would mean no rising edge... stuck low here).
        let mut schedule = vec![(0, true)];
        let mut t = 30;
        schedule.push((t, false));
        t += 80;
        schedule.push((t, true));
        t += 80;
        for _ in 0..5 {
            schedule.push((t, false));
            t += 50;
            schedule.push((t, true));
            t += SHORT;
        }
        schedule.push((t, false)); // stuck low from here on

        assert_eq!(read_with(schedule, 0), Err(SensorError::BitTimeout));
    }

    #[test]
    fn long_final_pulse_reads_as_one() {
        // Final bit's high pulse stretches past the 120 µs falling-edge
        // timeout. The decoder breaks out of the wait instead of
        // failing and classifies the bit as a 1.
        let mut pulses = pulses_for([0, 0, 0, 0, 1]);
        pulses[39] = 200;
        let result = read_with(transaction(&pulses), 0).unwrap();
        assert_eq!(result.0[4] & 0x01, 0x01);
    }

    #[test]
    fn checksum_failure_reported_after_full_frame() {
        let frame = [55, 0, 22, 0, 99]; // wrong checksum
        let bus = SimBus::new(transaction(&pulses_for(frame)), 0);
        let mut dht = Dht11::new(bus.line(), bus.clock());

        assert_eq!(dht.acquire_once(), Err(SensorError::ChecksumMismatch));
        // Line handed back to idle despite the failure
        assert!(bus.line().sense());
    }

    #[test]
    fn line_restored_after_success() {
        let frame = [40, 0, 19, 0, 59];
        let bus = SimBus::new(transaction(&pulses_for(frame)), 0);
        let mut dht = Dht11::new(bus.line(), bus.clock());

        let reading = dht.acquire_once().unwrap();
        assert_eq!(reading.humidity, 40.0);
        assert_eq!(reading.temperature, 19.0);
        assert!(bus.line().sense());
    }

    #[test]
    fn wait_for_level_reports_edge_timestamp() {
        let bus = SimBus::new(vec![(0, true), (40, false)], 0);
        let mut dht = Dht11::new(bus.line(), bus.clock());
        dht.line.drive(true);

        match dht.wait_for_level(false, 100) {
            WaitOutcome::EdgeObserved(at) => assert!((40..=45).contains(&at)),
            WaitOutcome::TimedOut => panic!("expected an edge"),
        }
    }

    #[test]
    fn wait_for_level_times_out_within_budget() {
        let bus = SimBus::new(vec![(0, true)], 0);
        let mut dht = Dht11::new(bus.line(), bus.clock());
        dht.line.drive(true);

        let before = bus.now();
        assert_eq!(dht.wait_for_level(false, 100), WaitOutcome::TimedOut);
        let elapsed = bus.now().wrapping_sub(before);
        assert!((100..=110).contains(&elapsed), "waited {} µs", elapsed);
    }
}
