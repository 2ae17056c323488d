//! Sensor acquisition task
//!
//! Runs one acquisition per interval on the probe line the settings
//! select, and publishes every outcome (good or failed) so the
//! controller can update the cache. The single-wire transaction is a
//! blocking busy-wait of at most ~25 ms; that is acceptable on this
//! executor because nothing else is latency-sensitive.
//!
//! Acquisitions are paced against an absolute deadline. A command
//! identical to the current one never disturbs the deadline: the DHT11
//! needs at least a second between reads, so only a real change (pin,
//! interval, enable/disable) may cut an interval short.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Instant, Timer};

use hygros_core::sampling::SensorCommand;
use hygros_drivers::sensor::Dht11;
use hygros_hal_rp2040::{ProbeBank, TimerClock};

use crate::channels::{SENSOR_CMD, SENSOR_RESULT};

#[embassy_executor::task]
pub async fn sensor_task(mut bank: ProbeBank<'static>, clock: TimerClock) {
    info!("Sensor task started");

    // Nothing to do until the controller enables sampling
    let mut command: SensorCommand = SENSOR_CMD.wait().await;
    let mut deadline = Instant::now();

    loop {
        if !command.enabled {
            command = SENSOR_CMD.wait().await;
            deadline = Instant::now();
            continue;
        }

        // Wait out the current deadline, absorbing command updates
        loop {
            match select(Timer::at(deadline), SENSOR_CMD.wait()).await {
                Either::First(()) => break,
                Either::Second(updated) if updated != command => {
                    command = updated;
                    deadline = Instant::now();
                }
                // Unchanged command: keep waiting out the interval
                Either::Second(_) => {}
            }
        }
        if !command.enabled {
            continue;
        }

        let result = Dht11::new(bank.line_mut(command.pin), clock).acquire_once();
        match &result {
            Ok(reading) => debug!(
                "Acquired: {}% RH, {} C",
                reading.humidity, reading.temperature
            ),
            Err(e) => warn!("Acquisition failed: {}", e),
        }
        SENSOR_RESULT.signal(result);

        deadline = Instant::now() + Duration::from_millis(command.interval_ms as u64);
    }
}
