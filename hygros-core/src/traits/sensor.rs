//! Climate sensor trait

use crate::reading::Reading;

/// Errors that can occur while acquiring a reading
///
/// All variants are recoverable: the caller keeps the previous cached
/// reading and tries again on the next scheduled interval. Nothing here
/// is fatal to the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor did not answer the start handshake within the timeout.
    /// Usually a disconnected sensor or the wrong probe pin.
    NoResponse,
    /// A data bit's rising edge never arrived mid-frame. Usually
    /// electrical noise or a disconnect during transfer.
    BitTimeout,
    /// A complete frame arrived but its checksum byte does not match.
    /// Usually noise corrupting the bit sampling.
    ChecksumMismatch,
}

impl SensorError {
    /// Short status tag for the live screen
    pub fn label(&self) -> &'static str {
        match self {
            SensorError::NoResponse => "no response",
            SensorError::BitTimeout => "bit timeout",
            SensorError::ChecksumMismatch => "bad checksum",
        }
    }
}

/// Trait for temperature/humidity sensors
///
/// Implementations perform exactly one acquisition attempt per call and
/// never retry internally; retry policy belongs to the caller.
pub trait ClimateSensor {
    /// Acquire one validated reading from the sensor.
    ///
    /// Takes `&mut self` because the acquisition drives the bus pin.
    fn acquire(&mut self) -> Result<Reading, SensorError>;
}
