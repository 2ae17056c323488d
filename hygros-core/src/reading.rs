//! Raw sensor frames, validated readings, and the reading cache
//!
//! The DHT11 family transmits a fixed 5 byte frame. The first four
//! bytes carry the measurement, the fifth is a modulo-256 checksum over
//! the first four. Validation is a pure function with no hardware
//! access; a frame that fails validation is discarded entirely.

use crate::traits::SensorError;

/// Raw 5 byte frame as received from the sensor
///
/// Layout:
/// - `[0]` humidity integer part
/// - `[1]` humidity fractional part (always 0 on this sensor family)
/// - `[2]` temperature integer part
/// - `[3]` temperature fractional part (always 0)
/// - `[4]` checksum
///
/// The fractional bytes never carry a value on the DHT11, but they are
/// still part of the checksum sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawFrame(pub [u8; 5]);

impl RawFrame {
    /// Number of data bits in a frame
    pub const BITS: usize = 40;

    /// Checksum over the four data bytes, modulo 256
    pub fn checksum(&self) -> u8 {
        self.0[0]
            .wrapping_add(self.0[1])
            .wrapping_add(self.0[2])
            .wrapping_add(self.0[3])
    }

    /// Check the received checksum byte against the computed one
    pub fn is_valid(&self) -> bool {
        self.0[4] == self.checksum()
    }

    /// Validate the frame and convert it into a [`Reading`]
    ///
    /// On mismatch the whole frame is rejected; no partial reading is
    /// ever produced.
    pub fn validate(self) -> Result<Reading, SensorError> {
        if !self.is_valid() {
            return Err(SensorError::ChecksumMismatch);
        }
        Ok(Reading {
            humidity: self.0[0] as f32,
            temperature: self.0[2] as f32,
        })
    }
}

/// A validated temperature/humidity pair
///
/// Values are in whole degrees Celsius and whole percent relative
/// humidity - the DHT11 reports integer resolution only. Immutable once
/// produced; only a later successful decode replaces it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Relative humidity in percent
    pub humidity: f32,
    /// Temperature in degrees Celsius
    pub temperature: f32,
}

impl Reading {
    /// Sentinel used before the first successful decode.
    ///
    /// This is "no data yet", not a measurement; the display layer
    /// checks [`ReadingCache::reading`] instead of showing it.
    pub const EMPTY: Reading = Reading {
        humidity: 0.0,
        temperature: 0.0,
    };
}

/// Cache of the last successful reading
///
/// Owned by the calling layer and written at most once per successful
/// decode. Failed acquisitions record their failure kind for display
/// but never touch the cached values.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReadingCache {
    reading: Reading,
    has_data: bool,
    last_failure: Option<SensorError>,
}

impl Default for ReadingCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingCache {
    /// Create an empty cache ("no data yet")
    pub const fn new() -> Self {
        Self {
            reading: Reading::EMPTY,
            has_data: false,
            last_failure: None,
        }
    }

    /// Replace the cached reading with a new validated one
    pub fn update(&mut self, reading: Reading) {
        self.reading = reading;
        self.has_data = true;
        self.last_failure = None;
    }

    /// Record a failed acquisition, leaving the cached reading intact
    pub fn record_failure(&mut self, error: SensorError) {
        self.last_failure = Some(error);
    }

    /// The last good reading, or `None` before the first decode
    pub fn reading(&self) -> Option<&Reading> {
        if self.has_data {
            Some(&self.reading)
        } else {
            None
        }
    }

    /// The failure kind of the most recent attempt, if it failed
    pub fn last_failure(&self) -> Option<SensorError> {
        self.last_failure
    }

    /// Feed the outcome of one acquisition attempt into the cache
    pub fn apply(&mut self, outcome: Result<Reading, SensorError>) {
        match outcome {
            Ok(reading) => self.update(reading),
            Err(error) => self.record_failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_good_frame() {
        let frame = RawFrame([55, 0, 22, 0, 77]);
        let reading = frame.validate().unwrap();
        assert_eq!(reading.humidity, 55.0);
        assert_eq!(reading.temperature, 22.0);
    }

    #[test]
    fn test_validate_rejects_bad_checksum() {
        let frame = RawFrame([55, 0, 22, 0, 78]);
        assert_eq!(frame.validate(), Err(SensorError::ChecksumMismatch));
    }

    #[test]
    fn test_checksum_wraps_past_256() {
        // 200 + 0 + 56 + 0 = 256 -> checksum byte 0
        let frame = RawFrame([200, 0, 56, 0, 0]);
        assert!(frame.is_valid());
    }

    #[test]
    fn test_fractional_bytes_count_toward_checksum() {
        // A corrupted fractional byte must invalidate the frame even
        // though it doesn't contribute to the reading value.
        let frame = RawFrame([55, 1, 22, 0, 77]);
        assert!(!frame.is_valid());
    }

    #[test]
    fn test_cache_update_and_failure() {
        let mut cache = ReadingCache::new();
        assert!(cache.reading().is_none());

        cache.update(Reading {
            humidity: 55.0,
            temperature: 22.0,
        });
        assert_eq!(cache.reading().unwrap().temperature, 22.0);
        assert!(cache.last_failure().is_none());

        // A failure records its kind but leaves the values alone
        cache.record_failure(SensorError::ChecksumMismatch);
        let kept = cache.reading().unwrap();
        assert_eq!(kept.temperature, 22.0);
        assert_eq!(kept.humidity, 55.0);
        assert_eq!(cache.last_failure(), Some(SensorError::ChecksumMismatch));

        // The next good reading clears the failure
        cache.apply(Ok(Reading {
            humidity: 60.0,
            temperature: 23.0,
        }));
        assert!(cache.last_failure().is_none());
        assert_eq!(cache.reading().unwrap().humidity, 60.0);
    }

    proptest! {
        /// validate succeeds iff byte 4 equals the wrapping sum of
        /// bytes 0..4, for arbitrary frames including overflow.
        #[test]
        fn prop_checksum(b0: u8, b1: u8, b2: u8, b3: u8, b4: u8) {
            let frame = RawFrame([b0, b1, b2, b3, b4]);
            let expected = b0.wrapping_add(b1).wrapping_add(b2).wrapping_add(b3);
            prop_assert_eq!(frame.is_valid(), b4 == expected);
            prop_assert_eq!(frame.validate().is_ok(), b4 == expected);
        }

        /// A validated reading always reflects bytes 0 and 2 exactly.
        #[test]
        fn prop_reading_from_frame(b0: u8, b2: u8) {
            let sum = b0.wrapping_add(b2);
            let frame = RawFrame([b0, 0, b2, 0, sum]);
            let reading = frame.validate().unwrap();
            prop_assert_eq!(reading.humidity, b0 as f32);
            prop_assert_eq!(reading.temperature, b2 as f32);
        }
    }
}
