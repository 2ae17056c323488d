//! User settings
//!
//! The persisted record is deliberately tiny: probe pin, display unit,
//! and read interval. It is stored in flash as a postcard-serialized
//! blob and clamped on load so a corrupt or out-of-range record can
//! never select hardware that does not exist.

use crate::units::Unit;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of selectable probe pins
pub const PIN_COUNT: u8 = 3;

/// Number of selectable read intervals
pub const INTERVAL_COUNT: u8 = 3;

/// Read interval table, indexed by `Settings::interval_index`
pub const INTERVAL_MS: [u32; INTERVAL_COUNT as usize] = [1_000, 60_000, 300_000];

/// Interval labels for the config screen
pub const INTERVAL_LABELS: [&str; INTERVAL_COUNT as usize] = ["1 sec", "1 min", "5 min"];

/// One of the probe-header GPIO lines the sensor can be wired to
///
/// The mapping to physical pins lives in the chip HAL; this is only
/// the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PinSelector {
    #[default]
    Probe0,
    Probe1,
    Probe2,
}

impl PinSelector {
    /// Selection from a settings index; out-of-range falls back to
    /// the first probe pin.
    pub fn from_index(index: u8) -> Self {
        match index {
            1 => PinSelector::Probe1,
            2 => PinSelector::Probe2,
            _ => PinSelector::Probe0,
        }
    }

    /// Index into the HAL probe pin table
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Label for the config screen (Pico probe header)
    pub fn label(&self) -> &'static str {
        match self {
            PinSelector::Probe0 => "GP2 (pin 4)",
            PinSelector::Probe1 => "GP3 (pin 5)",
            PinSelector::Probe2 => "GP4 (pin 6)",
        }
    }
}

/// Persisted user settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settings {
    /// Index into the probe pin table (0-2)
    pub pin_index: u8,
    /// Display temperatures in Fahrenheit instead of Celsius
    pub use_fahrenheit: bool,
    /// Index into [`INTERVAL_MS`] (0-2)
    pub interval_index: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pin_index: 0,
            use_fahrenheit: false,
            interval_index: 0,
        }
    }
}

impl Settings {
    /// Clamp out-of-range indices back to 0.
    ///
    /// Applied after every load so stale or corrupt records cannot
    /// select hardware that does not exist.
    pub fn normalize(&mut self) {
        if self.pin_index >= PIN_COUNT {
            self.pin_index = 0;
        }
        if self.interval_index >= INTERVAL_COUNT {
            self.interval_index = 0;
        }
    }

    /// The selected probe pin
    pub fn pin(&self) -> PinSelector {
        PinSelector::from_index(self.pin_index)
    }

    /// The selected read interval in milliseconds
    pub fn interval_ms(&self) -> u32 {
        INTERVAL_MS[(self.interval_index % INTERVAL_COUNT) as usize]
    }

    /// The selected display unit
    pub fn unit(&self) -> Unit {
        if self.use_fahrenheit {
            Unit::Fahrenheit
        } else {
            Unit::Celsius
        }
    }

    /// Cycle to the next probe pin (config screen, Right key)
    pub fn cycle_pin(&mut self, forward: bool) {
        self.pin_index = cycle(self.pin_index, PIN_COUNT, forward);
    }

    /// Toggle the display unit (config screen)
    pub fn toggle_unit(&mut self) {
        self.use_fahrenheit = !self.use_fahrenheit;
    }

    /// Cycle to the next read interval (config screen)
    pub fn cycle_interval(&mut self, forward: bool) {
        self.interval_index = cycle(self.interval_index, INTERVAL_COUNT, forward);
    }
}

fn cycle(value: u8, count: u8, forward: bool) -> u8 {
    if forward {
        (value + 1) % count
    } else {
        (value + count - 1) % count
    }
}

/// Serialized settings buffer size (postcard upper bound for the record)
#[cfg(feature = "serde")]
pub const SETTINGS_BUF_LEN: usize = 8;

#[cfg(feature = "serde")]
impl Settings {
    /// Serialize into a postcard blob for flash storage
    pub fn encode<'a>(&self, buffer: &'a mut [u8]) -> Result<&'a [u8], postcard::Error> {
        postcard::to_slice(self, buffer).map(|slice| &*slice)
    }

    /// Deserialize from a postcard blob, clamping indices
    pub fn decode(data: &[u8]) -> Result<Self, postcard::Error> {
        let mut settings: Settings = postcard::from_bytes(data)?;
        settings.normalize();
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_table() {
        let mut settings = Settings::default();
        assert_eq!(settings.interval_ms(), 1_000);
        settings.interval_index = 1;
        assert_eq!(settings.interval_ms(), 60_000);
        settings.interval_index = 2;
        assert_eq!(settings.interval_ms(), 300_000);
    }

    #[test]
    fn test_out_of_range_indices_clamp_to_zero() {
        let mut settings = Settings {
            pin_index: 7,
            use_fahrenheit: true,
            interval_index: 5,
        };
        settings.normalize();
        assert_eq!(settings.pin_index, 0);
        assert_eq!(settings.interval_index, 0);
        // Unit flag is a bool, nothing to clamp
        assert!(settings.use_fahrenheit);
    }

    #[test]
    fn test_pin_selector_from_index() {
        assert_eq!(PinSelector::from_index(0), PinSelector::Probe0);
        assert_eq!(PinSelector::from_index(2), PinSelector::Probe2);
        assert_eq!(PinSelector::from_index(200), PinSelector::Probe0);
    }

    #[test]
    fn test_cycling_wraps() {
        let mut settings = Settings::default();
        settings.cycle_pin(true);
        settings.cycle_pin(true);
        assert_eq!(settings.pin_index, 2);
        settings.cycle_pin(true);
        assert_eq!(settings.pin_index, 0);
        settings.cycle_pin(false);
        assert_eq!(settings.pin_index, 2);

        settings.cycle_interval(false);
        assert_eq!(settings.interval_index, 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_postcard_round_trip() {
        let settings = Settings {
            pin_index: 1,
            use_fahrenheit: true,
            interval_index: 2,
        };
        let mut buffer = [0u8; SETTINGS_BUF_LEN];
        let encoded = settings.encode(&mut buffer).unwrap();
        assert_eq!(Settings::decode(encoded).unwrap(), settings);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_decode_clamps() {
        let stored = Settings {
            pin_index: 0,
            use_fahrenheit: false,
            interval_index: 2,
        };
        let mut buffer = [0u8; SETTINGS_BUF_LEN];
        let mut bytes = [0u8; SETTINGS_BUF_LEN];
        let encoded = stored.encode(&mut buffer).unwrap();
        bytes[..encoded.len()].copy_from_slice(encoded);
        // Corrupt the pin index to an out-of-range value
        bytes[0] = 5;
        let decoded = Settings::decode(&bytes[..encoded.len()]).unwrap();
        assert_eq!(decoded.pin_index, 0);
    }
}
