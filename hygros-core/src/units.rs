//! Temperature unit handling for the presentation layer
//!
//! The decoder always reports Celsius; conversion happens only at
//! display time.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display unit for temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Unit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Unit {
    /// Unit suffix for the live screen
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Celsius => "C",
            Unit::Fahrenheit => "F",
        }
    }

    /// Full unit name for the config screen
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Celsius => "Celsius",
            Unit::Fahrenheit => "Fahrenheit",
        }
    }

    /// Convert a Celsius value into this unit
    pub fn from_celsius(&self, celsius: f32) -> f32 {
        match self {
            Unit::Celsius => celsius,
            Unit::Fahrenheit => celsius_to_fahrenheit(celsius),
        }
    }
}

/// Celsius to Fahrenheit conversion
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fahrenheit_conversion() {
        // 22 C displays as 71.6 F at one decimal
        let f = celsius_to_fahrenheit(22.0);
        assert!((f - 71.6).abs() < 0.05);

        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
    }

    #[test]
    fn test_unit_passthrough() {
        assert_eq!(Unit::Celsius.from_celsius(22.0), 22.0);
        assert!((Unit::Fahrenheit.from_celsius(22.0) - 71.6).abs() < 0.05);
        assert_eq!(Unit::Celsius.suffix(), "C");
        assert_eq!(Unit::Fahrenheit.suffix(), "F");
    }
}
