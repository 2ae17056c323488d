//! RP2040-specific HAL for the Hygros sensor firmware
//!
//! This crate provides RP2040 implementations of the hygros-hal traits:
//! - Dual-mode sensor bus pin over a Flex GPIO
//! - Microsecond clock over the embassy time driver
//! - Flash storage for the settings record
//! - Probe header pin bank

#![no_std]

pub mod clock;
pub mod flash;
pub mod line;
pub mod pins;

pub use clock::TimerClock;
pub use flash::SettingsFlash;
pub use line::FlexLine;
pub use pins::ProbeBank;
