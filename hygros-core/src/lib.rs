//! Board-agnostic core logic for the Hygros sensor firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Sensor trait and error taxonomy
//! - Raw frame layout and checksum validation
//! - Reading cache for the display layer
//! - User settings (probe pin, units, read interval) with clamping
//! - UI state machine (menu / live / config / about screens)
//! - Sampling command derived from UI state and settings
//! - Unit conversion for presentation

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod reading;
pub mod sampling;
pub mod state;
pub mod traits;
pub mod units;
