//! Hygros Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs (RP2040 today, others later). This keeps the
//! sensor decoder and application logic free of chip-specific code and
//! lets them run against simulated hardware on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (hygros-firmware, tests)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hygros-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │          hygros-hal-rp2040              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::DataLine`] - Single-wire bidirectional bus pin
//! - [`clock::MicrosClock`] - Free-running microsecond counter
//! - [`flash::FlashStorage`] - Persistent settings storage

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod flash;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use clock::MicrosClock;
pub use flash::{FlashError, FlashStorage, StorageKey};
pub use gpio::DataLine;
