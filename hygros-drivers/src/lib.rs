//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in hygros-core, written against the hygros-hal abstractions so they
//! can be exercised on the host with simulated hardware:
//!
//! - DHT11 single-wire protocol decoder

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod sensor;
