//! Display abstraction and shared screen buffer for Hygros
//!
//! This crate provides:
//! - `DisplayBackend` trait for different display types
//! - A character-based `Screen` buffer the renderer draws into
//!
//! The controller builds screens without caring about the specific
//! display hardware; a backend implementation pushes the buffer to the
//! panel.

#![no_std]

pub mod backend;
pub mod screen;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use screen::{Screen, SCREEN_COLS, SCREEN_ROWS};
