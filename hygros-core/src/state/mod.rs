//! UI state machine
//!
//! All screen navigation and settings editing is a function of the
//! current screen and a key event.

pub mod events;
pub mod machine;

pub use events::{Effect, Key};
pub use machine::{ConfigRow, MenuItem, Ui, View};
