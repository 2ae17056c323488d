//! Embassy tasks
//!
//! Four tasks cooperate through the statics in [`crate::channels`]:
//!
//! - `input`: debounces the front-panel buttons into key events
//! - `controller`: owns the UI state, settings, and reading cache
//! - `sensor`: runs timed acquisitions on the selected probe line
//! - `render`: pushes the shared screen buffer to the OLED

pub mod controller;
pub mod input;
pub mod render;
pub mod sensor;

pub use controller::controller_task;
pub use input::input_task;
pub use render::render_task;
pub use sensor::sensor_task;
