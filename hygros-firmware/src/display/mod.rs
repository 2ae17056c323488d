//! Display stack
//!
//! The renderer builds a text screen for the current view; the SH1106
//! driver pushes it to the OLED over I2C.

pub mod font;
pub mod renderer;
pub mod sh1106;

pub use renderer::Renderer;
pub use sh1106::Sh1106;
