//! Display backend trait
//!
//! Defines the interface for different display types.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for rendering a text screen.
/// Implementations handle the specifics of OLED, LCD, or other panels.
pub trait DisplayBackend {
    /// Clear the entire display
    fn clear(&mut self) -> impl core::future::Future<Output = Result<(), DisplayError>>;

    /// Draw text at the specified row and column (character units)
    fn draw_text(
        &mut self,
        row: u8,
        col: u8,
        text: &str,
    ) -> impl core::future::Future<Output = Result<(), DisplayError>>;

    /// Invert a region on the specified row (for selection highlighting)
    ///
    /// `end_col` is exclusive.
    fn invert_region(
        &mut self,
        row: u8,
        start_col: u8,
        end_col: u8,
    ) -> impl core::future::Future<Output = Result<(), DisplayError>>;

    /// Flush buffered content to the display
    fn flush(&mut self) -> impl core::future::Future<Output = Result<(), DisplayError>>;

    /// Display dimensions as (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);
}
