//! Input events and their effects

/// A debounced key press from the front panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Ok,
    Back,
}

/// Side effect requested by a state transition
///
/// The state machine itself only mutates the UI state and settings;
/// anything touching hardware or storage is reported back to the
/// caller as an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Effect {
    /// Nothing beyond a possible redraw
    None,
    /// Settings were edited and the config screen was left;
    /// persist them now.
    SaveSettings,
}
