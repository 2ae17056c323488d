//! Sampling command derivation
//!
//! The sensor task is driven by a small command value derived from the
//! UI state and settings. Deriving it in one place keeps the rule
//! "publish only when something changed" testable: the DHT11 needs at
//! least a second between reads, so a command re-signaled for a key
//! press that changed nothing must not restart the interval timer.

use crate::config::{PinSelector, Settings};
use crate::state::Ui;

/// What the sensor task should currently be doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorCommand {
    /// Which probe line to sample
    pub pin: PinSelector,
    /// Milliseconds between acquisitions
    pub interval_ms: u32,
    /// False while no view needs live data
    pub enabled: bool,
}

impl SensorCommand {
    /// The command the current UI state and settings call for
    pub fn current(ui: &Ui, settings: &Settings) -> Self {
        Self {
            pin: settings.pin(),
            interval_ms: settings.interval_ms(),
            enabled: ui.sampling_active(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Key;

    fn live_ui(settings: &mut Settings) -> Ui {
        let mut ui = Ui::new();
        ui.handle_key(Key::Ok, settings); // Acquire Data
        ui
    }

    #[test]
    fn test_keys_that_change_nothing_keep_the_command_equal() {
        let mut settings = Settings::default();
        let mut ui = live_ui(&mut settings);
        let before = SensorCommand::current(&ui, &settings);

        // On the live view these keys neither navigate nor edit
        for key in [Key::Up, Key::Down, Key::Left, Key::Right, Key::Ok] {
            ui.handle_key(key, &mut settings);
            assert_eq!(SensorCommand::current(&ui, &settings), before);
        }
    }

    #[test]
    fn test_leaving_the_live_view_disables_sampling() {
        let mut settings = Settings::default();
        let mut ui = live_ui(&mut settings);
        assert!(SensorCommand::current(&ui, &settings).enabled);

        ui.handle_key(Key::Back, &mut settings);
        assert!(!SensorCommand::current(&ui, &settings).enabled);
    }

    #[test]
    fn test_settings_edits_change_the_command() {
        let mut settings = Settings::default();
        let ui = Ui::new();
        let before = SensorCommand::current(&ui, &settings);

        settings.cycle_interval(true);
        let after = SensorCommand::current(&ui, &settings);
        assert_ne!(before, after);
        assert_eq!(after.interval_ms, 60_000);

        settings.cycle_pin(true);
        assert_eq!(
            SensorCommand::current(&ui, &settings).pin,
            PinSelector::Probe1
        );
    }
}
