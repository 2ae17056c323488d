//! View navigation and settings editing
//!
//! Mirrors the four screens of the device: main menu, live reading,
//! configuration, and about. The UI state is an explicit struct passed
//! into the transition function - there are no globals.

use super::events::{Effect, Key};
use crate::config::Settings;

/// Main menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MenuItem {
    Acquire = 0,
    Configure = 1,
    About = 2,
    Sleep = 3,
}

impl MenuItem {
    /// Number of menu entries
    pub const COUNT: u8 = 4;

    /// Entry from its display position
    pub fn from_index(index: u8) -> Self {
        match index % Self::COUNT {
            0 => MenuItem::Acquire,
            1 => MenuItem::Configure,
            2 => MenuItem::About,
            _ => MenuItem::Sleep,
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Acquire => "Acquire Data",
            MenuItem::Configure => "Configuration",
            MenuItem::About => "About",
            MenuItem::Sleep => "Sleep",
        }
    }
}

/// Rows of the configuration view, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ConfigRow {
    Pin = 0,
    Units = 1,
    Interval = 2,
}

impl ConfigRow {
    /// Number of config rows
    pub const COUNT: u8 = 3;

    /// Row from its display position
    pub fn from_index(index: u8) -> Self {
        match index % Self::COUNT {
            0 => ConfigRow::Pin,
            1 => ConfigRow::Units,
            _ => ConfigRow::Interval,
        }
    }
}

/// The view currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum View {
    /// Main menu with the selected entry
    Menu { selected: u8 },
    /// Live reading view; sensor sampling runs only here
    Live,
    /// Settings editor with the selected row
    Config { selected: u8 },
    /// Version/credits view
    About,
    /// Display blanked, sampling stopped; any key wakes
    Asleep,
}

/// UI state
///
/// Owns nothing but the current view; settings and the reading cache
/// are owned by the caller and passed in where a transition needs them.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ui {
    view: View,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui {
    /// Start at the main menu
    pub const fn new() -> Self {
        Self {
            view: View::Menu { selected: 0 },
        }
    }

    /// The view currently shown
    pub fn view(&self) -> View {
        self.view
    }

    /// Whether periodic sensor sampling should run right now
    pub fn sampling_active(&self) -> bool {
        matches!(self.view, View::Live)
    }

    /// Process one key press and return the requested side effect.
    ///
    /// The caller re-renders after every key regardless of the effect.
    pub fn handle_key(&mut self, key: Key, settings: &mut Settings) -> Effect {
        match self.view {
            View::Menu { selected } => self.handle_menu_key(key, selected),
            View::Config { selected } => self.handle_config_key(key, selected, settings),
            View::Live | View::About => {
                if key == Key::Back {
                    self.view = View::Menu { selected: 0 };
                }
                Effect::None
            }
            View::Asleep => {
                // Any key wakes the device
                self.view = View::Menu { selected: 0 };
                Effect::None
            }
        }
    }

    fn handle_menu_key(&mut self, key: Key, selected: u8) -> Effect {
        match key {
            Key::Up => {
                self.view = View::Menu {
                    selected: (selected + MenuItem::COUNT - 1) % MenuItem::COUNT,
                };
            }
            Key::Down => {
                self.view = View::Menu {
                    selected: (selected + 1) % MenuItem::COUNT,
                };
            }
            Key::Ok => {
                self.view = match MenuItem::from_index(selected) {
                    MenuItem::Acquire => View::Live,
                    MenuItem::Configure => View::Config { selected: 0 },
                    MenuItem::About => View::About,
                    MenuItem::Sleep => View::Asleep,
                };
            }
            _ => {}
        }
        Effect::None
    }

    fn handle_config_key(&mut self, key: Key, selected: u8, settings: &mut Settings) -> Effect {
        match key {
            Key::Back => {
                // Return to the menu on the Configuration entry
                self.view = View::Menu {
                    selected: MenuItem::Configure as u8,
                };
                return Effect::SaveSettings;
            }
            Key::Up => {
                self.view = View::Config {
                    selected: (selected + ConfigRow::COUNT - 1) % ConfigRow::COUNT,
                };
            }
            Key::Down => {
                self.view = View::Config {
                    selected: (selected + 1) % ConfigRow::COUNT,
                };
            }
            Key::Left | Key::Right => {
                let forward = key == Key::Right;
                match ConfigRow::from_index(selected) {
                    ConfigRow::Pin => settings.cycle_pin(forward),
                    ConfigRow::Units => settings.toggle_unit(),
                    ConfigRow::Interval => settings.cycle_interval(forward),
                }
            }
            Key::Ok => {}
        }
        Effect::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn press(ui: &mut Ui, settings: &mut Settings, keys: &[Key]) -> Effect {
        let mut effect = Effect::None;
        for &key in keys {
            effect = ui.handle_key(key, settings);
        }
        effect
    }

    #[test]
    fn test_menu_navigation_wraps() {
        let mut ui = Ui::new();
        let mut settings = Settings::default();

        ui.handle_key(Key::Up, &mut settings);
        assert_eq!(ui.view(), View::Menu { selected: 3 });

        ui.handle_key(Key::Down, &mut settings);
        assert_eq!(ui.view(), View::Menu { selected: 0 });
    }

    #[test]
    fn test_menu_entries_open_their_screens() {
        let mut settings = Settings::default();

        let mut ui = Ui::new();
        press(&mut ui, &mut settings, &[Key::Ok]);
        assert_eq!(ui.view(), View::Live);
        assert!(ui.sampling_active());

        let mut ui = Ui::new();
        press(&mut ui, &mut settings, &[Key::Down, Key::Ok]);
        assert_eq!(ui.view(), View::Config { selected: 0 });
        assert!(!ui.sampling_active());

        let mut ui = Ui::new();
        press(&mut ui, &mut settings, &[Key::Down, Key::Down, Key::Ok]);
        assert_eq!(ui.view(), View::About);
    }

    #[test]
    fn test_back_returns_to_menu() {
        let mut ui = Ui::new();
        let mut settings = Settings::default();

        press(&mut ui, &mut settings, &[Key::Ok]);
        assert_eq!(ui.view(), View::Live);
        press(&mut ui, &mut settings, &[Key::Back]);
        assert!(matches!(ui.view(), View::Menu { .. }));
    }

    #[test]
    fn test_config_edits_settings() {
        let mut ui = Ui::new();
        let mut settings = Settings::default();

        // Enter config, cycle the pin twice
        press(
            &mut ui,
            &mut settings,
            &[Key::Down, Key::Ok, Key::Right, Key::Right],
        );
        assert_eq!(settings.pin_index, 2);

        // Units row
        press(&mut ui, &mut settings, &[Key::Down, Key::Right]);
        assert!(settings.use_fahrenheit);

        // Interval row, backwards wraps to the last entry
        press(&mut ui, &mut settings, &[Key::Down, Key::Left]);
        assert_eq!(settings.interval_index, 2);
    }

    #[test]
    fn test_leaving_config_requests_save() {
        let mut ui = Ui::new();
        let mut settings = Settings::default();

        press(&mut ui, &mut settings, &[Key::Down, Key::Ok, Key::Right]);
        let effect = ui.handle_key(Key::Back, &mut settings);
        assert_eq!(effect, Effect::SaveSettings);
        assert_eq!(ui.view(), View::Menu { selected: 1 });
    }

    #[test]
    fn test_sleep_wakes_on_any_key() {
        let mut ui = Ui::new();
        let mut settings = Settings::default();

        press(&mut ui, &mut settings, &[Key::Up, Key::Ok]);
        assert_eq!(ui.view(), View::Asleep);
        assert!(!ui.sampling_active());

        press(&mut ui, &mut settings, &[Key::Left]);
        assert!(matches!(ui.view(), View::Menu { .. }));
    }
}
