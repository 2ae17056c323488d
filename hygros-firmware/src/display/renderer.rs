//! Screen rendering
//!
//! Builds a text screen for the current view. The panel has 8 rows of
//! 21 characters; selection is shown by inverting the selected row.

use core::fmt::Write;

use heapless::String;

use hygros_core::config::{Settings, INTERVAL_LABELS};
use hygros_core::reading::ReadingCache;
use hygros_core::state::{ConfigRow, MenuItem, Ui, View};
use hygros_display::{Screen, SCREEN_COLS};

/// First menu entry row on the menu screen
const MENU_FIRST_ROW: usize = 2;

/// First editable row on the config screen
const CONFIG_FIRST_ROW: usize = 2;

/// Screen renderer for the UI views
pub struct Renderer {
    screen: Screen,
}

impl Renderer {
    pub const fn new() -> Self {
        Self {
            screen: Screen::new(),
        }
    }

    /// The current screen buffer
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Render whatever the given view needs
    pub fn render(&mut self, ui: &Ui, settings: &Settings, cache: &ReadingCache) {
        match ui.view() {
            View::Menu { selected } => self.render_menu(selected),
            View::Live => self.render_live(settings, cache),
            View::Config { selected } => self.render_config(selected, settings),
            View::About => self.render_about(),
            View::Asleep => self.screen.clear(),
        }
    }

    /// Main menu: title plus one row per entry, selected row inverted
    fn render_menu(&mut self, selected: u8) {
        self.screen.clear();
        self.screen.set_line(0, "    DHT11 Monitor");

        for index in 0..MenuItem::COUNT {
            let row = MENU_FIRST_ROW + index as usize;
            let mut line: String<21> = String::new();
            let _ = write!(line, " {}", MenuItem::from_index(index).label());
            self.screen.set_line(row, &line);
        }

        let row = MENU_FIRST_ROW + (selected % MenuItem::COUNT) as usize;
        self.screen.set_highlight(row, 0, SCREEN_COLS as u8);
    }

    /// Live reading: cached values, or placeholders before the first
    /// good frame, plus the most recent failure if there is one.
    fn render_live(&mut self, settings: &Settings, cache: &ReadingCache) {
        self.screen.clear();
        self.screen.set_line(0, "    Live Reading");

        let unit = settings.unit();
        let mut temp_line: String<21> = String::new();
        let mut hum_line: String<21> = String::new();

        match cache.reading() {
            Some(reading) => {
                let shown = unit.from_celsius(reading.temperature);
                let _ = write!(temp_line, "Temp: {:.1} {}", shown, unit.suffix());
                let _ = write!(hum_line, "Hum:  {:.1} %", reading.humidity);
            }
            None => {
                let _ = write!(temp_line, "Temp: -- {}", unit.suffix());
                let _ = write!(hum_line, "Hum:  -- %");
            }
        }
        self.screen.set_line(2, &temp_line);
        self.screen.set_line(3, &hum_line);

        if let Some(failure) = cache.last_failure() {
            let mut fail_line: String<21> = String::new();
            let _ = write!(fail_line, "last: {}", failure.label());
            self.screen.set_line(5, &fail_line);
        }

        self.screen.set_line(7, "BACK=Menu");
    }

    /// Settings editor: one row per field with its current value
    fn render_config(&mut self, selected: u8, settings: &Settings) {
        self.screen.clear();
        self.screen.set_line(0, "   Configuration");

        let mut pin_line: String<21> = String::new();
        let _ = write!(pin_line, "Pin:  {}", settings.pin().label());
        self.screen.set_line(CONFIG_FIRST_ROW, &pin_line);

        let mut unit_line: String<21> = String::new();
        let _ = write!(unit_line, "Unit: {}", settings.unit().name());
        self.screen.set_line(CONFIG_FIRST_ROW + 1, &unit_line);

        let mut interval_line: String<21> = String::new();
        let interval = INTERVAL_LABELS[(settings.interval_index as usize) % INTERVAL_LABELS.len()];
        let _ = write!(interval_line, "Rate: {}", interval);
        self.screen.set_line(CONFIG_FIRST_ROW + 2, &interval_line);

        let row = CONFIG_FIRST_ROW + (selected % ConfigRow::COUNT) as usize;
        self.screen.set_highlight(row, 0, SCREEN_COLS as u8);

        self.screen.set_line(7, "<>=Change BACK=Save");
    }

    /// Version/credits
    fn render_about(&mut self) {
        self.screen.clear();
        self.screen.set_line(1, "    DHT11 Monitor");
        let mut version_line: String<21> = String::new();
        let _ = write!(version_line, "    v{}", env!("CARGO_PKG_VERSION"));
        self.screen.set_line(3, &version_line);
        self.screen.set_line(5, " Temp/humidity probe");
        self.screen.set_line(7, "BACK=Menu");
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
