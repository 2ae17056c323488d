//! Settings persistence
//!
//! Loads and saves the user settings record through the flash storage
//! abstraction. A missing or unreadable record falls back to defaults;
//! an out-of-range field is clamped rather than rejected.

use defmt::*;

use hygros_core::config::{Settings, SETTINGS_BUF_LEN};
use hygros_hal::flash::{FlashError, FlashStorage, StorageKey};

/// Settings store over a flash backend
pub struct SettingsStore<F> {
    flash: F,
}

impl<F: FlashStorage> SettingsStore<F> {
    pub fn new(flash: F) -> Self {
        Self { flash }
    }

    /// Load settings from flash, falling back to defaults
    ///
    /// Any failure (no record yet, flash error, decode error) yields the
    /// default settings. Decoding already clamps out-of-range fields.
    pub async fn load(&mut self) -> Settings {
        let mut buffer = [0u8; SETTINGS_BUF_LEN];
        match self.flash.read(StorageKey::Settings, &mut buffer).await {
            Ok(len) => match Settings::decode(&buffer[..len]) {
                Ok(settings) => {
                    info!("Settings loaded from flash");
                    settings
                }
                Err(_) => {
                    warn!("Settings record corrupt, using defaults");
                    Settings::default()
                }
            },
            Err(FlashError::NotFound) => {
                info!("No settings record, using defaults");
                Settings::default()
            }
            Err(e) => {
                warn!("Settings read failed ({}), using defaults", e);
                Settings::default()
            }
        }
    }

    /// Save settings to flash
    pub async fn save(&mut self, settings: &Settings) -> Result<(), FlashError> {
        let mut buffer = [0u8; SETTINGS_BUF_LEN];
        let encoded = settings
            .encode(&mut buffer)
            .map_err(|_| FlashError::BufferTooSmall)?;
        self.flash.write(StorageKey::Settings, encoded).await
    }
}
