//! Controller task
//!
//! Owns the UI state, the settings, and the reading cache. Reacts to
//! key events and acquisition results, persists settings when the
//! config screen is left, keeps the sensor task's command current, and
//! rebuilds the shared screen buffer after every state change.

use defmt::*;
use embassy_futures::select::{select, Either};

use hygros_core::config::Settings;
use hygros_core::reading::ReadingCache;
use hygros_core::sampling::SensorCommand;
use hygros_core::state::{Effect, Ui};
use hygros_hal_rp2040::SettingsFlash;

use crate::channels::{INPUT_CHANNEL, SCREEN_BUFFER, SCREEN_UPDATE, SENSOR_CMD, SENSOR_RESULT};
use crate::display::Renderer;
use crate::settings::SettingsStore;

#[embassy_executor::task]
pub async fn controller_task(
    mut store: SettingsStore<SettingsFlash<'static>>,
    mut settings: Settings,
) {
    info!("Controller task started");

    let mut ui = Ui::new();
    let mut cache = ReadingCache::new();
    let mut renderer = Renderer::new();
    let mut sensor_cmd: Option<SensorCommand> = None;

    push_sensor_command(&ui, &settings, &mut sensor_cmd);
    publish_screen(&mut renderer, &ui, &settings, &cache);

    loop {
        match select(INPUT_CHANNEL.receive(), SENSOR_RESULT.wait()).await {
            Either::First(key) => {
                let effect = ui.handle_key(key, &mut settings);
                if effect == Effect::SaveSettings {
                    match store.save(&settings).await {
                        Ok(()) => info!("Settings saved"),
                        Err(e) => warn!("Settings save failed: {}", e),
                    }
                }
                push_sensor_command(&ui, &settings, &mut sensor_cmd);
                publish_screen(&mut renderer, &ui, &settings, &cache);
            }
            Either::Second(outcome) => {
                cache.apply(outcome);
                // Only the live view shows sensor data
                if ui.sampling_active() {
                    publish_screen(&mut renderer, &ui, &settings, &cache);
                }
            }
        }
    }
}

/// Tell the sensor task what to sample, and whether to sample at all.
///
/// Signals only when the command differs from the last one published;
/// a key press that changes nothing must not disturb the sensor task's
/// interval timer.
fn push_sensor_command(ui: &Ui, settings: &Settings, last: &mut Option<SensorCommand>) {
    let command = SensorCommand::current(ui, settings);
    if *last != Some(command) {
        SENSOR_CMD.signal(command);
        *last = Some(command);
    }
}

/// Rebuild the shared screen buffer and wake the render task
fn publish_screen(renderer: &mut Renderer, ui: &Ui, settings: &Settings, cache: &ReadingCache) {
    renderer.render(ui, settings, cache);
    SCREEN_BUFFER.lock(|screen| {
        screen.borrow_mut().clone_from(renderer.screen());
    });
    SCREEN_UPDATE.signal(());
}
