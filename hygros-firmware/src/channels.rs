//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use hygros_core::reading::Reading;
use hygros_core::sampling::SensorCommand;
use hygros_core::state::Key;
use hygros_core::traits::SensorError;
use hygros_display::Screen;

/// Channel capacity for key events from the buttons
const INPUT_CHANNEL_SIZE: usize = 8;

/// Key events from the front-panel buttons
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, Key, INPUT_CHANNEL_SIZE> =
    Channel::new();

/// Sampling configuration (updated by controller)
pub static SENSOR_CMD: Signal<CriticalSectionRawMutex, SensorCommand> = Signal::new();

/// Latest acquisition outcome (updated by sensor task)
pub static SENSOR_RESULT: Signal<CriticalSectionRawMutex, Result<Reading, SensorError>> =
    Signal::new();

/// Signal that a screen update is ready to be pushed to the display
pub static SCREEN_UPDATE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Shared screen buffer: the controller writes it, the render task reads it
pub static SCREEN_BUFFER: Mutex<CriticalSectionRawMutex, RefCell<Screen>> =
    Mutex::new(RefCell::new(Screen::new()));
