//! Hygros - DHT11 climate monitor firmware
//!
//! Main firmware binary for an RP2040 board with a DHT11 probe header,
//! a 128x64 SH1106 OLED, and six front-panel buttons.
//!
//! Wiring (Raspberry Pi Pico):
//! - Probe header: GP2 / GP3 / GP4, selectable in the config screen
//! - OLED: I2C0 on GP0 (SDA) / GP1 (SCL)
//! - Buttons: GP10..GP15, active low against the internal pull-ups

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Flex, Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use {defmt_rtt as _, panic_probe as _};

use hygros_hal_rp2040::{FlexLine, ProbeBank, SettingsFlash, TimerClock};

use crate::display::Sh1106;
use crate::settings::SettingsStore;
use crate::tasks::input::Buttons;

mod channels;
mod display;
mod settings;
mod tasks;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Hygros firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Load the settings record (defaults on first boot or corruption)
    let mut store = SettingsStore::new(SettingsFlash::new(p.FLASH, p.DMA_CH0));
    let settings = store.load().await;
    info!(
        "Settings: pin={}, fahrenheit={}, interval={}ms",
        settings.pin(),
        settings.use_fahrenheit,
        settings.interval_ms()
    );

    // All three probe lines are claimed up front; the settings only
    // select which one an acquisition uses
    let bank = ProbeBank::new(
        FlexLine::new(Flex::new(p.PIN_2)),
        FlexLine::new(Flex::new(p.PIN_3)),
        FlexLine::new(Flex::new(p.PIN_4)),
    );

    // OLED on I2C0
    let i2c = I2c::new_async(p.I2C0, p.PIN_1, p.PIN_0, Irqs, i2c::Config::default());
    let mut oled = Sh1106::new(i2c);
    if oled.init().await.is_err() {
        warn!("Display init failed, continuing headless");
    }

    let buttons = Buttons {
        up: Input::new(p.PIN_10, Pull::Up),
        down: Input::new(p.PIN_11, Pull::Up),
        left: Input::new(p.PIN_12, Pull::Up),
        right: Input::new(p.PIN_13, Pull::Up),
        ok: Input::new(p.PIN_14, Pull::Up),
        back: Input::new(p.PIN_15, Pull::Up),
    };

    spawner.must_spawn(tasks::sensor_task(bank, TimerClock::new()));
    spawner.must_spawn(tasks::input_task(buttons));
    spawner.must_spawn(tasks::render_task(oled));
    spawner.must_spawn(tasks::controller_task(store, settings));

    info!("All tasks spawned");
}
