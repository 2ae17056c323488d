//! Button input task
//!
//! Polls the six front-panel buttons (active low, internal pull-ups)
//! and pushes one key event per press onto the input channel. A press
//! is reported on the high-to-low transition; the button must be seen
//! released again before it can fire another event.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Ticker};

use hygros_core::state::Key;

use crate::channels::INPUT_CHANNEL;

/// Poll period; 10 ms is enough to debounce tactile switches
const POLL_PERIOD: Duration = Duration::from_millis(10);

/// The six front-panel buttons
pub struct Buttons<'d> {
    pub up: Input<'d>,
    pub down: Input<'d>,
    pub left: Input<'d>,
    pub right: Input<'d>,
    pub ok: Input<'d>,
    pub back: Input<'d>,
}

impl<'d> Buttons<'d> {
    fn levels(&self) -> [bool; 6] {
        [
            self.up.is_low(),
            self.down.is_low(),
            self.left.is_low(),
            self.right.is_low(),
            self.ok.is_low(),
            self.back.is_low(),
        ]
    }
}

/// Key for each slot in the level array
const KEYS: [Key; 6] = [Key::Up, Key::Down, Key::Left, Key::Right, Key::Ok, Key::Back];

#[embassy_executor::task]
pub async fn input_task(buttons: Buttons<'static>) {
    info!("Input task started");

    let mut ticker = Ticker::every(POLL_PERIOD);
    let mut pressed = [false; 6];

    loop {
        ticker.next().await;

        let levels = buttons.levels();
        for (i, &down) in levels.iter().enumerate() {
            if down && !pressed[i] {
                debug!("Key press: {}", KEYS[i]);
                // Drop the event rather than stall polling if the
                // controller falls behind
                let _ = INPUT_CHANNEL.try_send(KEYS[i]);
            }
            pressed[i] = down;
        }
    }
}
