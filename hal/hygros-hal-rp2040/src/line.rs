//! Dual-mode sensor bus pin
//!
//! The RP2040 has no true open-drain mode, so the standard single-wire
//! technique applies: pulling low means driving the pin as a low
//! output, releasing means switching it back to an input and letting
//! the pull-up raise the line. The host therefore never actively
//! drives the line high.

use embassy_rp::gpio::{Flex, Pull};
use hygros_hal::DataLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Input,
    OutputLow,
}

/// Sensor bus pin over a Flex GPIO
pub struct FlexLine<'d> {
    pin: Flex<'d>,
    mode: Mode,
}

impl<'d> FlexLine<'d> {
    /// Take over a Flex pin and park it in the idle (released) state
    pub fn new(mut pin: Flex<'d>) -> Self {
        pin.set_pull(Pull::Up);
        pin.set_as_input();
        Self {
            pin,
            mode: Mode::Input,
        }
    }
}

impl DataLine for FlexLine<'_> {
    fn drive(&mut self, released: bool) {
        if released {
            // Release to the pull-up
            if self.mode != Mode::Input {
                self.pin.set_as_input();
                self.mode = Mode::Input;
            }
        } else {
            self.pin.set_low();
            if self.mode != Mode::OutputLow {
                self.pin.set_as_output();
                self.mode = Mode::OutputLow;
            }
        }
    }

    fn sense(&mut self) -> bool {
        if self.mode != Mode::Input {
            self.pin.set_as_input();
            self.mode = Mode::Input;
        }
        self.pin.is_high()
    }
}
