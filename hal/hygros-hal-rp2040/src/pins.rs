//! Probe header pin bank
//!
//! The sensor can be wired to one of three probe header GPIOs; which
//! one is active comes from the settings record. All three are claimed
//! at init and the selection only picks which line an acquisition
//! binds to.

use hygros_core::config::PinSelector;

use crate::line::FlexLine;

/// GPIO numbers of the probe header pins, indexed by [`PinSelector`]
///
/// GP2/GP3/GP4 (physical pins 4/5/6 on the Pico).
pub const PROBE_GPIOS: [u8; 3] = [2, 3, 4];

/// The three selectable sensor lines
pub struct ProbeBank<'d> {
    lines: [FlexLine<'d>; 3],
}

impl<'d> ProbeBank<'d> {
    /// Build the bank from the three probe lines, in selector order
    pub fn new(probe0: FlexLine<'d>, probe1: FlexLine<'d>, probe2: FlexLine<'d>) -> Self {
        Self {
            lines: [probe0, probe1, probe2],
        }
    }

    /// Borrow the selected line for one acquisition
    pub fn line_mut(&mut self, selector: PinSelector) -> &mut FlexLine<'d> {
        &mut self.lines[selector.index() as usize]
    }
}
