//! GPIO pin abstractions
//!
//! Provides the trait for the single-wire sensor bus pin. The DHT11
//! protocol shares one line between host and sensor, so the pin must
//! switch between open-drain output and pulled-up input mid-transaction.

/// Single-wire bidirectional data line
///
/// The line idles high through an external (or internal) pull-up. The
/// host may only pull the line low or release it; it must never drive
/// the line high, because the sensor can be pulling it low at the same
/// time.
///
/// Mode switches take effect before the call returns - there is no
/// buffering, since the protocol timing depends on it.
pub trait DataLine {
    /// Configure the pin as an open-drain output and set its level.
    ///
    /// `released = false` pulls the line low; `released = true` lets
    /// the pull-up bring it high.
    fn drive(&mut self, released: bool);

    /// Configure the pin as a pulled-up input and read the current
    /// logic level.
    fn sense(&mut self) -> bool;
}

// Mutable access to a line is as good as owning it for the duration
// of a borrow, which is what the decoder needs.
impl<T: DataLine> DataLine for &mut T {
    fn drive(&mut self, released: bool) {
        (**self).drive(released);
    }

    fn sense(&mut self) -> bool {
        (**self).sense()
    }
}
