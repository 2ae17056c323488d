//! Render task
//!
//! Copies the shared screen buffer out under the lock, then pushes it
//! to the display backend. Keeping the I2C traffic outside the lock
//! means the controller never waits on the bus.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;

use hygros_display::{DisplayBackend, Screen, SCREEN_ROWS};

use crate::channels::{SCREEN_BUFFER, SCREEN_UPDATE};
use crate::display::Sh1106;

#[embassy_executor::task]
pub async fn render_task(mut backend: Sh1106<I2c<'static, I2C0, Async>>) {
    info!("Render task started");

    loop {
        SCREEN_UPDATE.wait().await;

        let screen: Screen = SCREEN_BUFFER.lock(|s| s.borrow().clone());

        if let Err(e) = draw(&mut backend, &screen).await {
            warn!("Display update failed: {}", e);
        }
    }
}

async fn draw<B: DisplayBackend>(
    backend: &mut B,
    screen: &Screen,
) -> Result<(), hygros_display::DisplayError> {
    backend.clear().await?;
    for row in 0..SCREEN_ROWS {
        let line = screen.line(row);
        if !line.is_empty() {
            backend.draw_text(row as u8, 0, line).await?;
        }
        if let Some((start, end)) = screen.highlight(row) {
            backend.invert_region(row as u8, start, end).await?;
        }
    }
    backend.flush().await
}
