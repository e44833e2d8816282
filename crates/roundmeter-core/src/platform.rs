//! Board services the scheduler runs on
//!
//! The firmware and the simulator each provide a [`Platform`] (clock, delay
//! and the housekeeping hook) and a [`Canvas`] (the panel, or a window).

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_hal::delay::DelayNs;

use crate::framebuffer::FrameBuffer;

pub trait Platform: DelayNs {
    /// Milliseconds since boot. Wraps after about 49.7 days.
    fn now_ms(&self) -> u32;

    /// Called between blocking steps: feed the watchdog, run the network
    /// stack, pump window events.
    fn housekeeping(&mut self) {}
}

/// Drawing surface of the screens.
pub trait Canvas: DrawTarget<Color = Rgb565> {
    /// Make everything drawn so far visible.
    fn present(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Canvas for FrameBuffer {}
