//! The full-screen views and the order they rotate in.

mod co2;
pub mod constants;
mod dwell;
mod rain;
mod splash;
mod weather;

pub use co2::{co2_gauge, draw_co2};
pub use dwell::DwellIndicator;
pub use rain::draw_rain;
pub use splash::draw_splash;
pub use weather::draw_weather;

/// Screens in rotation order. Index 0 is reserved for "nothing shown yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Screen {
    Weather = 1,
    Rain = 2,
    Co2 = 3,
}

impl Screen {
    pub const COUNT: u8 = 3;

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::Weather),
            2 => Some(Self::Rain),
            3 => Some(Self::Co2),
            _ => None,
        }
    }

    /// The screen that follows `index`. Anything outside `1..=COUNT` wraps
    /// back to the weather screen.
    pub fn after(index: u8) -> Self {
        Self::from_index(index.wrapping_add(1)).unwrap_or(Self::Weather)
    }

    pub fn next(self) -> Self {
        Self::after(self.index())
    }
}
