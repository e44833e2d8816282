//! Hardware-independent core library for RoundMeter
//!
//! RoundMeter pulls weather and rain forecasts from buienradar, reads an
//! indoor CO2 sensor, and cycles three full-screen views on a 240x240 round
//! display. This crate holds everything that is not a hardware driver: the
//! field extractor and feed pipelines, the ring gauge and rain graph
//! renderers, and the cooperative screen scheduler.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod config;
pub mod extract;
pub mod framebuffer;
pub mod net;
pub mod pages;
pub mod platform;
pub mod rain;
pub mod scheduler;
pub mod sensors;
pub mod time;
pub mod ui;
pub mod weather;

#[cfg(test)]
mod testing;

/// Firmware version shown on the splash screen.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
