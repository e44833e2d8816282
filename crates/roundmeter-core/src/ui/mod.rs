//! Drawing building blocks for the round display
//!
//! - Fixed RGB565 palette and the spectrum sweep shared by the gauge schemes
//! - Text labels in three sizes
//! - The ring gauge and the rain graph components

pub mod colors;
pub mod components;
pub mod text;

pub use components::{ColorScheme, RainGraph, RainScale, RingGauge};
pub use text::{Label, TextSize};

/// Panel width in pixels (GC9A01 style 240x240 round LCD)
pub const DISPLAY_WIDTH_PX: u16 = 240;

/// Panel height in pixels
pub const DISPLAY_HEIGHT_PX: u16 = 240;

/// Horizontal center of the panel, the axis of all centered text
pub const CENTER_X: i32 = DISPLAY_WIDTH_PX as i32 / 2;
