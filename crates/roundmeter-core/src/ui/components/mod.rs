//! Screen components

pub mod gauge;
pub mod rain_graph;

pub use gauge::{ColorScheme, RingGauge};
pub use rain_graph::{RainGraph, RainScale};
