//! Segment coloring schemes

use embedded_graphics::pixelcolor::Rgb565;
use serde::{Deserialize, Serialize};

use super::constants::{HALF_SWEEP_DEG, THREE_ZONE_GREEN_BELOW_DEG, THREE_ZONE_YELLOW_BELOW_DEG};
use super::map_range;
use crate::ui::colors::{BLUE, GREEN, RED, YELLOW, spectrum_color};

/// How filled segments are colored along the sweep.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
    Red,
    Green,
    Blue,
    /// Whole spectrum, red at the start of the sweep to blue at the end
    Spectrum,
    /// Second half of the spectrum: green at the start of the sweep,
    /// through cyan, to blue at the end
    Warm,
    /// [`ColorScheme::Warm`] reversed: blue at the start, green at the end
    Cool,
    /// Green, then yellow from -50°, then red from 0°
    ThreeZone,
}

impl ColorScheme {
    /// Color of the segment starting at `angle` degrees.
    pub fn color_at(&self, angle: i32) -> Rgb565 {
        match self {
            ColorScheme::Red => RED,
            ColorScheme::Green => GREEN,
            ColorScheme::Blue => BLUE,
            ColorScheme::Spectrum => sweep(angle, 0, 127),
            ColorScheme::Warm => sweep(angle, 63, 127),
            ColorScheme::Cool => sweep(angle, 127, 63),
            ColorScheme::ThreeZone => {
                if angle < THREE_ZONE_GREEN_BELOW_DEG {
                    GREEN
                } else if angle < THREE_ZONE_YELLOW_BELOW_DEG {
                    YELLOW
                } else {
                    RED
                }
            }
        }
    }
}

fn sweep(angle: i32, from: i32, to: i32) -> Rgb565 {
    let position = map_range(angle, -HALF_SWEEP_DEG, HALF_SWEEP_DEG, from, to);
    spectrum_color(position.clamp(0, 127) as u8)
}
