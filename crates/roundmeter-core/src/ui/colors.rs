//! Fixed palette and the red-green-blue spectrum sweep
//!
//! # RGB565 Format
//! - Red: 5 bits (0-31)
//! - Green: 6 bits (0-63)
//! - Blue: 5 bits (0-31)
//!
//! The spectrum only drives 5 bits per channel and places green in the top
//! five bits of its 6-bit field, so a spectrum green of 31 is raw green 62.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;

// ============================================================================
// Palette
// ============================================================================

pub const BLACK: Rgb565 = Rgb565::new(0, 0, 0);
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);
pub const RED: Rgb565 = Rgb565::new(31, 0, 0);
pub const GREEN: Rgb565 = Rgb565::new(0, 63, 0);
pub const BLUE: Rgb565 = Rgb565::new(0, 0, 31);
pub const YELLOW: Rgb565 = Rgb565::new(31, 63, 0);
pub const MAGENTA: Rgb565 = Rgb565::new(31, 0, 31);

/// Empty gauge segments
pub const LIGHT_GREY: Rgb565 = Rgb565::new(26, 52, 26);

/// Background bands on the weather screen
pub const DARK_GREY: Rgb565 = Rgb565::new(15, 31, 15);

pub const SKY_BLUE: Rgb565 = Rgb565::new(16, 51, 29);
pub const MAROON: Rgb565 = Rgb565::new(15, 0, 0);
pub const NAVY: Rgb565 = Rgb565::new(0, 0, 15);
pub const GREEN_YELLOW: Rgb565 = Rgb565::new(22, 63, 0);

// ============================================================================
// Spectrum
// ============================================================================

/// Highest input of the spectrum sweep.
pub const SPECTRUM_MAX: u8 = 127;

/// 5-bit channel values of a spectrum color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectrumChannels {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl SpectrumChannels {
    /// Packed as `red << 11 | green << 6 | blue`.
    pub const fn packed(self) -> u16 {
        (self.red as u16) << 11 | (self.green as u16) << 6 | self.blue as u16
    }
}

/// Channels for `value` on the sweep 0 = red, 31 = yellow, 63 = green,
/// 95 = cyan, 127 = blue.
///
/// The input is split into four sectors of 32 by its top two bits; the low
/// five bits ramp one channel up or down within the sector. Values above
/// [`SPECTRUM_MAX`] are clamped.
pub const fn spectrum_channels(value: u8) -> SpectrumChannels {
    let value = if value > SPECTRUM_MAX {
        SPECTRUM_MAX
    } else {
        value
    };
    let amplitude = value & 0x1F;
    let (red, green, blue) = match value >> 5 {
        0 => (0x1F, amplitude, 0),
        1 => (0x1F - amplitude, 0x1F, 0),
        2 => (0, 0x1F, amplitude),
        _ => (0, 0x1F - amplitude, 0x1F),
    };
    SpectrumChannels { red, green, blue }
}

/// Packed 16-bit spectrum color for `value`.
pub const fn spectrum(value: u8) -> u16 {
    spectrum_channels(value).packed()
}

/// [`spectrum`] as an embedded-graphics color.
pub fn spectrum_color(value: u8) -> Rgb565 {
    Rgb565::from(RawU16::new(spectrum(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::*;

    fn rgb(value: u8) -> (u8, u8, u8) {
        let c = spectrum_channels(value);
        (c.red, c.green, c.blue)
    }

    #[test]
    fn sweep_endpoints() {
        assert_eq!(rgb(0), (31, 0, 0));
        assert_eq!(rgb(127), (0, 0, 31));
    }

    #[test]
    fn sector_boundaries_are_continuous() {
        assert_eq!(rgb(31), (31, 31, 0));
        assert_eq!(rgb(32), (31, 31, 0));
        assert_eq!(rgb(63), (0, 31, 0));
        assert_eq!(rgb(64), (0, 31, 0));
        assert_eq!(rgb(95), (0, 31, 31));
        assert_eq!(rgb(96), (0, 31, 31));
    }

    #[test]
    fn packing_is_bit_exact() {
        assert_eq!(spectrum(0), 0xF800);
        assert_eq!(spectrum(31), 0xF800 | 31 << 6);
        assert_eq!(spectrum(64), 31 << 6);
        assert_eq!(spectrum(127), 0x001F);
    }

    #[test]
    fn color_places_green_in_top_bits() {
        let color = spectrum_color(63);
        assert_eq!(color.r(), 0);
        assert_eq!(color.g(), 62);
        assert_eq!(color.b(), 0);
        assert_eq!(spectrum_color(0), RED);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(spectrum(200), spectrum(127));
        assert_eq!(spectrum(u8::MAX), spectrum(SPECTRUM_MAX));
    }

    #[test]
    fn each_step_changes_one_channel_by_at_most_one() {
        for value in 0..SPECTRUM_MAX {
            let a = spectrum_channels(value);
            let b = spectrum_channels(value + 1);
            let delta = (a.red as i16 - b.red as i16).abs()
                + (a.green as i16 - b.green as i16).abs()
                + (a.blue as i16 - b.blue as i16).abs();
            assert!(delta <= 1, "jump between {} and {}", value, value + 1);
        }
    }
}
