//! Weather symbols and their bitmaps

use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use log::warn;

/// Width and height of a symbol bitmap.
pub const SYMBOL_SIZE_PX: u32 = 50;

/// Bytes of one big-endian RGB565 symbol bitmap.
const SYMBOL_BYTES: usize = (SYMBOL_SIZE_PX * SYMBOL_SIZE_PX * 2) as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherSymbol {
    Sunny,
    PartlyCloudy,
    Cloudy,
    HeavilyCloudy,
    CloudyNight,
    Thunder,
    Snow,
    Showers,
    Fog,
    Rain,
    Hail,
}

impl WeatherSymbol {
    pub const ALL: [WeatherSymbol; 11] = [
        WeatherSymbol::Sunny,
        WeatherSymbol::PartlyCloudy,
        WeatherSymbol::Cloudy,
        WeatherSymbol::HeavilyCloudy,
        WeatherSymbol::CloudyNight,
        WeatherSymbol::Thunder,
        WeatherSymbol::Snow,
        WeatherSymbol::Showers,
        WeatherSymbol::Fog,
        WeatherSymbol::Rain,
        WeatherSymbol::Hail,
    ];

    /// Symbol for a buienradar icon code. Codes without a symbol of their
    /// own (night variants other than `cc`, etc.) map to `None`.
    pub fn from_icon_code(code: &str) -> Option<Self> {
        let symbol = match code {
            "a" => WeatherSymbol::Sunny,
            "j" => WeatherSymbol::PartlyCloudy,
            "b" | "d" | "f" => WeatherSymbol::Cloudy,
            "c" => WeatherSymbol::HeavilyCloudy,
            "cc" => WeatherSymbol::CloudyNight,
            "g" | "s" => WeatherSymbol::Thunder,
            "t" | "u" | "v" => WeatherSymbol::Snow,
            "m" => WeatherSymbol::Showers,
            "n" => WeatherSymbol::Fog,
            "q" => WeatherSymbol::Rain,
            "w" => WeatherSymbol::Hail,
            _ => return None,
        };
        Some(symbol)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Optional bitmap per symbol.
///
/// Bitmaps are 50x50 raw RGB565 in big-endian byte order. Symbols without
/// a bitmap are simply not drawn.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolAtlas {
    bitmaps: [Option<&'static [u8]>; WeatherSymbol::ALL.len()],
}

impl SymbolAtlas {
    pub const fn empty() -> Self {
        Self {
            bitmaps: [None; WeatherSymbol::ALL.len()],
        }
    }

    /// Register the bitmap of `symbol`. Data of the wrong size is ignored.
    pub fn with_bitmap(mut self, symbol: WeatherSymbol, data: &'static [u8]) -> Self {
        if data.len() == SYMBOL_BYTES {
            self.bitmaps[symbol.index()] = Some(data);
        } else {
            warn!(
                "Ignoring {:?} bitmap of {} bytes, expected {}",
                symbol,
                data.len(),
                SYMBOL_BYTES
            );
        }
        self
    }

    pub fn bitmap(&self, symbol: WeatherSymbol) -> Option<&'static [u8]> {
        self.bitmaps[symbol.index()]
    }

    /// Draw the symbol for `icon_code` with its top-left corner at
    /// `position`. Returns whether anything was drawn.
    pub fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        icon_code: &str,
        position: Point,
        display: &mut D,
    ) -> Result<bool, D::Error> {
        let Some(data) = WeatherSymbol::from_icon_code(icon_code).and_then(|s| self.bitmap(s))
        else {
            return Ok(false);
        };
        let raw = ImageRaw::<Rgb565>::new(data, SYMBOL_SIZE_PX);
        Image::new(&raw, position).draw(display)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;
    use crate::ui::colors::BLACK;

    // Solid red: 0xF800 big-endian
    static RED_SYMBOL: [u8; SYMBOL_BYTES] = {
        let mut data = [0u8; SYMBOL_BYTES];
        let mut i = 0;
        while i < SYMBOL_BYTES {
            data[i] = 0xF8;
            i += 2;
        }
        data
    };

    #[test]
    fn icon_codes_map_to_symbols() {
        assert_eq!(WeatherSymbol::from_icon_code("a"), Some(WeatherSymbol::Sunny));
        assert_eq!(
            WeatherSymbol::from_icon_code("j"),
            Some(WeatherSymbol::PartlyCloudy)
        );
        for code in ["b", "d", "f"] {
            assert_eq!(
                WeatherSymbol::from_icon_code(code),
                Some(WeatherSymbol::Cloudy)
            );
        }
        assert_eq!(
            WeatherSymbol::from_icon_code("c"),
            Some(WeatherSymbol::HeavilyCloudy)
        );
        assert_eq!(
            WeatherSymbol::from_icon_code("cc"),
            Some(WeatherSymbol::CloudyNight)
        );
        for code in ["g", "s"] {
            assert_eq!(
                WeatherSymbol::from_icon_code(code),
                Some(WeatherSymbol::Thunder)
            );
        }
        for code in ["t", "u", "v"] {
            assert_eq!(WeatherSymbol::from_icon_code(code), Some(WeatherSymbol::Snow));
        }
        assert_eq!(
            WeatherSymbol::from_icon_code("m"),
            Some(WeatherSymbol::Showers)
        );
        assert_eq!(WeatherSymbol::from_icon_code("n"), Some(WeatherSymbol::Fog));
        assert_eq!(WeatherSymbol::from_icon_code("q"), Some(WeatherSymbol::Rain));
        assert_eq!(WeatherSymbol::from_icon_code("w"), Some(WeatherSymbol::Hail));
    }

    #[test]
    fn unknown_codes_have_no_symbol() {
        for code in ["", "aa", "r", "C", "jj"] {
            assert_eq!(WeatherSymbol::from_icon_code(code), None, "{:?}", code);
        }
    }

    #[test]
    fn atlas_draws_registered_bitmap() {
        let atlas = SymbolAtlas::empty().with_bitmap(WeatherSymbol::Rain, &RED_SYMBOL);
        let mut display = FrameBuffer::new();

        assert_eq!(atlas.draw("q", Point::new(95, 10), &mut display), Ok(true));
        assert_eq!(display.pixel(95, 10), Some(Rgb565::RED));
        assert_eq!(display.pixel(144, 59), Some(Rgb565::RED));
        assert_eq!(display.pixel(145, 60), Some(BLACK));
    }

    #[test]
    fn missing_bitmap_draws_nothing() {
        let atlas = SymbolAtlas::empty();
        let mut display = FrameBuffer::new();
        assert_eq!(atlas.draw("q", Point::new(95, 10), &mut display), Ok(false));
        assert_eq!(atlas.draw("zz", Point::new(95, 10), &mut display), Ok(false));
        assert!(!display.is_dirty());
    }

    #[test]
    fn wrongly_sized_bitmap_is_ignored() {
        static SHORT: [u8; 10] = [0; 10];
        let atlas = SymbolAtlas::empty().with_bitmap(WeatherSymbol::Fog, &SHORT);
        assert_eq!(atlas.bitmap(WeatherSymbol::Fog), None);
    }
}
