//! Placeholder weather symbols drawn from discs
//!
//! The device ships with 50x50 artwork per symbol. The simulator draws a
//! sun and a cloud disc per symbol instead, in colors hinting at the kind
//! of weather.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use roundmeter_core::ui::colors::{BLACK, DARK_GREY, LIGHT_GREY, NAVY, SKY_BLUE, WHITE, YELLOW};
use roundmeter_core::weather::{SYMBOL_SIZE_PX, SymbolAtlas, WeatherSymbol};

const SIZE: i32 = SYMBOL_SIZE_PX as i32;

/// Sun (or moon) color and cloud color of a symbol.
fn palette(symbol: WeatherSymbol) -> (Option<Rgb565>, Option<Rgb565>) {
    match symbol {
        WeatherSymbol::Sunny => (Some(YELLOW), None),
        WeatherSymbol::PartlyCloudy => (Some(YELLOW), Some(WHITE)),
        WeatherSymbol::Cloudy => (None, Some(LIGHT_GREY)),
        WeatherSymbol::HeavilyCloudy => (None, Some(DARK_GREY)),
        WeatherSymbol::CloudyNight => (Some(NAVY), Some(DARK_GREY)),
        WeatherSymbol::Thunder => (Some(YELLOW), Some(DARK_GREY)),
        WeatherSymbol::Snow => (None, Some(WHITE)),
        WeatherSymbol::Showers => (Some(YELLOW), Some(SKY_BLUE)),
        WeatherSymbol::Fog => (None, Some(Rgb565::new(20, 40, 20))),
        WeatherSymbol::Rain => (None, Some(SKY_BLUE)),
        WeatherSymbol::Hail => (Some(WHITE), Some(SKY_BLUE)),
    }
}

fn inside(x: i32, y: i32, cx: i32, cy: i32, r: i32) -> bool {
    (x - cx).pow(2) + (y - cy).pow(2) <= r * r
}

/// Big-endian RGB565 bitmap of one symbol.
fn render(symbol: WeatherSymbol) -> Vec<u8> {
    let (sun, cloud) = palette(symbol);
    let mut bytes = Vec::with_capacity((SIZE * SIZE * 2) as usize);
    for y in 0..SIZE {
        for x in 0..SIZE {
            let in_cloud = inside(x, y, 30, 32, 13) || inside(x, y, 16, 36, 9);
            let color = match (cloud, sun) {
                (Some(cloud), _) if in_cloud => cloud,
                (_, Some(sun)) if inside(x, y, 18, 18, 14) => sun,
                _ => BLACK,
            };
            bytes.extend_from_slice(&color.into_storage().to_be_bytes());
        }
    }
    bytes
}

/// An atlas with a generated bitmap for every symbol. The bitmaps live for
/// the rest of the program.
pub fn generated_atlas() -> SymbolAtlas {
    WeatherSymbol::ALL
        .into_iter()
        .fold(SymbolAtlas::empty(), |atlas, symbol| {
            let bitmap: &'static [u8] = Box::leak(render(symbol).into_boxed_slice());
            atlas.with_bitmap(symbol, bitmap)
        })
}
