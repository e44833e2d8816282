//! Current conditions screen

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use heapless::String;

use super::constants::*;
use crate::ui::colors::{BLACK, DARK_GREY, GREEN_YELLOW, MAROON, WHITE, YELLOW};
use crate::ui::text::{Label, TextSize};
use crate::ui::{CENTER_X, DISPLAY_WIDTH_PX};
use crate::weather::{SymbolAtlas, WeatherSnapshot};

/// Draw the whole weather screen from `snapshot`.
pub fn draw_weather<D: DrawTarget<Color = Rgb565>>(
    snapshot: &WeatherSnapshot,
    symbols: &SymbolAtlas,
    display: &mut D,
) -> Result<(), D::Error> {
    display.clear(BLACK)?;

    symbols.draw(&snapshot.icon, SYMBOL_POSITION, display)?;

    band(DESCRIPTION_BAND_Y, display)?;
    match snapshot.description_lines() {
        (line, None) => centered(line, DESCRIPTION_Y, GREEN_YELLOW, display)?,
        (first, Some(second)) => {
            centered(first, DESCRIPTION_FIRST_LINE_Y, GREEN_YELLOW, display)?;
            centered(second, DESCRIPTION_SECOND_LINE_Y, GREEN_YELLOW, display)?;
        }
    }

    reading("Pressure", &snapshot.air_pressure, PRESSURE_LABEL, PRESSURE_VALUE, display)?;
    reading("R/H %", &snapshot.humidity, HUMIDITY_LABEL, HUMIDITY_VALUE, display)?;

    band(SUN_BAND_Y, display)?;
    let mut sun: String<48> = String::new();
    write!(sun, "Sunrise {}   Sunset {}", snapshot.sunrise, snapshot.sunset).ok();
    centered(&sun, SUN_TIMES_Y, GREEN_YELLOW, display)?;

    reading("Wind", &snapshot.wind_direction, WIND_LABEL, WIND_VALUE, display)?;
    reading("m/s", &snapshot.wind_speed, WIND_SPEED_LABEL, WIND_SPEED_VALUE, display)?;

    let mut temperature: String<16> = String::new();
    write!(temperature, "{}°", snapshot.temperature).ok();
    reading("Temperature", &temperature, TEMPERATURE_LABEL, TEMPERATURE_VALUE, display)?;
    reading("Sun power", &snapshot.sun_power, SUN_POWER_LABEL, SUN_POWER_VALUE, display)?;

    centered("buienradar.nl", FOOTER_FIRST_LINE_Y, MAROON, display)?;
    let mut footer: String<24> = String::new();
    write!(footer, "@{} rc{}", snapshot.timestamp, snapshot.http_status).ok();
    centered(&footer, FOOTER_SECOND_LINE_Y, MAROON, display)
}

fn band<D: DrawTarget<Color = Rgb565>>(y: i32, display: &mut D) -> Result<(), D::Error> {
    Rectangle::new(
        Point::new(0, y),
        Size::new(DISPLAY_WIDTH_PX as u32, BAND_HEIGHT_PX),
    )
    .into_styled(PrimitiveStyle::with_fill(DARK_GREY))
    .draw(display)
}

fn centered<D: DrawTarget<Color = Rgb565>>(
    text: &str,
    y: i32,
    color: Rgb565,
    display: &mut D,
) -> Result<(), D::Error> {
    Label::new(text, TextSize::Small)
        .with_color(color)
        .centered()
        .draw_at(Point::new(CENTER_X, y), display)
}

/// Small yellow caption with the value in white underneath.
fn reading<D: DrawTarget<Color = Rgb565>>(
    caption: &str,
    value: &str,
    caption_at: Point,
    value_at: Point,
    display: &mut D,
) -> Result<(), D::Error> {
    Label::new(caption, TextSize::Small)
        .with_color(YELLOW)
        .draw_at(caption_at, display)?;
    Label::new(value, TextSize::Medium)
        .with_color(WHITE)
        .draw_at(value_at, display)
}
