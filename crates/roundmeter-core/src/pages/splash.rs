//! Start-up screen

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::String;

use super::constants::{
    PROJECT_URL, SPLASH_FIRST_LINE_Y, SPLASH_LEFT_X, SPLASH_LINE_HEIGHT_PX, SPLASH_TITLE_Y,
    SPLASH_URL_Y,
};
use crate::VERSION;
use crate::config::Config;
use crate::sensors::SensorError;
use crate::ui::CENTER_X;
use crate::ui::colors::{BLACK, RED, SKY_BLUE, YELLOW};
use crate::ui::text::{Label, TextSize};

/// Title, project link and the configuration in use, plus the outcome of
/// the sensor start-up.
pub fn draw_splash<D: DrawTarget<Color = Rgb565>>(
    config: &Config,
    sensor: Result<(), SensorError>,
    display: &mut D,
) -> Result<(), D::Error> {
    display.clear(BLACK)?;

    let mut title: String<32> = String::new();
    write!(title, "CO2 meter {}", VERSION).ok();
    Label::new(&title, TextSize::Medium)
        .with_color(RED)
        .centered()
        .draw_at(Point::new(CENTER_X, SPLASH_TITLE_Y), display)?;
    Label::new(PROJECT_URL, TextSize::Small)
        .with_color(SKY_BLUE)
        .centered()
        .draw_at(Point::new(CENTER_X, SPLASH_URL_Y), display)?;

    let mut station: String<32> = String::new();
    write!(station, "Station  {}", config.weather.station_id).ok();
    let mut rain: String<64> = String::new();
    write!(rain, "Rain @ {}", config.rain.query).ok();
    let mut sensor_line: String<32> = String::new();
    match sensor {
        Ok(()) => write!(sensor_line, "Sensor   ready").ok(),
        Err(e) => write!(sensor_line, "Sensor   FAILED ({})", e.code()).ok(),
    };

    let lines = [
        "Starting...",
        station.as_str(),
        rain.as_str(),
        sensor_line.as_str(),
    ];
    for (row, text) in lines.into_iter().enumerate() {
        let y = SPLASH_FIRST_LINE_Y + row as i32 * SPLASH_LINE_HEIGHT_PX;
        Label::new(text, TextSize::Small)
            .with_color(YELLOW)
            .draw_at(Point::new(SPLASH_LEFT_X, y), display)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;

    fn yellow_rows(display: &FrameBuffer) -> usize {
        (0..240)
            .filter(|y| (0..240).any(|x| display.pixel(x, *y) == Some(YELLOW)))
            .count()
    }

    #[test]
    fn lists_configuration() {
        let mut display = FrameBuffer::new();
        draw_splash(&Config::default(), Ok(()), &mut display).unwrap();

        let title_lit = (40..55).any(|y| (0..240).any(|x| display.pixel(x, y) == Some(RED)));
        assert!(title_lit);
        assert!(yellow_rows(&display) > 0);
    }

    #[test]
    fn failed_sensor_line_is_drawn() {
        let mut ready = FrameBuffer::new();
        draw_splash(&Config::default(), Ok(()), &mut ready).unwrap();
        let mut failed = FrameBuffer::new();
        draw_splash(&Config::default(), Err(SensorError::Timeout), &mut failed).unwrap();

        let sensor_row = SPLASH_FIRST_LINE_Y + 3 * SPLASH_LINE_HEIGHT_PX;
        let differs = (sensor_row..sensor_row + 10)
            .flat_map(|y| (0..240).map(move |x| (x, y)))
            .any(|(x, y)| ready.pixel(x, y) != failed.pixel(x, y));
        assert!(differs);
    }
}
