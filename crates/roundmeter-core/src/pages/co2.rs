//! Indoor CO2 gauge screen

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::config::MeterConfig;
use crate::sensors::Co2Reading;
use crate::ui::components::RingGauge;

/// The ring gauge described by `meter`.
pub fn co2_gauge(meter: &MeterConfig) -> RingGauge<'_> {
    RingGauge::new(
        Point::new(meter.center_x, meter.center_y),
        meter.radius,
        &meter.unit,
    )
    .with_range(meter.min_ppm, meter.max_ppm)
    .with_scheme(meter.scheme)
}

/// Redraw the gauge with the latest reading. The screen is not cleared, the
/// gauge overwrites its previous state.
pub fn draw_co2<D: DrawTarget<Color = Rgb565>>(
    reading: &Co2Reading,
    meter: &MeterConfig,
    display: &mut D,
) -> Result<(), D::Error> {
    co2_gauge(meter).draw(reading.ppm, display)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;
    use crate::ui::colors::{GREEN, LIGHT_GREY, RED};

    #[test]
    fn gauge_follows_reading() {
        let meter = MeterConfig::default();
        let mut display = FrameBuffer::new();

        let high = Co2Reading {
            ppm: 2400,
            ..Default::default()
        };
        draw_co2(&high, &meter, &mut display).unwrap();
        assert_eq!(display.pixel(124, 10), Some(RED));

        draw_co2(&Co2Reading::default(), &meter, &mut display).unwrap();
        assert_eq!(display.pixel(124, 10), Some(LIGHT_GREY));
    }

    #[test]
    fn uses_configured_range() {
        let meter = MeterConfig {
            max_ppm: 1000,
            scheme: crate::ui::ColorScheme::Green,
            ..Default::default()
        };
        // 1000 of 0..1000 fills the whole ring
        assert_eq!(co2_gauge(&meter).filled_segments(1000), 60);
        assert_eq!(co2_gauge(&meter).readout_color(500), GREEN);
    }
}
