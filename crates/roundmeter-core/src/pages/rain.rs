//! Rain forecast screen

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::String;

use super::constants::{
    FOOTER_FIRST_LINE_Y, FOOTER_SECOND_LINE_Y, HEADER_FIRST_LINE_Y, HEADER_SECOND_LINE_Y,
};
use crate::rain::RainSeries;
use crate::ui::colors::{BLACK, SKY_BLUE};
use crate::ui::components::RainGraph;
use crate::ui::text::{Label, TextSize};
use crate::ui::CENTER_X;
use crate::weather::WeatherSnapshot;

/// Rainfall of the last day from the weather feed above the two-hour
/// forecast graph.
pub fn draw_rain<D: DrawTarget<Color = Rgb565>>(
    snapshot: &WeatherSnapshot,
    series: &RainSeries,
    display: &mut D,
) -> Result<(), D::Error> {
    display.clear(BLACK)?;

    let mut fallen: String<24> = String::new();
    write!(fallen, "{} mm", snapshot.rain_last_24h).ok();
    for (text, y) in [
        (fallen.as_str(), HEADER_FIRST_LINE_Y),
        ("Last 24 hours", HEADER_SECOND_LINE_Y),
        ("Rain next 2 hours", FOOTER_FIRST_LINE_Y),
        ("buienradar.nl", FOOTER_SECOND_LINE_Y),
    ] {
        Label::new(text, TextSize::Small)
            .with_color(SKY_BLUE)
            .centered()
            .draw_at(Point::new(CENTER_X, y), display)?;
    }

    RainGraph::default().draw(series, display)
}
