//! Rain forecast bar graph
//!
//! 24 readings five minutes apart are spread over 161 pixel columns: each of
//! the 23 gaps between two readings is filled with 7 linearly interpolated
//! columns. Every column is a vertical bar from the baseline up to its
//! interpolated height. The vertical scale is picked from the forecast
//! maximum, see [`RainScale`].

pub mod constants;
mod scale;

pub use scale::RainScale;

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

use crate::rain::RainSeries;
use crate::ui::CENTER_X;
use crate::ui::colors::{NAVY, SKY_BLUE, WHITE};
use crate::ui::text::{Label, TextSize};
use constants::{
    COLUMNS_PER_STEP, GRAPH_HEIGHT_PX, GRAPH_ORIGIN, GRAPH_WIDTH_PX, LABEL_X,
    NO_RAIN_LINE_HEIGHT_PX, NO_RAIN_MESSAGE_Y,
};

#[derive(Debug, Clone, Copy)]
pub struct RainGraph {
    origin: Point,
}

impl Default for RainGraph {
    fn default() -> Self {
        Self::new(GRAPH_ORIGIN)
    }
}

impl RainGraph {
    pub fn new(origin: Point) -> Self {
        Self { origin }
    }

    /// y coordinate of the baseline all bars start from
    pub fn baseline_y(&self) -> i32 {
        self.origin.y + GRAPH_HEIGHT_PX
    }

    /// Top of the bar for `intensity` on `scale`.
    ///
    /// Intensities above the ceiling are capped at the top of the plot.
    fn bar_top(&self, intensity: f32, scale: RainScale) -> i32 {
        let height = GRAPH_HEIGHT_PX as f32;
        let top = (height - intensity / scale.ceiling_mm() * height) as i32;
        top.max(0) + self.origin.y
    }

    /// Top y coordinate of every column, left to right.
    pub fn columns<'s>(
        &self,
        series: &'s RainSeries,
        scale: RainScale,
    ) -> impl Iterator<Item = i32> + 's {
        let graph = *self;
        series.intensities().windows(2).flat_map(move |pair| {
            let from = graph.bar_top(pair[0], scale);
            let to = graph.bar_top(pair[1], scale);
            (0..COLUMNS_PER_STEP).map(move |step| (to - from) * step / COLUMNS_PER_STEP + from)
        })
    }

    /// y coordinates of the gridlines at one and two thirds of the height,
    /// top line first.
    pub fn gridline_ys(&self) -> (i32, i32) {
        (
            self.origin.y + GRAPH_HEIGHT_PX / 3,
            self.origin.y + 2 * GRAPH_HEIGHT_PX / 3,
        )
    }

    pub fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        series: &RainSeries,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let Some(scale) = RainScale::select(series.max()) else {
            return self.draw_no_rain(display);
        };

        Rectangle::new(
            self.origin - Point::new(1, 1),
            Size::new(GRAPH_WIDTH_PX as u32 + 1, GRAPH_HEIGHT_PX as u32 + 2),
        )
        .into_styled(PrimitiveStyle::with_stroke(NAVY, 1))
        .draw(display)?;

        let bar_style = PrimitiveStyle::with_stroke(scale.bar_color(), 1);
        let baseline = self.baseline_y();
        for (column, top) in self.columns(series, scale).enumerate() {
            let x = self.origin.x + column as i32;
            Line::new(Point::new(x, baseline), Point::new(x, top))
                .into_styled(bar_style)
                .draw(display)?;
        }

        self.draw_reference_lines(scale, display)
    }

    fn draw_reference_lines<D: DrawTarget<Color = Rgb565>>(
        &self,
        scale: RainScale,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let (high_y, low_y) = self.gridline_ys();
        let (low_value, high_value) = scale.reference_values();
        let right = self.origin.x + GRAPH_WIDTH_PX - 1;
        let style = PrimitiveStyle::with_stroke(WHITE, 1);

        for (y, value) in [(high_y, high_value), (low_y, low_value)] {
            Line::new(Point::new(self.origin.x, y), Point::new(right, y))
                .into_styled(style)
                .draw(display)?;

            let mut text: heapless::String<16> = heapless::String::new();
            write!(text, "{:.1} mm/h", value).ok();
            Label::new(&text, TextSize::Small)
                .with_color(SKY_BLUE)
                .draw_at(Point::new(LABEL_X, y), display)?;
        }
        Ok(())
    }

    fn draw_no_rain<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        for (line, text) in ["No rain expected", "in the next two hours"]
            .into_iter()
            .enumerate()
        {
            Label::new(text, TextSize::Medium)
                .centered()
                .draw_at(
                    Point::new(CENTER_X, NO_RAIN_MESSAGE_Y + line as i32 * NO_RAIN_LINE_HEIGHT_PX),
                    display,
                )?;
        }
        Ok(())
    }
}
