//! Segmented ring gauge
//!
//! A 300° ring of 60 five-degree segments. The value is mapped linearly onto
//! the sweep and every segment starting below the mapped angle is filled in
//! its scheme color, the rest in light grey. The number sits in the middle
//! of the ring in the color of the last filled segment, with the unit label
//! underneath.
//!
//! ```ignore
//! let gauge = RingGauge::new(Point::new(120, 120), 120, "CO2")
//!     .with_range(0, 2400)
//!     .with_scheme(ColorScheme::ThreeZone);
//! gauge.draw(co2_ppm, display)?;
//! ```

pub mod constants;
mod scheme;

pub use scheme::ColorScheme;

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Triangle};

use crate::ui::colors::{BLACK, LIGHT_GREY, WHITE};
use crate::ui::text::{Label, TextSize};
use constants::{
    DEG_TO_RAD, HALF_SWEEP_DEG, LARGE_RADIUS_THRESHOLD_PX, LARGE_UNIT_OFFSET_Y,
    LARGE_VALUE_OFFSET, RING_WIDTH_DIVISOR, SEGMENT_COUNT, SEGMENT_DEG, SMALL_UNIT_OFFSET_Y,
    SMALL_VALUE_OFFSET,
};

/// Integer linear map of `x` from `in_min..in_max` onto `out_min..out_max`.
///
/// Truncates toward zero and does not clamp. An empty input range maps
/// everything to `out_min`.
pub fn map_range(x: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    if in_max == in_min {
        return out_min;
    }
    let scaled = (x as i64 - in_min as i64) * (out_max as i64 - out_min as i64)
        / (in_max as i64 - in_min as i64)
        + out_min as i64;
    scaled.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Start angle of every segment, from -150° up to 145°.
pub fn segment_angles() -> impl Iterator<Item = i32> {
    (0..SEGMENT_COUNT as i32).map(|index| -HALF_SWEEP_DEG + index * SEGMENT_DEG)
}

#[derive(Debug, Clone, Copy)]
pub struct RingGauge<'a> {
    center: Point,
    radius: u32,
    min: i32,
    max: i32,
    unit: &'a str,
    scheme: ColorScheme,
}

impl<'a> RingGauge<'a> {
    /// Gauge over `0..100` in the full spectrum.
    pub fn new(center: Point, radius: u32, unit: &'a str) -> Self {
        Self {
            center,
            radius,
            min: 0,
            max: 100,
            unit,
            scheme: ColorScheme::Spectrum,
        }
    }

    pub fn with_range(mut self, min: i32, max: i32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Angle the value maps to. Values outside the range map beyond the
    /// sweep, which fills all or none of the ring.
    pub fn angle_for(&self, value: i32) -> i32 {
        map_range(value, self.min, self.max, -HALF_SWEEP_DEG, HALF_SWEEP_DEG)
    }

    /// Number of filled segments for `value`, always within `0..=60`.
    pub fn filled_segments(&self, value: i32) -> usize {
        let angle = self.angle_for(value);
        segment_angles().filter(|start| *start < angle).count()
    }

    /// Color of the readout: the last filled segment, light grey if none.
    pub fn readout_color(&self, value: i32) -> Rgb565 {
        let angle = self.angle_for(value);
        segment_angles()
            .filter(|start| *start < angle)
            .last()
            .map_or(LIGHT_GREY, |start| self.scheme.color_at(start))
    }

    fn is_large(&self) -> bool {
        self.radius > LARGE_RADIUS_THRESHOLD_PX
    }

    /// Point on the circle of `radius` around the center at `angle` degrees.
    fn polar(&self, radius: i32, angle: i32) -> Point {
        let radians = (angle - 90) as f32 * DEG_TO_RAD;
        Point::new(
            (libm::cosf(radians) * radius as f32) as i32 + self.center.x,
            (libm::sinf(radians) * radius as f32) as i32 + self.center.y,
        )
    }

    pub fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        value: i32,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let outer = self.radius as i32;
        let inner = outer - (self.radius / RING_WIDTH_DIVISOR) as i32;
        let angle = self.angle_for(value);

        for start in segment_angles() {
            let color = if start < angle {
                self.scheme.color_at(start)
            } else {
                LIGHT_GREY
            };
            let style = PrimitiveStyle::with_fill(color);

            let inner_start = self.polar(inner, start);
            let outer_start = self.polar(outer, start);
            let inner_end = self.polar(inner, start + SEGMENT_DEG);
            let outer_end = self.polar(outer, start + SEGMENT_DEG);

            Triangle::new(inner_start, outer_start, inner_end)
                .into_styled(style)
                .draw(display)?;
            Triangle::new(outer_start, inner_end, outer_end)
                .into_styled(style)
                .draw(display)?;
        }

        self.draw_readout(value, display)
    }

    fn draw_readout<D: DrawTarget<Color = Rgb565>>(
        &self,
        value: i32,
        display: &mut D,
    ) -> Result<(), D::Error> {
        // Surrounding spaces blank out wider digits of the previous reading.
        let mut text: heapless::String<16> = heapless::String::new();
        write!(text, " {} ", value).ok();

        let (value_size, unit_size, value_offset, unit_offset_y) = if self.is_large() {
            (
                TextSize::Large,
                TextSize::Medium,
                LARGE_VALUE_OFFSET,
                LARGE_UNIT_OFFSET_Y,
            )
        } else {
            (
                TextSize::Medium,
                TextSize::Small,
                SMALL_VALUE_OFFSET,
                SMALL_UNIT_OFFSET_Y,
            )
        };

        Label::new(&text, value_size)
            .with_color(self.readout_color(value))
            .with_background(BLACK)
            .centered()
            .draw_at(self.center + Point::new(value_offset.0, value_offset.1), display)?;

        Label::new(self.unit, unit_size)
            .with_color(WHITE)
            .with_background(BLACK)
            .centered()
            .draw_at(self.center + Point::new(0, unit_offset_y), display)
    }
}
