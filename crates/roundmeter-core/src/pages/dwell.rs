//! Progress marks shown while a screen dwells

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};

use super::constants::{DWELL_STEP_PX, DWELL_TRACK_END, DWELL_TRACK_START};
use crate::ui::colors::{MAROON, SKY_BLUE};

/// Maroon track at the bottom of the screen, filled with two sky-blue
/// pixels per elapsed second.
pub struct DwellIndicator;

impl DwellIndicator {
    pub fn draw_track<D: DrawTarget<Color = Rgb565>>(display: &mut D) -> Result<(), D::Error> {
        Line::new(DWELL_TRACK_START, DWELL_TRACK_END)
            .into_styled(PrimitiveStyle::with_stroke(MAROON, 1))
            .draw(display)
    }

    /// Mark second `step` (counting from 0) as elapsed.
    pub fn draw_step<D: DrawTarget<Color = Rgb565>>(
        step: u32,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let x = DWELL_TRACK_START.x + step as i32 * DWELL_STEP_PX;
        let y = DWELL_TRACK_START.y;
        display.draw_iter([
            Pixel(Point::new(x, y), SKY_BLUE),
            Pixel(Point::new(x + 1, y), SKY_BLUE),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;

    #[test]
    fn track_spans_thirty_pixels() {
        let mut display = FrameBuffer::new();
        DwellIndicator::draw_track(&mut display).unwrap();
        assert_eq!(display.pixel(105, 230), Some(MAROON));
        assert_eq!(display.pixel(135, 230), Some(MAROON));
        assert_eq!(display.pixel(136, 230), Some(Rgb565::BLACK));
    }

    #[test]
    fn steps_fill_two_of_every_three_pixels() {
        let mut display = FrameBuffer::new();
        DwellIndicator::draw_track(&mut display).unwrap();
        for step in 0..3 {
            DwellIndicator::draw_step(step, &mut display).unwrap();
        }
        assert_eq!(display.pixel(105, 230), Some(SKY_BLUE));
        assert_eq!(display.pixel(106, 230), Some(SKY_BLUE));
        assert_eq!(display.pixel(107, 230), Some(MAROON));
        assert_eq!(display.pixel(111, 230), Some(SKY_BLUE));
        assert_eq!(display.pixel(112, 230), Some(SKY_BLUE));
        assert_eq!(display.pixel(113, 230), Some(MAROON));
    }
}
