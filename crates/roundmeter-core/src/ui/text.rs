//! Text labels on the fixed screen layouts
//!
//! All positions refer to the top edge of the text. Centered labels are
//! centered horizontally on the given x coordinate.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder, ascii, iso_8859_1};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use super::colors::WHITE;

/// Text size variants
///
/// - `Small`: 6x10 font
/// - `Medium`: 9x15 font
/// - `Large`: 10x20 font
///
/// Medium and large use the ISO 8859-1 glyph set so `°` renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Small,
    Medium,
    Large,
}

impl TextSize {
    pub fn font(&self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Small => &ascii::FONT_6X10,
            TextSize::Medium => &iso_8859_1::FONT_9X15,
            TextSize::Large => &iso_8859_1::FONT_10X20,
        }
    }
}

/// A one-shot styled string.
///
/// ```ignore
/// Label::new("Pressure", TextSize::Small)
///     .with_color(YELLOW)
///     .draw_at(Point::new(35, 108), display)?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Label<'a> {
    text: &'a str,
    size: TextSize,
    color: Rgb565,
    background: Option<Rgb565>,
    alignment: Alignment,
}

impl<'a> Label<'a> {
    pub fn new(text: &'a str, size: TextSize) -> Self {
        Self {
            text,
            size,
            color: WHITE,
            background: None,
            alignment: Alignment::Left,
        }
    }

    pub fn with_color(mut self, color: Rgb565) -> Self {
        self.color = color;
        self
    }

    /// Paint glyph cells with `background` so the label overwrites what was
    /// there before.
    pub fn with_background(mut self, background: Rgb565) -> Self {
        self.background = Some(background);
        self
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    pub fn draw_at<D: DrawTarget<Color = Rgb565>>(
        &self,
        position: Point,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let mut character_style = MonoTextStyleBuilder::new()
            .font(self.size.font())
            .text_color(self.color);
        if let Some(background) = self.background {
            character_style = character_style.background_color(background);
        }
        let text_style = TextStyleBuilder::new()
            .alignment(self.alignment)
            .baseline(Baseline::Top)
            .build();

        Text::with_text_style(self.text, position, character_style.build(), text_style)
            .draw(display)?;
        Ok(())
    }
}
