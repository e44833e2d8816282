//! SDL window standing in for the round panel

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use roundmeter_core::framebuffer::FrameBuffer;
use roundmeter_core::platform::Canvas;
use roundmeter_core::ui::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX};

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Returned from drawing once the window has been closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowClosed;

impl From<Infallible> for WindowClosed {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Screens draw into a [`FrameBuffer`]; [`Canvas::present`] flushes its
/// dirty region into the window like the firmware does into the panel.
pub struct WindowCanvas {
    framebuffer: FrameBuffer,
    display: SimulatorDisplay<Rgb565>,
    window: Window,
    closed: bool,
}

impl WindowCanvas {
    pub fn new(title: &str) -> Self {
        let display = SimulatorDisplay::<Rgb565>::new(Size::new(
            DISPLAY_WIDTH_PX as u32,
            DISPLAY_HEIGHT_PX as u32,
        ));
        let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
        Self {
            framebuffer: FrameBuffer::new(),
            display,
            window: Window::new(title, &output_settings),
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn check_open(&self) -> Result<(), WindowClosed> {
        if self.closed {
            Err(WindowClosed)
        } else {
            Ok(())
        }
    }
}

impl OriginDimensions for WindowCanvas {
    fn size(&self) -> Size {
        self.framebuffer.size()
    }
}

impl DrawTarget for WindowCanvas {
    type Color = Rgb565;
    type Error = WindowClosed;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.check_open()?;
        Ok(self.framebuffer.draw_iter(pixels)?)
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        self.check_open()?;
        Ok(self.framebuffer.fill_contiguous(area, colors)?)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.check_open()?;
        Ok(self.framebuffer.fill_solid(area, color)?)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.check_open()?;
        Ok(self.framebuffer.clear(color)?)
    }
}

impl Canvas for WindowCanvas {
    /// Show the frame and handle window events. `Q`, `Esc` or closing the
    /// window ends the simulation.
    fn present(&mut self) -> Result<(), Self::Error> {
        self.check_open()?;
        self.framebuffer.flush(&mut self.display)?;
        // The window is created lazily by the first update; events() panics
        // before that.
        self.window.update(&self.display);
        for event in self.window.events() {
            match event {
                SimulatorEvent::Quit => self.closed = true,
                SimulatorEvent::KeyDown { keycode, .. }
                    if keycode == Keycode::Q || keycode == Keycode::Escape =>
                {
                    self.closed = true
                }
                _ => {}
            }
        }
        self.check_open()
    }
}
