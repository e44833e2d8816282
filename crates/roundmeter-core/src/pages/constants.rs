//! Fixed screen layouts
//!
//! All coordinates are for the 240x240 panel; text positions are the top of
//! the text.

use embedded_graphics::prelude::Point;

// ============================================================================
// Dwell indicator
// ============================================================================

/// Left end of the dwell progress track
pub const DWELL_TRACK_START: Point = Point::new(105, 230);

/// Right end of the dwell progress track
pub const DWELL_TRACK_END: Point = Point::new(135, 230);

/// Horizontal distance between two progress marks
pub const DWELL_STEP_PX: i32 = 3;

// ============================================================================
// Weather screen
// ============================================================================

pub(super) const SYMBOL_POSITION: Point = Point::new(95, 10);

/// Dark band behind the description
pub(super) const DESCRIPTION_BAND_Y: i32 = 68;

/// Dark band behind sunrise and sunset
pub(super) const SUN_BAND_Y: i32 = 140;

pub(super) const BAND_HEIGHT_PX: u32 = 32;

pub(super) const DESCRIPTION_Y: i32 = 82;
pub(super) const DESCRIPTION_FIRST_LINE_Y: i32 = 75;
pub(super) const DESCRIPTION_SECOND_LINE_Y: i32 = 89;

pub(super) const SUN_TIMES_Y: i32 = 152;

/// Label of a value; the value itself goes at the matching `*_VALUE` point
pub(super) const WIND_LABEL: Point = Point::new(60, 20);
pub(super) const WIND_VALUE: Point = Point::new(50, 46);
pub(super) const WIND_SPEED_LABEL: Point = Point::new(155, 20);
pub(super) const WIND_SPEED_VALUE: Point = Point::new(155, 46);
pub(super) const PRESSURE_LABEL: Point = Point::new(35, 108);
pub(super) const PRESSURE_VALUE: Point = Point::new(35, 118);
pub(super) const HUMIDITY_LABEL: Point = Point::new(155, 108);
pub(super) const HUMIDITY_VALUE: Point = Point::new(155, 118);
pub(super) const TEMPERATURE_LABEL: Point = Point::new(35, 178);
pub(super) const TEMPERATURE_VALUE: Point = Point::new(35, 193);
pub(super) const SUN_POWER_LABEL: Point = Point::new(155, 178);
pub(super) const SUN_POWER_VALUE: Point = Point::new(155, 193);

// ============================================================================
// Shared header and footer lines
// ============================================================================

pub(super) const HEADER_FIRST_LINE_Y: i32 = 15;
pub(super) const HEADER_SECOND_LINE_Y: i32 = 27;
pub(super) const FOOTER_FIRST_LINE_Y: i32 = 210;
pub(super) const FOOTER_SECOND_LINE_Y: i32 = 220;

// ============================================================================
// Splash screen
// ============================================================================

pub(super) const SPLASH_TITLE_Y: i32 = 40;
pub(super) const SPLASH_URL_Y: i32 = 74;
pub(super) const SPLASH_LEFT_X: i32 = 35;
pub(super) const SPLASH_FIRST_LINE_Y: i32 = 90;
pub(super) const SPLASH_LINE_HEIGHT_PX: i32 = 15;

pub(super) const PROJECT_URL: &str = "github.com/idurz/RoundMeter";
