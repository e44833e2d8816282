//! Layout and thresholds of the rain graph

use embedded_graphics::prelude::Point;

/// Top-left corner of the plot area
pub const GRAPH_ORIGIN: Point = Point::new(40, 40);

/// Plot width: 23 steps of 7 columns
pub const GRAPH_WIDTH_PX: i32 = 161;

/// Plot height; intensity equal to the scale ceiling reaches the top
pub const GRAPH_HEIGHT_PX: i32 = 160;

/// Interpolated columns between two consecutive readings
pub const COLUMNS_PER_STEP: i32 = 7;

/// Below this maximum (mm/h) the graph is replaced by a message
pub const NO_RAIN_EPSILON_MM: f32 = 0.01;

/// Left edge of the reference line labels
pub(super) const LABEL_X: i32 = 5;

/// Top of the first line of the no-rain message
pub(super) const NO_RAIN_MESSAGE_Y: i32 = 118;

/// Line spacing of the no-rain message
pub(super) const NO_RAIN_LINE_HEIGHT_PX: i32 = 22;
