//! Geometry of the ring gauge
//!
//! Angles are in degrees, 0 at the top and increasing clockwise, so the
//! sweep leaves a 60° gap centered on the bottom of the ring.

/// Half the sweep; values map onto `-HALF_SWEEP_DEG..=HALF_SWEEP_DEG`
pub const HALF_SWEEP_DEG: i32 = 150;

/// Angular width of one ring segment
pub const SEGMENT_DEG: i32 = 5;

/// Number of segments in the 300° sweep
pub const SEGMENT_COUNT: usize = (2 * HALF_SWEEP_DEG / SEGMENT_DEG) as usize;

/// Ring thickness is the radius divided by this
pub const RING_WIDTH_DIVISOR: u32 = 6;

/// Radii above this use the large readout fonts
pub const LARGE_RADIUS_THRESHOLD_PX: u32 = 84;

/// Three-zone scheme: segments starting below this angle are green
pub const THREE_ZONE_GREEN_BELOW_DEG: i32 = -50;

/// Three-zone scheme: segments starting below this angle (and not green)
/// are yellow, the rest red
pub const THREE_ZONE_YELLOW_BELOW_DEG: i32 = 0;

pub(super) const DEG_TO_RAD: f32 = 0.017_453_292;

/// Readout offsets from the ring center for large rings
pub(super) const LARGE_VALUE_OFFSET: (i32, i32) = (-5, -20);
pub(super) const LARGE_UNIT_OFFSET_Y: i32 = 30;

/// Readout offsets from the ring center for small rings
pub(super) const SMALL_VALUE_OFFSET: (i32, i32) = (-5, -20);
pub(super) const SMALL_UNIT_OFFSET_Y: i32 = 5;
