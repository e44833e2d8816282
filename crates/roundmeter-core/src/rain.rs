//! Two-hour rain forecast series
//!
//! The buienradar rain text has one line per five minutes, `<code>|<HH:MM>`,
//! where the code is a logarithmic radar reflectivity value (000 = dry,
//! 077 = 0.1 mm/h, 109 = 1 mm/h, 255 = cloudburst).

use log::debug;

use crate::extract::to_f32;

/// Number of readings in one forecast (two hours at five minute steps)
pub const RAIN_READINGS: usize = 24;

/// Convert a radar code to rain intensity in mm/hour: `10^((code - 109) / 32)`.
pub fn mm_per_hour(code: f32) -> f32 {
    libm::powf(10.0, (code - 109.0) / 32.0)
}

/// Fixed-length forecast of rain intensities in mm/hour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainSeries {
    intensities: [f32; RAIN_READINGS],
    max: f32,
}

impl Default for RainSeries {
    fn default() -> Self {
        Self {
            intensities: [0.0; RAIN_READINGS],
            max: 0.0,
        }
    }
}

impl RainSeries {
    /// Build a series from forecast text.
    ///
    /// Every line up to the 24th takes a slot. Lines without a `|` separator
    /// contribute zero; a code that is not a number is read as code 0. Slots
    /// beyond the last line stay zero and lines after the 24th are ignored.
    pub fn parse(payload: &str) -> Self {
        let mut series = Self::default();
        let mut lines_read = 0;

        for (slot, line) in series.intensities.iter_mut().zip(payload.lines()) {
            lines_read += 1;
            if let Some((code, _time)) = line.split_once('|') {
                *slot = mm_per_hour(to_f32(code));
                series.max = series.max.max(*slot);
            }
        }

        debug!(
            "Parsed {} rain forecast lines, max {} mm/h",
            lines_read, series.max
        );
        series
    }

    /// Series from already converted intensities.
    pub fn from_intensities(intensities: [f32; RAIN_READINGS]) -> Self {
        let max = intensities.iter().copied().fold(0.0, f32::max);
        Self { intensities, max }
    }

    pub fn intensities(&self) -> &[f32; RAIN_READINGS] {
        &self.intensities
    }

    /// Largest intensity in the series.
    pub fn max(&self) -> f32 {
        self.max
    }
}
