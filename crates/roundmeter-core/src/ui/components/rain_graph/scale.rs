//! Vertical scale selection

use embedded_graphics::pixelcolor::Rgb565;

use super::constants::NO_RAIN_EPSILON_MM;
use crate::ui::colors::{BLUE, MAGENTA, RED};

/// Fixed vertical scales, picked from the forecast maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainScale {
    /// Up to 5 mm/h
    Light,
    /// Up to 20 mm/h
    Moderate,
    /// Up to 100 mm/h
    Heavy,
}

impl RainScale {
    /// Scale for a forecast whose largest intensity is `max_mm`, or `None`
    /// when no rain is expected at all.
    pub fn select(max_mm: f32) -> Option<Self> {
        if max_mm.is_nan() || max_mm < NO_RAIN_EPSILON_MM {
            None
        } else if max_mm <= 5.0 {
            Some(RainScale::Light)
        } else if max_mm <= 20.0 {
            Some(RainScale::Moderate)
        } else {
            Some(RainScale::Heavy)
        }
    }

    /// Intensity at the top of the graph in mm/h.
    pub fn ceiling_mm(&self) -> f32 {
        match self {
            RainScale::Light => 5.0,
            RainScale::Moderate => 20.0,
            RainScale::Heavy => 100.0,
        }
    }

    pub fn bar_color(&self) -> Rgb565 {
        match self {
            RainScale::Light => BLUE,
            RainScale::Moderate => MAGENTA,
            RainScale::Heavy => RED,
        }
    }

    /// Values of the gridlines at one and two thirds of the height, rounded
    /// to one decimal.
    pub fn reference_values(&self) -> (f32, f32) {
        let ceiling = self.ceiling_mm();
        (
            libm::roundf(ceiling * 10.0 / 3.0) / 10.0,
            libm::roundf(ceiling * 20.0 / 3.0) / 10.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_follows_maximum() {
        assert_eq!(RainScale::select(3.0), Some(RainScale::Light));
        assert_eq!(RainScale::select(5.0), Some(RainScale::Light));
        assert_eq!(RainScale::select(12.0), Some(RainScale::Moderate));
        assert_eq!(RainScale::select(20.0), Some(RainScale::Moderate));
        assert_eq!(RainScale::select(45.0), Some(RainScale::Heavy));
    }

    #[test]
    fn dry_forecast_has_no_scale() {
        assert_eq!(RainScale::select(0.0), None);
        assert_eq!(RainScale::select(0.009), None);
        assert_eq!(RainScale::select(f32::NAN), None);
        assert_eq!(RainScale::select(0.01), Some(RainScale::Light));
    }

    #[test]
    fn each_scale_has_its_own_color() {
        assert_eq!(RainScale::Light.bar_color(), BLUE);
        assert_eq!(RainScale::Moderate.bar_color(), MAGENTA);
        assert_eq!(RainScale::Heavy.bar_color(), RED);
    }

    #[test]
    fn reference_values_round_to_one_decimal() {
        assert_eq!(RainScale::Light.reference_values(), (1.7, 3.3));
        assert_eq!(RainScale::Moderate.reference_values(), (6.7, 13.3));
        assert_eq!(RainScale::Heavy.reference_values(), (33.3, 66.7));
    }
}
