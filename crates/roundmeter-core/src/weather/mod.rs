//! Current weather conditions from the buienradar station feed

mod pipeline;
mod symbols;

pub use pipeline::{WeatherError, WeatherPipeline};
pub use symbols::{SYMBOL_SIZE_PX, SymbolAtlas, WeatherSymbol};

use heapless::String;

/// Descriptions this long or longer are split over two lines.
pub const DESCRIPTION_WRAP_COLUMN: usize = 30;

/// Last successfully parsed conditions of one station.
///
/// Values are kept as the feed's text; numbers are only formatted, never
/// computed with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeatherSnapshot {
    /// Measurement time, `HH:MM`
    pub timestamp: String<5>,
    pub description: String<96>,
    /// Symbol code from the icon url, e.g. `c` or `cc`
    pub icon: String<8>,
    pub wind_direction: String<8>,
    pub air_pressure: String<12>,
    pub temperature: String<12>,
    /// Integer part only
    pub wind_speed: String<8>,
    pub humidity: String<8>,
    pub precipitation: String<8>,
    /// Integer part only
    pub sun_power: String<8>,
    pub rain_last_24h: String<12>,
    pub rain_last_hour: String<12>,
    pub sunrise: String<5>,
    pub sunset: String<5>,
    /// Status of the last feed request, 0 before the first one
    pub http_status: u16,
}

impl WeatherSnapshot {
    pub fn symbol(&self) -> Option<WeatherSymbol> {
        WeatherSymbol::from_icon_code(&self.icon)
    }

    /// Description as one or two display lines.
    pub fn description_lines(&self) -> (&str, Option<&str>) {
        wrap_description(&self.description)
    }
}

/// Split a description for the two-line band.
///
/// Text shorter than [`DESCRIPTION_WRAP_COLUMN`] characters stays on one
/// line. Longer text breaks at the last space at or before that column, or
/// hard at the column when the first part has no space.
pub fn wrap_description(text: &str) -> (&str, Option<&str>) {
    if text.chars().count() < DESCRIPTION_WRAP_COLUMN {
        return (text, None);
    }

    let limit = text
        .char_indices()
        .nth(DESCRIPTION_WRAP_COLUMN)
        .map_or(text.len(), |(at, _)| at);

    let (first, second) = if text[limit..].starts_with(' ') {
        (&text[..limit], &text[limit + 1..])
    } else if let Some(at) = text[..limit].rfind(' ') {
        (&text[..at], &text[at + 1..])
    } else {
        (&text[..limit], &text[limit..])
    };

    (first, (!second.is_empty()).then_some(second))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::bounded;

    #[test]
    fn short_description_is_one_line() {
        assert_eq!(wrap_description("Zwaar bewolkt"), ("Zwaar bewolkt", None));
        assert_eq!(wrap_description(""), ("", None));
    }

    #[test]
    fn long_description_breaks_at_last_space() {
        let text = "Half bewolkt met kans op een enkele bui";
        let (first, second) = wrap_description(text);
        assert_eq!(first, "Half bewolkt met kans op een");
        assert_eq!(second, Some("enkele bui"));
    }

    #[test]
    fn space_exactly_at_column_is_used() {
        // 30 characters, then a space
        let text = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaa bbb";
        assert_eq!(
            wrap_description(text),
            ("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", Some("bbb"))
        );
    }

    #[test]
    fn unbroken_description_splits_hard() {
        let text = "abcdefghijklmnopqrstuvwxyzabcdefghij";
        assert_eq!(
            wrap_description(text),
            ("abcdefghijklmnopqrstuvwxyzabcd", Some("efghij"))
        );
    }

    #[test]
    fn snapshot_symbol_from_icon() {
        let mut snapshot = WeatherSnapshot::default();
        assert_eq!(snapshot.symbol(), None);
        snapshot.icon = bounded("cc");
        assert_eq!(snapshot.symbol(), Some(WeatherSymbol::CloudyNight));
    }
}
