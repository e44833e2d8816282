//! Station block lookup in the feed payload
//!
//! The feed is one large JSON document. Rather than parse it, the pipeline
//! narrows the text in stages and only then picks fields:
//!
//! 1. from `"actual":` onward (sunrise and sunset live near its start)
//! 2. from `"stationid":<id>` up to the closing `}` of that station
//!
//! A missing marker narrows to the empty string, after which every field is
//! empty.

use core::fmt::Write;

use log::{debug, warn};
use thiserror_no_std::Error;

use super::WeatherSnapshot;
use crate::extract::{FieldExtractor, QuasiJson, bounded, prefix};

const ACTUAL_MARKER: &str = "\"actual\":";

/// Sunrise is looked up in this many leading bytes of the actual block.
const SUNRISE_WINDOW: usize = 200;

/// Sunset is looked up in this many leading bytes of the actual block.
const SUNSET_WINDOW: usize = 300;

const ICON_PREFIX: &str = "30x30/";
const ICON_SUFFIX: &str = ".png";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherError {
    #[error("Station {station_id} not found in weather feed")]
    StationNotFound { station_id: u32 },
}

pub struct WeatherPipeline<E: FieldExtractor = QuasiJson> {
    extractor: E,
    station_id: u32,
    station_marker: heapless::String<32>,
}

impl WeatherPipeline<QuasiJson> {
    pub fn new(station_id: u32) -> Self {
        Self::with_extractor(station_id, QuasiJson)
    }
}

impl<E: FieldExtractor> WeatherPipeline<E> {
    pub fn with_extractor(station_id: u32, extractor: E) -> Self {
        let mut station_marker = heapless::String::new();
        write!(station_marker, "\"stationid\":{}", station_id).ok();
        Self {
            extractor,
            station_id,
            station_marker,
        }
    }

    pub fn station_id(&self) -> u32 {
        self.station_id
    }

    fn field<'a>(&self, key: &str, text: &'a str) -> &'a str {
        self.extractor.find(key, text).unwrap_or("")
    }

    /// The station block of `payload`, empty when it cannot be found.
    fn station_block<'a>(&self, actual: &'a str) -> &'a str {
        let station = narrow_from(actual, &self.station_marker);
        match station.find('}') {
            Some(end) => &station[..end],
            None => station,
        }
    }

    /// Extract every field. Missing parts of the payload give empty fields;
    /// the status code is left at 0.
    pub fn parse(&self, payload: &str) -> WeatherSnapshot {
        let actual = narrow_from(payload, ACTUAL_MARKER);
        let station = self.station_block(actual);

        WeatherSnapshot {
            timestamp: bounded(clock_time(self.field("timestamp", station))),
            description: bounded(self.field("weatherdescription", station)),
            icon: bounded(icon_code(self.field("iconurl", station))),
            wind_direction: bounded(self.field("winddirection", station)),
            air_pressure: bounded(self.field("airpressure", station)),
            temperature: bounded(self.field("temperature", station)),
            wind_speed: bounded(integer_part(self.field("windspeed", station))),
            humidity: bounded(self.field("humidity", station)),
            precipitation: bounded(self.field("precipitation", station)),
            sun_power: bounded(integer_part(self.field("sunpower", station))),
            rain_last_24h: bounded(self.field("rainFallLast24Hour", station)),
            rain_last_hour: bounded(self.field("rainFallLastHour", station)),
            sunrise: bounded(clock_time(
                self.field("sunrise", prefix(actual, SUNRISE_WINDOW)),
            )),
            sunset: bounded(clock_time(
                self.field("sunset", prefix(actual, SUNSET_WINDOW)),
            )),
            http_status: 0,
        }
    }

    /// Parse `payload` into `snapshot`.
    ///
    /// The snapshot is only replaced when the station block was found, so a
    /// truncated or unexpected payload keeps the previous conditions on
    /// screen. The status code of `snapshot` is kept as is.
    pub fn run(&self, payload: &str, snapshot: &mut WeatherSnapshot) -> Result<(), WeatherError> {
        let actual = narrow_from(payload, ACTUAL_MARKER);
        if self.station_block(actual).is_empty() {
            warn!("Station {} not found in weather feed", self.station_id);
            return Err(WeatherError::StationNotFound {
                station_id: self.station_id,
            });
        }

        let http_status = snapshot.http_status;
        *snapshot = WeatherSnapshot {
            http_status,
            ..self.parse(payload)
        };
        debug!(
            "Weather at {}: {} {} °C",
            snapshot.timestamp, snapshot.description, snapshot.temperature
        );
        Ok(())
    }
}

/// `text` from the first occurrence of `marker`, or empty.
fn narrow_from<'a>(text: &'a str, marker: &str) -> &'a str {
    text.find(marker).map_or("", |at| &text[at..])
}

/// `HH:MM` out of an ISO timestamp like `2022-01-02T12:30:00`.
fn clock_time(timestamp: &str) -> &str {
    timestamp.get(11..16).unwrap_or("")
}

/// `c` out of `https://.../30x30/c.png`.
fn icon_code(url: &str) -> &str {
    let Some(start) = url.find(ICON_PREFIX) else {
        return "";
    };
    let code = &url[start + ICON_PREFIX.len()..];
    match code.find(ICON_SUFFIX) {
        Some(end) => &code[..end],
        None => code,
    }
}

/// Text before the first `.`, all of it when there is none.
fn integer_part(number: &str) -> &str {
    number.split('.').next().unwrap_or("")
}
