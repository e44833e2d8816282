//! Runtime configuration with the defaults the device ships with.
//!
//! Every field has a default, so a partial file (or none at all) is valid.

use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

use crate::ui::components::gauge::ColorScheme;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub weather: WeatherFeedConfig,
    pub rain: RainFeedConfig,
    pub network: NetworkConfig,
    pub schedule: ScheduleConfig,
    pub meter: MeterConfig,
}

/// The buienradar JSON feed with actual conditions per station.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WeatherFeedConfig {
    pub host: String,
    pub path: String,
    /// Station whose block is read from the feed (6260 = De Bilt).
    pub station_id: u32,
    pub interval_secs: u32,
}

impl Default for WeatherFeedConfig {
    fn default() -> Self {
        Self {
            host: "data.buienradar.nl".to_string(),
            path: "/2.0/feed/json".to_string(),
            station_id: 6260,
            interval_secs: 600,
        }
    }
}

/// The buienradar two-hour rain forecast for one location.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RainFeedConfig {
    pub host: String,
    pub path: String,
    /// Appended verbatim to `path`.
    pub query: String,
    pub interval_secs: u32,
}

impl Default for RainFeedConfig {
    fn default() -> Self {
        Self {
            host: "gpsgadget.buienradar.nl".to_string(),
            path: "/data/raintext?".to_string(),
            query: "lat=52.14&lon=5.58".to_string(),
            interval_secs: 600,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    pub port: u16,
    /// Connect attempts are retried once per second for this long.
    pub connect_timeout_secs: u32,
    /// Upper bound for reading one full response.
    pub read_timeout_secs: u32,
    /// Capacity of the response body buffer. Longer bodies are truncated.
    pub max_body_bytes: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            port: 443,
            connect_timeout_secs: 15,
            read_timeout_secs: 15,
            max_body_bytes: 64 * 1024,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ScheduleConfig {
    /// How long each screen stays up, in one-second steps.
    pub dwell_secs: u32,
    /// Pause after the splash screen before the first tick.
    pub splash_ms: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            dwell_secs: 10,
            splash_ms: 2500,
        }
    }
}

/// Placement and range of the CO2 ring gauge.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MeterConfig {
    pub min_ppm: i32,
    pub max_ppm: i32,
    pub center_x: i32,
    pub center_y: i32,
    pub radius: u32,
    pub unit: String,
    pub scheme: ColorScheme,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            min_ppm: 0,
            max_ppm: 2400,
            center_x: 120,
            center_y: 120,
            radius: 120,
            unit: "CO2".to_string(),
            scheme: ColorScheme::ThreeZone,
        }
    }
}

impl Config {
    pub fn weather_interval_ms(&self) -> u32 {
        self.weather.interval_secs.saturating_mul(1000)
    }

    pub fn rain_interval_ms(&self) -> u32 {
        self.rain.interval_secs.saturating_mul(1000)
    }
}
