//! Wall clock and a drifting CO2 sensor for the desktop

use std::time::{Duration, Instant};

use embedded_hal::delay::DelayNs;
use log::debug;
use roundmeter_core::platform::Platform;
use roundmeter_core::sensors::{Co2Sample, Co2Sensor, SensorError};

/// Milliseconds since the simulator started, on a wrapping `u32`.
pub struct HostPlatform {
    started: Instant,
}

impl HostPlatform {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for HostPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl DelayNs for HostPlatform {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(ns as u64));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(ms as u64));
    }
}

impl Platform for HostPlatform {
    fn now_ms(&self) -> u32 {
        // Truncation is the wraparound of a real millisecond counter
        self.started.elapsed().as_millis() as u32
    }
}

/// Seconds after start-up during which reads report a warming-up sensor.
const WARM_UP_SECS: f64 = 3.0;

/// CO2 readings moving between roughly 450 and 1950 ppm, so every zone of
/// the gauge shows up within a few minutes.
pub struct DriftingSensor {
    started: Instant,
}

impl DriftingSensor {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for DriftingSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl Co2Sensor for DriftingSensor {
    fn initialize(&mut self) -> Result<(), SensorError> {
        debug!("Mock CO2 sensor initialized");
        Ok(())
    }

    fn read_co2(&mut self) -> Result<Co2Sample, SensorError> {
        let t = self.started.elapsed().as_secs_f64();
        if t < WARM_UP_SECS {
            return Err(SensorError::Filtered);
        }

        let ppm = 1200.0 + 700.0 * (t / 90.0).sin() + 50.0 * (t / 7.0).cos();
        let temperature = 21.0 + 1.5 * (t / 240.0).sin();
        Ok(Co2Sample {
            ppm: ppm as i32,
            temperature: temperature as i32,
        })
    }
}
