//! CO2 sensor capability and the latest reading
//!
//! The wire protocol lives behind [`Co2Sensor`]; the core only keeps the
//! most recent [`Co2Reading`] for the gauge screen.

use log::{debug, warn};
use thiserror_no_std::Error;

/// Failure of a single sensor transaction.
///
/// Each variant maps to the MH-Z19 style numeric result code shown on the
/// diagnostic logs; code 1 means OK.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    #[error("Timeout waiting for sensor response")]
    Timeout,
    #[error("Syntax error in sensor response")]
    Syntax,
    #[error("CRC error in sensor response")]
    Crc,
    #[error("Reading filtered (sensor warming up)")]
    Filtered,
    #[error("Sensor read failed")]
    Failed,
}

/// Result code of a successful read.
pub const SENSOR_OK: u8 = 1;

impl SensorError {
    pub fn code(&self) -> u8 {
        match self {
            SensorError::Timeout => 2,
            SensorError::Syntax => 3,
            SensorError::Crc => 4,
            SensorError::Filtered => 5,
            SensorError::Failed => 6,
        }
    }
}

/// One measurement from the sensor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Co2Sample {
    pub ppm: i32,
    /// Sensor die temperature in whole °C
    pub temperature: i32,
}

/// Source of CO2 concentration samples.
pub trait Co2Sensor {
    /// Bring the sensor up. Called once before the first read.
    fn initialize(&mut self) -> Result<(), SensorError> {
        Ok(())
    }

    fn read_co2(&mut self) -> Result<Co2Sample, SensorError>;
}

impl<S: Co2Sensor + ?Sized> Co2Sensor for &mut S {
    fn initialize(&mut self) -> Result<(), SensorError> {
        (**self).initialize()
    }

    fn read_co2(&mut self) -> Result<Co2Sample, SensorError> {
        (**self).read_co2()
    }
}

/// Latest CO2 reading with the result code of the read that produced it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Co2Reading {
    pub ppm: i32,
    pub temperature: i32,
    /// [`SENSOR_OK`] or a [`SensorError::code`]; 0 before the first read
    pub error_code: u8,
}

impl Co2Reading {
    /// Read a fresh sample.
    ///
    /// The values are zeroed first, so a failed read shows 0 ppm instead of
    /// the previous value.
    pub fn refresh<S: Co2Sensor>(&mut self, sensor: &mut S) -> Result<(), SensorError> {
        self.ppm = 0;
        self.temperature = 0;

        match sensor.read_co2() {
            Ok(sample) => {
                self.ppm = sample.ppm;
                self.temperature = sample.temperature;
                self.error_code = SENSOR_OK;
                debug!("CO2 {} ppm, sensor at {} °C", sample.ppm, sample.temperature);
                Ok(())
            }
            Err(e) => {
                self.error_code = e.code();
                warn!("Reading from CO2 sensor failed; error code: {}", e.code());
                Err(e)
            }
        }
    }
}
