//! Mock collaborators for unit tests

use alloc::string::String;
use alloc::vec::Vec;
use core::cell::Cell;

use embedded_hal::delay::DelayNs;
use embedded_io::ErrorKind;

use crate::net::HttpTransport;
use crate::platform::Platform;
use crate::sensors::{Co2Sample, Co2Sensor, SensorError};

struct Connection {
    data: Vec<u8>,
    position: usize,
}

/// Transport answering each connection to a host with a fixed response.
#[derive(Default)]
pub struct ScriptedTransport {
    routes: Vec<(String, String)>,
    refusals: u32,
    read_error: Option<ErrorKind>,
    read_error_after: usize,
    open: Option<Connection>,
    connect_attempts: u32,
    hosts: Vec<String>,
    requests: Vec<String>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, host: &str, response: &str) -> Self {
        self.set_route(host, response);
        self
    }

    /// Refuse the next `count` connection attempts.
    pub fn refusing(mut self, count: u32) -> Self {
        self.refusals = count;
        self
    }

    pub fn failing_reads(mut self, kind: ErrorKind) -> Self {
        self.read_error = Some(kind);
        self
    }

    /// Serve the first `bytes` of each response, then fail with `kind`.
    pub fn failing_after(mut self, bytes: usize, kind: ErrorKind) -> Self {
        self.read_error = Some(kind);
        self.read_error_after = bytes;
        self
    }

    pub fn set_route(&mut self, host: &str, response: &str) {
        self.routes.retain(|(h, _)| h != host);
        self.routes.push((String::from(host), String::from(response)));
    }

    pub fn requests(&self) -> &[String] {
        &self.requests
    }

    pub fn connect_attempts(&self) -> u32 {
        self.connect_attempts
    }

    /// Number of established connections to `host`.
    pub fn connections_to(&self, host: &str) -> usize {
        self.hosts.iter().filter(|h| h.as_str() == host).count()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }
}

impl embedded_io::ErrorType for ScriptedTransport {
    type Error = ErrorKind;
}

impl embedded_io::Read for ScriptedTransport {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let position = self.open.as_ref().map_or(0, |c| c.position);
        let mut limit = buf.len();
        if let Some(kind) = self.read_error {
            if position >= self.read_error_after {
                return Err(kind);
            }
            limit = limit.min(self.read_error_after - position);
        }
        let Some(connection) = self.open.as_mut() else {
            return Ok(0);
        };
        let remaining = &connection.data[connection.position..];
        let count = remaining.len().min(limit);
        buf[..count].copy_from_slice(&remaining[..count]);
        connection.position += count;
        Ok(count)
    }
}

impl embedded_io::Write for ScriptedTransport {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if self.open.is_none() {
            return Err(ErrorKind::NotConnected);
        }
        if let Some(request) = self.requests.last_mut() {
            request.push_str(core::str::from_utf8(buf).unwrap_or(""));
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl HttpTransport for ScriptedTransport {
    fn connect(&mut self, host: &str, _port: u16) -> bool {
        self.connect_attempts += 1;
        if self.refusals > 0 {
            self.refusals -= 1;
            return false;
        }
        let Some((_, response)) = self.routes.iter().find(|(h, _)| h == host) else {
            return false;
        };
        self.open = Some(Connection {
            data: response.as_bytes().to_vec(),
            position: 0,
        });
        self.hosts.push(String::from(host));
        self.requests.push(String::new());
        true
    }

    fn connected(&self) -> bool {
        self.open
            .as_ref()
            .is_some_and(|c| c.position < c.data.len())
    }

    fn stop(&mut self) {
        self.open = None;
    }
}

/// Clock that only moves when delayed, or by a fixed step on every read.
pub struct MockPlatform {
    now: Cell<u32>,
    step_ms: u32,
    housekeeping_calls: usize,
}

impl MockPlatform {
    pub fn new(start_ms: u32) -> Self {
        Self {
            now: Cell::new(start_ms),
            step_ms: 0,
            housekeeping_calls: 0,
        }
    }

    /// Advance the clock by `step_ms` after every `now_ms` call.
    pub fn advancing(mut self, step_ms: u32) -> Self {
        self.step_ms = step_ms;
        self
    }

    pub fn set_now(&self, now_ms: u32) {
        self.now.set(now_ms);
    }

    pub fn housekeeping_calls(&self) -> usize {
        self.housekeeping_calls
    }
}

impl DelayNs for MockPlatform {
    fn delay_ns(&mut self, ns: u32) {
        self.now.set(self.now.get().wrapping_add(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Platform for MockPlatform {
    fn now_ms(&self) -> u32 {
        let now = self.now.get();
        self.now.set(now.wrapping_add(self.step_ms));
        now
    }

    fn housekeeping(&mut self) {
        self.housekeeping_calls += 1;
    }
}

/// Sensor replaying a fixed list of results, starting over at the end.
pub struct ScriptedSensor {
    results: Vec<Result<Co2Sample, SensorError>>,
    next: usize,
    init_result: Result<(), SensorError>,
    initialized: usize,
    reads: usize,
}

impl ScriptedSensor {
    pub fn new(results: impl IntoIterator<Item = Result<Co2Sample, SensorError>>) -> Self {
        Self {
            results: results.into_iter().collect(),
            next: 0,
            init_result: Ok(()),
            initialized: 0,
            reads: 0,
        }
    }

    /// Sensor always reporting `ppm`.
    pub fn steady(ppm: i32) -> Self {
        Self::new([Ok(Co2Sample {
            ppm,
            temperature: 20,
        })])
    }

    pub fn failing_init(mut self, error: SensorError) -> Self {
        self.init_result = Err(error);
        self
    }

    pub fn initialized(&self) -> usize {
        self.initialized
    }

    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl Co2Sensor for ScriptedSensor {
    fn initialize(&mut self) -> Result<(), SensorError> {
        self.initialized += 1;
        self.init_result
    }

    fn read_co2(&mut self) -> Result<Co2Sample, SensorError> {
        self.reads += 1;
        if self.results.is_empty() {
            return Err(SensorError::Failed);
        }
        let result = self.results[self.next];
        self.next = (self.next + 1) % self.results.len();
        result
    }
}
