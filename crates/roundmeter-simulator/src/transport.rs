//! Feed transports: canned responses, or plain TCP to the real hosts

use std::io::{Read as _, Write as _};
use std::net::TcpStream;
use std::time::Duration;

use embedded_io::ErrorKind;
use log::{debug, warn};
use roundmeter_core::net::HttpTransport;

const WEATHER_FIXTURE: &str = include_str!("../fixtures/weather.json");
const RAIN_FIXTURE: &str = include_str!("../fixtures/raintext.txt");

/// Answers every request with a fixture picked by host name.
pub struct FixtureTransport {
    weather_host: String,
    rain_host: String,
    response: Option<Vec<u8>>,
    position: usize,
}

impl FixtureTransport {
    pub fn new(weather_host: &str, rain_host: &str) -> Self {
        Self {
            weather_host: weather_host.to_string(),
            rain_host: rain_host.to_string(),
            response: None,
            position: 0,
        }
    }

    fn respond(body: &str) -> Vec<u8> {
        format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: {}\r\n\
             Connection: close\r\n\r\n{}",
            body.len(),
            body
        )
        .into_bytes()
    }
}

impl embedded_io::ErrorType for FixtureTransport {
    type Error = ErrorKind;
}

impl embedded_io::Read for FixtureTransport {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let Some(response) = &self.response else {
            return Ok(0);
        };
        let remaining = &response[self.position..];
        let count = remaining.len().min(buf.len());
        buf[..count].copy_from_slice(&remaining[..count]);
        self.position += count;
        Ok(count)
    }
}

impl embedded_io::Write for FixtureTransport {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if self.response.is_none() {
            return Err(ErrorKind::NotConnected);
        }
        debug!("Request: {:?}", String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl HttpTransport for FixtureTransport {
    fn connect(&mut self, host: &str, _port: u16) -> bool {
        let body = if host == self.weather_host {
            WEATHER_FIXTURE
        } else if host == self.rain_host {
            RAIN_FIXTURE
        } else {
            warn!("No fixture for {}", host);
            return false;
        };
        self.response = Some(Self::respond(body));
        self.position = 0;
        true
    }

    fn connected(&self) -> bool {
        self.response
            .as_ref()
            .is_some_and(|response| self.position < response.len())
    }

    fn stop(&mut self) {
        self.response = None;
    }
}

/// Unencrypted HTTP over a `TcpStream`.
pub struct TcpTransport {
    stream: Option<TcpStream>,
    eof: bool,
    read_timeout: Duration,
}

impl TcpTransport {
    pub fn new(read_timeout_secs: u32) -> Self {
        Self {
            stream: None,
            eof: false,
            read_timeout: Duration::from_secs(read_timeout_secs.max(1) as u64),
        }
    }
}

fn error_kind(error: &std::io::Error) -> ErrorKind {
    use std::io::ErrorKind as Io;
    match error.kind() {
        Io::ConnectionReset => ErrorKind::ConnectionReset,
        Io::ConnectionAborted => ErrorKind::ConnectionAborted,
        Io::NotConnected => ErrorKind::NotConnected,
        Io::BrokenPipe => ErrorKind::BrokenPipe,
        Io::TimedOut | Io::WouldBlock => ErrorKind::TimedOut,
        Io::Interrupted => ErrorKind::Interrupted,
        _ => ErrorKind::Other,
    }
}

impl embedded_io::ErrorType for TcpTransport {
    type Error = ErrorKind;
}

impl embedded_io::Read for TcpTransport {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let stream = self.stream.as_mut().ok_or(ErrorKind::NotConnected)?;
        let read = stream.read(buf).map_err(|e| error_kind(&e))?;
        if read == 0 {
            self.eof = true;
        }
        Ok(read)
    }
}

impl embedded_io::Write for TcpTransport {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        let stream = self.stream.as_mut().ok_or(ErrorKind::NotConnected)?;
        stream.write(buf).map_err(|e| error_kind(&e))
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        let stream = self.stream.as_mut().ok_or(ErrorKind::NotConnected)?;
        stream.flush().map_err(|e| error_kind(&e))
    }
}

impl HttpTransport for TcpTransport {
    fn connect(&mut self, host: &str, port: u16) -> bool {
        self.stop();
        match TcpStream::connect((host, port)) {
            Ok(stream) => {
                if let Err(e) = stream.set_read_timeout(Some(self.read_timeout)) {
                    warn!("Cannot set read timeout: {}", e);
                }
                self.stream = Some(stream);
                self.eof = false;
                true
            }
            Err(e) => {
                debug!("Connecting to {}:{} failed: {}", host, port, e);
                false
            }
        }
    }

    fn connected(&self) -> bool {
        self.stream.is_some() && !self.eof
    }

    fn stop(&mut self) {
        if let Some(stream) = self.stream.take() {
            stream.shutdown(std::net::Shutdown::Both).ok();
        }
    }
}
