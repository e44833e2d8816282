//! Plain HTTP/1.1 GET over a byte stream
//!
//! Connection setup (TCP, TLS) belongs to the [`HttpTransport`]
//! implementation. This module writes the request, reads the status line and
//! headers, and collects the body into a caller-provided buffer.

mod fetch;
mod request;
mod response;

pub use fetch::fetch;
pub use request::{REQUEST_MAX_BYTES, Request};
pub use response::Response;

use embedded_io::ErrorKind;
use thiserror_no_std::Error;

/// A byte stream that can be (re)connected to a host.
pub trait HttpTransport: embedded_io::Read + embedded_io::Write {
    /// Open a connection, `false` when it could not be established.
    fn connect(&mut self, host: &str, port: u16) -> bool;

    /// Whether the peer is still connected or unread data remains.
    fn connected(&self) -> bool;

    /// Close the connection. Safe to call when already closed.
    fn stop(&mut self);
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Connection to {host} failed after {attempts} attempts")]
    ConnectFailed {
        host: heapless::String<64>,
        attempts: u32,
    },
    #[error("HTTP status {code}")]
    Status { code: u16 },
    #[error("Transport error: {0:?}")]
    Transport(ErrorKind),
    #[error("Timed out reading response headers")]
    Timeout,
    #[error("Request does not fit the request buffer")]
    RequestTooLong,
}
