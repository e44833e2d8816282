use embedded_io::Error as _;
use embedded_io::ErrorKind;
use heapless::{String, Vec};
use log::{debug, error, info, warn};

use super::response::{header_value, status_code};
use super::{FetchError, HttpTransport, Request, Response};
use crate::config::NetworkConfig;
use crate::extract::bounded;
use crate::platform::Platform;
use crate::time::Deadline;

/// Pause between two connection attempts
const CONNECT_RETRY_MS: u32 = 1000;

/// Header lines are cut to this length; only the status line and `Date` are
/// looked at.
const HEADER_LINE_MAX: usize = 128;

/// Only this status is treated as a usable response.
const HTTP_OK: u16 = 200;

/// GET `request` and read the body into `body`.
///
/// Connecting is retried once per second for `connect_timeout_secs`. The
/// body ends at end of stream, when the peer disconnects, when the read
/// timeout is reached, or when `body` is full; a truncated body is still
/// returned and marked when data was still pending. A read timing out
/// ends the body like the read timeout does. Text after the last valid UTF-8 sequence is dropped. The
/// connection is always closed before returning.
pub fn fetch<'b, T, P>(
    transport: &mut T,
    platform: &mut P,
    request: &Request<'_>,
    network: &NetworkConfig,
    body: &'b mut [u8],
) -> Result<Response<'b>, FetchError>
where
    T: HttpTransport,
    P: Platform,
{
    let head = request.encode()?;
    info!("Fetching {}{}{}", request.host, request.path, request.query);

    connect(transport, platform, request.host, network)?;
    let result = exchange(transport, platform, &head, network, body);
    transport.stop();

    match &result {
        Ok(response) => info!(
            "Received {} bytes from {} ({})",
            response.body.len(),
            request.host,
            response.date
        ),
        Err(FetchError::Status { code }) => warn!("HTTP status {} from {}", code, request.host),
        Err(e) => warn!("Fetching from {} failed: {}", request.host, e),
    }
    result
}

fn connect<T: HttpTransport, P: Platform>(
    transport: &mut T,
    platform: &mut P,
    host: &str,
    network: &NetworkConfig,
) -> Result<(), FetchError> {
    let mut attempts = 1;
    while !transport.connect(host, network.port) {
        if attempts > network.connect_timeout_secs {
            error!("Connection to {} failed after {} attempts", host, attempts);
            return Err(FetchError::ConnectFailed {
                host: bounded(host),
                attempts,
            });
        }
        debug!("Connecting to {} (attempt {})", host, attempts);
        platform.delay_ms(CONNECT_RETRY_MS);
        platform.housekeeping();
        attempts += 1;
    }
    Ok(())
}

fn exchange<'b, T: HttpTransport, P: Platform>(
    transport: &mut T,
    platform: &mut P,
    head: &str,
    network: &NetworkConfig,
    body: &'b mut [u8],
) -> Result<Response<'b>, FetchError> {
    transport
        .write_all(head.as_bytes())
        .and_then(|_| transport.flush())
        .map_err(|e| FetchError::Transport(e.kind()))?;

    let deadline = Deadline::after(
        platform.now_ms(),
        network.read_timeout_secs.saturating_mul(1000),
    );

    let (status, date) = read_headers(transport, platform, deadline)?;
    if status != HTTP_OK {
        return Err(FetchError::Status { code: status });
    }

    let mut filled = 0;
    while filled < body.len() && transport.connected() {
        if deadline.has_passed(platform.now_ms()) {
            warn!("Read timeout, keeping {} bytes of body", filled);
            break;
        }
        match transport.read(&mut body[filled..]) {
            Ok(0) => break,
            Ok(read) => filled += read,
            Err(e) if e.kind() == ErrorKind::TimedOut => {
                warn!("Read timed out, keeping {} bytes of body", filled);
                break;
            }
            Err(e) => return Err(FetchError::Transport(e.kind())),
        }
        platform.housekeeping();
    }
    let truncated = filled == body.len() && transport.connected();
    if truncated {
        warn!("Response body truncated at {} bytes", filled);
    }

    let body: &'b [u8] = body;
    let bytes = &body[..filled];
    let text = match core::str::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => core::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or(""),
    };

    Ok(Response {
        status,
        date,
        body: text,
        truncated,
    })
}

/// Read header lines up to the blank line. Returns the status code (0 when
/// no status line was seen) and the `Date` header.
fn read_headers<T: HttpTransport, P: Platform>(
    transport: &mut T,
    platform: &mut P,
    deadline: Deadline,
) -> Result<(u16, String<40>), FetchError> {
    let mut status = 0;
    let mut date = String::new();
    let mut line: Vec<u8, HEADER_LINE_MAX> = Vec::new();

    while transport.connected() {
        if deadline.has_passed(platform.now_ms()) {
            return Err(FetchError::Timeout);
        }

        let mut byte = [0u8];
        match transport.read(&mut byte) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => return Err(FetchError::Transport(e.kind())),
        }

        if byte[0] != b'\n' {
            // Overlong lines are cut, the rest of the line is dropped.
            line.push(byte[0]).ok();
            continue;
        }

        // Only a line without any bytes ends the headers
        let raw = line.strip_suffix(b"\r").unwrap_or(&line[..]);
        if raw.is_empty() {
            break;
        }
        let text = match core::str::from_utf8(raw) {
            Ok(text) => text,
            Err(e) => core::str::from_utf8(&raw[..e.valid_up_to()]).unwrap_or(""),
        };
        if let Some(code) = status_code(text) {
            status = code;
        } else if let Some(value) = header_value(text, "Date") {
            date = bounded(value);
        }
        line.clear();
        platform.housekeeping();
    }

    Ok((status, date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockPlatform, ScriptedTransport};

    const HOST: &str = "gpsgadget.buienradar.nl";
    const OK_RESPONSE: &str = "HTTP/1.1 200 OK\r\nDate: Sun, 02 Jan 2022 12:31:05 GMT\r\n\
                               Content-Type: text/plain\r\n\r\n077|12:35\n109|12:40\n";

    fn request() -> Request<'static> {
        Request::get(HOST, "/data/raintext?").with_query("lat=52.14&lon=5.58")
    }

    #[test]
    fn returns_body_of_ok_response() {
        let mut transport = ScriptedTransport::new().with_route(HOST, OK_RESPONSE);
        let mut platform = MockPlatform::new(0);
        let mut body = [0u8; 256];

        let response = fetch(
            &mut transport,
            &mut platform,
            &request(),
            &NetworkConfig::default(),
            &mut body,
        )
        .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.date.as_str(), "Sun, 02 Jan 2022 12:31:05 GMT");
        assert_eq!(response.body, "077|12:35\n109|12:40\n");
        assert_eq!(
            transport.requests()[0].as_str(),
            "GET /data/raintext?lat=52.14&lon=5.58 HTTP/1.1\r\n\
             Host: gpsgadget.buienradar.nl\r\nConnection: close\r\n\r\n"
        );
        assert!(!transport.is_open());
    }

    #[test]
    fn non_ok_status_is_an_error() {
        let mut transport = ScriptedTransport::new()
            .with_route(HOST, "HTTP/1.1 503 Service Unavailable\r\n\r\nbusy");
        let mut platform = MockPlatform::new(0);
        let mut body = [0u8; 64];

        let result = fetch(
            &mut transport,
            &mut platform,
            &request(),
            &NetworkConfig::default(),
            &mut body,
        );
        assert_eq!(result, Err(FetchError::Status { code: 503 }));
        assert!(!transport.is_open());
    }

    #[test]
    fn connect_is_retried_once_per_second() {
        let mut transport = ScriptedTransport::new()
            .with_route(HOST, OK_RESPONSE)
            .refusing(3);
        let mut platform = MockPlatform::new(0);
        let mut body = [0u8; 64];

        let result = fetch(
            &mut transport,
            &mut platform,
            &request(),
            &NetworkConfig::default(),
            &mut body,
        );
        assert!(result.is_ok());
        assert_eq!(transport.connect_attempts(), 4);
        assert_eq!(platform.now_ms(), 3000);
    }

    #[test]
    fn gives_up_after_connect_timeout() {
        let mut transport = ScriptedTransport::new().refusing(u32::MAX);
        let mut platform = MockPlatform::new(0);
        let mut body = [0u8; 64];

        let result = fetch(
            &mut transport,
            &mut platform,
            &request(),
            &NetworkConfig::default(),
            &mut body,
        );
        assert_eq!(
            result,
            Err(FetchError::ConnectFailed {
                host: bounded(HOST),
                attempts: 16,
            })
        );
        assert_eq!(platform.now_ms(), 15_000);
    }

    #[test]
    fn body_is_cut_at_buffer_size() {
        let mut transport = ScriptedTransport::new().with_route(HOST, OK_RESPONSE);
        let mut platform = MockPlatform::new(0);
        let mut body = [0u8; 9];

        let response = fetch(
            &mut transport,
            &mut platform,
            &request(),
            &NetworkConfig::default(),
            &mut body,
        )
        .unwrap();
        assert_eq!(response.body, "077|12:35");
        assert!(!transport.is_open());
    }

    #[test]
    fn partial_utf8_sequence_is_dropped() {
        let mut transport =
            ScriptedTransport::new().with_route(HOST, "HTTP/1.1 200 OK\r\n\r\n12°C");
        let mut platform = MockPlatform::new(0);
        // room for "12" and the first byte of `°`
        let mut body = [0u8; 3];

        let response = fetch(
            &mut transport,
            &mut platform,
            &request(),
            &NetworkConfig::default(),
            &mut body,
        )
        .unwrap();
        assert_eq!(response.body, "12");
    }

    #[test]
    fn slow_headers_time_out() {
        let mut transport = ScriptedTransport::new().with_route(HOST, OK_RESPONSE);
        // each clock read moves time forward by one second
        let mut platform = MockPlatform::new(0).advancing(1000);
        let mut body = [0u8; 64];

        let result = fetch(
            &mut transport,
            &mut platform,
            &request(),
            &NetworkConfig::default(),
            &mut body,
        );
        assert_eq!(result, Err(FetchError::Timeout));
        assert!(!transport.is_open());
    }

    #[test]
    fn read_error_is_reported() {
        let mut transport = ScriptedTransport::new()
            .with_route(HOST, OK_RESPONSE)
            .failing_reads(ErrorKind::ConnectionReset);
        let mut platform = MockPlatform::new(0);
        let mut body = [0u8; 64];

        let result = fetch(
            &mut transport,
            &mut platform,
            &request(),
            &NetworkConfig::default(),
            &mut body,
        );
        assert_eq!(
            result,
            Err(FetchError::Transport(ErrorKind::ConnectionReset))
        );
    }

    #[test]
    fn survives_clock_wraparound() {
        let mut transport = ScriptedTransport::new().with_route(HOST, OK_RESPONSE);
        let mut platform = MockPlatform::new(u32::MAX - 5);
        let mut body = [0u8; 64];

        let response = fetch(
            &mut transport,
            &mut platform,
            &request(),
            &NetworkConfig::default(),
            &mut body,
        );
        assert!(response.is_ok());
    }

    #[test]
    fn cut_multibyte_header_does_not_end_headers() {
        // 127 ASCII bytes, then a two-byte character split by the line limit
        let padding = "a".repeat(HEADER_LINE_MAX - 1 - "X-Padding: ".len());
        let response = alloc::format!(
            "HTTP/1.1 200 OK\r\nX-Padding: {}\u{e9}\r\nServer: nginx\r\n\
             Via: proxy\r\n\r\n109|12:00\n109|12:05\n",
            padding
        );
        let mut transport = ScriptedTransport::new().with_route(HOST, &response);
        let mut platform = MockPlatform::new(0);
        let mut body = [0u8; 64];

        let response = fetch(
            &mut transport,
            &mut platform,
            &request(),
            &NetworkConfig::default(),
            &mut body,
        )
        .unwrap();
        assert_eq!(response.body, "109|12:00\n109|12:05\n");
    }

    #[test]
    fn body_filling_buffer_at_end_of_stream_is_complete() {
        let mut transport = ScriptedTransport::new().with_route(HOST, OK_RESPONSE);
        let mut platform = MockPlatform::new(0);
        let mut body = [0u8; 20];

        let response = fetch(
            &mut transport,
            &mut platform,
            &request(),
            &NetworkConfig::default(),
            &mut body,
        )
        .unwrap();
        assert_eq!(response.body, "077|12:35\n109|12:40\n");
        assert!(!response.truncated);
    }

    #[test]
    fn body_with_pending_data_is_truncated() {
        let mut transport = ScriptedTransport::new().with_route(HOST, OK_RESPONSE);
        let mut platform = MockPlatform::new(0);
        let mut body = [0u8; 10];

        let response = fetch(
            &mut transport,
            &mut platform,
            &request(),
            &NetworkConfig::default(),
            &mut body,
        )
        .unwrap();
        assert_eq!(response.body, "077|12:35\n");
        assert!(response.truncated);
    }

    #[test]
    fn timed_out_read_keeps_partial_body() {
        let mut transport = ScriptedTransport::new()
            .with_route(HOST, OK_RESPONSE)
            .failing_after(OK_RESPONSE.len() - 10, ErrorKind::TimedOut);
        let mut platform = MockPlatform::new(0);
        let mut body = [0u8; 64];

        let response = fetch(
            &mut transport,
            &mut platform,
            &request(),
            &NetworkConfig::default(),
            &mut body,
        )
        .unwrap();
        assert_eq!(response.body, "077|12:35\n");
        assert!(!response.truncated);
        assert!(!transport.is_open());
    }

    #[test]
    fn reset_during_body_is_an_error() {
        let mut transport = ScriptedTransport::new()
            .with_route(HOST, OK_RESPONSE)
            .failing_after(OK_RESPONSE.len() - 10, ErrorKind::ConnectionReset);
        let mut platform = MockPlatform::new(0);
        let mut body = [0u8; 64];

        let result = fetch(
            &mut transport,
            &mut platform,
            &request(),
            &NetworkConfig::default(),
            &mut body,
        );
        assert_eq!(
            result,
            Err(FetchError::Transport(ErrorKind::ConnectionReset))
        );
    }
}
