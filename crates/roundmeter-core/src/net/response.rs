use heapless::String;

/// A successful response with its body as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response<'b> {
    pub status: u16,
    /// Value of the `Date` header, empty when absent
    pub date: String<40>,
    pub body: &'b str,
    /// The body filled the buffer with data still pending
    pub truncated: bool,
}

/// Status code of a `HTTP/1.1 200 OK` line: the three characters after the
/// first space. `None` for other lines, `Some(0)` for an unreadable code.
pub(super) fn status_code(line: &str) -> Option<u16> {
    if !line.starts_with("HTTP/") {
        return None;
    }
    let code = line
        .find(' ')
        .and_then(|space| line.get(space + 1..space + 4))
        .and_then(|code| code.parse().ok())
        .unwrap_or(0);
    Some(code)
}

/// Value of header `name` if `line` is that header.
pub(super) fn header_value<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let (key, value) = line.split_once(':')?;
    key.trim()
        .eq_ignore_ascii_case(name)
        .then(|| value.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_status_code() {
        assert_eq!(status_code("HTTP/1.1 200 OK"), Some(200));
        assert_eq!(status_code("HTTP/1.0 404 Not Found"), Some(404));
        assert_eq!(status_code("HTTP/1.1 2"), Some(0));
        assert_eq!(status_code("Content-Type: text/plain"), None);
    }

    #[test]
    fn reads_headers() {
        let line = "Date: Sun, 02 Jan 2022 12:31:05 GMT";
        assert_eq!(
            header_value(line, "Date"),
            Some("Sun, 02 Jan 2022 12:31:05 GMT")
        );
        assert_eq!(header_value("date:x", "Date"), Some("x"));
        assert_eq!(header_value(line, "Server"), None);
        assert_eq!(header_value("no header", "Date"), None);
    }
}
