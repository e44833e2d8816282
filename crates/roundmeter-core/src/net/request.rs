use core::fmt::Write;

use heapless::String;

use super::FetchError;

/// Largest request head that can be sent.
pub const REQUEST_MAX_BYTES: usize = 256;

/// A GET request for `path` followed by `query`, both sent verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request<'a> {
    pub host: &'a str,
    pub path: &'a str,
    pub query: &'a str,
}

impl<'a> Request<'a> {
    pub fn get(host: &'a str, path: &'a str) -> Self {
        Self {
            host,
            path,
            query: "",
        }
    }

    pub fn with_query(mut self, query: &'a str) -> Self {
        self.query = query;
        self
    }

    /// The request head. The server is asked to close the connection after
    /// the response, which marks the end of the body.
    pub fn encode(&self) -> Result<String<REQUEST_MAX_BYTES>, FetchError> {
        let mut head = String::new();
        write!(
            head,
            "GET {}{} HTTP/1.1\r\nHost: {}\r\nConnection: close\r\n\r\n",
            self.path, self.query, self.host
        )
        .map_err(|_| FetchError::RequestTooLong)?;
        Ok(head)
    }
}
