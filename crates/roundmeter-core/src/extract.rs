//! Field lookup in quasi-JSON text without a parser.
//!
//! The weather feed is far larger than the RAM a JSON parser would need, so
//! values are picked out by string search. The extractor assumes flat
//! `"key":value` pairs where every value is followed by another field: the
//! value ends at the next `,"`. For the last field of an object there is no
//! `,"`, and the value runs to the end of the text (closing braces
//! included). Callers either narrow the text first or never ask for the last
//! field.

/// Lookup of a raw field value by key.
///
/// Implemented by [`QuasiJson`]; a streaming parser can replace it without
/// touching the pipelines.
pub trait FieldExtractor {
    /// The raw value of `key`, or `None` when the key does not occur.
    fn find<'a>(&self, key: &str, payload: &'a str) -> Option<&'a str>;
}

/// Substring extractor for `"key":value,"next"` style text.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuasiJson;

impl FieldExtractor for QuasiJson {
    fn find<'a>(&self, key: &str, payload: &'a str) -> Option<&'a str> {
        let start = value_start(key, payload)?;
        let rest = &payload[start..];
        let raw = match rest.find(",\"") {
            Some(end) => &rest[..end],
            None => rest,
        };
        Some(unquote(raw))
    }
}

/// Raw value of `key` in `payload`, empty when the key is absent.
pub fn extract<'a>(key: &str, payload: &'a str) -> &'a str {
    QuasiJson.find(key, payload).unwrap_or("")
}

/// Byte offset just past the first `"key":` in `payload`.
fn value_start(key: &str, payload: &str) -> Option<usize> {
    payload.match_indices(key).find_map(|(at, _)| {
        let opened = payload[..at].ends_with('"');
        let after = at + key.len();
        let closed = payload[after..].starts_with("\":");
        (opened && closed).then_some(after + 2)
    })
}

/// Drop the first and last character of a quoted value.
fn unquote(raw: &str) -> &str {
    let Some(inner) = raw.strip_prefix('"') else {
        return raw;
    };
    match inner.char_indices().last() {
        Some((last, _)) => &inner[..last],
        None => "",
    }
}

/// At most `len` leading bytes of `text`, cut on a char boundary.
pub fn prefix(text: &str, len: usize) -> &str {
    let mut end = text.len().min(len);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Copy `text` into a bounded string, truncated like [`prefix`].
pub(crate) fn bounded<const N: usize>(text: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    out.push_str(prefix(text, N)).ok();
    out
}

/// Parse the leading number of `text` leniently.
///
/// Leading whitespace is skipped and parsing stops at the first character
/// that cannot continue the number. Text without a leading number, the empty
/// string included, yields `0.0`.
pub fn to_f32(text: &str) -> f32 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(&byte) = bytes.get(end) {
        match byte {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return 0.0;
    }
    text[..end].parse().unwrap_or(0.0)
}

/// Integer counterpart of [`to_f32`]; the fraction is truncated.
pub fn to_i32(text: &str) -> i32 {
    to_f32(text) as i32
}
