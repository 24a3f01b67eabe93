//! Escaping of object names interpolated into REST paths.
//!
//! Saved search, user and role names are free text. A name such as
//! `errors/by host` must address one object, never a nested path.
//!
//! ```
//! use splunk_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("errors/by host"), "errors%2Fby%20host");
//! ```

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except RFC 3986 unreserved characters and `:`/`@`, which are
/// legal inside a segment and common in Splunk object names.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b':')
    .remove(b'@');

/// Percent-encode `segment` for use as a single path segment.
///
/// The dot-segments `.` and `..` are fully encoded so they cannot be
/// normalized away by the server.
pub fn encode_path_segment(segment: &str) -> String {
    if !segment.is_empty() && segment.bytes().all(|b| b == b'.') {
        return "%2E".repeat(segment.len());
    }
    utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string()
}
