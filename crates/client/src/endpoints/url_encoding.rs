//! Percent-encoding for job ids interpolated into request paths.
//!
//! Job ids are server-issued (`IUUQI-DGH5I-TJ045`) but also arrive from the
//! command line when attaching to an existing job, so they are encoded
//! before being placed in a path. An id containing `/` or `?` would
//! otherwise address a different resource.
//!
//! ```
//! use sumo_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("IUUQI-DGH5I-TJ045"), "IUUQI-DGH5I-TJ045");
//! assert_eq!(encode_path_segment("../messages"), "..%2Fmessages");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters percent-encoded in a path segment.
///
/// RFC 3986 path delimiters plus characters that are unsafe or ambiguous
/// in URLs. `%` is included so already-encoded input is not decoded twice.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for use as one URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
