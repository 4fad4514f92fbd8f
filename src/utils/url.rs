//! Percent-encoding of library paths for URL hashes.
//!
//! Browsers report `location.hash` percent-encoded (`#/My%20Docs`), so paths
//! are encoded segment by segment on the way out and decoded on the way in.

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

use super::format::path_segments;

/// Characters escaped inside one path segment. Non-ASCII is always escaped.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Encode a normalized path for use in a URL hash.
pub fn encode_path(path: &str) -> String {
    path_segments(path)
        .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// Decode a path taken from a URL hash.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn decode_path(path: &str) -> String {
    path_segments(path)
        .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
