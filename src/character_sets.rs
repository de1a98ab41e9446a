use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// Query component percent-encode set (RFC 3986).
/// Everything except ASCII alphanumerics and the unreserved marks `-`, `_`, `.`, `~`
/// is escaped, so `&`, `=`, `+`, `?` and space never leak into a serialized pair.
pub const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Check if a byte is left untouched by the component encoder
pub fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~')
}
