use crate::character_sets::{COMPONENT_SET, is_unreserved};
use crate::compat::{Cow, String};
use percent_encoding::{percent_decode_str, utf8_percent_encode};

/// Percent-encode a key or value for use in a query string.
/// Returns the input borrowed when nothing needs escaping.
pub fn encode_component(input: &str) -> Cow<'_, str> {
    if input.bytes().all(is_unreserved) {
        return Cow::Borrowed(input);
    }
    utf8_percent_encode(input, COMPONENT_SET).into()
}

/// Decode a key or value taken from a query string.
///
/// `+` means space. Malformed escapes such as `%X` are kept literally, and if the
/// decoded bytes are not valid UTF-8 the (space-substituted) input is returned as is.
pub fn decode_component(input: &str) -> String {
    let spaced: Cow<'_, str> = if input.contains('+') {
        Cow::Owned(input.replace('+', " "))
    } else {
        Cow::Borrowed(input)
    };

    let decoded = percent_decode_str(&spaced)
        .decode_utf8()
        .map(Cow::into_owned);
    match decoded {
        Ok(decoded) => decoded,
        Err(_) => spaced.into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_passthrough_borrows() {
        assert!(matches!(encode_component("value1"), Cow::Borrowed("value1")));
        assert!(matches!(encode_component("a-b_c.d~e"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_encode_reserved() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_component("1+1"), "1%2B1");
        assert_eq!(encode_component("/path?x"), "%2Fpath%3Fx");
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode_component("value1"), "value1");
        assert_eq!(decode_component("a%20b"), "a b");
        assert_eq!(decode_component("a+b"), "a b");
        assert_eq!(decode_component("1%2B1"), "1+1");
        assert_eq!(decode_component("%C3%A9"), "é");
    }

    #[test]
    fn test_decode_malformed() {
        assert_eq!(decode_component("%X%"), "%X%");
        assert_eq!(decode_component("100%"), "100%");
        // Lone continuation byte is not valid UTF-8
        assert_eq!(decode_component("%80+x"), "%80 x");
    }
}
