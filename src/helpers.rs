use crate::compat::String;

/// Split a path+query string at the first `?`.
/// Returns (`base_path`, `query_without_question_mark`).
/// Everything after the first `?` belongs to the query, including later `?` characters.
pub fn split_url(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Join a base path and an encoded query.
/// The `?` is only written when the query is non-empty.
pub fn join_url(base: &str, query: &str) -> String {
    let mut url = String::with_capacity(base.len() + query.len() + 1);
    url.push_str(base);
    if !query.is_empty() {
        url.push('?');
        url.push_str(query);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_url() {
        assert_eq!(split_url("somePathName"), ("somePathName", None));
        assert_eq!(split_url("somePathName?"), ("somePathName", Some("")));
        assert_eq!(split_url("/a?b=1&c=2"), ("/a", Some("b=1&c=2")));
        assert_eq!(split_url("/a?b=1?c"), ("/a", Some("b=1?c")));
        assert_eq!(split_url("?b=1"), ("", Some("b=1")));
        assert_eq!(split_url(""), ("", None));
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("/a", "b=1"), "/a?b=1");
        assert_eq!(join_url("/a", ""), "/a");
        assert_eq!(join_url("", "b=1"), "?b=1");
    }
}
