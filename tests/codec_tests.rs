#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Query string decoding tests, cross-checked against the `url` crate's
/// `application/x-www-form-urlencoded` parser.
use search_sync::{QueryParams, split_url};
use url::form_urlencoded;

fn assert_matches_url_crate(query: &str) {
    let ours = QueryParams::parse(query);
    let theirs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    for (key, value) in &theirs {
        assert!(
            ours.get_all(key).contains(&value.as_str()),
            "{query}: missing {key}={value}"
        );
    }
}

#[test]
fn test_decoding_matches_url_crate() {
    for query in [
        "a=1&b=2",
        "q=hello+world",
        "q=hello%20world",
        "k%26=v%3D",
        "name=Fran%C3%A7ois",
        "flag&x=",
        "a=1&a=2&a=3",
        "&&a=1&&",
        "emoji=%F0%9F%98%80",
    ] {
        assert_matches_url_crate(query);
    }
}

#[test]
fn test_reencoding_is_stable() {
    let query = "name=Fran%C3%A7ois&q=a%20b&tag=x&tag=y";
    let params = QueryParams::parse(query);
    assert_eq!(params.to_query_string(), query);
}

#[test]
fn test_plus_reencodes_as_percent_twenty() {
    let params = QueryParams::parse("q=a+b");
    assert_eq!(params.to_query_string(), "q=a%20b");
}

#[test]
fn test_encoding_parsed_by_url_crate() {
    let mut params = QueryParams::new();
    params.set("weird key", "v&a=l+ue?");
    params.set("ü", "☃");
    let encoded = params.to_query_string();

    let decoded: Vec<(String, String)> = form_urlencoded::parse(encoded.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        decoded,
        vec![
            ("weird key".to_string(), "v&a=l+ue?".to_string()),
            ("ü".to_string(), "☃".to_string()),
        ]
    );
}

#[test]
fn test_split_url_first_question_mark() {
    let (base, query) = split_url("/search?q=what?&x=1");
    assert_eq!(base, "/search");
    let params = QueryParams::parse(query.unwrap());
    assert_eq!(params.get("q"), Some("what?"));
    assert_eq!(params.get("x"), Some("1"));
}
