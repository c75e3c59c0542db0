use super::{HttpRequest, RequestHeader, RequestHeaders};
use crate::config::ProxyConfig;
use crate::error::WebReqError;
use chrono::{TimeZone, Utc};
use reqwest::header::HeaderName;
use reqwest::{Method, Version};

fn example_request() -> HttpRequest {
    HttpRequest::new("http://www.example.com/").expect("valid url")
}

#[test]
fn new_rejects_invalid_url() {
    let err = HttpRequest::new("not a url").expect_err("invalid url");
    assert!(matches!(err, WebReqError::InvalidUrl(_)));
}

#[test]
fn fresh_request_defaults() {
    let request = example_request();
    assert_eq!(request.method(), &Method::GET);
    assert!(request.headers().is_empty());
    assert!(request.allow_auto_redirect());
    assert!(!request.allow_read_stream_buffering());
    assert!(request.allow_write_stream_buffering());
    assert!(request.automatic_decompression().is_empty());
    assert!(request.cache_policy().is_none());
    assert!(request.cookie_store().is_none());
    assert!(request.credentials().is_none());
    assert_eq!(request.timeout(), 100_000);
    assert_eq!(request.read_write_timeout(), 300_000);
    assert_eq!(request.maximum_automatic_redirections(), 50);
    assert_eq!(request.protocol_version(), Version::HTTP_11);
    assert!(request.keep_alive());
}

#[test]
fn headers_set_replaces_value() {
    let mut headers = RequestHeaders::new();
    headers.set("X-Foo", "one").expect("set");
    headers.set("x-foo", "two").expect("set");
    assert_eq!(headers.get("X-FOO"), Some("two"));
    assert_eq!(headers.len(), 1);
}

#[test]
fn headers_add_folds_with_bare_comma() {
    let mut headers = RequestHeaders::new();
    headers.add(RequestHeader::AcceptLanguage, "ur-PK").expect("add");
    headers.add("Accept-Language", "en").expect("add");
    headers.add(RequestHeader::AcceptLanguage, "fr").expect("add");
    assert_eq!(headers.get(RequestHeader::AcceptLanguage), Some("ur-PK,en,fr"));
}

#[test]
fn headers_known_and_named_keys_agree() {
    let mut headers = RequestHeaders::new();
    headers
        .set(RequestHeader::ContentType, "application/json")
        .expect("set");
    assert_eq!(headers.get("content-type"), Some("application/json"));
    assert_eq!(
        headers.get(HeaderName::from_static("content-type")),
        Some("application/json")
    );
    assert!(headers.contains(RequestHeader::ContentType));
    assert!(headers.remove("Content-Type"));
    assert!(!headers.contains(RequestHeader::ContentType));
}

#[test]
fn headers_reject_invalid_name_and_value() {
    let mut headers = RequestHeaders::new();
    let err = headers.set("bad name", "value").expect_err("invalid name");
    assert!(matches!(err, WebReqError::InvalidHeaderName(_)));

    let err = headers.add("X-Foo", "line\nbreak").expect_err("invalid value");
    assert!(matches!(err, WebReqError::InvalidHeaderValue { .. }));
    assert!(headers.get("bad name").is_none());
}

#[test]
fn well_known_header_names() {
    assert_eq!(RequestHeader::UserAgent.name().as_str(), "user-agent");
    assert_eq!(RequestHeader::ContentMd5.name().as_str(), "content-md5");
    assert_eq!(RequestHeader::KeepAlive.to_string(), "keep-alive");
}

#[test]
fn set_method_accepts_extension_tokens() {
    let mut request = example_request();
    request.set_method("PROPFIND").expect("extension method");
    assert_eq!(request.method().as_str(), "PROPFIND");

    let err = request.set_method("GET /").expect_err("invalid token");
    assert!(matches!(err, WebReqError::InvalidMethod(_)));
    assert_eq!(request.method().as_str(), "PROPFIND");
}

#[test]
fn ensure_cookie_store_keeps_existing_store() {
    let mut request = example_request();
    let first = request.ensure_cookie_store().clone();
    let second = request.ensure_cookie_store().clone();
    assert!(std::sync::Arc::ptr_eq(&first, &second));
}

#[test]
fn header_backed_properties_read_from_headers() {
    let mut request = example_request();
    request.set_user_agent("webreq/1.0").expect("user agent");
    request.set_referer("http://referrer.example/").expect("referer");
    assert_eq!(request.headers().get("User-Agent"), Some("webreq/1.0"));
    assert_eq!(request.referer(), Some("http://referrer.example/"));
}

#[test]
fn dates_round_trip_through_headers() {
    let mut request = example_request();
    let when = Utc.with_ymd_and_hms(2018, 3, 4, 5, 6, 7).single().expect("date");
    request.set_if_modified_since(when).expect("if-modified-since");
    assert_eq!(
        request.headers().get(RequestHeader::IfModifiedSince),
        Some("Sun, 04 Mar 2018 05:06:07 GMT")
    );
    assert_eq!(request.if_modified_since(), Some(when));

    request.set_date(when).expect("date");
    assert_eq!(request.date(), Some(when));
}

#[test]
fn connection_rejects_persistence_tokens() {
    let mut request = example_request();
    let err = request.set_connection("Keep-Alive").expect_err("reserved");
    assert!(matches!(err, WebReqError::InvalidValue { property: "connection", .. }));
    request.set_connection("upgrade").expect("allowed");
    assert_eq!(request.connection(), Some("upgrade"));
}

#[test]
fn expect_rejects_100_continue() {
    let mut request = example_request();
    let err = request.set_expect("100-continue").expect_err("reserved");
    assert!(matches!(err, WebReqError::InvalidValue { property: "expect", .. }));
}

#[test]
fn transfer_encoding_requires_send_chunked() {
    let mut request = example_request();
    let err = request.set_transfer_encoding("gzip").expect_err("not chunked");
    assert!(matches!(
        err,
        WebReqError::InvalidValue {
            property: "transfer_encoding",
            ..
        }
    ));

    request.set_send_chunked(true);
    request.set_transfer_encoding("gzip").expect("chunked");
    assert_eq!(request.transfer_encoding(), Some("gzip"));
}

#[test]
fn redirect_limit_must_be_positive() {
    let mut request = example_request();
    let err = request
        .set_maximum_automatic_redirections(0)
        .expect_err("zero");
    assert!(matches!(err, WebReqError::InvalidValue { .. }));
    assert_eq!(request.maximum_automatic_redirections(), 50);
}

#[test]
fn protocol_version_limited_to_supported() {
    let mut request = example_request();
    request.set_protocol_version(Version::HTTP_2).expect("h2");
    let err = request
        .set_protocol_version(Version::HTTP_09)
        .expect_err("unsupported");
    assert!(matches!(err, WebReqError::UnsupportedVersion(_)));
    assert_eq!(request.protocol_version(), Version::HTTP_2);
}

#[test]
fn host_and_proxy_validation() {
    let mut request = example_request();
    assert!(request.set_host("  ").is_err());
    request.set_host("api.example.com").expect("host");
    assert_eq!(request.host(), Some("api.example.com"));

    let err = request
        .set_proxy(ProxyConfig::new("::not-a-url"))
        .expect_err("bad proxy");
    assert!(matches!(err, WebReqError::InvalidValue { property: "proxy", .. }));
    assert!(request.proxy().is_none());
}

#[test]
fn headers_get_returns_non_ascii_text_as_set() {
    let mut headers = RequestHeaders::new();
    headers.set("X-Name", "café").expect("set");
    assert_eq!(headers.get("X-Name"), Some("café"));

    headers.add("X-Name", "thé").expect("add");
    assert_eq!(headers.get("X-Name"), Some("café,thé"));
}
