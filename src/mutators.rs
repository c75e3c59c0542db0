//! Catalog of request mutators
//!
//! Every constructor here is pure: it captures its argument and returns a
//! [`Mutator`] that sets exactly one request property when applied. Values are
//! not checked until then, so an invalid header value or method token fails at
//! application time with the error raised by [`HttpRequest`](crate::HttpRequest).
//!
//! ```no_run
//! use std::time::Duration;
//! use webreq::mutators::{self, METHOD_POST};
//! use webreq::HttpRequest;
//!
//! # fn main() -> webreq::Result<()> {
//! let mut request = HttpRequest::new("https://api.example.com/items")?;
//! request.apply_all([
//!     &*METHOD_POST,
//!     &mutators::content_type("application/json"),
//!     &mutators::timeout(Duration::from_secs(10)),
//!     &mutators::use_cookies(),
//! ])?;
//! # Ok(())
//! # }
//! ```

use crate::auth::Credentials;
use crate::config::ProxyConfig;
use crate::mutator::Mutator;
use crate::request::{DecompressionMethods, HeaderKey, RequestCachePolicy};
use chrono::{DateTime, Utc};
use reqwest::Version;
use std::sync::{Arc, LazyLock};
use std::time::Duration;

pub static METHOD_GET: LazyLock<Mutator> = LazyLock::new(|| method("GET"));
pub static METHOD_HEAD: LazyLock<Mutator> = LazyLock::new(|| method("HEAD"));
pub static METHOD_POST: LazyLock<Mutator> = LazyLock::new(|| method("POST"));
pub static METHOD_PUT: LazyLock<Mutator> = LazyLock::new(|| method("PUT"));
pub static METHOD_DELETE: LazyLock<Mutator> = LazyLock::new(|| method("DELETE"));
pub static METHOD_CONNECT: LazyLock<Mutator> = LazyLock::new(|| method("CONNECT"));
pub static METHOD_OPTIONS: LazyLock<Mutator> = LazyLock::new(|| method("OPTIONS"));
pub static METHOD_TRACE: LazyLock<Mutator> = LazyLock::new(|| method("TRACE"));
pub static METHOD_PATCH: LazyLock<Mutator> = LazyLock::new(|| method("PATCH"));

/// Set the `Accept` header
pub fn accept(value: impl Into<String>) -> Mutator {
    let value = value.into();
    Mutator::new(move |request| request.set_accept(&value))
}

/// Whether the client follows redirects
pub fn allow_auto_redirect(value: bool) -> Mutator {
    Mutator::new(move |request| {
        request.set_allow_auto_redirect(value);
        Ok(())
    })
}

/// Whether the response body is buffered
pub fn allow_read_stream_buffering(value: bool) -> Mutator {
    Mutator::new(move |request| {
        request.set_allow_read_stream_buffering(value);
        Ok(())
    })
}

/// Whether the request body is buffered
pub fn allow_write_stream_buffering(value: bool) -> Mutator {
    Mutator::new(move |request| {
        request.set_allow_write_stream_buffering(value);
        Ok(())
    })
}

/// Content codings to negotiate and decode
pub fn automatic_decompression(value: DecompressionMethods) -> Mutator {
    Mutator::new(move |request| {
        request.set_automatic_decompression(value);
        Ok(())
    })
}

/// Set the request cache policy
pub fn cache_policy(value: RequestCachePolicy) -> Mutator {
    Mutator::new(move |request| {
        request.set_cache_policy(value);
        Ok(())
    })
}

/// Set extra `Connection` options; `keep-alive` and `close` are rejected on apply
pub fn connection(value: impl Into<String>) -> Mutator {
    let value = value.into();
    Mutator::new(move |request| request.set_connection(&value))
}

/// Set the connection group name
pub fn connection_group_name(value: impl Into<String>) -> Mutator {
    let value = value.into();
    Mutator::new(move |request| {
        request.set_connection_group_name(&value);
        Ok(())
    })
}

/// Set the request body length in bytes
pub fn content_length(value: u64) -> Mutator {
    Mutator::new(move |request| {
        request.set_content_length(value);
        Ok(())
    })
}

/// Set the `Content-Type` header
pub fn content_type(value: impl Into<String>) -> Mutator {
    let value = value.into();
    Mutator::new(move |request| request.set_content_type(&value))
}

/// Set the 100-continue timeout, truncated to whole milliseconds
pub fn continue_timeout(value: Duration) -> Mutator {
    let millis = milliseconds(value);
    Mutator::new(move |request| {
        request.set_continue_timeout(millis);
        Ok(())
    })
}

/// Give the request an empty cookie store unless it already has one
///
/// Re-applying never replaces or clears an existing store.
pub fn use_cookies() -> Mutator {
    Mutator::new(|request| {
        request.ensure_cookie_store();
        Ok(())
    })
}

/// Attach `value` as the request credentials; the same `Arc` is stored
pub fn credentials(value: Arc<dyn Credentials>) -> Mutator {
    Mutator::new(move |request| {
        request.set_credentials(Arc::clone(&value));
        Ok(())
    })
}

/// Set the `Date` header
pub fn date(value: DateTime<Utc>) -> Mutator {
    Mutator::new(move |request| request.set_date(value))
}

/// Set the `Expect` header; `100-continue` is rejected on apply
pub fn expect(value: impl Into<String>) -> Mutator {
    let value = value.into();
    Mutator::new(move |request| request.set_expect(&value))
}

/// Replace the value of a header, by name or by [`RequestHeader`](crate::RequestHeader)
pub fn set_header(key: impl Into<HeaderKey>, value: impl Into<String>) -> Mutator {
    let key = key.into();
    let value = value.into();
    Mutator::new(move |request| request.headers_mut().set(key.clone(), &value))
}

/// Append to a header, folding onto an existing value as `old,new`
pub fn add_header(key: impl Into<HeaderKey>, value: impl Into<String>) -> Mutator {
    let key = key.into();
    let value = value.into();
    Mutator::new(move |request| request.headers_mut().add(key.clone(), &value))
}

/// Override the `Host` header; an empty host is rejected on apply
pub fn host(value: impl Into<String>) -> Mutator {
    let value = value.into();
    Mutator::new(move |request| request.set_host(&value))
}

/// Set the `If-Modified-Since` header
pub fn if_modified_since(value: DateTime<Utc>) -> Mutator {
    Mutator::new(move |request| request.set_if_modified_since(value))
}

/// Whether the connection is kept open after the response
pub fn keep_alive(value: bool) -> Mutator {
    Mutator::new(move |request| {
        request.set_keep_alive(value);
        Ok(())
    })
}

/// Set the redirect limit; zero is rejected on apply
pub fn maximum_automatic_redirections(value: u32) -> Mutator {
    Mutator::new(move |request| request.set_maximum_automatic_redirections(value))
}

/// Set the response header limit in KiB
pub fn maximum_response_headers_length(kilobytes: u32) -> Mutator {
    Mutator::new(move |request| {
        request.set_maximum_response_headers_length(kilobytes);
        Ok(())
    })
}

/// Set the media type
pub fn media_type(value: impl Into<String>) -> Mutator {
    let value = value.into();
    Mutator::new(move |request| {
        request.set_media_type(&value);
        Ok(())
    })
}

/// Set an arbitrary method token; see the `METHOD_*` statics for the standard verbs
pub fn method(value: impl Into<String>) -> Mutator {
    let value = value.into();
    Mutator::new(move |request| request.set_method(&value))
}

/// Same as [`METHOD_GET`]
pub fn get_verb() -> Mutator {
    METHOD_GET.clone()
}

/// Whether the request may be pipelined
pub fn pipelined(value: bool) -> Mutator {
    Mutator::new(move |request| {
        request.set_pipelined(value);
        Ok(())
    })
}

/// Send credentials with the first request instead of waiting for a challenge
pub fn pre_authenticate(value: bool) -> Mutator {
    Mutator::new(move |request| {
        request.set_pre_authenticate(value);
        Ok(())
    })
}

/// Set the HTTP version; only HTTP/1.0, HTTP/1.1 and HTTP/2 are accepted on apply
pub fn protocol_version(value: Version) -> Mutator {
    Mutator::new(move |request| request.set_protocol_version(value))
}

/// Route the request through `value`; an unparsable proxy URL is rejected on apply
pub fn proxy(value: ProxyConfig) -> Mutator {
    Mutator::new(move |request| request.set_proxy(value.clone()))
}

/// Set the read/write timeout, truncated to whole milliseconds
pub fn read_write_timeout(value: Duration) -> Mutator {
    let millis = milliseconds(value);
    Mutator::new(move |request| {
        request.set_read_write_timeout(millis);
        Ok(())
    })
}

/// Set the `Referer` header
pub fn referer(value: impl Into<String>) -> Mutator {
    let value = value.into();
    Mutator::new(move |request| request.set_referer(&value))
}

/// Whether the body is sent with chunked transfer encoding
pub fn send_chunked(value: bool) -> Mutator {
    Mutator::new(move |request| {
        request.set_send_chunked(value);
        Ok(())
    })
}

/// Set the overall timeout, truncated to whole milliseconds
pub fn timeout(value: Duration) -> Mutator {
    let millis = milliseconds(value);
    Mutator::new(move |request| {
        request.set_timeout(millis);
        Ok(())
    })
}

/// Set extra transfer codings; requires `send_chunked(true)` first and rejects `chunked`
pub fn transfer_encoding(value: impl Into<String>) -> Mutator {
    let value = value.into();
    Mutator::new(move |request| request.set_transfer_encoding(&value))
}

/// Whether the platform's default credentials are used
pub fn use_default_credentials(value: bool) -> Mutator {
    Mutator::new(move |request| {
        request.set_use_default_credentials(value);
        Ok(())
    })
}

/// Set the `User-Agent` header
pub fn user_agent(value: impl Into<String>) -> Mutator {
    let value = value.into();
    Mutator::new(move |request| request.set_user_agent(&value))
}

// Whole milliseconds, truncated.
fn milliseconds(value: Duration) -> u64 {
    u64::try_from(value.as_millis()).unwrap_or(u64::MAX)
}
