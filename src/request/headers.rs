//! Request header collection and well-known header names

use crate::error::{Result, WebReqError};
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use std::fmt;

/// Well-known request headers, usable wherever a header name is expected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestHeader {
    CacheControl,
    Connection,
    Date,
    KeepAlive,
    Pragma,
    Trailer,
    TransferEncoding,
    Upgrade,
    Via,
    Warning,
    Allow,
    ContentLength,
    ContentType,
    ContentEncoding,
    ContentLanguage,
    ContentLocation,
    ContentMd5,
    ContentRange,
    Expires,
    LastModified,
    Accept,
    AcceptCharset,
    AcceptEncoding,
    AcceptLanguage,
    Authorization,
    Cookie,
    Expect,
    From,
    Host,
    IfMatch,
    IfModifiedSince,
    IfNoneMatch,
    IfRange,
    IfUnmodifiedSince,
    MaxForwards,
    ProxyAuthorization,
    Referer,
    Range,
    Te,
    Translate,
    UserAgent,
}

impl RequestHeader {
    /// The header field name
    pub fn name(self) -> HeaderName {
        match self {
            RequestHeader::CacheControl => header::CACHE_CONTROL,
            RequestHeader::Connection => header::CONNECTION,
            RequestHeader::Date => header::DATE,
            RequestHeader::KeepAlive => HeaderName::from_static("keep-alive"),
            RequestHeader::Pragma => header::PRAGMA,
            RequestHeader::Trailer => header::TRAILER,
            RequestHeader::TransferEncoding => header::TRANSFER_ENCODING,
            RequestHeader::Upgrade => header::UPGRADE,
            RequestHeader::Via => header::VIA,
            RequestHeader::Warning => header::WARNING,
            RequestHeader::Allow => header::ALLOW,
            RequestHeader::ContentLength => header::CONTENT_LENGTH,
            RequestHeader::ContentType => header::CONTENT_TYPE,
            RequestHeader::ContentEncoding => header::CONTENT_ENCODING,
            RequestHeader::ContentLanguage => header::CONTENT_LANGUAGE,
            RequestHeader::ContentLocation => header::CONTENT_LOCATION,
            RequestHeader::ContentMd5 => HeaderName::from_static("content-md5"),
            RequestHeader::ContentRange => header::CONTENT_RANGE,
            RequestHeader::Expires => header::EXPIRES,
            RequestHeader::LastModified => header::LAST_MODIFIED,
            RequestHeader::Accept => header::ACCEPT,
            RequestHeader::AcceptCharset => header::ACCEPT_CHARSET,
            RequestHeader::AcceptEncoding => header::ACCEPT_ENCODING,
            RequestHeader::AcceptLanguage => header::ACCEPT_LANGUAGE,
            RequestHeader::Authorization => header::AUTHORIZATION,
            RequestHeader::Cookie => header::COOKIE,
            RequestHeader::Expect => header::EXPECT,
            RequestHeader::From => header::FROM,
            RequestHeader::Host => header::HOST,
            RequestHeader::IfMatch => header::IF_MATCH,
            RequestHeader::IfModifiedSince => header::IF_MODIFIED_SINCE,
            RequestHeader::IfNoneMatch => header::IF_NONE_MATCH,
            RequestHeader::IfRange => header::IF_RANGE,
            RequestHeader::IfUnmodifiedSince => header::IF_UNMODIFIED_SINCE,
            RequestHeader::MaxForwards => header::MAX_FORWARDS,
            RequestHeader::ProxyAuthorization => header::PROXY_AUTHORIZATION,
            RequestHeader::Referer => header::REFERER,
            RequestHeader::Range => header::RANGE,
            RequestHeader::Te => header::TE,
            RequestHeader::Translate => HeaderName::from_static("translate"),
            RequestHeader::UserAgent => header::USER_AGENT,
        }
    }
}

impl fmt::Display for RequestHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().as_str())
    }
}

/// A header addressed either by free-form name or by well-known enumerant
///
/// Names are only checked when the key is resolved, so building a key from an
/// invalid string never fails by itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderKey {
    Name(String),
    Known(RequestHeader),
    Resolved(HeaderName),
}

impl HeaderKey {
    /// Resolve to a concrete header name
    pub fn resolve(&self) -> Result<HeaderName> {
        match self {
            HeaderKey::Name(name) => HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| WebReqError::InvalidHeaderName(name.clone())),
            HeaderKey::Known(known) => Ok(known.name()),
            HeaderKey::Resolved(name) => Ok(name.clone()),
        }
    }
}

impl From<&str> for HeaderKey {
    fn from(name: &str) -> Self {
        HeaderKey::Name(name.to_string())
    }
}

impl From<String> for HeaderKey {
    fn from(name: String) -> Self {
        HeaderKey::Name(name)
    }
}

impl From<RequestHeader> for HeaderKey {
    fn from(header: RequestHeader) -> Self {
        HeaderKey::Known(header)
    }
}

impl From<HeaderName> for HeaderKey {
    fn from(name: HeaderName) -> Self {
        HeaderKey::Resolved(name)
    }
}

impl fmt::Display for HeaderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderKey::Name(name) => f.write_str(name),
            HeaderKey::Known(known) => fmt::Display::fmt(known, f),
            HeaderKey::Resolved(name) => f.write_str(name.as_str()),
        }
    }
}

/// Header collection owned by a request
///
/// Each key holds a single value. `add` folds repeated values into one
/// comma-separated value in the order they were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestHeaders {
    map: HeaderMap,
}

impl RequestHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value for `key`, exactly as it was set
    ///
    /// Values are stored from `&str`, so non-ASCII text reads back unchanged.
    pub fn get(&self, key: impl Into<HeaderKey>) -> Option<&str> {
        let name = key.into().resolve().ok()?;
        self.map
            .get(&name)
            .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
    }

    /// Replace whatever value `key` currently holds
    pub fn set(&mut self, key: impl Into<HeaderKey>, value: &str) -> Result<()> {
        let name = key.into().resolve()?;
        let value = header_value(&name, value.as_bytes())?;
        self.map.insert(name, value);
        Ok(())
    }

    /// Append `value`, joining onto any existing value with a bare comma
    pub fn add(&mut self, key: impl Into<HeaderKey>, value: &str) -> Result<()> {
        let name = key.into().resolve()?;
        let folded = match self.map.get(&name) {
            Some(existing) => {
                let mut bytes = existing.as_bytes().to_vec();
                bytes.push(b',');
                bytes.extend_from_slice(value.as_bytes());
                bytes
            }
            None => value.as_bytes().to_vec(),
        };
        let folded = header_value(&name, &folded)?;
        self.map.insert(name, folded);
        Ok(())
    }

    /// Remove `key`, returning whether it was present
    pub fn remove(&mut self, key: impl Into<HeaderKey>) -> bool {
        match key.into().resolve() {
            Ok(name) => self.map.remove(&name).is_some(),
            Err(_) => false,
        }
    }

    pub fn contains(&self, key: impl Into<HeaderKey>) -> bool {
        key.into()
            .resolve()
            .map(|name| self.map.contains_key(&name))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&HeaderName, &HeaderValue)> {
        self.map.iter()
    }

    /// Underlying header map, as handed to the HTTP client
    pub fn as_map(&self) -> &HeaderMap {
        &self.map
    }
}

fn header_value(name: &HeaderName, bytes: &[u8]) -> Result<HeaderValue> {
    HeaderValue::from_bytes(bytes).map_err(|_| WebReqError::InvalidHeaderValue {
        name: name.to_string(),
        value: String::from_utf8_lossy(bytes).into_owned(),
    })
}
