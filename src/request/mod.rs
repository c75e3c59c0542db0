//! The outbound request record that mutators configure
//!
//! `HttpRequest` holds every configurable property of a request prior to
//! dispatch. Setters validate what they are given, so a bad value surfaces when
//! a mutator is applied rather than when it is constructed.

use crate::auth::Credentials;
use crate::config::ProxyConfig;
use crate::error::{Result, WebReqError};
use crate::mutator::Mutator;
use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::cookie::Jar;
use reqwest::{Method, Version};
use std::sync::Arc;
use url::Url;

pub mod cache;
pub mod decompression;
pub mod headers;

pub use cache::{RequestCacheLevel, RequestCachePolicy};
pub use decompression::DecompressionMethods;
pub use headers::{HeaderKey, RequestHeader, RequestHeaders};

/// Default overall timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 100_000;
/// Default read/write timeout in milliseconds
pub const DEFAULT_READ_WRITE_TIMEOUT_MS: u64 = 300_000;
/// Default 100-continue timeout in milliseconds
pub const DEFAULT_CONTINUE_TIMEOUT_MS: u64 = 350;
/// Default redirect limit
pub const DEFAULT_MAX_REDIRECTIONS: u32 = 50;
/// Default response header limit in KiB
pub const DEFAULT_MAX_RESPONSE_HEADERS_KB: u32 = 64;

const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// A configurable outbound HTTP request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    url: Url,
    method: Method,
    headers: RequestHeaders,
    allow_auto_redirect: bool,
    allow_read_stream_buffering: bool,
    allow_write_stream_buffering: bool,
    automatic_decompression: DecompressionMethods,
    cache_policy: Option<RequestCachePolicy>,
    cookie_store: Option<Arc<Jar>>,
    credentials: Option<Arc<dyn Credentials>>,
    pre_authenticate: bool,
    read_write_timeout: u64,
    timeout: u64,
    use_default_credentials: bool,
    connection_group_name: Option<String>,
    content_length: Option<u64>,
    continue_timeout: u64,
    host: Option<String>,
    keep_alive: bool,
    maximum_automatic_redirections: u32,
    maximum_response_headers_length: u32,
    media_type: Option<String>,
    pipelined: bool,
    protocol_version: Version,
    proxy: Option<ProxyConfig>,
    send_chunked: bool,
}

impl HttpRequest {
    /// Create a request for `url` with default settings
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|e| WebReqError::InvalidUrl(format!("Invalid URL '{}': {}", url, e)))?;
        Ok(Self::from_url(url))
    }

    pub fn from_url(url: Url) -> Self {
        Self {
            url,
            method: Method::GET,
            headers: RequestHeaders::new(),
            allow_auto_redirect: true,
            allow_read_stream_buffering: false,
            allow_write_stream_buffering: true,
            automatic_decompression: DecompressionMethods::NONE,
            cache_policy: None,
            cookie_store: None,
            credentials: None,
            pre_authenticate: false,
            read_write_timeout: DEFAULT_READ_WRITE_TIMEOUT_MS,
            timeout: DEFAULT_TIMEOUT_MS,
            use_default_credentials: false,
            connection_group_name: None,
            content_length: None,
            continue_timeout: DEFAULT_CONTINUE_TIMEOUT_MS,
            host: None,
            keep_alive: true,
            maximum_automatic_redirections: DEFAULT_MAX_REDIRECTIONS,
            maximum_response_headers_length: DEFAULT_MAX_RESPONSE_HEADERS_KB,
            media_type: None,
            pipelined: true,
            protocol_version: Version::HTTP_11,
            proxy: None,
            send_chunked: false,
        }
    }

    /// Apply a single mutator
    pub fn apply(&mut self, mutator: &Mutator) -> Result<&mut Self> {
        mutator.apply(self)?;
        Ok(self)
    }

    /// Apply mutators in order, stopping at the first failure
    pub fn apply_all<'a, I>(&mut self, mutators: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = &'a Mutator>,
    {
        for mutator in mutators {
            mutator.apply(self)?;
        }
        Ok(self)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &RequestHeaders {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut RequestHeaders {
        &mut self.headers
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Set the method from an arbitrary token such as `PROPFIND`
    pub fn set_method(&mut self, method: &str) -> Result<()> {
        self.method = Method::from_bytes(method.as_bytes())
            .map_err(|_| WebReqError::InvalidMethod(method.to_string()))?;
        Ok(())
    }

    pub fn accept(&self) -> Option<&str> {
        self.headers.get(RequestHeader::Accept)
    }

    pub fn set_accept(&mut self, value: &str) -> Result<()> {
        self.headers.set(RequestHeader::Accept, value)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(RequestHeader::ContentType)
    }

    pub fn set_content_type(&mut self, value: &str) -> Result<()> {
        self.headers.set(RequestHeader::ContentType, value)
    }

    pub fn referer(&self) -> Option<&str> {
        self.headers.get(RequestHeader::Referer)
    }

    pub fn set_referer(&mut self, value: &str) -> Result<()> {
        self.headers.set(RequestHeader::Referer, value)
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.headers.get(RequestHeader::UserAgent)
    }

    pub fn set_user_agent(&mut self, value: &str) -> Result<()> {
        self.headers.set(RequestHeader::UserAgent, value)
    }

    pub fn allow_auto_redirect(&self) -> bool {
        self.allow_auto_redirect
    }

    pub fn set_allow_auto_redirect(&mut self, value: bool) {
        self.allow_auto_redirect = value;
    }

    pub fn allow_read_stream_buffering(&self) -> bool {
        self.allow_read_stream_buffering
    }

    pub fn set_allow_read_stream_buffering(&mut self, value: bool) {
        self.allow_read_stream_buffering = value;
    }

    pub fn allow_write_stream_buffering(&self) -> bool {
        self.allow_write_stream_buffering
    }

    pub fn set_allow_write_stream_buffering(&mut self, value: bool) {
        self.allow_write_stream_buffering = value;
    }

    pub fn automatic_decompression(&self) -> DecompressionMethods {
        self.automatic_decompression
    }

    pub fn set_automatic_decompression(&mut self, value: DecompressionMethods) {
        self.automatic_decompression = value;
    }

    pub fn cache_policy(&self) -> Option<&RequestCachePolicy> {
        self.cache_policy.as_ref()
    }

    pub fn set_cache_policy(&mut self, value: RequestCachePolicy) {
        self.cache_policy = Some(value);
    }

    pub fn cookie_store(&self) -> Option<&Arc<Jar>> {
        self.cookie_store.as_ref()
    }

    pub fn set_cookie_store(&mut self, store: Arc<Jar>) {
        self.cookie_store = Some(store);
    }

    /// Install an empty cookie store unless one is already present
    ///
    /// An existing store is never replaced or cleared.
    pub fn ensure_cookie_store(&mut self) -> &Arc<Jar> {
        self.cookie_store.get_or_insert_with(|| {
            log::debug!("creating cookie store for {}", self.url);
            Arc::new(Jar::default())
        })
    }

    pub fn credentials(&self) -> Option<&Arc<dyn Credentials>> {
        self.credentials.as_ref()
    }

    pub fn set_credentials(&mut self, value: Arc<dyn Credentials>) {
        self.credentials = Some(value);
    }

    pub fn pre_authenticate(&self) -> bool {
        self.pre_authenticate
    }

    pub fn set_pre_authenticate(&mut self, value: bool) {
        self.pre_authenticate = value;
    }

    /// Read/write timeout in milliseconds
    pub fn read_write_timeout(&self) -> u64 {
        self.read_write_timeout
    }

    pub fn set_read_write_timeout(&mut self, millis: u64) {
        self.read_write_timeout = millis;
    }

    /// Overall timeout in milliseconds
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    pub fn set_timeout(&mut self, millis: u64) {
        self.timeout = millis;
    }

    pub fn use_default_credentials(&self) -> bool {
        self.use_default_credentials
    }

    pub fn set_use_default_credentials(&mut self, value: bool) {
        self.use_default_credentials = value;
    }

    pub fn connection(&self) -> Option<&str> {
        self.headers.get(RequestHeader::Connection)
    }

    /// Set extra `Connection` options; persistence is controlled by `keep_alive`
    pub fn set_connection(&mut self, value: &str) -> Result<()> {
        let lower = value.to_ascii_lowercase();
        if lower.contains("keep-alive") || lower.contains("close") {
            return Err(WebReqError::invalid_value(
                "connection",
                "use keep_alive to control connection persistence",
            ));
        }
        self.headers.set(RequestHeader::Connection, value)
    }

    pub fn connection_group_name(&self) -> Option<&str> {
        self.connection_group_name.as_deref()
    }

    pub fn set_connection_group_name(&mut self, value: &str) {
        self.connection_group_name = Some(value.to_string());
    }

    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    pub fn set_content_length(&mut self, value: u64) {
        self.content_length = Some(value);
    }

    /// 100-continue timeout in milliseconds
    pub fn continue_timeout(&self) -> u64 {
        self.continue_timeout
    }

    pub fn set_continue_timeout(&mut self, millis: u64) {
        self.continue_timeout = millis;
    }

    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.headers.get(RequestHeader::Date).and_then(parse_http_date)
    }

    pub fn set_date(&mut self, value: DateTime<Utc>) -> Result<()> {
        self.headers
            .set(RequestHeader::Date, &format_http_date(&value))
    }

    pub fn expect(&self) -> Option<&str> {
        self.headers.get(RequestHeader::Expect)
    }

    pub fn set_expect(&mut self, value: &str) -> Result<()> {
        if value.to_ascii_lowercase().contains("100-continue") {
            return Err(WebReqError::invalid_value(
                "expect",
                "100-continue is managed by the client",
            ));
        }
        self.headers.set(RequestHeader::Expect, value)
    }

    /// Host override; `None` means the host is taken from the URL
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn set_host(&mut self, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(WebReqError::invalid_value("host", "host must not be empty"));
        }
        self.host = Some(value.to_string());
        Ok(())
    }

    pub fn if_modified_since(&self) -> Option<DateTime<Utc>> {
        self.headers
            .get(RequestHeader::IfModifiedSince)
            .and_then(parse_http_date)
    }

    pub fn set_if_modified_since(&mut self, value: DateTime<Utc>) -> Result<()> {
        self.headers
            .set(RequestHeader::IfModifiedSince, &format_http_date(&value))
    }

    pub fn keep_alive(&self) -> bool {
        self.keep_alive
    }

    pub fn set_keep_alive(&mut self, value: bool) {
        self.keep_alive = value;
    }

    pub fn maximum_automatic_redirections(&self) -> u32 {
        self.maximum_automatic_redirections
    }

    pub fn set_maximum_automatic_redirections(&mut self, value: u32) -> Result<()> {
        if value == 0 {
            return Err(WebReqError::invalid_value(
                "maximum_automatic_redirections",
                "must be greater than zero",
            ));
        }
        self.maximum_automatic_redirections = value;
        Ok(())
    }

    /// Response header limit in KiB
    pub fn maximum_response_headers_length(&self) -> u32 {
        self.maximum_response_headers_length
    }

    pub fn set_maximum_response_headers_length(&mut self, kilobytes: u32) {
        self.maximum_response_headers_length = kilobytes;
    }

    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    pub fn set_media_type(&mut self, value: &str) {
        self.media_type = Some(value.to_string());
    }

    pub fn pipelined(&self) -> bool {
        self.pipelined
    }

    pub fn set_pipelined(&mut self, value: bool) {
        self.pipelined = value;
    }

    pub fn protocol_version(&self) -> Version {
        self.protocol_version
    }

    pub fn set_protocol_version(&mut self, version: Version) -> Result<()> {
        if version != Version::HTTP_10 && version != Version::HTTP_11 && version != Version::HTTP_2
        {
            return Err(WebReqError::UnsupportedVersion(format!("{:?}", version)));
        }
        self.protocol_version = version;
        Ok(())
    }

    pub fn proxy(&self) -> Option<&ProxyConfig> {
        self.proxy.as_ref()
    }

    pub fn set_proxy(&mut self, proxy: ProxyConfig) -> Result<()> {
        Url::parse(&proxy.url).map_err(|e| {
            WebReqError::invalid_value("proxy", format!("Invalid proxy '{}': {}", proxy.url, e))
        })?;
        self.proxy = Some(proxy);
        Ok(())
    }

    pub fn send_chunked(&self) -> bool {
        self.send_chunked
    }

    pub fn set_send_chunked(&mut self, value: bool) {
        self.send_chunked = value;
    }

    pub fn transfer_encoding(&self) -> Option<&str> {
        self.headers.get(RequestHeader::TransferEncoding)
    }

    /// Set additional transfer codings; requires chunked sending
    pub fn set_transfer_encoding(&mut self, value: &str) -> Result<()> {
        if !self.send_chunked {
            return Err(WebReqError::invalid_value(
                "transfer_encoding",
                "send_chunked must be enabled first",
            ));
        }
        if value.to_ascii_lowercase().contains("chunked") {
            return Err(WebReqError::invalid_value(
                "transfer_encoding",
                "chunked is implied by send_chunked",
            ));
        }
        self.headers.set(RequestHeader::TransferEncoding, value)
    }
}

fn format_http_date(value: &DateTime<Utc>) -> String {
    value.format(HTTP_DATE_FORMAT).to_string()
}

fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, HTTP_DATE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests;
