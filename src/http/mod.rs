//! Hand-off to the reqwest client
//!
//! A configured [`HttpRequest`] is split into client-level settings (timeouts,
//! redirects, decompression, cookies, proxy, pooling) and a concrete
//! [`reqwest::Request`]. Sending it is left to the caller.

use crate::auth::{Auth, AuthScheme};
use crate::error::{Result, WebReqError};
use crate::request::{DecompressionMethods, HttpRequest, RequestHeader};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, ClientBuilder, Version};
use std::time::Duration;

/// Build a client carrying the request's client-level settings
pub fn client_builder(request: &HttpRequest) -> Result<ClientBuilder> {
    let decompression = request.automatic_decompression();
    let mut builder = ClientBuilder::new()
        .timeout(Duration::from_millis(request.timeout()))
        .read_timeout(Duration::from_millis(request.read_write_timeout()))
        .redirect(if request.allow_auto_redirect() {
            reqwest::redirect::Policy::limited(request.maximum_automatic_redirections() as usize)
        } else {
            reqwest::redirect::Policy::none()
        })
        .gzip(decompression.contains(DecompressionMethods::GZIP))
        .deflate(decompression.contains(DecompressionMethods::DEFLATE))
        .brotli(decompression.contains(DecompressionMethods::BROTLI));

    if let Some(store) = request.cookie_store() {
        builder = builder.cookie_provider(store.clone());
    }

    // Configure proxy if specified
    if let Some(proxy_config) = request.proxy() {
        let proxy = reqwest::Proxy::all(&proxy_config.url)
            .map_err(|e| WebReqError::Config(format!("Invalid proxy: {}", e)))?;

        let proxy = if let (Some(username), Some(password)) =
            (&proxy_config.username, &proxy_config.password)
        {
            proxy.basic_auth(username, password)
        } else {
            proxy
        };

        builder = builder.proxy(proxy);
    }

    if !request.keep_alive() {
        builder = builder.pool_max_idle_per_host(0);
    }

    builder = match request.protocol_version() {
        Version::HTTP_2 => builder.http2_prior_knowledge(),
        _ => builder.http1_only(),
    };

    Ok(builder)
}

/// Build a client for `request`
pub fn client(request: &HttpRequest) -> Result<Client> {
    client_builder(request)?.build().map_err(WebReqError::Http)
}

/// Turn the configured request into a reqwest request without sending it
pub fn prepare(client: &Client, request: &HttpRequest) -> Result<reqwest::Request> {
    let headers = wire_headers(request)?;
    let prepared = client
        .request(request.method().clone(), request.url().clone())
        .headers(headers)
        .version(request.protocol_version())
        .build()
        .map_err(WebReqError::Http)?;

    if log::log_enabled!(log::Level::Debug) {
        log_request_headers(&prepared);
    }

    Ok(prepared)
}

/// Headers as they go on the wire, including the ones derived from properties
pub fn wire_headers(request: &HttpRequest) -> Result<HeaderMap> {
    let mut headers = request.headers().as_map().clone();

    if let Some(host) = request.host() {
        headers.insert(RequestHeader::Host.name(), header_value("Host", host)?);
    }

    if request.send_chunked() {
        let codings = match request.transfer_encoding() {
            Some(extra) => format!("{}, chunked", extra),
            None => "chunked".to_string(),
        };
        headers.insert(
            RequestHeader::TransferEncoding.name(),
            header_value("Transfer-Encoding", &codings)?,
        );
    } else if let Some(length) = request.content_length() {
        headers.insert(RequestHeader::ContentLength.name(), HeaderValue::from(length));
    }

    if let Some(directive) = request.cache_policy().and_then(|p| p.cache_control()) {
        let cache_control = RequestHeader::CacheControl.name();
        if !headers.contains_key(&cache_control) {
            headers.insert(cache_control, HeaderValue::from_static(directive));
        }
    }

    if request.pre_authenticate() {
        let authorization = RequestHeader::Authorization.name();
        if !headers.contains_key(&authorization) {
            let credential = request
                .credentials()
                .and_then(|c| c.credential(request.url(), AuthScheme::Basic));
            match credential {
                Some(credential) => {
                    let value = Auth::basic_auth(
                        &credential.qualified_username(),
                        &credential.password,
                    );
                    headers.insert(authorization, header_value("Authorization", &value)?);
                }
                None => log::warn!("pre-authentication requested without credentials"),
            }
        }
    }

    if !request.keep_alive() {
        headers.insert(
            RequestHeader::Connection.name(),
            HeaderValue::from_static("close"),
        );
    }

    Ok(headers)
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| WebReqError::InvalidHeaderValue {
        name: name.to_string(),
        value: value.to_string(),
    })
}

fn log_request_headers(request: &reqwest::Request) {
    log::debug!("> {} {}", request.method(), request.url());
    for (name, value) in request.headers().iter() {
        if *name == AUTHORIZATION {
            log::debug!("> {}: <redacted>", name);
            continue;
        }
        let value = value.to_str().unwrap_or("<non-utf8>");
        log::debug!("> {}: {}", name, value);
    }
}
