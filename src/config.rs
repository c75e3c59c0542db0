//! Request profiles loaded from JSON
//!
//! A profile is a declarative description of request settings that compiles
//! into the same mutators a caller would build by hand.

use crate::error::{Result, WebReqError};
use crate::mutator::Mutator;
use crate::mutators;
use crate::request::DecompressionMethods;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// Proxy configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConfig {
    pub url: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl ProxyConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: None,
            password: None,
        }
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }
}

/// Declarative request settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RequestProfile {
    pub method: Option<String>,
    pub accept: Option<String>,
    pub content_type: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    /// Headers set by name, replacing earlier values
    pub headers: BTreeMap<String, String>,
    /// Headers appended in order with comma folding
    pub append_headers: Vec<(String, String)>,
    pub timeout_ms: Option<u64>,
    pub read_write_timeout_ms: Option<u64>,
    pub allow_auto_redirect: Option<bool>,
    pub pre_authenticate: Option<bool>,
    pub use_cookies: bool,
    pub decompression: Vec<String>,
    pub keep_alive: Option<bool>,
    pub maximum_automatic_redirections: Option<u32>,
    pub proxy: Option<ProxyConfig>,
}

impl RequestProfile {
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        log::debug!("loaded request profile from {:?}", path);
        Self::from_json(&contents)
    }

    /// Compile into mutators: method first, then headers, then properties
    pub fn mutators(&self) -> Result<Vec<Mutator>> {
        let mut out = Vec::new();

        if let Some(method) = &self.method {
            out.push(mutators::method(method.as_str()));
        }

        if let Some(accept) = &self.accept {
            out.push(mutators::accept(accept.as_str()));
        }
        if let Some(content_type) = &self.content_type {
            out.push(mutators::content_type(content_type.as_str()));
        }
        if let Some(user_agent) = &self.user_agent {
            out.push(mutators::user_agent(user_agent.as_str()));
        }
        if let Some(referer) = &self.referer {
            out.push(mutators::referer(referer.as_str()));
        }
        for (name, value) in &self.headers {
            out.push(mutators::set_header(name.as_str(), value.as_str()));
        }
        for (name, value) in &self.append_headers {
            out.push(mutators::add_header(name.as_str(), value.as_str()));
        }

        if let Some(millis) = self.timeout_ms {
            out.push(mutators::timeout(Duration::from_millis(millis)));
        }
        if let Some(millis) = self.read_write_timeout_ms {
            out.push(mutators::read_write_timeout(Duration::from_millis(millis)));
        }
        if let Some(value) = self.allow_auto_redirect {
            out.push(mutators::allow_auto_redirect(value));
        }
        if let Some(value) = self.maximum_automatic_redirections {
            out.push(mutators::maximum_automatic_redirections(value));
        }
        if let Some(value) = self.pre_authenticate {
            out.push(mutators::pre_authenticate(value));
        }
        if self.use_cookies {
            out.push(mutators::use_cookies());
        }
        if !self.decompression.is_empty() {
            out.push(mutators::automatic_decompression(
                self.decompression_methods()?,
            ));
        }
        if let Some(value) = self.keep_alive {
            out.push(mutators::keep_alive(value));
        }
        if let Some(proxy) = &self.proxy {
            out.push(mutators::proxy(proxy.clone()));
        }

        Ok(out)
    }

    /// The whole profile as a single mutator
    pub fn to_mutator(&self) -> Result<Mutator> {
        Ok(Mutator::chain(self.mutators()?))
    }

    fn decompression_methods(&self) -> Result<DecompressionMethods> {
        self.decompression
            .iter()
            .try_fold(DecompressionMethods::NONE, |acc, coding| {
                DecompressionMethods::from_coding(coding)
                    .map(|methods| acc | methods)
                    .ok_or_else(|| {
                        WebReqError::Config(format!("Unsupported decompression: {}", coding))
                    })
            })
    }
}
