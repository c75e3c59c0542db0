//! Request credentials and authentication header encoding

use base64::Engine;
use std::fmt;
use url::Url;

/// Authentication schemes a credential may be requested for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AuthScheme {
    Basic,
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scheme = match self {
            AuthScheme::Basic => "Basic",
        };
        f.write_str(scheme)
    }
}

/// Source of credentials for a request
///
/// Requests hold credentials behind an `Arc`, so a single provider can be
/// shared by any number of requests.
pub trait Credentials: fmt::Debug + Send + Sync {
    /// Credential to present to `url` for `scheme`, if any
    fn credential(&self, url: &Url, scheme: AuthScheme) -> Option<NetworkCredential>;
}

/// A plain username/password credential
#[derive(Clone, PartialEq, Eq)]
pub struct NetworkCredential {
    pub username: String,
    pub password: String,
    pub domain: Option<String>,
}

impl NetworkCredential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            domain: None,
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Login name, qualified with the domain when one is set
    pub fn qualified_username(&self) -> String {
        match &self.domain {
            Some(domain) => format!("{}\\{}", domain, self.username),
            None => self.username.clone(),
        }
    }
}

// Keep passwords out of debug output.
impl fmt::Debug for NetworkCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkCredential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("domain", &self.domain)
            .finish()
    }
}

impl Credentials for NetworkCredential {
    fn credential(&self, _url: &Url, _scheme: AuthScheme) -> Option<NetworkCredential> {
        Some(self.clone())
    }
}

/// Authentication helper
pub struct Auth;

impl Auth {
    /// Create basic auth header value
    pub fn basic_auth(username: &str, password: &str) -> String {
        let credentials = format!("{}:{}", username, password);
        let encoded = base64::engine::general_purpose::STANDARD.encode(credentials.as_bytes());
        format!("Basic {}", encoded)
    }
}
