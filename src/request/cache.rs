//! Request cache policy

use serde::{Deserialize, Serialize};

/// How a request may be satisfied from caches along the way
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestCacheLevel {
    #[default]
    Default,
    BypassCache,
    CacheOnly,
    CacheIfAvailable,
    Revalidate,
    Reload,
    NoCacheNoStore,
}

/// Cache policy attached to a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RequestCachePolicy {
    pub level: RequestCacheLevel,
}

impl RequestCachePolicy {
    pub fn new(level: RequestCacheLevel) -> Self {
        Self { level }
    }

    /// `Cache-Control` directive that expresses this policy on the wire
    pub fn cache_control(&self) -> Option<&'static str> {
        match self.level {
            RequestCacheLevel::Default => None,
            RequestCacheLevel::BypassCache | RequestCacheLevel::NoCacheNoStore => {
                Some("no-store, no-cache")
            }
            RequestCacheLevel::Reload | RequestCacheLevel::Revalidate => Some("no-cache"),
            RequestCacheLevel::CacheOnly => Some("only-if-cached"),
            RequestCacheLevel::CacheIfAvailable => Some("max-stale"),
        }
    }
}

impl From<RequestCacheLevel> for RequestCachePolicy {
    fn from(level: RequestCacheLevel) -> Self {
        Self::new(level)
    }
}
