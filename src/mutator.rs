//! Deferred, reusable request configuration

use crate::error::Result;
use crate::request::HttpRequest;
use std::fmt;
use std::sync::Arc;

type ApplyFn = dyn Fn(&mut HttpRequest) -> Result<()> + Send + Sync + 'static;

/// A unit of configuration applied to a request on demand
///
/// Building a mutator has no effect on any request. Mutators only capture
/// immutable values, so they are cheap to clone and can be shared across
/// threads and applied to any number of requests.
#[derive(Clone)]
pub struct Mutator {
    apply: Arc<ApplyFn>,
}

impl Mutator {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut HttpRequest) -> Result<()> + Send + Sync + 'static,
    {
        Self { apply: Arc::new(f) }
    }

    /// A mutator that leaves the request untouched
    pub fn noop() -> Self {
        Self::new(|_| Ok(()))
    }

    /// Apply this mutator, propagating any failure from the request unchanged
    pub fn apply(&self, request: &mut HttpRequest) -> Result<()> {
        (self.apply)(request)
    }

    /// Only apply when `predicate` holds for the request at application time
    pub fn when<P>(self, predicate: P) -> Self
    where
        P: Fn(&HttpRequest) -> bool + Send + Sync + 'static,
    {
        Self::new(move |request| {
            if predicate(request) {
                self.apply(request)
            } else {
                Ok(())
            }
        })
    }

    /// Apply `self`, then `next`
    pub fn then(self, next: Mutator) -> Self {
        Self::new(move |request| {
            self.apply(request)?;
            next.apply(request)
        })
    }

    /// Compose a sequence into one mutator, applied in iteration order
    pub fn chain<I>(mutators: I) -> Self
    where
        I: IntoIterator<Item = Mutator>,
    {
        let mutators: Vec<Mutator> = mutators.into_iter().collect();
        Self::new(move |request| {
            for mutator in &mutators {
                mutator.apply(request)?;
            }
            Ok(())
        })
    }
}

impl fmt::Debug for Mutator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mutator").finish_non_exhaustive()
    }
}
