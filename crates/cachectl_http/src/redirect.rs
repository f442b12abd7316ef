use std::str::FromStr;

use http::header::CACHE_CONTROL;
use http::{HeaderValue, StatusCode};
use tracing::debug;

use cachectl_cache::{CacheError, RequestContext};

use crate::emitter::strip_shared_cache_blockers;
use crate::sink::HeaderSink;

/// `Cache-Control` forced onto permanent redirects.
pub const PERMANENT_REDIRECT_CACHE_CONTROL: &str =
    "max-age=3600, s-maxage=8640000, stale-while-revalidate=86400";

/// Status filter that makes permanent redirects cacheable by shared caches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectPolicy {
    permanent: HeaderValue,
}

impl Default for RedirectPolicy {
    fn default() -> Self {
        Self {
            permanent: HeaderValue::from_static(PERMANENT_REDIRECT_CACHE_CONTROL),
        }
    }
}

impl RedirectPolicy {
    pub fn new(permanent: HeaderValue) -> Self {
        Self { permanent }
    }

    pub fn permanent(&self) -> &HeaderValue {
        &self.permanent
    }

    /// Apply the policy for an outgoing redirect and hand `status` back.
    ///
    /// Only `301 Moved Permanently` is touched, and only when the request is
    /// cacheable at all.
    pub fn filter<S>(
        &self,
        sink: &mut S,
        ctx: &RequestContext,
        status: StatusCode,
        location: Option<&str>,
    ) -> StatusCode
    where
        S: HeaderSink + ?Sized,
    {
        if let Some(reason) = ctx.uncacheable_reason() {
            debug!(
                target: "cachectl::redirect",
                status = status.as_u16(),
                reason = reason.as_str(),
                "Leaving redirect headers alone"
            );
            return status;
        }

        if status == StatusCode::MOVED_PERMANENTLY {
            strip_shared_cache_blockers(sink);
            sink.set(CACHE_CONTROL, self.permanent.clone());
            debug!(
                target: "cachectl::redirect",
                location = location.unwrap_or(""),
                value = ?self.permanent,
                "Permanent redirect made cacheable"
            );
        }

        status
    }
}

impl FromStr for RedirectPolicy {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeaderValue::from_str(s.trim())
            .map(Self::new)
            .map_err(|source| CacheError::InvalidHeaderValue {
                value: s.to_string(),
                source,
            })
    }
}
