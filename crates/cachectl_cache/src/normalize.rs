//! Directive normalization.
//!
//! Converts [`DirectiveArgs`] into concrete seconds, resolves whether a
//! reverse proxy may keep the response and fills in `public` when the caller
//! left the keyword out of a shared-cacheable response.

use http::HeaderValue;
use serde::Serialize;
use tracing::debug;

use crate::directive::{DirectiveArgs, DirectiveKey};
use crate::duration::{DurationValue, convert_to_seconds};
use crate::error::CacheError;
use crate::setting::ReverseProxy;

/// Concrete directive values, durations in seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Directives {
    pub directive: Option<String>,
    pub max_age: Option<u64>,
    pub s_maxage: Option<u64>,
    pub stale_while_revalidate: Option<u64>,
    pub stale_if_error: Option<u64>,
}

impl Directives {
    /// Seconds value for one of the four duration keys.
    pub fn seconds(&self, key: DirectiveKey) -> Option<u64> {
        match key {
            DirectiveKey::Directive => None,
            DirectiveKey::MaxAge => self.max_age,
            DirectiveKey::SMaxAge => self.s_maxage,
            DirectiveKey::StaleWhileRevalidate => self.stale_while_revalidate,
            DirectiveKey::StaleIfError => self.stale_if_error,
        }
    }

    /// Total time shared caches are asked to hold the response, absent as 0.
    pub fn shared_lifetime(&self) -> u64 {
        DirectiveKey::ALL
            .into_iter()
            .filter(|key| key.is_shared())
            .filter_map(|key| self.seconds(key))
            .fold(0, u64::saturating_add)
    }

    pub fn is_private(&self) -> bool {
        self.directive
            .as_deref()
            .is_some_and(|d| d.to_ascii_lowercase().contains("private"))
    }

    /// Header tokens in emission order, absent entries skipped.
    pub fn tokens(&self) -> Vec<String> {
        DirectiveKey::ALL
            .into_iter()
            .filter_map(|key| match key {
                DirectiveKey::Directive => self.directive.clone(),
                _ => self.seconds(key).map(|secs| format!("{key}={secs}")),
            })
            .collect()
    }

    fn is_empty(&self) -> bool {
        self.directive.is_none() && DirectiveKey::ALL.into_iter().all(|k| self.seconds(k).is_none())
    }
}

/// Outcome of normalizing one set of [`DirectiveArgs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedCacheControl {
    directives: Directives,
    reverse_proxy: bool,
    is_empty: bool,
}

impl NormalizedCacheControl {
    pub fn directives(&self) -> &Directives {
        &self.directives
    }

    /// True when shared caches may keep the response.
    pub fn is_reverse_proxy_cacheable(&self) -> bool {
        self.reverse_proxy
    }

    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    /// `Cache-Control` value, e.g. `public, max-age=60, s-maxage=3600`.
    pub fn header_string(&self) -> String {
        self.directives.tokens().join(", ")
    }

    /// Header value, or `None` when nothing is left to emit.
    pub fn header_value(&self) -> Result<Option<HeaderValue>, CacheError> {
        if self.is_empty {
            return Ok(None);
        }
        let value = self.header_string();
        HeaderValue::from_str(&value)
            .map(Some)
            .map_err(|source| CacheError::InvalidHeaderValue { value, source })
    }

    /// Feed the resolved values back in as arguments.
    pub fn to_args(&self) -> DirectiveArgs {
        let d = &self.directives;
        DirectiveArgs {
            directive: d.directive.clone(),
            max_age: d.max_age.map(DurationValue::Seconds),
            s_maxage: d.s_maxage.map(DurationValue::Seconds),
            stale_while_revalidate: d.stale_while_revalidate.map(DurationValue::Seconds),
            stale_if_error: d.stale_if_error.map(DurationValue::Seconds),
        }
    }
}

impl std::fmt::Display for NormalizedCacheControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.header_string())
    }
}

/// Normalize cache arguments under the given reverse proxy setting.
pub fn normalize(
    args: &DirectiveArgs,
    setting: ReverseProxy,
) -> Result<NormalizedCacheControl, CacheError> {
    let mut directives = Directives {
        directive: args
            .directive
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string),
        max_age: convert_to_seconds(args.max_age.as_ref())?,
        s_maxage: convert_to_seconds(args.s_maxage.as_ref())?,
        stale_while_revalidate: convert_to_seconds(args.stale_while_revalidate.as_ref())?,
        stale_if_error: convert_to_seconds(args.stale_if_error.as_ref())?,
    };

    let reverse_proxy = match setting {
        ReverseProxy::Enabled => true,
        ReverseProxy::Disabled => false,
        ReverseProxy::Auto => directives.shared_lifetime() > 0 && !directives.is_private(),
    };

    if directives.directive.is_none() && reverse_proxy {
        directives.directive = Some("public".to_string());
    }

    let is_empty = directives.is_empty();

    debug!(
        target: "cachectl::normalize",
        setting = %setting,
        reverse_proxy,
        is_empty,
        "Normalized cache directives"
    );

    Ok(NormalizedCacheControl {
        directives,
        reverse_proxy,
        is_empty,
    })
}
