//! Cache-Control emission.
//!
//! Writes the normalized header and, when a reverse proxy may keep the
//! response, drops the headers that stop shared caches from storing it.

use http::HeaderName;
use http::header::{CACHE_CONTROL, EXPIRES, PRAGMA, SET_COOKIE};
use tracing::debug;

use cachectl_cache::{CacheError, DirectiveArgs, NormalizedCacheControl, ReverseProxy, normalize};

use crate::sink::HeaderSink;

/// Headers removed whenever a shared cache is allowed to store the response.
pub const SHARED_CACHE_BLOCKERS: [HeaderName; 3] = [SET_COOKIE, PRAGMA, EXPIRES];

/// Normalize `args` and apply the result to `sink`.
pub fn emit_cache_control<S>(
    sink: &mut S,
    args: &DirectiveArgs,
    setting: ReverseProxy,
) -> Result<NormalizedCacheControl, CacheError>
where
    S: HeaderSink + ?Sized,
{
    let cc = normalize(args, setting)?;
    apply_cache_control(sink, &cc, args.len())?;
    Ok(cc)
}

/// Apply an already normalized result.
///
/// With no caller arguments the header is removed rather than set, leaving
/// caching decisions to whatever sits downstream.
pub fn apply_cache_control<S>(
    sink: &mut S,
    cc: &NormalizedCacheControl,
    arg_count: usize,
) -> Result<(), CacheError>
where
    S: HeaderSink + ?Sized,
{
    let value = if arg_count == 0 { None } else { cc.header_value()? };

    match value {
        Some(value) => {
            debug!(target: "cachectl::emit", value = ?value, "Setting Cache-Control");
            sink.set(CACHE_CONTROL, value);
        }
        None => {
            debug!(target: "cachectl::emit", arg_count, "Removing Cache-Control");
            sink.remove(&CACHE_CONTROL);
        }
    }

    if cc.is_reverse_proxy_cacheable() {
        strip_shared_cache_blockers(sink);
    }

    Ok(())
}

/// Remove `Set-Cookie`, `Pragma` and `Expires`.
pub fn strip_shared_cache_blockers<S>(sink: &mut S)
where
    S: HeaderSink + ?Sized,
{
    for name in &SHARED_CACHE_BLOCKERS {
        sink.remove(name);
    }
}

#[cfg(test)]
mod tests {
    use http::header::{CACHE_CONTROL, CONTENT_TYPE, EXPIRES, PRAGMA, SET_COOKIE};
    use http::{HeaderMap, HeaderValue};

    use cachectl_cache::{CacheError, DirectiveArgs, ReverseProxy};

    use super::emit_cache_control;

    fn response_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache, must-revalidate"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/html"));
        headers.insert(EXPIRES, HeaderValue::from_static("Wed, 11 Jan 1984 05:00:00 GMT"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        headers.append(SET_COOKIE, HeaderValue::from_static("session=abc"));
        headers.append(SET_COOKIE, HeaderValue::from_static("theme=dark"));
        headers
    }

    #[test]
    fn no_args_removes_cache_control_only() {
        let mut headers = response_headers();
        let mut expected = headers.clone();
        expected.remove(CACHE_CONTROL);

        let cc = emit_cache_control(&mut headers, &DirectiveArgs::new(), ReverseProxy::Auto)
            .expect("valid");

        assert!(cc.is_empty());
        assert_eq!(headers, expected);
    }

    #[test]
    fn shared_cacheable_response_drops_blockers() {
        let mut headers = response_headers();
        let args = DirectiveArgs::new().max_age("5m").s_maxage("1d");

        let cc = emit_cache_control(&mut headers, &args, ReverseProxy::Auto).expect("valid");

        assert!(cc.is_reverse_proxy_cacheable());
        assert_eq!(
            headers.get(CACHE_CONTROL).expect("set"),
            "public, max-age=300, s-maxage=86400"
        );
        assert!(headers.get(SET_COOKIE).is_none());
        assert!(headers.get(PRAGMA).is_none());
        assert!(headers.get(EXPIRES).is_none());
        assert_eq!(headers.get(CONTENT_TYPE).expect("kept"), "text/html");
    }

    #[test]
    fn private_response_keeps_cookies() {
        let mut headers = response_headers();
        let args = DirectiveArgs::new().directive("private").max_age(60).s_maxage(600);

        emit_cache_control(&mut headers, &args, ReverseProxy::Auto).expect("valid");

        assert_eq!(
            headers.get(CACHE_CONTROL).expect("set"),
            "private, max-age=60, s-maxage=600"
        );
        assert_eq!(headers.get_all(SET_COOKIE).iter().count(), 2);
        assert!(headers.get(PRAGMA).is_some());
    }

    #[test]
    fn forced_reverse_proxy_strips_even_browser_only_policy() {
        let mut headers = response_headers();
        let args = DirectiveArgs::new().max_age(60);

        emit_cache_control(&mut headers, &args, ReverseProxy::Enabled).expect("valid");

        assert_eq!(headers.get(CACHE_CONTROL).expect("set"), "public, max-age=60");
        assert!(headers.get(SET_COOKIE).is_none());
    }

    #[test]
    fn forced_reverse_proxy_with_no_args_still_strips_blockers() {
        let mut headers = response_headers();

        let cc = emit_cache_control(&mut headers, &DirectiveArgs::new(), ReverseProxy::Enabled)
            .expect("valid");

        assert!(!cc.is_empty());
        assert_eq!(cc.header_string(), "public");
        assert!(headers.get(CACHE_CONTROL).is_none());
        assert!(headers.get(SET_COOKIE).is_none());
        assert!(headers.get(PRAGMA).is_none());
        assert!(headers.get(EXPIRES).is_none());
        assert_eq!(headers.get(CONTENT_TYPE).expect("kept"), "text/html");
    }

    #[test]
    fn blank_args_remove_header() {
        let mut headers = response_headers();
        let args = DirectiveArgs::new().directive("");

        emit_cache_control(&mut headers, &args, ReverseProxy::Auto).expect("valid");

        assert!(headers.get(CACHE_CONTROL).is_none());
        assert!(headers.get(SET_COOKIE).is_some());
    }

    #[test]
    fn invalid_duration_leaves_headers_untouched() {
        let mut headers = response_headers();
        let expected = headers.clone();
        let args = DirectiveArgs::new().s_maxage("1y");

        let err = emit_cache_control(&mut headers, &args, ReverseProxy::Auto)
            .expect_err("invalid suffix");

        assert!(matches!(err, CacheError::InvalidDurationFormat(_)));
        assert_eq!(headers, expected);
    }
}
