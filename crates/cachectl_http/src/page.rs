use tracing::{debug, warn};

use cachectl_cache::{
    CacheError, NormalizedCacheControl, PageType, PolicySource, RequestContext, ReverseProxy,
};

use crate::emitter::emit_cache_control;
use crate::sink::HeaderSink;

/// Emit the configured policy for `page`.
///
/// Returns `Ok(None)` when nothing was written: the request is uncacheable,
/// the page type has no policy, or the policy is not configured.
pub fn apply_page_policy<S, P>(
    sink: &mut S,
    ctx: &RequestContext,
    page: PageType,
    policies: &P,
    setting: ReverseProxy,
) -> Result<Option<NormalizedCacheControl>, CacheError>
where
    S: HeaderSink + ?Sized,
    P: PolicySource + ?Sized,
{
    if let Some(reason) = ctx.uncacheable_reason() {
        debug!(
            target: "cachectl::emit",
            page = %page,
            reason = reason.as_str(),
            "Uncacheable request"
        );
        return Ok(None);
    }

    let Some(name) = page.policy_name() else {
        debug!(target: "cachectl::emit", page = %page, "No policy for page type");
        return Ok(None);
    };

    let args = match policies.require(name) {
        Ok(args) => args,
        Err(err @ CacheError::UnknownPolicy(_)) => {
            warn!(target: "cachectl::emit", page = %page, error = %err, "Skipping Cache-Control");
            return Ok(None);
        }
        Err(err) => return Err(err),
    };

    emit_cache_control(sink, args, setting).map(Some)
}
