//! Response header side effects of the cache policy engine.
//!
//! Everything here writes through [`HeaderSink`], so the host decides what
//! the outgoing header table actually is.

mod emitter;
mod page;
mod redirect;
mod sink;

pub use emitter::{
    SHARED_CACHE_BLOCKERS, apply_cache_control, emit_cache_control, strip_shared_cache_blockers,
};
pub use page::apply_page_policy;
pub use redirect::{PERMANENT_REDIRECT_CACHE_CONTROL, RedirectPolicy};
pub use sink::HeaderSink;
