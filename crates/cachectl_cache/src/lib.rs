//! Cache-Control policy engine.
//!
//! Turns symbolic cache directives into a normalized `Cache-Control` value,
//! decides whether a reverse proxy may keep the response, and tells whether
//! the current request must stay out of shared caches altogether.

mod directive;
mod duration;
mod error;
mod normalize;
mod page;
mod policy;
mod setting;

pub use directive::{DirectiveArgs, DirectiveKey};
pub use duration::{DurationValue, convert_to_seconds, parse_duration};
pub use error::CacheError;
pub use normalize::{Directives, NormalizedCacheControl, normalize};
pub use page::{POLICY_NAMES, PageType, PolicySource};
pub use policy::{CommercePage, PasswordState, RequestContext, UncacheableReason};
pub use setting::ReverseProxy;
