//! Configuration for the cache policy engine.
//!
//! ```toml
//! [global]
//! log_level = "info"
//!
//! [proxy]
//! reverse_proxy = "auto"
//!
//! [redirect]
//! permanent = "max-age=3600, s-maxage=8640000, stale-while-revalidate=86400"
//!
//! [policy.singles]
//! max_age = "5m"
//! s_maxage = "1d"
//! stale_if_error = "1w"
//! ```

mod cachectl;
mod global;
mod proxy;
mod redirect;
mod validation;

pub use cachectl::CacheCtlConfig;
pub use global::GlobalConfig;
pub use proxy::ProxyConfig;
pub use redirect::RedirectConfig;
pub use validation::{ConfigReport, validate};
