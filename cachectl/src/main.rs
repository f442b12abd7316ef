//! Configuration preview.
//!
//! Loads a cachectl config (first argument, `cachectl.toml` by default),
//! reports problems with it and prints, as JSON, the `Cache-Control` header
//! every page type would receive for an anonymous visitor.

use std::collections::BTreeMap;

use anyhow::Context;
use http::header::CACHE_CONTROL;
use http::{HeaderMap, StatusCode};
use serde::Serialize;

use cachectl_cache::{NormalizedCacheControl, PageType, RequestContext};
use cachectl_config::CacheCtlConfig;
use cachectl_http::{RedirectPolicy, apply_page_policy};
use utils::init_tracing;

const DEFAULT_CONFIG: &str = "cachectl.toml";

#[derive(Debug, Serialize)]
struct PagePreview {
    policy: Option<&'static str>,
    cache_control: Option<String>,
    reverse_proxy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string());

    let cfg = CacheCtlConfig::from_file_or_default(&path);
    init_tracing(cfg.global().log_level());

    let setting = cfg.proxy().reverse_proxy();
    tracing::info!(
        config = %path,
        reverse_proxy = %setting,
        policies = cfg.policies().len(),
        "Configuration loaded"
    );

    let ctx = RequestContext::default();

    let pages: BTreeMap<_, _> = PageType::catalog()
        .into_iter()
        .map(|page| (page.label(), preview_page(&cfg, &ctx, page)))
        .collect();

    let redirect = match cfg.redirect().permanent() {
        Some(value) => value
            .parse::<RedirectPolicy>()
            .context("redirect.permanent")?,
        None => RedirectPolicy::default(),
    };
    let mut headers = HeaderMap::new();
    redirect.filter(&mut headers, &ctx, StatusCode::MOVED_PERMANENTLY, None);

    let preview = serde_json::json!({
        "reverse_proxy": setting,
        "pages": pages,
        "redirect_301": cache_control_text(&headers),
    });
    println!("{}", serde_json::to_string_pretty(&preview)?);

    Ok(())
}

fn preview_page(cfg: &CacheCtlConfig, ctx: &RequestContext, page: PageType) -> PagePreview {
    let mut headers = HeaderMap::new();
    let result = apply_page_policy(&mut headers, ctx, page, cfg, cfg.proxy().reverse_proxy());

    let (reverse_proxy, error) = match result {
        Ok(cc) => (
            cc.as_ref()
                .is_some_and(NormalizedCacheControl::is_reverse_proxy_cacheable),
            None,
        ),
        Err(e) => {
            tracing::error!(page = %page, error = %e, "Policy could not be applied");
            (false, Some(e.to_string()))
        }
    };

    PagePreview {
        policy: page.policy_name(),
        cache_control: cache_control_text(&headers),
        reverse_proxy,
        error,
    }
}

fn cache_control_text(headers: &HeaderMap) -> Option<String> {
    headers
        .get(CACHE_CONTROL)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
