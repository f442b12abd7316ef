//! Page-type dispatch.
//!
//! Maps the host's page classification onto the name of a configured cache
//! policy. Policies themselves live outside this crate behind [`PolicySource`].

use std::collections::HashMap;

use crate::directive::DirectiveArgs;
use crate::error::CacheError;

/// Every policy name [`PageType::policy_name`] can return.
pub const POLICY_NAMES: [&str; 14] = [
    "feeds",
    "front_page",
    "singles",
    "pages",
    "home",
    "categories",
    "tags",
    "authors",
    "attachment",
    "search",
    "notfound",
    "dates",
    "woocommerce_product",
    "woocommerce_category",
];

/// Page classification supplied by the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageType {
    Feed,
    FrontPage { paged: bool },
    Single,
    Page,
    Home,
    Category,
    Tag,
    Author,
    Attachment,
    Search,
    NotFound,
    /// Date archive; `is_past` when the whole period lies before today.
    Date { is_past: bool },
    Product,
    ProductCategory,
    Other,
}

impl PageType {
    /// One of each page type, for previews and reports.
    pub fn catalog() -> [PageType; 17] {
        [
            PageType::Feed,
            PageType::FrontPage { paged: false },
            PageType::FrontPage { paged: true },
            PageType::Single,
            PageType::Page,
            PageType::Home,
            PageType::Category,
            PageType::Tag,
            PageType::Author,
            PageType::Attachment,
            PageType::Search,
            PageType::NotFound,
            PageType::Date { is_past: true },
            PageType::Date { is_past: false },
            PageType::Product,
            PageType::ProductCategory,
            PageType::Other,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            PageType::Feed => "feed",
            PageType::FrontPage { paged: false } => "front_page",
            PageType::FrontPage { paged: true } => "front_page_paged",
            PageType::Single => "single",
            PageType::Page => "page",
            PageType::Home => "home",
            PageType::Category => "category",
            PageType::Tag => "tag",
            PageType::Author => "author",
            PageType::Attachment => "attachment",
            PageType::Search => "search",
            PageType::NotFound => "not_found",
            PageType::Date { is_past: true } => "date_past",
            PageType::Date { is_past: false } => "date_current",
            PageType::Product => "product",
            PageType::ProductCategory => "product_category",
            PageType::Other => "other",
        }
    }

    /// Name of the policy governing this page type.
    ///
    /// Paged front pages and archives of the current period still change,
    /// so they share the `home` policy.
    pub fn policy_name(self) -> Option<&'static str> {
        let name = match self {
            PageType::Feed => "feeds",
            PageType::FrontPage { paged: false } => "front_page",
            PageType::FrontPage { paged: true } => "home",
            PageType::Single => "singles",
            PageType::Page => "pages",
            PageType::Home => "home",
            PageType::Category => "categories",
            PageType::Tag => "tags",
            PageType::Author => "authors",
            PageType::Attachment => "attachment",
            PageType::Search => "search",
            PageType::NotFound => "notfound",
            PageType::Date { is_past: true } => "dates",
            PageType::Date { is_past: false } => "home",
            PageType::Product => "woocommerce_product",
            PageType::ProductCategory => "woocommerce_category",
            PageType::Other => return None,
        };
        Some(name)
    }
}

impl std::fmt::Display for PageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Lookup of named cache policies, typically backed by configuration.
pub trait PolicySource {
    fn policy(&self, name: &str) -> Option<&DirectiveArgs>;

    fn require(&self, name: &str) -> Result<&DirectiveArgs, CacheError> {
        self.policy(name)
            .ok_or_else(|| CacheError::UnknownPolicy(name.to_string()))
    }
}

impl PolicySource for HashMap<String, DirectiveArgs> {
    fn policy(&self, name: &str) -> Option<&DirectiveArgs> {
        self.get(name)
    }
}
