use serde::Deserialize;

// =======================================================
// REDIRECT CONFIG
// =======================================================
/// Overrides for the redirect status filter.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RedirectConfig {
    /// `Cache-Control` for `301` responses; the built-in value when unset.
    pub permanent: Option<String>,
}

impl RedirectConfig {
    pub fn permanent(&self) -> Option<&str> {
        self.permanent.as_deref()
    }

    pub(crate) fn apply_defaults(&mut self) {
        if self.permanent.as_deref().is_some_and(|v| v.trim().is_empty()) {
            self.permanent = None;
        }
    }
}
