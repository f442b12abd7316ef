use serde::{Deserialize, Serialize};

use crate::duration::DurationValue;

/// The five `Cache-Control` entries this engine manages, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKey {
    Directive,
    MaxAge,
    SMaxAge,
    StaleWhileRevalidate,
    StaleIfError,
}

impl DirectiveKey {
    pub const ALL: [DirectiveKey; 5] = [
        DirectiveKey::Directive,
        DirectiveKey::MaxAge,
        DirectiveKey::SMaxAge,
        DirectiveKey::StaleWhileRevalidate,
        DirectiveKey::StaleIfError,
    ];

    /// Header token for this entry (`directive` has none of its own).
    pub fn as_str(self) -> &'static str {
        match self {
            DirectiveKey::Directive => "directive",
            DirectiveKey::MaxAge => "max-age",
            DirectiveKey::SMaxAge => "s-maxage",
            DirectiveKey::StaleWhileRevalidate => "stale-while-revalidate",
            DirectiveKey::StaleIfError => "stale-if-error",
        }
    }

    /// Durations a shared cache may hold the response for.
    pub fn is_shared(self) -> bool {
        matches!(
            self,
            DirectiveKey::SMaxAge | DirectiveKey::StaleWhileRevalidate | DirectiveKey::StaleIfError
        )
    }
}

impl std::fmt::Display for DirectiveKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symbolic cache arguments, as written by a caller or a named policy.
///
/// `directive` carries the bare keyword part of the header (for example
/// `public` or `private, must-revalidate`). The other fields accept either
/// seconds or duration strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DirectiveArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directive: Option<String>,

    #[serde(alias = "max-age", skip_serializing_if = "Option::is_none")]
    pub max_age: Option<DurationValue>,

    #[serde(alias = "s-maxage", skip_serializing_if = "Option::is_none")]
    pub s_maxage: Option<DurationValue>,

    #[serde(alias = "stale-while-revalidate", skip_serializing_if = "Option::is_none")]
    pub stale_while_revalidate: Option<DurationValue>,

    #[serde(alias = "stale-if-error", skip_serializing_if = "Option::is_none")]
    pub stale_if_error: Option<DurationValue>,
}

impl DirectiveArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directive(mut self, directive: impl Into<String>) -> Self {
        self.directive = Some(directive.into());
        self
    }

    pub fn max_age(mut self, value: impl Into<DurationValue>) -> Self {
        self.max_age = Some(value.into());
        self
    }

    pub fn s_maxage(mut self, value: impl Into<DurationValue>) -> Self {
        self.s_maxage = Some(value.into());
        self
    }

    pub fn stale_while_revalidate(mut self, value: impl Into<DurationValue>) -> Self {
        self.stale_while_revalidate = Some(value.into());
        self
    }

    pub fn stale_if_error(mut self, value: impl Into<DurationValue>) -> Self {
        self.stale_if_error = Some(value.into());
        self
    }

    /// Raw duration for one of the four duration keys.
    pub fn duration(&self, key: DirectiveKey) -> Option<&DurationValue> {
        match key {
            DirectiveKey::Directive => None,
            DirectiveKey::MaxAge => self.max_age.as_ref(),
            DirectiveKey::SMaxAge => self.s_maxage.as_ref(),
            DirectiveKey::StaleWhileRevalidate => self.stale_while_revalidate.as_ref(),
            DirectiveKey::StaleIfError => self.stale_if_error.as_ref(),
        }
    }

    /// Number of keys the caller supplied.
    pub fn len(&self) -> usize {
        let durations = DirectiveKey::ALL
            .iter()
            .filter(|key| self.duration(**key).is_some())
            .count();
        durations + usize::from(self.directive.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
