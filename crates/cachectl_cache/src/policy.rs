/// Password state of the content being rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PasswordState {
    #[default]
    Unprotected,
    /// Protected and the visitor has not supplied the password yet.
    Required,
    /// Protected and unlocked for this visitor.
    Unlocked,
}

/// Store page kinds reported by an active e-commerce extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommercePage {
    Cart,
    Checkout,
    Account,
    Catalog,
}

impl CommercePage {
    /// Pages that carry per-visitor session state.
    pub fn is_session_bound(self) -> bool {
        matches!(
            self,
            CommercePage::Cart | CommercePage::Checkout | CommercePage::Account
        )
    }
}

/// Why a response was kept out of every cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UncacheableReason {
    Preview,
    LoggedIn,
    Trackback,
    Admin,
    PasswordProtected,
    CommerceSession,
}

impl UncacheableReason {
    pub fn as_str(self) -> &'static str {
        match self {
            UncacheableReason::Preview => "preview",
            UncacheableReason::LoggedIn => "logged_in",
            UncacheableReason::Trackback => "trackback",
            UncacheableReason::Admin => "admin",
            UncacheableReason::PasswordProtected => "password_protected",
            UncacheableReason::CommerceSession => "commerce_session",
        }
    }
}

/// Per-request signals from the host application.
///
/// `commerce` is `None` when no e-commerce extension is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub is_preview: bool,
    pub is_logged_in: bool,
    pub is_trackback: bool,
    pub is_admin: bool,
    pub password: PasswordState,
    pub commerce: Option<CommercePage>,
}

impl RequestContext {
    /// First reason this response must never be cached, if any.
    pub fn uncacheable_reason(&self) -> Option<UncacheableReason> {
        if self.is_preview {
            return Some(UncacheableReason::Preview);
        }
        if self.is_logged_in {
            return Some(UncacheableReason::LoggedIn);
        }
        if self.is_trackback {
            return Some(UncacheableReason::Trackback);
        }
        if self.is_admin {
            return Some(UncacheableReason::Admin);
        }
        if self.password != PasswordState::Unprotected {
            return Some(UncacheableReason::PasswordProtected);
        }
        if self.commerce.is_some_and(CommercePage::is_session_bound) {
            return Some(UncacheableReason::CommerceSession);
        }
        None
    }

    pub fn is_uncacheable(&self) -> bool {
        self.uncacheable_reason().is_some()
    }
}
