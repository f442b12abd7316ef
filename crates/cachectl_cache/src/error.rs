use thiserror::Error;

/// Errors raised while turning cache arguments into header values.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("invalid duration format '{0}': expected <int> or <int><s|m|h|d|w>")]
    InvalidDurationFormat(String),

    #[error("duration '{0}' does not fit in 64 bits of seconds")]
    DurationOverflow(String),

    #[error("unknown setting key '{0}'")]
    UnknownSettingKey(String),

    #[error("invalid setting value '{0}': expected auto, enabled or disabled")]
    InvalidSettingValue(String),

    #[error("no cache policy named '{0}'")]
    UnknownPolicy(String),

    #[error("'{value}' is not a valid Cache-Control header value")]
    InvalidHeaderValue {
        value: String,
        #[source]
        source: http::header::InvalidHeaderValue,
    },
}
