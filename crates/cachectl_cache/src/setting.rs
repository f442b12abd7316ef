use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::CacheError;

/// Whether a reverse proxy sits in front of the deployment.
///
/// `Auto` lets each response decide from its own shared-cache durations.
/// Config input may be a boolean, `0`/`1` or any string `FromStr` accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReverseProxy {
    #[default]
    Auto,
    Enabled,
    Disabled,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSetting {
    Bool(bool),
    Number(i64),
    Text(String),
}

impl ReverseProxy {
    pub fn as_str(self) -> &'static str {
        match self {
            ReverseProxy::Auto => "auto",
            ReverseProxy::Enabled => "enabled",
            ReverseProxy::Disabled => "disabled",
        }
    }
}

impl FromStr for ReverseProxy {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(ReverseProxy::Auto),
            "enabled" | "true" | "on" | "yes" | "1" => Ok(ReverseProxy::Enabled),
            "disabled" | "false" | "off" | "no" | "0" => Ok(ReverseProxy::Disabled),
            _ => Err(CacheError::InvalidSettingValue(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for ReverseProxy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawSetting::deserialize(deserializer)? {
            RawSetting::Bool(true) | RawSetting::Number(1) => Ok(ReverseProxy::Enabled),
            RawSetting::Bool(false) | RawSetting::Number(0) => Ok(ReverseProxy::Disabled),
            RawSetting::Number(n) => Err(de::Error::custom(CacheError::InvalidSettingValue(
                n.to_string(),
            ))),
            RawSetting::Text(text) => text.parse().map_err(de::Error::custom),
        }
    }
}

impl std::fmt::Display for ReverseProxy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
