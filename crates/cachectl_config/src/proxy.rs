use serde::Deserialize;
use tracing::warn;

use cachectl_cache::{CacheError, ReverseProxy};

// =======================================================
// PROXY CONFIG + DEFAULTS
// =======================================================
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// `auto` decides per response from its shared-cache durations.
    pub reverse_proxy: ReverseProxy,
}

impl ProxyConfig {
    pub fn reverse_proxy(&self) -> ReverseProxy {
        self.reverse_proxy
    }

    /// Look a setting up by name.
    pub fn setting(&self, key: &str) -> Result<ReverseProxy, CacheError> {
        match key {
            "reverse_proxy" | "is_reverse_proxy" | "isReverseProxy" => Ok(self.reverse_proxy),
            other => Err(CacheError::UnknownSettingKey(other.to_string())),
        }
    }

    /// Like [`ProxyConfig::setting`], but unknown keys fall back to `auto`.
    pub fn setting_or_auto(&self, key: &str) -> ReverseProxy {
        self.setting(key).unwrap_or_else(|err| {
            warn!(target: "cachectl::config", error = %err, "Falling back to auto");
            ReverseProxy::Auto
        })
    }
}

#[cfg(test)]
mod tests {
    use cachectl_cache::{CacheError, ReverseProxy};

    use super::ProxyConfig;

    #[test]
    fn known_keys() {
        let cfg = ProxyConfig {
            reverse_proxy: ReverseProxy::Enabled,
        };
        assert_eq!(cfg.setting("reverse_proxy").expect("known"), ReverseProxy::Enabled);
        assert_eq!(cfg.setting("isReverseProxy").expect("known"), ReverseProxy::Enabled);
    }

    #[test]
    fn unknown_key_defaults_to_auto() {
        let cfg = ProxyConfig {
            reverse_proxy: ReverseProxy::Disabled,
        };
        assert!(matches!(
            cfg.setting("cdn"),
            Err(CacheError::UnknownSettingKey(key)) if key == "cdn"
        ));
        assert_eq!(cfg.setting_or_auto("cdn"), ReverseProxy::Auto);
    }
}
