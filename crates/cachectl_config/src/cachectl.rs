use serde::Deserialize;
use std::collections::HashMap;

use cachectl_cache::{DirectiveArgs, PolicySource};

use crate::validation::{ConfigReport, validate};
use crate::{GlobalConfig, ProxyConfig, RedirectConfig};

const ENV_PREFIX: &str = "CACHECTL";
const ENV_SEPARATOR: &str = "__";

// =======================================================
// CACHECTL CONFIG — main config
// =======================================================
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheCtlConfig {
    #[serde(default)]
    pub global: GlobalConfig,

    #[serde(default)]
    pub proxy: ProxyConfig,

    #[serde(default)]
    pub redirect: RedirectConfig,

    /// Named policies, selected by page type.
    #[serde(default)]
    pub policy: HashMap<String, DirectiveArgs>,
}

impl CacheCtlConfig {
    pub fn global(&self) -> &GlobalConfig {
        &self.global
    }

    pub fn proxy(&self) -> &ProxyConfig {
        &self.proxy
    }

    pub fn redirect(&self) -> &RedirectConfig {
        &self.redirect
    }

    pub fn policies(&self) -> &HashMap<String, DirectiveArgs> {
        &self.policy
    }

    /// Validate the configuration and return a report of warnings and errors.
    pub fn validate(&self) -> ConfigReport {
        validate(self)
    }

    /// Load a TOML file, then `CACHECTL__SECTION__KEY` environment overrides.
    pub fn from_file(file_name: &str) -> Result<Self, config::ConfigError> {
        let built = config::Config::builder()
            .add_source(config::File::new(file_name, config::FileFormat::Toml).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR),
            )
            .build()?;

        Self::from_built(built)
    }

    /// Parse TOML text, without environment overrides.
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        let built = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        Self::from_built(built)
    }

    pub fn from_file_or_default(file_name: &str) -> Self {
        match Self::from_file(file_name) {
            Ok(cfg) => {
                let report = cfg.validate();
                if report.has_errors() {
                    eprintln!("⚠️  Invalid config in '{file_name}':");
                    eprintln!("{}", report.format());
                    eprintln!("➡️  Using default config(in-memory)...");
                    CacheCtlConfig::default()
                } else {
                    if !report.warnings().is_empty() {
                        eprintln!("⚠️  Config warnings in '{file_name}':");
                        eprintln!("{}", report.format());
                    }
                    cfg
                }
            }
            Err(e) => {
                eprintln!("⚠️  Error reading config '{file_name}': {e}");
                eprintln!("➡️  Using default config(in-memory)...");
                CacheCtlConfig::default()
            }
        }
    }

    fn from_built(built: config::Config) -> Result<Self, config::ConfigError> {
        let mut cfg: CacheCtlConfig = built.try_deserialize()?;
        cfg.apply_defaults();
        Ok(cfg)
    }

    fn apply_defaults(&mut self) {
        let def_global = GlobalConfig::default();
        self.global.apply_defaults_from(&def_global);
        self.redirect.apply_defaults();
    }
}

impl PolicySource for CacheCtlConfig {
    fn policy(&self, name: &str) -> Option<&DirectiveArgs> {
        self.policy.get(name)
    }
}

#[cfg(test)]
mod tests {
    use cachectl_cache::{DurationValue, PolicySource, ReverseProxy};

    use super::CacheCtlConfig;

    #[test]
    fn defaults_when_empty() {
        let cfg = CacheCtlConfig::from_toml_str("").expect("empty config parses");
        assert_eq!(cfg.global().log_level(), "info");
        assert_eq!(cfg.proxy().reverse_proxy(), ReverseProxy::Auto);
        assert!(cfg.redirect().permanent().is_none());
        assert!(cfg.policies().is_empty());
    }

    #[test]
    fn parses_policies() {
        let cfg = CacheCtlConfig::from_toml_str(
            r#"
            [global]
            log_level = "debug"

            [proxy]
            reverse_proxy = "enabled"

            [policy.singles]
            max_age = "5m"
            s_maxage = 86400

            [policy.search]
            directive = "private"
            max_age = 60
            "#,
        )
        .expect("valid config");

        assert_eq!(cfg.global().log_level(), "debug");
        assert_eq!(cfg.proxy().reverse_proxy(), ReverseProxy::Enabled);

        let singles = cfg.policy("singles").expect("configured");
        assert_eq!(singles.max_age, Some(DurationValue::Text("5m".into())));
        assert_eq!(singles.s_maxage, Some(DurationValue::Seconds(86_400)));
        assert_eq!(singles.directive, None);

        let search = cfg.policy("search").expect("configured");
        assert_eq!(search.directive.as_deref(), Some("private"));
        assert!(cfg.policy("tags").is_none());
    }

    #[test]
    fn blank_values_fall_back() {
        let cfg = CacheCtlConfig::from_toml_str(
            r#"
            [global]
            log_level = ""

            [redirect]
            permanent = "  "
            "#,
        )
        .expect("valid config");

        assert_eq!(cfg.global().log_level(), "info");
        assert!(cfg.redirect().permanent().is_none());
    }

    #[test]
    fn bare_boolean_reverse_proxy_keeps_policies() {
        let cfg = CacheCtlConfig::from_toml_str(
            r#"
            [proxy]
            reverse_proxy = true

            [policy.singles]
            max_age = "5m"
            "#,
        )
        .expect("boolean setting is accepted");

        assert_eq!(cfg.proxy().reverse_proxy(), ReverseProxy::Enabled);
        assert!(cfg.policy("singles").is_some());

        let cfg = CacheCtlConfig::from_toml_str("[proxy]\nreverse_proxy = 0\n")
            .expect("numeric setting is accepted");
        assert_eq!(cfg.proxy().reverse_proxy(), ReverseProxy::Disabled);
    }

    #[test]
    fn environment_overrides_file_values() {
        let path =
            std::env::temp_dir().join(format!("cachectl-env-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            r#"
            [proxy]
            reverse_proxy = "disabled"

            [policy.front_page]
            max_age = "5m"
            s_maxage = "10m"
            "#,
        )
        .expect("write temp config");

        // SAFETY: no other test in this crate reads CACHECTL__* variables.
        unsafe {
            std::env::set_var("CACHECTL__PROXY__REVERSE_PROXY", "enabled");
            std::env::set_var("CACHECTL__POLICY__FRONT_PAGE__MAX_AGE", "2h");
        }
        let loaded = CacheCtlConfig::from_file(path.to_str().expect("utf-8 path"));
        unsafe {
            std::env::remove_var("CACHECTL__PROXY__REVERSE_PROXY");
            std::env::remove_var("CACHECTL__POLICY__FRONT_PAGE__MAX_AGE");
        }
        let _ = std::fs::remove_file(&path);

        let cfg = loaded.expect("valid config");
        assert_eq!(cfg.proxy().reverse_proxy(), ReverseProxy::Enabled);

        let front = cfg.policy("front_page").expect("configured");
        assert_eq!(front.max_age, Some(DurationValue::Text("2h".into())));
        assert_eq!(front.s_maxage, Some(DurationValue::Text("10m".into())));
    }

    #[test]
    fn unknown_reverse_proxy_value_is_rejected() {
        let result = CacheCtlConfig::from_toml_str(
            r#"
            [proxy]
            reverse_proxy = "sometimes"
            "#,
        );
        assert!(result.is_err());
    }
}
