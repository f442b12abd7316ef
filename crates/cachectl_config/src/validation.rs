use std::str::FromStr;

use cachectl_cache::{POLICY_NAMES, ReverseProxy, normalize};

use crate::CacheCtlConfig;

/// Validation output for a loaded configuration.
#[derive(Debug, Default)]
pub struct ConfigReport {
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl ConfigReport {
    /// Returns true when at least one error was found.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the collected warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Returns the collected error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Render warnings and errors into a readable, multi-line string.
    pub fn format(&self) -> String {
        let mut out = String::new();
        if !self.errors.is_empty() {
            out.push_str("Errors:\n");
            for err in &self.errors {
                out.push_str("  - ");
                out.push_str(err);
                out.push('\n');
            }
        }
        if !self.warnings.is_empty() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str("Warnings:\n");
            for warn in &self.warnings {
                out.push_str("  - ");
                out.push_str(warn);
                out.push('\n');
            }
        }
        out
    }

    fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }
}

/// Validate a configuration and return a report of issues.
pub fn validate(cfg: &CacheCtlConfig) -> ConfigReport {
    let mut report = ConfigReport::default();

    validate_global(cfg, &mut report);
    validate_redirect(cfg, &mut report);
    validate_policies(cfg, &mut report);

    report
}

fn validate_global(cfg: &CacheCtlConfig, report: &mut ConfigReport) {
    let level = cfg.global.log_level.as_str();
    if tracing::Level::from_str(level).is_err() {
        report.warn(format!(
            "global.log_level '{level}' is not a level name; treating it as a filter directive"
        ));
    }
}

fn validate_redirect(cfg: &CacheCtlConfig, report: &mut ConfigReport) {
    let Some(permanent) = cfg.redirect.permanent.as_deref() else {
        return;
    };

    if http::HeaderValue::from_str(permanent.trim()).is_err() {
        report.error(format!("redirect.permanent '{permanent}' is not a valid header value"));
    }
}

fn validate_policies(cfg: &CacheCtlConfig, report: &mut ConfigReport) {
    let mut names: Vec<&String> = cfg.policy.keys().collect();
    names.sort();

    for name in names {
        let args = &cfg.policy[name];

        if !POLICY_NAMES.contains(&name.as_str()) {
            report.warn(format!("policy '{name}' is not selected by any page type"));
        }

        let cc = match normalize(args, cfg.proxy.reverse_proxy) {
            Ok(cc) => cc,
            Err(e) => {
                report.error(format!("policy '{name}': {e}"));
                continue;
            }
        };

        if cc.is_empty() {
            report.warn(format!(
                "policy '{name}' is empty; matching pages will have Cache-Control removed"
            ));
            continue;
        }

        if let Err(e) = cc.header_value() {
            report.error(format!("policy '{name}': {e}"));
            continue;
        }

        let shared = cc.directives().shared_lifetime() > 0;
        if shared && cfg.proxy.reverse_proxy == ReverseProxy::Disabled {
            report.warn(format!(
                "policy '{name}' sets shared-cache durations but proxy.reverse_proxy is disabled"
            ));
        }
        if shared && cc.directives().is_private() {
            report.warn(format!(
                "policy '{name}' is private; shared-cache durations will be ignored by proxies"
            ));
        }
    }
}
