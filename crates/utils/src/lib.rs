use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber. `RUST_LOG` wins over `log_level`.
///
/// `log_level` is either a bare level applied to the `cachectl` targets or a
/// full filter directive string.
pub fn init_tracing(log_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(log_level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(true)
                .with_thread_ids(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn default_directives(log_level: &str) -> String {
    let log_level = log_level.trim();
    if log_level.contains('=') || log_level.contains(',') {
        log_level.to_string()
    } else {
        format!("warn,cachectl={log_level}")
    }
}
