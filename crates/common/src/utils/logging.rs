use std::io;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info,tower_http=info,axum=info,sea_orm=warn,sqlx=warn";

/// Initialize tracing subscriber with compact, human-readable output on stdout.
/// - Respects `RUST_LOG` if set
/// - Falls back to `info` for the app, `warn` for the database drivers
pub fn init_logging_default() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// Default directives for JSON output: the `service` crate logs at debug,
/// which includes the cascade events from `service::db`.
fn json_filter() -> String {
    format!("{DEFAULT_FILTER},service=debug")
}

/// Initialize tracing subscriber with JSON structured output.
pub fn init_logging_json() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(json_filter()));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

/// Pick the formatter from `LOG_FORMAT` (`json` or anything else for compact).
pub fn init_logging_from_env() {
    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => init_logging_json(),
        _ => init_logging_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filters_parse() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
        assert!(EnvFilter::try_new(json_filter()).is_ok());
    }

    #[test]
    fn json_filter_enables_whole_service_crate() {
        let filter = json_filter();
        assert!(filter.split(',').any(|d| d == "service=debug"));
        assert!(!filter.contains("service::catalog"));
    }
}
