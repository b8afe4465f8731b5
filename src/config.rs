//! Configuration constants and utilities for the demo binary
//!
//! The library itself needs no configuration; these settings only control
//! how the demo names its core and how much it logs.

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Multiton key used by the demo when none is given
pub const DEFAULT_CORE_KEY: &str = "demo";

/// Default number of increments the demo performs
pub const DEFAULT_INCREMENTS: u32 = 3;

/// Environment variable name for overriding the log level
pub const LOG_LEVEL_ENV_VAR: &str = "PUREMVC_LOG_LEVEL";

/// Log level used when neither the command line nor the environment set one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Get the log level, checking environment variable first, then falling back to default
pub fn get_log_level() -> String {
    std::env::var_os(LOG_LEVEL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

/// Map a level name onto a tracing level, `None` for unknown names
pub fn parse_log_level(level: &str) -> Option<tracing::Level> {
    match level.to_lowercase().as_str() {
        "trace" => Some(tracing::Level::TRACE),
        "debug" => Some(tracing::Level::DEBUG),
        "info" => Some(tracing::Level::INFO),
        "warn" => Some(tracing::Level::WARN),
        "error" => Some(tracing::Level::ERROR),
        _ => None,
    }
}

/// Crates whose chatter stays at `warn` whatever the chosen level
const QUIET_TARGETS: &[&str] = &["tokio", "cucumber", "gherkin"];

/// Build the subscriber filter for `level`
pub fn build_env_filter(level: tracing::Level) -> anyhow::Result<EnvFilter> {
    let mut filter = EnvFilter::default().add_directive(LevelFilter::from_level(level).into());
    for target in QUIET_TARGETS {
        filter = filter.add_directive(format!("{target}=warn").parse()?);
    }
    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_name() {
        assert_eq!(LOG_LEVEL_ENV_VAR, "PUREMVC_LOG_LEVEL");
    }

    #[test]
    fn test_get_log_level_default_and_override() {
        // Save current env var state
        let original = std::env::var_os(LOG_LEVEL_ENV_VAR);

        std::env::remove_var(LOG_LEVEL_ENV_VAR);
        assert_eq!(get_log_level(), DEFAULT_LOG_LEVEL);

        std::env::set_var(LOG_LEVEL_ENV_VAR, "debug");
        assert_eq!(get_log_level(), "debug");

        // Restore original state
        match original {
            Some(val) => std::env::set_var(LOG_LEVEL_ENV_VAR, val),
            None => std::env::remove_var(LOG_LEVEL_ENV_VAR),
        }
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG"), Some(tracing::Level::DEBUG));
        assert_eq!(parse_log_level("warn"), Some(tracing::Level::WARN));
        assert_eq!(parse_log_level("loud"), None);
    }

    #[test]
    fn test_build_env_filter_uses_level_and_quiets_runtime() {
        let filter = build_env_filter(tracing::Level::DEBUG).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let rendered = filter.to_string().to_lowercase();
        assert!(rendered.contains("tokio=warn"));
        assert!(rendered.contains("cucumber=warn"));
    }
}
