// RUNTIME PREFERENCES (User Experience)

use crate::logging::LogLevel;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Whether to emit JSON events instead of plain lines
    pub use_structured_logging: bool,

    /// Whether console output is enabled at all
    pub enable_console_logging: bool,

    /// Minimum level that reaches the logger
    pub min_log_level: LogLevel,

    /// Whether to attach descriptor details (state, subsystem) to events
    pub include_descriptor_details: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var("ERRCODES_LOGGING_USE_STRUCTURED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var("ERRCODES_LOGGING_ENABLE_CONSOLE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            min_log_level: env::var("ERRCODES_LOGGING_MIN_LEVEL")
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Warning),
            include_descriptor_details: env::var("ERRCODES_LOGGING_DESCRIPTOR_DETAILS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryPreferences {
    /// Whether to build the process-wide registry eagerly at startup
    pub eager_initialization: bool,

    /// Whether to log a summary line once the registry is frozen
    pub log_initialization_summary: bool,
}

impl Default for RegistryPreferences {
    fn default() -> Self {
        Self {
            eager_initialization: env::var("ERRCODES_REGISTRY_EAGER_INIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            log_initialization_summary: env::var("ERRCODES_REGISTRY_LOG_SUMMARY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

/// Parse a level name as accepted in `ERRCODES_LOGGING_MIN_LEVEL`
pub fn parse_log_level(value: &str) -> Option<LogLevel> {
    match value.trim().to_ascii_lowercase().as_str() {
        "error" => Some(LogLevel::Error),
        "warn" | "warning" => Some(LogLevel::Warning),
        "info" => Some(LogLevel::Info),
        "debug" | "trace" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("error"), Some(LogLevel::Error));
        assert_eq!(parse_log_level(" WARN "), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("Info"), Some(LogLevel::Info));
        assert_eq!(parse_log_level("trace"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("verbose"), None);
    }

    #[test]
    fn test_preferences_from_toml() {
        let text = r#"
            use_structured_logging = true
            enable_console_logging = false
            min_log_level = "Debug"
            include_descriptor_details = false
        "#;

        let parsed: LoggingPreferences = toml::from_str(text).unwrap();
        assert!(parsed.use_structured_logging);
        assert!(!parsed.enable_console_logging);
        assert_eq!(parsed.min_log_level, LogLevel::Debug);
    }
}
