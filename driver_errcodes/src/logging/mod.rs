//! Global logging module
//!
//! Thread-safe global logger with a plain and a JSON output mode and a
//! memory logger for tests. Error events carry the registry descriptor they
//! report, so every error line names its code and SQLSTATE.

pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use crate::registry::ErrorDescriptor;
use std::sync::{Arc, OnceLock};

pub use events::{LogEvent, LogLevel};
pub use service::{
    ConsoleLogger, Logger, LoggingService, MemoryLogger, NullLogger, StructuredLogger,
};

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

/// Initialize global logging system
pub fn init_global_logging() -> Result<(), String> {
    config::validate_config().map_err(|e| format!("Configuration validation failed: {}", e))?;

    let logging_service = Arc::new(service::create_configured_service());

    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| "Global logger already initialized")?;

    logging_service.log_event(
        LogEvent::debug("Global logging system initialized")
            .with_context("min_level", logging_service.min_level().as_str()),
    );

    Ok(())
}

/// Initialize with custom service (primarily for testing)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())
}

pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

/// Log error with context (used by log_error! macro)
pub fn log_error_with_context(
    descriptor: ErrorDescriptor,
    message: &str,
    context: Vec<(&str, &str)>,
) {
    let mut event = LogEvent::error(descriptor, message);

    for (key, value) in context {
        event = event.with_context(key, value);
    }

    if config::include_descriptor_details() {
        event = event
            .with_context("sql_state_class", descriptor.state().class())
            .with_context("subsystem", descriptor.subsystem().as_str());
    }

    if let Some(logger) = try_get_global_logger() {
        logger.log_event(event);
    }
}

/// Log uncoded event with context (used by log_info!, log_warning!, log_debug!)
pub fn log_with_context(level: LogLevel, message: &str, context: Vec<(&str, &str)>) {
    let mut event = LogEvent::with_level(level, None, message);

    for (key, value) in context {
        event = event.with_context(key, value);
    }

    if let Some(logger) = try_get_global_logger() {
        logger.log_event(event);
    }
}

/// Safe critical error logging
pub fn safe_log_critical(descriptor: ErrorDescriptor, message: &str) {
    if let Some(logger) = try_get_global_logger() {
        logger.log_event(LogEvent::error(descriptor, message));
    }
    // Always log critical errors to stderr regardless
    eprintln!(
        "CRITICAL ERROR [{}/{}]: {}",
        descriptor.code(),
        descriptor.state(),
        message
    );
}

/// Get system diagnostics
pub fn get_system_diagnostics() -> String {
    let mut diagnostics = String::new();

    diagnostics.push_str("=== Logging System Diagnostics ===\n");
    diagnostics.push_str(&format!("Initialized: {}\n", is_initialized()));
    diagnostics.push_str(&format!(
        "Build config: {}\n\n",
        crate::config::build_info::source_info()
    ));
    diagnostics.push_str(&config::get_config_summary());

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::codes;

    #[test]
    fn test_critical_logging_without_global_logger() {
        safe_log_critical(codes::INTERNAL_ERROR, "table defect");
    }

    #[test]
    fn test_diagnostics() {
        let diagnostics = get_system_diagnostics();
        assert!(diagnostics.contains("Logging System Diagnostics"));
        assert!(diagnostics.contains("Initialized:"));
        assert!(diagnostics.contains("Security min level"));
    }
}
