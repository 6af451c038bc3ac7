//! Logger implementations and the filtering service in front of them

use super::config;
use super::events::{LogEvent, LogLevel};
use crate::registry::ErrorDescriptor;
use std::sync::{Arc, Mutex};

pub trait Logger: Send + Sync {
    fn log(&self, event: &LogEvent);
}

/// Drops events below its level, forwards the rest to one logger
pub struct LoggingService {
    logger: Arc<dyn Logger>,
    min_level: LogLevel,
}

impl LoggingService {
    pub fn new(logger: Arc<dyn Logger>, min_level: LogLevel) -> Self {
        Self { logger, min_level }
    }

    /// Service wired from the runtime preferences
    pub fn with_config() -> Self {
        let logger: Arc<dyn Logger> = if !config::use_console_logging() {
            Arc::new(NullLogger)
        } else if config::use_structured_logging() {
            Arc::new(StructuredLogger)
        } else {
            Arc::new(ConsoleLogger::new(config::include_descriptor_details()))
        };

        Self::new(logger, config::get_min_log_level())
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn should_log(&self, level: LogLevel) -> bool {
        level <= self.min_level
    }

    pub fn log_event(&self, event: LogEvent) {
        if self.should_log(event.level) {
            self.logger.log(&event);
        }
    }

    pub fn log_error(&self, descriptor: ErrorDescriptor, message: &str) {
        self.log_event(LogEvent::error(descriptor, message));
    }

    pub fn log_info(&self, message: &str) {
        self.log_event(LogEvent::info(message));
    }
}

/// Plain lines on stderr; coded events get their SQLSTATE class and
/// subsystem appended when `detailed` is set
pub struct ConsoleLogger {
    detailed: bool,
}

impl ConsoleLogger {
    pub fn new(detailed: bool) -> Self {
        Self { detailed }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, event: &LogEvent) {
        // stdout is reserved for tool output
        if self.detailed && event.descriptor.is_some() {
            eprintln!("{}", event.format_detailed());
        } else {
            eprintln!("{}", event.format());
        }
    }
}

/// One JSON object per line on stderr
pub struct StructuredLogger;

impl Logger for StructuredLogger {
    fn log(&self, event: &LogEvent) {
        match event.format_json() {
            Ok(json) => eprintln!("{}", json),
            Err(_) => eprintln!("{}", event.format()),
        }
    }
}

pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _event: &LogEvent) {}
}

/// Keeps the most recent events in memory, bounded by the configured buffer
#[derive(Default)]
pub struct MemoryLogger {
    events: Mutex<Vec<LogEvent>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Number of captured events with exactly this message
    pub fn count_message(&self, message: &str) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.message == message)
            .count()
    }

    pub fn has_error_with_code(&self, descriptor: ErrorDescriptor) -> bool {
        self.events
            .lock()
            .unwrap()
            .iter()
            .any(|e| e.is_error() && e.code() == Some(descriptor.code()))
    }
}

impl Logger for MemoryLogger {
    fn log(&self, event: &LogEvent) {
        let mut events = self.events.lock().unwrap();

        let capacity = config::get_log_buffer_size();
        if events.len() >= capacity {
            let overflow = events.len() + 1 - capacity;
            events.drain(..overflow);
        }

        events.push(event.clone());
    }
}

pub fn create_configured_service() -> LoggingService {
    LoggingService::with_config()
}

pub fn create_test_logger() -> Arc<MemoryLogger> {
    Arc::new(MemoryLogger::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::codes;

    #[test]
    fn test_console_and_structured_loggers_accept_coded_events() {
        let event = LogEvent::error(codes::IO_ERROR, "read failed").with_context("path", "/tmp/x");
        ConsoleLogger::new(true).log(&event);
        ConsoleLogger::new(false).log(&event);
        StructuredLogger.log(&event);
    }

    #[test]
    fn test_memory_logger_tracks_codes() {
        let logger = MemoryLogger::new();

        logger.log(&LogEvent::info("registry ready"));
        logger.log(&LogEvent::error(codes::NETWORK_ERROR, "socket reset"));
        logger.log(&LogEvent::warning_with_code(codes::IO_ERROR, "slow disk"));

        assert_eq!(logger.event_count(), 3);
        assert!(logger.has_error_with_code(codes::NETWORK_ERROR));
        // a warning with a code is not an error
        assert!(!logger.has_error_with_code(codes::IO_ERROR));
        assert_eq!(logger.count_message("registry ready"), 1);
        assert_eq!(logger.count_message("registry"), 0);
    }

    #[test]
    fn test_memory_logger_drops_oldest_past_capacity() {
        let logger = MemoryLogger::new();
        let capacity = config::get_log_buffer_size();

        for i in 0..capacity + 5 {
            logger.log(&LogEvent::info(&format!("lookup {}", i)));
        }

        let events = logger.events();
        assert_eq!(events.len(), capacity);
        assert_eq!(events[0].message, "lookup 5");
    }

    #[test]
    fn test_service_filters_by_level() {
        let logger = create_test_logger();
        let service = LoggingService::new(logger.clone(), LogLevel::Error);

        service.log_event(LogEvent::debug("index built"));
        service.log_info("registry ready");
        service.log_event(LogEvent::warning("catalog incomplete"));
        service.log_error(codes::INTERNAL_ERROR, "table defect");

        assert_eq!(logger.event_count(), 1);
        assert!(logger.has_error_with_code(codes::INTERNAL_ERROR));
        assert!(!service.should_log(LogLevel::Warning));
    }

    #[test]
    fn test_null_logger_discards() {
        let service = LoggingService::new(Arc::new(NullLogger), LogLevel::Debug);
        service.log_info("dropped");
    }
}
