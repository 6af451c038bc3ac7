//! Event system for registry logging

use super::config;
use crate::registry::ErrorDescriptor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Error,
            1 => LogLevel::Warning,
            2 => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }
}

/// Core log event structure
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub descriptor: Option<ErrorDescriptor>,
    pub message: String,
    pub context: HashMap<String, String>,
}

impl LogEvent {
    pub(crate) fn with_level(
        level: LogLevel,
        descriptor: Option<ErrorDescriptor>,
        message: &str,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            descriptor,
            message: truncate_message(message, config::get_max_log_message_length()),
            context: HashMap::new(),
        }
    }

    /// Create a new error event
    pub fn error(descriptor: ErrorDescriptor, message: &str) -> Self {
        Self::with_level(LogLevel::Error, Some(descriptor), message)
    }

    /// Create a new warning event (warnings may not have codes)
    pub fn warning(message: &str) -> Self {
        Self::with_level(LogLevel::Warning, None, message)
    }

    /// Create warning with specific descriptor
    pub fn warning_with_code(descriptor: ErrorDescriptor, message: &str) -> Self {
        Self::with_level(LogLevel::Warning, Some(descriptor), message)
    }

    pub fn info(message: &str) -> Self {
        Self::with_level(LogLevel::Info, None, message)
    }

    pub fn debug(message: &str) -> Self {
        Self::with_level(LogLevel::Debug, None, message)
    }

    /// Add context data
    pub fn with_context(mut self, key: &str, value: &str) -> Self {
        self.context.insert(key.to_string(), value.to_string());
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == LogLevel::Error
    }

    pub fn is_info(&self) -> bool {
        self.level == LogLevel::Info
    }

    /// Numeric code of the attached descriptor, if any
    pub fn code(&self) -> Option<u32> {
        self.descriptor.map(|d| d.code())
    }

    /// Format for display
    pub fn format(&self) -> String {
        match &self.descriptor {
            Some(descriptor) => format!(
                "[{}] {}/{} {} - {}",
                self.level.as_str(),
                descriptor.code(),
                descriptor.state(),
                descriptor.name(),
                self.message
            ),
            None => format!("[{}] {}", self.level.as_str(), self.message),
        }
    }

    /// Format with context lines appended
    pub fn format_detailed(&self) -> String {
        let mut output = self.format();

        if let Some(descriptor) = &self.descriptor {
            output.push_str(&format!("\n  SQLSTATE class: {}", descriptor.state().class()));
            output.push_str(&format!("\n  Subsystem: {}", descriptor.subsystem().as_str()));
        }

        if !self.context.is_empty() {
            let mut keys: Vec<&String> = self.context.keys().collect();
            keys.sort();

            output.push_str("\n  Context:");
            for key in keys {
                output.push_str(&format!("\n    {}: {}", key, self.context[key]));
            }
        }

        output
    }

    /// Format as JSON for structured logging
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::json!({
            "timestamp": self.timestamp.to_rfc3339(),
            "level": self.level.as_str(),
            "message": self.message,
        });

        if let Some(descriptor) = &self.descriptor {
            json["error"] = serde_json::json!({
                "name": descriptor.name(),
                "code": descriptor.code(),
                "sql_state": descriptor.state().code(),
            });
        }

        if !self.context.is_empty() {
            json["context"] = serde_json::Value::Object(
                self.context
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                    .collect(),
            );
        }

        serde_json::to_string(&json)
    }
}

/// Cut a message to at most `limit` bytes on a character boundary
fn truncate_message(message: &str, limit: usize) -> String {
    if message.len() <= limit {
        return message.to_string();
    }

    let mut end = limit;
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &message[..end])
}
