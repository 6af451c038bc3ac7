//! Reserved code ranges and subsystem ownership
//!
//! Codes are six digits; the leading digit names the owning subsystem:
//! 0NNNNN server SQL, 1NNNNN execution platform, 2NNNNN client driver,
//! 3NNNNN server generic, 4NNNNN other drivers.

use crate::config::compile_time::partition;
use serde::Serialize;

/// Inclusive range of codes a registry accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodePartition {
    min: u32,
    max: u32,
}

impl CodePartition {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// The range declared in the build configuration
    pub const fn declared() -> Self {
        Self::new(partition::MIN_CODE, partition::MAX_CODE)
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, code: u32) -> bool {
        (self.min..=self.max).contains(&code)
    }
}

impl std::fmt::Display for CodePartition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// Subsystem that owns a code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Subsystem {
    ServerSql,
    ExecutionPlatform,
    ClientDriver,
    ServerGeneric,
    OtherDriver,
    Unknown,
}

impl Subsystem {
    pub fn of(code: u32) -> Self {
        if code > 999_999 {
            return Subsystem::Unknown;
        }
        Self::from_digit(code / 100_000)
    }

    pub fn from_digit(digit: u32) -> Self {
        match digit {
            0 => Subsystem::ServerSql,
            1 => Subsystem::ExecutionPlatform,
            2 => Subsystem::ClientDriver,
            3 => Subsystem::ServerGeneric,
            4 => Subsystem::OtherDriver,
            _ => Subsystem::Unknown,
        }
    }

    pub fn digit(&self) -> Option<u32> {
        match self {
            Subsystem::ServerSql => Some(0),
            Subsystem::ExecutionPlatform => Some(1),
            Subsystem::ClientDriver => Some(2),
            Subsystem::ServerGeneric => Some(3),
            Subsystem::OtherDriver => Some(4),
            Subsystem::Unknown => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Subsystem::ServerSql => "ServerSql",
            Subsystem::ExecutionPlatform => "ExecutionPlatform",
            Subsystem::ClientDriver => "ClientDriver",
            Subsystem::ServerGeneric => "ServerGeneric",
            Subsystem::OtherDriver => "OtherDriver",
            Subsystem::Unknown => "Unknown",
        }
    }
}
