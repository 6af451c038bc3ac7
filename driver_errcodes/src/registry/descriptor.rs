use super::partition::Subsystem;
use crate::sql_state::SqlState;
use serde::Serialize;

/// One registry entry: symbolic name, numeric code and SQLSTATE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorDescriptor {
    name: &'static str,
    code: u32,
    state: SqlState,
}

impl ErrorDescriptor {
    pub const fn new(name: &'static str, code: u32, state: SqlState) -> Self {
        Self { name, code, state }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn state(&self) -> SqlState {
        self.state
    }

    pub fn subsystem(&self) -> Subsystem {
        Subsystem::of(self.code)
    }
}

impl std::fmt::Display for ErrorDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, SQLSTATE {})", self.name, self.code, self.state)
    }
}
