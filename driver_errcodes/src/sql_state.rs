//! Closed SQLSTATE taxonomy
//!
//! Five-character state codes as defined by the SQL standard: the first two
//! characters are the class, the remaining three the subclass. Only the states
//! listed in [`TAXONOMY`] are considered valid by the registry.

use serde::Serialize;

/// A SQLSTATE code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SqlState(&'static str);

/// Coarse category implied by the state class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StateCategory {
    Success,
    Warning,
    NoData,
    Exception,
}

impl StateCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateCategory::Success => "Success",
            StateCategory::Warning => "Warning",
            StateCategory::NoData => "NoData",
            StateCategory::Exception => "Exception",
        }
    }
}

impl SqlState {
    /// Wrap a raw state string without checking it against the taxonomy.
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    /// Resolve a state string to its taxonomy entry.
    pub fn parse(code: &str) -> Option<SqlState> {
        TAXONOMY.iter().copied().find(|state| state.0 == code)
    }

    pub fn code(&self) -> &'static str {
        self.0
    }

    /// The two-character class, or the whole code if it is shorter than that.
    pub fn class(&self) -> &'static str {
        self.0.get(..2).unwrap_or(self.0)
    }

    pub fn category(&self) -> StateCategory {
        match self.class() {
            "00" => StateCategory::Success,
            "01" => StateCategory::Warning,
            "02" => StateCategory::NoData,
            _ => StateCategory::Exception,
        }
    }

    /// Five characters, ASCII digits or uppercase letters.
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == 5
            && self
                .0
                .bytes()
                .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
    }

    /// Member of the closed taxonomy.
    pub fn is_known(&self) -> bool {
        self.is_well_formed() && TAXONOMY.contains(self)
    }

    // Class 00 - Successful Completion
    pub const SUCCESSFUL_COMPLETION: SqlState = SqlState("00000");

    // Class 01 - Warning
    pub const WARNING: SqlState = SqlState("01000");

    // Class 02 - No Data
    pub const NO_DATA: SqlState = SqlState("02000");

    // Class 03 - SQL Statement Not Yet Complete
    pub const SQL_STATEMENT_NOT_YET_COMPLETE: SqlState = SqlState("03000");

    // Class 08 - Connection Exception
    pub const CONNECTION_EXCEPTION: SqlState = SqlState("08000");
    pub const SQLCLIENT_UNABLE_TO_ESTABLISH_SQLCONNECTION: SqlState = SqlState("08001");
    pub const CONNECTION_DOES_NOT_EXIST: SqlState = SqlState("08003");
    pub const SQLSERVER_REJECTED_ESTABLISHMENT_OF_SQLCONNECTION: SqlState = SqlState("08004");
    pub const CONNECTION_FAILURE: SqlState = SqlState("08006");
    pub const TRANSACTION_RESOLUTION_UNKNOWN: SqlState = SqlState("08007");
    pub const PROTOCOL_VIOLATION: SqlState = SqlState("08P01");

    // Class 0A - Feature Not Supported
    pub const FEATURE_NOT_SUPPORTED: SqlState = SqlState("0A000");

    // Class 22 - Data Exception
    pub const DATA_EXCEPTION: SqlState = SqlState("22000");
    pub const STRING_DATA_RIGHT_TRUNCATION: SqlState = SqlState("22001");
    pub const NUMERIC_VALUE_OUT_OF_RANGE: SqlState = SqlState("22003");
    pub const INVALID_DATETIME_FORMAT: SqlState = SqlState("22007");
    pub const DIVISION_BY_ZERO: SqlState = SqlState("22012");
    pub const INVALID_CHARACTER_VALUE_FOR_CAST: SqlState = SqlState("22018");
    pub const INVALID_PARAMETER_VALUE: SqlState = SqlState("22023");

    // Class 25 - Invalid Transaction State
    pub const INVALID_TRANSACTION_STATE: SqlState = SqlState("25000");

    // Class 28 - Invalid Authorization Specification
    pub const INVALID_AUTHORIZATION_SPECIFICATION: SqlState = SqlState("28000");

    // Class 40 - Transaction Rollback
    pub const SERIALIZATION_FAILURE: SqlState = SqlState("40001");

    // Class 42 - Syntax Error or Access Rule Violation
    pub const SYNTAX_ERROR_OR_ACCESS_RULE_VIOLATION: SqlState = SqlState("42000");
    pub const INSUFFICIENT_PRIVILEGE: SqlState = SqlState("42501");
    pub const SYNTAX_ERROR: SqlState = SqlState("42601");

    // Class 53 - Insufficient Resources
    pub const INSUFFICIENT_RESOURCES: SqlState = SqlState("53000");
    pub const OUT_OF_MEMORY: SqlState = SqlState("53200");

    // Class 54 - Program Limit Exceeded
    pub const PROGRAM_LIMIT_EXCEEDED: SqlState = SqlState("54000");

    // Class 57 - Operator Intervention
    pub const OPERATOR_INTERVENTION: SqlState = SqlState("57000");
    pub const QUERY_CANCELED: SqlState = SqlState("57014");

    // Class 58 - System Error
    pub const SYSTEM_ERROR: SqlState = SqlState("58000");
    pub const IO_ERROR: SqlState = SqlState("58030");

    // Class XX - Internal Error
    pub const INTERNAL_ERROR: SqlState = SqlState("XX000");
    pub const DATA_CORRUPTED: SqlState = SqlState("XX001");
}

impl std::fmt::Display for SqlState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Every state the registry accepts.
pub const TAXONOMY: &[SqlState] = &[
    SqlState::SUCCESSFUL_COMPLETION,
    SqlState::WARNING,
    SqlState::NO_DATA,
    SqlState::SQL_STATEMENT_NOT_YET_COMPLETE,
    SqlState::CONNECTION_EXCEPTION,
    SqlState::SQLCLIENT_UNABLE_TO_ESTABLISH_SQLCONNECTION,
    SqlState::CONNECTION_DOES_NOT_EXIST,
    SqlState::SQLSERVER_REJECTED_ESTABLISHMENT_OF_SQLCONNECTION,
    SqlState::CONNECTION_FAILURE,
    SqlState::TRANSACTION_RESOLUTION_UNKNOWN,
    SqlState::PROTOCOL_VIOLATION,
    SqlState::FEATURE_NOT_SUPPORTED,
    SqlState::DATA_EXCEPTION,
    SqlState::STRING_DATA_RIGHT_TRUNCATION,
    SqlState::NUMERIC_VALUE_OUT_OF_RANGE,
    SqlState::INVALID_DATETIME_FORMAT,
    SqlState::DIVISION_BY_ZERO,
    SqlState::INVALID_CHARACTER_VALUE_FOR_CAST,
    SqlState::INVALID_PARAMETER_VALUE,
    SqlState::INVALID_TRANSACTION_STATE,
    SqlState::INVALID_AUTHORIZATION_SPECIFICATION,
    SqlState::SERIALIZATION_FAILURE,
    SqlState::SYNTAX_ERROR_OR_ACCESS_RULE_VIOLATION,
    SqlState::INSUFFICIENT_PRIVILEGE,
    SqlState::SYNTAX_ERROR,
    SqlState::INSUFFICIENT_RESOURCES,
    SqlState::OUT_OF_MEMORY,
    SqlState::PROGRAM_LIMIT_EXCEEDED,
    SqlState::OPERATOR_INTERVENTION,
    SqlState::QUERY_CANCELED,
    SqlState::SYSTEM_ERROR,
    SqlState::IO_ERROR,
    SqlState::INTERNAL_ERROR,
    SqlState::DATA_CORRUPTED,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_taxonomy_entries_are_unique_and_well_formed() {
        let mut seen = HashSet::new();
        for state in TAXONOMY {
            assert!(state.is_well_formed(), "malformed state {}", state);
            assert!(seen.insert(state.code()), "duplicate state {}", state);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(SqlState::parse("57014"), Some(SqlState::QUERY_CANCELED));
        assert_eq!(SqlState::parse("08P01"), Some(SqlState::PROTOCOL_VIOLATION));
        assert_eq!(SqlState::parse("ZZ999"), None);
        assert_eq!(SqlState::parse(""), None);
    }

    #[test]
    fn test_unknown_states_are_rejected() {
        assert!(!SqlState::new("ZZ999").is_known());
        assert!(!SqlState::new("").is_known());
        assert!(!SqlState::new("0800").is_known());
        assert!(!SqlState::new("08p01").is_known());
    }

    #[test]
    fn test_class_and_category() {
        assert_eq!(SqlState::CONNECTION_FAILURE.class(), "08");
        assert_eq!(SqlState::WARNING.category(), StateCategory::Warning);
        assert_eq!(SqlState::NO_DATA.category(), StateCategory::NoData);
        assert_eq!(SqlState::SUCCESSFUL_COMPLETION.category(), StateCategory::Success);
        assert_eq!(SqlState::INTERNAL_ERROR.category(), StateCategory::Exception);
        assert_eq!(SqlState::new("X").class(), "X");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&SqlState::FEATURE_NOT_SUPPORTED).unwrap();
        assert_eq!(json, "\"0A000\"");
    }
}
