//! Error types for registry construction and lookup

use super::partition::CodePartition;

/// Result type for registry construction
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Defects in a declared table. Any of these means the table is wrong, not the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Entry at position {position} has an empty name")]
    EmptyName { position: usize },

    #[error("Entry '{name}' has a {length}-character name, limit is {limit}")]
    NameTooLong {
        name: String,
        length: usize,
        limit: usize,
    },

    #[error("Duplicate error name '{name}': declared at positions {first} and {duplicate}")]
    DuplicateName {
        name: String,
        first: usize,
        duplicate: usize,
    },

    #[error("Duplicate error code {code}: used by '{first}' and '{duplicate}'")]
    DuplicateCode {
        code: u32,
        first: String,
        duplicate: String,
    },

    #[error("Error code {code} of '{name}' is outside the reserved partition {partition}")]
    CodeOutOfPartition {
        name: String,
        code: u32,
        partition: CodePartition,
    },

    #[error("Entry '{name}' declares SQLSTATE '{state}' which is not in the taxonomy")]
    InvalidState { name: String, state: String },

    #[error("Table declares {count} entries, limit is {limit}")]
    TooManyEntries { count: usize, limit: usize },
}

impl RegistryError {
    pub fn duplicate_name(name: &str, first: usize, duplicate: usize) -> Self {
        Self::DuplicateName {
            name: name.to_string(),
            first,
            duplicate,
        }
    }

    pub fn duplicate_code(code: u32, first: &str, duplicate: &str) -> Self {
        Self::DuplicateCode {
            code,
            first: first.to_string(),
            duplicate: duplicate.to_string(),
        }
    }

    pub fn code_out_of_partition(name: &str, code: u32, partition: CodePartition) -> Self {
        Self::CodeOutOfPartition {
            name: name.to_string(),
            code,
            partition,
        }
    }

    pub fn invalid_state(name: &str, state: &str) -> Self {
        Self::InvalidState {
            name: name.to_string(),
            state: state.to_string(),
        }
    }

    /// Name of the entry that triggered the defect, when there is one
    pub fn offending_name(&self) -> Option<&str> {
        match self {
            Self::NameTooLong { name, .. }
            | Self::DuplicateName { name, .. }
            | Self::CodeOutOfPartition { name, .. }
            | Self::InvalidState { name, .. } => Some(name.as_str()),
            Self::DuplicateCode { duplicate, .. } => Some(duplicate.as_str()),
            Self::EmptyName { .. } | Self::TooManyEntries { .. } => None,
        }
    }
}

/// Forward lookup failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Unknown error identifier '{name}'")]
    UnknownIdentifier { name: String },
}

impl LookupError {
    pub fn unknown_identifier(name: &str) -> Self {
        Self::UnknownIdentifier {
            name: name.to_string(),
        }
    }
}
