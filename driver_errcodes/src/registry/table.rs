//! Immutable error registry with forward and reverse indexes

use super::descriptor::ErrorDescriptor;
use super::error::{LookupError, RegistryError, RegistryResult};
use super::partition::{CodePartition, Subsystem};
use crate::config::compile_time::registry as limits;
use crate::sql_state::SqlState;
use std::collections::HashMap;

/// Validated, frozen set of error descriptors
///
/// Built once from a declared table. Every name and every code is unique,
/// every code lies inside the partition and every state is in the taxonomy.
#[derive(Debug)]
pub struct ErrorRegistry {
    /// Entries in declaration order
    entries: Vec<ErrorDescriptor>,

    /// Name to position in `entries`
    by_name: HashMap<&'static str, usize>,

    /// Code to position in `entries`
    by_code: HashMap<u32, usize>,

    partition: CodePartition,
}

impl ErrorRegistry {
    /// Validate a declared table and freeze it.
    ///
    /// Entries are checked in declaration order and the first defect found is
    /// returned; nothing is partially registered.
    pub fn build(entries: &[ErrorDescriptor], partition: CodePartition) -> RegistryResult<Self> {
        if entries.len() > limits::MAX_ENTRIES {
            return Err(RegistryError::TooManyEntries {
                count: entries.len(),
                limit: limits::MAX_ENTRIES,
            });
        }

        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_code = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            let name = entry.name();

            if name.is_empty() {
                return Err(RegistryError::EmptyName { position });
            }

            let length = name.chars().count();
            if length > limits::MAX_NAME_LENGTH {
                return Err(RegistryError::NameTooLong {
                    name: name.to_string(),
                    length,
                    limit: limits::MAX_NAME_LENGTH,
                });
            }

            if let Some(&first) = by_name.get(name) {
                return Err(RegistryError::duplicate_name(name, first, position));
            }

            if let Some(&first) = by_code.get(&entry.code()) {
                let first: &ErrorDescriptor = &entries[first];
                return Err(RegistryError::duplicate_code(
                    entry.code(),
                    first.name(),
                    name,
                ));
            }

            if !partition.contains(entry.code()) {
                return Err(RegistryError::code_out_of_partition(
                    name,
                    entry.code(),
                    partition,
                ));
            }

            if !entry.state().is_known() {
                return Err(RegistryError::invalid_state(name, entry.state().code()));
            }

            by_name.insert(name, position);
            by_code.insert(entry.code(), position);
        }

        Ok(Self {
            entries: entries.to_vec(),
            by_name,
            by_code,
            partition,
        })
    }

    /// Forward lookup by symbolic name
    pub fn lookup(&self, name: &str) -> Result<ErrorDescriptor, LookupError> {
        self.by_name
            .get(name)
            .map(|&position| self.entries[position])
            .ok_or_else(|| LookupError::unknown_identifier(name))
    }

    /// Reverse lookup by numeric code
    pub fn describe(&self, code: u32) -> Option<ErrorDescriptor> {
        self.by_code.get(&code).map(|&position| self.entries[position])
    }

    /// All entries in declaration order
    pub fn all(&self) -> &[ErrorDescriptor] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn partition(&self) -> CodePartition {
        self.partition
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Entries carrying the given SQLSTATE, in declaration order
    pub fn by_state(&self, state: SqlState) -> impl Iterator<Item = &ErrorDescriptor> + '_ {
        self.entries.iter().filter(move |d| d.state() == state)
    }

    /// Entries owned by the given subsystem, in declaration order
    pub fn by_subsystem(
        &self,
        subsystem: Subsystem,
    ) -> impl Iterator<Item = &ErrorDescriptor> + '_ {
        self.entries.iter().filter(move |d| d.subsystem() == subsystem)
    }
}

impl<'a> IntoIterator for &'a ErrorRegistry {
    type Item = &'a ErrorDescriptor;
    type IntoIter = std::slice::Iter<'a, ErrorDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::codes;
    use assert_matches::assert_matches;
    use std::collections::HashSet;

    fn declared() -> ErrorRegistry {
        ErrorRegistry::build(codes::DECLARED, CodePartition::declared()).unwrap()
    }

    fn partition() -> CodePartition {
        CodePartition::new(200_000, 299_999)
    }

    #[test]
    fn test_declared_table_builds() {
        let registry = declared();
        assert_eq!(registry.len(), 64);
        assert!(!registry.is_empty());
        assert_eq!(registry.partition(), partition());
    }

    #[test]
    fn test_names_and_codes_are_unique() {
        let registry = declared();
        let names: HashSet<_> = registry.all().iter().map(|d| d.name()).collect();
        let codes: HashSet<_> = registry.all().iter().map(|d| d.code()).collect();
        assert_eq!(names.len(), registry.len());
        assert_eq!(codes.len(), registry.len());
    }

    #[test]
    fn test_every_entry_is_in_partition_with_known_state() {
        let registry = declared();
        for descriptor in &registry {
            assert!(
                (200_000..=299_999).contains(&descriptor.code()),
                "{} out of range",
                descriptor
            );
            assert!(descriptor.state().is_known(), "{} has unknown state", descriptor);
        }
    }

    #[test]
    fn test_lookup_and_describe_agree() {
        let registry = declared();
        for descriptor in registry.all() {
            assert_eq!(registry.lookup(descriptor.name()), Ok(*descriptor));
            assert_eq!(registry.describe(descriptor.code()), Some(*descriptor));
        }
    }

    #[test]
    fn test_lookup_known_entries() {
        let registry = declared();

        let internal = registry.lookup("INTERNAL_ERROR").unwrap();
        assert_eq!(internal.code(), 200001);
        assert_eq!(internal.state(), SqlState::INTERNAL_ERROR);

        let canceled = registry.lookup("QUERY_CANCELED").unwrap();
        assert_eq!(canceled.code(), 200005);
        assert_eq!(canceled.state().code(), "57014");

        let interrupted = registry.lookup("INTERRUPTED").unwrap();
        assert_eq!(interrupted.state(), canceled.state());
    }

    #[test]
    fn test_lookup_unknown_name() {
        let registry = declared();
        assert_eq!(
            registry.lookup("DOES_NOT_EXIST"),
            Err(LookupError::unknown_identifier("DOES_NOT_EXIST"))
        );
        // names are case sensitive
        assert!(registry.lookup("internal_error").is_err());
        assert!(!registry.contains_name("internal_error"));
    }

    #[test]
    fn test_describe_unknown_codes() {
        let registry = declared();
        assert_eq!(registry.describe(999_999), None);
        assert_eq!(registry.describe(200_057), None);
        assert_eq!(registry.describe(200_000), None);
        assert_eq!(
            registry.describe(200_058).map(|d| d.name()),
            Some("EXECUTE_BATCH_INTEGER_OVERFLOW")
        );
    }

    #[test]
    fn test_all_is_ordered_and_restartable() {
        let registry = declared();
        let first: Vec<_> = registry.all().iter().map(|d| d.code()).collect();
        let second: Vec<_> = registry.all().iter().map(|d| d.code()).collect();
        assert_eq!(first, second);
        assert_eq!(registry.all(), codes::DECLARED);
        assert_eq!(first.first(), Some(&200001));
        assert_eq!(first.last(), Some(&200065));
    }

    #[test]
    fn test_duplicate_code_is_rejected() {
        let entries = [
            codes::INTERNAL_ERROR,
            ErrorDescriptor::new("SHADOW_ERROR", 200001, SqlState::INTERNAL_ERROR),
        ];
        let result = ErrorRegistry::build(&entries, partition());
        assert_matches!(
            result,
            Err(RegistryError::DuplicateCode { code: 200001, ref first, ref duplicate })
                if first == "INTERNAL_ERROR" && duplicate == "SHADOW_ERROR"
        );
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let entries = [
            codes::IO_ERROR,
            codes::NETWORK_ERROR,
            ErrorDescriptor::new("IO_ERROR", 200099, SqlState::IO_ERROR),
        ];
        let result = ErrorRegistry::build(&entries, partition());
        assert_matches!(
            result,
            Err(RegistryError::DuplicateName { first: 0, duplicate: 2, .. })
        );
    }

    #[test]
    fn test_code_outside_partition_is_rejected() {
        let entries = [ErrorDescriptor::new("STRAY", 300_001, SqlState::INTERNAL_ERROR)];
        assert_matches!(
            ErrorRegistry::build(&entries, partition()),
            Err(RegistryError::CodeOutOfPartition { code: 300_001, .. })
        );

        let entries = [ErrorDescriptor::new("LOW", 199_999, SqlState::INTERNAL_ERROR)];
        assert_matches!(
            ErrorRegistry::build(&entries, partition()),
            Err(RegistryError::CodeOutOfPartition { code: 199_999, .. })
        );
    }

    #[test]
    fn test_partition_bounds_are_inclusive() {
        let entries = [
            ErrorDescriptor::new("LOWEST", 200_000, SqlState::INTERNAL_ERROR),
            ErrorDescriptor::new("HIGHEST", 299_999, SqlState::INTERNAL_ERROR),
        ];
        let registry = ErrorRegistry::build(&entries, partition()).unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_unknown_state_is_rejected() {
        let entries = [ErrorDescriptor::new("ODD_STATE", 200_100, SqlState::new("ZZ999"))];
        assert_matches!(
            ErrorRegistry::build(&entries, partition()),
            Err(RegistryError::InvalidState { ref state, .. }) if state == "ZZ999"
        );

        let entries = [ErrorDescriptor::new("SHORT_STATE", 200_100, SqlState::new("0800"))];
        assert_matches!(
            ErrorRegistry::build(&entries, partition()),
            Err(RegistryError::InvalidState { .. })
        );
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let entries = [
            codes::INTERNAL_ERROR,
            ErrorDescriptor::new("", 200_100, SqlState::INTERNAL_ERROR),
        ];
        assert_matches!(
            ErrorRegistry::build(&entries, partition()),
            Err(RegistryError::EmptyName { position: 1 })
        );
    }

    #[test]
    fn test_first_defect_wins() {
        // duplicate code is detected before the bad state on the same entry
        let entries = [
            codes::INTERNAL_ERROR,
            ErrorDescriptor::new("BROKEN", 200001, SqlState::new("ZZ999")),
        ];
        assert_matches!(
            ErrorRegistry::build(&entries, partition()),
            Err(RegistryError::DuplicateCode { .. })
        );
    }

    #[test]
    fn test_empty_table_builds() {
        let registry = ErrorRegistry::build(&[], partition()).unwrap();
        assert!(registry.is_empty());
        assert!(registry.all().is_empty());
        assert_eq!(registry.describe(200_001), None);
    }

    #[test]
    fn test_filters() {
        let registry = declared();

        let warnings: Vec<_> = registry.by_state(SqlState::WARNING).map(|d| d.name()).collect();
        assert_eq!(
            warnings,
            vec![
                "CONNECTION_ESTABLISHED_WITH_DIFFERENT_PROP",
                "QUERY_FIRST_RESULT_NOT_RESULT_SET",
                "UPDATE_FIRST_RESULT_NOT_UPDATE_COUNT",
                "NON_FATAL_ERROR",
            ]
        );

        assert_eq!(registry.by_subsystem(Subsystem::ClientDriver).count(), 64);
        assert_eq!(registry.by_subsystem(Subsystem::ServerSql).count(), 0);
    }
}
