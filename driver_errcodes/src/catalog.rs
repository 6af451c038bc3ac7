//! Message catalog coverage
//!
//! Message templates live outside the registry, keyed by numeric code. This
//! module loads such a catalog and reports where it drifts from the registry.

use crate::registry::{ErrorDescriptor, ErrorRegistry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    messages: BTreeMap<String, String>,
}

/// Message templates keyed by the raw catalog key
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    messages: BTreeMap<String, String>,
}

impl MessageCatalog {
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Ok(Self {
            messages: file.messages,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Template for a code, if the catalog has one
    pub fn message(&self, code: u32) -> Option<&str> {
        self.messages.get(&code.to_string()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Result of comparing a catalog against a registry
#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    /// Registry entries without a template
    pub missing: Vec<ErrorDescriptor>,

    /// Catalog codes unknown to the registry
    pub orphaned: Vec<u32>,

    /// Catalog keys that are not numeric codes
    pub invalid_keys: Vec<String>,

    pub checked_at: DateTime<Utc>,
}

impl CoverageReport {
    /// Orphans are tolerated; missing templates and bad keys are not.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.invalid_keys.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} missing, {} orphaned, {} invalid keys",
            self.missing.len(),
            self.orphaned.len(),
            self.invalid_keys.len()
        )
    }
}

pub fn check_catalog(registry: &ErrorRegistry, catalog: &MessageCatalog) -> CoverageReport {
    let missing: Vec<ErrorDescriptor> = registry
        .all()
        .iter()
        .filter(|descriptor| catalog.message(descriptor.code()).is_none())
        .copied()
        .collect();

    let mut orphaned = Vec::new();
    let mut invalid_keys = Vec::new();
    for key in catalog.messages.keys() {
        match key.parse::<u32>() {
            // "0200001" parses but would never match a lookup
            Ok(code) if code.to_string() == *key => {
                if registry.describe(code).is_none() {
                    orphaned.push(code);
                }
            }
            _ => invalid_keys.push(key.clone()),
        }
    }
    orphaned.sort_unstable();

    crate::log_debug!(
        "Catalog checked",
        "missing" => missing.len(),
        "orphaned" => orphaned.len(),
        "invalid_keys" => invalid_keys.len()
    );

    CoverageReport {
        missing,
        orphaned,
        invalid_keys,
        checked_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{codes, CodePartition};
    use assert_matches::assert_matches;
    use std::io::Write;

    fn small_registry() -> ErrorRegistry {
        ErrorRegistry::build(
            &[codes::INTERNAL_ERROR, codes::CONNECTION_ERROR, codes::INTERRUPTED],
            CodePartition::declared(),
        )
        .unwrap()
    }

    #[test]
    fn test_complete_catalog() {
        let catalog = MessageCatalog::from_toml_str(
            r#"
            [messages]
            200001 = "Internal error: {0}"
            200002 = "Cannot connect: {0}"
            200003 = "Interrupted"
            "#,
        )
        .unwrap();

        let report = check_catalog(&small_registry(), &catalog);
        assert!(report.is_complete());
        assert!(report.orphaned.is_empty());
        assert_eq!(catalog.message(200003), Some("Interrupted"));
    }

    #[test]
    fn test_missing_orphaned_and_invalid_keys() {
        let catalog = MessageCatalog::from_toml_str(
            r#"
            [messages]
            200001 = "Internal error"
            200057 = "Retired"
            not_a_code = "Oops"
            "0200002" = "Padded"
            "#,
        )
        .unwrap();

        let report = check_catalog(&small_registry(), &catalog);
        assert!(!report.is_complete());
        assert_eq!(report.missing, vec![codes::CONNECTION_ERROR, codes::INTERRUPTED]);
        assert_eq!(report.orphaned, vec![200057]);
        assert_eq!(report.invalid_keys, vec!["0200002".to_string(), "not_a_code".to_string()]);
        assert_eq!(report.summary(), "2 missing, 1 orphaned, 2 invalid keys");
    }

    #[test]
    fn test_orphans_alone_keep_catalog_complete() {
        let catalog = MessageCatalog::from_toml_str(
            r#"
            [messages]
            200001 = "a"
            200002 = "b"
            200003 = "c"
            250000 = "extra"
            "#,
        )
        .unwrap();

        let report = check_catalog(&small_registry(), &catalog);
        assert!(report.is_complete());
        assert_eq!(report.orphaned, vec![250000]);
    }

    #[test]
    fn test_missing_messages_table_is_empty() {
        let catalog = MessageCatalog::from_toml_str("").unwrap();
        assert!(catalog.is_empty());

        let report = check_catalog(&small_registry(), &catalog);
        assert_eq!(report.missing.len(), 3);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[messages]\n200001 = \"Internal error\"").unwrap();

        let catalog = MessageCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.message(200001), Some("Internal error"));
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert_matches!(
            MessageCatalog::load(dir.path().join("absent.toml")),
            Err(CatalogError::Io { .. })
        );

        assert_matches!(
            MessageCatalog::from_toml_str("[messages\n"),
            Err(CatalogError::Parse(_))
        );
    }
}
