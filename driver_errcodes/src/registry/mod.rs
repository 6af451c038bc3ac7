//! Client driver error registry
//!
//! The declared table in [`codes`] is validated once, on first use, and frozen
//! into a process-wide [`ErrorRegistry`]. Concurrent first callers block until
//! the single construction finishes and then all observe the same instance.
//! A defective table is a programming error: [`registry`] logs it as critical
//! and aborts, while [`init_registry`] hands the defect back to the caller.

pub mod codes;
pub mod descriptor;
pub mod error;
pub mod partition;
pub mod table;

pub use codes::MESSAGE_RESOURCE;
pub use descriptor::ErrorDescriptor;
pub use error::{LookupError, RegistryError, RegistryResult};
pub use partition::{CodePartition, Subsystem};
pub use table::ErrorRegistry;

use crate::config::runtime::RegistryPreferences;
use std::sync::OnceLock;

const SUMMARY_MESSAGE: &str = "Error registry initialized";

// Holds the outcome so a defective table is reported, not rebuilt, on every call
static REGISTRY: OnceLock<RegistryResult<ErrorRegistry>> = OnceLock::new();

fn build_declared() -> RegistryResult<ErrorRegistry> {
    let registry = ErrorRegistry::build(codes::DECLARED, CodePartition::declared())?;

    if RegistryPreferences::default().log_initialization_summary {
        crate::log_info!(
            SUMMARY_MESSAGE,
            "entries" => registry.len(),
            "partition" => registry.partition()
        );
    }

    Ok(registry)
}

/// Run `build` at most once per cell; every caller sees its outcome.
fn resolve<F>(
    cell: &OnceLock<RegistryResult<ErrorRegistry>>,
    build: F,
) -> RegistryResult<&ErrorRegistry>
where
    F: FnOnce() -> RegistryResult<ErrorRegistry>,
{
    match cell.get_or_init(build) {
        Ok(registry) => Ok(registry),
        Err(error) => Err(error.clone()),
    }
}

/// Build the process-wide registry if needed, returning any table defect.
pub fn init_registry() -> RegistryResult<&'static ErrorRegistry> {
    resolve(&REGISTRY, build_declared)
}

/// Process-wide registry, built on first access.
///
/// # Panics
///
/// Panics if the declared table is defective.
pub fn registry() -> &'static ErrorRegistry {
    match init_registry() {
        Ok(registry) => registry,
        Err(error) => {
            crate::logging::safe_log_critical(
                codes::INTERNAL_ERROR,
                &format!("Error registry construction failed: {}", error),
            );
            panic!("error registry construction failed: {}", error);
        }
    }
}

/// Forward lookup against the process-wide registry
pub fn lookup(name: &str) -> Result<ErrorDescriptor, LookupError> {
    registry().lookup(name)
}

/// Reverse lookup against the process-wide registry
pub fn describe(code: u32) -> Option<ErrorDescriptor> {
    registry().describe(code)
}

pub fn all() -> &'static [ErrorDescriptor] {
    registry().all()
}
