// Internal modules
pub mod catalog;
pub mod config;
pub mod export;
#[macro_use]
pub mod logging;
pub mod registry;
pub mod sql_state;

// Re-export key types for library consumers
pub use catalog::{check_catalog, CatalogError, CoverageReport, MessageCatalog};
pub use registry::{
    all, describe, init_registry, lookup, registry, CodePartition, ErrorDescriptor, ErrorRegistry,
    LookupError, RegistryError, Subsystem,
};
pub use sql_state::{SqlState, StateCategory};
