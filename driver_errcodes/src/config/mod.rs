//! Configuration module for the error code registry
//! Automatically uses generated constants from TOML configuration

// Include generated constants from build.rs
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

pub mod runtime;

/// Build information and configuration metadata
pub mod build_info {
    /// Returns the configuration profile used during build
    pub fn profile() -> &'static str {
        option_env!("ERRCODES_BUILD_PROFILE").unwrap_or("development")
    }

    /// Returns the configuration directory used during build
    pub fn config_dir() -> &'static str {
        option_env!("ERRCODES_CONFIG_DIR").unwrap_or("config")
    }

    /// Returns configuration source information
    pub fn source_info() -> String {
        format!("Generated from {}/{}.toml", config_dir(), profile())
    }
}

#[cfg(test)]
mod tests {
    use super::compile_time::{logging, partition, registry};

    #[test]
    fn test_partition_constants_are_consistent() {
        assert!(partition::MIN_CODE <= partition::MAX_CODE);
        assert_eq!(partition::MIN_CODE / 100_000, partition::SUBSYSTEM_DIGIT);
        assert_eq!(partition::MAX_CODE / 100_000, partition::SUBSYSTEM_DIGIT);
    }

    #[test]
    fn test_limits_are_non_zero() {
        assert!(registry::MAX_ENTRIES > 0);
        assert!(registry::MAX_NAME_LENGTH > 0);
        assert!(logging::LOG_BUFFER_SIZE >= 100);
        assert!(logging::SECURITY_MIN_LOG_LEVEL <= 2);
    }

    #[test]
    fn test_source_info() {
        assert!(super::build_info::source_info().ends_with(".toml"));
    }
}
