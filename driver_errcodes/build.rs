// build.rs - TOML-driven constant generation for the error code registry
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    partition: PartitionLimits,
    registry: RegistryLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct PartitionLimits {
    min_code: u32,
    max_code: u32,
    subsystem_digit: u32,
}

#[derive(serde::Deserialize)]
struct RegistryLimits {
    max_entries: usize,
    max_name_length: usize,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    log_buffer_size: usize,
    max_log_message_length: usize,
    security_min_log_level: u8,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=ERRCODES_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=ERRCODES_CONFIG_DIR");

    let profile = env::var("ERRCODES_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("ERRCODES_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Find workspace root (parent of driver_errcodes directory)
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_constraints(&config);
    generate_constants(&config, &profile);
}

fn validate_constraints(config: &CompileTimeConfig) {
    let partition = &config.partition;

    if partition.min_code > partition.max_code {
        panic!(
            "PARTITION: min_code {} exceeds max_code {}",
            partition.min_code, partition.max_code
        );
    }

    if partition.max_code > 999_999 {
        panic!("PARTITION: max_code must be a six-digit code");
    }

    if partition.subsystem_digit > 9 {
        panic!("PARTITION: subsystem_digit must be a single digit");
    }

    // Both bounds must sit inside the owning subsystem's range
    for bound in [partition.min_code, partition.max_code] {
        if bound / 100_000 != partition.subsystem_digit {
            panic!(
                "PARTITION: bound {} is outside subsystem {} range",
                bound, partition.subsystem_digit
            );
        }
    }

    if config.registry.max_entries == 0 || config.registry.max_name_length == 0 {
        panic!("REGISTRY: limits must be non-zero");
    }

    if config.logging.log_buffer_size < 100 || config.logging.log_buffer_size > 100_000 {
        panic!(
            "LOGGING: log_buffer_size {} outside 100..=100000",
            config.logging.log_buffer_size
        );
    }

    if config.logging.security_min_log_level > 2 {
        panic!("LOGGING: security_min_log_level too high (max: 2)");
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod partition {{
        pub const MIN_CODE: u32 = {};
        pub const MAX_CODE: u32 = {};
        pub const SUBSYSTEM_DIGIT: u32 = {};
    }}

    pub mod registry {{
        pub const MAX_ENTRIES: usize = {};
        pub const MAX_NAME_LENGTH: usize = {};
    }}

    pub mod logging {{
        pub const LOG_BUFFER_SIZE: usize = {};
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
        pub const SECURITY_MIN_LOG_LEVEL: u8 = {};
    }}
}}
"#,
        profile,
        config.partition.min_code,
        config.partition.max_code,
        config.partition.subsystem_digit,
        config.registry.max_entries,
        config.registry.max_name_length,
        config.logging.log_buffer_size,
        config.logging.max_log_message_length,
        config.logging.security_min_log_level,
    );

    fs::write(output_path, constants_code).unwrap();
}
