// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # PyGeNN Codegen Configuration
//!
//! Type-safe configuration for the SWIG interface generator:
//! - TOML file parsing (`pygenn_codegen.toml`, optional)
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pygenn_config::load_config;
//!
//! // No file given and none found: defaults apply
//! let config = load_config(None, None, None).expect("Failed to load config");
//!
//! println!("Headers:    {}", config.layout.include_dir);
//! println!("Interfaces: {}", config.layout.swig_dir);
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{apply_cli_overrides, apply_environment_overrides, find_config_file, load_config};
pub use types::*;
pub use validation::{is_valid_identifier, validate_config, ConfigValidationError};

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax: {0}")]
    ParseError(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
