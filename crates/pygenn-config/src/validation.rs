// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Ensures the directory layout and generator identity produce well-formed
//! output paths and SWIG module names.

use crate::{CodegenConfig, ConfigError, ConfigResult};
use std::path::Path;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validation errors that can occur during config validation
#[derive(Debug, Clone)]
pub enum ConfigValidationError {
    MissingRequired { field: String },
    InvalidValue { field: String, reason: String },
    DirectoryConflict { dir: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequired { field } => {
                write!(f, "Missing required configuration: {}", field)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
            Self::DirectoryConflict { dir } => {
                write!(
                    f,
                    "layout.include_dir and layout.swig_dir both point to '{}'",
                    dir
                )
            }
        }
    }
}

/// Returns true if `name` is a C/C++ identifier (`[A-Za-z_][A-Za-z0-9_]*`)
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validate the complete configuration
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every problem found
pub fn validate_config(config: &CodegenConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    validate_layout(config, &mut errors);
    validate_generator(config, &mut errors);
    validate_logging(config, &mut errors);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

fn validate_layout(config: &CodegenConfig, errors: &mut Vec<ConfigValidationError>) {
    for (field, dir) in [
        ("layout.include_dir", &config.layout.include_dir),
        ("layout.swig_dir", &config.layout.swig_dir),
    ] {
        if dir.trim().is_empty() {
            errors.push(ConfigValidationError::MissingRequired {
                field: field.to_string(),
            });
        } else if Path::new(dir).is_absolute() {
            errors.push(ConfigValidationError::InvalidValue {
                field: field.to_string(),
                reason: "must be relative to the GeNN root".to_string(),
            });
        }
    }

    if !config.layout.include_dir.is_empty() && config.layout.include_dir == config.layout.swig_dir
    {
        errors.push(ConfigValidationError::DirectoryConflict {
            dir: config.layout.include_dir.clone(),
        });
    }
}

fn validate_generator(config: &CodegenConfig, errors: &mut Vec<ConfigValidationError>) {
    let notice_name = &config.generator.notice_name;
    if notice_name.trim().is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "generator.notice_name".to_string(),
        });
    } else if notice_name.contains('\n') || notice_name.contains('\r') {
        errors.push(ConfigValidationError::InvalidValue {
            field: "generator.notice_name".to_string(),
            reason: "must fit on a single line".to_string(),
        });
    }

    if !is_valid_identifier(&config.generator.main_module) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "generator.main_module".to_string(),
            reason: format!(
                "'{}' is not a valid module identifier",
                config.generator.main_module
            ),
        });
    }
}

fn validate_logging(config: &CodegenConfig, errors: &mut Vec<ConfigValidationError>) {
    if !LOG_LEVELS.contains(&config.logging.level.to_lowercase().as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.level".to_string(),
            reason: format!("must be one of {}", LOG_LEVELS.join(", ")),
        });
    }
}
