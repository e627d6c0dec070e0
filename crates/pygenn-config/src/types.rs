// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! This module defines all configuration structs that map to sections in
//! `pygenn_codegen.toml`.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CodegenConfig {
    pub layout: LayoutConfig,
    pub generator: GeneratorConfig,
    pub logging: LoggingConfig,
}

/// Directory layout below the GeNN root passed on the command line
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Directory holding the model family headers
    pub include_dir: String,
    /// Directory receiving the generated interfaces and Custom sources
    pub swig_dir: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            include_dir: "include".to_string(),
            swig_dir: "swig".to_string(),
        }
    }
}

/// Generator identity
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Name written into the provenance notice of every generated file
    pub notice_name: String,
    /// SWIG module name of the main interface
    pub main_module: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            notice_name: "generate_swig_interfaces.rs".to_string(),
            main_module: "pygenn".to_string(),
        }
    }
}

/// Console logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
