// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! Three tiers, later ones winning:
//! 1. TOML file (or built-in defaults when no file exists)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::{CodegenConfig, ConfigError, ConfigResult};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// File name searched for when no explicit path is given
pub const CONFIG_FILE_NAME: &str = "pygenn_codegen.toml";

/// Find the codegen configuration file
///
/// Search order:
/// 1. `PYGENN_CONFIG_PATH` environment variable
/// 2. `<search_root>/pygenn_codegen.toml`
/// 3. Current working directory: `./pygenn_codegen.toml`
///
/// Returns `Ok(None)` when nothing is found; the generator runs on defaults.
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` only if `PYGENN_CONFIG_PATH` names a
/// file that does not exist
pub fn find_config_file(search_root: Option<&Path>) -> ConfigResult<Option<PathBuf>> {
    if let Ok(env_path) = env::var("PYGENN_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(Some(path));
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by PYGENN_CONFIG_PATH not found: {}",
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Some(root) = search_root {
        search_paths.push(root.join(CONFIG_FILE_NAME));
    }
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));
    }

    Ok(search_paths.into_iter().find(|path| path.exists()))
}

/// Load configuration
///
/// # Arguments
///
/// * `config_path` - Explicit config file. If `None`, [`find_config_file`] is consulted.
/// * `search_root` - GeNN root, searched for `pygenn_codegen.toml`
/// * `cli_args` - Optional CLI argument overrides
///
/// # Errors
///
/// Returns error if an explicit file is missing or the TOML is invalid
pub fn load_config(
    config_path: Option<&Path>,
    search_root: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<CodegenConfig> {
    let config_file = match config_path {
        Some(path) if !path.exists() => {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(search_root)?,
    };

    let mut config = match config_file {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            toml::from_str(&content)?
        }
        None => CodegenConfig::default(),
    };

    apply_environment_overrides(&mut config);

    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    Ok(config)
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `PYGENN_INCLUDE_DIR` -> `layout.include_dir`
/// - `PYGENN_SWIG_DIR` -> `layout.swig_dir`
/// - `PYGENN_NOTICE_NAME` -> `generator.notice_name`
/// - `PYGENN_MAIN_MODULE` -> `generator.main_module`
/// - `PYGENN_LOG_LEVEL` -> `logging.level`
pub fn apply_environment_overrides(config: &mut CodegenConfig) {
    if let Ok(value) = env::var("PYGENN_INCLUDE_DIR") {
        config.layout.include_dir = value;
    }
    if let Ok(value) = env::var("PYGENN_SWIG_DIR") {
        config.layout.swig_dir = value;
    }
    if let Ok(value) = env::var("PYGENN_NOTICE_NAME") {
        config.generator.notice_name = value;
    }
    if let Ok(value) = env::var("PYGENN_MAIN_MODULE") {
        config.generator.main_module = value;
    }
    if let Ok(value) = env::var("PYGENN_LOG_LEVEL") {
        config.logging.level = value;
    }
}

/// Apply CLI argument overrides to configuration
///
/// Recognised keys: `include_dir`, `swig_dir`, `log_level`.
pub fn apply_cli_overrides(config: &mut CodegenConfig, cli_args: &HashMap<String, String>) {
    if let Some(value) = cli_args.get("include_dir") {
        config.layout.include_dir = value.clone();
    }
    if let Some(value) = cli_args.get("swig_dir") {
        config.layout.swig_dir = value.clone();
    }
    if let Some(value) = cli_args.get("log_level") {
        config.logging.level = value.clone();
    }
}
