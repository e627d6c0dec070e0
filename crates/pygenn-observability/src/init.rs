// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Logging initialization
//!
//! Console output goes to stderr; stdout is left to the generator's report.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use crate::cli::CrateDebugFlags;

/// Install the global `tracing` subscriber
///
/// # Arguments
/// * `debug_flags` - Per-crate debug flags
/// * `default_level` - Level for everything not covered by a flag
///
/// # Errors
///
/// Fails if the filter directives are invalid or a global subscriber is
/// already installed.
pub fn init_logging(debug_flags: &CrateDebugFlags, default_level: &str) -> Result<()> {
    let filter = build_filter(debug_flags, default_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug_flags.any_enabled())
        .without_time()
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))
}

/// Build the `EnvFilter` for the given flags
pub fn build_filter(debug_flags: &CrateDebugFlags, default_level: &str) -> Result<EnvFilter> {
    let directives = debug_flags.to_filter_string(default_level);
    EnvFilter::try_new(&directives)
        .map_err(|e| anyhow!("Invalid log filter '{}': {}", directives, e))
}
