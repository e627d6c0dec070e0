// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Per-crate debug flags
//!
//! Supports `--debug <crate-name>` (repeatable) and `--debug all` on the
//! command line, plus the `PYGENN_DEBUG` environment variable.

use std::collections::BTreeSet;
use std::env;

use crate::KNOWN_CRATES;

/// Crates for which debug logging was requested
///
/// # Example
/// ```rust
/// use pygenn_observability::CrateDebugFlags;
///
/// let flags = CrateDebugFlags::from_names(vec!["pygenn-swig".to_string()]);
/// assert!(flags.is_enabled("pygenn-swig"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CrateDebugFlags {
    pub enabled_crates: BTreeSet<String>,
}

impl CrateDebugFlags {
    /// Build flags from crate names; `all` enables every known crate
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut flags = CrateDebugFlags::default();
        for name in names {
            flags.enable(&name);
        }
        flags
    }

    /// Enable one crate (or all of them for `all`)
    pub fn enable(&mut self, crate_name: &str) {
        let crate_name = crate_name.trim();
        if crate_name.is_empty() {
            return;
        }
        if crate_name == "all" {
            for known in KNOWN_CRATES {
                self.enabled_crates.insert(known.to_string());
            }
        } else {
            self.enabled_crates.insert(crate_name.to_string());
        }
    }

    /// Check if debug is enabled for a specific crate
    pub fn is_enabled(&self, crate_name: &str) -> bool {
        self.enabled_crates.contains(crate_name)
    }

    /// Check if debug is enabled for any crate
    pub fn any_enabled(&self) -> bool {
        !self.enabled_crates.is_empty()
    }

    /// Get log level for a crate
    pub fn log_level(&self, crate_name: &str) -> tracing::Level {
        if self.is_enabled(crate_name) {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    /// Create an `EnvFilter` directive string
    ///
    /// Crate names are converted to their module-path form, so
    /// `pygenn-swig` becomes `pygenn_swig=debug`. `default_level` applies to
    /// everything else.
    pub fn to_filter_string(&self, default_level: &str) -> String {
        let mut filters: Vec<String> = self
            .enabled_crates
            .iter()
            .map(|name| format!("{}=debug", name.replace('-', "_")))
            .collect();
        filters.push(default_level.to_lowercase());
        filters.join(",")
    }
}

/// Merge command-line debug names with the `PYGENN_DEBUG` environment variable
///
/// Environment variable format: comma-separated crate names or `all`.
pub fn parse_debug_flags<I>(cli_names: I) -> CrateDebugFlags
where
    I: IntoIterator<Item = String>,
{
    let mut flags = CrateDebugFlags::from_names(cli_names);

    if let Ok(env_var) = env::var("PYGENN_DEBUG") {
        for crate_name in env_var.split(',') {
            flags.enable(crate_name);
        }
    }

    flags
}

/// Generate help text for debug flags
pub fn debug_flags_help() -> String {
    format!(
        r#"Debug Flags:
  --debug all                    Enable debug logging for all crates
  --debug {{crate-name}}           Enable debug logging for specific crate

Available crates:
  {}

Environment Variable:
  PYGENN_DEBUG={{crate-name}}[,{{crate-name}}]  Enable debug for crates (comma-separated)
  PYGENN_DEBUG=all                              Enable debug for all crates
"#,
        KNOWN_CRATES.join(", ")
    )
}
