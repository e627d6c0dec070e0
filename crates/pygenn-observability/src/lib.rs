// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # pygenn-observability
//!
//! Logging setup shared by the PyGeNN interface generator crates.
//!
//! Provides console logging through `tracing-subscriber` with per-crate
//! debug flag support (`--debug pygenn-swig`, `PYGENN_DEBUG=all`).

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod init;

pub use cli::*;
pub use init::*;

/// Known crate names for debug flags (`generate_swig_interfaces` is the tool binary)
pub const KNOWN_CRATES: &[&str] = &[
    "pygenn-codegen",
    "pygenn-swig",
    "pygenn-config",
    "generate_swig_interfaces",
];
