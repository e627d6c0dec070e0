// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # pygenn-codegen - SWIG interface generator for PyGeNN
//!
//! Reads the model declarations in GeNN's five family headers and writes the
//! SWIG interfaces through which Python reaches them, plus the `Custom` model
//! sources for each family.
//!
//! ## Quick Start
//!
//! ```text
//! $ generate_swig_interfaces /path/to/genn
//! ```
//!
//! ```rust,no_run
//! use pygenn_codegen::prelude::*;
//!
//! let config = load_config(None, None, None)?;
//! let report = Generator::new("/path/to/genn", &config).run()?;
//! println!("{}", report);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Foundation: pygenn-config, pygenn-observability        │
//! │  (TOML layout + overrides, tracing setup)               │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Engine: pygenn-swig                                    │
//! │  (directive writer, header parser, artifact stages)     │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Tool: generate_swig_interfaces                         │
//! │  (CLI, missing-input exit status, report output)        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Outputs
//!
//! Under `<root>/swig/`: `StlContainers.i`, `SharedLibraryModel.i`, one
//! interface per family, `pygenn.i`, and `<header>Custom.h` / `.cc` per family.
//!
//! ## License
//!
//! Apache-2.0

pub use pygenn_config as config;
pub use pygenn_observability as observability;
pub use pygenn_swig as swig;

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::config::{load_config, validate_config, CodegenConfig};
    pub use crate::observability::{init_logging, CrateDebugFlags};
    pub use crate::swig::{
        FamilyKind, GenerationReport, Generator, ModelFamily, ModuleWriter, SwigGenError,
        SwigGenResult,
    };
}
