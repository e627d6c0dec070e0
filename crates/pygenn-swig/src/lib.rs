// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # pygenn-swig
//!
//! Generates the SWIG interface files that expose GeNN's model families to
//! Python, plus the `Custom` extension sources each family needs.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pygenn_config::CodegenConfig;
//! use pygenn_swig::Generator;
//!
//! let generator = Generator::new("/path/to/genn", &CodegenConfig::default());
//! let report = generator.run().expect("generation failed");
//! println!("{}", report);
//! ```
//!
//! Lower-level pieces ([`ModuleWriter`], [`parse_declarations`], the
//! [`synth`] functions) are public for tools that only need part of the run.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod artifacts;
pub mod custom;
pub mod directive;
pub mod error;
pub mod family;
pub mod layout;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod scope;
pub mod suppression;
pub mod synth;
pub mod writer;

pub use directive::Directive;
pub use error::{SwigGenError, SwigGenResult};
pub use family::{FamilyCatalog, FamilyKind, ModelDeclaration, ModelEntry, ModelFamily, CUSTOM_MODEL};
pub use layout::Layout;
pub use parser::parse_declarations;
pub use pipeline::Generator;
pub use report::{ArtifactKind, ArtifactRecord, GenerationReport};
pub use scope::ScopeKind;
pub use suppression::SuppressionList;
pub use synth::{Binding, BindingSet};
pub use writer::ModuleWriter;
