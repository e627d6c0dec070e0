// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Model Families
//!
//! The five categories of pluggable simulation components wrapped by PyGeNN.
//! Each family has its own header, SWIG module and namespace, and its own
//! declaration convention:
//!
//! | Family | Header | Name in macro | Variables |
//! |---|---|---|---|
//! | NeuronModels | `newNeuronModels.h` | `NeuronModels::X` | yes |
//! | PostsynapticModels | `newPostsynapticModels.h` | `X` | yes |
//! | WeightUpdateModels | `newWeightUpdateModels.h` | `X` | yes |
//! | CurrentSourceModels | `currentSourceModels.h` | `X` | yes |
//! | InitVarSnippet | `initVarSnippet.h` | `InitVarSnippet::X` | no |

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Name of the data-driven extension model appended to every family
pub const CUSTOM_MODEL: &str = "Custom";

/// How a family's declaration macro spells the model name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameConvention {
    /// Namespace-qualified; the short name is the trailing segment
    Qualified,
    /// Already the short name
    Bare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FamilyKind {
    Neuron,
    Postsynaptic,
    WeightUpdate,
    CurrentSource,
    InitVarSnippet,
}

impl FamilyKind {
    /// All families, in generation order
    pub const ALL: [FamilyKind; 5] = [
        FamilyKind::Neuron,
        FamilyKind::Postsynaptic,
        FamilyKind::WeightUpdate,
        FamilyKind::CurrentSource,
        FamilyKind::InitVarSnippet,
    ];

    /// Header file name without extension
    pub fn header_stem(self) -> &'static str {
        match self {
            FamilyKind::Neuron => "newNeuronModels",
            FamilyKind::Postsynaptic => "newPostsynapticModels",
            FamilyKind::WeightUpdate => "newWeightUpdateModels",
            FamilyKind::CurrentSource => "currentSourceModels",
            FamilyKind::InitVarSnippet => "initVarSnippet",
        }
    }

    /// SWIG module name, also the C++ namespace of the family
    pub fn module_name(self) -> &'static str {
        match self {
            FamilyKind::Neuron => "NeuronModels",
            FamilyKind::Postsynaptic => "PostsynapticModels",
            FamilyKind::WeightUpdate => "WeightUpdateModels",
            FamilyKind::CurrentSource => "CurrentSourceModels",
            FamilyKind::InitVarSnippet => "InitVarSnippet",
        }
    }

    pub fn header_file(self) -> String {
        format!("{}.h", self.header_stem())
    }

    pub fn custom_header_file(self) -> String {
        format!("{}Custom.h", self.header_stem())
    }

    pub fn custom_source_file(self) -> String {
        format!("{}Custom.cc", self.header_stem())
    }

    pub fn interface_file(self) -> String {
        format!("{}.i", self.module_name())
    }

    pub fn name_convention(self) -> NameConvention {
        match self {
            FamilyKind::Neuron | FamilyKind::InitVarSnippet => NameConvention::Qualified,
            FamilyKind::Postsynaptic | FamilyKind::WeightUpdate | FamilyKind::CurrentSource => {
                NameConvention::Bare
            }
        }
    }

    /// Whether declarations carry a per-instance variable count
    pub fn has_variables(self) -> bool {
        !matches!(self, FamilyKind::InitVarSnippet)
    }

    /// Macro registering a `Custom` type in its definition file
    pub fn registration_macro(self) -> &'static str {
        if self.has_variables() {
            "IMPLEMENT_MODEL"
        } else {
            "IMPLEMENT_SNIPPET"
        }
    }

    /// Interface file the family's base class is imported from
    pub fn base_interface(self) -> &'static str {
        if self.has_variables() {
            "\"NewModels.i\""
        } else {
            "\"Snippet.i\""
        }
    }

    /// Fully qualified C++ name of a model in this family
    pub fn qualify(self, model: &str) -> String {
        format!("{}::{}", self.module_name(), model)
    }
}

impl fmt::Display for FamilyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.module_name())
    }
}

/// One model declared in a family header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelDeclaration {
    pub name: String,
    pub param_count: usize,
    /// `None` for families without variables
    pub var_count: Option<usize>,
}

impl ModelDeclaration {
    pub fn new(name: impl Into<String>, param_count: usize, var_count: Option<usize>) -> Self {
        Self {
            name: name.into(),
            param_count,
            var_count,
        }
    }
}

/// Entry in a family's model list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelEntry {
    Declared(ModelDeclaration),
    /// The runtime-extensible sentinel, always last
    Custom,
}

impl ModelEntry {
    pub fn name(&self) -> &str {
        match self {
            ModelEntry::Declared(declaration) => &declaration.name,
            ModelEntry::Custom => CUSTOM_MODEL,
        }
    }
}

/// A family's parsed models, closed with the `Custom` sentinel
///
/// Only constructed once the family's header has been parsed; the sentinel is
/// appended on construction and the list is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelFamily {
    kind: FamilyKind,
    header: PathBuf,
    models: Vec<ModelEntry>,
}

impl ModelFamily {
    pub fn new(kind: FamilyKind, header: impl Into<PathBuf>, declared: Vec<ModelDeclaration>) -> Self {
        let mut models: Vec<ModelEntry> = declared.into_iter().map(ModelEntry::Declared).collect();
        models.push(ModelEntry::Custom);
        Self {
            kind,
            header: header.into(),
            models,
        }
    }

    pub fn kind(&self) -> FamilyKind {
        self.kind
    }

    pub fn header(&self) -> &Path {
        &self.header
    }

    /// Declared models followed by the `Custom` sentinel
    pub fn models(&self) -> &[ModelEntry] {
        &self.models
    }

    pub fn declared(&self) -> impl Iterator<Item = &ModelDeclaration> {
        self.models.iter().filter_map(|entry| match entry {
            ModelEntry::Declared(declaration) => Some(declaration),
            ModelEntry::Custom => None,
        })
    }

    pub fn model_names(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(ModelEntry::name)
    }
}

/// All five families, produced by the family stage and consumed by the main stage
#[derive(Debug, Clone)]
pub struct FamilyCatalog {
    pub neuron: ModelFamily,
    pub postsynaptic: ModelFamily,
    pub weight_update: ModelFamily,
    pub current_source: ModelFamily,
    pub init_var_snippet: ModelFamily,
}

impl FamilyCatalog {
    pub fn get(&self, kind: FamilyKind) -> &ModelFamily {
        match kind {
            FamilyKind::Neuron => &self.neuron,
            FamilyKind::Postsynaptic => &self.postsynaptic,
            FamilyKind::WeightUpdate => &self.weight_update,
            FamilyKind::CurrentSource => &self.current_source,
            FamilyKind::InitVarSnippet => &self.init_var_snippet,
        }
    }

    /// Families in generation order
    pub fn iter(&self) -> impl Iterator<Item = &ModelFamily> {
        FamilyKind::ALL.into_iter().map(move |kind| self.get(kind))
    }
}
