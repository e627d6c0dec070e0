// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Generation report
//!
//! Summary of one run: every file written, the models found per family and
//! how many template bindings the main interface instantiates.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::family::{FamilyCatalog, FamilyKind, ModelFamily};
use crate::synth::BindingSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// SWIG `.i` file
    Interface,
    /// `<header>Custom.h`
    CustomDeclaration,
    /// `<header>Custom.cc`
    CustomDefinition,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ArtifactKind::Interface => "interface",
            ArtifactKind::CustomDeclaration => "custom declaration",
            ArtifactKind::CustomDefinition => "custom definition",
        };
        f.pad(label)
    }
}

/// One file written by the run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactRecord {
    pub module: String,
    pub path: PathBuf,
    pub kind: ArtifactKind,
}

impl ArtifactRecord {
    pub fn new(module: impl Into<String>, path: impl Into<PathBuf>, kind: ArtifactKind) -> Self {
        Self {
            module: module.into(),
            path: path.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilySummary {
    pub family: FamilyKind,
    pub header: PathBuf,
    /// Declared models followed by `Custom`
    pub models: Vec<String>,
}

impl From<&ModelFamily> for FamilySummary {
    fn from(family: &ModelFamily) -> Self {
        Self {
            family: family.kind(),
            header: family.header().to_path_buf(),
            models: family.model_names().map(str::to_string).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BindingCounts {
    pub neuron_populations: usize,
    pub synapse_populations: usize,
    pub current_sources: usize,
    pub var_initialisers: usize,
}

impl BindingCounts {
    pub fn total(&self) -> usize {
        self.neuron_populations + self.synapse_populations + self.current_sources + self.var_initialisers
    }
}

impl From<&BindingSet> for BindingCounts {
    fn from(bindings: &BindingSet) -> Self {
        Self {
            neuron_populations: bindings.neuron_populations.len(),
            synapse_populations: bindings.synapse_populations.len(),
            current_sources: bindings.current_sources.len(),
            var_initialisers: bindings.var_initialisers.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub root: PathBuf,
    pub artifacts: Vec<ArtifactRecord>,
    pub families: Vec<FamilySummary>,
    pub bindings: BindingCounts,
}

impl GenerationReport {
    pub fn new(
        root: &Path,
        artifacts: Vec<ArtifactRecord>,
        catalog: &FamilyCatalog,
        bindings: &BindingSet,
    ) -> Self {
        Self {
            root: root.to_path_buf(),
            artifacts,
            families: catalog.iter().map(FamilySummary::from).collect(),
            bindings: BindingCounts::from(bindings),
        }
    }

    pub fn artifact(&self, file_name: &str) -> Option<&ArtifactRecord> {
        self.artifacts
            .iter()
            .find(|record| record.path.file_name().is_some_and(|name| name == file_name))
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated {} files under {}", self.artifacts.len(), self.root.display())?;
        for record in &self.artifacts {
            writeln!(f, "  {:<22} {:<19} {}", record.module, record.kind, record.path.display())?;
        }
        writeln!(f, "Models:")?;
        for summary in &self.families {
            writeln!(f, "  {:<20} {}", summary.family.to_string(), summary.models.join(", "))?;
        }
        write!(
            f,
            "Bindings: {} neuron, {} synapse, {} current source, {} initialiser ({} total)",
            self.bindings.neuron_populations,
            self.bindings.synapse_populations,
            self.bindings.current_sources,
            self.bindings.var_initialisers,
            self.bindings.total()
        )
    }
}
