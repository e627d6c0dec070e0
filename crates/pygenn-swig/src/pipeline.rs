// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Generation pipeline
//!
//! Stages run in a fixed order, each owning the writers it opens:
//!
//! 1. container glue (`StlContainers.i`)
//! 2. runtime loader (`SharedLibraryModel.i`)
//! 3. families: parse each header, write its interface and Custom sources
//! 4. main interface, built from the finished [`FamilyCatalog`]
//!
//! Inputs are checked before the swig directory is touched, so a missing
//! header leaves the tree unchanged.

use std::fs;
use std::path::PathBuf;

use pygenn_config::CodegenConfig;
use tracing::{info, warn};

use crate::artifacts::{family_module, main_module, shared_library, stl_containers};
use crate::error::{SwigGenError, SwigGenResult};
use crate::family::{FamilyCatalog, FamilyKind, ModelFamily};
use crate::layout::Layout;
use crate::report::{ArtifactRecord, GenerationReport};
use crate::synth::BindingSet;

/// Interface generator for one GeNN tree
#[derive(Debug, Clone)]
pub struct Generator {
    layout: Layout,
    notice_name: String,
    main_module: String,
}

impl Generator {
    pub fn new(root: impl Into<PathBuf>, config: &CodegenConfig) -> Self {
        Self {
            layout: Layout::new(root, &config.layout),
            notice_name: config.generator.notice_name.clone(),
            main_module: config.generator.main_module.clone(),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Fail with every missing family header, relative to the root
    pub fn check_inputs(&self) -> SwigGenResult<()> {
        let missing = self.layout.missing_headers();
        if missing.is_empty() {
            return Ok(());
        }
        for path in &missing {
            warn!(path = %path.display(), "Required header is missing");
        }
        Err(SwigGenError::MissingInputs(missing))
    }

    /// Run every stage and report what was written
    pub fn run(&self) -> SwigGenResult<GenerationReport> {
        self.check_inputs()?;

        let swig_dir = self.layout.swig_dir();
        fs::create_dir_all(&swig_dir).map_err(|e| SwigGenError::io(&swig_dir, e))?;
        info!(root = %self.layout.root().display(), "Generating SWIG interfaces");

        let mut artifacts = Vec::new();

        info!("Stage 1/4: container glue");
        artifacts.push(stl_containers::generate(&self.layout, &self.notice_name)?);

        info!("Stage 2/4: runtime loader");
        artifacts.push(shared_library::generate(&self.layout, &self.notice_name)?);

        info!("Stage 3/4: model families");
        let catalog = FamilyCatalog {
            neuron: self.generate_family(FamilyKind::Neuron, &mut artifacts)?,
            postsynaptic: self.generate_family(FamilyKind::Postsynaptic, &mut artifacts)?,
            weight_update: self.generate_family(FamilyKind::WeightUpdate, &mut artifacts)?,
            current_source: self.generate_family(FamilyKind::CurrentSource, &mut artifacts)?,
            init_var_snippet: self.generate_family(FamilyKind::InitVarSnippet, &mut artifacts)?,
        };

        info!("Stage 4/4: main interface");
        let bindings = BindingSet::from_catalog(&catalog);
        artifacts.push(main_module::generate(
            &self.layout,
            &self.main_module,
            &self.notice_name,
            &catalog,
            &bindings,
        )?);

        let report = GenerationReport::new(self.layout.root(), artifacts, &catalog, &bindings);
        info!(
            artifacts = report.artifacts.len(),
            bindings = report.bindings.total(),
            "Generation complete"
        );
        Ok(report)
    }

    fn generate_family(
        &self,
        kind: FamilyKind,
        artifacts: &mut Vec<ArtifactRecord>,
    ) -> SwigGenResult<ModelFamily> {
        let (family, records) = family_module::generate(&self.layout, kind, &self.notice_name)?;
        artifacts.extend(records);
        Ok(family)
    }
}
