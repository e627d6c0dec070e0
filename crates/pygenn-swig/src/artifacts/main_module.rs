// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Main interface (`pygenn.i`)
//!
//! Imports every family interface, wraps the model-building API and
//! instantiates the population-adder templates for every model combination.

use std::io::Write;

use crate::artifacts::{quoted, stl_containers, write_artifact};
use crate::error::SwigGenResult;
use crate::family::FamilyCatalog;
use crate::layout::Layout;
use crate::report::{ArtifactKind, ArtifactRecord};
use crate::scope::ScopeKind;
use crate::synth::BindingSet;
use crate::writer::ModuleWriter;

/// Library headers compiled into the wrapper, each once
const LIBRARY_HEADERS: [&str; 8] = [
    "variableMode.h",
    "global.h",
    "modelSpec.h",
    "generateALL.h",
    "synapseMatrixType.h",
    "neuronGroup.h",
    "synapseGroup.h",
    "currentSource.h",
];

/// Group headers wrapped after the family imports
const GROUP_HEADERS: [&str; 3] = ["neuronGroup.h", "synapseGroup.h", "currentSource.h"];

/// Symbols of modelSpec.h that are not wrapped
const MODEL_SPEC_IGNORES: [&str; 4] = ["initGeNN", "GeNNReady", "SynapseConnType", "SynapseGType"];

const MODULE_INIT: &str = r#"
    initGeNN();
    GENN_PREFERENCES::buildSharedLibrary = true;
    GENN_PREFERENCES::autoInitSparseVars = true;
#ifdef DEBUG
    GENN_PREFERENCES::optimizeCode = false;
    GENN_PREFERENCES::debugCode = true;
#endif // DEBUG

#ifndef CPU_ONLY
    CHECK_CUDA_ERRORS(cudaGetDeviceCount(&deviceCount));
    deviceProp = new cudaDeviceProp[deviceCount];
    for (int device = 0; device < deviceCount; device++) {
        CHECK_CUDA_ERRORS(cudaSetDevice(device));
        CHECK_CUDA_ERRORS(cudaGetDeviceProperties(&(deviceProp[device]), device));
    }
#endif // CPU_ONLY
"#;

/// Replacements for the `main` of the standalone code generator
const RUNNER_HELPERS: &str = r#"
int initMPI_pygenn() {
    int localHostID = 0;
#ifdef MPI_ENABLE
    MPI_Init(NULL, NULL);
    MPI_Comm_rank(MPI_COMM_WORLD, &localHostID);
    cout << "MPI initialized - host ID:" << localHostID << endl;
#endif
    return localHostID;
}

void generate_model_runner_pygenn( NNmodel & model, const std::string &path, int localHostID ) {
    if (!model.isFinalized()) {
        gennError("Model was not finalized in modelDefinition(). Please call model.finalize().");
    }
#ifndef CPU_ONLY
    chooseDevice(model, path, localHostID);
#endif // CPU_ONLY
    generate_model_runner(model, path, localHostID);
#ifdef MPI_ENABLE
    MPI_Finalize();
    cout << "MPI finalized." << endl;
#endif
}
"#;

pub fn write_main_interface<W: Write>(
    writer: &mut ModuleWriter<W>,
    layout: &Layout,
    catalog: &FamilyCatalog,
    bindings: &BindingSet,
) -> SwigGenResult<()> {
    writer.emit_generated_file_notice()?;
    writer.declare_module(false)?;
    writer.scope(ScopeKind::Passthrough, |w| {
        for header in LIBRARY_HEADERS {
            w.native_include(&quoted(header))?;
        }
        for family in catalog.iter() {
            w.native_include(&quoted(&family.kind().custom_header_file()))?;
        }
        Ok(())
    })?;
    writer.import_artifact(&layout.swig_reference(&format!("{}.i", stl_containers::MODULE_NAME)))?;

    writer.scope(ScopeKind::Init, |w| w.write_raw(MODULE_INIT))?;
    writer.scope(ScopeKind::Inline, |w| w.write_raw(RUNNER_HELPERS))?;

    for family in catalog.iter() {
        writer.import_artifact(&layout.swig_reference(&family.kind().interface_file()))?;
    }
    for header in GROUP_HEADERS {
        writer.include(&layout.include_reference(header))?;
    }

    for symbol in MODEL_SPEC_IGNORES {
        writer.ignore(symbol)?;
    }
    writer.include(&layout.include_reference("modelSpec.h"))?;
    for binding in bindings.iter() {
        writer.instantiate_template(&binding.template, &binding.name)?;
    }

    writer.write_raw("\n// wrap variables from global.h. Note that GENN_PREFERENCES is\n")?;
    writer.write_raw("// already covered in the GeNNPreferences.i interface\n")?;
    writer.ignore("GENN_PREFERENCES")?;
    writer.ignore("deviceProp")?;
    writer.include(&layout.include_reference("global.h"))?;

    writer.write_raw("\n// wrap variableMode.h.\n")?;
    writer.ignore("operator&")?;
    writer.include(&layout.include_reference("variableMode.h"))?;

    writer.write_raw("\n// wrap synapseMatrixType.h\n")?;
    writer.include(&layout.include_reference("synapseMatrixType.h"))?;
    writer.scope(ScopeKind::Inline, |w| {
        w.write_raw("void setDefaultVarMode( const VarMode &varMode ) {\n")?;
        w.write_raw("  GENN_PREFERENCES::defaultVarMode = varMode;\n}")
    })?;
    writer.import_artifact(&layout.swig_reference("GeNNPreferences.i"))
}

pub fn generate(
    layout: &Layout,
    module: &str,
    generator: &str,
    catalog: &FamilyCatalog,
    bindings: &BindingSet,
) -> SwigGenResult<ArtifactRecord> {
    write_artifact(
        module,
        layout.output_path(&format!("{}.i", module)),
        ArtifactKind::Interface,
        generator,
        |writer| write_main_interface(writer, layout, catalog, bindings),
    )
}
