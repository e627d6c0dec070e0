//! Common test utilities and helpers

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use pygenn_swig::FamilyKind;
use tempfile::TempDir;

pub const NEURON_HEADER: &str = r#"#pragma once

#include "newModels.h"

namespace NeuronModels
{
class Izhikevich : public Base
{
public:
    DECLARE_MODEL(NeuronModels::Izhikevich, 4, 2);

    SET_SIM_CODE("...");
};

class LIF : public Base
{
public:
    DECLARE_MODEL(NeuronModels::LIF, 7, 2);
};
} // NeuronModels
"#;

pub const POSTSYNAPTIC_HEADER: &str = r#"#pragma once

namespace PostsynapticModels
{
class ExpCurr : public Base
{
public:
    DECLARE_MODEL(ExpCurr, 1, 0);
};

class DeltaCurr : public Base
{
public:
    DECLARE_MODEL(DeltaCurr, 0, 0);
};
}
"#;

pub const WEIGHT_UPDATE_HEADER: &str = r#"#pragma once

namespace WeightUpdateModels
{
class StaticPulse : public Base
{
public:
    DECLARE_MODEL(StaticPulse, 0, 1);
};

class StaticGraded : public Base
{
public:
    DECLARE_MODEL(StaticGraded, 2, 1);
};
}
"#;

pub const CURRENT_SOURCE_HEADER: &str = r#"#pragma once

namespace CurrentSourceModels
{
class DC : public Base
{
    DECLARE_MODEL(DC, 1, 0);
};
}
"#;

pub const INIT_VAR_SNIPPET_HEADER: &str = r#"#pragma once

namespace InitVarSnippet
{
class Uniform : public Base
{
public:
    DECLARE_SNIPPET(InitVarSnippet::Uniform, 2);
};
}
"#;

/// Create a temporary directory for a synthetic GeNN tree
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn default_header(family: FamilyKind) -> &'static str {
    match family {
        FamilyKind::Neuron => NEURON_HEADER,
        FamilyKind::Postsynaptic => POSTSYNAPTIC_HEADER,
        FamilyKind::WeightUpdate => WEIGHT_UPDATE_HEADER,
        FamilyKind::CurrentSource => CURRENT_SOURCE_HEADER,
        FamilyKind::InitVarSnippet => INIT_VAR_SNIPPET_HEADER,
    }
}

/// Write one family header under `<root>/include`
pub fn write_header(root: &Path, family: FamilyKind, contents: &str) -> PathBuf {
    let include = root.join("include");
    fs::create_dir_all(&include).expect("Failed to create include dir");
    let path = include.join(family.header_file());
    fs::write(&path, contents).expect("Failed to write header");
    path
}

/// Write every family header except those in `skip`
pub fn write_headers_except(root: &Path, skip: &[FamilyKind]) {
    for family in FamilyKind::ALL {
        if !skip.contains(&family) {
            write_header(root, family, default_header(family));
        }
    }
}

/// A tree with all five headers
pub fn genn_tree() -> TempDir {
    let dir = create_temp_dir();
    write_headers_except(dir.path(), &[]);
    dir
}

pub fn read_output(root: &Path, file_name: &str) -> String {
    fs::read_to_string(root.join("swig").join(file_name))
        .unwrap_or_else(|e| panic!("Failed to read swig/{}: {}", file_name, e))
}

/// Regular files below `dir`, sorted, relative to `dir`
pub fn list_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(
                    list_files(&path)
                        .into_iter()
                        .map(|child| PathBuf::from(entry.file_name()).join(child)),
                );
            } else {
                files.push(PathBuf::from(entry.file_name()));
            }
        }
    }
    files.sort();
    files
}
