// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Generated interface artifacts
//!
//! One module per `.i` file. Each exposes a `write_*` function over any
//! [`ModuleWriter`] (used directly by tests) and a `generate` function that
//! writes the artifact into the swig directory.

pub mod family_module;
pub mod main_module;
pub mod shared_library;
pub mod stl_containers;

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::error::SwigGenResult;
use crate::report::{ArtifactKind, ArtifactRecord};
use crate::writer::ModuleWriter;

/// Element types covered by the numpy typemaps, plus `long double`
pub const NUMERIC_TYPES: [&str; 13] = [
    "signed char",
    "unsigned char",
    "short",
    "unsigned short",
    "int",
    "unsigned int",
    "long",
    "unsigned long",
    "long long",
    "unsigned long long",
    "float",
    "double",
    "long double",
];

/// `"name"`
pub fn quoted(name: &str) -> String {
    format!("\"{}\"", name)
}

/// Create `path`, run `body` on its writer and close it
pub(crate) fn write_artifact<F>(
    module: &str,
    path: PathBuf,
    kind: ArtifactKind,
    generator: &str,
    body: F,
) -> SwigGenResult<ArtifactRecord>
where
    F: FnOnce(&mut ModuleWriter<BufWriter<File>>) -> SwigGenResult<()>,
{
    let mut writer = ModuleWriter::create(module, &path, generator)?;
    body(&mut writer)?;
    writer.close()?;
    Ok(ArtifactRecord::new(module, path, kind))
}
