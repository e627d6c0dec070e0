// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! `StlContainers.i`: wrappers for the standard containers used by the API
//! and a Python-subclassable wrapper for the `std::function` callback type.

use std::io::Write;

use crate::artifacts::{write_artifact, NUMERIC_TYPES};
use crate::directive::Directive;
use crate::error::SwigGenResult;
use crate::layout::Layout;
use crate::report::{ArtifactKind, ArtifactRecord};
use crate::scope::ScopeKind;
use crate::writer::ModuleWriter;

pub const MODULE_NAME: &str = "StlContainers";

/// Callback signature, without the `std::` prefix
const DP_FUNC_SPEC: &str = "function<double( const std::vector<double> &, double )>";

/// Pair and vector instantiations, in emission order
fn container_templates() -> Vec<(String, &'static str)> {
    vec![
        ("std::pair<std::string, std::string>".to_string(), "StringPair"),
        ("std::pair<std::string, double>".to_string(), "StringDoublePair"),
        (
            "std::pair<std::string, std::pair<std::string, double>>".to_string(),
            "StringStringDoublePairPair",
        ),
        (format!("std::pair<std::string, std::{}>", DP_FUNC_SPEC), "StringDPFPair"),
        ("std::vector<std::string>".to_string(), "StringVector"),
        (
            "std::vector<std::pair<std::string, std::string>>".to_string(),
            "StringPairVector",
        ),
        (
            "std::vector<std::pair<std::string, std::pair<std::string, double>>>".to_string(),
            "StringStringDoublePairPairVector",
        ),
        (
            format!("std::vector<std::pair<std::string, std::{}>>", DP_FUNC_SPEC),
            "StringDPFPairVector",
        ),
    ]
}

/// `unsigned long long` -> `UnsignedLongLongVector`
pub fn vector_alias(element_type: &str) -> String {
    let mut alias: String = element_type
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect();
    alias.push_str("Vector");
    alias
}

pub fn write_stl_containers<W: Write>(writer: &mut ModuleWriter<W>) -> SwigGenResult<()> {
    writer.emit_generated_file_notice()?;
    writer.declare_module(false)?;
    writer.scope(ScopeKind::Passthrough, |w| {
        w.emit(Directive::native_include("<functional>").with_comment("// for std::function"))
    })?;

    writer.write_raw("\n// swig wrappers for STL containers\n")?;
    writer.include("<std_string.i>")?;
    writer.include("<std_pair.i>")?;
    writer.include("<std_vector.i>")?;

    let callable = format!("std::{}", DP_FUNC_SPEC);
    writer.write_raw(
        "\n// wrap std::function in a callable struct with the same name\n\
         // and enable directors feature for it, so that a new class can\n\
         // be derived from it in python. swig magic.\n",
    )?;
    writer.rename(&callable, "STD_DPFunc")?;
    writer.emit(
        Directive::rename(format!("{}::operator()", callable), "__call__")
            .with_comment("// rename operator() as __call__ so that it works correctly in python"),
    )?;
    writer.enable_polymorphic_dispatch(&callable)?;
    writer.write_raw(&format!(
        "namespace std{{\n    struct {spec} {{\n        // copy ctor\n        {spec}( const std::{spec}&);\n        double operator()( const std::vector<double> &, double ) const;\n    }};\n}}\n",
        spec = DP_FUNC_SPEC
    ))?;

    writer.write_raw("\n// add template specifications for various STL containers\n")?;
    for (spec, name) in container_templates() {
        writer.instantiate_template(&spec, name)?;
    }
    for element_type in NUMERIC_TYPES {
        writer.instantiate_template(&format!("std::vector<{}>", element_type), &vector_alias(element_type))?;
    }
    Ok(())
}

pub fn generate(layout: &Layout, generator: &str) -> SwigGenResult<ArtifactRecord> {
    write_artifact(
        MODULE_NAME,
        layout.output_path(&format!("{}.i", MODULE_NAME)),
        ArtifactKind::Interface,
        generator,
        write_stl_containers,
    )
}
