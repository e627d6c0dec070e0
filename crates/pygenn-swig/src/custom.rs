// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Custom-extension emitter
//!
//! Writes `<header>Custom.h` and `<header>Custom.cc` for a family. The
//! generated `<Family>::Custom` type derives from the family's `Base`, is a
//! lazily created singleton and builds its parameter (and variable) values
//! from vectors whose length is only known at runtime.

use std::io::Write;

use tracing::debug;

use crate::artifacts::{quoted, write_artifact};
use crate::error::SwigGenResult;
use crate::family::{FamilyKind, CUSTOM_MODEL};
use crate::layout::Layout;
use crate::report::{ArtifactKind, ArtifactRecord};
use crate::writer::ModuleWriter;

const PARAM_VALUES_HEADER: &str = "customParamValues.h";
const VAR_VALUES_HEADER: &str = "customVarValues.h";

/// C++ text of the `Custom` class for `family`
pub fn custom_class_declaration(family: FamilyKind) -> String {
    let ns = family.module_name();
    let mut text = format!(
        "
namespace {ns}
{{
// getInstance() creates the instance on first use without locking; call it from one thread only
class Custom : public Base
{{
private:
    static {ns}::Custom *s_Instance;
public:
    static const {ns}::Custom *getInstance()
    {{
        if ( s_Instance == NULL )
        {{
            s_Instance = new {ns}::Custom;
        }}
        return s_Instance;
    }}
    typedef CustomValues::ParamValues ParamValues;
",
        ns = ns
    );
    if family.has_variables() {
        text.push_str("    typedef CustomValues::VarValues VarValues;\n");
    }
    text.push_str(
        "    static CustomValues::ParamValues* makeParamValues( const std::vector< double > & vals )
    {
        return new CustomValues::ParamValues( vals );
    }
",
    );
    if family.has_variables() {
        text.push_str(
            "    static CustomValues::VarValues* makeVarValues( const std::vector< NewModels::VarInit > & vals )
        {
            return new CustomValues::VarValues( vals );
        }
",
        );
    }
    text.push_str(&format!("}};\n}} // namespace {}\n", ns));
    text
}

pub fn write_custom_declaration<W: Write>(
    writer: &mut ModuleWriter<W>,
    family: FamilyKind,
) -> SwigGenResult<()> {
    writer.emit_generated_file_notice()?;
    writer.write_raw("#pragma once\n")?;
    writer.native_include(&quoted(&family.header_file()))?;
    writer.native_include(&quoted(PARAM_VALUES_HEADER))?;
    if family.has_variables() {
        writer.native_include(&quoted(VAR_VALUES_HEADER))?;
    }
    writer.write_raw(&custom_class_declaration(family))
}

pub fn write_custom_definition<W: Write>(
    writer: &mut ModuleWriter<W>,
    family: FamilyKind,
) -> SwigGenResult<()> {
    writer.emit_generated_file_notice()?;
    writer.native_include(&quoted(&family.custom_header_file()))?;
    writer.write_raw(&format!(
        "{}({});\n",
        family.registration_macro(),
        family.qualify(CUSTOM_MODEL)
    ))
}

/// Write both Custom files of `family` into the swig directory
pub fn generate_custom_sources(
    layout: &Layout,
    family: FamilyKind,
    generator: &str,
) -> SwigGenResult<Vec<ArtifactRecord>> {
    debug!(family = %family, "Generating Custom extension sources");
    let declaration = write_artifact(
        family.module_name(),
        layout.output_path(&family.custom_header_file()),
        ArtifactKind::CustomDeclaration,
        generator,
        |writer| write_custom_declaration(writer, family),
    )?;
    let definition = write_artifact(
        family.module_name(),
        layout.output_path(&family.custom_source_file()),
        ArtifactKind::CustomDefinition,
        generator,
        |writer| write_custom_definition(writer, family),
    )?;
    Ok(vec![declaration, definition])
}
