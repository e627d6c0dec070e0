// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Family interfaces (`NeuronModels.i`, `PostsynapticModels.i`, ...)
//!
//! Each family interface wraps the family header and its `Custom` extension,
//! and extends every declared model with static `makeParamValues` /
//! `makeVarValues` helpers. The helpers unpack a Python list into the
//! fixed-arity value type the model declares.

use std::fs;
use std::io::Write;

use tracing::info;

use crate::artifacts::{quoted, write_artifact};
use crate::custom::generate_custom_sources;
use crate::error::{SwigGenError, SwigGenResult};
use crate::family::{FamilyKind, ModelDeclaration, ModelFamily, CUSTOM_MODEL};
use crate::layout::Layout;
use crate::parser::parse_declarations;
use crate::report::{ArtifactKind, ArtifactRecord};
use crate::scope::ScopeKind;
use crate::writer::ModuleWriter;

/// Value aggregates a model exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Param,
    Var,
}

impl ValueKind {
    pub fn type_name(self) -> &'static str {
        match self {
            ValueKind::Param => "ParamValues",
            ValueKind::Var => "VarValues",
        }
    }

    /// Element type of the vector the maker accepts
    pub fn element_type(self) -> &'static str {
        match self {
            ValueKind::Param => "double",
            ValueKind::Var => "NewModels::VarInit",
        }
    }
}

/// Static `make<Values>` helper for one model
pub fn write_value_maker<W: Write>(
    writer: &mut ModuleWriter<W>,
    family: FamilyKind,
    model: &str,
    values: ValueKind,
    count: usize,
) -> SwigGenResult<()> {
    let qualified = family.qualify(model);
    let value_type = values.type_name();
    let element_type = values.element_type();
    let argument = if count == 0 { "" } else { "vals" };

    writer.write_raw(&format!(
        "static {}::{}* make{}( const std::vector<{}> & {} )",
        qualified, value_type, value_type, element_type, argument
    ))?;
    writer.scope(ScopeKind::Block, |w| {
        if count != 0 {
            let unpacked: Vec<String> = (0..count).map(|i| format!("v{i} = vals[{i}]", i = i)).collect();
            w.write_raw(&format!("{} {};\n", element_type, unpacked.join(", ")))?;
        }
        let arguments: Vec<String> = (0..count).map(|i| format!("v{}", i)).collect();
        w.write_raw(&format!(
            "return new {}::{}({});\n",
            qualified,
            value_type,
            arguments.join(", ")
        ))
    })
}

fn write_model_extension<W: Write>(
    writer: &mut ModuleWriter<W>,
    family: FamilyKind,
    declaration: &ModelDeclaration,
) -> SwigGenResult<()> {
    writer.scope(ScopeKind::extend(family.qualify(&declaration.name)), |w| {
        write_value_maker(w, family, &declaration.name, ValueKind::Param, declaration.param_count)?;
        if let Some(var_count) = declaration.var_count {
            write_value_maker(w, family, &declaration.name, ValueKind::Var, var_count)?;
        }
        Ok(())
    })
}

pub fn write_family_interface<W: Write>(
    writer: &mut ModuleWriter<W>,
    layout: &Layout,
    family: &ModelFamily,
) -> SwigGenResult<()> {
    let kind = family.kind();

    writer.emit_generated_file_notice()?;
    writer.declare_module(true)?;
    writer.scope(ScopeKind::Passthrough, |w| {
        w.native_include(&quoted(&kind.header_file()))?;
        w.native_include(&quoted(&kind.custom_header_file()))?;
        w.native_include(&layout.sibling_reference("customParamValues.h"))?;
        if kind.has_variables() {
            w.native_include(&quoted(&FamilyKind::InitVarSnippet.custom_header_file()))?;
            w.native_include(&layout.sibling_reference("customVarValues.h"))?;
        }
        Ok(())
    })?;

    if kind.has_variables() {
        writer.ignore("LegacyWrapper")?;
    }
    writer.import_artifact(kind.base_interface())?;
    writer.enable_polymorphic_dispatch(&kind.qualify("Base"))?;
    writer.include(&layout.include_reference(&kind.header_file()))?;
    writer.enable_polymorphic_dispatch(&kind.qualify(CUSTOM_MODEL))?;
    writer.include(&quoted(&kind.custom_header_file()))?;

    for declaration in family.declared() {
        write_model_extension(writer, kind, declaration)?;
    }
    Ok(())
}

/// Parse the family header, write its interface and its Custom sources
///
/// Returns the finished family (with `Custom` appended) for the main stage.
pub fn generate(
    layout: &Layout,
    kind: FamilyKind,
    generator: &str,
) -> SwigGenResult<(ModelFamily, Vec<ArtifactRecord>)> {
    let header = layout.header_path(kind);
    let text = fs::read_to_string(&header).map_err(|e| SwigGenError::io(&header, e))?;
    let family = ModelFamily::new(kind, layout.relative_header(kind), parse_declarations(kind, &text)?);
    info!(family = %kind, models = family.models().len(), "Parsed family header");

    let mut records = vec![write_artifact(
        kind.module_name(),
        layout.interface_path(kind),
        ArtifactKind::Interface,
        generator,
        |writer| write_family_interface(writer, layout, &family),
    )?];
    records.extend(generate_custom_sources(layout, kind, generator)?);

    Ok((family, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pygenn_config::LayoutConfig;

    fn layout() -> Layout {
        Layout::new("/genn", &LayoutConfig::default())
    }

    fn render(family: &ModelFamily) -> String {
        let mut writer = ModuleWriter::new(family.kind().module_name(), "<memory>", "gen.rs", Vec::new());
        write_family_interface(&mut writer, &layout(), family).unwrap();
        String::from_utf8(writer.close().unwrap()).unwrap()
    }

    #[test]
    fn test_value_maker_with_values() {
        let mut writer = ModuleWriter::new("NeuronModels", "<memory>", "gen.rs", Vec::new());
        write_value_maker(&mut writer, FamilyKind::Neuron, "Izhikevich", ValueKind::Param, 2).unwrap();
        let text = String::from_utf8(writer.close().unwrap()).unwrap();
        assert_eq!(
            text,
            "static NeuronModels::Izhikevich::ParamValues* makeParamValues( const std::vector<double> & vals )\n{\ndouble v0 = vals[0], v1 = vals[1];\nreturn new NeuronModels::Izhikevich::ParamValues(v0, v1);\n}\n"
        );
    }

    #[test]
    fn test_value_maker_without_values() {
        let mut writer = ModuleWriter::new("PostsynapticModels", "<memory>", "gen.rs", Vec::new());
        write_value_maker(&mut writer, FamilyKind::Postsynaptic, "DeltaCurr", ValueKind::Var, 0).unwrap();
        let text = String::from_utf8(writer.close().unwrap()).unwrap();
        assert_eq!(
            text,
            "static PostsynapticModels::DeltaCurr::VarValues* makeVarValues( const std::vector<NewModels::VarInit> &  )\n{\nreturn new PostsynapticModels::DeltaCurr::VarValues();\n}\n"
        );
    }

    #[test]
    fn test_model_family_interface() {
        let family = ModelFamily::new(
            FamilyKind::Neuron,
            "include/newNeuronModels.h",
            vec![ModelDeclaration::new("Izhikevich", 4, Some(2))],
        );
        let text = render(&family);
        assert!(text.starts_with(
            "// This code was generated by gen.rs. DO NOT EDIT\n%module(directors=\"1\") NeuronModels \n\n%{\n#include \"newNeuronModels.h\" \n#include \"newNeuronModelsCustom.h\" \n#include \"../swig/customParamValues.h\" \n#include \"initVarSnippetCustom.h\" \n#include \"../swig/customVarValues.h\" \n%}\n"
        ));
        assert!(text.contains(
            "%ignore LegacyWrapper; \n%import \"NewModels.i\" \n%feature(\"director\") NeuronModels::Base; \n%include \"include/newNeuronModels.h\" \n%feature(\"director\") NeuronModels::Custom; \n%include \"newNeuronModelsCustom.h\" \n"
        ));
        assert!(text.contains("\n%extend NeuronModels::Izhikevich {\nstatic NeuronModels::Izhikevich::ParamValues* makeParamValues("));
        assert!(text.contains("NewModels::VarInit v0 = vals[0], v1 = vals[1];\n"));
        assert!(text.ends_with("return new NeuronModels::Izhikevich::VarValues(v0, v1);\n}\n};\n"));
        assert!(!text.contains("%extend NeuronModels::Custom"));
    }

    #[test]
    fn test_snippet_family_interface() {
        let family = ModelFamily::new(
            FamilyKind::InitVarSnippet,
            "include/initVarSnippet.h",
            vec![ModelDeclaration::new("Uniform", 2, None)],
        );
        let text = render(&family);
        assert!(!text.contains("LegacyWrapper"));
        assert!(!text.contains("customVarValues.h"));
        assert!(text.contains("%import \"Snippet.i\" \n"));
        assert!(text.contains("makeParamValues"));
        assert!(!text.contains("makeVarValues"));
    }

    #[test]
    fn test_extend_blocks_balanced() {
        let family = ModelFamily::new(
            FamilyKind::WeightUpdate,
            "include/newWeightUpdateModels.h",
            vec![
                ModelDeclaration::new("StaticPulse", 0, Some(1)),
                ModelDeclaration::new("StaticGraded", 2, Some(1)),
            ],
        );
        let text = render(&family);
        assert_eq!(text.matches("%extend ").count(), 2);
        assert_eq!(text.matches("};\n").count(), 2);
        assert_eq!(text.matches("\n{\n").count(), 4);
    }
}
