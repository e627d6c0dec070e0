// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! `SharedLibraryModel.i`: the runtime loader for compiled models.
//!
//! Model state is exposed to Python as numpy arrays viewing the loader's
//! memory, so every numeric element type gets an output-view typemap and its
//! own instantiation of the pointer-assignment helpers.

use std::io::Write;

use crate::artifacts::{quoted, write_artifact, NUMERIC_TYPES};
use crate::error::SwigGenResult;
use crate::layout::Layout;
use crate::report::{ArtifactKind, ArtifactRecord};
use crate::scope::ScopeKind;
use crate::writer::ModuleWriter;

pub const MODULE_NAME: &str = "SharedLibraryModel";

/// Precisions the loader is instantiated for
const SCALAR_TYPES: [(&str, &str); 3] = [("float", "f"), ("double", "d"), ("long double", "ld")];

/// Input arrays: (pointer type, argument, length argument)
const INPUT_ARRAYS: [(&str, &str, &str); 4] = [
    ("unsigned int*", "_ind", "nConn"),
    ("unsigned int*", "_indInG", "nPre"),
    ("double*", "_g", "nG"),
    ("float*", "_g", "nG"),
];

/// Initials of each word: `unsigned long long` -> `ull`
pub fn type_abbreviation(element_type: &str) -> String {
    element_type
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// numpy.i declares ARGOUTVIEW_ARRAY1 on `(DATA_TYPE** ARGOUTVIEW_ARRAY1, DIM_TYPE* DIM1)`
fn argout_view(pointer_type: &str, var_name: &str, size_name: &str) -> String {
    format!(
        "%apply ( {t}* ARGOUTVIEW_ARRAY1, int* DIM1 ) {{( {t}* {var}, int* {size} )}};\n",
        t = pointer_type,
        var = var_name,
        size = size_name
    )
}

fn in_array(pointer_type: &str, var_name: &str, size_name: &str) -> String {
    format!(
        "%apply ( {t} IN_ARRAY1, int DIM1 ) {{( {t} {var}, int {size} )}};\n",
        t = pointer_type,
        var = var_name,
        size = size_name
    )
}

pub fn write_shared_library<W: Write>(writer: &mut ModuleWriter<W>) -> SwigGenResult<()> {
    let loader_header = quoted("SharedLibraryModel.h");

    writer.emit_generated_file_notice()?;
    writer.declare_module(false)?;
    writer.scope(ScopeKind::Passthrough, |w| {
        w.write_raw("#define SWIG_FILE_WITH_INIT // for numpy\n")?;
        w.native_include(&loader_header)
    })?;

    writer.include("<std_string.i>")?;
    writer.include("\"numpy.i\"")?;
    writer.write_raw("%numpy_typemaps(long double, NPY_LONGDOUBLE, int) ")?;
    writer.scope(ScopeKind::Init, |w| w.write_raw("import_array();\n"))?;

    for element_type in NUMERIC_TYPES {
        writer.write_raw(&argout_view(&format!("{}*", element_type), "varPtr", "n1"))?;
    }
    for (pointer_type, var_name, size_name) in INPUT_ARRAYS {
        writer.write_raw(&in_array(pointer_type, var_name, size_name))?;
    }

    writer.include(&loader_header)?;
    for element_type in NUMERIC_TYPES {
        let abbreviation = type_abbreviation(element_type);
        writer.instantiate_template(
            &format!("SharedLibraryModel::assignExternalPointerArray<{}>", element_type),
            &format!("assignExternalPointerArray_{}", abbreviation),
        )?;
        writer.instantiate_template(
            &format!("SharedLibraryModel::assignExternalPointerSingle<{}>", element_type),
            &format!("assignExternalPointerSingle_{}", abbreviation),
        )?;
    }
    for (scalar, suffix) in SCALAR_TYPES {
        writer.instantiate_template(
            &format!("SharedLibraryModel<{}>", scalar),
            &format!("SharedLibraryModel_{}", suffix),
        )?;
    }
    Ok(())
}

pub fn generate(layout: &Layout, generator: &str) -> SwigGenResult<ArtifactRecord> {
    write_artifact(
        MODULE_NAME,
        layout.output_path(&format!("{}.i", MODULE_NAME)),
        ArtifactKind::Interface,
        generator,
        write_shared_library,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render() -> String {
        let mut writer = ModuleWriter::new(MODULE_NAME, "<memory>", "gen.rs", Vec::new());
        write_shared_library(&mut writer).unwrap();
        String::from_utf8(writer.close().unwrap()).unwrap()
    }

    #[test]
    fn test_type_abbreviation() {
        assert_eq!(type_abbreviation("unsigned long long"), "ull");
        assert_eq!(type_abbreviation("signed char"), "sc");
        assert_eq!(type_abbreviation("float"), "f");
    }

    #[test]
    fn test_preamble() {
        let text = render();
        assert!(text.starts_with(
            "// This code was generated by gen.rs. DO NOT EDIT\n%module SharedLibraryModel \n\n%{\n#define SWIG_FILE_WITH_INIT // for numpy\n#include \"SharedLibraryModel.h\" \n%}\n%include <std_string.i> \n%include \"numpy.i\" \n"
        ));
        assert!(text.contains("%numpy_typemaps(long double, NPY_LONGDOUBLE, int) \n%init %{\nimport_array();\n%}\n"));
    }

    #[test]
    fn test_typemap_applies() {
        let text = render();
        assert_eq!(text.matches("ARGOUTVIEW_ARRAY1").count(), NUMERIC_TYPES.len());
        assert!(text.contains(
            "%apply ( unsigned long long** ARGOUTVIEW_ARRAY1, int* DIM1 ) {( unsigned long long** varPtr, int* n1 )};\n"
        ));
        assert!(text.contains(
            "%apply ( unsigned int* IN_ARRAY1, int DIM1 ) {( unsigned int* _indInG, int nPre )};\n"
        ));
        assert!(text.contains("%apply ( float* IN_ARRAY1, int DIM1 ) {( float* _g, int nG )};\n"));
    }

    #[test]
    fn test_output_views_take_pointer_to_pointer() {
        let text = render();
        for element_type in NUMERIC_TYPES {
            let line = format!(
                "%apply ( {t}** ARGOUTVIEW_ARRAY1, int* DIM1 ) {{( {t}** varPtr, int* n1 )}};\n",
                t = element_type
            );
            assert!(text.contains(&line), "missing output view for {}", element_type);
        }
        assert!(!text.contains("%apply ( double* ARGOUTVIEW_ARRAY1"));
    }

    #[test]
    fn test_loader_instantiations() {
        let text = render();
        assert!(text.contains(
            "%template(assignExternalPointerArray_ld) SharedLibraryModel::assignExternalPointerArray<long double>;\n"
        ));
        assert!(text.contains(
            "%template(assignExternalPointerSingle_uc) SharedLibraryModel::assignExternalPointerSingle<unsigned char>;\n"
        ));
        assert!(text.ends_with(
            "%template(SharedLibraryModel_f) SharedLibraryModel<float>;\n%template(SharedLibraryModel_d) SharedLibraryModel<double>;\n%template(SharedLibraryModel_ld) SharedLibraryModel<long double>;\n"
        ));
    }
}
