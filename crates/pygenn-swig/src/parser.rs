// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Declaration Parser - extract model declarations from family headers

A header line declares a model when, after leading whitespace, it starts with
`DECLARE_`:

```text
    DECLARE_MODEL(NeuronModels::Izhikevich, 4, 2);
    DECLARE_MODEL(ExpCurr, 1, 0);
    DECLARE_SNIPPET(InitVarSnippet::Uniform, 2);
```

The argument list is split on commas into the model name, the parameter count
and (for families with variables) the variable count. Declarations come back
in file order; duplicate names are reported but kept.
*/

use std::collections::HashSet;

use pygenn_config::is_valid_identifier;
use tracing::{debug, warn};

use crate::error::{SwigGenError, SwigGenResult};
use crate::family::{FamilyKind, ModelDeclaration, NameConvention};

/// Prefix shared by every declaration macro
pub const DECLARATION_PREFIX: &str = "DECLARE_";

/// Parse every declaration in `header_text` using `family`'s convention
///
/// # Errors
///
/// `MalformedDeclaration` for the first declaration line with the wrong
/// number of arguments, a count that is not a non-negative integer, or a name
/// that does not reduce to an identifier.
pub fn parse_declarations(
    family: FamilyKind,
    header_text: &str,
) -> SwigGenResult<Vec<ModelDeclaration>> {
    let mut declarations = Vec::new();
    let mut seen = HashSet::new();

    for (index, raw_line) in header_text.lines().enumerate() {
        let line = raw_line.trim_start();
        if !line.starts_with(DECLARATION_PREFIX) {
            continue;
        }

        let declaration = parse_line(family, line).map_err(|reason| {
            SwigGenError::MalformedDeclaration {
                family,
                line_number: index + 1,
                line: line.trim_end().to_string(),
                reason,
            }
        })?;

        debug!(
            family = %family,
            model = %declaration.name,
            params = declaration.param_count,
            vars = ?declaration.var_count,
            "Parsed declaration"
        );

        if !seen.insert(declaration.name.clone()) {
            warn!(
                family = %family,
                model = %declaration.name,
                line = index + 1,
                "Model declared more than once; generated binding names will collide"
            );
        }
        declarations.push(declaration);
    }

    if declarations.is_empty() {
        warn!(family = %family, "No model declarations found; only Custom will be wrapped");
    }

    Ok(declarations)
}

fn parse_line(family: FamilyKind, line: &str) -> Result<ModelDeclaration, String> {
    let (_, after_open) = line
        .split_once('(')
        .ok_or_else(|| "missing '(' after the declaration macro".to_string())?;
    let (arguments, _) = after_open
        .split_once(')')
        .ok_or_else(|| "missing ')' closing the argument list".to_string())?;

    let fields: Vec<&str> = arguments.split(',').map(str::trim).collect();
    let expected = if family.has_variables() { 3 } else { 2 };
    if fields.len() != expected {
        return Err(format!(
            "expected {} arguments, found {}",
            expected,
            fields.len()
        ));
    }

    let name = short_name(family.name_convention(), fields[0])?;
    let param_count = parse_count("parameter", fields[1])?;
    let var_count = if family.has_variables() {
        Some(parse_count("variable", fields[2])?)
    } else {
        None
    };

    Ok(ModelDeclaration::new(name, param_count, var_count))
}

fn short_name(convention: NameConvention, qualified: &str) -> Result<String, String> {
    let name = match convention {
        NameConvention::Qualified => qualified
            .rsplit_once("::")
            .map(|(_, trailing)| trailing)
            .ok_or_else(|| format!("expected a namespace-qualified name, found '{}'", qualified))?,
        NameConvention::Bare => qualified,
    };

    if !is_valid_identifier(name) {
        return Err(format!("'{}' is not a valid model identifier", name));
    }
    Ok(name.to_string())
}

fn parse_count(what: &str, field: &str) -> Result<usize, String> {
    field
        .parse::<usize>()
        .map_err(|_| format!("{} count '{}' is not a non-negative integer", what, field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name_round_trip() {
        let decls = parse_declarations(FamilyKind::Neuron, "DECLARE_X(NS::Foo, 2, 3)").unwrap();
        assert_eq!(decls, vec![ModelDeclaration::new("Foo", 2, Some(3))]);
    }

    #[test]
    fn test_snippet_has_no_variable_count() {
        let decls =
            parse_declarations(FamilyKind::InitVarSnippet, "DECLARE_X(NS::Foo, 2)").unwrap();
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].name, "Foo");
        assert_eq!(decls[0].param_count, 2);
        assert_eq!(decls[0].var_count, None);
    }

    #[test]
    fn test_bare_name_used_as_is() {
        let header = "namespace PostsynapticModels\n{\n    DECLARE_MODEL(ExpCond, 2, 0);\n}\n";
        let decls = parse_declarations(FamilyKind::Postsynaptic, header).unwrap();
        assert_eq!(decls, vec![ModelDeclaration::new("ExpCond", 2, Some(0))]);
    }

    #[test]
    fn test_bare_family_rejects_qualified_name() {
        let err =
            parse_declarations(FamilyKind::WeightUpdate, "DECLARE_MODEL(NS::StaticPulse, 0, 1);")
                .unwrap_err();
        assert!(err.to_string().contains("'NS::StaticPulse' is not a valid model identifier"));
    }

    #[test]
    fn test_qualified_family_requires_namespace() {
        let err =
            parse_declarations(FamilyKind::Neuron, "DECLARE_MODEL(Izhikevich, 4, 2);").unwrap_err();
        assert!(err.to_string().contains("namespace-qualified"));
    }

    #[test]
    fn test_non_candidate_lines_ignored() {
        let header = r#"
#pragma once
// DECLARE_MODEL(NeuronModels::Commented, 1, 1);
class Base {};
    int DECLARE_count = 3;
"#;
        let decls = parse_declarations(FamilyKind::Neuron, header).unwrap();
        assert!(decls.is_empty());
    }

    #[test]
    fn test_candidate_without_parenthesis_is_malformed() {
        let header = "    DECLARE_count = 3;";
        let err = parse_declarations(FamilyKind::Neuron, header).unwrap_err();
        assert!(matches!(err, SwigGenError::MalformedDeclaration { line_number: 1, .. }));
    }

    #[test]
    fn test_file_order_and_duplicates_preserved() {
        let header = "\
DECLARE_MODEL(DeltaCurr, 0, 0);
  DECLARE_MODEL(ExpCurr, 1, 0);
\tDECLARE_MODEL(DeltaCurr, 0, 0);
";
        let decls = parse_declarations(FamilyKind::Postsynaptic, header).unwrap();
        let names: Vec<_> = decls.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["DeltaCurr", "ExpCurr", "DeltaCurr"]);
    }

    #[test]
    fn test_non_numeric_count_is_malformed() {
        let header = "\n\nDECLARE_MODEL(ExpCurr, one, 0);";
        match parse_declarations(FamilyKind::Postsynaptic, header).unwrap_err() {
            SwigGenError::MalformedDeclaration {
                family,
                line_number,
                line,
                reason,
            } => {
                assert_eq!(family, FamilyKind::Postsynaptic);
                assert_eq!(line_number, 3);
                assert_eq!(line, "DECLARE_MODEL(ExpCurr, one, 0);");
                assert!(reason.contains("parameter count 'one'"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_negative_count_is_malformed() {
        let err = parse_declarations(FamilyKind::CurrentSource, "DECLARE_MODEL(DC, 1, -1);")
            .unwrap_err();
        assert!(err.to_string().contains("variable count '-1'"));
    }

    #[test]
    fn test_wrong_argument_count_is_malformed() {
        let err =
            parse_declarations(FamilyKind::InitVarSnippet, "DECLARE_SNIPPET(InitVarSnippet::Uniform, 2, 0);")
                .unwrap_err();
        assert!(err.to_string().contains("expected 2 arguments, found 3"));

        let err = parse_declarations(FamilyKind::Neuron, "DECLARE_MODEL(NeuronModels::LIF, 7);")
            .unwrap_err();
        assert!(err.to_string().contains("expected 3 arguments, found 2"));
    }
}
