// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for interface generation

use std::path::PathBuf;

use crate::family::FamilyKind;

/// Errors raised while generating interfaces
///
/// Every variant is fatal to the run: generated artifacts reference each
/// other by name, so a partial set is never valid output.
#[derive(Debug, thiserror::Error)]
pub enum SwigGenError {
    /// Required family headers are absent (checked before any output is opened)
    #[error("{} required header(s) missing: {}", .0.len(), display_paths(.0))]
    MissingInputs(Vec<PathBuf>),

    #[error("Malformed declaration in {family} header, line {line_number}: {reason}\n    {line}")]
    MalformedDeclaration {
        family: FamilyKind,
        line_number: usize,
        line: String,
        reason: String,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Module {module} was already declared")]
    ModuleAlreadyDeclared { module: String },
}

impl SwigGenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SwigGenError::Io {
            path: path.into(),
            source,
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type SwigGenResult<T> = Result<T, SwigGenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_inputs_message_lists_files() {
        let err = SwigGenError::MissingInputs(vec![
            PathBuf::from("include/newNeuronModels.h"),
            PathBuf::from("include/initVarSnippet.h"),
        ]);
        let msg = err.to_string();
        assert!(msg.starts_with("2 required header(s) missing"));
        assert!(msg.contains("include/newNeuronModels.h, include/initVarSnippet.h"));
    }

    #[test]
    fn test_malformed_declaration_names_family_and_line() {
        let err = SwigGenError::MalformedDeclaration {
            family: FamilyKind::Postsynaptic,
            line_number: 12,
            line: "DECLARE_MODEL(ExpCurr, one, 0);".to_string(),
            reason: "parameter count 'one' is not a non-negative integer".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("PostsynapticModels"));
        assert!(msg.contains("line 12"));
        assert!(msg.contains("DECLARE_MODEL(ExpCurr, one, 0);"));
    }

    #[test]
    fn test_io_error_names_path_and_keeps_source() {
        use std::error::Error;

        let err = SwigGenError::io(
            "swig/pygenn.i",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().starts_with("I/O error on swig/pygenn.i"));
        let source = err.source().and_then(|s| s.downcast_ref::<std::io::Error>());
        assert_eq!(source.map(|e| e.kind()), Some(std::io::ErrorKind::PermissionDenied));
    }
}
