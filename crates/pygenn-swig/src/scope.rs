// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Scoped regions of interface text
//!
//! A scope is opened and closed through [`ModuleWriter::scope`], which writes
//! the begin marker, runs the body, and writes the end marker on every exit
//! path of the body.
//!
//! [`ModuleWriter::scope`]: crate::writer::ModuleWriter::scope

/// Kinds of delimited regions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeKind {
    /// `%inline %{ ... %}`: copied into the wrapper and processed by SWIG
    Inline,
    /// `%{ ... %}`: copied into the wrapper untouched
    Passthrough,
    /// `%extend Class { ... };`: adds members to an existing class
    Extend(String),
    /// `%init %{ ... %}`: runs at module initialisation
    Init,
    /// Plain C++ brace block
    Block,
}

impl ScopeKind {
    pub fn extend(class_name: impl Into<String>) -> Self {
        ScopeKind::Extend(class_name.into())
    }

    pub fn begin_marker(&self) -> String {
        match self {
            ScopeKind::Inline => "\n%inline %{\n".to_string(),
            ScopeKind::Passthrough => "\n%{\n".to_string(),
            ScopeKind::Extend(class_name) => format!("\n%extend {} {{\n", class_name),
            ScopeKind::Init => "\n%init %{\n".to_string(),
            ScopeKind::Block => "\n{\n".to_string(),
        }
    }

    pub fn end_marker(&self) -> &'static str {
        match self {
            ScopeKind::Inline | ScopeKind::Passthrough | ScopeKind::Init => "%}\n",
            ScopeKind::Extend(_) => "};\n",
            ScopeKind::Block => "}\n",
        }
    }
}
