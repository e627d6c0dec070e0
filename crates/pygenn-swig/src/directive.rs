// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # SWIG Directive Vocabulary
//!
//! Each [`Directive`] renders to exactly one line of interface text. Rendering
//! is a pure function of the directive's fields; the layout (including the
//! separator space before an empty trailing comment) is what the binding
//! compiler has always been fed, so it is kept verbatim.
//!
//! ```text
//! %module(directors="1") NeuronModels
//! %feature("director") NeuronModels::Base;
//! %include "include/newNeuronModels.h"
//! %import "swig/StlContainers.i"
//! %ignore LegacyWrapper;
//! %rename("%s") Foo; // unignore
//! %template(addNeuronPopulation_Izhikevich) NNmodel::addNeuronPopulation<NeuronModels::Izhikevich>;
//! #include "modelSpec.h"
//! ```

use std::fmt;

/// Rename target that removes a symbol from the wrapped interface
pub const IGNORE_PATTERN: &str = "\"$ignore\"";
/// Rename target that restores a symbol under its own name
pub const RESTORE_PATTERN: &str = "\"%s\"";
/// Rename subject matching every identifier
pub const MATCH_ALL: &str = "\"\"";

/// One line of SWIG interface text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Provenance comment heading every generated file
    Notice { generator: String },
    Module {
        name: String,
        directors: bool,
        comment: String,
    },
    FeatureDirector { symbol: String, comment: String },
    Include { path: String, comment: String },
    Import { path: String, comment: String },
    Ignore { identifier: String, comment: String },
    Rename {
        identifier: String,
        new_name: String,
        comment: String,
    },
    Template { spec: String, name: String },
    /// Plain preprocessor include, used inside passthrough regions
    NativeInclude { header: String, comment: String },
}

impl Directive {
    pub fn notice(generator: impl Into<String>) -> Self {
        Directive::Notice {
            generator: generator.into(),
        }
    }

    pub fn module(name: impl Into<String>, directors: bool) -> Self {
        Directive::Module {
            name: name.into(),
            directors,
            comment: String::new(),
        }
    }

    pub fn feature_director(symbol: impl Into<String>) -> Self {
        Directive::FeatureDirector {
            symbol: symbol.into(),
            comment: String::new(),
        }
    }

    pub fn include(path: impl Into<String>) -> Self {
        Directive::Include {
            path: path.into(),
            comment: String::new(),
        }
    }

    pub fn import(path: impl Into<String>) -> Self {
        Directive::Import {
            path: path.into(),
            comment: String::new(),
        }
    }

    pub fn ignore(identifier: impl Into<String>) -> Self {
        Directive::Ignore {
            identifier: identifier.into(),
            comment: String::new(),
        }
    }

    pub fn rename(identifier: impl Into<String>, new_name: impl Into<String>) -> Self {
        Directive::Rename {
            identifier: identifier.into(),
            new_name: new_name.into(),
            comment: String::new(),
        }
    }

    /// Cancel an earlier suppression of `identifier`
    pub fn unignore(identifier: impl Into<String>) -> Self {
        Directive::rename(identifier, RESTORE_PATTERN).with_comment("// unignore")
    }

    /// Suppress every identifier; templates are not affected by SWIG
    pub fn ignore_all() -> Self {
        Directive::rename(MATCH_ALL, IGNORE_PATTERN).with_comment("// ignore all")
    }

    pub fn unignore_all() -> Self {
        Directive::rename(MATCH_ALL, RESTORE_PATTERN).with_comment("// unignore all")
    }

    pub fn template(spec: impl Into<String>, name: impl Into<String>) -> Self {
        Directive::Template {
            spec: spec.into(),
            name: name.into(),
        }
    }

    pub fn native_include(header: impl Into<String>) -> Self {
        Directive::NativeInclude {
            header: header.into(),
            comment: String::new(),
        }
    }

    /// Attach a trailing comment. Directives without a comment slot are returned unchanged.
    pub fn with_comment(mut self, text: impl Into<String>) -> Self {
        match &mut self {
            Directive::Module { comment, .. }
            | Directive::FeatureDirector { comment, .. }
            | Directive::Include { comment, .. }
            | Directive::Import { comment, .. }
            | Directive::Ignore { comment, .. }
            | Directive::Rename { comment, .. }
            | Directive::NativeInclude { comment, .. } => *comment = text.into(),
            Directive::Notice { .. } | Directive::Template { .. } => {}
        }
        self
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Notice { generator } => {
                writeln!(f, "// This code was generated by {}. DO NOT EDIT", generator)
            }
            Directive::Module {
                name,
                directors,
                comment,
            } => {
                let directors = if *directors { "(directors=\"1\")" } else { "" };
                writeln!(f, "%module{} {} {}", directors, name, comment)
            }
            Directive::FeatureDirector { symbol, comment } => {
                writeln!(f, "%feature(\"director\") {}; {}", symbol, comment)
            }
            Directive::Include { path, comment } => writeln!(f, "%include {} {}", path, comment),
            Directive::Import { path, comment } => writeln!(f, "%import {} {}", path, comment),
            Directive::Ignore {
                identifier,
                comment,
            } => writeln!(f, "%ignore {}; {}", identifier, comment),
            Directive::Rename {
                identifier,
                new_name,
                comment,
            } => writeln!(f, "%rename({}) {}; {}", new_name, identifier, comment),
            Directive::Template { spec, name } => writeln!(f, "%template({}) {};", name, spec),
            Directive::NativeInclude { header, comment } => {
                writeln!(f, "#include {} {}", header, comment)
            }
        }
    }
}
