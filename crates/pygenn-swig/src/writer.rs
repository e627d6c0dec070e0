// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Module Writer
//!
//! Owns the output stream of one generated artifact and exposes the directive
//! vocabulary. A writer is open from construction until [`ModuleWriter::close`]
//! consumes it, so writes after closing are ruled out by the type system.
//!
//! ## Ordering preconditions (not enforced)
//!
//! - [`ModuleWriter::emit_generated_file_notice`] comes first.
//! - [`ModuleWriter::enable_polymorphic_dispatch`] must precede the
//!   [`ModuleWriter::include`] that brings the symbol into scope, otherwise
//!   SWIG does not generate a director for it.
//! - [`ModuleWriter::ignore_all`] must precede targeted
//!   [`ModuleWriter::unignore`] calls to get allow-list behaviour.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::directive::Directive;
use crate::error::{SwigGenError, SwigGenResult};
use crate::scope::ScopeKind;
use crate::suppression::SuppressionList;

/// Directive writer for one artifact
pub struct ModuleWriter<W: Write> {
    name: String,
    generator: String,
    target: PathBuf,
    out: W,
    module_declared: bool,
    suppression: SuppressionList,
}

impl ModuleWriter<BufWriter<File>> {
    /// Create (or truncate) the artifact file at `path`
    pub fn create(
        name: impl Into<String>,
        path: &Path,
        generator: impl Into<String>,
    ) -> SwigGenResult<Self> {
        let file = File::create(path).map_err(|e| SwigGenError::io(path, e))?;
        let name = name.into();
        debug!(module = %name, path = %path.display(), "Opened artifact");
        Ok(Self::new(name, path, generator, BufWriter::new(file)))
    }
}

impl<W: Write> ModuleWriter<W> {
    /// Wrap an arbitrary stream; `target` only labels I/O errors
    pub fn new(
        name: impl Into<String>,
        target: impl Into<PathBuf>,
        generator: impl Into<String>,
        out: W,
    ) -> Self {
        Self {
            name: name.into(),
            generator: generator.into(),
            target: target.into(),
            out,
            module_declared: false,
            suppression: SuppressionList::new(),
        }
    }

    /// Artifact name; doubles as the SWIG module name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Visibility rules recorded so far
    pub fn suppression(&self) -> &SuppressionList {
        &self.suppression
    }

    pub fn write_raw(&mut self, text: &str) -> SwigGenResult<()> {
        self.out
            .write_all(text.as_bytes())
            .map_err(|e| SwigGenError::io(&self.target, e))
    }

    /// Write one directive line, recording its effect on symbol visibility
    pub fn emit(&mut self, directive: Directive) -> SwigGenResult<()> {
        self.write_raw(&directive.to_string())?;
        self.suppression.record(&directive);
        Ok(())
    }

    pub fn emit_generated_file_notice(&mut self) -> SwigGenResult<()> {
        let notice = Directive::notice(self.generator.as_str());
        self.emit(notice)
    }

    /// Module header; `enable_polymorphism` turns on directors for the whole module
    ///
    /// # Errors
    ///
    /// `ModuleAlreadyDeclared` on a second call.
    pub fn declare_module(&mut self, enable_polymorphism: bool) -> SwigGenResult<()> {
        if self.module_declared {
            return Err(SwigGenError::ModuleAlreadyDeclared {
                module: self.name.clone(),
            });
        }
        let module = Directive::module(self.name.as_str(), enable_polymorphism);
        self.emit(module)?;
        self.module_declared = true;
        Ok(())
    }

    pub fn enable_polymorphic_dispatch(&mut self, symbol: &str) -> SwigGenResult<()> {
        self.emit(Directive::feature_director(symbol))
    }

    pub fn include(&mut self, path: &str) -> SwigGenResult<()> {
        self.emit(Directive::include(path))
    }

    pub fn import_artifact(&mut self, path: &str) -> SwigGenResult<()> {
        self.emit(Directive::import(path))
    }

    pub fn ignore(&mut self, identifier: &str) -> SwigGenResult<()> {
        self.emit(Directive::ignore(identifier))
    }

    pub fn ignore_all(&mut self) -> SwigGenResult<()> {
        self.emit(Directive::ignore_all())
    }

    pub fn unignore(&mut self, identifier: &str) -> SwigGenResult<()> {
        self.emit(Directive::unignore(identifier))
    }

    pub fn unignore_all(&mut self) -> SwigGenResult<()> {
        self.emit(Directive::unignore_all())
    }

    pub fn rename(&mut self, identifier: &str, new_name: &str) -> SwigGenResult<()> {
        self.emit(Directive::rename(identifier, new_name))
    }

    pub fn instantiate_template(&mut self, generic_spec: &str, concrete_name: &str) -> SwigGenResult<()> {
        self.emit(Directive::template(generic_spec, concrete_name))
    }

    pub fn native_include(&mut self, header: &str) -> SwigGenResult<()> {
        self.emit(Directive::native_include(header))
    }

    /// Run `body` inside a delimited region
    ///
    /// The end marker is written whether or not `body` succeeds. If the begin
    /// marker cannot be written, neither `body` nor the end marker runs. A
    /// body error takes precedence over a failure to write the end marker.
    pub fn scope<T, F>(&mut self, kind: ScopeKind, body: F) -> SwigGenResult<T>
    where
        F: FnOnce(&mut Self) -> SwigGenResult<T>,
    {
        self.write_raw(&kind.begin_marker())?;
        let result = body(self);
        let closed = self.write_raw(kind.end_marker());
        let value = result?;
        closed?;
        Ok(value)
    }

    /// Flush and release the stream
    pub fn close(mut self) -> SwigGenResult<W> {
        self.out
            .flush()
            .map_err(|e| SwigGenError::io(&self.target, e))?;
        info!(module = %self.name, path = %self.target.display(), "Wrote artifact");
        Ok(self.out)
    }
}
