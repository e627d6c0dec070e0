// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Filesystem layout of a GeNN source tree
//!
//! Input headers live under `<root>/<include_dir>` and every generated file
//! lands in `<root>/<swig_dir>`. The same directory names are used in the
//! relative paths written into interfaces (`"include/newNeuronModels.h"`),
//! since SWIG is invoked from the root.

use std::path::{Path, PathBuf};

use pygenn_config::LayoutConfig;

use crate::family::FamilyKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
    include_dir: String,
    swig_dir: String,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>, config: &LayoutConfig) -> Self {
        Self {
            root: root.into(),
            include_dir: config.include_dir.clone(),
            swig_dir: config.swig_dir.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn include_dir(&self) -> PathBuf {
        self.root.join(&self.include_dir)
    }

    pub fn swig_dir(&self) -> PathBuf {
        self.root.join(&self.swig_dir)
    }

    /// Header path relative to the root, as reported to users
    pub fn relative_header(&self, family: FamilyKind) -> PathBuf {
        Path::new(&self.include_dir).join(family.header_file())
    }

    pub fn header_path(&self, family: FamilyKind) -> PathBuf {
        self.root.join(self.relative_header(family))
    }

    /// Path of a generated file
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.swig_dir().join(file_name)
    }

    pub fn interface_path(&self, family: FamilyKind) -> PathBuf {
        self.output_path(&family.interface_file())
    }

    /// `"include/<file>"` as referenced from interfaces
    pub fn include_reference(&self, file_name: &str) -> String {
        format!("\"{}/{}\"", self.include_dir, file_name)
    }

    /// `"swig/<file>"` as referenced from the main interface
    pub fn swig_reference(&self, file_name: &str) -> String {
        format!("\"{}/{}\"", self.swig_dir, file_name)
    }

    /// Same file addressed from inside the swig directory (`"../swig/<file>"`)
    pub fn sibling_reference(&self, file_name: &str) -> String {
        format!("\"../{}/{}\"", self.swig_dir, file_name)
    }

    /// Family headers that do not exist, relative to the root, in family order
    pub fn missing_headers(&self) -> Vec<PathBuf> {
        FamilyKind::ALL
            .into_iter()
            .filter(|family| !self.header_path(*family).is_file())
            .map(|family| self.relative_header(family))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_follow_config() {
        let layout = Layout::new(
            "/opt/genn",
            &LayoutConfig {
                include_dir: "inc".to_string(),
                swig_dir: "gen".to_string(),
            },
        );
        assert_eq!(
            layout.header_path(FamilyKind::Neuron),
            PathBuf::from("/opt/genn/inc/newNeuronModels.h")
        );
        assert_eq!(
            layout.interface_path(FamilyKind::InitVarSnippet),
            PathBuf::from("/opt/genn/gen/InitVarSnippet.i")
        );
        assert_eq!(layout.include_reference("modelSpec.h"), "\"inc/modelSpec.h\"");
        assert_eq!(layout.swig_reference("StlContainers.i"), "\"gen/StlContainers.i\"");
        assert_eq!(
            layout.sibling_reference("customParamValues.h"),
            "\"../gen/customParamValues.h\""
        );
    }

    #[test]
    fn test_missing_headers_reports_every_absent_family() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::new(dir.path(), &LayoutConfig::default());
        std::fs::create_dir_all(layout.include_dir()).unwrap();
        std::fs::write(layout.header_path(FamilyKind::Neuron), "").unwrap();
        std::fs::write(layout.header_path(FamilyKind::CurrentSource), "").unwrap();

        assert_eq!(
            layout.missing_headers(),
            vec![
                PathBuf::from("include/newPostsynapticModels.h"),
                PathBuf::from("include/newWeightUpdateModels.h"),
                PathBuf::from("include/initVarSnippet.h"),
            ]
        );
    }
}
