// src/output/paths.rs
//! Where release outputs live, and the plans that clear and fill them.
//!
//! Pure functions only: plans are built here and executed by the writer.

use super::types::{DeliveryTarget, OutputPlan};
use crate::bundle::Bundle;
use crate::compiler::CompiledBundle;
use crate::constants::{
    COMPILED_BUNDLE_PATH, ORIGINAL_BUNDLE_PATH, RELEASE_ARCHIVE_PATH, RELEASE_FILES,
};
use std::path::{Path, PathBuf};

/// Paths of the generated release files, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseLayout {
    pub original_bundle: PathBuf,
    pub compiled_bundle: PathBuf,
    pub archive: PathBuf,
    /// Files packed into the archive
    pub release_files: Vec<PathBuf>,
}

impl Default for ReleaseLayout {
    fn default() -> Self {
        Self {
            original_bundle: PathBuf::from(ORIGINAL_BUNDLE_PATH),
            compiled_bundle: PathBuf::from(COMPILED_BUNDLE_PATH),
            archive: PathBuf::from(RELEASE_ARCHIVE_PATH),
            release_files: RELEASE_FILES.iter().map(PathBuf::from).collect(),
        }
    }
}

impl ReleaseLayout {
    /// The three files every build regenerates.
    pub fn generated_files(&self) -> [&Path; 3] {
        [
            self.original_bundle.as_path(),
            self.compiled_bundle.as_path(),
            self.archive.as_path(),
        ]
    }

    /// Removes every generated file under `root`.
    pub fn cleanup_plan(&self, root: &Path) -> OutputPlan {
        self.generated_files()
            .into_iter()
            .fold(OutputPlan::new(), |plan, path| {
                plan.with_operation(DeliveryTarget::RemoveFile {
                    path: root.join(path),
                })
            })
    }

    /// Writes the original bundle as text and the compiled bundle as bytes.
    pub fn write_plan(
        &self,
        root: &Path,
        bundle: &Bundle,
        compiled: &CompiledBundle,
    ) -> OutputPlan {
        OutputPlan::new()
            .with_operation(DeliveryTarget::WriteText {
                path: root.join(&self.original_bundle),
                content: bundle.as_str().to_string(),
            })
            .with_operation(DeliveryTarget::WriteBytes {
                path: root.join(&self.compiled_bundle),
                content: compiled.as_bytes().to_vec(),
            })
    }
}

/// The line printed once the archive is ready.
pub fn final_size_line(size_bytes: u64) -> String {
    format!("Final size: {} bytes", size_bytes)
}
