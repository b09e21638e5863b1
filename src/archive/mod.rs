// src/archive/mod.rs
//! Packaging release files into a zip archive.
//!
//! The pipeline only knows the `Archiver` capability. Two implementations
//! exist: an external 7-Zip compatible program, and a built-in writer that
//! needs nothing installed.

mod builtin;
mod external;

pub use builtin::ZipArchiver;
pub use external::ExternalArchiver;

use crate::error::AppError;
use std::path::{Path, PathBuf};

/// What an archiver produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveOutcome {
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// The ability to compress a set of files into one archive.
///
/// `archive` and `files` are relative to `root`. Implementations return
/// only once the archive is complete on disk.
#[async_trait::async_trait]
pub trait Archiver: Send + Sync {
    async fn compress(
        &self,
        root: &Path,
        archive: &Path,
        files: &[PathBuf],
    ) -> Result<ArchiveOutcome, AppError>;
}

/// Reads the size of a finished archive.
///
/// A missing file means the archiver claimed success without producing
/// anything.
pub fn measure_archive(path: &Path) -> Result<u64, AppError> {
    match std::fs::metadata(path) {
        Ok(meta) => Ok(meta.len()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(AppError::ArchiveMissing {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(AppError::Io(e)),
    }
}
