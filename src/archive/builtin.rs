// src/archive/builtin.rs
//! Built-in zip writer, used when no external archiver is configured.

use super::{measure_archive, ArchiveOutcome, Archiver};
use crate::error::AppError;
use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
pub struct ZipArchiver;

impl ZipArchiver {
    pub fn new() -> Self {
        Self
    }

    /// Name of a release file inside the archive: relative, `/`-separated,
    /// without any leading `./`.
    pub fn entry_name(file: &Path) -> String {
        file.components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Writes the archive, removing any partial file if a step fails.
    fn write_archive(root: &Path, archive: &Path, files: &[PathBuf]) -> Result<u64, AppError> {
        // Every release file must be readable before the archive is created.
        let sources = files
            .iter()
            .map(|file| {
                fs::File::open(root.join(file))
                    .map(|handle| (Self::entry_name(file), handle))
                    .map_err(|source| AppError::SourceUnreadable {
                        path: file.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let archive_path = root.join(archive);
        if let Some(parent) = archive_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let written = Self::write_entries(&archive_path, sources);
        if written.is_err() {
            if let Err(e) = fs::remove_file(&archive_path) {
                log::warn!("Could not remove partial archive {}: {}", archive_path.display(), e);
            }
        }
        written?;
        measure_archive(&archive_path)
    }

    fn write_entries(
        archive_path: &Path,
        sources: Vec<(String, fs::File)>,
    ) -> Result<(), AppError> {
        let out = fs::File::create(archive_path)?;
        let mut zip = zip::ZipWriter::new(out);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .unix_permissions(0o644);

        for (name, mut source) in sources {
            log::debug!("Adding {} to archive", name);
            zip.start_file(name, options)?;
            io::copy(&mut source, &mut zip)?;
        }

        zip.finish()?.flush()?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl Archiver for ZipArchiver {
    async fn compress(
        &self,
        root: &Path,
        archive: &Path,
        files: &[PathBuf],
    ) -> Result<ArchiveOutcome, AppError> {
        log::info!(
            "Writing {} files to {}",
            files.len(),
            archive.display()
        );
        let (root_owned, archive_owned, files_owned) =
            (root.to_path_buf(), archive.to_path_buf(), files.to_vec());
        let size_bytes = tokio::task::spawn_blocking(move || {
            Self::write_archive(&root_owned, &archive_owned, &files_owned)
        })
        .await??;

        Ok(ArchiveOutcome {
            path: root.join(archive),
            size_bytes,
        })
    }
}
