// src/archive/external.rs
//! Archiving through an external 7-Zip compatible executable.

use super::{measure_archive, ArchiveOutcome, Archiver};
use crate::error::AppError;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Runs `<program> a -r <archive> <files...>` and waits for it to exit.
#[derive(Debug, Clone)]
pub struct ExternalArchiver {
    program: PathBuf,
}

impl ExternalArchiver {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments in 7-Zip's add/recursive form.
    pub fn arguments(archive: &Path, files: &[PathBuf]) -> Vec<std::ffi::OsString> {
        let mut args: Vec<std::ffi::OsString> = vec!["a".into(), "-r".into(), archive.into()];
        args.extend(files.iter().map(|f| f.as_os_str().to_owned()));
        args
    }
}

#[async_trait::async_trait]
impl Archiver for ExternalArchiver {
    async fn compress(
        &self,
        root: &Path,
        archive: &Path,
        files: &[PathBuf],
    ) -> Result<ArchiveOutcome, AppError> {
        let args = Self::arguments(archive, files);
        log::info!(
            "Running {} {}",
            self.program.display(),
            args.iter()
                .map(|a| a.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let status = Command::new(&self.program)
            .args(&args)
            .current_dir(root)
            .kill_on_drop(true)
            .status()
            .await
            .map_err(|source| AppError::ArchiverLaunch {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            log::error!("Archiver exited with {}", status);
            return Err(AppError::ArchiverFailed {
                program: self.program.clone(),
                status,
            });
        }

        let path = root.join(archive);
        let size_bytes = measure_archive(&path)?;
        Ok(ArchiveOutcome { path, size_bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_arguments_follow_7z_shape() {
        let args = ExternalArchiver::arguments(
            Path::new("release/retrohaunt.zip"),
            &[
                PathBuf::from("./release/bundle.js"),
                PathBuf::from("./release/index.html"),
            ],
        );
        let args: Vec<String> = args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            args,
            vec![
                "a",
                "-r",
                "release/retrohaunt.zip",
                "./release/bundle.js",
                "./release/index.html"
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_program_is_a_launch_error() {
        let dir = tempfile::tempdir().unwrap();
        let archiver = ExternalArchiver::new(dir.path().join("no-such-7z"));
        let err = archiver
            .compress(dir.path(), Path::new("out.zip"), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ArchiverLaunch { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_nonzero_exit_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let archiver = ExternalArchiver::new("false");
        let err = archiver
            .compress(dir.path(), Path::new("out.zip"), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ArchiverFailed { .. }));
    }
}
