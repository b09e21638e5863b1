// src/error.rs
//! Application error types with structured error handling.
//!
//! Each variant names one way a release build can fail and carries enough
//! context to tell the user which step broke and on which file, service or
//! program.

use std::path::PathBuf;
use thiserror::Error;

use crate::constants::ERROR_BODY_PREVIEW_LENGTH;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unsupported version: requires {tool} >={min},<{max} (running {running})")]
    UnsupportedVersion {
        tool: String,
        min: String,
        max: String,
        running: String,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Cannot read source file {}: {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Compiler service returned HTTP {status}: {body_preview}")]
    CompilerService {
        status: reqwest::StatusCode,
        body_preview: String,
    },

    #[error("Compiler service returned no code for a {bundle_len}-byte bundle")]
    EmptyCompilation { bundle_len: usize },

    #[error("Failed to launch archiver {}: {source}", .program.display())]
    ArchiverLaunch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Archiver {} exited with {status}", .program.display())]
    ArchiverFailed {
        program: PathBuf,
        status: std::process::ExitStatus,
    },

    #[error("Archive was not produced at {}", .path.display())]
    ArchiveMissing { path: PathBuf },

    #[error("Zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Output delivery failed: {}", .failures.join(", "))]
    DeliveryFailed { failures: Vec<String> },

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError {
            message: "Background task failed".to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl AppError {
    /// Builds a `CompilerService` error, truncating the body to a short preview.
    pub fn compiler_service(status: reqwest::StatusCode, body: &str) -> Self {
        let body_preview: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        AppError::CompilerService {
            status,
            body_preview: body_preview.trim().to_string(),
        }
    }
}
