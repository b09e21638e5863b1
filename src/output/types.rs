// src/output/types.rs
//! Type definitions for output operations.
//!
//! This module defines immutable types for planning and executing
//! filesystem operations on the release directory.

use std::path::PathBuf;

/// Represents a complete output plan.
#[derive(Debug, Clone, Default)]
pub struct OutputPlan {
    /// List of operations to perform, in order
    pub operations: Vec<DeliveryTarget>,
}

impl OutputPlan {
    /// Creates a new empty output plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an operation to the plan.
    pub fn with_operation(mut self, operation: DeliveryTarget) -> Self {
        self.operations.push(operation);
        self
    }
}

/// Represents a single output operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryTarget {
    /// Delete a file if it exists
    RemoveFile { path: PathBuf },
    /// Write text to a file, replacing it
    WriteText { path: PathBuf, content: String },
    /// Write raw bytes to a file, replacing it
    WriteBytes { path: PathBuf, content: Vec<u8> },
    /// Print a line to stdout
    PrintLine { content: String },
}

impl DeliveryTarget {
    /// The file this operation touches, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::RemoveFile { path }
            | Self::WriteText { path, .. }
            | Self::WriteBytes { path, .. } => Some(path),
            Self::PrintLine { .. } => None,
        }
    }
}

/// Result of executing an output plan.
#[derive(Debug, Clone, Default)]
pub struct OutputReport {
    /// Error messages of the operations that failed
    pub failures: Vec<String>,
    /// Execution statistics
    pub stats: ExecutionStats,
}

impl OutputReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed operation.
    pub fn with_completed(mut self, bytes_written: usize, removed: bool) -> Self {
        self.stats.operations_completed += 1;
        self.stats.bytes_written += bytes_written;
        if removed {
            self.stats.files_removed += 1;
        }
        self
    }

    /// Records a failed operation.
    pub fn with_failed(mut self, error: String) -> Self {
        self.stats.operations_failed += 1;
        self.failures.push(error);
        self
    }

    /// Checks if all operations succeeded.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Execution statistics.
#[derive(Debug, Clone, Default)]
pub struct ExecutionStats {
    pub operations_completed: usize,
    pub operations_failed: usize,
    pub bytes_written: usize,
    /// Files that existed and were deleted
    pub files_removed: usize,
    pub total_duration_ms: u64,
}
