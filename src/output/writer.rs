// src/output/writer.rs
//! Executes output operations by performing actual I/O.
//!
//! This module is the only place where release outputs are written or
//! removed, keeping the rest of the codebase pure and testable.

use super::types::*;
use crate::error::AppError;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

/// Outcome of one operation: bytes written and whether a file was removed.
type Applied = (usize, bool);

/// Delivers the output plan, performing all I/O operations.
///
/// Every operation is attempted; failures are collected in the report.
pub fn deliver(plan: OutputPlan) -> Result<OutputReport, AppError> {
    let mut report = OutputReport::new();
    let start_time = Instant::now();

    log::debug!(
        "Executing output plan with {} operations",
        plan.operations.len()
    );

    for operation in &plan.operations {
        match execute_operation(operation) {
            Ok((bytes_written, removed)) => {
                report = report.with_completed(bytes_written, removed);
            }
            Err(e) => {
                log::error!("Operation failed: {}", e);
                report = report.with_failed(e.to_string());
            }
        }
    }

    report.stats.total_duration_ms = start_time.elapsed().as_millis() as u64;

    log::debug!(
        "Output plan execution complete: {} succeeded, {} failed in {}ms",
        report.stats.operations_completed,
        report.stats.operations_failed,
        report.stats.total_duration_ms
    );

    Ok(report)
}

/// Delivers the plan and turns any failed operation into an error.
pub fn deliver_all(plan: OutputPlan) -> Result<OutputReport, AppError> {
    let report = deliver(plan)?;
    if !report.is_success() {
        return Err(AppError::DeliveryFailed {
            failures: report.failures,
        });
    }
    Ok(report)
}

/// Executes a single output operation.
fn execute_operation(operation: &DeliveryTarget) -> Result<Applied, AppError> {
    match operation {
        DeliveryTarget::RemoveFile { path } => Ok((0, remove_file(path)?)),
        DeliveryTarget::WriteText { path, content } => {
            Ok((write_file(path, content.as_bytes())?, false))
        }
        DeliveryTarget::WriteBytes { path, content } => Ok((write_file(path, content)?, false)),
        DeliveryTarget::PrintLine { content } => {
            print_line(content)?;
            Ok((content.len(), false))
        }
    }
}

/// Removes a file, treating an absent file as already removed.
fn remove_file(path: &Path) -> Result<bool, AppError> {
    match fs::remove_file(path) {
        Ok(()) => {
            log::info!("Removed {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("Nothing to remove at {}", path.display());
            Ok(false)
        }
        Err(e) => Err(AppError::Io(std::io::Error::new(
            e.kind(),
            format!("Cannot remove {}: {}", path.display(), e),
        ))),
    }
}

/// Writes content to a file.
fn write_file(path: &Path, content: &[u8]) -> Result<usize, AppError> {
    log::debug!("Writing {} bytes to {}", content.len(), path.display());

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, content)?;

    log::info!("Wrote file: {}", path.display());
    Ok(content.len())
}

/// Prints a line to stdout.
fn print_line(content: &str) -> Result<(), AppError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", content)?;
    stdout.flush()?;
    Ok(())
}
