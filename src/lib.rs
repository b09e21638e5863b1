// src/lib.rs
//! jsrelease library — bundles browser scripts, minifies them through the
//! Closure Compiler service, and packages the release archive.
//!
//! # Public API
//!
//! - **Pipeline** — `ReleasePipeline`, `ReleaseSummary`
//! - **Configuration** — `CommandLineInput`, `ReleaseConfig`
//! - **Bundling** — `SourceList`, `Bundle`, `assemble_bundle`, `strip_directive`
//! - **Compiler** — `Minifier`, `ClosureCompilerClient`, `CompileRequest`
//! - **Archiving** — `Archiver`, `ZipArchiver`, `ExternalArchiver`
//! - **Output** — `ReleaseLayout`, `OutputPlan`, `deliver`

pub mod archive;
pub mod bundle;
pub mod compiler;
pub mod config;
pub mod constants;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod version;

// --- Error Handling ---
pub use crate::error::AppError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, ReleaseConfig};

// --- Pipeline ---
pub use crate::pipeline::{ReleasePipeline, ReleaseSummary};

// --- Steps ---
pub use crate::archive::{
    measure_archive, ArchiveOutcome, Archiver, ExternalArchiver, ZipArchiver,
};
pub use crate::bundle::{assemble_bundle, strip_directive, Bundle, SourceList};
pub use crate::compiler::{
    ClosureCompilerClient, CompilationLevel, CompileOptions, CompileRequest, CompiledBundle,
    LanguageOut, Minifier,
};
pub use crate::output::{
    deliver, deliver_all, DeliveryTarget, OutputPlan, OutputReport, ReleaseLayout,
};
pub use crate::version::{SupportedRange, ToolVersion};
