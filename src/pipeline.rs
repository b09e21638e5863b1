// src/pipeline.rs
//! The release pipeline: guard → cleanup → bundle → compile → write → archive → report.
//!
//! Each step is a method on `ReleasePipeline` so it can be driven and
//! tested on its own. The network and archive steps go through the
//! `Minifier` and `Archiver` capabilities, which callers inject.

use crate::archive::{
    measure_archive, ArchiveOutcome, Archiver, ExternalArchiver, ZipArchiver,
};
use crate::bundle::{assemble_bundle, Bundle};
use crate::compiler::{ClosureCompilerClient, CompiledBundle, Minifier};
use crate::config::ReleaseConfig;
use crate::error::AppError;
use crate::output::{deliver_all, final_size_line, DeliveryTarget, OutputPlan, OutputReport};
use crate::version;
use std::sync::Arc;

/// Summary of a finished release build.
#[derive(Debug, Clone)]
pub struct ReleaseSummary {
    pub bundle_bytes: usize,
    pub compiled_bytes: usize,
    pub archive_bytes: u64,
}

/// Orchestrates one release build over injected collaborators.
pub struct ReleasePipeline<'a> {
    config: &'a ReleaseConfig,
    minifier: Arc<dyn Minifier>,
    archiver: Arc<dyn Archiver>,
}

impl<'a> ReleasePipeline<'a> {
    pub fn new(
        config: &'a ReleaseConfig,
        minifier: Arc<dyn Minifier>,
        archiver: Arc<dyn Archiver>,
    ) -> Self {
        Self {
            config,
            minifier,
            archiver,
        }
    }

    /// Builds a pipeline backed by the Closure Compiler service and the
    /// archiver the configuration names.
    pub fn from_config(config: &'a ReleaseConfig) -> Result<Self, AppError> {
        let minifier = ClosureCompilerClient::new(
            config.endpoint.clone(),
            config.compile_options.clone(),
            config.timeout,
        )?;
        let archiver: Arc<dyn Archiver> = match &config.archiver {
            Some(program) => {
                log::info!("Using external archiver {}", program.display());
                Arc::new(ExternalArchiver::new(program.clone()))
            }
            None => Arc::new(ZipArchiver::new()),
        };
        Ok(Self::new(config, Arc::new(minifier), archiver))
    }

    /// Runs every step in order, stopping at the first failure.
    pub async fn run(&self) -> Result<ReleaseSummary, AppError> {
        self.guard()?;
        self.cleanup()?;
        let bundle = self.bundle()?;
        let compiled = self.compile(&bundle).await?;
        self.write(&bundle, &compiled)?;
        let archive = self.archive().await?;
        let archive_bytes = self.report(&archive)?;

        Ok(ReleaseSummary {
            bundle_bytes: bundle.len(),
            compiled_bytes: compiled.len(),
            archive_bytes,
        })
    }

    /// Refuses to run outside the supported version window.
    pub fn guard(&self) -> Result<(), AppError> {
        version::ensure_supported()
    }

    /// Removes the outputs of any previous build.
    pub fn cleanup(&self) -> Result<OutputReport, AppError> {
        let report = deliver_all(self.config.layout.cleanup_plan(&self.config.root))?;
        log::info!("Cleanup removed {} stale outputs", report.stats.files_removed);
        Ok(report)
    }

    pub fn bundle(&self) -> Result<Bundle, AppError> {
        assemble_bundle(&self.config.root, &self.config.sources)
    }

    pub async fn compile(&self, bundle: &Bundle) -> Result<CompiledBundle, AppError> {
        self.minifier.minify(bundle).await
    }

    /// Writes the original and compiled bundles.
    pub fn write(
        &self,
        bundle: &Bundle,
        compiled: &CompiledBundle,
    ) -> Result<OutputReport, AppError> {
        deliver_all(
            self.config
                .layout
                .write_plan(&self.config.root, bundle, compiled),
        )
    }

    /// Packs the release files and waits for the archive to be complete.
    pub async fn archive(&self) -> Result<ArchiveOutcome, AppError> {
        let layout = &self.config.layout;
        let outcome = self
            .archiver
            .compress(&self.config.root, &layout.archive, &layout.release_files)
            .await?;
        log::info!(
            "Archive {} is {} bytes",
            outcome.path.display(),
            outcome.size_bytes
        );
        Ok(outcome)
    }

    /// Stats the finished archive and prints `Final size: <n> bytes`.
    pub fn report(&self, archive: &ArchiveOutcome) -> Result<u64, AppError> {
        let size_bytes = measure_archive(&archive.path)?;
        deliver_all(OutputPlan::new().with_operation(DeliveryTarget::PrintLine {
            content: final_size_line(size_bytes),
        }))?;
        Ok(size_bytes)
    }
}
