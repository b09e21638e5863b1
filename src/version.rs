// src/version.rs
//! Version guard run before any release step touches the filesystem.
//!
//! The guarded version is the Rust toolchain this binary was built with,
//! recorded by `build.rs`.

use crate::constants::{GUARDED_TOOL, MIN_SUPPORTED_VERSION, VERSION_LESS_THAN};
use crate::error::AppError;
use std::fmt;

/// A `major.minor` version; patch and pre-release suffixes are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ToolVersion {
    pub major: u32,
    pub minor: u32,
}

impl ToolVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parses `major.minor[.patch][-pre]`.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let core = input.split(['-', '+']).next().unwrap_or_default();
        let mut parts = core.split('.');

        let mut component = |name: &str| -> Result<u32, AppError> {
            parts
                .next()
                .filter(|s| !s.is_empty())
                .ok_or_else(|| {
                    AppError::Validation(format!("Version '{}' is missing its {}", input, name))
                })?
                .parse::<u32>()
                .map_err(|e| {
                    AppError::Validation(format!("Version '{}' has a bad {}: {}", input, name, e))
                })
        };

        let major = component("major")?;
        let minor = component("minor")?;
        Ok(Self::new(major, minor))
    }

    /// The toolchain version this binary was compiled with.
    pub fn current() -> Result<Self, AppError> {
        Self::parse(env!("JSRELEASE_RUSTC_VERSION"))
    }
}

impl From<(u32, u32)> for ToolVersion {
    fn from((major, minor): (u32, u32)) -> Self {
        Self::new(major, minor)
    }
}

impl fmt::Display for ToolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Half-open range `[min, less_than)` of supported versions.
#[derive(Debug, Clone, Copy)]
pub struct SupportedRange {
    pub tool: &'static str,
    pub min: ToolVersion,
    pub less_than: ToolVersion,
}

impl Default for SupportedRange {
    fn default() -> Self {
        Self {
            tool: GUARDED_TOOL,
            min: MIN_SUPPORTED_VERSION.into(),
            less_than: VERSION_LESS_THAN.into(),
        }
    }
}

impl SupportedRange {
    pub fn contains(&self, version: ToolVersion) -> bool {
        version >= self.min && version < self.less_than
    }

    /// Fails with `UnsupportedVersion` when `running` falls outside the range.
    pub fn ensure(&self, running: ToolVersion) -> Result<(), AppError> {
        if self.contains(running) {
            log::debug!(
                "{} {} is within [{}, {})",
                self.tool,
                running,
                self.min,
                self.less_than
            );
            return Ok(());
        }
        Err(AppError::UnsupportedVersion {
            tool: self.tool.to_string(),
            min: self.min.to_string(),
            max: self.less_than.to_string(),
            running: running.to_string(),
        })
    }
}

/// Checks the recorded toolchain against the default supported range.
pub fn ensure_supported() -> Result<(), AppError> {
    SupportedRange::default().ensure(ToolVersion::current()?)
}
