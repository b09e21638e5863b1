// src/compiler/mod.rs
//! Minification through a remote compiler service.
//!
//! The pipeline depends on the `Minifier` capability only; the Closure
//! Compiler HTTP client is one implementation of it.

pub mod client;
pub mod request;

use crate::bundle::Bundle;
use crate::error::AppError;

pub use client::ClosureCompilerClient;
pub use request::{CompilationLevel, CompileOptions, CompileRequest, LanguageOut};

/// Opaque compiled output, written to disk byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompiledBundle(Vec<u8>);

impl CompiledBundle {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The ability to turn a bundle into minified code.
#[async_trait::async_trait]
pub trait Minifier: Send + Sync {
    async fn minify(&self, bundle: &Bundle) -> Result<CompiledBundle, AppError>;
}
