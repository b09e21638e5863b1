// src/compiler/client.rs
//! HTTP client for the Closure Compiler web service.
//!
//! A thin wrapper around reqwest: it posts the form-encoded request and
//! hands back the body bytes, after checking the service actually
//! produced code.

use super::request::{CompileOptions, CompileRequest};
use super::{CompiledBundle, Minifier};
use crate::bundle::Bundle;
use crate::error::AppError;
use reqwest::{header, Client};
use std::time::Duration;
use url::Url;

/// Minifies bundles by posting them to a Closure Compiler endpoint.
#[derive(Clone)]
pub struct ClosureCompilerClient {
    client: Client,
    endpoint: Url,
    options: CompileOptions,
}

impl ClosureCompilerClient {
    /// Creates a client. `timeout` of `None` waits as long as the service takes.
    pub fn new(
        endpoint: Url,
        options: CompileOptions,
        timeout: Option<Duration>,
    ) -> Result<Self, AppError> {
        let mut builder = Client::builder().default_headers(Self::create_headers());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint,
            options,
        })
    }

    fn create_headers() -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        headers
    }

    /// Posts the form body and returns the raw response.
    async fn post_form(&self, body: String) -> Result<reqwest::Response, AppError> {
        log::debug!("POST {} ({} bytes)", self.endpoint, body.len());
        let response = self
            .client
            .post(self.endpoint.clone())
            .body(body)
            .send()
            .await?;
        log::info!(
            "Compiler service responded with status {}",
            response.status()
        );
        Ok(response)
    }
}

#[async_trait::async_trait]
impl Minifier for ClosureCompilerClient {
    async fn minify(&self, bundle: &Bundle) -> Result<CompiledBundle, AppError> {
        let request = CompileRequest::new(bundle, &self.options);
        log::info!(
            "Compiling {} bytes with {} targeting {}",
            bundle.len(),
            self.options.compilation_level,
            self.options.language_out.as_str()
        );

        let response = self.post_form(request.to_form_body()).await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body);
            log::error!("Compiler service rejected the bundle: {}", status);
            return Err(AppError::compiler_service(status, &text));
        }

        let compiled = CompiledBundle::new(body.to_vec());
        if compiled.is_empty() && !bundle.as_str().trim().is_empty() {
            return Err(AppError::EmptyCompilation {
                bundle_len: bundle.len(),
            });
        }

        log::info!(
            "Compiled bundle is {} bytes ({} bytes before)",
            compiled.len(),
            bundle.len()
        );
        Ok(compiled)
    }
}
