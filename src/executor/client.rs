//! Client for the remote code-execution service.

use crate::error::{Error, Result};
use crate::executor::languages::{lookup, source_file_name};
use crate::executor::transport::{HttpTransport, RawResponse, Transport};
use crate::executor::types::{ExecuteRequest, ExecuteResponse, Runtime, SourceFile};
use serde::de::DeserializeOwned;

/// Public execution service.
pub const DEFAULT_BASE_URL: &str = "https://emkc.org/api/v2/piston";

/// Compile budget granted by the service, in milliseconds.
pub const COMPILE_TIMEOUT_MS: u32 = 10_000;

/// Run budget granted by the service, in milliseconds.
pub const RUN_TIMEOUT_MS: u32 = 3_000;

/// Build the `/execute` request for `code` written in `language`.
///
/// # Errors
///
/// Returns [`Error::UnsupportedLanguage`] if `language` is not in the
/// language table.
pub fn build_request(code: &str, language: &str, stdin: Option<&str>) -> Result<ExecuteRequest> {
    let spec = lookup(language).ok_or_else(|| Error::UnsupportedLanguage(language.to_string()))?;

    Ok(ExecuteRequest {
        language: spec.runtime.to_string(),
        version: spec.version.to_string(),
        files: vec![SourceFile {
            name: source_file_name(spec, code),
            content: code.to_string(),
        }],
        stdin: stdin.filter(|s| !s.is_empty()).map(str::to_string),
        compile_timeout: COMPILE_TIMEOUT_MS,
        run_timeout: RUN_TIMEOUT_MS,
    })
}

/// Stateless adapter to the execution service.
///
/// Every call is a single request; nothing is retried or cached.
#[derive(Debug, Clone)]
pub struct ExecutionClient<T = HttpTransport> {
    base_url: String,
    transport: T,
}

impl ExecutionClient<HttpTransport> {
    /// Create a client talking HTTP to `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(base_url, HttpTransport::new())
    }
}

impl<T: Transport> ExecutionClient<T> {
    /// Create a client over a custom transport.
    #[must_use]
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
        }
    }

    /// Base URL of the service, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run `code` remotely and return the raw service response.
    ///
    /// Compile and runtime failures of the submitted program are part of
    /// a successful response; see
    /// [`format_execution_result`](super::format_execution_result).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedLanguage`] before any network I/O,
    /// [`Error::Http`] for a non-success status, [`Error::Network`] if
    /// the request fails, and [`Error::InvalidResponse`] if the body
    /// does not decode.
    pub async fn execute_code(
        &self,
        code: &str,
        language: &str,
        stdin: Option<&str>,
    ) -> Result<ExecuteResponse> {
        let request = build_request(code, language, stdin).inspect_err(|e| {
            tracing::warn!(language, error = %e, "refusing to submit code");
        })?;
        let url = format!("{}/execute", self.base_url);
        tracing::debug!(
            url = %url,
            runtime = %request.language,
            version = %request.version,
            file = %request.files[0].name,
            "submitting code"
        );

        let body = serde_json::to_value(&request)?;
        let response = self
            .transport
            .post_json(&url, &body)
            .await
            .inspect_err(|e| tracing::warn!(url = %url, error = %e, "execute request failed"))?;
        decode(response)
    }

    /// List the runtimes the service currently offers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`], [`Error::Network`] or
    /// [`Error::InvalidResponse`] as for [`Self::execute_code`].
    pub async fn list_runtimes(&self) -> Result<Vec<Runtime>> {
        let url = format!("{}/runtimes", self.base_url);
        tracing::debug!(url = %url, "listing runtimes");
        let response = self
            .transport
            .get(&url)
            .await
            .inspect_err(|e| tracing::warn!(url = %url, error = %e, "runtimes request failed"))?;
        decode(response)
    }
}

fn decode<R: DeserializeOwned>(response: RawResponse) -> Result<R> {
    if !response.is_success() {
        tracing::warn!(status = response.status, "execution service returned an error");
        return Err(Error::Http {
            status: response.status,
            body: response.body.unwrap_or_default(),
        });
    }

    let body = response
        .body
        .ok_or_else(|| Error::InvalidResponse("response body could not be read".to_string()))?;
    serde_json::from_str(&body).map_err(|e| Error::InvalidResponse(e.to_string()))
}
