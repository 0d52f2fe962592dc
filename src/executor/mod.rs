//! Remote code execution.

pub mod client;
pub mod format;
pub mod languages;
pub mod templates;
pub mod transport;
pub mod types;

pub use client::{
    COMPILE_TIMEOUT_MS, DEFAULT_BASE_URL, ExecutionClient, RUN_TIMEOUT_MS, build_request,
};
pub use format::{FormattedResult, format_execution_result};
pub use languages::{LANGUAGES, LanguageSpec, lookup, supported_languages};
pub use templates::{HELLO, template_code};
pub use transport::{HttpTransport, RawResponse, Transport};
pub use types::{ExecuteRequest, ExecuteResponse, Runtime, SourceFile, StageResult};
