//! Wire types of the execution service.

use serde::{Deserialize, Serialize};

/// Request body for `POST /execute`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExecuteRequest {
    /// Runtime name.
    pub language: String,

    /// Runtime version.
    pub version: String,

    /// Source files; always exactly one.
    pub files: Vec<SourceFile>,

    /// Standard input, omitted when empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdin: Option<String>,

    /// Compile budget in milliseconds.
    pub compile_timeout: u32,

    /// Run budget in milliseconds.
    pub run_timeout: u32,
}

/// One submitted source file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceFile {
    /// File name, e.g. `main.py`.
    pub name: String,

    /// File contents.
    pub content: String,
}

/// Output of one phase (compile or run).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StageResult {
    /// Captured standard output.
    #[serde(default)]
    pub stdout: String,

    /// Captured standard error.
    #[serde(default)]
    pub stderr: String,

    /// Exit code; null when the process was killed by a signal.
    #[serde(default)]
    pub code: Option<i32>,

    /// Signal that terminated the process, if any.
    #[serde(default)]
    pub signal: Option<String>,

    /// Interleaved stdout and stderr.
    #[serde(default)]
    pub output: String,
}

impl StageResult {
    /// Exit code of the phase. A signal kill without a code counts as 1.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match (self.code, &self.signal) {
            (Some(code), _) => code,
            (None, Some(_)) => 1,
            (None, None) => 0,
        }
    }
}

/// Response body of a successful `POST /execute`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ExecuteResponse {
    /// Run phase.
    pub run: StageResult,

    /// Compile phase, only for compiled languages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compile: Option<StageResult>,

    /// Runtime that executed the code.
    #[serde(default)]
    pub language: String,

    /// Version of that runtime.
    #[serde(default)]
    pub version: String,
}

/// Entry of `GET /runtimes`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Runtime {
    /// Runtime name.
    pub language: String,

    /// Installed version.
    pub version: String,

    /// Alternative names accepted by the service.
    #[serde(default)]
    pub aliases: Vec<String>,

    /// Underlying runtime (e.g. `node` for javascript).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
}
