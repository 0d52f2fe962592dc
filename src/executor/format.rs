//! Normalization of execution responses for display.

use crate::executor::types::ExecuteResponse;
use serde::Serialize;

/// What the learner sees after running code.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormattedResult {
    /// Program output.
    pub output: String,

    /// Compile or runtime error text, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Exit code of the failing phase, or of the run.
    pub exit_code: i32,
}

/// Collapse a response into output, error and exit code.
///
/// A failed compile masks the run phase entirely. A failed run keeps its
/// output and adds the runtime error, provided stderr has something to say.
#[must_use]
pub fn format_execution_result(response: &ExecuteResponse) -> FormattedResult {
    if let Some(compile) = &response.compile {
        let exit_code = compile.exit_code();
        if exit_code != 0 {
            let detail = if compile.stderr.is_empty() {
                &compile.output
            } else {
                &compile.stderr
            };
            return FormattedResult {
                output: compile.stdout.clone(),
                error: Some(format!("Compilation Error:\n{detail}")),
                exit_code,
            };
        }
    }

    let run = &response.run;
    let exit_code = run.exit_code();
    let output = if run.stdout.is_empty() {
        run.output.clone()
    } else {
        run.stdout.clone()
    };
    let error = (exit_code != 0 && !run.stderr.is_empty())
        .then(|| format!("Runtime Error (Exit Code {exit_code}):\n{}", run.stderr));

    FormattedResult {
        output,
        error,
        exit_code,
    }
}
