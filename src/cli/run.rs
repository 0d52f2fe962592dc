//! `backpract run` command implementation.

use crate::error::Result;
use crate::executor::{ExecutionClient, FormattedResult, Transport, format_execution_result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Run the run command.
///
/// Reads the source from `source` (`-` for stdin), executes it remotely
/// and prints the result. Returns the program's exit code.
///
/// # Errors
///
/// Returns an error if the source cannot be read, the language is not
/// supported, or the execution service cannot be reached.
pub async fn run<T: Transport>(
    client: &ExecutionClient<T>,
    source: &Path,
    language: &str,
    stdin: Option<&str>,
) -> Result<i32> {
    let code = read_source(source)?;
    let response = client.execute_code(&code, language, stdin).await?;
    let result = format_execution_result(&response);
    print_result(&result);
    Ok(result.exit_code)
}

/// Map a program exit code onto a process exit status.
///
/// Codes outside `0..=255` (negative or too large) become 1.
#[must_use]
pub fn exit_status(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}

fn read_source(source: &Path) -> Result<String> {
    if source == Path::new("-") {
        let mut code = String::new();
        io::stdin().read_to_string(&mut code)?;
        Ok(code)
    } else {
        Ok(fs::read_to_string(source)?)
    }
}

fn print_result(result: &FormattedResult) {
    if !result.output.is_empty() {
        print!("{}", result.output);
        if !result.output.ends_with('\n') {
            println!();
        }
    }
    if let Some(error) = &result.error {
        eprintln!("{error}");
    }
}
