//! `backpract runtimes` command implementation.

use crate::error::Result;
use crate::executor::{ExecutionClient, Runtime, Transport};

/// Run the runtimes command.
///
/// Lists what the execution service offers right now.
///
/// # Errors
///
/// Returns an error if the execution service cannot be queried.
pub async fn run<T: Transport>(client: &ExecutionClient<T>) -> Result<()> {
    let runtimes = client.list_runtimes().await?;

    if runtimes.is_empty() {
        println!("No runtimes available at {}.", client.base_url());
        return Ok(());
    }

    println!("{:<16} {:<12} Aliases", "Language", "Version");
    println!("{}", "─".repeat(60));
    for runtime in &runtimes {
        println!("{}", format_runtime(runtime));
    }

    Ok(())
}

fn format_runtime(runtime: &Runtime) -> String {
    let name = match &runtime.runtime {
        Some(inner) => format!("{} ({inner})", runtime.language),
        None => runtime.language.clone(),
    };
    format!(
        "{:<16} {:<12} {}",
        name,
        runtime.version,
        runtime.aliases.join(", ")
    )
}
