//! `backpract template` and `backpract languages` commands.

use crate::executor::{LANGUAGES, template_code};

/// Run the template command.
pub fn run(language: &str, kind: &str) {
    print!("{}", template_code(language, kind));
}

/// Run the languages command.
pub fn languages() {
    println!("{:<12} {:<12} {:<10} File", "Key", "Runtime", "Version");
    println!("{}", "─".repeat(48));
    for spec in LANGUAGES {
        println!(
            "{:<12} {:<12} {:<10} main.{}",
            spec.key, spec.runtime, spec.version, spec.extension
        );
    }
}
