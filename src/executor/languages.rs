//! Supported languages and their execution runtimes.

use regex::Regex;

/// Runtime used to execute one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSpec {
    /// Language key as chosen by the learner.
    pub key: &'static str,

    /// Runtime name understood by the execution service.
    pub runtime: &'static str,

    /// Pinned runtime version.
    pub version: &'static str,

    /// Source file extension, without the dot.
    pub extension: &'static str,
}

const fn lang(
    key: &'static str,
    runtime: &'static str,
    version: &'static str,
    extension: &'static str,
) -> LanguageSpec {
    LanguageSpec {
        key,
        runtime,
        version,
        extension,
    }
}

/// Language table. Extend freely.
pub const LANGUAGES: &[LanguageSpec] = &[
    lang("javascript", "javascript", "18.15.0", "js"),
    lang("typescript", "typescript", "5.0.3", "ts"),
    lang("python", "python", "3.10.0", "py"),
    lang("java", "java", "15.0.2", "java"),
    lang("c", "c", "10.2.0", "c"),
    lang("cpp", "c++", "10.2.0", "cpp"),
    lang("csharp", "csharp", "6.12.0", "cs"),
    lang("go", "go", "1.16.2", "go"),
    lang("rust", "rust", "1.68.2", "rs"),
    lang("php", "php", "8.2.3", "php"),
    lang("ruby", "ruby", "3.0.1", "rb"),
    lang("kotlin", "kotlin", "1.8.20", "kt"),
    lang("swift", "swift", "5.3.3", "swift"),
    lang("bash", "bash", "5.2.0", "sh"),
];

/// Find the runtime for `language`, ignoring case.
#[must_use]
pub fn lookup(language: &str) -> Option<&'static LanguageSpec> {
    LANGUAGES
        .iter()
        .find(|spec| spec.key.eq_ignore_ascii_case(language))
}

/// Keys of every supported language.
pub fn supported_languages() -> impl Iterator<Item = &'static str> {
    LANGUAGES.iter().map(|spec| spec.key)
}

/// Name of the single source file submitted for `code`.
///
/// Java requires the file to be named after its public class.
#[must_use]
pub fn source_file_name(spec: &LanguageSpec, code: &str) -> String {
    if spec.key == "java" {
        if let Some(class) = java_public_class(code) {
            return format!("{class}.java");
        }
    }
    format!("main.{}", spec.extension)
}

/// Extract the name of the first `public class` declared in `code`.
fn java_public_class(code: &str) -> Option<String> {
    let re = Regex::new(r"public\s+class\s+(\w+)").ok()?;
    re.captures(code)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
