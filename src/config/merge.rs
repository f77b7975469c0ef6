//! Configuration merging logic
//!
//! Priority: CLI args > eclint.toml > defaults

use std::path::PathBuf;

use crate::report::Formatter;

use super::toml_schema::LintSection;

/// Default location of the linted file, relative to the working directory.
const DEFAULT_EDITORCONFIG: &str = ".editorconfig";

/// CLI options that can override config file settings.
///
/// Uses `Option<T>` to distinguish "not specified" from "explicitly set".
#[derive(Debug, Default)]
pub struct CliLintOptions {
    pub file: Option<PathBuf>,
    pub formatter: Option<Formatter>,
}

/// Effective lint settings after merging all sources.
///
/// `file` may still be relative; the caller resolves it against the current
/// working directory.
#[derive(Debug, PartialEq, Eq)]
pub struct LintSettings {
    pub file: PathBuf,
    pub formatter: Formatter,
}

/// Merge settings from CLI, TOML, and defaults.
///
/// Priority: CLI > TOML > defaults
pub fn merge_lint_settings(cli: &CliLintOptions, toml: Option<&LintSection>) -> LintSettings {
    LintSettings {
        file: cli
            .file
            .clone()
            .or_else(|| toml.and_then(|t| t.file.clone()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EDITORCONFIG)),
        formatter: cli
            .formatter
            .or_else(|| toml.and_then(|t| t.formatter))
            .unwrap_or_default(),
    }
}
