//! TOML schema definitions for eclint.toml

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::report::Formatter;

/// Root structure for eclint.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct EclintToml {
    /// Lint settings
    #[serde(default)]
    pub lint: LintSection,
}

/// `[lint]` section in eclint.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct LintSection {
    /// Location of the .editorconfig file (default: `.editorconfig` in the
    /// current working directory)
    pub file: Option<PathBuf>,

    /// Formatter for lint output (default: unix)
    pub formatter: Option<Formatter>,
}
