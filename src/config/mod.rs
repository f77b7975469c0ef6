//! Tool configuration support for eclint.
//!
//! This module provides:
//! - Loading configuration from `eclint.toml`
//! - Config file discovery (search upward from current directory)
//! - Merging CLI args, config file, and defaults
//! - Template generation with the `init` command

mod file;
mod init;
mod merge;
mod toml_schema;

pub use file::{find_config_file, find_file_upward, load_config, ConfigError};
pub use init::{generate_init_file, generate_init_file_in, ECLINT_TOML_TEMPLATE};
pub use merge::{merge_lint_settings, CliLintOptions, LintSettings};
pub use toml_schema::{EclintToml, LintSection};
