//! Template generation for the `init` command

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Template eclint.toml with documentation
pub const ECLINT_TOML_TEMPLATE: &str = r#"# eclint.toml - Configuration for the eclint style linter
#
# eclint checks a .editorconfig file against a fixed house style:
# - The universal defaults must prescribe tabs, LF line endings, UTF-8,
#   trimmed trailing whitespace and a final newline.
# - The file text must follow the bracket and equals-sign spacing
#   conventions and start with `root = true`.
#
# The rules themselves are not configurable. The settings below control
# where the file is found and how findings are printed - uncomment and
# modify as needed.

[lint]
# Location of the .editorconfig file to lint. Relative paths resolve
# against the current working directory.
# file = ".editorconfig"

# Formatter for lint output: "unix" or "visualstudio".
# Default: "unix"
# formatter = "unix"
"#;

/// Generate eclint.toml in the specified directory (or current directory if None).
///
/// Returns an error if eclint.toml already exists.
pub fn generate_init_file_in(dir: Option<&Path>) -> io::Result<PathBuf> {
    let path = dir.map_or_else(|| PathBuf::from("eclint.toml"), |d| d.join("eclint.toml"));

    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "eclint.toml already exists",
        ));
    }

    fs::write(&path, ECLINT_TOML_TEMPLATE)?;
    Ok(path)
}

/// Generate eclint.toml in the current directory.
///
/// Returns an error if eclint.toml already exists.
pub fn generate_init_file() -> io::Result<PathBuf> {
    generate_init_file_in(None)
}
