//! Rendering and printing of lint violations.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::colors::Colors;
use crate::violation::Violation;

/// Output rendering style for violations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formatter {
    /// `<file>:<row>:<column>: <message>. [Error/<code>]`
    #[default]
    Unix,
    /// `<file>(<row>,<column>): error <code> : <message>.`
    #[value(name = "visualstudio")]
    VisualStudio,
}

/// Immutable per-run context: the linted file and how to render findings.
pub struct LintContext {
    pub file: PathBuf,
    pub formatter: Formatter,
    pub colors: Colors,
}

/// Render one violation as a single output line.
pub fn render(file: &Path, violation: &Violation, formatter: Formatter) -> String {
    match formatter {
        Formatter::Unix => format!(
            "{}:{}:{}: {}. [Error/{}]",
            file.display(),
            violation.row,
            violation.column,
            violation.kind.message(),
            violation.kind.code()
        ),
        Formatter::VisualStudio => format!(
            "{}({},{}): error {} : {}.",
            file.display(),
            violation.row,
            violation.column,
            violation.kind.code(),
            violation.kind.message()
        ),
    }
}

/// Print every violation to stdout in production order.
pub fn print_violations(violations: &[Violation], ctx: &LintContext) {
    for violation in violations {
        println!("{}", render(&ctx.file, violation, ctx.formatter));
    }
}

/// Print a closing summary to stderr; silent when the file is clean.
pub fn print_summary(count: usize, ctx: &LintContext) {
    if count == 0 {
        return;
    }
    let noun = if count == 1 { "violation" } else { "violations" };
    eprintln!(
        "{}{} style {} in {}{}",
        ctx.colors.error,
        count,
        noun,
        ctx.file.display(),
        ctx.colors.reset()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::violation::ViolationKind;

    #[test]
    fn test_unix_format_exact() {
        let violation = Violation::at(3, 4, ViolationKind::RequiredSpaceBeforeEquals);
        let line = render(Path::new(".editorconfig"), &violation, Formatter::Unix);
        assert_eq!(
            line,
            ".editorconfig:3:4: Space before equals sign is required. [Error/required-space-before-equals]"
        );
    }

    #[test]
    fn test_visualstudio_format_exact() {
        let violation = Violation::at(3, 4, ViolationKind::RequiredSpaceBeforeEquals);
        let line = render(
            Path::new(".editorconfig"),
            &violation,
            Formatter::VisualStudio,
        );
        assert_eq!(
            line,
            ".editorconfig(3,4): error required-space-before-equals : Space before equals sign is required."
        );
    }

    #[test]
    fn test_file_level_violation_renders_zero_position() {
        let violation = Violation::file_level(ViolationKind::RequiredTopLevelRootTrue);
        let line = render(Path::new("a/.editorconfig"), &violation, Formatter::Unix);
        assert_eq!(
            line,
            "a/.editorconfig:0:0: The first 11 characters must be `root = true`. [Error/required-top-level-root-true]"
        );
    }

    #[test]
    fn test_default_formatter_is_unix() {
        assert_eq!(Formatter::default(), Formatter::Unix);
    }

    #[test]
    fn test_formatter_names_round_trip_through_toml() {
        #[derive(Deserialize)]
        struct Probe {
            formatter: Formatter,
        }
        let unix: Probe = toml::from_str("formatter = \"unix\"").unwrap();
        assert_eq!(unix.formatter, Formatter::Unix);
        let vs: Probe = toml::from_str("formatter = \"visualstudio\"").unwrap();
        assert_eq!(vs.formatter, Formatter::VisualStudio);
    }
}
