//! Checks of the resolved universal defaults against the house policy.

use crate::resolve::ResolvedDefaults;
use crate::violation::{Violation, ViolationKind};

/// Validate the resolved defaults against the seven required values.
///
/// Every check runs unconditionally; one failing check never suppresses
/// another. All violations are file-level (row 0, column 0), emitted in the
/// fixed policy order.
pub fn check_defaults(defaults: &ResolvedDefaults) -> Vec<Violation> {
    let mut violations = Vec::new();

    if defaults.indent_style.as_deref() != Some("tab") {
        violations.push(Violation::file_level(ViolationKind::DefaultIndentStyle));
    }

    if defaults.indent_size.as_deref() != Some("unset") {
        violations.push(Violation::file_level(ViolationKind::DefaultIndentSize));
    }

    if defaults.tab_width.is_some() {
        violations.push(Violation::file_level(ViolationKind::DefaultTabWidth));
    }

    if defaults.end_of_line.as_deref() != Some("lf") {
        violations.push(Violation::file_level(ViolationKind::DefaultEndOfLine));
    }

    if defaults.charset.as_deref() != Some("utf-8") {
        violations.push(Violation::file_level(ViolationKind::DefaultCharset));
    }

    if defaults.trim_trailing_whitespace != Some(true) {
        violations.push(Violation::file_level(
            ViolationKind::DefaultTrimTrailingWhitespace,
        ));
    }

    if defaults.insert_final_newline != Some(true) {
        violations.push(Violation::file_level(
            ViolationKind::DefaultInsertFinalNewline,
        ));
    }

    violations
}
