//! Violation records produced by the lint checks.

/// One detected deviation from the house style.
///
/// `row` and `column` are 1-indexed positions in the linted file; 0 for both
/// marks a file-level violation with no specific location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub row: usize,
    pub column: usize,
    pub kind: ViolationKind,
}

impl Violation {
    pub fn file_level(kind: ViolationKind) -> Self {
        Self {
            row: 0,
            column: 0,
            kind,
        }
    }

    pub fn at(row: usize, column: usize, kind: ViolationKind) -> Self {
        Self { row, column, kind }
    }
}

/// Every rule the linter enforces.
///
/// Codes are stable identifiers; downstream tooling keys on them, so they
/// must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    DefaultIndentStyle,
    DefaultIndentSize,
    DefaultTabWidth,
    DefaultEndOfLine,
    DefaultCharset,
    DefaultTrimTrailingWhitespace,
    DefaultInsertFinalNewline,
    RequiredTopLevelRootTrue,
    RequiredNewlineBeforeStartBracket,
    NoWhitespaceAfterStartBracket,
    NoWhitespaceBeforeEndBracket,
    RequiredNewlineAfterEndBracket,
    RequiredSpaceBeforeEquals,
    RequiredSpaceAfterEquals,
    NoWhitespaceAfterNewline,
}

impl ViolationKind {
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::DefaultIndentStyle => "default-indent-style",
            ViolationKind::DefaultIndentSize => "default-indent-size",
            ViolationKind::DefaultTabWidth => "default-tab-width",
            ViolationKind::DefaultEndOfLine => "default-end-of-line",
            ViolationKind::DefaultCharset => "default-charset",
            ViolationKind::DefaultTrimTrailingWhitespace => "default-trim_trailing-whitespace",
            ViolationKind::DefaultInsertFinalNewline => "default-insert-final-newline",
            ViolationKind::RequiredTopLevelRootTrue => "required-top-level-root-true",
            ViolationKind::RequiredNewlineBeforeStartBracket => {
                "required-newline-before-start-bracket"
            }
            ViolationKind::NoWhitespaceAfterStartBracket => "no-whitespace-after-start-bracket",
            ViolationKind::NoWhitespaceBeforeEndBracket => "no-whitespace-before-end-bracket",
            ViolationKind::RequiredNewlineAfterEndBracket => "required-newline-after-end-bracket",
            ViolationKind::RequiredSpaceBeforeEquals => "required-space-before-equals",
            ViolationKind::RequiredSpaceAfterEquals => "required-space-after-equals",
            ViolationKind::NoWhitespaceAfterNewline => "no-whitespace-after-newline",
        }
    }

    /// Human-readable summary, without trailing punctuation; the reporter
    /// adds the final period.
    pub fn message(&self) -> &'static str {
        match self {
            ViolationKind::DefaultIndentStyle => "Default indent_style must be set to tab",
            ViolationKind::DefaultIndentSize => "Default indent_size must be unset",
            ViolationKind::DefaultTabWidth => "Default tab_width must not be set",
            ViolationKind::DefaultEndOfLine => "Default end_of_line must be 'lf'",
            ViolationKind::DefaultCharset => "Default charset must be set to 'utf-8'",
            ViolationKind::DefaultTrimTrailingWhitespace => {
                "Default trim_trailing_whitespace must be set to 'true'"
            }
            ViolationKind::DefaultInsertFinalNewline => {
                "Default insert_final_newline must be set to 'true'"
            }
            ViolationKind::RequiredTopLevelRootTrue => {
                "The first 11 characters must be `root = true`"
            }
            ViolationKind::RequiredNewlineBeforeStartBracket => {
                "Newline before starting brackets is required"
            }
            ViolationKind::NoWhitespaceAfterStartBracket => {
                "Whitespace after starting brackets is prohibited"
            }
            ViolationKind::NoWhitespaceBeforeEndBracket => {
                "Whitespace before ending brackets is prohibited"
            }
            ViolationKind::RequiredNewlineAfterEndBracket => {
                "Newline after ending brackets is required"
            }
            ViolationKind::RequiredSpaceBeforeEquals => "Space before equals sign is required",
            ViolationKind::RequiredSpaceAfterEquals => "Space after equals sign is required",
            ViolationKind::NoWhitespaceAfterNewline => "Whitespace after newline is prohibited",
        }
    }
}
