//! Structural scan of the raw file text.
//!
//! A single forward pass over the text with a three-slot sliding window
//! (previous, current, next). Iteration is by Unicode scalar value, so
//! row/column positions stay accurate for non-ASCII content. The window
//! shape means the first and last characters of the file are never evaluated
//! as the current character; that boundary behavior is deliberate and pinned
//! by tests.

use crate::violation::{Violation, ViolationKind};

/// Literal every conforming file must start with.
const ROOT_PREFIX: &str = "root = true";

/// Scan the complete raw text and report every formatting violation in
/// encounter order (left to right, top to bottom).
pub fn scan_text(content: &str) -> Vec<Violation> {
    let mut violations = Vec::new();

    check_root_prefix(content, &mut violations);

    let mut chars = content.chars();
    let (Some(mut prev), Some(mut cur)) = (chars.next(), chars.next()) else {
        return violations;
    };

    // 1-indexed counters, advanced to `cur`'s position at the top of each
    // iteration.
    let mut row = 1usize;
    let mut column = 1usize;

    for next in chars {
        if cur == '\n' {
            column = 0;
            row += 1;
        } else {
            column += 1;
        }

        match cur {
            '[' => {
                if prev != '\n' {
                    violations.push(Violation::at(
                        row,
                        column,
                        ViolationKind::RequiredNewlineBeforeStartBracket,
                    ));
                }
                if next == ' ' || next == '\t' {
                    violations.push(Violation::at(
                        row,
                        column,
                        ViolationKind::NoWhitespaceAfterStartBracket,
                    ));
                }
            }
            ']' => {
                if prev == ' ' || prev == '\t' {
                    violations.push(Violation::at(
                        row,
                        column,
                        ViolationKind::NoWhitespaceBeforeEndBracket,
                    ));
                }
                if next != '\n' {
                    violations.push(Violation::at(
                        row,
                        column,
                        ViolationKind::RequiredNewlineAfterEndBracket,
                    ));
                }
            }
            '=' => {
                if prev != ' ' {
                    violations.push(Violation::at(
                        row,
                        column,
                        ViolationKind::RequiredSpaceBeforeEquals,
                    ));
                }
                if next != ' ' {
                    violations.push(Violation::at(
                        row,
                        column,
                        ViolationKind::RequiredSpaceAfterEquals,
                    ));
                }
            }
            '\n' => {
                if next == ' ' || next == '\t' {
                    violations.push(Violation::at(
                        row,
                        column,
                        ViolationKind::NoWhitespaceAfterNewline,
                    ));
                }
            }
            _ => {}
        }

        prev = cur;
        cur = next;
    }

    violations
}

/// The first 11 characters must be exactly `root = true`.
fn check_root_prefix(content: &str, violations: &mut Vec<Violation>) {
    let prefix: String = content.chars().take(ROOT_PREFIX.chars().count()).collect();
    if prefix != ROOT_PREFIX {
        violations.push(Violation::file_level(
            ViolationKind::RequiredTopLevelRootTrue,
        ));
    }
}
