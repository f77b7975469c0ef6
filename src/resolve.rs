//! Resolution of the universal (`[*]`-equivalent) default properties.
//!
//! A probe file named `_._`, notionally sitting next to the config file,
//! stands in for "every file": a section contributes to the defaults exactly
//! when its glob matches the probe. Sections are merged in file order, later
//! values overriding earlier ones.

use globset::GlobBuilder;

/// File name used to match sections against the universal pattern.
const PROBE_FILE: &str = "_._";

/// Merged default property values for the universal pattern.
///
/// `None` means the property is absent. Values of the policed properties are
/// lowercased during parsing, so comparisons downstream are exact.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResolvedDefaults {
    pub indent_style: Option<String>,
    pub indent_size: Option<String>,
    pub tab_width: Option<String>,
    pub end_of_line: Option<String>,
    pub charset: Option<String>,
    pub trim_trailing_whitespace: Option<bool>,
    pub insert_final_newline: Option<bool>,
}

/// Parse the raw `.editorconfig` text and merge every section matching the
/// universal probe into a `ResolvedDefaults`.
///
/// Properties before the first section header are skipped; only `root` lives
/// in the preamble, and the structural scanner owns that rule.
pub fn resolve_defaults(content: &str) -> ResolvedDefaults {
    let mut defaults = ResolvedDefaults::default();
    let mut in_matching_section = false;
    let mut seen_section = false;

    for line in content.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        // Section header
        if line.starts_with('[') && line.ends_with(']') {
            seen_section = true;
            in_matching_section = section_matches_probe(&line[1..line.len() - 1]);
            continue;
        }

        if !seen_section || !in_matching_section {
            continue;
        }

        // Parse key = value
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim().to_lowercase();
            let value = value.trim();

            match key.as_str() {
                "indent_style" => defaults.indent_style = Some(value.to_lowercase()),
                "indent_size" => defaults.indent_size = Some(value.to_lowercase()),
                "tab_width" => defaults.tab_width = Some(value.to_lowercase()),
                "end_of_line" => defaults.end_of_line = Some(value.to_lowercase()),
                "charset" => defaults.charset = Some(value.to_lowercase()),
                "trim_trailing_whitespace" => {
                    defaults.trim_trailing_whitespace = Some(value.eq_ignore_ascii_case("true"));
                }
                "insert_final_newline" => {
                    defaults.insert_final_newline = Some(value.eq_ignore_ascii_case("true"));
                }
                _ => {}
            }
        }
    }

    defaults
}

/// Whether a section pattern applies to the universal probe file.
///
/// EditorConfig globs keep `*` within a path segment; patterns containing a
/// `/` match against the probe's path relative to the config file, which for
/// a sibling probe equals its file name. Patterns that fail to compile match
/// nothing.
fn section_matches_probe(pattern: &str) -> bool {
    let pattern = pattern.trim().trim_start_matches('/');
    if pattern.is_empty() {
        return false;
    }

    let glob = GlobBuilder::new(pattern)
        .literal_separator(true)
        .backslash_escape(true)
        .build();

    match glob {
        Ok(glob) => glob.compile_matcher().is_match(PROBE_FILE),
        Err(_) => false,
    }
}
