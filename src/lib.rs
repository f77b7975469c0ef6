pub mod colors;
pub mod config;
pub mod defaults;
pub mod report;
pub mod resolve;
pub mod scan;
pub mod violation;

pub use colors::{should_use_colors, Colors};
pub use config::{
    find_config_file, generate_init_file, load_config, merge_lint_settings, CliLintOptions,
    ConfigError, EclintToml, LintSettings, ECLINT_TOML_TEMPLATE,
};
pub use defaults::check_defaults;
pub use report::{Formatter, LintContext};
pub use resolve::{resolve_defaults, ResolvedDefaults};
pub use scan::scan_text;
pub use violation::{Violation, ViolationKind};

use std::fs;
use std::io;

pub struct RunResult {
    pub violations: usize,
}

impl RunResult {
    pub fn has_violations(&self) -> bool {
        self.violations > 0
    }
}

/// Run both lint phases over already-loaded file text.
///
/// Default-policy violations come first, then structural violations in scan
/// order; the sequence is deterministic for identical input.
pub fn lint_content(content: &str) -> Vec<Violation> {
    let resolved = resolve_defaults(content);
    let mut violations = check_defaults(&resolved);
    violations.extend(scan_text(content));
    violations
}

/// Main entry point: lint the file named by the context and print every
/// finding through the reporter.
pub fn run(ctx: &LintContext) -> io::Result<RunResult> {
    let content = fs::read_to_string(&ctx.file)?;

    let violations = lint_content(&content);

    report::print_violations(&violations, ctx);
    report::print_summary(violations.len(), ctx);

    Ok(RunResult {
        violations: violations.len(),
    })
}
