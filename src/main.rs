use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use eclint::{
    find_config_file, generate_init_file, load_config, merge_lint_settings, run, should_use_colors,
    CliLintOptions, Colors, EclintToml, Formatter, LintContext,
};

#[derive(Parser)]
#[command(name = "eclint")]
#[command(version, about = "Lint .editorconfig files against a fixed house style")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Specify config file path (overrides auto-discovery)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint an EditorConfig definition file
    Lint(LintArgs),
    /// Generate a template eclint.toml configuration file
    Init,
}

#[derive(Parser)]
struct LintArgs {
    /// Location of the .editorconfig file
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Formatter to use for printing lint output
    #[arg(long, value_enum)]
    formatter: Option<Formatter>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => handle_init(),
        Commands::Lint(args) => handle_lint(&cli.config, &args),
    }
}

fn handle_lint(explicit_config: &Option<PathBuf>, args: &LintArgs) -> ExitCode {
    let toml_config = load_configuration(explicit_config);

    let cli_options = CliLintOptions {
        file: args.file.clone(),
        formatter: args.formatter,
    };

    // Merge settings: CLI > eclint.toml > defaults
    let settings = merge_lint_settings(&cli_options, toml_config.as_ref().map(|c| &c.lint));

    let ctx = LintContext {
        file: resolve_file_path(settings.file),
        formatter: settings.formatter,
        colors: Colors::new(should_use_colors()),
    };

    match run(&ctx) {
        Ok(result) => {
            if result.has_violations() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {}: {e}", ctx.file.display());
            ExitCode::from(1)
        }
    }
}

fn handle_init() -> ExitCode {
    match generate_init_file() {
        Ok(path) => {
            println!("Created {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn load_configuration(explicit_path: &Option<PathBuf>) -> Option<EclintToml> {
    let config_path = explicit_path.clone().or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|d| find_config_file(&d))
    });

    config_path.and_then(|p| match load_config(&p) {
        Ok(config) => Some(config),
        Err(e) => {
            eprintln!("Warning: Failed to load {}: {}", p.display(), e);
            None
        }
    })
}

fn resolve_file_path(file: PathBuf) -> PathBuf {
    if file.is_absolute() {
        return file;
    }
    match std::env::current_dir() {
        Ok(dir) => dir.join(file),
        Err(_) => file,
    }
}
