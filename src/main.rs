// ABOUTME: Main entry point for the mdslides program.
// ABOUTME: Provides the CLI interface and runs a single split or watch mode from the library.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use mdslides::{Config, LineEnding};

const USAGE_EXAMPLES: &str = "\
Usage:
mdslides ./path/to/source.md
mdslides ./path/to/source.md --watch
mdslides ./path/to/source.md --watch --dest ./path/to/slides/directory";

/// mdslides is a cli tool for creating many markdown slides from a single markdown file
#[derive(Parser)]
#[command(author, version, about, long_about = None, after_help = USAGE_EXAMPLES)]
struct Cli {
    /// Path to the source markdown file
    source: Option<PathBuf>,

    /// Re-create the slides whenever the source file changes
    #[arg(short, long)]
    watch: bool,

    /// Directory the slides are written to [default: ./dest]
    #[arg(short, long)]
    dest: Option<PathBuf>,

    /// Line terminator the source file uses
    #[arg(long, value_enum, default_value_t = LineEnding::Native)]
    line_ending: LineEnding,

    /// Convert any \r\n or \r line breaks to --line-ending before splitting
    #[arg(long)]
    normalize_line_endings: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    if let Err(e) = run(cli) {
        eprintln!("Unexpected mdslides error:\n\n{}\n", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine the working directory")?;

    let mut config = Config::from_env(&cwd);
    if let Some(dest) = cli.dest {
        config.dest = dest;
    }
    config.split.line_ending = cli.line_ending;
    config.split.normalize_line_endings = cli.normalize_line_endings;

    let source = mdslides::utils::resolve_source(&cwd, cli.source.as_deref())?;
    println!("Slides created");
    let watch_config = config.watch_config(source);

    if cli.watch {
        mdslides::watch_source(&watch_config)?;
    } else {
        mdslides::watch::run_once(&watch_config)?;
    }

    Ok(())
}
