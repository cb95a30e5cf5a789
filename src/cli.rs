//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use chartloader::loader::options::DEFAULT_MAX_DEPTH;

/// Chartloader - load and inspect chart packages
#[derive(Parser, Debug)]
#[command(
    name = "chartloader",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Load chart packages from archives or directories",
    long_about = "Chartloader reads a chart from a .tgz archive or an unpacked directory, \
                  validates its structure, and resolves nested charts under charts/.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  chartloader inspect ./mychart\n    \
                  chartloader inspect mychart-0.1.0.tgz --json"
)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a chart and print its structure
    Inspect(InspectArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the inspect command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Inspect an unpacked chart:\n    chartloader inspect ./mychart\n\n\
                  Inspect a packaged chart as JSON:\n    chartloader inspect mychart-0.1.0.tgz --json\n\n\
                  Limit nested chart depth:\n    chartloader inspect ./mychart --max-depth 2")]
pub struct InspectArgs {
    /// Chart directory or .tgz archive
    pub path: PathBuf,

    /// Print the chart tree as JSON
    #[arg(long)]
    pub json: bool,

    /// Maximum nested chart depth
    #[arg(long, env = "CHARTLOADER_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Name of the ignore rule file in chart directories
    #[arg(long, default_value = ".helmignore")]
    pub ignore_file: String,
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    chartloader completions --shell bash\n\n\
                  Generate zsh completions:\n    chartloader completions --shell zsh")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
