//! ddsynth CLI - render synthesized test signals to WAV files.

mod commands;
mod programs;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ddsynth")]
#[command(author, version, about = "Direct digital synthesis to WAV", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a program to a WAV file
    Render(commands::render::RenderArgs),

    /// List programs and waveforms
    List,

    /// Display WAV file information
    Info(commands::info::InfoArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::List => commands::list::run(),
        Commands::Info(args) => commands::info::run(args),
    }
}
