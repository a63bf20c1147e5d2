//! meshcast command-line entry point

use anyhow::Result;
use clap::Parser;
use meshcast_cli::commands::Commands;

/// Fetch a text forecast and rebroadcast it as numbered mesh messages
#[derive(Debug, Parser)]
#[command(name = "meshcast", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    match cli.command {
        Commands::Run(args) => args.execute(),
        Commands::Split(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
    }
}

/// Initialize logging based on verbosity level
fn init_logging(quiet: bool, verbose: u8) {
    if quiet {
        return;
    }
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}
