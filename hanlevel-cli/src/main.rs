//! hanlevel command-line entry point

use clap::Parser;
use hanlevel_cli::commands::{init_logging, Commands};
use hanlevel_cli::CliResult;

/// Assign minimal HSK and TOCFL levels to Chinese sentences
#[derive(Debug, Parser)]
#[command(name = "hanlevel", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress progress output and logging
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: &Cli) -> CliResult<()> {
    init_logging(cli.verbose, cli.quiet);
    cli.command.execute(cli.quiet)
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        for cause in err.chain().skip(1) {
            eprintln!("  Caused by: {cause}");
        }
        std::process::exit(1);
    }
}
