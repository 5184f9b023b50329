//! Knightpad - count knight-move sequences on a keypad
//!
//! Counts the sequences a chess knight can type on a fixed keypad while
//! visiting at most a given number of vowel keys.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use knightpad::cli::{ConfigArgs, CountArgs, MovesArgs, TableArgs, VerifyArgs};

/// Knightpad - count knight-move sequences on a keypad
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count sequences of one length
    Count(CountArgs),
    /// Print counts for several lengths
    Table(TableArgs),
    /// Cross-check the counting strategies on short sequences
    Verify(VerifyArgs),
    /// Show the knight-move graph
    Moves(MovesArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Command::Count(args) => args.execute(),
        Command::Table(args) => args.execute(),
        Command::Verify(args) => args.execute(),
        Command::Moves(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code.code());
    }
}
