use std::{fs::File, path::PathBuf};

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use t9::words::DEFAULT_WORDS_PATH;

mod help;
mod lookup;
mod repl;
#[cfg(test)]
mod test_utils;

use lookup::{execute_lookup, LookupArgs};
use repl::{execute_walk, WalkArgs};

/// Predictive text over a telephone keypad.
#[derive(Parser, Debug)]
#[command(version, about = "T9 predictive text entry for your terminal.")]
struct Cli {
    /// Word list, one word per line.
    #[arg(short, long, global = true, default_value = DEFAULT_WORDS_PATH)]
    words: PathBuf,
    /// Where logs are written. Filter with RUST_LOG.
    #[arg(long, global = true, default_value = "log.txt")]
    log_file: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Type digits interactively and watch the candidates narrow.
    Walk(WalkArgs),
    /// Print the words for a digit sequence.
    Lookup(LookupArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file = File::create(&cli.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(file)
        .init();

    debug!("Cli: {:?}", cli);

    match cli.command {
        Command::Walk(args) => execute_walk(args, &cli.words).await,
        Command::Lookup(args) => execute_lookup(args, &cli.words).await,
    }
}
