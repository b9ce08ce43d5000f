mod quote;
mod rates;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use quotewise_core::RateCard;
use tracing_subscriber::EnvFilter;

use crate::quote::QuoteCommands;
use crate::rates::RatesCommands;

#[derive(Debug, Parser)]
#[command(name = "quotewise-cli")]
#[command(about = "Campaign quotation and influencer earnings calculator")]
struct Cli {
    /// YAML rate card to price with instead of the built-in rates
    #[arg(long, global = true, env = "QUOTEWISE_RATE_CARD_PATH")]
    rates: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute a quotation or an earnings projection
    Quote {
        #[command(subcommand)]
        command: QuoteCommands,
    },
    /// Inspect the rate card
    Rates {
        #[command(subcommand)]
        command: RatesCommands,
    },
}

/// Load the rate card named on the command line, or the built-in one. A blank
/// path counts as unset, matching the server's handling of the same variable.
fn resolve_rate_card(path: Option<&Path>) -> anyhow::Result<RateCard> {
    match path.filter(|p| !p.as_os_str().to_string_lossy().trim().is_empty()) {
        Some(path) => {
            let card = quotewise_core::load_rate_card(path)?;
            tracing::debug!(path = %path.display(), "loaded rate card");
            Ok(card)
        }
        None => Ok(RateCard::default()),
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("quotewise-cli: run with --help to list commands");
        return Ok(());
    };

    let rate_card = resolve_rate_card(cli.rates.as_deref())?;
    match command {
        Commands::Quote { command } => quote::run_quote(&rate_card, command),
        Commands::Rates { command } => rates::run_rates(&rate_card, &command),
    }
}
