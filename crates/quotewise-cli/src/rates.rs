use clap::Subcommand;
use quotewise_core::RateCard;

/// Sub-commands available under `rates`.
#[derive(Debug, Subcommand)]
pub enum RatesCommands {
    /// Print the active rate card as YAML
    Show,
}

pub(crate) fn run_rates(rate_card: &RateCard, command: &RatesCommands) -> anyhow::Result<()> {
    match command {
        RatesCommands::Show => print!("{}", serde_yaml::to_string(rate_card)?),
    }
    Ok(())
}
