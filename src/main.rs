use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use pricegrid::init_tracing;

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    init_tracing();

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::Quote(quote_args) => {
            commands::quote::execute(&args.config, quote_args)?;
        }
        cli::Commands::Tiers => {
            commands::tiers::execute(&args.config)?;
        }
        cli::Commands::Test => {
            commands::test::execute(&args.config)?;
        }
        cli::Commands::Version => {
            println!("pricegrid v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
