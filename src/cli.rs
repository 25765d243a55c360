use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pricegrid", version, about = "Quote grid pricing calculator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Price the selected tiers and terms and print the quote table (default)
    Quote(QuoteArgs),

    /// Display the configured price book and discount schedule
    Tiers,

    /// Test configuration file validity
    Test,

    /// Show version information
    Version,
}

#[derive(Args, Debug, Clone, Default)]
pub struct QuoteArgs {
    /// Number of users to price for
    #[arg(short, long)]
    pub users: Option<u32>,

    /// Comma-separated product tier names
    #[arg(short, long, default_value = "")]
    pub tiers: String,

    /// Comma-separated term lengths in years
    #[arg(long, default_value = "")]
    pub terms: String,

    /// Manual discount percent; replaces the automatic discounts
    #[arg(short, long)]
    pub discount: Option<f64>,

    /// Show full price, discount amount and per-user breakdown
    #[arg(long)]
    pub detailed: bool,

    /// Output format: table, html or json
    #[arg(short, long)]
    pub format: Option<String>,

    /// Write an HTML snapshot for image capture after rendering
    #[arg(short, long)]
    pub export: bool,
}

impl Cli {
    /// Get the command to execute, defaulting to an empty quote if none
    /// provided (which renders the selection placeholder)
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Quote(QuoteArgs::default()))
    }
}
