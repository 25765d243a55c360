use std::path::Path;

use anyhow::Result;
use tracing::info;

use pricegrid::config;

/// Execute the test command
///
/// This validates the configuration file without rendering anything
pub fn execute(config_path: &Path) -> Result<()> {
    println!("Testing configuration...");
    info!("Loading and validating configuration");

    // Load configuration (this will validate it)
    let cfg = config::load_config(config_path)?;

    println!("✓ Configuration test successful");
    println!();

    println!("Configuration Summary:");
    println!("  Currency:           {}", cfg.pricing.currency);
    println!("  Tiers:              {}", cfg.pricing.tiers.len());
    for (idx, tier) in cfg.pricing.tiers.iter().enumerate() {
        println!(
            "    {}. {} ({}{:.2}/user/year)",
            idx + 1,
            tier.name,
            cfg.pricing.currency,
            tier.unit_price
        );
    }
    println!();

    println!("  Volume Breakpoints: {}", cfg.discounts.volume.len());
    for brk in &cfg.discounts.volume {
        println!("    {}+ users → {}%", brk.min_users, brk.percent);
    }

    let years: Vec<String> = cfg
        .discounts
        .term_years
        .iter()
        .map(|y| y.to_string())
        .collect();
    println!(
        "  Term Discount:      {}% on {}-year terms",
        cfg.discounts.term_percent,
        years.join("/")
    );
    println!();

    println!("  Default Format:     {}", cfg.output.format);
    println!("  Show Details:       {}", cfg.output.show_details);
    println!("  Export Directory:   {}", cfg.output.export_dir.display());

    info!("Configuration validation completed successfully");
    Ok(())
}
