use std::path::Path;

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use tracing::info;

use pricegrid::config;

/// Execute the tiers command
///
/// Displays the configured price book and the discount schedule
pub fn execute(config_path: &Path) -> Result<()> {
    info!("Loading configuration");
    let cfg = config::load_config(config_path)?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("PRODUCT TIER").fg(Color::Cyan),
        Cell::new("PRICE / USER / YEAR").fg(Color::Cyan),
    ]);

    for tier in &cfg.pricing.tiers {
        table.add_row(vec![
            Cell::new(&tier.name),
            Cell::new(format!("{}{:.2}", cfg.pricing.currency, tier.unit_price)),
        ]);
    }

    println!("{}", table);

    println!("\nVolume Discounts:");
    if cfg.discounts.volume.is_empty() {
        println!("  None");
    }
    for brk in &cfg.discounts.volume {
        println!("  {}+ users → {}%", brk.min_users, brk.percent);
    }

    if cfg.discounts.term_years.is_empty() || cfg.discounts.term_percent == 0.0 {
        println!("\nMulti-Year Discount: none");
    } else {
        let years: Vec<String> = cfg
            .discounts
            .term_years
            .iter()
            .map(|y| y.to_string())
            .collect();
        println!(
            "\nMulti-Year Discount: {}% on {}-year terms",
            cfg.discounts.term_percent,
            years.join("/")
        );
    }

    Ok(())
}
