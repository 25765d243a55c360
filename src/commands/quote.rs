use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use crate::cli::QuoteArgs;
use pricegrid::config;
use pricegrid::export::{Exporter, HtmlSnapshotExporter};
use pricegrid::pricing::{PriceBook, QuoteCalculator};
use pricegrid::render::{self, OutputFormat};
use pricegrid::selection::{self, Selection};

/// Execute the quote command
///
/// One full render pass: read the selection, price the cross-product,
/// print the table. Optionally hand the HTML rendering off to the
/// snapshot exporter afterwards.
pub fn execute(config_path: &Path, args: QuoteArgs) -> Result<()> {
    let cfg = config::load_config(config_path)?;

    let selection = Selection {
        users: args.users.unwrap_or(0),
        tiers: selection::parse_tier_list(&args.tiers),
        terms: selection::parse_term_list(&args.terms),
        manual_discount: args.discount.map(selection::clamp_discount),
        show_details: args.detailed || cfg.output.show_details,
    };

    let format: OutputFormat = args
        .format
        .as_deref()
        .unwrap_or(&cfg.output.format)
        .parse()?;

    let calculator = QuoteCalculator::new(
        PriceBook::new(cfg.pricing.tiers.clone()),
        cfg.discounts.clone(),
    );

    info!(
        "Rendering quote grid: {} users, {} tiers, {} terms",
        selection.users,
        selection.tiers.len(),
        selection.terms.len()
    );

    let rendered = render::render(&calculator, &selection, format, &cfg.pricing.currency)?;
    println!("{}", rendered);

    if args.export {
        if selection.is_complete() {
            let table_html = render::render(
                &calculator,
                &selection,
                OutputFormat::Html,
                &cfg.pricing.currency,
            )?;
            match HtmlSnapshotExporter::new(&cfg.output.export_dir).export(&table_html) {
                Ok(path) => println!("\nSnapshot written to {}", path.display()),
                Err(e) => {
                    // Export failure is a notice, not an error
                    warn!("Snapshot export failed: {}", e);
                    println!("\nExport failed: {}. The table above is unaffected.", e);
                }
            }
        } else {
            println!("\nNothing to export yet.");
        }
    }

    Ok(())
}
