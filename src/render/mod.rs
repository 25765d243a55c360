pub mod html;
pub mod table;

pub use html::render_html;
pub use table::render_table;

use std::str::FromStr;

use crate::error::AppError;
use crate::pricing::{PriceMatrix, QuoteCalculator};
use crate::selection::Selection;

/// Message shown instead of a table when the selection is incomplete
pub const PLACEHOLDER: &str =
    "Please enter a user count and select at least one product tier and one term.";

/// Output format for a render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Html,
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            other => Err(AppError::ConfigError(format!(
                "unknown output format: {}",
                other
            ))),
        }
    }
}

/// One full render pass
///
/// Re-reads nothing: the selection is the complete input. An incomplete
/// selection yields an informational placeholder without pricing a single
/// cell; a complete one prices the full (tier × term) cross-product and
/// formats it.
pub fn render(
    calculator: &QuoteCalculator,
    selection: &Selection,
    format: OutputFormat,
    currency: &str,
) -> Result<String, AppError> {
    if !selection.is_complete() {
        return Ok(match format {
            OutputFormat::Table => PLACEHOLDER.to_string(),
            OutputFormat::Html => format!(r#"<div class="info">{}</div>"#, PLACEHOLDER),
            OutputFormat::Json => serde_json::json!({ "info": PLACEHOLDER }).to_string(),
        });
    }

    let matrix = PriceMatrix::build(calculator, selection)?;

    match format {
        OutputFormat::Table => Ok(render_table(&matrix, currency, selection.show_details)),
        OutputFormat::Html => Ok(render_html(&matrix, currency, selection.show_details)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&matrix)?),
    }
}

/// Column label for a term: "1 Year", "3 Years"
pub(crate) fn term_label(years: u32) -> String {
    if years > 1 {
        format!("{} Years", years)
    } else {
        format!("{} Year", years)
    }
}

/// Currency amount with exactly two fractional digits
pub(crate) fn format_amount(currency: &str, value: f64) -> String {
    format!("{}{:.2}", currency, value)
}

/// Discount percent without a spurious fraction: 25 → "25", 12.5 → "12.5"
pub(crate) fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BadgeKind {
    Bulk,
    Term,
    Manual,
}

#[derive(Debug, Clone)]
pub(crate) struct Badge {
    pub kind: BadgeKind,
    pub label: String,
}

/// Discount badges for one cell
///
/// A manual discount shows its own badge only; otherwise each non-zero
/// automatic discount gets one.
pub(crate) fn badges(quote: &crate::pricing::Quote) -> Vec<Badge> {
    if let Some(manual) = quote.manual_discount {
        return vec![Badge {
            kind: BadgeKind::Manual,
            label: format!("Manual Discount {}%", format_percent(manual)),
        }];
    }

    let mut badges = Vec::new();
    if quote.volume_discount > 0.0 {
        badges.push(Badge {
            kind: BadgeKind::Bulk,
            label: format!("Bulk Discount {}%", format_percent(quote.volume_discount)),
        });
    }
    if quote.term_discount > 0.0 {
        badges.push(Badge {
            kind: BadgeKind::Term,
            label: format!("Multi-Year Discount {}%", format_percent(quote.term_discount)),
        });
    }
    badges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("HTML".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_term_label() {
        assert_eq!(term_label(1), "1 Year");
        assert_eq!(term_label(3), "3 Years");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount("$", 16874.325000000001), "$16874.33");
        assert_eq!(format_amount("$", 749.95), "$749.95");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(25.0), "25");
        assert_eq!(format_percent(12.5), "12.5");
    }
}
