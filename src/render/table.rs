use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::pricing::{PriceMatrix, Quote};
use crate::render::{badges, format_amount, format_percent, term_label};

/// Render the price matrix as a terminal table
///
/// One row per selected tier, the user count repeated on every row, one
/// column per selected term.
pub fn render_table(matrix: &PriceMatrix, currency: &str, show_details: bool) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![
        Cell::new("TOTAL USERS").fg(Color::Cyan),
        Cell::new("PRODUCT TIER").fg(Color::Cyan),
    ];
    for &years in &matrix.terms {
        header.push(Cell::new(term_label(years).to_uppercase()).fg(Color::Cyan));
    }
    table.set_header(header);

    for row in &matrix.rows {
        let mut cells = vec![
            Cell::new(matrix.users.to_string()),
            Cell::new(&row.tier),
        ];
        for quote in &row.cells {
            cells.push(Cell::new(cell_text(quote, currency, show_details)));
        }
        table.add_row(cells);
    }

    table.to_string()
}

/// Multiline cell body for one quote
fn cell_text(quote: &Quote, currency: &str, show_details: bool) -> String {
    let mut lines = Vec::new();

    if show_details {
        lines.push(format!(
            "Full Price: {}",
            format_amount(currency, quote.base_price)
        ));
        for badge in badges(quote) {
            lines.push(badge.label);
        }
        lines.push(format!(
            "Total Discount: {}% ({})",
            format_percent(quote.discount_percent),
            format_amount(currency, quote.discount_amount)
        ));
        lines.push(format!(
            "Per User/Year: {}",
            format_amount(currency, quote.per_user_per_year)
        ));
        lines.push(format_amount(currency, quote.final_price));
    } else {
        lines.push(format_amount(currency, quote.final_price));
        for badge in badges(quote) {
            lines.push(badge.label);
        }
    }

    lines.join("\n")
}
