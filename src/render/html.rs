use std::fmt::Write;

use crate::pricing::{PriceMatrix, Quote};
use crate::render::{badges, format_amount, format_percent, term_label, BadgeKind};

/// Render the price matrix as an HTML table
///
/// The markup mirrors the grid of the terminal rendering: a header row with
/// the term columns, then one row per tier with the user count repeated.
pub fn render_html(matrix: &PriceMatrix, currency: &str, show_details: bool) -> String {
    let mut html = String::new();

    html.push_str(r#"<div class="table-wrap"><table><thead><tr>"#);
    html.push_str("<th>Total Users</th><th>Product Tier</th>");
    for &years in &matrix.terms {
        let _ = write!(html, "<th>{}</th>", term_label(years));
    }
    html.push_str("</tr></thead><tbody>");

    for row in &matrix.rows {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td>",
            matrix.users,
            escape(&row.tier)
        );
        for quote in &row.cells {
            html.push_str("<td>");
            cell_html(&mut html, quote, currency, show_details);
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table></div>");
    html
}

fn cell_html(html: &mut String, quote: &Quote, currency: &str, show_details: bool) {
    let final_price = format!(
        r#"<span class="final-price">{}</span>"#,
        format_amount(currency, quote.final_price)
    );

    if show_details {
        let _ = write!(
            html,
            "<div><strong>Full Price:</strong> {}</div>",
            format_amount(currency, quote.base_price)
        );
        badge_html(html, quote);
        let _ = write!(
            html,
            "<div>Total Discount: {}% ({})</div>",
            format_percent(quote.discount_percent),
            format_amount(currency, quote.discount_amount)
        );
        let _ = write!(
            html,
            "<div>Price / user / year: {}</div>",
            format_amount(currency, quote.per_user_per_year)
        );
        html.push_str(&final_price);
    } else {
        html.push_str(&final_price);
        badge_html(html, quote);
    }
}

fn badge_html(html: &mut String, quote: &Quote) {
    for badge in badges(quote) {
        let class = match badge.kind {
            BadgeKind::Bulk => "badge-bulk",
            BadgeKind::Term => "badge-term",
            BadgeKind::Manual => "badge-manual",
        };
        let _ = write!(
            html,
            r#"<div class="badge {}">{}</div>"#,
            class, badge.label
        );
    }
}

/// Minimal HTML escaping for tier names coming from configuration
fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
