//! Selection parsing: raw textual inputs to a typed, order-preserving set.
//!
//! Independent of any particular input-widget technology; the CLI hands
//! comma-separated strings in, other front ends can do the same.

/// Ephemeral input state for one render pass
///
/// Read fresh on every trigger; nothing here survives a pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Number of users to price for; 0 means "not provided yet"
    pub users: u32,
    /// Selected tier names, in selection order, duplicate-free
    pub tiers: Vec<String>,
    /// Selected term lengths in years, in selection order, duplicate-free
    pub terms: Vec<u32>,
    /// Manual discount percent, already clamped to [0, 100]
    pub manual_discount: Option<f64>,
    /// Show full price, discount amount and per-user breakdown
    pub show_details: bool,
}

impl Selection {
    /// Whether this selection can be priced at all
    ///
    /// An incomplete selection renders as an informational placeholder,
    /// without computing a single quote.
    pub fn is_complete(&self) -> bool {
        self.users > 0 && !self.tiers.is_empty() && !self.terms.is_empty()
    }
}

/// Parse a comma-separated tier list, preserving order and dropping
/// duplicates and empty entries
pub fn parse_tier_list(raw: &str) -> Vec<String> {
    let mut tiers: Vec<String> = Vec::new();
    for entry in raw.split(',') {
        let name = entry.trim();
        if name.is_empty() {
            continue;
        }
        if !tiers.iter().any(|t| t == name) {
            tiers.push(name.to_string());
        }
    }
    tiers
}

/// Parse a comma-separated term list, preserving order and dropping
/// duplicates and entries that are not positive integers
pub fn parse_term_list(raw: &str) -> Vec<u32> {
    let mut terms: Vec<u32> = Vec::new();
    for entry in raw.split(',') {
        let years = match entry.trim().parse::<u32>() {
            Ok(y) if y > 0 => y,
            _ => continue,
        };
        if !terms.contains(&years) {
            terms.push(years);
        }
    }
    terms
}

/// Clamp a manual discount percent to the range the engine accepts
pub fn clamp_discount(raw: f64) -> f64 {
    raw.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tier_list_order_and_dedup() {
        let tiers = parse_tier_list("Dispatch, Basic,Dispatch, Route Builder");
        assert_eq!(tiers, vec!["Dispatch", "Basic", "Route Builder"]);
    }

    #[test]
    fn test_parse_tier_list_empty_entries() {
        assert!(parse_tier_list("").is_empty());
        assert!(parse_tier_list(" , ,").is_empty());
    }

    #[test]
    fn test_parse_term_list_order_and_dedup() {
        assert_eq!(parse_term_list("5,1,3,5"), vec![5, 1, 3]);
    }

    #[test]
    fn test_parse_term_list_drops_invalid_entries() {
        assert_eq!(parse_term_list("1,0,abc,3"), vec![1, 3]);
        assert!(parse_term_list("").is_empty());
    }

    #[test]
    fn test_clamp_discount() {
        assert_eq!(clamp_discount(-5.0), 0.0);
        assert_eq!(clamp_discount(12.5), 12.5);
        assert_eq!(clamp_discount(250.0), 100.0);
    }

    #[test]
    fn test_is_complete() {
        let mut selection = Selection {
            users: 10,
            tiers: vec!["Basic".to_string()],
            terms: vec![1],
            manual_discount: None,
            show_details: false,
        };
        assert!(selection.is_complete());

        selection.users = 0;
        assert!(!selection.is_complete());

        selection.users = 10;
        selection.tiers.clear();
        assert!(!selection.is_complete());
    }
}
