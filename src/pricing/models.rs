use serde::{Deserialize, Serialize};

/// A named product tier with its per-user-per-year list price
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierPrice {
    pub name: String,
    pub unit_price: f64,
}

/// Immutable tier → unit price table for one calculator instance
///
/// Tiers keep their configured order; lookups are by name.
#[derive(Debug, Clone)]
pub struct PriceBook {
    tiers: Vec<TierPrice>,
}

impl PriceBook {
    pub fn new(tiers: Vec<TierPrice>) -> Self {
        Self { tiers }
    }

    /// Look up the per-user-per-year price for a tier
    pub fn unit_price(&self, name: &str) -> Option<f64> {
        self.tiers
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.unit_price)
    }

    /// All configured tiers, in configuration order
    pub fn tiers(&self) -> &[TierPrice] {
        &self.tiers
    }
}

/// Volume discount breakpoint: `percent` applies from `min_users` up
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VolumeBreak {
    pub min_users: u32,
    pub percent: f64,
}

/// Discount schedule: volume breakpoints plus the multi-year term discount
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountSchedule {
    /// Breakpoints in increasing `min_users` order; highest threshold met wins
    pub volume: Vec<VolumeBreak>,
    /// Term lengths (years) that qualify for the term discount
    pub term_years: Vec<u32>,
    /// Flat discount percent for qualifying terms
    pub term_percent: f64,
}

impl DiscountSchedule {
    /// Volume discount percent for a user count
    ///
    /// Breakpoints are mutually exclusive: the one with the highest
    /// `min_users` at or below `users` applies, never a sum of several.
    pub fn volume_percent(&self, users: u32) -> f64 {
        self.volume
            .iter()
            .filter(|b| users >= b.min_users)
            .max_by_key(|b| b.min_users)
            .map_or(0.0, |b| b.percent)
    }

    /// Term discount percent for a contract length
    pub fn term_percent_for(&self, years: u32) -> f64 {
        if self.term_years.contains(&years) {
            self.term_percent
        } else {
            0.0
        }
    }
}

impl Default for DiscountSchedule {
    fn default() -> Self {
        Self {
            volume: vec![
                VolumeBreak { min_users: 10, percent: 10.0 },
                VolumeBreak { min_users: 25, percent: 15.0 },
                VolumeBreak { min_users: 50, percent: 20.0 },
            ],
            term_years: vec![3, 5],
            term_percent: 10.0,
        }
    }
}

/// Priced result for one (tier, term) cell
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub tier: String,
    pub users: u32,
    pub years: u32,
    /// Pre-discount list price: unit price × users × years
    pub base_price: f64,
    /// Volume discount percent applied (0 when a manual discount is active)
    pub volume_discount: f64,
    /// Term discount percent applied (0 when a manual discount is active)
    pub term_discount: f64,
    /// Manual override percent, when one was supplied
    pub manual_discount: Option<f64>,
    /// Total discount percent under the active policy
    pub discount_percent: f64,
    pub discount_amount: f64,
    pub final_price: f64,
    pub per_user_per_year: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> PriceBook {
        PriceBook::new(vec![
            TierPrice { name: "Basic".to_string(), unit_price: 149.99 },
            TierPrice { name: "Dispatch".to_string(), unit_price: 249.99 },
        ])
    }

    #[test]
    fn test_unit_price_lookup() {
        assert_eq!(book().unit_price("Dispatch"), Some(249.99));
        assert_eq!(book().unit_price("Enterprise"), None);
    }

    #[test]
    fn test_tiers_preserve_order() {
        let book = book();
        let names: Vec<&str> = book.tiers().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Basic", "Dispatch"]);
    }

    #[test]
    fn test_volume_percent_breakpoints() {
        let schedule = DiscountSchedule::default();
        assert_eq!(schedule.volume_percent(1), 0.0);
        assert_eq!(schedule.volume_percent(9), 0.0);
        assert_eq!(schedule.volume_percent(10), 10.0);
        assert_eq!(schedule.volume_percent(24), 10.0);
        assert_eq!(schedule.volume_percent(25), 15.0);
        assert_eq!(schedule.volume_percent(49), 15.0);
        assert_eq!(schedule.volume_percent(50), 20.0);
        assert_eq!(schedule.volume_percent(500), 20.0);
    }

    #[test]
    fn test_term_percent_qualifying_years() {
        let schedule = DiscountSchedule::default();
        assert_eq!(schedule.term_percent_for(1), 0.0);
        assert_eq!(schedule.term_percent_for(2), 0.0);
        assert_eq!(schedule.term_percent_for(3), 10.0);
        assert_eq!(schedule.term_percent_for(4), 0.0);
        assert_eq!(schedule.term_percent_for(5), 10.0);
    }
}
