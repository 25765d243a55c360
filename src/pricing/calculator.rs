use crate::error::AppError;
use crate::pricing::models::{DiscountSchedule, PriceBook, Quote};

/// Calculator for pricing (tier, term) pairs against a price book
///
/// Pure: a quote is a deterministic function of the inputs and the
/// configured schedule, with no side effects.
pub struct QuoteCalculator {
    price_book: PriceBook,
    discounts: DiscountSchedule,
}

impl QuoteCalculator {
    /// Create a new calculator
    pub fn new(price_book: PriceBook, discounts: DiscountSchedule) -> Self {
        Self { price_book, discounts }
    }

    /// The price book this calculator quotes from
    pub fn price_book(&self) -> &PriceBook {
        &self.price_book
    }

    /// The discount schedule applied to automatic quotes
    pub fn discounts(&self) -> &DiscountSchedule {
        &self.discounts
    }

    /// Price one (tier, term) pair for a user count
    ///
    /// A supplied manual discount replaces the automatic volume and term
    /// discounts entirely; it must already be clamped to [0, 100] by the
    /// caller. An unknown tier means the selection and the price book are
    /// out of sync and is fatal to the render pass.
    pub fn quote(
        &self,
        tier: &str,
        users: u32,
        years: u32,
        manual_discount: Option<f64>,
    ) -> Result<Quote, AppError> {
        let unit_price = self
            .price_book
            .unit_price(tier)
            .ok_or_else(|| AppError::UnknownTier(tier.to_string()))?;

        if users == 0 {
            return Err(AppError::InvalidInput(
                "user count must be positive".to_string(),
            ));
        }
        if years == 0 {
            return Err(AppError::InvalidInput(
                "term length must be positive".to_string(),
            ));
        }

        let base_price = unit_price * users as f64 * years as f64;

        let (volume_discount, term_discount, discount_percent) = match manual_discount {
            Some(manual) => (0.0, 0.0, manual),
            None => {
                let volume = self.discounts.volume_percent(users);
                let term = self.discounts.term_percent_for(years);
                (volume, term, volume + term)
            }
        };

        let discount_amount = base_price * discount_percent / 100.0;
        let final_price = base_price - discount_amount;
        let per_user_per_year = final_price / (users as f64 * years as f64);

        Ok(Quote {
            tier: tier.to_string(),
            users,
            years,
            base_price,
            volume_discount,
            term_discount,
            manual_discount,
            discount_percent,
            discount_amount,
            final_price,
            per_user_per_year,
        })
    }
}
