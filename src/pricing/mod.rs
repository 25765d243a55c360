pub mod calculator;
pub mod matrix;
pub mod models;

pub use calculator::QuoteCalculator;
pub use matrix::{MatrixRow, PriceMatrix};
pub use models::{DiscountSchedule, PriceBook, Quote, TierPrice, VolumeBreak};
