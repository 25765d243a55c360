//! Command implementations for the CLI
//!
//! This module contains the implementation of all CLI commands:
//! - quote: render the price matrix for a selection
//! - tiers: display the configured price book and discount schedule
//! - test: test configuration validity

pub mod quote;
pub mod test;
pub mod tiers;
