use serde::Serialize;

use crate::error::AppError;
use crate::pricing::calculator::QuoteCalculator;
use crate::pricing::models::Quote;
use crate::selection::Selection;

/// One row of the matrix: a tier priced across every selected term
#[derive(Debug, Clone, Serialize)]
pub struct MatrixRow {
    pub tier: String,
    pub cells: Vec<Quote>,
}

/// Ordered grid of quotes for one render pass
///
/// Rows follow tier selection order, columns follow term selection order.
/// The matrix is computed, rendered and discarded per pass; nothing is
/// cached across passes.
#[derive(Debug, Clone, Serialize)]
pub struct PriceMatrix {
    pub users: u32,
    pub terms: Vec<u32>,
    pub rows: Vec<MatrixRow>,
}

impl PriceMatrix {
    /// Price the full (tier × term) cross-product of a selection
    pub fn build(
        calculator: &QuoteCalculator,
        selection: &Selection,
    ) -> Result<Self, AppError> {
        let mut rows = Vec::with_capacity(selection.tiers.len());

        for tier in &selection.tiers {
            let mut cells = Vec::with_capacity(selection.terms.len());
            for &years in &selection.terms {
                cells.push(calculator.quote(
                    tier,
                    selection.users,
                    years,
                    selection.manual_discount,
                )?);
            }
            rows.push(MatrixRow { tier: tier.clone(), cells });
        }

        Ok(Self {
            users: selection.users,
            terms: selection.terms.clone(),
            rows,
        })
    }
}
