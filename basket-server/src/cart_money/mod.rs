//! Cart ledger arithmetic using rust_decimal for precision
//!
//! The cart's `total` and `savings` are derived values: after every
//! mutation they are recomputed from scratch over the full line set,
//! never updated incrementally. All arithmetic is done using `Decimal`
//! internally, then converted to `f64` rounded to 2 decimal places for
//! storage/serialization.

use rust_decimal::prelude::*;
use shared::models::CartLineDetail;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub(crate) fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub(crate) fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Recomputed cart totals
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartTotals {
    pub total: f64,
    pub savings: f64,
}

/// Recompute `(total, savings)` over the full line set.
///
/// - `total = Σ(unit_price × qty)`
/// - `savings = Σ(max(0, reference − unit_price) × qty)`
///
/// `reference` is the product's current `compare_at_price` when present,
/// else the line's own `unit_price` (contributing zero savings).
pub fn recompute(lines: &[CartLineDetail]) -> CartTotals {
    let mut total = Decimal::ZERO;
    let mut savings = Decimal::ZERO;

    for line in lines {
        let qty = Decimal::from(line.qty);
        let unit_price = to_decimal(line.unit_price);
        total += unit_price * qty;

        let reference = line.compare_at_price.map(to_decimal).unwrap_or(unit_price);
        savings += (reference - unit_price).max(Decimal::ZERO) * qty;
    }

    CartTotals {
        total: to_f64(total),
        savings: to_f64(savings),
    }
}
