//! # Pricing Engine
//!
//! Computes the charge breakdown for a stay: subtotal, tax, grand total.
//!
//! ## Rounding Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal = rate_for(category) × nights        (exact in cents)         │
//! │  tax      = round(subtotal × rate)             (half-up, to the cent)   │
//! │  grand    = subtotal + tax                     (whole cents already)    │
//! │                                                                         │
//! │  Rounding happens at EACH step, never deferred to the end. Stored      │
//! │  booking totals were produced step-by-step, and reconciliation         │
//! │  compares against them to the cent: a different rounding order would   │
//! │  flag phantom divergences on perfectly good records.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure function of its inputs and the rate table. No clock, no I/O.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::rates::RateTable;
use crate::types::TaxRate;

/// The computed charge breakdown for one stay.
///
/// Derived, never persisted. The grand total is what gets written back
/// to the record store when a booking is created or edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayQuote {
    /// Nightly rate the table held for the category (zero if unknown).
    pub nightly_rate: Money,

    /// Number of nights priced.
    pub nights: i64,

    /// Rate × nights, before tax.
    pub subtotal: Money,

    /// Tax on the subtotal, rounded half-up to the cent.
    pub tax: Money,

    /// Subtotal + tax. The amount charged to the guest.
    pub grand_total: Money,
}

/// Prices a stay.
///
/// ## Preconditions
/// - `nights >= 1` - user input is validated before it gets here, so a
///   violation is a programming error surfaced as `InvalidNights`
/// - `tax_rate` in `[0%, 100%)` - violations surface as `InvalidTaxRate`
///
/// Unknown categories are NOT an error: they price at a zero nightly
/// rate (see [`RateTable::rate_for`]).
///
/// ## Example
/// ```rust
/// use lodge_core::pricing::quote;
/// use lodge_core::rates::RateTable;
/// use lodge_core::types::TaxRate;
///
/// let q = quote(&RateTable::standard(), "Single", 3, TaxRate::from_bps(1600)).unwrap();
/// assert_eq!(q.subtotal.cents(), 15000);    // $150.00
/// assert_eq!(q.tax.cents(), 2400);          // $24.00
/// assert_eq!(q.grand_total.cents(), 17400); // $174.00
/// ```
pub fn quote(
    rates: &RateTable,
    category: &str,
    nights: i64,
    tax_rate: TaxRate,
) -> CoreResult<StayQuote> {
    if nights < 1 {
        return Err(CoreError::InvalidNights { nights });
    }
    if !tax_rate.is_valid() {
        return Err(CoreError::InvalidTaxRate {
            bps: tax_rate.bps(),
        });
    }

    let nightly_rate = rates.rate_for(category);
    let subtotal = nightly_rate * nights;
    let tax = subtotal.tax(tax_rate);
    let grand_total = subtotal + tax;

    Ok(StayQuote {
        nightly_rate,
        nights,
        subtotal,
        tax,
        grand_total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VAT: TaxRate = TaxRate::from_bps(1600);

    #[test]
    fn test_single_three_nights() {
        // Single (rate 50), 3 nights, 16% tax:
        // subtotal 150.00, tax 24.00, grand total 174.00
        let q = quote(&RateTable::standard(), "Single", 3, VAT).unwrap();
        assert_eq!(q.nightly_rate.cents(), 5000);
        assert_eq!(q.subtotal.cents(), 15000);
        assert_eq!(q.tax.cents(), 2400);
        assert_eq!(q.grand_total.cents(), 17400);
    }

    #[test]
    fn test_suite_two_nights() {
        // Suite (rate 120), 2 nights, 16% tax:
        // subtotal 240.00, tax 38.40, grand total 278.40
        let q = quote(&RateTable::standard(), "Suite", 2, VAT).unwrap();
        assert_eq!(q.subtotal.cents(), 24000);
        assert_eq!(q.tax.cents(), 3840);
        assert_eq!(q.grand_total.cents(), 27840);
    }

    #[test]
    fn test_grand_total_is_subtotal_plus_tax() {
        let rates = RateTable::standard();
        for category in ["Single", "Double", "Suite", "Penthouse"] {
            for nights in 1..=14 {
                for bps in [0u32, 700, 825, 1600, 2500] {
                    let q = quote(&rates, category, nights, TaxRate::from_bps(bps)).unwrap();
                    assert_eq!(q.grand_total, q.subtotal + q.tax);
                    assert_eq!(q.subtotal, q.nightly_rate * nights);
                }
            }
        }
    }

    #[test]
    fn test_unknown_category_prices_at_zero() {
        let q = quote(&RateTable::standard(), "Penthouse", 5, VAT).unwrap();
        assert_eq!(q.nightly_rate, Money::zero());
        assert_eq!(q.subtotal, Money::zero());
        assert_eq!(q.tax, Money::zero());
        assert_eq!(q.grand_total, Money::zero());
    }

    #[test]
    fn test_invalid_nights_rejected() {
        let rates = RateTable::standard();
        assert_eq!(
            quote(&rates, "Single", 0, VAT),
            Err(CoreError::InvalidNights { nights: 0 })
        );
        assert_eq!(
            quote(&rates, "Single", -3, VAT),
            Err(CoreError::InvalidNights { nights: -3 })
        );
    }

    #[test]
    fn test_invalid_tax_rate_rejected() {
        let rates = RateTable::standard();
        assert_eq!(
            quote(&rates, "Single", 1, TaxRate::from_bps(10_000)),
            Err(CoreError::InvalidTaxRate { bps: 10_000 })
        );
    }

    #[test]
    fn test_zero_tax_rate_is_valid() {
        // A 0% policy is a legitimate configuration, not an error
        let q = quote(&RateTable::standard(), "Double", 2, TaxRate::zero()).unwrap();
        assert_eq!(q.tax, Money::zero());
        assert_eq!(q.grand_total, q.subtotal);
    }

    #[test]
    fn test_fractional_rate_rounds_per_step() {
        // Double (rate 80), 1 night, 8.25%:
        // subtotal 8000 cents, tax = round(8000 * 0.0825) = round(660.0) = 660
        let q = quote(
            &RateTable::standard(),
            "Double",
            1,
            TaxRate::from_bps(825),
        )
        .unwrap();
        assert_eq!(q.tax.cents(), 660);
        assert_eq!(q.grand_total.cents(), 8660);
    }
}
