//! # Reconciliation Checker
//!
//! Compares a booking's stored total against a freshly recomputed one.
//!
//! Rates and tax policy can change after a booking is written; the
//! stored total then reflects a policy that no longer exists and cannot
//! be recovered (the rate used was never persisted). This module REPORTS
//! the discrepancy and nothing else: the stored financial record is
//! never corrected by reporting code, only surfaced to a human.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Divergence tolerance: differences of at most one cent are treated as
/// agreement. Matches the `> $0.01` comparison the stored totals were
/// audited with historically.
pub const DEFAULT_TOLERANCE: Money = Money::from_cents(1);

/// Outcome of comparing a stored total with a recomputed one.
///
/// Derived on every receipt generation, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconciliation {
    /// The total on record.
    pub stored: Money,

    /// The total under current rates and tax policy.
    pub recomputed: Money,

    /// True when the absolute difference exceeds the tolerance.
    pub diverges: bool,
}

impl Reconciliation {
    /// Absolute difference between the two totals.
    pub fn difference(&self) -> Money {
        (self.stored - self.recomputed).abs()
    }
}

/// Compares `stored` against `recomputed` with the default one-cent
/// tolerance.
///
/// Total function: zero-valued inputs are a valid comparison (a free
/// stay reconciles against a free stay).
///
/// ## Example
/// ```rust
/// use lodge_core::money::Money;
/// use lodge_core::reconcile::reconcile;
///
/// // A pre-tax legacy record against today's taxed total
/// let r = reconcile(Money::from_cents(15000), Money::from_cents(17400));
/// assert!(r.diverges);
/// ```
pub fn reconcile(stored: Money, recomputed: Money) -> Reconciliation {
    reconcile_with_tolerance(stored, recomputed, DEFAULT_TOLERANCE)
}

/// Compares `stored` against `recomputed` with an explicit tolerance.
pub fn reconcile_with_tolerance(
    stored: Money,
    recomputed: Money,
    tolerance: Money,
) -> Reconciliation {
    let diverges = (stored - recomputed).abs() > tolerance;
    Reconciliation {
        stored,
        recomputed,
        diverges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_totals_agree() {
        // 174.00 vs 174.00: no divergence
        let r = reconcile(Money::from_cents(17400), Money::from_cents(17400));
        assert!(!r.diverges);
        assert_eq!(r.difference(), Money::zero());
    }

    #[test]
    fn test_legacy_pre_tax_record_diverges() {
        // 150.00 stored (pre-tax legacy) vs 174.00 recomputed
        let r = reconcile(Money::from_cents(15000), Money::from_cents(17400));
        assert!(r.diverges);
        assert_eq!(r.stored.cents(), 15000);
        assert_eq!(r.recomputed.cents(), 17400);
        assert_eq!(r.difference().cents(), 2400);
    }

    #[test]
    fn test_one_cent_inside_tolerance() {
        // Exactly one cent apart: within tolerance, not a divergence
        let r = reconcile(Money::from_cents(17400), Money::from_cents(17401));
        assert!(!r.diverges);

        // Two cents apart: diverges
        let r = reconcile(Money::from_cents(17400), Money::from_cents(17402));
        assert!(r.diverges);
    }

    #[test]
    fn test_divergence_is_symmetric() {
        let pairs = [
            (0i64, 0i64),
            (15000, 17400),
            (17400, 17401),
            (17400, 17402),
            (1, 0),
        ];
        for (a, b) in pairs {
            let ab = reconcile(Money::from_cents(a), Money::from_cents(b));
            let ba = reconcile(Money::from_cents(b), Money::from_cents(a));
            assert_eq!(ab.diverges, ba.diverges, "asymmetric for {a} vs {b}");
        }
    }

    #[test]
    fn test_zero_valued_inputs_are_valid() {
        // A free stay reconciles cleanly
        let r = reconcile(Money::zero(), Money::zero());
        assert!(!r.diverges);
    }

    #[test]
    fn test_custom_tolerance() {
        let stored = Money::from_cents(17400);
        let recomputed = Money::from_cents(17450);

        // 50 cents apart: diverges at default tolerance
        assert!(reconcile(stored, recomputed).diverges);

        // But not at a one-dollar tolerance
        let r = reconcile_with_tolerance(stored, recomputed, Money::from_cents(100));
        assert!(!r.diverges);
    }
}
