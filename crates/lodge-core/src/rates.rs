//! # Rate Table
//!
//! Static mapping from room category to nightly rate.
//!
//! Loaded once from configuration at process start and immutable from
//! then on. Lookups are total: a category that has been removed from
//! configuration (or never existed) valuates at a zero rate rather than
//! failing, so legacy bookings keep pricing cleanly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::money::Money;

/// Immutable category → nightly rate mapping.
///
/// ## Example
/// ```rust
/// use lodge_core::money::Money;
/// use lodge_core::rates::RateTable;
///
/// let rates = RateTable::from_pairs([
///     ("Single", Money::from_major(50)),
///     ("Double", Money::from_major(80)),
/// ]);
///
/// assert_eq!(rates.rate_for("Single").cents(), 5000);
/// assert_eq!(rates.rate_for("Penthouse").cents(), 0); // unknown: zero
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    rates: BTreeMap<String, Money>,
}

impl RateTable {
    /// Builds a rate table from (category, nightly rate) pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Money)>,
        S: Into<String>,
    {
        RateTable {
            rates: pairs
                .into_iter()
                .map(|(category, rate)| (category.into(), rate))
                .collect(),
        }
    }

    /// The stock configuration: Single $50, Double $80, Suite $120.
    pub fn standard() -> Self {
        RateTable::from_pairs([
            ("Single", Money::from_major(50)),
            ("Double", Money::from_major(80)),
            ("Suite", Money::from_major(120)),
        ])
    }

    /// Returns the nightly rate for a category.
    ///
    /// Unknown categories return zero. This is a valuation edge case,
    /// not an error: a booking whose category was retired from
    /// configuration still prices (at zero) instead of blocking
    /// receipts and dashboards.
    pub fn rate_for(&self, category: &str) -> Money {
        self.rates.get(category).copied().unwrap_or(Money::zero())
    }

    /// True when the category is configured.
    pub fn contains(&self, category: &str) -> bool {
        self.rates.contains_key(category)
    }

    /// Configured categories in sorted order (for form choices and
    /// config listings).
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    /// Number of configured categories.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// True when no categories are configured.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_for_known_categories() {
        let rates = RateTable::standard();
        assert_eq!(rates.rate_for("Single").cents(), 5000);
        assert_eq!(rates.rate_for("Double").cents(), 8000);
        assert_eq!(rates.rate_for("Suite").cents(), 12000);
    }

    #[test]
    fn test_rate_for_unknown_category_is_zero() {
        let rates = RateTable::standard();
        assert_eq!(rates.rate_for("Penthouse"), Money::zero());
        assert_eq!(rates.rate_for(""), Money::zero());
        // Lookups are case-sensitive: "single" is not "Single"
        assert_eq!(rates.rate_for("single"), Money::zero());
    }

    #[test]
    fn test_categories_sorted() {
        let rates = RateTable::standard();
        let categories: Vec<&str> = rates.categories().collect();
        assert_eq!(categories, vec!["Double", "Single", "Suite"]);
    }

    #[test]
    fn test_empty_table() {
        let rates = RateTable::default();
        assert!(rates.is_empty());
        assert_eq!(rates.rate_for("Single"), Money::zero());
    }
}
