//! # Dashboard Aggregator
//!
//! Folds a booking set into the front-desk dashboard numbers.
//!
//! Always a fresh fold over a complete snapshot: nothing is maintained
//! incrementally, so the metrics can never go stale relative to the
//! records they were computed from. Revenue sums STORED totals - the
//! amounts actually charged - not recomputed ones; recomputation under
//! current policy is the receipt path's job.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::money::Money;
use crate::types::Booking;

/// Summary metrics for the dashboard cards and chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// Number of bookings on record.
    pub total_bookings: usize,

    /// Sum of stored grand totals.
    pub revenue: Money,

    /// Rooms still free: inventory minus bookings, floored at zero.
    /// Overbooking shows as zero available, never a negative count.
    pub available_rooms: u32,

    /// Booking count per observed category. Categories with no bookings
    /// are absent, not zero-filled: an empty map means "no chart data".
    pub bookings_by_category: BTreeMap<String, usize>,
}

impl DashboardMetrics {
    /// True when there is nothing to chart.
    pub fn is_empty(&self) -> bool {
        self.total_bookings == 0
    }
}

/// Aggregates a booking snapshot into dashboard metrics.
///
/// Pure and deterministic for a given snapshot. The empty set is a
/// defined outcome (zero counts, full inventory available, empty
/// histogram), not an error.
///
/// ## Example
/// ```rust
/// use lodge_core::metrics::aggregate;
///
/// let m = aggregate(&[], 30);
/// assert_eq!(m.total_bookings, 0);
/// assert_eq!(m.available_rooms, 30);
/// assert!(m.bookings_by_category.is_empty());
/// ```
pub fn aggregate(bookings: &[Booking], total_inventory: u32) -> DashboardMetrics {
    let mut revenue = Money::zero();
    let mut bookings_by_category: BTreeMap<String, usize> = BTreeMap::new();

    for booking in bookings {
        revenue += booking.stored_total();
        *bookings_by_category
            .entry(booking.room_category.clone())
            .or_insert(0) += 1;
    }

    let total_bookings = bookings.len();
    let available_rooms = total_inventory.saturating_sub(total_bookings as u32);

    DashboardMetrics {
        total_bookings,
        revenue,
        available_rooms,
        bookings_by_category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn booking(category: &str, total_cents: i64) -> Booking {
        let now = Utc::now();
        Booking {
            id: "1".to_string(),
            guest_name: "Dana Reyes".to_string(),
            phone: "555-0100".to_string(),
            email: "dana@example.com".to_string(),
            document_number: "P1234567".to_string(),
            room_category: category.to_string(),
            nights: 2,
            total_cents,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_empty_set() {
        let m = aggregate(&[], 30);
        assert_eq!(m.total_bookings, 0);
        assert_eq!(m.revenue, Money::zero());
        assert_eq!(m.available_rooms, 30);
        assert!(m.bookings_by_category.is_empty());
        assert!(m.is_empty());
    }

    #[test]
    fn test_mixed_categories() {
        // 12 bookings: Single x5, Double x4, Suite x3, inventory 30
        let mut set = Vec::new();
        for _ in 0..5 {
            set.push(booking("Single", 17400));
        }
        for _ in 0..4 {
            set.push(booking("Double", 27840));
        }
        for _ in 0..3 {
            set.push(booking("Suite", 41760));
        }

        let m = aggregate(&set, 30);
        assert_eq!(m.total_bookings, 12);
        assert_eq!(m.available_rooms, 18);
        assert_eq!(m.revenue.cents(), 5 * 17400 + 4 * 27840 + 3 * 41760);

        let histogram: Vec<(&str, usize)> = m
            .bookings_by_category
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect();
        assert_eq!(
            histogram,
            vec![("Double", 4), ("Single", 5), ("Suite", 3)]
        );
    }

    #[test]
    fn test_available_never_negative() {
        let set: Vec<Booking> = (0..8).map(|_| booking("Single", 5000)).collect();
        let m = aggregate(&set, 5);
        assert_eq!(m.available_rooms, 0);
    }

    #[test]
    fn test_zero_categories_omitted() {
        // Only Suite bookings: Single/Double must not appear as zeros
        let set = vec![booking("Suite", 41760)];
        let m = aggregate(&set, 30);
        assert_eq!(m.bookings_by_category.len(), 1);
        assert_eq!(m.bookings_by_category.get("Suite"), Some(&1));
        assert_eq!(m.bookings_by_category.get("Single"), None);
    }

    #[test]
    fn test_revenue_sums_stored_totals_verbatim() {
        // Stored totals are summed as-is, even if they would not
        // reprice to the same value today
        let set = vec![booking("Single", 15000), booking("Single", 17400)];
        let m = aggregate(&set, 30);
        assert_eq!(m.revenue.cents(), 32400);
    }
}
