//! # Dashboard Command
//!
//! Computes and renders the front-desk dashboard: the three summary
//! cards (bookings, available rooms, revenue) and the bookings-per-
//! category chart.
//!
//! Always a fresh fold over a fresh snapshot - refreshing the dashboard
//! re-reads the store, so the numbers can't go stale.

use tracing::debug;

use lodge_core::{aggregate, DashboardMetrics};
use lodge_db::Database;

use crate::config::AppConfig;
use crate::error::AppError;

/// Widest bar in the category chart, in characters.
const CHART_WIDTH: usize = 40;

/// Computes dashboard metrics from the full booking set.
pub async fn compute_dashboard(
    db: &Database,
    config: &AppConfig,
) -> Result<DashboardMetrics, AppError> {
    debug!("compute_dashboard command");

    let bookings = db.bookings().list_all().await?;
    Ok(aggregate(&bookings, config.total_inventory))
}

/// Renders the dashboard for the terminal.
pub fn render_dashboard(metrics: &DashboardMetrics) -> String {
    let mut out = String::new();

    out.push_str(&format!("Total Bookings : {}\n", metrics.total_bookings));
    out.push_str(&format!("Available Rooms: {}\n", metrics.available_rooms));
    out.push_str(&format!("Total Revenue  : {}\n", metrics.revenue));
    out.push('\n');

    out.push_str("Bookings per Room Type\n");
    if metrics.bookings_by_category.is_empty() {
        out.push_str("No data to display yet.\n");
        return out;
    }

    // Scale every bar against the busiest category
    let max_count = metrics
        .bookings_by_category
        .values()
        .copied()
        .max()
        .unwrap_or(1);
    let label_width = metrics
        .bookings_by_category
        .keys()
        .map(|category| category.chars().count())
        .max()
        .unwrap_or(0);

    for (category, count) in &metrics.bookings_by_category {
        let bar_len = (count * CHART_WIDTH).div_ceil(max_count);
        out.push_str(&format!(
            "{:<label_width$} | {} {}\n",
            category,
            "#".repeat(bar_len),
            count
        ));
    }

    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::booking::{book_room, BookingRequest};
    use lodge_db::DbConfig;

    fn request(category: &str) -> BookingRequest {
        BookingRequest {
            guest_name: "Dana Reyes".to_string(),
            phone: "555-0100".to_string(),
            email: "dana@example.com".to_string(),
            document_number: "P1234567".to_string(),
            room_category: category.to_string(),
            nights: 2,
        }
    }

    #[tokio::test]
    async fn test_compute_dashboard_on_empty_store() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let config = AppConfig::default();

        let metrics = compute_dashboard(&db, &config).await.unwrap();
        assert_eq!(metrics.total_bookings, 0);
        assert_eq!(metrics.available_rooms, 30);
        assert!(metrics.bookings_by_category.is_empty());
    }

    #[tokio::test]
    async fn test_compute_dashboard_counts_by_category() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let config = AppConfig::default();

        book_room(&db, &config, request("Single")).await.unwrap();
        book_room(&db, &config, request("Single")).await.unwrap();
        book_room(&db, &config, request("Suite")).await.unwrap();

        let metrics = compute_dashboard(&db, &config).await.unwrap();
        assert_eq!(metrics.total_bookings, 3);
        assert_eq!(metrics.available_rooms, 27);
        assert_eq!(metrics.bookings_by_category.get("Single"), Some(&2));
        assert_eq!(metrics.bookings_by_category.get("Suite"), Some(&1));
    }

    #[test]
    fn test_render_empty_shows_placeholder() {
        let metrics = aggregate(&[], 30);
        let out = render_dashboard(&metrics);
        assert!(out.contains("No data to display yet."));
        assert!(out.contains("Available Rooms: 30"));
    }

    #[test]
    fn test_render_bars_scale_to_busiest_category() {
        use chrono::Utc;
        use lodge_core::Booking;

        let now = Utc::now();
        let booking = |category: &str| Booking {
            id: "1".to_string(),
            guest_name: "G".to_string(),
            phone: "5".to_string(),
            email: "g@example.com".to_string(),
            document_number: "D".to_string(),
            room_category: category.to_string(),
            nights: 1,
            total_cents: 5800,
            created_at: now,
            updated_at: now,
        };

        let set = vec![
            booking("Single"),
            booking("Single"),
            booking("Single"),
            booking("Single"),
            booking("Suite"),
        ];
        let out = render_dashboard(&aggregate(&set, 30));

        // Busiest bar is full width; the 1-of-4 bar is a quarter of it
        assert!(out.contains(&"#".repeat(CHART_WIDTH)));
        assert!(out.contains(&format!("| {} 1", "#".repeat(CHART_WIDTH / 4))));
    }
}
