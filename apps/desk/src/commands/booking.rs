//! # Booking Commands
//!
//! Create, edit, cancel and find bookings.
//!
//! Booking and editing both price the stay under the CURRENT rate table
//! and tax policy and persist the resulting grand total. That stored
//! total is the historical record receipts later reconcile against.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use lodge_core::validation::{
    validate_document_number, validate_email, validate_guest_name, validate_nights,
    validate_phone, validate_room_category, validate_search_keyword,
};
use lodge_core::{format_reference, quote, Booking, StayQuote};
use lodge_db::{Database, NewBooking};

use crate::config::AppConfig;
use crate::error::AppError;

// =============================================================================
// Request / Response
// =============================================================================

/// Operator-typed booking details, exactly as entered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub guest_name: String,
    pub phone: String,
    pub email: String,
    pub document_number: String,
    pub room_category: String,
    pub nights: i64,
}

/// Outcome of a booking create or edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    /// Display reference for the stored booking.
    pub reference: String,

    /// The stored record.
    pub booking: Booking,

    /// The charge breakdown that produced the stored total.
    pub quote: StayQuote,
}

// =============================================================================
// Commands
// =============================================================================

/// Books a room: validates input, prices the stay under current policy,
/// persists the record.
pub async fn book_room(
    db: &Database,
    config: &AppConfig,
    request: BookingRequest,
) -> Result<BookingResponse, AppError> {
    debug!(guest = %request.guest_name, "book_room command");

    let (new, stay_quote) = price_request(config, &request)?;
    let booking = db.bookings().insert(&new).await?;

    info!(
        id = %booking.id,
        total = %stay_quote.grand_total,
        "Room booked"
    );

    Ok(BookingResponse {
        reference: format_reference(&booking.id),
        booking,
        quote: stay_quote,
    })
}

/// Edits a booking. All fields are rewritten and the stored total is
/// recomputed under the current policy, replacing the historical one.
pub async fn update_booking(
    db: &Database,
    config: &AppConfig,
    id: &str,
    request: BookingRequest,
) -> Result<BookingResponse, AppError> {
    debug!(id = %id, "update_booking command");

    let (new, stay_quote) = price_request(config, &request)?;
    db.bookings().update(id, &new).await?;

    let booking = db
        .bookings()
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Booking", id))?;

    info!(id = %id, total = %stay_quote.grand_total, "Booking updated");

    Ok(BookingResponse {
        reference: format_reference(&booking.id),
        booking,
        quote: stay_quote,
    })
}

/// Cancels a booking, removing the record.
pub async fn cancel_booking(db: &Database, id: &str) -> Result<(), AppError> {
    debug!(id = %id, "cancel_booking command");

    db.bookings().delete(id).await?;

    info!(id = %id, "Booking deleted");
    Ok(())
}

/// Finds bookings whose guest name or document number contains the
/// keyword.
pub async fn search_bookings(db: &Database, keyword: &str) -> Result<Vec<Booking>, AppError> {
    let keyword = validate_search_keyword(keyword).map_err(|e| AppError::validation(e.to_string()))?;

    Ok(db.bookings().search(&keyword).await?)
}

/// Lists every booking on record.
pub async fn list_bookings(db: &Database) -> Result<Vec<Booking>, AppError> {
    Ok(db.bookings().list_all().await?)
}

// =============================================================================
// Helpers
// =============================================================================

/// Validates a request and prices it under current policy.
///
/// All fields are checked before anything is persisted; the grand total
/// of the returned quote is what gets stored.
fn price_request(
    config: &AppConfig,
    request: &BookingRequest,
) -> Result<(NewBooking, StayQuote), AppError> {
    let guest_name =
        validate_guest_name(&request.guest_name).map_err(|e| AppError::validation(e.to_string()))?;
    let phone = validate_phone(&request.phone).map_err(|e| AppError::validation(e.to_string()))?;
    let email = validate_email(&request.email).map_err(|e| AppError::validation(e.to_string()))?;
    let document_number = validate_document_number(&request.document_number)
        .map_err(|e| AppError::validation(e.to_string()))?;
    let room_category = validate_room_category(&request.room_category)
        .map_err(|e| AppError::validation(e.to_string()))?;
    validate_nights(request.nights).map_err(|e| AppError::validation(e.to_string()))?;

    let stay_quote = quote(
        &config.rate_table(),
        &room_category,
        request.nights,
        config.tax_rate(),
    )?;

    let new = NewBooking {
        guest_name,
        phone,
        email,
        document_number,
        room_category,
        nights: request.nights,
        total_cents: stay_quote.grand_total.cents(),
    };

    Ok((new, stay_quote))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use lodge_db::DbConfig;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn request(category: &str, nights: i64) -> BookingRequest {
        BookingRequest {
            guest_name: "Dana Reyes".to_string(),
            phone: "555-0100".to_string(),
            email: "dana@example.com".to_string(),
            document_number: "P1234567".to_string(),
            room_category: category.to_string(),
            nights,
        }
    }

    #[tokio::test]
    async fn test_book_room_stores_taxed_total() {
        let db = test_db().await;
        let config = AppConfig::default();

        let response = book_room(&db, &config, request("Single", 3)).await.unwrap();

        assert_eq!(response.reference, "HB-000001");
        assert_eq!(response.quote.subtotal.cents(), 15000);
        assert_eq!(response.quote.tax.cents(), 2400);
        // Revenue includes tax: the grand total is what's stored
        assert_eq!(response.booking.total_cents, 17400);
    }

    #[tokio::test]
    async fn test_book_room_rejects_blank_fields() {
        let db = test_db().await;
        let config = AppConfig::default();

        let mut bad = request("Single", 3);
        bad.email = String::new();

        assert!(book_room(&db, &config, bad).await.is_err());
        // Nothing was persisted
        assert!(list_bookings(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_book_room_rejects_bad_nights() {
        let db = test_db().await;
        let config = AppConfig::default();

        assert!(book_room(&db, &config, request("Single", 0)).await.is_err());
        assert!(book_room(&db, &config, request("Single", -2)).await.is_err());
    }

    #[tokio::test]
    async fn test_update_reprices_stored_total() {
        let db = test_db().await;
        let config = AppConfig::default();

        let created = book_room(&db, &config, request("Single", 3)).await.unwrap();

        let edited = update_booking(&db, &config, &created.booking.id, request("Suite", 2))
            .await
            .unwrap();

        assert_eq!(edited.booking.room_category, "Suite");
        assert_eq!(edited.booking.total_cents, 27840);
    }

    #[tokio::test]
    async fn test_cancel_and_search() {
        let db = test_db().await;
        let config = AppConfig::default();

        let created = book_room(&db, &config, request("Double", 1)).await.unwrap();

        let hits = search_bookings(&db, "Reyes").await.unwrap();
        assert_eq!(hits.len(), 1);

        cancel_booking(&db, &created.booking.id).await.unwrap();
        assert!(search_bookings(&db, "Reyes").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_requires_keyword() {
        let db = test_db().await;
        assert!(search_bookings(&db, "   ").await.is_err());
    }
}
