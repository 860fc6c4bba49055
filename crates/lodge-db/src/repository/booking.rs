//! # Booking Repository
//!
//! Database operations for booking records.
//!
//! ## Booking Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Booking Lifecycle                                  │
//! │                                                                         │
//! │  1. BOOK                                                               │
//! │     └── insert(NewBooking) → Booking { id, stored total }              │
//! │         stored total = grand total under the CURRENT tax policy        │
//! │                                                                         │
//! │  2. EDIT                                                               │
//! │     └── update(id, NewBooking) → stored total recomputed & overwritten │
//! │                                                                         │
//! │  3. READ                                                               │
//! │     └── find_by_id / list_all / search → immutable snapshots           │
//! │         (reporting NEVER writes back - divergence is only reported)    │
//! │                                                                         │
//! │  4. CANCEL                                                             │
//! │     └── delete(id) → row removed                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Queries use sqlx's runtime API with a `FromRow` row struct rather
//! than the compile-time `query!` macros, so the crate builds without a
//! prepared query cache or a DATABASE_URL at compile time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use lodge_core::Booking;

// =============================================================================
// Row Mapping
// =============================================================================

/// Raw bookings row. The integer id becomes the string token the core
/// works with; everything else maps one-to-one.
#[derive(Debug, sqlx::FromRow)]
struct BookingRow {
    id: i64,
    guest_name: String,
    phone: String,
    email: String,
    document_number: String,
    room_category: String,
    nights: i64,
    total_cents: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: row.id.to_string(),
            guest_name: row.guest_name,
            phone: row.phone,
            email: row.email,
            document_number: row.document_number,
            room_category: row.room_category,
            nights: row.nights,
            total_cents: row.total_cents,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const SELECT_COLUMNS: &str = "SELECT id, guest_name, phone, email, document_number, \
     room_category, nights, total_cents, created_at, updated_at FROM bookings";

// =============================================================================
// New Booking
// =============================================================================

/// Fields for a booking insert or edit. The id and timestamps are
/// issued by the store; `total_cents` is the grand total the caller
/// priced under the current tax policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBooking {
    pub guest_name: String,
    pub phone: String,
    pub email: String,
    pub document_number: String,
    pub room_category: String,
    pub nights: i64,
    pub total_cents: i64,
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for booking database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = BookingRepository::new(pool);
/// let all = repo.list_all().await?;
/// let hits = repo.search("Reyes").await?;
/// ```
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: SqlitePool,
}

impl BookingRepository {
    /// Creates a new BookingRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BookingRepository { pool }
    }

    /// Inserts a new booking and returns the stored record.
    pub async fn insert(&self, new: &NewBooking) -> DbResult<Booking> {
        debug!(guest = %new.guest_name, category = %new.room_category, "Inserting booking");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO bookings (
                guest_name, phone, email, document_number,
                room_category, nights, total_cents,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(&new.guest_name)
        .bind(&new.phone)
        .bind(&new.email)
        .bind(&new.document_number)
        .bind(&new.room_category)
        .bind(new.nights)
        .bind(new.total_cents)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();

        Ok(Booking {
            id: id.to_string(),
            guest_name: new.guest_name.clone(),
            phone: new.phone.clone(),
            email: new.email.clone(),
            document_number: new.document_number.clone(),
            room_category: new.room_category.clone(),
            nights: new.nights,
            total_cents: new.total_cents,
            created_at: now,
            updated_at: now,
        })
    }

    /// Gets a booking by its identifier.
    ///
    /// Identifiers that cannot name a stored row (non-numeric tokens)
    /// resolve to `None`, the same as a missing row.
    pub async fn find_by_id(&self, id: &str) -> DbResult<Option<Booking>> {
        let Some(row_id) = parse_row_id(id) else {
            return Ok(None);
        };

        let row: Option<BookingRow> =
            sqlx::query_as(&format!("{SELECT_COLUMNS} WHERE id = ?1"))
                .bind(row_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(Booking::from))
    }

    /// Lists every booking, oldest first.
    pub async fn list_all(&self) -> DbResult<Vec<Booking>> {
        let rows: Vec<BookingRow> =
            sqlx::query_as(&format!("{SELECT_COLUMNS} ORDER BY id"))
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }

    /// Searches bookings by guest name OR document number, substring
    /// match, oldest first.
    pub async fn search(&self, keyword: &str) -> DbResult<Vec<Booking>> {
        debug!(keyword = %keyword, "Searching bookings");

        let pattern = format!("%{keyword}%");

        let rows: Vec<BookingRow> = sqlx::query_as(&format!(
            "{SELECT_COLUMNS} WHERE guest_name LIKE ?1 OR document_number LIKE ?1 ORDER BY id"
        ))
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Search returned bookings");
        Ok(rows.into_iter().map(Booking::from).collect())
    }

    /// Overwrites a booking's fields, stored total included.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - id doesn't name a stored row
    pub async fn update(&self, id: &str, new: &NewBooking) -> DbResult<()> {
        debug!(id = %id, "Updating booking");

        let row_id = parse_row_id(id).ok_or_else(|| DbError::not_found("Booking", id))?;
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE bookings SET
                guest_name = ?2,
                phone = ?3,
                email = ?4,
                document_number = ?5,
                room_category = ?6,
                nights = ?7,
                total_cents = ?8,
                updated_at = ?9
            WHERE id = ?1
            "#,
        )
        .bind(row_id)
        .bind(&new.guest_name)
        .bind(&new.phone)
        .bind(&new.email)
        .bind(&new.document_number)
        .bind(&new.room_category)
        .bind(new.nights)
        .bind(new.total_cents)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Booking", id));
        }

        Ok(())
    }

    /// Deletes a booking (cancellation).
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - id doesn't name a stored row
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting booking");

        let row_id = parse_row_id(id).ok_or_else(|| DbError::not_found("Booking", id))?;

        let result = sqlx::query("DELETE FROM bookings WHERE id = ?1")
            .bind(row_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Booking", id));
        }

        Ok(())
    }

    /// Counts bookings on record (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Parses a string identifier into a SQLite row id. Non-numeric tokens
/// return `None`: they cannot name a row in this store.
fn parse_row_id(id: &str) -> Option<i64> {
    id.parse::<i64>().ok().filter(|n| *n > 0)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn new_booking(guest: &str, document: &str, category: &str) -> NewBooking {
        NewBooking {
            guest_name: guest.to_string(),
            phone: "555-0100".to_string(),
            email: "guest@example.com".to_string(),
            document_number: document.to_string(),
            room_category: category.to_string(),
            nights: 3,
            total_cents: 17400,
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let db = test_db().await;
        let repo = db.bookings();

        let stored = repo
            .insert(&new_booking("Dana Reyes", "P1234567", "Single"))
            .await
            .unwrap();
        assert_eq!(stored.id, "1");

        let found = repo.find_by_id(&stored.id).await.unwrap().unwrap();
        assert_eq!(found.guest_name, "Dana Reyes");
        assert_eq!(found.nights, 3);
        assert_eq!(found.total_cents, 17400);
    }

    #[tokio::test]
    async fn test_find_missing_and_non_numeric_ids() {
        let db = test_db().await;
        let repo = db.bookings();

        assert!(repo.find_by_id("999").await.unwrap().is_none());
        assert!(repo.find_by_id("LEGACY-9").await.unwrap().is_none());
        assert!(repo.find_by_id("").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_oldest_first() {
        let db = test_db().await;
        let repo = db.bookings();

        repo.insert(&new_booking("First Guest", "A1", "Single"))
            .await
            .unwrap();
        repo.insert(&new_booking("Second Guest", "A2", "Double"))
            .await
            .unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].guest_name, "First Guest");
        assert_eq!(all[1].guest_name, "Second Guest");
    }

    #[tokio::test]
    async fn test_search_matches_name_or_document() {
        let db = test_db().await;
        let repo = db.bookings();

        repo.insert(&new_booking("Dana Reyes", "P1234567", "Single"))
            .await
            .unwrap();
        repo.insert(&new_booking("Liu Wei", "K9876543", "Suite"))
            .await
            .unwrap();

        // Substring of a name
        let hits = repo.search("Reyes").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].guest_name, "Dana Reyes");

        // Substring of a document number
        let hits = repo.search("9876").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].guest_name, "Liu Wei");

        // No hits is an empty list, not an error
        let hits = repo.search("nobody").await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_update_overwrites_stored_total() {
        let db = test_db().await;
        let repo = db.bookings();

        let stored = repo
            .insert(&new_booking("Dana Reyes", "P1234567", "Single"))
            .await
            .unwrap();

        let mut edited = new_booking("Dana Reyes", "P1234567", "Suite");
        edited.nights = 2;
        edited.total_cents = 27840;
        repo.update(&stored.id, &edited).await.unwrap();

        let found = repo.find_by_id(&stored.id).await.unwrap().unwrap();
        assert_eq!(found.room_category, "Suite");
        assert_eq!(found.nights, 2);
        assert_eq!(found.total_cents, 27840);
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let db = test_db().await;
        let repo = db.bookings();

        let err = repo
            .update("42", &new_booking("Ghost", "X0", "Single"))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete() {
        let db = test_db().await;
        let repo = db.bookings();

        let stored = repo
            .insert(&new_booking("Dana Reyes", "P1234567", "Single"))
            .await
            .unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);

        repo.delete(&stored.id).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);

        let err = repo.delete(&stored.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_check_constraint_rejects_bad_nights() {
        let db = test_db().await;
        let repo = db.bookings();

        let mut bad = new_booking("Dana Reyes", "P1234567", "Single");
        bad.nights = 0;

        let err = repo.insert(&bad).await.unwrap_err();
        assert!(matches!(err, DbError::ConstraintViolation { .. }));
    }
}
