//! # Receipt Composer
//!
//! Assembles the structured receipt document for one booking.
//!
//! ## Composition Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Composition                                │
//! │                                                                         │
//! │  Booking snapshot ──► required-field check ──► MissingField?           │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  pricing::quote(category, nights, CURRENT tax rate)                    │
//! │        │                                                                │
//! │        ├──► stay line / tax line / grand-total line                    │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  reconcile(stored total, recomputed grand total)                       │
//! │        │                                                                │
//! │        ├── diverges? ──► attach stored-total note                      │
//! │        └── agrees?   ──► no note (silence, not an empty note)          │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  QR payload: reference|guest|$total                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The receipt always prices under the CURRENT tax policy. A stored
//! total written under an older policy is never silently echoed back;
//! the divergence note is how the difference reaches a human.
//!
//! Composition is pure. Rendering the document to a file format and
//! opening a viewer belong to the caller (the desk app's sink).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing;
use crate::rates::RateTable;
use crate::reconcile::reconcile;
use crate::reference::format_reference;
use crate::types::{Booking, TaxRate};

// =============================================================================
// Document Model
// =============================================================================

/// One row of the charges table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptLine {
    /// What the row charges for ("Suite Room", "Tax / VAT", "Grand Total").
    pub description: String,

    /// Quantity column; only the stay line has one (the night count).
    pub quantity: Option<i64>,

    /// Rate column as display text: "$120.00" for the stay line, "16%"
    /// for the tax line, blank for the grand-total line.
    pub rate: String,

    /// Amount column.
    pub amount: Money,
}

/// The composed receipt document.
///
/// Generated fresh per request; nothing here is persisted. Field order
/// mirrors render order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Display reference derived from the booking id ("HB-000042").
    pub reference: String,

    /// Timestamp the caller generated the receipt at. An input, not a
    /// clock read: composition stays deterministic.
    pub generated_at: DateTime<Utc>,

    // Guest & stay block
    pub guest_name: String,
    pub phone: String,
    pub email: String,
    pub document_number: String,
    pub room_category: String,
    pub nights: i64,

    /// Charges table: stay line, tax line, grand-total line, in order.
    pub lines: Vec<ReceiptLine>,

    /// Grand total under current rates and tax policy.
    pub grand_total: Money,

    /// Present only when the stored total diverges from the recomputed
    /// one. States both values; when the totals agree there is no note
    /// at all.
    pub stored_total_note: Option<String>,

    /// Machine-readable summary for the check-in QR code:
    /// `reference|guest name|$grand total`. Round-trip lookup aid only;
    /// the delimiter is not escaped.
    pub qr_payload: String,
}

// =============================================================================
// Composition
// =============================================================================

/// Composes a receipt for a booking under the current tax policy.
///
/// ## Errors
/// - `MissingField` when a required guest/stay field is blank
/// - `InvalidNights` / `InvalidTaxRate` propagated from pricing
///
/// ## Example
/// ```rust
/// use chrono::Utc;
/// use lodge_core::rates::RateTable;
/// use lodge_core::receipt::compose;
/// use lodge_core::types::{Booking, TaxRate};
///
/// let booking = Booking {
///     id: "42".to_string(),
///     guest_name: "Dana Reyes".to_string(),
///     phone: "555-0100".to_string(),
///     email: "dana@example.com".to_string(),
///     document_number: "P1234567".to_string(),
///     room_category: "Single".to_string(),
///     nights: 3,
///     total_cents: 17400,
///     created_at: Utc::now(),
///     updated_at: Utc::now(),
/// };
///
/// let receipt = compose(
///     &booking,
///     &RateTable::standard(),
///     TaxRate::from_bps(1600),
///     Utc::now(),
/// )
/// .unwrap();
///
/// assert_eq!(receipt.reference, "HB-000042");
/// assert_eq!(receipt.qr_payload, "HB-000042|Dana Reyes|$174.00");
/// assert!(receipt.stored_total_note.is_none());
/// ```
pub fn compose(
    booking: &Booking,
    rates: &RateTable,
    tax_rate: TaxRate,
    generated_at: DateTime<Utc>,
) -> CoreResult<Receipt> {
    // Required fields, in check order
    let required: [(&'static str, &str); 5] = [
        ("guest_name", &booking.guest_name),
        ("phone", &booking.phone),
        ("email", &booking.email),
        ("document_number", &booking.document_number),
        ("room_category", &booking.room_category),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(CoreError::MissingField { field });
        }
    }

    let quote = pricing::quote(rates, &booking.room_category, booking.nights, tax_rate)?;
    let reference = format_reference(&booking.id);

    let lines = vec![
        ReceiptLine {
            description: format!("{} Room", booking.room_category),
            quantity: Some(booking.nights),
            rate: quote.nightly_rate.to_string(),
            amount: quote.subtotal,
        },
        ReceiptLine {
            description: "Tax / VAT".to_string(),
            quantity: None,
            rate: tax_rate.display_percent(),
            amount: quote.tax,
        },
        ReceiptLine {
            description: "Grand Total".to_string(),
            quantity: None,
            rate: String::new(),
            amount: quote.grand_total,
        },
    ];

    let reconciliation = reconcile(booking.stored_total(), quote.grand_total);
    let stored_total_note = reconciliation.diverges.then(|| {
        format!(
            "The amount stored in the system for this booking is {}; \
             current calculation shows {}. Stored total differs from \
             current tax settings.",
            reconciliation.stored, reconciliation.recomputed
        )
    });

    let qr_payload = format!(
        "{}|{}|{}",
        reference, booking.guest_name, quote.grand_total
    );

    Ok(Receipt {
        reference,
        generated_at,
        guest_name: booking.guest_name.clone(),
        phone: booking.phone.clone(),
        email: booking.email.clone(),
        document_number: booking.document_number.clone(),
        room_category: booking.room_category.clone(),
        nights: booking.nights,
        lines,
        grand_total: quote.grand_total,
        stored_total_note,
        qr_payload,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
