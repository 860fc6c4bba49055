//! # Domain Types
//!
//! Core domain types used throughout Lodge.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Booking      │   │    TaxRate      │   │     Money       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (token)     │   │  bps (u32)      │   │  cents (i64)    │       │
//! │  │  guest fields   │   │  1600 = 16%     │   │  (money.rs)     │       │
//! │  │  room_category  │   │  valid < 10000  │   └─────────────────┘       │
//! │  │  nights         │   └─────────────────┘                             │
//! │  │  total_cents    │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Semantics
//! The record store owns the canonical booking rows. The engine only ever
//! sees an immutable `Booking` snapshot and returns freshly computed
//! values; it never writes a snapshot back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1600 bps = 16% (the default VAT rate)
///
/// A booking never stores the rate that produced its total; only the
/// total survives. The current rate is supplied at call time, which is
/// exactly why recomputed totals can diverge from stored ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Upper bound (exclusive) for a valid rate: 10000 bps = 100%.
    pub const MAX_BPS: u32 = 10_000;

    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for config convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage.
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// True when the rate lies in the valid domain `[0%, 100%)`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.0 < Self::MAX_BPS
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Renders the rate for the receipt tax line: `16%`, or `8.25%`
    /// when the rate has a fractional percent.
    pub fn display_percent(&self) -> String {
        if self.0 % 100 == 0 {
            format!("{}%", self.0 / 100)
        } else {
            format!("{:.2}%", self.percentage())
        }
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Booking
// =============================================================================

/// One guest stay, as persisted by the record store.
///
/// ## Stored Total
/// `total_cents` is the grand total (tax included) computed under the
/// tax policy in effect when the booking was written or last edited.
/// Reporting code never rewrites it; the reconciliation checker exists
/// to surface the difference when policy has moved on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Identifier issued by the persistence layer. Usually the decimal
    /// rendering of an integer row id, but legacy imports can carry
    /// arbitrary tokens; the reference formatter copes with both.
    pub id: String,

    /// Guest full name, as shown on the receipt.
    pub guest_name: String,

    /// Contact phone number.
    pub phone: String,

    /// Contact email address.
    pub email: String,

    /// ID or passport number presented at booking time.
    pub document_number: String,

    /// Room category key into the rate table (e.g. "Single").
    /// Categories no longer present in the table valuate at zero rate.
    pub room_category: String,

    /// Number of nights stayed. Persisted rows always have `nights >= 1`.
    pub nights: i64,

    /// Stored grand total in cents, tax included.
    pub total_cents: i64,

    /// When the booking was created.
    pub created_at: DateTime<Utc>,

    /// When the booking was last edited.
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Returns the stored grand total as Money.
    #[inline]
    pub fn stored_total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
