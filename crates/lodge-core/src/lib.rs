//! # lodge-core: Pure Valuation Engine for Lodge
//!
//! This crate is the **heart** of Lodge. It prices stays, reconciles
//! stored charges against recomputed ones, folds bookings into dashboard
//! metrics and composes receipts - all as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Lodge Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Desk CLI (apps/desk)                         │   │
//! │  │    book ──► update ──► dashboard ──► receipt                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lodge-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  pricing  │  │ reconcile │  │  metrics  │  │   │
//! │  │   │   rates   │  │ StayQuote │  │ stored vs │  │ dashboard │  │   │
//! │  │   │  TaxRate  │  │           │  │ recomputed│  │   fold    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                 │   │
//! │  │   │  receipt  │  │ reference │  │ validation│                 │   │
//! │  │   │  compose  │  │ HB-000042 │  │   rules   │                 │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CLOCK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  lodge-db (record store)                        │   │
//! │  │           SQLite queries, migrations, repositories              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer-cents arithmetic (no floats!)
//! - [`types`] - Domain types (Booking, TaxRate)
//! - [`rates`] - Category → nightly rate table
//! - [`pricing`] - Stay pricing with stepwise half-up rounding
//! - [`reconcile`] - Stored vs recomputed total comparison
//! - [`metrics`] - Dashboard aggregation
//! - [`reference`] - Display reference formatting
//! - [`receipt`] - Receipt document composition
//! - [`validation`] - Input validation rules
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same snapshot in, same result out; even the
//!    receipt timestamp is a parameter
//! 2. **No I/O**: database, filesystem and clock access are FORBIDDEN here
//! 3. **Integer Money**: all amounts are cents (i64); rounding is half-up
//!    and happens at fixed pricing steps
//! 4. **Total where it matters**: unknown categories, empty booking sets
//!    and odd identifiers are defined outcomes, not errors
//!
//! ## Example Usage
//!
//! ```rust
//! use lodge_core::pricing::quote;
//! use lodge_core::rates::RateTable;
//! use lodge_core::types::TaxRate;
//!
//! let rates = RateTable::standard();
//! let vat = TaxRate::from_bps(1600); // 16%
//!
//! let q = quote(&rates, "Suite", 2, vat).unwrap();
//! assert_eq!(q.grand_total.cents(), 27840); // $278.40
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod metrics;
pub mod money;
pub mod pricing;
pub mod rates;
pub mod receipt;
pub mod reconcile;
pub mod reference;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use lodge_core::Money` instead of
// `use lodge_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use metrics::{aggregate, DashboardMetrics};
pub use money::Money;
pub use pricing::{quote, StayQuote};
pub use rates::RateTable;
pub use receipt::{compose, Receipt, ReceiptLine};
pub use reconcile::{reconcile, Reconciliation};
pub use reference::{format_reference, REFERENCE_PREFIX};
pub use types::{Booking, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Longest stay the desk accepts in one booking.
///
/// ## Business Reason
/// Catches keyboard slips (1000 nights where 10 was meant) before they
/// become absurd stored totals. Long-term residents get re-booked.
pub const MAX_STAY_NIGHTS: i64 = 365;
