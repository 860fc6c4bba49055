//! # Error Types
//!
//! Domain-specific error types for lodge-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lodge-core errors (this file)                                         │
//! │  ├── CoreError        - Valuation failures (bad input, blank fields)   │
//! │  └── ValidationError  - User input validation failures                 │
//! │                                                                         │
//! │  lodge-db errors (separate crate)                                      │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  Desk app errors                                                       │
//! │  └── AppError         - What the operator sees (code + message)        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Unknown room categories, empty booking sets and non-numeric booking
//! identifiers are defined outcomes (zero rate, empty metrics, verbatim
//! reference), not failures. The engine only errors on inputs a caller
//! was supposed to validate (nights, tax rate) or on a booking snapshot
//! missing required fields at receipt time.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Valuation engine errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Nights out of range for pricing.
    ///
    /// Callers validate user-typed nights before pricing; this variant
    /// fires when a caller skipped that step.
    #[error("nights must be a positive number, got {nights}")]
    InvalidNights { nights: i64 },

    /// Tax rate outside the valid `[0%, 100%)` domain.
    #[error("tax rate must be below 100%, got {bps} bps")]
    InvalidTaxRate { bps: u32 },

    /// A booking snapshot is missing a field the receipt requires.
    #[error("booking is missing required field: {field}")]
    MissingField { field: &'static str },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when operator-typed input doesn't meet requirements.
/// Used for early validation before any pricing or persistence runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidNights { nights: 0 };
        assert_eq!(err.to_string(), "nights must be a positive number, got 0");

        let err = CoreError::MissingField { field: "guest_name" };
        assert_eq!(
            err.to_string(),
            "booking is missing required field: guest_name"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "phone".to_string(),
        };
        assert_eq!(err.to_string(), "phone is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "nights".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
