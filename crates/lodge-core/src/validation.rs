//! # Validation Module
//!
//! Input validation for operator-typed booking data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Desk command (this module)                                   │
//! │  ├── Required-field and format checks on typed input                   │
//! │  └── Runs BEFORE pricing and BEFORE any row is written                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Pricing engine                                               │
//! │  └── Hard preconditions (nights >= 1, tax rate < 100%)                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── CHECK (nights >= 1, total_cents >= 0)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::MAX_STAY_NIGHTS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Guest Field Validators
// =============================================================================

/// Validates the guest's full name. Required, at most 200 characters.
/// Returns the trimmed value.
pub fn validate_guest_name(name: &str) -> ValidationResult<String> {
    required_text("guest name", name, 200)
}

/// Validates a contact phone number.
///
/// ## Rules
/// - Required, at most 40 characters
/// - Digits plus the usual separators: `+ - ( ) . space`
pub fn validate_phone(phone: &str) -> ValidationResult<String> {
    let phone = required_text("phone", phone, 40)?;

    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | '.' | ' '))
    {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain only digits and + - ( ) . separators".to_string(),
        });
    }

    Ok(phone)
}

/// Validates a contact email address.
///
/// ## Rules
/// - Required, at most 254 characters
/// - Must contain a single `@` with text on both sides. Deliberately
///   shallow: the address is a contact detail, not a login.
pub fn validate_email(email: &str) -> ValidationResult<String> {
    let email = required_text("email", email, 254)?;

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@domain".to_string(),
        });
    }

    Ok(email)
}

/// Validates an ID/passport number. Required, at most 64 characters.
pub fn validate_document_number(document: &str) -> ValidationResult<String> {
    required_text("document number", document, 64)
}

/// Validates a room category key. Required, at most 50 characters.
///
/// Membership in the rate table is NOT checked here: booking into an
/// unknown category is allowed and prices at zero.
pub fn validate_room_category(category: &str) -> ValidationResult<String> {
    required_text("room category", category, 50)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a night count typed at the desk.
///
/// ## Rules
/// - Must be positive
/// - Must not exceed [`MAX_STAY_NIGHTS`] (guards against a typo like
///   1000 where 10 was meant)
pub fn validate_nights(nights: i64) -> ValidationResult<()> {
    if nights <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "nights".to_string(),
        });
    }

    if nights > MAX_STAY_NIGHTS {
        return Err(ValidationError::OutOfRange {
            field: "nights".to_string(),
            min: 1,
            max: MAX_STAY_NIGHTS,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be below 10000 (100%); the pricing domain is `[0%, 100%)`
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps >= 10_000 {
        return Err(ValidationError::OutOfRange {
            field: "tax rate".to_string(),
            min: 0,
            max: 9_999,
        });
    }

    Ok(())
}

// =============================================================================
// Search
// =============================================================================

/// Validates a search keyword (guest name or document number).
///
/// ## Rules
/// - Required (searching for nothing is an operator mistake)
/// - At most 100 characters
///
/// Returns the trimmed keyword.
pub fn validate_search_keyword(keyword: &str) -> ValidationResult<String> {
    required_text("search keyword", keyword, 100)
}

// =============================================================================
// Helpers
// =============================================================================

fn required_text(field: &str, value: &str, max: usize) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(value.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
