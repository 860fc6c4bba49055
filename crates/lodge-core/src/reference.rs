//! # Reference Number Formatter
//!
//! Derives the display reference shown on receipts from a booking's
//! persisted identifier.
//!
//! The reference is a lookup aid, not a key, so the formatter is total:
//! numeric ids become fixed-width `HB-000042` tokens, anything else
//! (legacy imports, foreign tokens) passes through verbatim behind the
//! prefix rather than failing.

/// Constant prefix on every booking reference.
pub const REFERENCE_PREFIX: &str = "HB-";

/// Minimum digit width for numeric references.
const NUMERIC_WIDTH: usize = 6;

/// Formats a persisted identifier as a display reference.
///
/// - Identifiers made entirely of ASCII digits render as `HB-` plus the
///   number zero-padded to six digits (wider numbers render in full,
///   no truncation).
/// - Anything else renders as `HB-` plus the identifier as given.
///
/// ## Example
/// ```rust
/// use lodge_core::reference::format_reference;
///
/// assert_eq!(format_reference("42"), "HB-000042");
/// assert_eq!(format_reference("LEGACY-9"), "HB-LEGACY-9");
/// ```
pub fn format_reference(id: &str) -> String {
    let numeric = !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit());

    if numeric {
        if let Ok(n) = id.parse::<u64>() {
            return format!("{}{:0width$}", REFERENCE_PREFIX, n, width = NUMERIC_WIDTH);
        }
        // All digits but wider than u64: fall through to verbatim
    }

    format!("{REFERENCE_PREFIX}{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_ids_zero_padded() {
        assert_eq!(format_reference("42"), "HB-000042");
        assert_eq!(format_reference("1"), "HB-000001");
        assert_eq!(format_reference("0"), "HB-000000");
        assert_eq!(format_reference("999999"), "HB-999999");
    }

    #[test]
    fn test_wide_numeric_ids_not_truncated() {
        assert_eq!(format_reference("1234567"), "HB-1234567");
    }

    #[test]
    fn test_leading_zeros_normalize() {
        // "042" is numeric; the pad width wins over the original zeros
        assert_eq!(format_reference("042"), "HB-000042");
    }

    #[test]
    fn test_non_numeric_ids_verbatim() {
        assert_eq!(format_reference("LEGACY-9"), "HB-LEGACY-9");
        assert_eq!(format_reference("b7e2"), "HB-b7e2");
        assert_eq!(format_reference(""), "HB-");
    }

    #[test]
    fn test_signed_and_decorated_ids_are_not_numeric() {
        // A sign or separator makes the id a token, not a number
        assert_eq!(format_reference("+42"), "HB-+42");
        assert_eq!(format_reference("-42"), "HB--42");
        assert_eq!(format_reference("4 2"), "HB-4 2");
    }

    #[test]
    fn test_total_for_absurdly_wide_digits() {
        // Wider than u64 still formats, verbatim
        let wide = "99999999999999999999999999";
        assert_eq!(format_reference(wide), format!("HB-{wide}"));
    }
}
