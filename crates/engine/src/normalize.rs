//! Columnwise cell canonicalization.
//!
//! Both functions are pure and total. Dirty cells never fail a run: an
//! unreadable identifier becomes the empty key and an unreadable quantity
//! becomes zero, so downstream arithmetic is always defined.

/// Canonicalize a raw identifier cell into a matchable key.
///
/// Trims whitespace, strips double quotes, removes the trailing `.0` left
/// by numeric-to-text coercion, uppercases, and collapses the textual
/// missing-value marker to the empty string. Idempotent: normalizing an
/// already-normalized key returns it unchanged.
pub fn normalize_key(raw: &str) -> String {
    let unquoted: String = raw.trim().chars().filter(|&c| c != '"').collect();
    let mut key = unquoted.trim().to_uppercase();

    // "12345.0" is a float round-trip artifact, "1.0.0" is a real value.
    // Only strip when everything before the suffix is digits — this is also
    // what keeps the function idempotent.
    if let Some(prefix) = key.strip_suffix(".0") {
        if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) {
            key.truncate(prefix.len());
        }
    }

    if key == "NAN" {
        return String::new();
    }
    key
}

/// Canonicalize a raw numeric cell into a quantity.
///
/// Strips thousands separators and parses as `f64`. Unparseable, empty, or
/// non-finite values resolve to zero rather than failing the record.
pub fn normalize_number(raw: &str) -> f64 {
    let cleaned: String = raw.trim().chars().filter(|&c| c != ',').collect();
    match cleaned.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_basic_cleanup() {
        assert_eq!(normalize_key("  ab-123 "), "AB-123");
        assert_eq!(normalize_key("\"ab-123\""), "AB-123");
        assert_eq!(normalize_key("\" ab-123 \""), "AB-123");
    }

    #[test]
    fn key_strips_float_artifact() {
        assert_eq!(normalize_key("12345.0"), "12345");
        assert_eq!(normalize_key("\"12345.0\""), "12345");
        // Not an artifact: prefix is not all digits
        assert_eq!(normalize_key("1.0.0"), "1.0.0");
        assert_eq!(normalize_key("AB.0"), "AB.0");
        assert_eq!(normalize_key(".0"), ".0");
    }

    #[test]
    fn key_missing_value_marker() {
        assert_eq!(normalize_key("nan"), "");
        assert_eq!(normalize_key("NaN"), "");
        assert_eq!(normalize_key(""), "");
        assert_eq!(normalize_key("   "), "");
    }

    #[test]
    fn key_idempotent() {
        for raw in ["  \"12345.0\" ", "1.0.0", "nan", "a b", "12345.0.0", "\"\""] {
            let once = normalize_key(raw);
            assert_eq!(normalize_key(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn number_zero_coercion() {
        assert_eq!(normalize_number(""), 0.0);
        assert_eq!(normalize_number("abc"), 0.0);
        assert_eq!(normalize_number("NaN"), 0.0);
        assert_eq!(normalize_number("inf"), 0.0);
    }

    #[test]
    fn number_thousands_separators() {
        assert_eq!(normalize_number("1,234"), 1234.0);
        assert_eq!(normalize_number("1,234,567.5"), 1234567.5);
        assert_eq!(normalize_number(" 42 "), 42.0);
    }

    #[test]
    fn number_negative_preserved() {
        // Surpluses stay signed until the calculator clamps them.
        assert_eq!(normalize_number("-3.5"), -3.5);
    }
}
