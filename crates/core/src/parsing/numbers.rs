//! Lenient numeric coercion for tracker fields delivered as text.
//!
//! Coercion never fails: anything that does not yield digits becomes `0`.
//! Thousands separators (`,`) are dropped and any fractional part is
//! truncated, so `"1,024.7"` coerces to `1024`.

/// Coerce numeric-looking text into a `u64`, degrading to `0`.
pub fn coerce_u64(value: &str) -> u64 {
    let normalized = normalize_number(value);
    let integral = normalized.split('.').next().unwrap_or_default();

    if integral.is_empty() {
        return 0;
    }

    // All remaining chars are ASCII digits, so the only failure is overflow.
    integral.parse().unwrap_or(u64::MAX)
}

/// Coerce numeric-looking text into a `u32`, saturating at `u32::MAX`.
pub fn coerce_u32(value: &str) -> u32 {
    u32::try_from(coerce_u64(value)).unwrap_or(u32::MAX)
}

/// Keep digits and the decimal point, dropping everything else.
///
/// More than one `.` means the dots were grouping separators
/// (`"1.234.567"`), so they are removed as well.
fn normalize_number(value: &str) -> String {
    let kept: String = value
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if kept.matches('.').count() > 1 {
        kept.replace('.', "")
    } else {
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_plain_numbers() {
        assert_eq!(coerce_u64("0"), 0);
        assert_eq!(coerce_u64("1234"), 1234);
        assert_eq!(coerce_u64(" 42 "), 42);
        assert_eq!(coerce_u32("7"), 7);
    }

    #[test]
    fn test_coerce_separators_and_fractions() {
        assert_eq!(coerce_u64("1,234,567"), 1_234_567);
        assert_eq!(coerce_u64("1.234.567"), 1_234_567);
        assert_eq!(coerce_u64("12.9"), 12);
        assert_eq!(coerce_u64(".5"), 0);
    }

    #[test]
    fn test_coerce_garbage_is_zero() {
        assert_eq!(coerce_u64(""), 0);
        assert_eq!(coerce_u64("n/a"), 0);
        assert_eq!(coerce_u32("unknown"), 0);
    }

    #[test]
    fn test_coerce_large_values() {
        assert_eq!(coerce_u64("5368709120"), 5_368_709_120);
        assert_eq!(coerce_u32("5368709120"), u32::MAX);
        assert_eq!(coerce_u64("99999999999999999999999"), u64::MAX);
    }
}
