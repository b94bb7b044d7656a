//! Price formatting helpers.

/// Format a cent amount for display, e.g. `129900` → `"¥1299.00"`.
#[must_use]
pub fn format_price_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}¥{}.{:02}", abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::format_price_cents;

    #[test]
    fn formats_two_decimal_places() {
        assert_eq!(format_price_cents(1999), "¥19.99");
        assert_eq!(format_price_cents(329900), "¥3299.00");
        assert_eq!(format_price_cents(5), "¥0.05");
        assert_eq!(format_price_cents(0), "¥0.00");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside() {
        assert_eq!(format_price_cents(-150), "-¥1.50");
    }
}
