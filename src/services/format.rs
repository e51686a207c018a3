/// Format a monetary amount for display, as entered in the catalog.
/// Whole amounts drop the fraction (350.0 -> "350"), others keep their
/// significant digits up to 10 decimal places (349.5 -> "349.5").
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e12 {
        format!("{}", value as i64)
    } else {
        let formatted = format!("{:.10}", value);
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// Price with its currency symbol, e.g. "$350"
pub fn format_price(value: f64, currency_symbol: &str) -> String {
    format!("{}{}", currency_symbol, format_amount(value))
}

/// "1 vehicle", "2 vehicles"
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
