//! Small formatting and time helpers

use chrono::Utc;

/// Currency every menu price is quoted in
pub const CURRENCY: &str = "EGP";

/// Formats an amount with the currency suffix, e.g. `45 EGP`
pub fn format_price(amount: f64) -> String {
    format!("{} {}", amount, CURRENCY)
}

/// Current Unix timestamp in seconds
pub fn current_timestamp() -> u64 {
    Utc::now().timestamp() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(45.0), "45 EGP");
        assert_eq!(format_price(12.5), "12.5 EGP");
        assert_eq!(format_price(0.0), "0 EGP");
    }
}
