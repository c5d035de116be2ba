/// Format a played duration in milliseconds as minutes with two decimals.
///
/// This is the one duration rendering the ranked views use:
/// `ms / 60000`, two decimal places, no locale handling.
///
/// # Examples
///
/// ```
/// use lens_core::formatting::format_minutes;
///
/// assert_eq!(format_minutes(30_000), "0.50");
/// assert_eq!(format_minutes(55_000), "0.92");
/// assert_eq!(format_minutes(3_600_000), "60.00");
/// assert_eq!(format_minutes(0), "0.00");
/// ```
pub fn format_minutes(ms: u64) -> String {
    format!("{:.2}", ms as f64 / 60_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_minutes_zero() {
        assert_eq!(format_minutes(0), "0.00");
    }

    #[test]
    fn test_format_minutes_half() {
        assert_eq!(format_minutes(30_000), "0.50");
    }

    #[test]
    fn test_format_minutes_rounds() {
        // 55 000 ms = 0.91666... minutes
        assert_eq!(format_minutes(55_000), "0.92");
    }

    #[test]
    fn test_format_minutes_exact_hour() {
        assert_eq!(format_minutes(3_600_000), "60.00");
    }

    #[test]
    fn test_format_minutes_large() {
        assert_eq!(format_minutes(86_400_000), "1440.00");
    }
}
