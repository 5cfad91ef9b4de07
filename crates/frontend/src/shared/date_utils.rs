/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the dashboard
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Format an order date as "15 Mar 2024"
pub fn format_order_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

/// Format a server timestamp as "15 Mar 2024, 14:02"
///
/// Accepts both "2024-03-15 14:02:26" and ISO "2024-03-15T14:02:26.123Z".
/// Anything else is returned unchanged, empty input becomes "—".
pub fn format_timestamp(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return "—".to_string();
    }
    let normalized = trimmed.replace('T', " ");
    let without_zone = normalized.trim_end_matches('Z');
    let without_fraction = without_zone.split('.').next().unwrap_or(without_zone);
    match NaiveDateTime::parse_from_str(without_fraction, "%Y-%m-%d %H:%M:%S") {
        Ok(dt) => dt.format("%-d %b %Y, %H:%M").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Today in the browser's local time zone
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Earliest date accepted for a new order
pub fn min_order_date(today: NaiveDate) -> NaiveDate {
    today + Duration::days(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_order_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_order_date(date), "5 Mar 2024");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2024-03-15 14:02:26"), "15 Mar 2024, 14:02");
        assert_eq!(format_timestamp("2024-03-15T14:02:26.123Z"), "15 Mar 2024, 14:02");
    }

    #[test]
    fn test_invalid_timestamp() {
        assert_eq!(format_timestamp("invalid"), "invalid");
        assert_eq!(format_timestamp(""), "—");
    }

    #[test]
    fn test_min_order_date_crosses_month() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(min_order_date(today), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }
}
