#[cfg(test)]
mod tests {
    use sesl::libs::formatter::{format_elapsed, format_timestamp, to_hours};
    use chrono::{Local, TimeZone};

    #[test]
    fn test_format_elapsed_zero() {
        assert_eq!(format_elapsed(0), "00:00:00");
    }

    #[test]
    fn test_format_elapsed_seconds_and_minutes() {
        assert_eq!(format_elapsed(59), "00:00:59");
        assert_eq!(format_elapsed(60), "00:01:00");
        assert_eq!(format_elapsed(75), "00:01:15");
        assert_eq!(format_elapsed(3599), "00:59:59");
    }

    #[test]
    fn test_format_elapsed_hours() {
        assert_eq!(format_elapsed(3600), "01:00:00");
        assert_eq!(format_elapsed(3661), "01:01:01");
        assert_eq!(format_elapsed(86400), "24:00:00");
    }

    #[test]
    fn test_format_elapsed_large_hours_do_not_wrap() {
        assert_eq!(format_elapsed(360_000), "100:00:00");
    }

    #[test]
    fn test_to_hours_whole_and_fractional() {
        assert_eq!(to_hours(0), 0.0);
        assert_eq!(to_hours(3600), 1.0);
        assert_eq!(to_hours(5400), 1.5);
        assert_eq!(to_hours(7200), 2.0);
    }

    #[test]
    fn test_to_hours_rounds_to_two_decimals() {
        assert_eq!(to_hours(4000), 1.11);
        assert_eq!(to_hours(36), 0.01);
        assert_eq!(to_hours(17), 0.0);
        assert_eq!(to_hours(18), 0.01);
    }

    #[test]
    fn test_format_timestamp() {
        let ts = Local.with_ymd_and_hms(2026, 1, 15, 14, 30, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "15 Jan, 2026 14:30");
    }
}
