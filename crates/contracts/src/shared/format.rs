//! Display formatting shared by the dashboard widgets.

use chrono::{DateTime, NaiveDate, Utc};

/// Integer with `,` thousands separators, e.g. `72000.0` -> `"72,000"`.
///
/// Rounded to whole units.
pub fn format_thousands(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    let grouped: String = result.chars().rev().collect();
    if sign.is_empty() || grouped == "0" {
        grouped
    } else {
        format!("{}{}", sign, grouped)
    }
}

/// `"$72,000"`.
pub fn format_money(value: f64) -> String {
    format!("${}", format_thousands(value))
}

/// Bar chart axis label: `15000000.0` -> `"15.0M"`.
pub fn millions_label(value: f64) -> String {
    format!("{:.1}M", value / 1_000_000.0)
}

/// Line chart axis label: `15000.0` -> `"$15K"`.
pub fn thousands_money_label(value: f64) -> String {
    format!("${:.0}K", value / 1_000.0)
}

/// Signed change with two decimals and a percent sign: `"+11.01%"`.
pub fn format_change(change: f64) -> String {
    if change >= 0.0 {
        format!("+{:.2}%", change)
    } else {
        format!("{:.2}%", change)
    }
}

fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn plural(n: i64, unit: &str) -> String {
    if n > 1 {
        format!("{} {}s ago", n, unit)
    } else {
        format!("{} {} ago", n, unit)
    }
}

/// Human relative time of `value` as seen at `now`.
///
/// Plain dates are taken as midnight UTC. Older than a week falls back to
/// `M/D/YYYY`; unparsable input is returned unchanged.
pub fn relative_time(value: &str, now: DateTime<Utc>) -> String {
    let Some(instant) = parse_instant(value) else {
        return value.to_string();
    };

    let diff = now - instant;
    let minutes = diff.num_minutes();
    let hours = diff.num_hours();
    let days = diff.num_days();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        plural(minutes, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else if days == 1 {
        "Yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else {
        instant.format("%-m/%-d/%Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(72000.0), "72,000");
        assert_eq!(format_thousands(15000000.0), "15,000,000");
        assert_eq!(format_thousands(-1234.4), "-1,234");
        assert_eq!(format_money(1_456.0), "$1,456");
    }

    #[test]
    fn test_axis_labels() {
        assert_eq!(millions_label(15_000_000.0), "15.0M");
        assert_eq!(millions_label(0.0), "0.0M");
        assert_eq!(thousands_money_label(28_000.0), "$28K");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(11.01), "+11.01%");
        assert_eq!(format_change(-0.03), "-0.03%");
    }

    #[test]
    fn test_relative_time_buckets() {
        assert_eq!(relative_time("2024-03-15T11:59:30Z", now()), "Just now");
        assert_eq!(relative_time("2024-03-15T11:59:00Z", now()), "1 minute ago");
        assert_eq!(relative_time("2024-03-15T11:15:00Z", now()), "45 minutes ago");
        assert_eq!(relative_time("2024-03-15", now()), "12 hours ago");
        assert_eq!(relative_time("2024-03-14T10:00:00Z", now()), "Yesterday");
        assert_eq!(relative_time("2024-03-11", now()), "4 days ago");
        assert_eq!(relative_time("2024-02-20", now()), "2/20/2024");
    }

    #[test]
    fn test_relative_time_future_and_garbage() {
        assert_eq!(relative_time("2024-04-01", now()), "Just now");
        assert_eq!(relative_time("not a date", now()), "not a date");
    }
}
