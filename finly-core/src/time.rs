//! Time utilities: timezone-aware "today" and month arithmetic.

use anyhow::Result;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

/// Current date in an IANA timezone like "Asia/Kolkata".
pub fn today_in_tz(tz: &str) -> Result<NaiveDate> {
    Ok(date_in_tz(Utc::now(), tz)?)
}

/// Project a UTC instant onto the local calendar date in `tz`.
pub fn date_in_tz(instant: DateTime<Utc>, tz: &str) -> Result<NaiveDate> {
    let tz: Tz = tz
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))?;
    Ok(instant.with_timezone(&tz).date_naive())
}

/// (year, month) of a date.
pub fn month_of(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

/// The month immediately before (year, month).
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

/// The month `n` steps before (year, month); n = 0 is the month itself.
pub fn months_back(year: i32, month: u32, n: u32) -> (i32, u32) {
    let total = year * 12 + (month as i32 - 1) - n as i32;
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_in_tz_crosses_midnight() {
        // 2026-01-15 20:00 UTC is already Jan 16 in Kolkata (UTC+5:30)
        let instant = Utc.with_ymd_and_hms(2026, 1, 15, 20, 0, 0).unwrap();
        let local = date_in_tz(instant, "Asia/Kolkata").unwrap();
        assert_eq!(local, NaiveDate::from_ymd_opt(2026, 1, 16).unwrap());

        assert!(date_in_tz(instant, "Not/AZone").is_err());
    }

    #[test]
    fn test_month_arithmetic() {
        assert_eq!(previous_month(2026, 1), (2025, 12));
        assert_eq!(previous_month(2026, 7), (2026, 6));
        assert_eq!(months_back(2026, 3, 0), (2026, 3));
        assert_eq!(months_back(2026, 3, 5), (2025, 10));
        assert_eq!(months_back(2026, 12, 24), (2024, 12));
    }
}
