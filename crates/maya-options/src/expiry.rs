//! # Expiration Schedule Builder
//!
//! Calculates standard weekly contract-expiration dates.
//!
//! ## Description
//! Listed equity options in this model expire weekly on Fridays. The
//! schedule starts at the nearest Friday on or after a reference date (a
//! Friday reference counts as the first entry) and advances in exact
//! 7-day steps.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Calculates the nearest Friday on or after `from`.
///
/// # Parameters
/// * `from` - Reference date to begin the search.
pub fn next_friday(from: NaiveDate) -> NaiveDate {
    let days_until_friday = (Weekday::Fri.num_days_from_monday() as i64
        - from.weekday().num_days_from_monday() as i64
        + 7)
        % 7;
    from + Duration::days(days_until_friday)
}

/// Builds the next `count` weekly expiration dates from `from`.
///
/// # Returns
/// `count` Fridays, each exactly 7 days after the previous, the first
/// being the nearest Friday on or after `from`.
pub fn expiration_schedule(count: usize, from: NaiveDate) -> Vec<NaiveDate> {
    let first = next_friday(from);
    (0..count)
        .map(|i| first + Duration::days(7 * i as i64))
        .collect()
}

/// Renders an expiration date in the conventional M/D/YYYY chain format.
pub fn format_expiration(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_friday_from_midweek() {
        // 2025-06-16 is a Monday
        let monday = NaiveDate::from_ymd_opt(2025, 6, 16).unwrap();
        let friday = next_friday(monday);
        assert_eq!(friday.weekday(), Weekday::Fri);
        assert_eq!(friday, NaiveDate::from_ymd_opt(2025, 6, 20).unwrap());
    }

    #[test]
    fn test_friday_reference_counts_as_first() {
        let friday = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        assert_eq!(next_friday(friday), friday);
        let schedule = expiration_schedule(3, friday);
        assert_eq!(schedule[0], friday);
    }

    #[test]
    fn test_schedule_is_weekly_fridays() {
        let from = NaiveDate::from_ymd_opt(2025, 6, 18).unwrap();
        let schedule = expiration_schedule(4, from);
        assert_eq!(schedule.len(), 4);
        for date in &schedule {
            assert_eq!(date.weekday(), Weekday::Fri);
        }
        for pair in schedule.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(7));
        }
    }

    #[test]
    fn test_format_expiration_is_m_d_yyyy() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 6).unwrap();
        assert_eq!(format_expiration(date), "6/6/2025");
        let date = NaiveDate::from_ymd_opt(2025, 12, 19).unwrap();
        assert_eq!(format_expiration(date), "12/19/2025");
    }
}
