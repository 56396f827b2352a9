use crate::error::{GitcalError, Result};
use chrono::{Datelike, Months, NaiveDate};

pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Row labels of the grid, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn month_abbreviation(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_ABBREVIATIONS.get(idx as usize))
        .copied()
        .unwrap_or("???")
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn last_of_month(date: NaiveDate) -> Result<NaiveDate> {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| GitcalError::InvalidDate(format!("No month end representable after {date}")))
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| last_of_month(first).ok())
        .map(|last| last.day())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_lengths_follow_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
    }

    #[test]
    fn month_bounds_roll_over_year_end() {
        assert_eq!(first_of_month(ymd(2022, 12, 20)), ymd(2022, 12, 1));
        assert_eq!(last_of_month(ymd(2022, 12, 20)).unwrap(), ymd(2022, 12, 31));
        assert_eq!(last_of_month(ymd(2024, 2, 3)).unwrap(), ymd(2024, 2, 29));
    }

    #[test]
    fn month_end_past_representable_range_is_an_error() {
        assert!(matches!(
            last_of_month(NaiveDate::MAX),
            Err(GitcalError::InvalidDate(_))
        ));
    }

    #[test]
    fn abbreviations_cover_every_month() {
        assert_eq!(month_abbreviation(1), "Jan");
        assert_eq!(month_abbreviation(12), "Dec");
        assert_eq!(month_abbreviation(0), "???");
        assert_eq!(month_abbreviation(13), "???");
    }
}
