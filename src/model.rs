use chrono::{Datelike, NaiveDate, Weekday};
use std::ops::Range;

/// Commits by the charted author on one local calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DayObservation {
    pub date: NaiveDate,
    pub commit_count: u32,
}

impl DayObservation {
    pub fn new(date: NaiveDate, commit_count: u32) -> Self {
        Self { date, commit_count }
    }
}

/// A calendar day slot. Exists for every date of the aggregated range, with or
/// without commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Day {
    pub date: NaiveDate,
    pub commit_count: u32,
}

impl Day {
    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}

#[derive(Debug, Clone)]
struct MonthSlot {
    month: u32,
    span: Range<usize>,
}

#[derive(Debug, Clone)]
struct YearSlot {
    year: i32,
    months: Vec<MonthSlot>,
}

/// Contiguous arena of days, grouped into years and months in ascending order.
///
/// Days live in a single vector sorted by date; years and months only record
/// which slice of the arena they cover, so iteration order is the calendar
/// order by construction.
#[derive(Debug, Clone, Default)]
pub struct CalendarRange {
    days: Vec<Day>,
    years: Vec<YearSlot>,
}

impl CalendarRange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.days.first().map(|d| d.date)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.days.last().map(|d| d.date)
    }

    pub fn total_commits(&self) -> u64 {
        self.days.iter().map(|d| d.commit_count as u64).sum()
    }

    pub fn years(&self) -> impl Iterator<Item = Year<'_>> + '_ {
        self.years.iter().map(move |slot| self.view(slot))
    }

    pub fn year(&self, year: i32) -> Option<Year<'_>> {
        self.years
            .iter()
            .find(|slot| slot.year == year)
            .map(|slot| self.view(slot))
    }

    fn view<'a>(&'a self, slot: &'a YearSlot) -> Year<'a> {
        Year {
            year: slot.year,
            months: slot
                .months
                .iter()
                .map(|m| Month {
                    year: slot.year,
                    month: m.month,
                    days: &self.days[m.span.clone()],
                })
                .collect(),
        }
    }

    /// Appends the day following the current last day, opening its year and
    /// month containers on first use. Callers must push dates in ascending,
    /// gap-free order.
    pub(crate) fn push_day(&mut self, day: Day) {
        let idx = self.days.len();
        let (year, month) = (day.date.year(), day.date.month());

        if self.years.last().map_or(true, |slot| slot.year != year) {
            self.years.push(YearSlot {
                year,
                months: Vec::new(),
            });
        }
        let last_year = self.years.len() - 1;
        let months = &mut self.years[last_year].months;

        if months.last().map_or(true, |slot| slot.month != month) {
            months.push(MonthSlot {
                month,
                span: idx..idx,
            });
        }
        let last_month = months.len() - 1;
        months[last_month].span.end = idx + 1;

        self.days.push(day);
    }
}

/// Borrowed view of one year in a [`CalendarRange`].
#[derive(Debug, Clone)]
pub struct Year<'a> {
    pub year: i32,
    pub months: Vec<Month<'a>>,
}

impl<'a> Year<'a> {
    pub fn month(&self, month: u32) -> Option<&Month<'a>> {
        self.months.iter().find(|m| m.month == month)
    }

    pub fn first_month(&self) -> Option<u32> {
        self.months.first().map(|m| m.month)
    }
}

/// Borrowed view of one month; `days` is ordered by day of month.
#[derive(Debug, Clone, Copy)]
pub struct Month<'a> {
    pub year: i32,
    pub month: u32,
    pub days: &'a [Day],
}

impl<'a> Month<'a> {
    pub fn day(&self, day_of_month: u32) -> Option<&'a Day> {
        let idx = (day_of_month as usize).checked_sub(1)?;
        self.days
            .get(idx)
            .filter(|day| day.day_of_month() == day_of_month)
    }

    pub fn last_day(&self) -> u32 {
        self.days.last().map(|d| d.day_of_month()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32, commits: u32) -> Day {
        Day {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            commit_count: commits,
        }
    }

    #[test]
    fn push_day_opens_containers_lazily() {
        let mut range = CalendarRange::new();
        range.push_day(day(2022, 12, 30, 0));
        range.push_day(day(2022, 12, 31, 2));
        range.push_day(day(2023, 1, 1, 1));

        let years: Vec<_> = range.years().collect();
        assert_eq!(years.len(), 2);
        assert_eq!(years[0].year, 2022);
        assert_eq!(years[0].months.len(), 1);
        assert_eq!(years[0].months[0].days.len(), 2);
        assert_eq!(years[1].first_month(), Some(1));
        assert_eq!(range.total_commits(), 3);
    }

    #[test]
    fn month_day_lookup_requires_matching_position() {
        let mut range = CalendarRange::new();
        range.push_day(day(2023, 3, 1, 0));
        range.push_day(day(2023, 3, 2, 4));

        let year = range.year(2023).unwrap();
        let march = year.month(3).unwrap();
        assert_eq!(march.day(2).map(|d| d.commit_count), Some(4));
        assert!(march.day(0).is_none());
        assert!(march.day(3).is_none());
        assert_eq!(march.last_day(), 2);
        assert!(year.month(4).is_none());
    }
}
