use crate::error::Result;
use crate::model::{CalendarRange, Day, DayObservation};
use crate::util::{first_of_month, last_of_month};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

/// Collapses raw commit dates into one observation per distinct date, ascending.
pub fn observations_from_dates<I>(dates: I) -> Vec<DayObservation>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut per_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for date in dates {
        *per_day.entry(date).or_insert(0) += 1;
    }

    per_day
        .into_iter()
        .map(|(date, commit_count)| DayObservation::new(date, commit_count))
        .collect()
}

/// Builds the gap-free calendar covering every month touched by `observations`.
///
/// The range runs from the first day of the earliest observed month to the last
/// day of the latest observed month, inclusive. Dates without an observation
/// get a zero-count day. An empty input yields an empty range.
pub fn aggregate(observations: &[DayObservation]) -> Result<CalendarRange> {
    let mut counts: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for obs in observations {
        let entry = counts.entry(obs.date).or_insert(0);
        *entry = entry.saturating_add(obs.commit_count);
    }

    let (Some(&earliest), Some(&latest)) = (counts.keys().next(), counts.keys().next_back())
    else {
        return Ok(CalendarRange::new());
    };

    let start = first_of_month(earliest);
    let end = last_of_month(latest)?;

    let mut range = CalendarRange::new();
    for date in start.iter_days().take_while(|date| *date <= end) {
        range.push_day(Day {
            date,
            commit_count: counts.get(&date).copied().unwrap_or(0),
        });
    }

    debug!(
        %start,
        %end,
        days = range.days().len(),
        commits = range.total_commits(),
        "Aggregated calendar range"
    );
    Ok(range)
}
