use super::layout::{resolve_width, LayoutPlan, WidthProvider};
use super::render::{render_legend, render_year};
use crate::error::Result;
use crate::model::CalendarRange;
use console::style;
use std::io::Write;

/// Writes the terminal heatmap for every year of `range`, or a distinct
/// notice when there is nothing to chart.
pub fn output_heatmap<W: Write>(
    range: &CalendarRange,
    author_email: &str,
    widths: &dyn WidthProvider,
    legend: bool,
    out: &mut W,
) -> Result<()> {
    if range.is_empty() {
        writeln!(
            out,
            "{}",
            style(format!("No commits were found for {author_email}")).yellow()
        )?;
        return Ok(());
    }

    for year in range.years() {
        // Width is re-read per year.
        let plan = LayoutPlan::for_year(&year, resolve_width(widths));
        render_year(&year, &plan, out)?;
    }

    if legend {
        render_legend(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heat::aggregate::aggregate;
    use crate::heat::layout::FixedWidth;
    use crate::model::DayObservation;
    use chrono::NaiveDate;
    use std::cell::Cell;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    struct CountingWidth(Cell<usize>);

    impl WidthProvider for CountingWidth {
        fn width(&self) -> Option<usize> {
            self.0.set(self.0.get() + 1);
            None
        }
    }

    #[test]
    fn empty_range_prints_no_data_notice() {
        let mut buf = Vec::new();
        output_heatmap(&CalendarRange::new(), "dev@example.com", &FixedWidth(80), true, &mut buf)
            .unwrap();
        let text = console::strip_ansi_codes(&String::from_utf8(buf).unwrap()).into_owned();
        assert_eq!(text, "No commits were found for dev@example.com\n");
    }

    #[test]
    fn width_is_queried_once_per_year() {
        let range = aggregate(&[
            DayObservation::new(ymd(2022, 12, 20), 1),
            DayObservation::new(ymd(2023, 1, 5), 1),
        ])
        .unwrap();
        let widths = CountingWidth(Cell::new(0));
        let mut buf = Vec::new();
        output_heatmap(&range, "dev@example.com", &widths, false, &mut buf).unwrap();

        assert_eq!(widths.0.get(), 2);
        let text = console::strip_ansi_codes(&String::from_utf8(buf).unwrap()).into_owned();
        assert!(text.contains("2022"));
        assert!(text.contains("2023"));
        assert!(!text.contains("commits count guide"));
    }

    #[test]
    fn legend_follows_the_last_year() {
        let range = aggregate(&[DayObservation::new(ymd(2023, 1, 15), 3)]).unwrap();
        let mut buf = Vec::new();
        output_heatmap(&range, "dev@example.com", &FixedWidth(80), true, &mut buf).unwrap();
        let text = console::strip_ansi_codes(&String::from_utf8(buf).unwrap()).into_owned();
        let legend_at = text.find("commits count guide:").unwrap();
        assert!(legend_at > text.find("Sat: ").unwrap());
    }
}
