use super::color::{bucket, IntensityLevel};
use super::layout::{LayoutPlan, LABEL_MARGIN};
use crate::error::{GitcalError, Result};
use crate::model::{Month, Year};
use crate::util::{days_in_month, month_abbreviation, WEEKDAY_LABELS};
use crossterm::queue;
use crossterm::style::{
    Color, Print, PrintStyledContent, ResetColor, SetBackgroundColor, SetForegroundColor, Stylize,
};
use std::io::Write;

/// Week columns drawn per month; enough for any month length and start day.
pub const WEEKS_PER_MONTH: i64 = 6;

/// Day of month shown at (`row`, `week`) for a month whose first day falls on
/// weekday `first_weekday` (0 = Sunday). `week` counts from 1. The result may
/// fall outside the month, in which case the cell is blank.
pub fn day_at(first_weekday: u32, row: usize, week: i64) -> i64 {
    7 * week - first_weekday as i64 - 6 + row as i64
}

/// A month ready to draw: its days plus the weekday anchor and length, both
/// resolved once for all seven rows.
struct MonthColumn<'a> {
    month: &'a Month<'a>,
    first_weekday: u32,
    last_day: i64,
}

impl<'a> MonthColumn<'a> {
    fn new(month: &'a Month<'a>) -> Result<Self> {
        let first = month.day(1).ok_or_else(|| {
            GitcalError::Calendar(format!("{}-{:02} has no day 1", month.year, month.month))
        })?;
        Ok(Self {
            month,
            first_weekday: first.weekday().num_days_from_sunday(),
            last_day: days_in_month(month.year, month.month) as i64,
        })
    }

    fn render_row<W: Write>(&self, row: usize, out: &mut W) -> Result<()> {
        for week in 1..=WEEKS_PER_MONTH {
            let day_of_month = day_at(self.first_weekday, row, week);
            if !(1..=self.last_day).contains(&day_of_month) {
                queue!(out, Print(' '))?;
                continue;
            }

            let day = self.month.day(day_of_month as u32).ok_or_else(|| {
                GitcalError::Calendar(format!(
                    "{}-{:02}-{:02} missing from aggregated month",
                    self.month.year, self.month.month, day_of_month
                ))
            })?;
            let glyph = if day.commit_count == 0 { '.' } else { '*' };
            queue!(
                out,
                SetBackgroundColor(bucket(day.commit_count).color()),
                Print(glyph),
                ResetColor,
            )?;
        }
        Ok(())
    }
}

/// Prints one year: title, then for each planned line a month header followed
/// by the seven weekday rows.
pub fn render_year<W: Write>(year: &Year<'_>, plan: &LayoutPlan, out: &mut W) -> Result<()> {
    queue!(
        out,
        Print("\n"),
        PrintStyledContent(year.year.to_string().bold()),
        Print("\n"),
        Print("─".repeat(plan.rendered_width())),
        Print("\n"),
    )?;

    for line in &plan.lines {
        // Absent months take no column at all.
        let columns = line
            .iter()
            .filter_map(|&m| year.month(m))
            .map(MonthColumn::new)
            .collect::<Result<Vec<_>>>()?;

        queue!(out, Print(" ".repeat(LABEL_MARGIN)))?;
        for column in &columns {
            queue!(
                out,
                Print("  "),
                PrintStyledContent(month_abbreviation(column.month.month).green()),
                PrintStyledContent(" |".yellow()),
            )?;
        }
        queue!(out, Print("\n"))?;

        for (row, label) in WEEKDAY_LABELS.iter().enumerate() {
            queue!(
                out,
                PrintStyledContent(label.blue()),
                PrintStyledContent(": ".yellow()),
            )?;
            for column in &columns {
                column.render_row(row, out)?;
                queue!(out, PrintStyledContent("|".yellow()))?;
            }
            queue!(out, Print("\n"))?;
        }
    }

    out.flush()?;
    Ok(())
}

pub fn render_legend<W: Write>(out: &mut W) -> Result<()> {
    queue!(
        out,
        Print("\n"),
        PrintStyledContent("commits count guide:".blue()),
    )?;
    for level in IntensityLevel::ALL {
        queue!(
            out,
            Print(" "),
            SetBackgroundColor(level.color()),
            SetForegroundColor(Color::Red),
            Print(level.label()),
            ResetColor,
            Print(" "),
        )?;
    }
    queue!(out, Print("\n"))?;
    out.flush()?;
    Ok(())
}
