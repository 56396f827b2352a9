use crate::model::Year;
use console::Term;
use tracing::debug;

/// Columns used by a weekday label such as `"Sun: "`.
pub const LABEL_MARGIN: usize = 5;
/// Day cells per month column (one per week).
pub const MONTH_CELL_WIDTH: usize = 6;
/// A month column plus its trailing `|`.
pub const MONTH_STRIDE: usize = MONTH_CELL_WIDTH + 1;
/// Width assumed when the terminal size cannot be read.
pub const DEFAULT_WIDTH: usize = 80;

/// Source of the current output width.
pub trait WidthProvider {
    fn width(&self) -> Option<usize>;
}

/// Reads the width of the terminal attached to stdout; `None` when stdout is
/// not a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalWidth;

impl WidthProvider for TerminalWidth {
    fn width(&self) -> Option<usize> {
        Term::stdout()
            .size_checked()
            .map(|(_rows, cols)| cols as usize)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedWidth(pub usize);

impl WidthProvider for FixedWidth {
    fn width(&self) -> Option<usize> {
        Some(self.0)
    }
}

pub fn resolve_width(provider: &dyn WidthProvider) -> usize {
    match provider.width() {
        Some(width) if width > 0 => width,
        _ => {
            debug!(fallback = DEFAULT_WIDTH, "Terminal width unavailable");
            DEFAULT_WIDTH
        }
    }
}

/// How the months of one year are split across printed lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan {
    pub months_per_line: usize,
    /// Month numbers per line, in ascending order.
    pub lines: Vec<Vec<u32>>,
}

impl LayoutPlan {
    pub fn for_year(year: &Year<'_>, width: usize) -> Self {
        let months: Vec<u32> = year.months.iter().map(|m| m.month).collect();
        let plan = Self::for_months(&months, width);
        debug!(
            year = year.year,
            width,
            months_per_line = plan.months_per_line,
            lines = plan.lines.len(),
            "Planned year layout"
        );
        plan
    }

    /// Packs `months` into lines, starting from the first month given rather
    /// than from January.
    pub fn for_months(months: &[u32], width: usize) -> Self {
        let months_per_line = months_per_line(width);
        Self {
            months_per_line,
            lines: months.chunks(months_per_line).map(<[u32]>::to_vec).collect(),
        }
    }

    /// Rendered width of a full line: label margin plus every month column.
    pub fn line_width(&self) -> usize {
        LABEL_MARGIN + self.months_per_line * MONTH_STRIDE
    }

    /// Width of the widest line actually drawn, which is narrower than
    /// [`line_width`](Self::line_width) when the year has fewer months.
    pub fn rendered_width(&self) -> usize {
        let widest = self.lines.iter().map(Vec::len).max().unwrap_or(0);
        LABEL_MARGIN + widest * MONTH_STRIDE
    }
}

/// Searches offsets from just past the label margin until the remaining width
/// is an exact multiple of the month stride. Only one stride of offsets needs
/// trying; if none leaves room for a month the answer is a single month.
pub fn months_per_line(width: usize) -> usize {
    let first_offset = LABEL_MARGIN + 1;
    (first_offset..first_offset + MONTH_STRIDE)
        .find_map(|offset| {
            let remaining = (width + 1).checked_sub(offset)?;
            (remaining % MONTH_STRIDE == 0).then_some(remaining / MONTH_STRIDE)
        })
        .filter(|&count| count >= 1)
        .unwrap_or(1)
}
