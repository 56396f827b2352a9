pub mod aggregate;
pub mod color;
pub mod exec;
pub mod layout;
pub mod output;
pub mod render;

pub use aggregate::{aggregate, observations_from_dates};
pub use color::{bucket, IntensityLevel};
pub use exec::exec;
pub use layout::{resolve_width, FixedWidth, LayoutPlan, TerminalWidth, WidthProvider};
pub use output::output_heatmap;
pub use render::{render_legend, render_year};
