use super::{aggregate, observations_from_dates, output_heatmap};
use super::{FixedWidth, TerminalWidth, WidthProvider};
use crate::git::GitRepo;
use anyhow::Context;
use std::io;
use std::path::Path;
use tracing::info;

pub fn exec(
    repo_path: &Path,
    author_email: &str,
    width: Option<usize>,
    legend: bool,
) -> anyhow::Result<()> {
    let repo = GitRepo::open(repo_path).context("Failed to open git repository")?;

    let dates = repo
        .author_commit_dates(author_email)
        .context("Failed to walk commit history")?;
    let observations = observations_from_dates(dates);
    info!(
        author = author_email,
        repo = %repo.path().display(),
        days = observations.len(),
        "Collected commit observations"
    );

    let range = aggregate(&observations).context("Failed to aggregate commit calendar")?;

    let widths: Box<dyn WidthProvider> = match width {
        Some(columns) => Box::new(FixedWidth(columns)),
        None => Box::new(TerminalWidth),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output_heatmap(&range, author_email, widths.as_ref(), legend, &mut out)
        .context("Failed to render heatmap")?;

    Ok(())
}
