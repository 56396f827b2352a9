use crate::error::{GitcalError, Result};
use chrono::{DateTime, Local, NaiveDate};
use gix::{discover, ObjectId, Repository};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open the repository containing `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = discover(path.as_ref())?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();
        debug!(path = %path.display(), "Opened repository");

        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Local calendar dates of every commit reachable from HEAD whose author
    /// email equals `email` exactly. Each commit is visited once.
    pub fn author_commit_dates(&self, email: &str) -> Result<Vec<NaiveDate>> {
        let mut head = self.repo.head()?;
        let head_commit = head.peel_to_commit_in_place()?;

        let mut dates = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: Vec<ObjectId> = vec![head_commit.id];

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} ({pos})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Walking commits...");

        while let Some(commit_id) = stack.pop() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            stack.extend(commit.parent_ids().map(|id| id.detach()));
            pb.inc(1);

            let author = commit.author()?;
            if author.email != email.as_bytes() {
                continue;
            }

            // Author date, not committer date.
            let secs = author.time()?.seconds;
            dates.push(local_date(secs)?);
        }

        pb.finish_and_clear();
        debug!(
            visited = seen.len(),
            matched = dates.len(),
            email,
            "Walked commit history"
        );
        Ok(dates)
    }
}

/// Calendar date of a unix timestamp in the local time zone.
pub fn local_date(secs: i64) -> Result<NaiveDate> {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.with_timezone(&Local).date_naive())
        .ok_or_else(|| GitcalError::InvalidDate(format!("Invalid timestamp: {secs}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_timestamp_is_rejected() {
        assert!(matches!(local_date(i64::MAX), Err(GitcalError::InvalidDate(_))));
    }

    #[test]
    fn local_date_is_within_a_day_of_utc() {
        // 2023-01-15T12:00:00Z
        let date = local_date(1_673_784_000).unwrap();
        let utc = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        assert!((date - utc).num_days().abs() <= 1);
    }

    #[test]
    fn opening_a_plain_directory_fails() {
        let dir = std::env::temp_dir().join(format!("gitcal-no-repo-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let opened = GitRepo::open(&dir);
        std::fs::remove_dir_all(&dir).ok();
        // the temp dir may itself sit inside a repository on some machines
        if let Err(err) = opened {
            assert!(matches!(err, GitcalError::GitDiscover(_)), "{err}");
        }
    }
}
