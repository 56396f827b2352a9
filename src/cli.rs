use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitcal")]
#[command(about = "Calendar heatmap of one author's commits, drawn in the terminal")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Path to git repository")]
    pub repo: PathBuf,

    #[arg(help = "Author email to chart (exact match)")]
    pub author_email: String,

    #[arg(
        long,
        value_name = "COLUMNS",
        value_parser = clap::value_parser!(u16).range(1..),
        help = "Override the detected terminal width"
    )]
    pub width: Option<u16>,

    #[arg(long, help = "Hide the commit count legend", default_value_t = false)]
    pub no_legend: bool,

    #[arg(short, long, help = "Enable debug logging on stderr")]
    pub verbose: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::heat::exec(
            &self.repo,
            &self.author_email,
            self.width.map(usize::from),
            !self.no_legend,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positionals_and_flags_parse() {
        let cli = Cli::try_parse_from(["gitcal", "repo", "dev@example.com", "--width", "100", "--no-legend"])
            .unwrap();
        assert_eq!(cli.repo, PathBuf::from("repo"));
        assert_eq!(cli.author_email, "dev@example.com");
        assert_eq!(cli.width, Some(100));
        assert!(cli.no_legend);
        assert!(!cli.verbose);
    }

    #[test]
    fn missing_author_is_a_usage_error() {
        let err = Cli::try_parse_from(["gitcal", "repo"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn structured_output_flag_is_unknown() {
        let err = Cli::try_parse_from(["gitcal", "repo", "a@b.c", "--json"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(Cli::try_parse_from(["gitcal", "repo", "a@b.c", "--width", "0"]).is_err());
    }
}
