//! Command-line interface definitions.
//!
//! All options can be given as flags; the output path and HTTP settings can
//! also come from environment variables.

use crate::scrapers::{Site, france24, rfi};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Both publishers, default output file
/// african_news_links
///
/// # RFI only, custom output, debug logging
/// african_news_links --site rfi -o out/rfi.json -v
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output JSON file
    #[arg(
        short,
        long,
        env = "AFRICAN_NEWS_OUTPUT",
        default_value = "african_news_links.json"
    )]
    pub output: PathBuf,

    /// Which site to scrape
    #[arg(long, value_enum, default_value_t = SiteSelection::All)]
    pub site: SiteSelection,

    /// Verbose output (debug logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// HTTP request timeout in seconds
    #[arg(long, env = "AFRICAN_NEWS_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Pause between two site requests, in milliseconds
    #[arg(long, env = "AFRICAN_NEWS_DELAY_MS", default_value_t = 1000)]
    pub delay_ms: u64,
}

/// Publishers to scrape in one run.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Rfi,
    #[value(name = "france24")]
    France24,
}

impl SiteSelection {
    /// Selected sites, in the order their batches are aggregated.
    pub fn sites(self) -> Vec<&'static Site> {
        match self {
            SiteSelection::All => vec![&rfi::SITE, &france24::SITE],
            SiteSelection::Rfi => vec![&rfi::SITE],
            SiteSelection::France24 => vec![&france24::SITE],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Source;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["african_news_links"]).unwrap();

        assert_eq!(cli.site, SiteSelection::All);
        assert!(!cli.verbose);
        assert_eq!(cli.timeout_secs, 10);
        assert_eq!(cli.delay_ms, 1000);
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "african_news_links",
            "--output",
            "./out/links.json",
            "--site",
            "france24",
            "--verbose",
        ]);

        assert_eq!(cli.output, PathBuf::from("./out/links.json"));
        assert_eq!(cli.site, SiteSelection::France24);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["african_news_links", "-o", "/tmp/links.json", "-v"]);

        assert_eq!(cli.output, PathBuf::from("/tmp/links.json"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_rejects_unknown_site() {
        assert!(Cli::try_parse_from(["african_news_links", "--site", "bbc"]).is_err());
    }

    #[test]
    fn test_site_selection_order() {
        let sources: Vec<Source> = SiteSelection::All.sites().iter().map(|s| s.source).collect();
        assert_eq!(sources, vec![Source::Rfi, Source::France24]);
        assert_eq!(SiteSelection::Rfi.sites()[0].source, Source::Rfi);
        assert_eq!(SiteSelection::France24.sites()[0].source, Source::France24);
    }
}
