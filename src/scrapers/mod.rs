//! Publisher scrapers that turn an index page into raw link candidates.
//!
//! Each publisher module exposes a [`Site`] definition; [`index_site`] turns it
//! into one [`Batch`] in two steps:
//!
//! 1. **Fetching**: download the publisher's Africa index page
//! 2. **Extraction**: collect every `<a href>` whose resolved URL lies under the
//!    site's section and whose text is long enough to be a headline
//!
//! # Supported Sources
//!
//! | Source | Module | Index page |
//! |--------|--------|------------|
//! | RFI | [`rfi`] | `https://www.rfi.fr/fr/afrique/` |
//! | France24 | [`france24`] | `https://www.france24.com/fr/afrique/` |
//!
//! Classification, URL canonicalization and deduplication are left to
//! [`crate::pipeline`].

pub mod france24;
pub mod rfi;

use crate::errors::ScrapeError;
use crate::models::{RawCandidate, Source};
use crate::normalize::normalize_title;
use crate::pipeline::Batch;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

/// Desktop browser User-Agent; both publishers serve reduced pages to unknown agents.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Static description of one publisher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site {
    pub source: Source,
    /// Page listing the publisher's African news; also the base for relative links.
    pub index_url: &'static str,
    /// Substring every kept link's resolved URL must contain.
    pub section_marker: &'static str,
    /// Anchors whose text is this many characters or shorter are skipped.
    pub min_title_chars: usize,
}

/// Build the HTTP client shared by all scrapers.
pub fn build_client(timeout: Duration) -> Result<Client, ScrapeError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

/// Fetch a site's index page and extract its candidates.
#[instrument(level = "info", skip_all, fields(source = %site.source, url = site.index_url))]
pub async fn index_site(client: &Client, site: &Site) -> Result<Batch, ScrapeError> {
    let html = client
        .get(site.index_url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    debug!(bytes = html.len(), "Fetched index page");

    let candidates = extract_candidates(&html, site)?;
    info!(count = candidates.len(), "Extracted candidates");

    Ok(Batch::new(site.source, site.index_url, candidates))
}

/// Pull candidate links out of an index page.
///
/// Kept in page order. The candidate's `url` is the raw `href`; it is only
/// resolved here to check the section marker.
pub fn extract_candidates(html: &str, site: &Site) -> Result<Vec<RawCandidate>, ScrapeError> {
    let base = Url::parse(site.index_url)?;
    let document = Html::parse_document(html);
    let link_selector =
        Selector::parse("a[href]").map_err(|e| ScrapeError::Selector(e.to_string()))?;

    let mut candidates = Vec::new();
    for element in document.select(&link_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if href.trim().is_empty() {
            continue;
        }

        let title = normalize_title(&element.text().collect::<Vec<_>>().join(" "));
        if title.chars().count() <= site.min_title_chars {
            debug!(%href, %title, "Skipping short anchor text");
            continue;
        }

        // Unresolvable hrefs are passed through; the pipeline rejects them.
        if let Ok(resolved) = base.join(href.trim()) {
            if !resolved.as_str().contains(site.section_marker) {
                debug!(url = %resolved, "Skipping link outside section");
                continue;
            }
        }

        candidates.push(RawCandidate::new(title, href, site.source));
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: Site = Site {
        source: Source::Rfi,
        index_url: "https://news.example.com/fr/afrique/",
        section_marker: "/afrique/",
        min_title_chars: 10,
    };

    #[test]
    fn test_extracts_in_page_order() {
        let html = r#"
            <ul>
              <li><a href="/fr/afrique/one">Mali : premier titre</a></li>
              <li><a href="two">Ghana : second titre</a></li>
            </ul>"#;

        let candidates = extract_candidates(html, &SITE).unwrap();
        assert_eq!(
            candidates,
            vec![
                RawCandidate::new("Mali : premier titre", "/fr/afrique/one", Source::Rfi),
                RawCandidate::new("Ghana : second titre", "two", Source::Rfi),
            ]
        );
    }

    #[test]
    fn test_skips_short_titles_and_empty_hrefs() {
        let html = r#"
            <a href="/fr/afrique/a">Mali</a>
            <a href="/fr/afrique/b">Exactly10!</a>
            <a href="">Sénégal : élections</a>
            <a>Togo : pas de lien ici</a>
            <a href="/fr/afrique/c">Longer than ten</a>"#;

        let candidates = extract_candidates(html, &SITE).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].url, "/fr/afrique/c");
    }

    #[test]
    fn test_skips_links_outside_section() {
        let html = r#"
            <a href="/fr/europe/x">France : actualités européennes</a>
            <a href="https://other.example.org/fr/afrique/y">Égypte : relance du tourisme</a>"#;

        let candidates = extract_candidates(html, &SITE).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].title, "Égypte : relance du tourisme");
    }

    #[test]
    fn test_collapses_nested_text() {
        let html = r#"<a href="/fr/afrique/z"><span>Afrique de l'Ouest</span>
            <strong>coopération   régionale</strong></a>"#;

        let candidates = extract_candidates(html, &SITE).unwrap();
        assert_eq!(candidates[0].title, "Afrique de l'Ouest coopération régionale");
    }

    #[test]
    fn test_build_client() {
        assert!(build_client(Duration::from_secs(10)).is_ok());
    }
}
