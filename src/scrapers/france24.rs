//! France24 Africa section scraper.
//!
//! France24 links to African stories from several language editions, so any
//! link containing an `/afrique/` segment is kept.

use super::Site;
use crate::models::Source;

pub const SITE: Site = Site {
    source: Source::France24,
    index_url: "https://www.france24.com/fr/afrique/",
    section_marker: "/afrique/",
    min_title_chars: 10,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::SignalTable;
    use crate::pipeline::{Batch, aggregate};
    use crate::scrapers::extract_candidates;

    const MOCK_PAGE: &str = r#"
    <html>
    <body>
        <div class="articles">
            <a href="/fr/afrique/20240201-cameroun-sport">Cameroun : football africain</a>
            <a href="/fr/afrique/20240202-ghana-culture">Ghana : culture et traditions</a>
            <a href="/fr/afrique/20240203-egypte-tourisme">Égypte : relance du tourisme</a>
            <a href="/fr/asie/20240204-chine-news">Chine : actualités asiatiques</a>
            <a href="/fr/afrique/20240205-afrique-ouest">Afrique de l'Ouest : coopération régionale</a>
            <a href="/fr/afrique/20240206-madagascar-environnement">Madagascar : protection de l'environnement</a>
            <a href="/fr/afrique/20240202-ghana-culture#comments">Ghana : culture et traditions (réactions)</a>
        </div>
    </body>
    </html>
    "#;

    #[test]
    fn test_extract_france24_candidates() {
        let candidates = extract_candidates(MOCK_PAGE, &SITE).unwrap();
        assert_eq!(candidates.len(), 6);
        assert!(candidates.iter().all(|c| c.source == Source::France24));
        assert!(!candidates.iter().any(|c| c.url.contains("/asie/")));
    }

    #[test]
    fn test_france24_page_through_pipeline() {
        let candidates = extract_candidates(MOCK_PAGE, &SITE).unwrap();
        let batch = Batch::new(SITE.source, SITE.index_url, candidates);
        let results = aggregate(vec![batch], SignalTable::global());

        assert_eq!(results.len(), 5);
        assert_eq!(results[1].title, "Ghana : culture et traditions");
        assert_eq!(
            results[4].url,
            "https://www.france24.com/fr/afrique/20240206-madagascar-environnement"
        );
    }
}
