//! African-news detection for scraped links.
//!
//! A link is kept when any of three signals fires:
//!
//! | Signal | Matched against | Match rule |
//! |--------|-----------------|------------|
//! | Country name | title, URL path slug | whole words |
//! | Regional term | title | substring |
//! | URL marker | URL path | exact path segment |
//!
//! All matching happens on *folded* text: accents stripped, lower-cased, and
//! every run of non-alphanumeric characters reduced to one space, so
//! `Côte d'Ivoire`, `cote-d-ivoire` and `COTE D IVOIRE` are the same words.
//!
//! Categories are OR-ed together, so the detector leans towards recall.

use once_cell::sync::Lazy;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;
use url::Url;

/// Country names, French and English forms plus the aliases used in headlines.
pub const COUNTRIES: &[&str] = &[
    "Algérie", "Algeria", "Angola", "Bénin", "Benin", "Botswana",
    "Burkina Faso", "Burkina", "Burundi", "Cameroun", "Cameroon",
    "Cap-Vert", "Cabo Verde", "Cape Verde", "Centrafrique",
    "Central African Republic", "Tchad", "Chad", "Comores", "Comoros",
    "Congo", "RDC", "RD Congo", "DRC", "Djibouti", "Égypte", "Egypt",
    "Érythrée", "Eritrea", "Eswatini", "Swaziland", "Éthiopie", "Ethiopia",
    "Gabon", "Gambie", "Gambia", "Ghana", "Guinée", "Guinea",
    "Guinée-Bissau", "Guinea-Bissau", "Guinée équatoriale",
    "Equatorial Guinea", "Kenya", "Lesotho", "Libéria", "Liberia", "Libye",
    "Libya", "Madagascar", "Malawi", "Mali", "Maroc", "Morocco", "Maurice",
    "Mauritius", "Mauritanie", "Mauritania", "Mozambique", "Namibie",
    "Namibia", "Niger", "Nigéria", "Nigeria", "Ouganda", "Uganda", "Rwanda",
    "São Tomé", "Sénégal", "Senegal", "Seychelles", "Sierra Leone",
    "Somalie", "Somalia", "Somaliland", "Soudan", "Sudan", "Soudan du Sud",
    "South Sudan", "Afrique du Sud", "South Africa", "Tanzanie", "Tanzania",
    "Togo", "Tunisie", "Tunisia", "Zambie", "Zambia", "Zimbabwe",
    "Côte d'Ivoire", "Ivory Coast", "Sahara occidental", "Western Sahara",
];

/// Regional terms, matched as substrings of the folded title.
pub const REGIONS: &[&str] = &[
    "Afrique de l'Ouest", "Afrique centrale", "Afrique de l'Est",
    "Afrique australe", "Afrique du Nord", "Corne de l'Afrique",
    "West Africa", "Central Africa", "East Africa", "Southern Africa",
    "North Africa", "Horn of Africa", "sub-saharienne", "sub-saharan",
    "Sahel", "Maghreb", "Grands Lacs", "Afrique", "Africa",
];

/// Path segments that mark a publisher's Africa section.
pub const URL_MARKERS: &[&str] = &["afrique", "africa"];

static GLOBAL: Lazy<SignalTable> =
    Lazy::new(|| SignalTable::new(COUNTRIES, REGIONS, URL_MARKERS));

/// Which signal accepted a link, carrying the term as written in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Country(&'static str),
    Region(&'static str),
    UrlMarker(&'static str),
}

#[derive(Debug)]
struct Term {
    label: &'static str,
    folded: String,
}

impl Term {
    fn fold_all(labels: &[&'static str]) -> Vec<Term> {
        labels
            .iter()
            .map(|&label| Term {
                label,
                folded: fold(label),
            })
            .filter(|term| !term.folded.is_empty())
            .collect()
    }
}

/// Immutable reference data for the classifier.
///
/// Built once, then shared by reference. Terms are folded at construction so
/// that detection only folds the input.
#[derive(Debug)]
pub struct SignalTable {
    countries: Vec<Term>,
    regions: Vec<Term>,
    url_markers: Vec<Term>,
}

impl SignalTable {
    pub fn new(
        countries: &[&'static str],
        regions: &[&'static str],
        url_markers: &[&'static str],
    ) -> Self {
        Self {
            countries: Term::fold_all(countries),
            regions: Term::fold_all(regions),
            url_markers: Term::fold_all(url_markers),
        }
    }

    /// The process-wide table built from [`COUNTRIES`], [`REGIONS`] and [`URL_MARKERS`].
    pub fn global() -> &'static SignalTable {
        &GLOBAL
    }

    /// Return the first signal that fires for this link, if any.
    ///
    /// Checked in order: country in title, regional term in title, URL marker,
    /// country in URL slug.
    pub fn detect(&self, title: &str, url: &str) -> Option<Signal> {
        let title = fold(title);
        if let Some(term) = self.find_word(&title) {
            return Some(Signal::Country(term.label));
        }
        if let Some(term) = self.regions.iter().find(|t| title.contains(&t.folded)) {
            return Some(Signal::Region(term.label));
        }

        let segments = path_segments(url);
        if let Some(term) = self
            .url_markers
            .iter()
            .find(|t| segments.iter().any(|s| *s == t.folded))
        {
            return Some(Signal::UrlMarker(term.label));
        }

        let slug = segments.join(" ");
        self.find_word(&slug).map(|term| Signal::Country(term.label))
    }

    pub fn matches(&self, title: &str, url: &str) -> bool {
        self.detect(title, url).is_some()
    }

    fn find_word(&self, folded: &str) -> Option<&Term> {
        if folded.is_empty() {
            return None;
        }
        let haystack = format!(" {folded} ");
        self.countries
            .iter()
            .find(|t| haystack.contains(&format!(" {} ", t.folded)))
    }
}

/// Whether a link concerns Africa, using the process-wide [`SignalTable`].
pub fn is_african(title: &str, url: &str) -> bool {
    SignalTable::global().matches(title, url)
}

/// Strip accents, lower-case, and reduce non-alphanumeric runs to single spaces.
///
/// ```ignore
/// assert_eq!(fold("  Côte d'Ivoire!"), "cote d ivoire");
/// ```
pub fn fold(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    let mut pending_space = false;
    for c in text.nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_alphanumeric() {
            if pending_space && !folded.is_empty() {
                folded.push(' ');
            }
            pending_space = false;
            folded.extend(c.to_lowercase());
        } else {
            pending_space = true;
        }
    }
    folded
}

/// Folded, percent-decoded, non-empty path segments of `url`.
///
/// Relative or unparseable input is treated as a bare path.
fn path_segments(url: &str) -> Vec<String> {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.split(['?', '#']).next().unwrap_or_default().to_string(),
    };
    path.split('/')
        .map(|segment| {
            let decoded = urlencoding::decode(segment)
                .map(|s| s.into_owned())
                .unwrap_or_else(|_| segment.to_string());
            fold(&decoded)
        })
        .filter(|segment| !segment.is_empty())
        .collect()
}
