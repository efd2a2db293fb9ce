//! RFI (Radio France Internationale) Africa section scraper.
//!
//! Article links on the index page are site-relative, e.g.
//! `/fr/afrique/20240101-mali-actualites`, and are only kept when they stay
//! inside `/fr/afrique/`.

use super::Site;
use crate::models::Source;

pub const SITE: Site = Site {
    source: Source::Rfi,
    index_url: "https://www.rfi.fr/fr/afrique/",
    section_marker: "/fr/afrique/",
    min_title_chars: 10,
};
