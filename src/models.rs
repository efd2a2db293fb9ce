//! Data models for scraped link candidates and their normalized records.
//!
//! - [`RawCandidate`]: an anchor as extracted from a publisher page
//! - [`NormalizedRecord`]: an accepted, canonicalized article link
//! - [`Source`]: the publisher a record was collected from
//! - [`ResultSet`]: the ordered, deduplicated output of one run

use serde::{Deserialize, Serialize};
use std::fmt;

/// Publisher tag attached to every candidate and record.
///
/// Serialized with the publisher's own spelling (`"RFI"`, `"France24"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Source {
    #[serde(rename = "RFI")]
    Rfi,
    #[serde(rename = "France24")]
    France24,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Rfi => "RFI",
            Source::France24 => "France24",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unprocessed (title, url) pair pulled out of a publisher page.
///
/// The title may carry stray whitespace and the url may be relative to the
/// page it was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCandidate {
    /// Anchor text as found in the page.
    pub title: String,
    /// Raw `href` value.
    pub url: String,
    /// Publisher the anchor was found on.
    pub source: Source,
}

impl RawCandidate {
    pub fn new(title: impl Into<String>, url: impl Into<String>, source: Source) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            source,
        }
    }
}

/// An accepted article link.
///
/// Field order here is the field order of the exported JSON objects.
/// `url` is always absolute `https` with no fragment and no trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NormalizedRecord {
    /// Trimmed title with internal whitespace collapsed.
    pub title: String,
    /// Canonical absolute URL, also the record's identity key.
    pub url: String,
    /// Publisher the record was first seen on.
    pub source: Source,
}

/// Ordered records, unique by identity key, in first-seen order.
pub type ResultSet = Vec<NormalizedRecord>;
