//! Error types for link collection.
//!
//! Only two error kinds exist:
//! - [`InvalidUrlError`]: a candidate URL that cannot be turned into an absolute
//!   `https` URL. The pipeline drops the candidate and keeps going.
//! - [`ScrapeError`]: a publisher index page could not be fetched. The binary
//!   logs it and treats the site as an empty batch.

/// A URL that cannot be resolved to a canonical absolute form.
#[derive(Debug, thiserror::Error)]
pub enum InvalidUrlError {
    #[error("empty url")]
    Empty,

    #[error("cannot parse {url:?}: {source}")]
    Unparseable {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported scheme {scheme:?} in {url:?}")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("no host in {url:?}")]
    NoHost { url: String },
}

/// Failure to retrieve candidates from a publisher.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid site url: {0}")]
    SiteUrl(#[from] url::ParseError),

    #[error("invalid selector: {0}")]
    Selector(String),
}
