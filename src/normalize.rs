//! URL and title normalization.
//!
//! Every accepted link is reduced to a canonical absolute URL which doubles as
//! its identity key for deduplication. Canonical form:
//!
//! 1. Resolved against the page it was found on
//! 2. Scheme forced to `https`, host lower-cased
//! 3. Fragment removed
//! 4. Tracking parameters removed, remaining query parameters sorted
//! 5. Trailing slashes removed from non-root paths

use crate::errors::InvalidUrlError;
use crate::models::NormalizedRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Query parameters that only carry campaign or click tracking.
///
/// Any parameter starting with `utm_` is also dropped.
const TRACKING_PARAMS: &[&str] = &[
    "gclid", "gclsrc",            // Google Ads
    "fbclid",                     // Facebook
    "msclkid",                    // Microsoft/Bing
    "dclid",                      // DoubleClick
    "mc_cid", "mc_eid",           // Mailchimp
    "xtor",                       // AT Internet (RFI, France24)
    "at_medium", "at_campaign", "at_platform", "at_send_date",
    "at_creation", "at_recipient_id", "at_recipient_list",
    "_ga", "_gl",                 // Google Analytics
];

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("static regex is valid"));

fn is_tracking_param(key: &str) -> bool {
    key.starts_with("utm_") || TRACKING_PARAMS.contains(&key)
}

/// Canonicalize `url`, resolving it against `base` when it is relative.
///
/// # Errors
///
/// Returns [`InvalidUrlError`] when the input is blank, cannot be parsed, has
/// no host once resolved, or uses a scheme other than `http`/`https`.
///
/// # Examples
///
/// ```ignore
/// let url = normalize("/fr/afrique/20240101-mali/#top", "https://www.RFI.fr")?;
/// assert_eq!(url, "https://www.rfi.fr/fr/afrique/20240101-mali");
/// ```
pub fn normalize(url: &str, base: &str) -> Result<String, InvalidUrlError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(InvalidUrlError::Empty);
    }

    let base = Url::parse(base.trim()).map_err(|source| InvalidUrlError::Unparseable {
        url: base.to_string(),
        source,
    })?;
    let mut resolved = base.join(url).map_err(|source| InvalidUrlError::Unparseable {
        url: url.to_string(),
        source,
    })?;

    match resolved.scheme() {
        "http" | "https" => {}
        other => {
            return Err(InvalidUrlError::UnsupportedScheme {
                url: url.to_string(),
                scheme: other.to_string(),
            });
        }
    }
    if resolved.host_str().is_none_or(str::is_empty) {
        return Err(InvalidUrlError::NoHost {
            url: url.to_string(),
        });
    }

    resolved.set_fragment(None);
    if resolved.scheme() != "https" && resolved.set_scheme("https").is_err() {
        return Err(InvalidUrlError::UnsupportedScheme {
            url: url.to_string(),
            scheme: resolved.scheme().to_string(),
        });
    }

    let mut pairs: Vec<(String, String)> = resolved
        .query_pairs()
        .filter(|(key, _)| !is_tracking_param(key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    if pairs.is_empty() {
        resolved.set_query(None);
    } else {
        pairs.sort();
        resolved.query_pairs_mut().clear().extend_pairs(&pairs);
    }

    if resolved.path() != "/" && resolved.path().ends_with('/') {
        let trimmed = resolved.path().trim_end_matches('/').to_string();
        if trimmed.is_empty() {
            resolved.set_path("/");
        } else {
            resolved.set_path(&trimmed);
        }
    }

    Ok(resolved.into())
}

/// Trim a title and collapse internal whitespace runs to a single space.
pub fn normalize_title(title: &str) -> String {
    WHITESPACE_RE.replace_all(title.trim(), " ").into_owned()
}

/// The key two records are compared on when deduplicating.
pub fn identity_key(record: &NormalizedRecord) -> &str {
    &record.url
}
