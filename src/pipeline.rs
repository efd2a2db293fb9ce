//! Aggregation of per-publisher candidate batches into one result set.
//!
//! Each candidate goes through the same steps, in order:
//!
//! 1. Title normalization
//! 2. URL normalization (invalid URLs are dropped)
//! 3. Classification (non-African links are dropped)
//! 4. Deduplication (repeats of an already admitted URL are dropped)
//!
//! Batches are processed in the order given and candidates in the order
//! their scraper produced them, so the first publisher to list an article
//! keeps it.

use crate::classifier::SignalTable;
use crate::dedup::Deduplicator;
use crate::models::{NormalizedRecord, RawCandidate, ResultSet, Source};
use crate::normalize::{normalize, normalize_title};
use tracing::{debug, info, instrument};

/// All candidates collected from one publisher in one run.
#[derive(Debug, Clone)]
pub struct Batch {
    /// Publisher the candidates came from.
    pub source: Source,
    /// URL relative candidate links are resolved against.
    pub base_url: String,
    /// Candidates in extraction order.
    pub candidates: Vec<RawCandidate>,
}

impl Batch {
    pub fn new(source: Source, base_url: impl Into<String>, candidates: Vec<RawCandidate>) -> Self {
        Self {
            source,
            base_url: base_url.into(),
            candidates,
        }
    }
}

/// Why candidates of a batch were kept or dropped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    pub admitted: usize,
    pub invalid_url: usize,
    pub not_african: usize,
    pub duplicate: usize,
}

/// Classify, canonicalize and deduplicate `batches` into one ordered result set.
///
/// The returned records are in first-admission order across the batches as
/// supplied. Candidates with unusable URLs are skipped; nothing here fails.
#[instrument(level = "info", skip_all)]
pub fn aggregate<I>(batches: I, signals: &SignalTable) -> ResultSet
where
    I: IntoIterator<Item = Batch>,
{
    let mut dedup = Deduplicator::new();
    let mut results = ResultSet::new();

    for batch in batches {
        let stats = process_batch(
            batch.source,
            &batch.base_url,
            batch.candidates,
            signals,
            &mut dedup,
            &mut results,
        );
        info!(
            source = %batch.source,
            admitted = stats.admitted,
            invalid_url = stats.invalid_url,
            not_african = stats.not_african,
            duplicate = stats.duplicate,
            "Processed batch"
        );
    }

    info!(count = results.len(), "Aggregation complete");
    results
}

fn process_batch(
    source: Source,
    base_url: &str,
    candidates: Vec<RawCandidate>,
    signals: &SignalTable,
    dedup: &mut Deduplicator,
    results: &mut ResultSet,
) -> BatchStats {
    let mut stats = BatchStats::default();

    for candidate in candidates {
        let title = normalize_title(&candidate.title);

        let url = match normalize(&candidate.url, base_url) {
            Ok(url) => url,
            Err(e) => {
                debug!(%source, url = %candidate.url, error = %e, "Dropping candidate with invalid url");
                stats.invalid_url += 1;
                continue;
            }
        };

        if !signals.matches(&title, &url) {
            debug!(%source, %url, %title, "Dropping non-African candidate");
            stats.not_african += 1;
            continue;
        }

        let record = NormalizedRecord {
            title,
            url,
            source: candidate.source,
        };
        if !dedup.admit(&record) {
            debug!(%source, url = %record.url, "Dropping duplicate candidate");
            stats.duplicate += 1;
            continue;
        }

        results.push(record);
        stats.admitted += 1;
    }

    stats
}
