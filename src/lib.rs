//! # African News Links
//!
//! Collects links to African news articles from publisher index pages (RFI
//! and France24), keeps the ones that concern Africa, canonicalizes and
//! deduplicates their URLs, and exports the result as JSON.
//!
//! ## Architecture
//!
//! 1. **Indexing** ([`scrapers`]): fetch each publisher's Africa page and
//!    extract raw `(title, url)` candidates
//! 2. **Aggregation** ([`pipeline`]): normalize ([`normalize`]), classify
//!    ([`classifier`]) and deduplicate ([`dedup`]) candidates across all
//!    batches, first-seen wins
//! 3. **Output** ([`outputs`]): write the ordered records as a JSON array
//!
//! Steps 2 and 3 never touch the network; step 1 never decides what is
//! African news.

pub mod classifier;
pub mod cli;
pub mod dedup;
pub mod errors;
pub mod models;
pub mod normalize;
pub mod outputs;
pub mod pipeline;
pub mod scrapers;
pub mod utils;

pub use classifier::{SignalTable, is_african};
pub use dedup::Deduplicator;
pub use errors::{InvalidUrlError, ScrapeError};
pub use models::{NormalizedRecord, RawCandidate, ResultSet, Source};
pub use normalize::normalize;
pub use pipeline::{Batch, aggregate};
