//! Output generation for collected links.
//!
//! # Submodules
//!
//! - [`json`]: writes the result set as a JSON array of `{title, url, source}` objects
//!
//! # Output Structure
//!
//! ```text
//! african_news_links.json
//! [
//!   {
//!     "title": "Mali : nouvelles du Sahel",
//!     "url": "https://www.rfi.fr/fr/afrique/20240101-mali-actualites",
//!     "source": "RFI"
//!   }
//! ]
//! ```

pub mod json;
