//! String helpers for logging and the console summary.

use crate::models::NormalizedRecord;
use std::fmt::Write;
use std::path::Path;

/// Number of records listed in the console summary.
pub const SUMMARY_PREVIEW: usize = 10;

/// Title width in the console summary, in characters.
pub const SUMMARY_TITLE_CHARS: usize = 80;

/// Truncate a string to `max` characters, appending `…` when cut.
///
/// Counts characters rather than bytes so accented titles are never split
/// inside a code point.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_chars("short", 100), "short");
/// assert_eq!(truncate_chars("Égypte : relance", 6), "Égypte…");
/// ```
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((byte_offset, _)) => format!("{}…", &s[..byte_offset]),
    }
}

/// Render the console report printed after a successful run.
///
/// Lists the first [`SUMMARY_PREVIEW`] records with their source and URL,
/// then how many were left out and where the file was written.
pub fn format_summary(records: &[NormalizedRecord], output: &Path) -> String {
    let mut out = String::new();
    writeln!(out, "\nFound {} African news articles:", records.len()).unwrap();

    for (i, record) in records.iter().take(SUMMARY_PREVIEW).enumerate() {
        writeln!(
            out,
            "{}. [{}] {}",
            i + 1,
            record.source,
            truncate_chars(&record.title, SUMMARY_TITLE_CHARS)
        )
        .unwrap();
        writeln!(out, "   URL: {}", record.url).unwrap();
    }

    if records.len() > SUMMARY_PREVIEW {
        writeln!(out, "... and {} more articles", records.len() - SUMMARY_PREVIEW).unwrap();
    }

    writeln!(out, "\nAll articles saved to {}", output.display()).unwrap();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Source;

    fn records(n: usize) -> Vec<NormalizedRecord> {
        (1..=n)
            .map(|i| NormalizedRecord {
                title: format!("Mali : dépêche {i}"),
                url: format!("https://www.rfi.fr/fr/afrique/{i}"),
                source: Source::Rfi,
            })
            .collect()
    }

    #[test]
    fn test_truncate_chars_short_string() {
        assert_eq!(truncate_chars("Hello, world!", 100), "Hello, world!");
        assert_eq!(truncate_chars("exact", 5), "exact");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("Égypte : relance", 6), "Égypte…");
        assert_eq!(truncate_chars("ééé", 2), "éé…");
    }

    #[test]
    fn test_summary_lists_records() {
        let summary = format_summary(&records(2), Path::new("out.json"));
        assert!(summary.contains("Found 2 African news articles:"));
        assert!(summary.contains("1. [RFI] Mali : dépêche 1\n   URL: https://www.rfi.fr/fr/afrique/1\n"));
        assert!(summary.contains("2. [RFI] Mali : dépêche 2"));
        assert!(!summary.contains("more articles"));
        assert!(summary.ends_with("All articles saved to out.json\n"));
    }

    #[test]
    fn test_summary_caps_preview() {
        let summary = format_summary(&records(13), Path::new("out.json"));
        assert!(summary.contains("10. [RFI] Mali : dépêche 10"));
        assert!(!summary.contains("11. [RFI]"));
        assert!(summary.contains("... and 3 more articles"));
    }

    #[test]
    fn test_summary_truncates_long_titles() {
        let mut long = records(1);
        long[0].title = "a".repeat(120);
        let summary = format_summary(&long, Path::new("out.json"));
        assert!(summary.contains(&format!("1. [RFI] {}…\n", "a".repeat(80))));
    }
}
