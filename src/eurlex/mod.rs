//! EUR-Lex legal-content scraping: per-language title retrieval and
//! language-availability detection.

pub mod client;
pub mod fetcher;
pub mod title;

pub use fetcher::{FetchedTitles, TitleFetcher};
pub use title::Title;

use thiserror::Error;

pub const EURLEX_BASE: &str = "https://eur-lex.europa.eu";

/// Source URL of one act in one language.
pub fn legal_content_url(base: &str, language: &str, celex_id: &str) -> String {
    format!(
        "{}/legal-content/{}/TXT/?uri=CELEX:{}",
        base,
        language.to_uppercase(),
        celex_id
    )
}

/// A page that rendered (HTTP 200) but was missing the content we rely
/// on. Unlike a non-200 or a timeout this points at a selector or site
/// change, so it is collected and reported rather than silently skipped.
#[derive(Clone, Debug, Error)]
pub enum ScrapeError {
    #[error("page rendered without a title element: {url}")]
    TitleMissing { url: String },
    #[error("page rendered without a language selector: {url}")]
    LanguageSelectorMissing { url: String },
}

/// One structural scrape failure, kept for the end-of-run report.
#[derive(Clone, Debug)]
pub struct ScrapeDefect {
    pub celex_id: String,
    pub language: String,
    pub error: ScrapeError,
}
