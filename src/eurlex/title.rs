use crate::extract;

use super::{legal_content_url, EURLEX_BASE};

/// Wikidata rejects labels and aliases longer than this.
pub const WIKIDATA_TEXT_LIMIT: usize = 250;

/// One scraped act title in one language. Immutable once fetched;
/// everything else about it is derived.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Title {
    pub value: String,
    pub language: String,
    pub celex_id: String,
}

impl Title {
    pub fn new(
        value: impl Into<String>,
        language: impl Into<String>,
        celex_id: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            language: language.into().to_uppercase(),
            celex_id: celex_id.into(),
        }
    }

    pub fn too_long(&self) -> bool {
        self.value.chars().count() > WIKIDATA_TEXT_LIMIT
    }

    /// The page this title was scraped from, used as the reference URL.
    pub fn eurlex_url(&self) -> String {
        legal_content_url(EURLEX_BASE, &self.language, &self.celex_id)
    }

    pub fn extracted_eec_id(&self) -> Option<String> {
        extract::extract_eec_id(&self.value)
    }

    pub fn short_name_with_institution(&self) -> Option<String> {
        extract::extract_short_name(&self.value, &self.language).map(|s| s.with_institution)
    }

    pub fn short_name_without_institution(&self) -> Option<String> {
        extract::extract_short_name(&self.value, &self.language).map(|s| s.without_institution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eurlex_url() {
        let title = Title::new("Council Directive 88/610/EEC", "en", "31988L0610");
        assert_eq!(
            title.eurlex_url(),
            "https://eur-lex.europa.eu/legal-content/EN/TXT/?uri=CELEX:31988L0610"
        );
    }

    #[test]
    fn test_too_long_boundary() {
        let title = Title::new("x".repeat(250), "en", "31988L0610");
        assert!(!title.too_long());
        let title = Title::new("x".repeat(251), "en", "31988L0610");
        assert!(title.too_long());
    }

    #[test]
    fn test_language_uppercased() {
        let title = Title::new("Verordnung (EU) 2023/138", "de", "32023R0138");
        assert_eq!(title.language, "DE");
    }
}
