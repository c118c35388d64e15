use std::collections::HashSet;

use crate::eurlex::Title;

/// One enrichment unit: a knowledge-base item, the act it describes, and
/// everything scraped for it so far. Built per candidate, carried through
/// fetch → extract → reconcile, then discarded.
#[derive(Clone, Debug)]
pub struct LawItem {
    pub item_id: String,
    pub celex_id: String,
    pub accepted_titles: Vec<Title>,
    pub disabled_languages: HashSet<String>,
    pub euid: Option<String>,
    pub something_to_upload: bool,
}

impl LawItem {
    pub fn new(item_id: impl Into<String>, celex_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            celex_id: celex_id.into(),
            accepted_titles: Vec::new(),
            disabled_languages: HashSet::new(),
            euid: None,
            something_to_upload: false,
        }
    }

    /// At most one title per language; later duplicates are dropped.
    pub fn add_title(&mut self, title: Title) {
        if self.title_for(&title.language).is_none() {
            self.accepted_titles.push(title);
        }
    }

    pub fn title_for(&self, language: &str) -> Option<&Title> {
        let language = language.to_uppercase();
        self.accepted_titles
            .iter()
            .find(|title| title.language == language)
    }

    /// The languages worth fetching: everything EUR-Lex offers for this act.
    pub fn enabled_languages(&self) -> Vec<String> {
        crate::LANGUAGES
            .iter()
            .filter(|language| !self.disabled_languages.contains(**language))
            .map(|language| language.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_title_per_language() {
        let mut law = LawItem::new("Q106120", "31988L0610");
        law.add_title(Title::new("First title", "EN", "31988L0610"));
        law.add_title(Title::new("Second title", "EN", "31988L0610"));

        assert_eq!(law.accepted_titles.len(), 1);
        assert_eq!(law.title_for("en").unwrap().value, "First title");
    }

    #[test]
    fn test_enabled_languages_exclude_disabled() {
        let mut law = LawItem::new("Q106120", "31988L0406");
        law.disabled_languages =
            ["ET", "CS", "HR"].iter().map(|s| s.to_string()).collect();

        let enabled = law.enabled_languages();
        assert_eq!(enabled.len(), crate::LANGUAGES.len() - 3);
        assert!(!enabled.contains(&"ET".to_string()));
        assert!(enabled.contains(&"EN".to_string()));
    }
}
