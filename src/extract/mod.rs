//! Pure identifier extraction from scraped title text.
//!
//! Everything here is stateless and does no I/O: regular expressions over
//! the title (or an item's description) produce the structured EUID, the
//! legacy EEC identifier, and the localized short name of the act.

pub mod euid;
pub mod patterns;

pub use euid::Euid;

use patterns::{EEC_ID_RE, EU_ID_RE, LOWERCASE_INITIAL_LANGUAGES, SHORT_NAME_PATTERNS};

/// The short name of an act, in two variants: as matched, and with the
/// issuing-institution phrase stripped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortName {
    pub with_institution: String,
    pub without_institution: String,
}

/// First occurrence of the canonical EUID form, e.g. "(EU) 2023/138".
pub fn extract_eu_id(text: &str) -> Option<String> {
    EU_ID_RE.find(text).map(|m| m.as_str().to_string())
}

/// First occurrence of a legacy EEC-style identifier, e.g. "88/610/EEC".
/// Older acts carry these inside the title itself.
pub fn extract_eec_id(text: &str) -> Option<String> {
    EEC_ID_RE.find(text).map(|m| m.as_str().to_string())
}

/// Applies the language's short-name pattern to the title. Returns `None`
/// when the language has no pattern or the title does not open with a
/// recognizable act phrase.
pub fn extract_short_name(title: &str, language: &str) -> Option<ShortName> {
    let language = language.to_lowercase();
    let pattern = SHORT_NAME_PATTERNS.get(language.as_str())?;
    let captures = pattern.captures(title)?;
    let full = captures.get(0)?;

    let with_institution = collapse_whitespace(full.as_str());
    let without_institution = match captures.name("institution") {
        Some(institution) => {
            let mut stripped = String::with_capacity(full.len());
            stripped.push_str(&title[full.start()..institution.start()]);
            stripped.push(' ');
            stripped.push_str(&title[institution.end()..full.end()]);
            collapse_whitespace(&stripped)
        }
        None => with_institution.clone(),
    };

    Some(ShortName {
        with_institution: normalize_initial(&with_institution, &language),
        without_institution: normalize_initial(&without_institution, &language),
    })
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Short names start lowercase in some languages and uppercase in the
/// rest; EUR-Lex titles themselves are not consistent about it.
fn normalize_initial(text: &str, language: &str) -> String {
    let lowercase = LOWERCASE_INITIAL_LANGUAGES.contains(&language);
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mapped: String = if lowercase {
                first.to_lowercase().collect()
            } else {
                first.to_uppercase().collect()
            };
            format!("{}{}", mapped, chars.as_str())
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_eec_id() {
        assert_eq!(
            extract_eec_id("Council Directive 88/610/EEC of 24 November 1988"),
            Some("88/610/EEC".to_string())
        );
        // German localization of the same suffix
        assert_eq!(
            extract_eec_id("Richtlinie 88/610/EWG des Rates vom 24. November 1988"),
            Some("88/610/EWG".to_string())
        );
        assert_eq!(extract_eec_id("Regulation (EU) 2023/138"), None);
    }

    #[test]
    fn test_extract_eu_id() {
        assert_eq!(
            extract_eu_id("(EU) 2023/138"),
            Some("(EU) 2023/138".to_string())
        );
        assert_eq!(
            extract_eu_id("regulation of the European Union (EU) 2016/679 on data protection"),
            Some("(EU) 2016/679".to_string())
        );
        assert_eq!(extract_eu_id("Council Directive 88/610/EEC"), None);
    }

    #[test]
    fn test_localize_euid() {
        let euid = Euid::new("(EU) 2023/138", "bg");
        assert_eq!(euid.localized_value(), "(ЕС) 2023/138");
        assert_eq!(euid.localized_without_parens(), "ЕС 2023/138");

        // Languages absent from the abbreviation table keep "EU"
        let euid = Euid::new("(EU) 2023/138", "de");
        assert_eq!(euid.localized_value(), "(EU) 2023/138");
        assert_eq!(euid.localized_without_parens(), "EU 2023/138");

        let euid = Euid::new("(EU) 2023/138", "sk");
        assert_eq!(euid.localized_value(), "(EÚ) 2023/138");
    }

    #[test]
    fn test_short_name_en_strips_institution() {
        let title = "Commission Implementing Regulation (EU) 2023/138 of 21 December 2022 \
                     laying down rules for the application of Regulation (EU) 2021/784";
        let short = extract_short_name(title, "en").expect("short name");
        assert_eq!(
            short.with_institution,
            "Commission Implementing Regulation (EU) 2023/138"
        );
        assert_eq!(
            short.without_institution,
            "Implementing Regulation (EU) 2023/138"
        );
    }

    #[test]
    fn test_short_name_en_without_institution_phrase() {
        let short = extract_short_name("Regulation (EU) 2016/679 of the European Parliament", "en")
            .expect("short name");
        assert_eq!(short.with_institution, "Regulation (EU) 2016/679");
        assert_eq!(short.without_institution, "Regulation (EU) 2016/679");
    }

    #[test]
    fn test_short_name_trailing_institution() {
        let title = "Durchführungsverordnung (EU) 2023/138 der Kommission vom 21. Dezember 2022";
        let short = extract_short_name(title, "de").expect("short name");
        assert_eq!(
            short.with_institution,
            "Durchführungsverordnung (EU) 2023/138 der Kommission"
        );
        assert_eq!(
            short.without_institution,
            "Durchführungsverordnung (EU) 2023/138"
        );
    }

    #[test]
    fn test_short_name_lowercase_initial() {
        let title = "Kommissionens genomförandeförordning (EU) 2023/138 av den 21 december 2022";
        let short = extract_short_name(title, "sv").expect("short name");
        assert_eq!(
            short.with_institution,
            "kommissionens genomförandeförordning (EU) 2023/138"
        );
        assert_eq!(
            short.without_institution,
            "genomförandeförordning (EU) 2023/138"
        );

        let title = "Règlement d'exécution (UE) 2023/138 de la Commission du 21 décembre 2022";
        let short = extract_short_name(title, "fr").expect("short name");
        assert_eq!(
            short.without_institution,
            "règlement d'exécution (UE) 2023/138"
        );
    }

    #[test]
    fn test_short_name_number_before_kind() {
        // Hungarian puts the number ahead of the act type
        let title = "A Bizottság (EU) 2023/138 végrehajtási rendelete (2022. december 21.)";
        let short = extract_short_name(title, "hu").expect("short name");
        assert_eq!(
            short.without_institution,
            "(EU) 2023/138 végrehajtási rendelete"
        );
    }

    #[test]
    fn test_short_name_unmatched_title() {
        assert_eq!(extract_short_name("Agreement on the withdrawal of the United Kingdom", "en"), None);
        // Unknown language code
        assert_eq!(extract_short_name("Regulation (EU) 2023/138", "xx"), None);
    }

    #[test]
    fn test_all_languages_have_patterns() {
        for language in crate::LANGUAGES {
            assert!(
                patterns::SHORT_NAME_PATTERNS.contains_key(language.to_lowercase().as_str()),
                "missing short-name pattern for {}",
                language
            );
        }
    }
}
