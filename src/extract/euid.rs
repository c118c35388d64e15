use super::patterns::eu_abbreviation;

/// The structured identifier of an EU act in its canonical English form,
/// paired with a target language for localization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Euid {
    pub value: String,
    pub language: String,
}

impl Euid {
    pub fn new(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: language.into().to_lowercase(),
        }
    }

    /// The identifier as it appears in the target language, with the "EU"
    /// token swapped for the language's own abbreviation. Languages without
    /// an entry in the abbreviation table keep "EU" unchanged.
    pub fn localized_value(&self) -> String {
        match eu_abbreviation(&self.language) {
            Some(abbreviation) => self.value.replace("EU", abbreviation),
            None => self.value.clone(),
        }
    }

    /// The localized identifier with the parentheses dropped,
    /// e.g. "EU 2023/138".
    pub fn localized_without_parens(&self) -> String {
        self.localized_value().replace(['(', ')'], "")
    }
}
