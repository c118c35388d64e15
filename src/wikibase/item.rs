//! Typed view over a knowledge-base item.
//!
//! The wire representation is a deeply nested JSON document; everything
//! downstream (the reconciliation engine above all) works against the
//! accessors here instead.

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde_json::Value;

use super::{entity_url, PROP_REFERENCE_URL};

/// One statement under some property, reduced to the parts reconciliation
/// needs: its monolingual text and which reference URLs it already
/// carries. The raw reference blocks are kept so a merge can rewrite the
/// statement without losing them.
#[derive(Clone, Debug)]
pub struct Statement {
    pub id: Option<String>,
    pub property: String,
    pub language: String,
    pub text: String,
    pub reference_urls: Vec<String>,
    pub raw_references: Vec<Value>,
}

#[derive(Clone, Debug, Default)]
pub struct ItemView {
    id: String,
    labels: HashMap<String, String>,
    descriptions: HashMap<String, String>,
    aliases: HashMap<String, Vec<String>>,
    statements: HashMap<String, Vec<Statement>>,
}

impl ItemView {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Builds a view from one entity of a `wbgetentities` response.
    pub fn from_entity_json(entity: &Value) -> Result<Self> {
        let id = entity
            .get("id")
            .and_then(Value::as_str)
            .context("entity JSON without an id")?;
        let mut view = ItemView::new(id);

        if let Some(labels) = entity.get("labels").and_then(Value::as_object) {
            for (language, label) in labels {
                if let Some(value) = label.get("value").and_then(Value::as_str) {
                    view.set_label(language, value);
                }
            }
        }

        if let Some(descriptions) = entity.get("descriptions").and_then(Value::as_object) {
            for (language, description) in descriptions {
                if let Some(value) = description.get("value").and_then(Value::as_str) {
                    view.set_description(language, value);
                }
            }
        }

        if let Some(aliases) = entity.get("aliases").and_then(Value::as_object) {
            for (language, entries) in aliases {
                for entry in entries.as_array().into_iter().flatten() {
                    if let Some(value) = entry.get("value").and_then(Value::as_str) {
                        view.add_alias(language, value);
                    }
                }
            }
        }

        if let Some(claims) = entity.get("claims").and_then(Value::as_object) {
            for (property, entries) in claims {
                for claim in entries.as_array().into_iter().flatten() {
                    if let Some(statement) = parse_statement(property, claim) {
                        view.add_statement(statement);
                    }
                }
            }
        }

        Ok(view)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn entity_url(&self) -> String {
        entity_url(&self.id)
    }

    pub fn label(&self, language: &str) -> Option<&str> {
        self.labels.get(language).map(String::as_str)
    }

    pub fn set_label(&mut self, language: &str, text: &str) {
        self.labels.insert(language.to_string(), text.to_string());
    }

    pub fn description(&self, language: &str) -> Option<&str> {
        self.descriptions.get(language).map(String::as_str)
    }

    pub fn set_description(&mut self, language: &str, text: &str) {
        self.descriptions
            .insert(language.to_string(), text.to_string());
    }

    pub fn aliases(&self, language: &str) -> &[String] {
        self.aliases.get(language).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn add_alias(&mut self, language: &str, text: &str) {
        let entries = self.aliases.entry(language.to_string()).or_default();
        if !entries.iter().any(|alias| alias == text) {
            entries.push(text.to_string());
        }
    }

    pub fn statements(&self, property: &str) -> &[Statement] {
        self.statements
            .get(property)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn add_statement(&mut self, statement: Statement) {
        self.statements
            .entry(statement.property.clone())
            .or_default()
            .push(statement);
    }

    pub fn find_statement(&self, statement_id: &str) -> Option<&Statement> {
        self.statements
            .values()
            .flatten()
            .find(|statement| statement.id.as_deref() == Some(statement_id))
    }
}

/// Reduces one claim to a [`Statement`]. Claims whose main snak is not a
/// monolingual text value are not interesting here and are dropped.
fn parse_statement(property: &str, claim: &Value) -> Option<Statement> {
    let datavalue = claim.get("mainsnak")?.get("datavalue")?.get("value")?;
    let text = datavalue.get("text")?.as_str()?;
    let language = datavalue.get("language")?.as_str()?;

    let id = claim.get("id").and_then(Value::as_str).map(str::to_string);

    let mut reference_urls = Vec::new();
    let mut raw_references = Vec::new();
    for reference in claim
        .get("references")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
    {
        raw_references.push(reference.clone());
        for snak in reference
            .get("snaks")
            .and_then(|snaks| snaks.get(PROP_REFERENCE_URL))
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
        {
            if let Some(url) = snak
                .get("datavalue")
                .and_then(|datavalue| datavalue.get("value"))
                .and_then(Value::as_str)
            {
                reference_urls.push(url.to_string());
            }
        }
    }

    Some(Statement {
        id,
        property: property.to_string(),
        language: language.to_string(),
        text: text.to_string(),
        reference_urls,
        raw_references,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entity_fixture() -> Value {
        json!({
            "id": "Q106120",
            "labels": {
                "en": {"language": "en", "value": "Council Directive 88/610/EEC"},
                "de": {"language": "de", "value": "Richtlinie 88/610/EWG"}
            },
            "descriptions": {
                "en": {"language": "en", "value": "European Union directive"}
            },
            "aliases": {
                "en": [
                    {"language": "en", "value": "88/610/EEC"},
                    {"language": "en", "value": "Directive 88/610/EEC"}
                ]
            },
            "claims": {
                "P1448": [{
                    "id": "Q106120$11111111-2222-3333-4444-555555555555",
                    "mainsnak": {
                        "snaktype": "value",
                        "property": "P1448",
                        "datavalue": {
                            "value": {"text": "Council Directive 88/610/EEC", "language": "en"},
                            "type": "monolingualtext"
                        }
                    },
                    "type": "statement",
                    "rank": "normal",
                    "references": [{
                        "snaks": {
                            "P854": [{
                                "snaktype": "value",
                                "property": "P854",
                                "datavalue": {
                                    "value": "https://eur-lex.europa.eu/legal-content/EN/TXT/?uri=CELEX:31988L0610",
                                    "type": "string"
                                }
                            }]
                        },
                        "snaks-order": ["P854"]
                    }]
                }],
                "P476": [{
                    "id": "Q106120$66666666-7777-8888-9999-000000000000",
                    "mainsnak": {
                        "snaktype": "value",
                        "property": "P476",
                        "datavalue": {"value": "31988L0610", "type": "string"}
                    },
                    "type": "statement",
                    "rank": "normal"
                }]
            }
        })
    }

    #[test]
    fn test_from_entity_json() {
        let view = ItemView::from_entity_json(&entity_fixture()).unwrap();

        assert_eq!(view.id(), "Q106120");
        assert_eq!(view.label("en"), Some("Council Directive 88/610/EEC"));
        assert_eq!(view.label("fr"), None);
        assert_eq!(view.description("en"), Some("European Union directive"));
        assert_eq!(view.aliases("en").len(), 2);
        assert!(view.aliases("de").is_empty());

        let statements = view.statements("P1448");
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].language, "en");
        assert_eq!(statements[0].text, "Council Directive 88/610/EEC");
        assert_eq!(
            statements[0].reference_urls,
            vec!["https://eur-lex.europa.eu/legal-content/EN/TXT/?uri=CELEX:31988L0610"]
        );

        // Claims without monolingual text are dropped
        assert!(view.statements("P476").is_empty());
    }

    #[test]
    fn test_add_alias_deduplicates() {
        let mut view = ItemView::new("Q1");
        view.add_alias("en", "88/610/EEC");
        view.add_alias("en", "88/610/EEC");
        assert_eq!(view.aliases("en").len(), 1);
    }

    #[test]
    fn test_find_statement() {
        let view = ItemView::from_entity_json(&entity_fixture()).unwrap();
        assert!(view
            .find_statement("Q106120$11111111-2222-3333-4444-555555555555")
            .is_some());
        assert!(view.find_statement("Q1$nope").is_none());
    }
}
