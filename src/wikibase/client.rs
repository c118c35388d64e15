//! MediaWiki API client: reads one entity into an [`ItemView`] and
//! applies a computed write-set as a single `wbeditentity` edit.

use anyhow::{Context, Result};
use serde_json::{json, Map, Value};
use tokio::time::Duration;
use tracing::{debug, info};

use super::item::ItemView;
use super::{EURLEX_ITEM, PROP_REFERENCE_URL, PROP_RETRIEVED, PROP_STATED_IN};
use crate::config::Config;
use crate::reconcile::{ReferenceBundle, StatementOp, WriteSet};
use crate::TARGET_WIKIBASE;

const API_TIMEOUT: Duration = Duration::from_secs(60);

/// Edit summary attached to every write, linking back to the tool page.
pub const EDIT_SUMMARY: &str = "Adding names with [[Wikidata:Tools/Lexica|Lexica]]";

pub struct WikibaseClient {
    client: reqwest::Client,
    api_url: String,
}

impl WikibaseClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(API_TIMEOUT)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build wikibase HTTP client: {}", e))?;

        Ok(Self {
            client,
            api_url: config.wikibase_api.clone(),
        })
    }

    pub fn http_client(&self) -> &reqwest::Client {
        &self.client
    }

    pub async fn get_item(&self, item_id: &str) -> Result<ItemView> {
        debug!(target: TARGET_WIKIBASE, "Fetching entity {}", item_id);

        let payload: Value = self
            .client
            .get(&self.api_url)
            .query(&[
                ("action", "wbgetentities"),
                ("ids", item_id),
                ("props", "labels|descriptions|aliases|claims"),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let entity = payload
            .get("entities")
            .and_then(|entities| entities.get(item_id))
            .with_context(|| format!("No entity {} in wbgetentities response", item_id))?;
        if entity.get("missing").is_some() {
            anyhow::bail!("Entity {} does not exist", item_id);
        }

        ItemView::from_entity_json(entity)
    }

    /// Applies the whole write-set as one `wbeditentity` call, so labels,
    /// aliases and statements land (or fail) together.
    pub async fn apply_writes(&self, item: &ItemView, writes: &WriteSet) -> Result<()> {
        let data = build_edit_data(item, writes);
        debug!(target: TARGET_WIKIBASE, "Editing {} with {}", item.id(), data);

        let data = data.to_string();
        let params = [
            ("action", "wbeditentity"),
            ("id", item.id()),
            ("data", data.as_str()),
            ("summary", EDIT_SUMMARY),
            ("token", "+\\"),
            ("format", "json"),
        ];

        let payload: Value = self
            .client
            .post(&self.api_url)
            .form(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if payload.get("success").and_then(Value::as_i64) != Some(1) {
            let info = payload
                .get("error")
                .and_then(|error| error.get("info"))
                .and_then(Value::as_str)
                .unwrap_or("unknown error");
            anyhow::bail!("wbeditentity on {} failed: {}", item.id(), info);
        }

        info!(target: TARGET_WIKIBASE, "Edit applied to {}", item.id());
        Ok(())
    }
}

fn build_edit_data(item: &ItemView, writes: &WriteSet) -> Value {
    let mut data = Map::new();

    if !writes.labels.is_empty() {
        let mut labels = Map::new();
        for label in &writes.labels {
            labels.insert(
                label.language.clone(),
                json!({"language": label.language, "value": label.text}),
            );
        }
        data.insert("labels".to_string(), Value::Object(labels));
    }

    if !writes.aliases.is_empty() {
        let mut aliases = Map::new();
        for alias in &writes.aliases {
            let entries: Vec<Value> = alias
                .values
                .iter()
                .map(|value| json!({"language": alias.language, "value": value, "add": ""}))
                .collect();
            aliases.insert(alias.language.clone(), Value::Array(entries));
        }
        data.insert("aliases".to_string(), Value::Object(aliases));
    }

    let mut claims = Vec::new();
    for op in &writes.statements {
        match op {
            StatementOp::Append {
                property,
                language,
                text,
                reference,
            } => claims.push(json!({
                "mainsnak": mainsnak_json(property, language, text),
                "type": "statement",
                "rank": "normal",
                "references": [reference_json(reference)],
            })),
            StatementOp::MergeReference {
                statement_id,
                reference,
            } => {
                // Resend the statement under its id with the reference
                // appended; the existing reference blocks ride along.
                if let Some(statement) = item.find_statement(statement_id) {
                    let mut references = statement.raw_references.clone();
                    references.push(reference_json(reference));
                    claims.push(json!({
                        "id": statement_id,
                        "mainsnak": mainsnak_json(
                            &statement.property,
                            &statement.language,
                            &statement.text,
                        ),
                        "type": "statement",
                        "rank": "normal",
                        "references": references,
                    }));
                }
            }
        }
    }
    if !claims.is_empty() {
        data.insert("claims".to_string(), Value::Array(claims));
    }

    Value::Object(data)
}

fn mainsnak_json(property: &str, language: &str, text: &str) -> Value {
    json!({
        "snaktype": "value",
        "property": property,
        "datavalue": {
            "value": {"text": text, "language": language},
            "type": "monolingualtext"
        }
    })
}

fn reference_json(reference: &ReferenceBundle) -> Value {
    let numeric_id: i64 = EURLEX_ITEM
        .trim_start_matches('Q')
        .parse()
        .unwrap_or_default();
    json!({
        "snaks": {
            PROP_STATED_IN: [{
                "snaktype": "value",
                "property": PROP_STATED_IN,
                "datavalue": {
                    "value": {"entity-type": "item", "numeric-id": numeric_id, "id": EURLEX_ITEM},
                    "type": "wikibase-entityid"
                }
            }],
            PROP_REFERENCE_URL: [{
                "snaktype": "value",
                "property": PROP_REFERENCE_URL,
                "datavalue": {"value": reference.source_url, "type": "string"}
            }],
            PROP_RETRIEVED: [{
                "snaktype": "value",
                "property": PROP_RETRIEVED,
                "datavalue": {
                    "value": {
                        "time": format!("+{}T00:00:00Z", reference.retrieved.format("%Y-%m-%d")),
                        "timezone": 0,
                        "before": 0,
                        "after": 0,
                        "precision": 11,
                        "calendarmodel": "http://www.wikidata.org/entity/Q1985727"
                    },
                    "type": "time"
                }
            }]
        },
        "snaks-order": [PROP_STATED_IN, PROP_REFERENCE_URL, PROP_RETRIEVED]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconcile::{AliasWrite, LabelWrite};
    use chrono::NaiveDate;

    fn reference() -> ReferenceBundle {
        ReferenceBundle {
            source_url: "https://eur-lex.europa.eu/legal-content/EN/TXT/?uri=CELEX:31988L0610"
                .to_string(),
            retrieved: NaiveDate::from_ymd_opt(2023, 2, 11).unwrap(),
        }
    }

    #[test]
    fn test_build_edit_data() {
        let item = ItemView::new("Q106120");
        let writes = WriteSet {
            labels: vec![LabelWrite {
                language: "en".to_string(),
                text: "Some Act of 1988".to_string(),
            }],
            aliases: vec![AliasWrite {
                language: "de".to_string(),
                values: vec!["Verordnung (EU) 2023/138".to_string()],
            }],
            statements: vec![StatementOp::Append {
                property: "P1448".to_string(),
                language: "en".to_string(),
                text: "Some Act of 1988".to_string(),
                reference: reference(),
            }],
        };

        let data = build_edit_data(&item, &writes);

        assert_eq!(data["labels"]["en"]["value"], "Some Act of 1988");
        assert_eq!(data["aliases"]["de"][0]["add"], "");
        let claim = &data["claims"][0];
        assert_eq!(claim["mainsnak"]["datavalue"]["value"]["text"], "Some Act of 1988");
        let snaks = &claim["references"][0]["snaks"];
        assert_eq!(
            snaks["P854"][0]["datavalue"]["value"],
            "https://eur-lex.europa.eu/legal-content/EN/TXT/?uri=CELEX:31988L0610"
        );
        assert_eq!(
            snaks["P813"][0]["datavalue"]["value"]["time"],
            "+2023-02-11T00:00:00Z"
        );
        assert_eq!(snaks["P248"][0]["datavalue"]["value"]["id"], "Q1276282");
    }

    #[test]
    fn test_merge_reference_keeps_existing_blocks() {
        let mut item = ItemView::new("Q106120");
        item.add_statement(crate::wikibase::Statement {
            id: Some("Q106120$existing".to_string()),
            property: "P1448".to_string(),
            language: "en".to_string(),
            text: "Some Act of 1988".to_string(),
            reference_urls: Vec::new(),
            raw_references: vec![json!({"snaks": {"P143": []}})],
        });
        let writes = WriteSet {
            labels: Vec::new(),
            aliases: Vec::new(),
            statements: vec![StatementOp::MergeReference {
                statement_id: "Q106120$existing".to_string(),
                reference: reference(),
            }],
        };

        let data = build_edit_data(&item, &writes);

        let claim = &data["claims"][0];
        assert_eq!(claim["id"], "Q106120$existing");
        let references = claim["references"].as_array().unwrap();
        assert_eq!(references.len(), 2);
    }
}
