//! Item discovery through the public SPARQL endpoint.

use anyhow::Result;
use reqwest::header;
use serde::Deserialize;
use tracing::info;
use url::Url;

use crate::TARGET_WIKIBASE;

/// Every item carrying a CELEX number, paired with that number.
pub const DISCOVERY_QUERY: &str = r#"
SELECT ?item ?celex_id
WHERE {
  ?item wdt:P476 ?celex_id.
}
"#;

#[derive(Clone, Debug)]
pub struct DiscoveredItem {
    pub item_id: String,
    pub celex_id: String,
}

#[derive(Deserialize)]
struct SparqlResponse {
    results: SparqlResults,
}

#[derive(Deserialize)]
struct SparqlResults {
    bindings: Vec<SparqlBinding>,
}

#[derive(Deserialize)]
struct SparqlBinding {
    item: SparqlValue,
    celex_id: SparqlValue,
}

#[derive(Deserialize)]
struct SparqlValue {
    value: String,
}

pub async fn discover_items(
    client: &reqwest::Client,
    endpoint: &str,
) -> Result<Vec<DiscoveredItem>> {
    info!(target: TARGET_WIKIBASE, "Running discovery query against {}", endpoint);

    let response: SparqlResponse = client
        .get(endpoint)
        .query(&[("query", DISCOVERY_QUERY), ("format", "json")])
        .header(header::ACCEPT, "application/sparql-results+json")
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let items: Vec<DiscoveredItem> = response
        .results
        .bindings
        .into_iter()
        .map(|binding| DiscoveredItem {
            item_id: stripped_entity_id(&binding.item.value),
            celex_id: binding.celex_id.value,
        })
        .collect();

    info!(target: TARGET_WIKIBASE, "Discovered {} items with a CELEX number", items.len());
    Ok(items)
}

/// SPARQL returns full entity URIs; everything downstream wants the bare
/// id. Values that are not URIs pass through unchanged.
fn stripped_entity_id(value: &str) -> String {
    match Url::parse(value) {
        Ok(url) => url
            .path_segments()
            .and_then(|segments| segments.last())
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        Err(_) => value.to_string(),
    }
}
