//! Knowledge-base collaborator: item reads into a typed view, batched
//! writes, and SPARQL discovery of candidate items.

pub mod client;
pub mod item;
pub mod sparql;

pub use client::WikibaseClient;
pub use item::{ItemView, Statement};

pub const WIKIDATA_ENTITY_BASE: &str = "https://www.wikidata.org/wiki";

/// CELEX number property.
pub const PROP_CELEX: &str = "P476";
/// Reference URL property.
pub const PROP_REFERENCE_URL: &str = "P854";
/// Retrieved-date property.
pub const PROP_RETRIEVED: &str = "P813";
/// Stated-in property.
pub const PROP_STATED_IN: &str = "P248";
/// The EUR-Lex item, used as the stated-in value of every reference.
pub const EURLEX_ITEM: &str = "Q1276282";

pub fn entity_url(item_id: &str) -> String {
    format!("{}/{}", WIKIDATA_ENTITY_BASE, item_id)
}
