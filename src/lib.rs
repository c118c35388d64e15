pub mod config;
pub mod confirm;
pub mod db;
pub mod enrich;
pub mod eurlex;
pub mod extract;
pub mod logging;
pub mod reconcile;
pub mod wikibase;

pub const TARGET_WEB_REQUEST: &str = "web_request";
pub const TARGET_WIKIBASE: &str = "wikibase_request";
pub const TARGET_DB: &str = "db_query";

/// The official EU languages EUR-Lex publishes legal acts in, as the
/// uppercase codes its content URLs use.
pub const LANGUAGES: [&str; 24] = [
    "BG", "ES", "CS", "DA", "DE", "ET", "EL", "EN", "FR", "GA", "HR", "IT", "LV", "LT", "HU",
    "MT", "NL", "PL", "PT", "RO", "SK", "SL", "FI", "SV",
];
