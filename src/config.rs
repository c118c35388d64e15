//! Runtime configuration, built once at startup and passed into every
//! collaborator that needs it. No module-level mutable state.

/// Everything the enrichment run needs to know, resolved from the CLI
/// (and environment fallbacks) before any collaborator is constructed.
#[derive(Clone, Debug)]
pub struct Config {
    /// Sent as the User-Agent on every outbound request, identifying the
    /// operator per the Wikimedia user-agent policy.
    pub user_agent: String,
    /// Property the title statements are written under.
    pub title_property: String,
    /// When true, every pending upload blocks on operator confirmation.
    pub confirm_before_upload: bool,
    /// Cap on items processed this run; `None` processes the whole batch.
    pub max_items: Option<usize>,
    /// Path of the SQLite done-list database.
    pub database_path: String,
    /// Base URL of the EUR-Lex legal-content portal.
    pub eurlex_base: String,
    /// MediaWiki api.php endpoint of the target wiki.
    pub wikibase_api: String,
    /// SPARQL endpoint used for item discovery.
    pub sparql_endpoint: String,
    /// Bound on concurrent per-language page fetches.
    pub fetch_concurrency: usize,
}
