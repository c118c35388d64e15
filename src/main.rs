use anyhow::Result;
use clap::Parser;
use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info, warn};

use lexica::config::Config;
use lexica::confirm::{AutoApprove, Confirm, StdinConfirm};
use lexica::db::Database;
use lexica::enrich::Enricher;
use lexica::logging;

/// Fills gaps on Wikidata items for EU legal acts with titles, aliases
/// and identifiers scraped from EUR-Lex.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// User-Agent sent with every outbound request
    #[arg(
        long,
        env = "LEXICA_USER_AGENT",
        default_value = "lexica/0.3 (https://www.wikidata.org/wiki/Wikidata:Tools/Lexica)"
    )]
    user_agent: String,

    /// Property the title statements are written under
    #[arg(long, default_value = "P1448")]
    title_property: String,

    /// Upload without asking for confirmation
    #[arg(long)]
    yes: bool,

    /// Stop after this many unprocessed items
    #[arg(long)]
    max_items: Option<usize>,

    /// Path of the done-list database
    #[arg(long, env = "DATABASE_PATH", default_value = "lexica.db")]
    database: String,

    /// Base URL of the EUR-Lex portal
    #[arg(long, default_value = "https://eur-lex.europa.eu")]
    eurlex_base: String,

    /// MediaWiki API endpoint to write to
    #[arg(long, default_value = "https://www.wikidata.org/w/api.php")]
    wikibase_api: String,

    /// SPARQL endpoint used for item discovery
    #[arg(long, default_value = "https://query.wikidata.org/sparql")]
    sparql_endpoint: String,

    /// How many languages to fetch concurrently per item
    #[arg(long, default_value = "6")]
    fetch_concurrency: usize,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::configure_logging(cli.verbose);

    let config = Config {
        user_agent: cli.user_agent,
        title_property: cli.title_property,
        confirm_before_upload: !cli.yes,
        max_items: cli.max_items,
        database_path: cli.database,
        eurlex_base: cli.eurlex_base,
        wikibase_api: cli.wikibase_api,
        sparql_endpoint: cli.sparql_endpoint,
        fetch_concurrency: cli.fetch_concurrency,
    };

    let (cancel_tx, cancel_rx) = watch::channel(false);
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_err() {
            error!("Failed to listen for ctrl-c");
        }
        info!("Shutdown requested, finishing the current item");
        let _ = cancel_tx.send(true);
    });

    let db = Database::new(&config.database_path).await?;
    let confirm: Box<dyn Confirm> = if config.confirm_before_upload {
        Box::new(StdinConfirm)
    } else {
        Box::new(AutoApprove)
    };

    let enricher = Enricher::new(config, db, confirm)?;
    let summary = enricher.run(cancel_rx).await?;

    info!(
        "Run finished: {} completed, {} skipped, {} failed",
        summary.completed, summary.skipped, summary.failed
    );
    for defect in &summary.defects {
        warn!(
            "Scrape defect on CELEX:{} [{}]: {}",
            defect.celex_id, defect.language, defect.error
        );
    }

    Ok(())
}
