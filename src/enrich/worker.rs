//! Batch driver: walks the discovered items and runs each one through
//! fetch → extract → reconcile → write.
//!
//! Items are processed strictly one at a time; only the per-language page
//! fetches inside an item run concurrently. Shutdown is honored between
//! items, never in the middle of one, so an item is either fully written
//! or untouched.

use anyhow::Result;
use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use super::law_item::LawItem;
use crate::config::Config;
use crate::confirm::Confirm;
use crate::db::Database;
use crate::eurlex::{ScrapeDefect, ScrapeError, TitleFetcher};
use crate::extract;
use crate::reconcile::reconcile;
use crate::wikibase::sparql::{self, DiscoveredItem};
use crate::wikibase::{self, WikibaseClient};

#[derive(Debug, Default)]
pub struct RunSummary {
    pub completed: usize,
    pub skipped: usize,
    pub failed: usize,
    pub defects: Vec<ScrapeDefect>,
}

enum ItemOutcome {
    Written,
    NothingToUpload,
    Declined,
}

pub struct Enricher {
    config: Config,
    fetcher: TitleFetcher,
    wikibase: WikibaseClient,
    db: Database,
    confirm: Box<dyn Confirm>,
}

impl Enricher {
    pub fn new(config: Config, db: Database, confirm: Box<dyn Confirm>) -> Result<Self> {
        let fetcher = TitleFetcher::new(&config)?;
        let wikibase = WikibaseClient::new(&config)?;
        Ok(Self {
            config,
            fetcher,
            wikibase,
            db,
            confirm,
        })
    }

    pub async fn run(&self, shutdown: watch::Receiver<bool>) -> Result<RunSummary> {
        let items = sparql::discover_items(
            self.wikibase.http_client(),
            &self.config.sparql_endpoint,
        )
        .await?;

        let mut summary = RunSummary::default();
        let mut defects = Vec::new();
        let mut processed = 0usize;

        for discovered in items {
            if let Some(max_items) = self.config.max_items {
                if processed >= max_items {
                    info!("Reached the maximum of {} items for this run", max_items);
                    break;
                }
            }
            if *shutdown.borrow() {
                info!("Shutdown requested, stopping before the next item");
                break;
            }

            match self.db.is_processed(&discovered.item_id).await {
                Ok(true) => {
                    debug!("Skipping already processed item {}", discovered.item_id);
                    summary.skipped += 1;
                    continue;
                }
                Ok(false) => {}
                Err(err) => {
                    error!("Done-list lookup failed for {}: {}", discovered.item_id, err);
                    summary.failed += 1;
                    continue;
                }
            }

            processed += 1;
            match self.process_item(&discovered, &mut defects).await {
                Ok(ItemOutcome::Written) | Ok(ItemOutcome::NothingToUpload) => {
                    // Only a fully handled item goes on the done-list; a
                    // failed one must stay eligible for the next run.
                    match self.db.mark_processed(&discovered.item_id).await {
                        Ok(()) => summary.completed += 1,
                        Err(err) => {
                            error!(
                                "Could not record {} as processed: {}",
                                discovered.item_id, err
                            );
                            summary.failed += 1;
                        }
                    }
                }
                Ok(ItemOutcome::Declined) => {
                    info!("Upload declined for {}, leaving it for a later run", discovered.item_id);
                    summary.skipped += 1;
                }
                Err(err) => {
                    error!("Failed to process {}: {}", discovered.item_id, err);
                    summary.failed += 1;
                }
            }
        }

        summary.defects = defects;
        Ok(summary)
    }

    async fn process_item(
        &self,
        discovered: &DiscoveredItem,
        defects: &mut Vec<ScrapeDefect>,
    ) -> Result<ItemOutcome> {
        let mut law = LawItem::new(&discovered.item_id, &discovered.celex_id);
        info!(
            "Processing {} (CELEX:{})",
            wikibase::entity_url(&law.item_id),
            law.celex_id
        );

        match self.fetcher.fetch_disabled_languages(&law.celex_id).await {
            Ok(disabled) => law.disabled_languages = disabled,
            Err(err) => match err.downcast::<ScrapeError>() {
                Ok(scrape_error) => {
                    warn!(
                        "Language detection failed for CELEX:{}: {}",
                        law.celex_id, scrape_error
                    );
                    defects.push(ScrapeDefect {
                        celex_id: law.celex_id.clone(),
                        language: "EN".to_string(),
                        error: scrape_error,
                    });
                }
                Err(err) => return Err(err),
            },
        }

        let languages = law.enabled_languages();
        let fetched = self.fetcher.fetch_titles(&law.celex_id, &languages).await;
        defects.extend(fetched.defects);
        for title in fetched.titles {
            law.add_title(title);
        }

        let item = self.wikibase.get_item(&law.item_id).await?;
        law.euid = item
            .description("en")
            .or_else(|| item.label("en"))
            .and_then(extract::extract_eu_id);
        if law.euid.is_none() {
            // Expected for acts outside the plain EU numbering, e.g.
            // pre-1993 EEC directives. The rest of the enrichment still runs.
            info!(
                "No EUID in the English description or label of {}",
                law.item_id
            );
        }

        let writes = reconcile(
            &item,
            &law,
            &self.config.title_property,
            Utc::now().date_naive(),
        );
        law.something_to_upload = !writes.is_empty();

        info!(
            "{}: {} titles from {} languages, queued {} labels, {} alias sets, {} statements",
            law.item_id,
            law.accepted_titles.len(),
            languages.len(),
            writes.labels.len(),
            writes.aliases.len(),
            writes.statements.len()
        );

        if !law.something_to_upload {
            debug!("Nothing missing on {}, no upload needed", law.item_id);
            return Ok(ItemOutcome::NothingToUpload);
        }

        let prompt = format!(
            "Upload {} labels, {} alias sets and {} statements to {}?",
            writes.labels.len(),
            writes.aliases.len(),
            writes.statements.len(),
            wikibase::entity_url(&law.item_id)
        );
        if !self.confirm.confirm(&prompt) {
            return Ok(ItemOutcome::Declined);
        }

        self.wikibase.apply_writes(&item, &writes).await?;
        info!("Wrote {}", wikibase::entity_url(&law.item_id));
        Ok(ItemOutcome::Written)
    }
}
