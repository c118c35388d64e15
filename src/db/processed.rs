use chrono::Utc;
use tracing::{debug, error, instrument};

use super::core::Database;
use crate::TARGET_DB;

/// Strips the entity prefix and parses the numeric part of an item id,
/// so "Q123" is stored as 123.
fn numeric_item_id(item_id: &str) -> Result<i64, sqlx::Error> {
    item_id
        .trim_start_matches(['Q', 'q'])
        .parse::<i64>()
        .map_err(|_| sqlx::Error::Protocol(format!("Invalid item id '{}'", item_id)))
}

impl Database {
    #[instrument(target = "db_query", level = "debug", skip(self))]
    pub async fn is_processed(&self, item_id: &str) -> Result<bool, sqlx::Error> {
        let numeric = numeric_item_id(item_id)?;

        let exists = sqlx::query("SELECT 1 FROM processed_items WHERE item_id = ?1")
            .bind(numeric)
            .fetch_optional(self.pool())
            .await?
            .is_some();

        if exists {
            debug!(target: TARGET_DB, "Item {} already processed", item_id);
        }
        Ok(exists)
    }

    #[instrument(target = "db_query", level = "debug", skip(self))]
    pub async fn mark_processed(&self, item_id: &str) -> Result<(), sqlx::Error> {
        let numeric = numeric_item_id(item_id)?;

        let result = sqlx::query(
            "INSERT OR IGNORE INTO processed_items (item_id, processed_at) VALUES (?1, ?2)",
        )
        .bind(numeric)
        .bind(Utc::now().to_rfc3339())
        .execute(self.pool())
        .await;

        if let Err(ref err) = result {
            error!(target: TARGET_DB, "Failed to mark {} processed: {}", item_id, err);
        }
        result.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A pooled in-memory SQLite would give every connection its own
    // database, so the tests run against throwaway files instead.
    async fn test_database(name: &str) -> Database {
        let path = std::env::temp_dir().join(format!(
            "lexica-test-{}-{}.db",
            std::process::id(),
            name
        ));
        let _ = std::fs::remove_file(&path);
        Database::new(path.to_str().unwrap())
            .await
            .expect("test database")
    }

    #[tokio::test]
    async fn test_mark_and_check_processed() {
        let db = test_database("mark").await;

        assert!(!db.is_processed("Q106120").await.unwrap());
        db.mark_processed("Q106120").await.unwrap();
        assert!(db.is_processed("Q106120").await.unwrap());

        // Marking twice is harmless
        db.mark_processed("Q106120").await.unwrap();
        assert!(db.is_processed("Q106120").await.unwrap());

        // Other items unaffected
        assert!(!db.is_processed("Q42").await.unwrap());
    }

    #[tokio::test]
    async fn test_invalid_item_id_rejected() {
        let db = test_database("invalid").await;
        assert!(db.is_processed("not-an-id").await.is_err());
    }
}
