use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::domain::order::Order;
use super::models::SavedOrderRow;

const CREATE_ORDERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS orders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    dish TEXT,
    quantity INTEGER,
    total REAL
)";

const INSERT_ORDER_ROW: &str = "INSERT INTO orders (dish, quantity, total) VALUES (?, ?, ?)";

const SELECT_ALL_ORDER_ROWS: &str =
    "SELECT id, dish, quantity, total FROM orders ORDER BY id ASC";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

// ============================================================================
// OrderStore - Repository for saved order rows
// ============================================================================
//
// Responsibilities:
// 1. Open (and on first run create) the single-file store
// 2. Ensure the `orders` table exists
// 3. Append one row per line item when an order is saved
// 4. Return every saved row, oldest first
//
// The store never sees a Menu. It receives already-priced lines from the
// order at save time.
//
// ============================================================================

pub struct OrderStore {
    pool: SqlitePool,
}

impl OrderStore {
    /// Open the store at `database_url`, e.g. `sqlite://orders.db` or
    /// `sqlite::memory:`. The file is created if it does not exist.
    ///
    /// The pool holds exactly one connection that is never recycled, so the
    /// store behaves as a single handle for the whole session. This also
    /// keeps an in-memory database alive until [`OrderStore::close`].
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        tracing::info!(database_url = %database_url, "Opened order store");

        Ok(Self { pool })
    }

    /// Create the `orders` table if it is missing. Safe to call on every startup.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_ORDERS_TABLE).execute(&self.pool).await?;

        tracing::debug!("Ensured orders table exists");
        Ok(())
    }

    /// Append one row per line item of `order`. Returns the number of rows written.
    ///
    /// All rows are committed together at the end, so a failure part way
    /// through leaves no rows from this call behind.
    pub async fn save(&self, order: &Order) -> Result<usize, StoreError> {
        if order.is_empty() {
            tracing::debug!("Nothing to save for an empty order");
            return Ok(0);
        }

        let lines = order.priced_lines();

        let mut tx = self.pool.begin().await?;

        for line in &lines {
            sqlx::query(INSERT_ORDER_ROW)
                .bind(&line.dish)
                .bind(line.quantity)
                .bind(line.total)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        tracing::info!(
            rows = lines.len(),
            order_total = order.total(),
            "✅ Saved order"
        );

        Ok(lines.len())
    }

    /// Load every saved row in insertion order. Empty table means an empty vec.
    pub async fn list_all(&self) -> Result<Vec<SavedOrderRow>, StoreError> {
        let rows = sqlx::query_as::<_, SavedOrderRow>(SELECT_ALL_ORDER_ROWS)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!("Loaded {} saved order rows", rows.len());
        Ok(rows)
    }

    /// Release the connection. Pending work has already completed because
    /// every call above is awaited to the end.
    pub async fn close(self) {
        self.pool.close().await;
        tracing::info!("Closed order store");
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
