//! SQLite-backed product store using a `sqlx` connection pool.

use super::{ProductStore, StoreError};
use crate::model::{Product, ProductCreate, ProductUpdate};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::str::FromStr;
use tracing::{debug, info};

const PRODUCT_COLUMNS: &str = "id, name, price, available, created_at, updated_at";

const CREATE_PRODUCTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        price REAL NOT NULL,
        available BOOLEAN NOT NULL DEFAULT 1,
        created_at DATETIME NOT NULL,
        updated_at DATETIME NOT NULL
    )
"#;

const CREATE_AVAILABLE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_products_available ON products (available)";

/// Product store over a SQLite pool.
///
/// In-memory URLs (`sqlite::memory:`, `mode=memory`) get a single connection
/// that never idles out, since every new in-memory connection would see an
/// empty database.
#[derive(Clone)]
pub struct SqliteProductStore {
    pool: SqlitePool,
}

impl SqliteProductStore {
    /// Opens the pool and makes sure the `products` table exists.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(max_connections.max(1))
                .connect_with(options)
                .await?
        };

        let store = Self { pool };
        store.ensure_schema().await?;
        info!(database_url, "SQLite pool ready");
        Ok(store)
    }

    /// Creates the `products` table and its index when missing.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_PRODUCTS_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_AVAILABLE_INDEX).execute(&self.pool).await?;
        Ok(())
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Ids bound per `IN (...)` query. Older SQLite builds cap host parameters at 999.
const IDS_PER_QUERY: usize = 900;

#[async_trait]
impl ProductStore for SqliteProductStore {
    async fn insert(&self, params: ProductCreate) -> Result<Product, StoreError> {
        let now = Utc::now();
        let sql = format!(
            "INSERT INTO products (name, price, available, created_at, updated_at) \
             VALUES (?, ?, 1, ?, ?) RETURNING {PRODUCT_COLUMNS}"
        );
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(params.name)
            .bind(params.price)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        debug!(id = product.id, "Inserted product row");
        Ok(product)
    }

    async fn count_available(&self) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE available = 1")
            .fetch_one(&self.pool)
            .await?;
        u64::try_from(count).map_err(|_| StoreError::OutOfRange(count.to_string()))
    }

    async fn find_available_page(&self, skip: u64, take: u64) -> Result<Vec<Product>, StoreError> {
        // SQLite row ids are i64, so an offset past i64::MAX selects nothing.
        let Ok(offset) = i64::try_from(skip) else {
            debug!(skip, "Offset beyond the rowid range");
            return Ok(Vec::new());
        };
        let limit = i64::try_from(take).unwrap_or(i64::MAX);

        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE available = 1 \
             ORDER BY id ASC LIMIT ? OFFSET ?"
        );
        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    async fn find_available(&self, id: i64) -> Result<Option<Product>, StoreError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ? AND available = 1 LIMIT 1");
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(product)
    }

    async fn update(&self, id: i64, patch: ProductUpdate) -> Result<Product, StoreError> {
        let sql = format!(
            "UPDATE products SET name = COALESCE(?, name), price = COALESCE(?, price), \
             updated_at = ? WHERE id = ? RETURNING {PRODUCT_COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&sql)
            .bind(patch.name)
            .bind(patch.price)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::RowNotFound(id))
    }

    async fn set_available(&self, id: i64, available: bool) -> Result<Product, StoreError> {
        let sql = format!(
            "UPDATE products SET available = ?, updated_at = ? WHERE id = ? RETURNING {PRODUCT_COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&sql)
            .bind(available)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::RowNotFound(id))
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Product>, StoreError> {
        let mut products = Vec::new();

        for chunk in ids.chunks(IDS_PER_QUERY) {
            let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
                "SELECT {PRODUCT_COLUMNS} FROM products WHERE id IN ("
            ));
            let mut separated = builder.separated(", ");
            for id in chunk {
                separated.push_bind(*id);
            }
            separated.push_unseparated(")");

            let rows = builder
                .build_query_as::<Product>()
                .fetch_all(&self.pool)
                .await?;
            products.extend(rows);
        }

        debug!(requested = ids.len(), found = products.len(), "Looked up ids");
        Ok(products)
    }

    async fn close(&self) {
        if !self.pool.is_closed() {
            self.pool.close().await;
            info!("SQLite pool closed");
        }
    }
}
