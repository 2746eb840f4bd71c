//! PostgreSQL product store
//!
//! Connection options are assembled from discrete settings rather than a
//! URL. TLS is disabled. The pool connects lazily, so a database outage
//! surfaces as a failed request rather than a failed startup.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};

use super::{Product, ProductPayload, ProductStore, StoreError, StoreResult};

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS products (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    quantity INT NOT NULL,
    price NUMERIC NOT NULL DEFAULT 0
)";

const FETCH_SQL: &str = "SELECT id, name, quantity, price FROM products WHERE id = $1";
const LIST_SQL: &str =
    "SELECT id, name, quantity, price FROM products ORDER BY id LIMIT $1 OFFSET $2";
const INSERT_SQL: &str =
    "INSERT INTO products (name, quantity, price) VALUES ($1, $2, $3) RETURNING id";
const UPDATE_SQL: &str = "UPDATE products SET name = $1, quantity = $2, price = $3 WHERE id = $4";
const DELETE_SQL: &str = "DELETE FROM products WHERE id = $1";

/// Database connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PgStoreConfig {
    /// Role to connect as (required)
    pub user: String,

    /// Password for `user` (default: empty)
    #[serde(default)]
    pub password: String,

    /// Database name (required)
    pub dbname: String,

    /// Server host (default: "localhost")
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port (default: 5432)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

impl PgStoreConfig {
    pub fn new(user: impl Into<String>, password: impl Into<String>, dbname: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
            dbname: dbname.into(),
            host: default_host(),
            port: default_port(),
        }
    }

    /// Driver connection options, with SSL disabled
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.dbname)
            .ssl_mode(PgSslMode::Disable)
    }
}

/// Product store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    /// Wrap an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a lazily connecting pool from settings
    pub fn connect_lazy(config: &PgStoreConfig) -> Self {
        let pool = PgPoolOptions::new().connect_lazy_with(config.connect_options());
        Self::new(pool)
    }

    /// Create the products table if it does not exist yet
    pub async fn ensure_table(&self) -> StoreResult<()> {
        sqlx::query(CREATE_TABLE_SQL).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn fetch(&self, id: i32) -> StoreResult<Product> {
        sqlx::query_as::<_, Product>(FETCH_SQL)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::from_fetch)
    }

    async fn list(&self, start: i64, count: i64) -> StoreResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(LIST_SQL)
            .bind(count)
            .bind(start)
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    async fn create(&self, payload: ProductPayload) -> StoreResult<Product> {
        let id: i32 = sqlx::query_scalar(INSERT_SQL)
            .bind(&payload.name)
            .bind(payload.quantity)
            .bind(payload.price)
            .fetch_one(&self.pool)
            .await?;
        Ok(payload.with_id(id))
    }

    async fn update(&self, product: &Product) -> StoreResult<()> {
        sqlx::query(UPDATE_SQL)
            .bind(&product.name)
            .bind(product.quantity)
            .bind(product.price)
            .bind(product.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> StoreResult<()> {
        sqlx::query(DELETE_SQL).bind(id).execute(&self.pool).await?;
        Ok(())
    }
}
