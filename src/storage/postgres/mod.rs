//! PostgreSQL repositories.
//!
//! Every operation is a single parameterized statement (the category detail read is
//! two independent statements). No transactions are used.

pub mod category;
pub mod product;

pub use category::PgCategoryRepository;
pub use product::PgProductRepository;

use crate::infra::config::DatabaseConfig;
use crate::storage::StoreResult;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Opens the connection pool described by `config`.
pub async fn connect(config: &DatabaseConfig) -> StoreResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options.clone())
        .await?;
    info!(target_db = %config.target, "Connected to PostgreSQL");
    Ok(pool)
}

/// Creates the `categories` and `products` tables when they are missing.
///
/// Existing tables are left untouched. `products.category_id` has no foreign key:
/// references to missing categories are tolerated and read back as empty details.
pub async fn ensure_schema(pool: &PgPool) -> StoreResult<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS categories (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT ''
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS products (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            price BIGINT NOT NULL CHECK (price >= 0),
            stock INTEGER NOT NULL CHECK (stock >= 0),
            category_id INTEGER NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS products_category_id_idx ON products (category_id)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Reports whether `table` exists in the current schema.
pub async fn table_exists(pool: &PgPool, table: &str) -> StoreResult<bool> {
    let exists: bool = sqlx::query_scalar(
        "SELECT EXISTS (
            SELECT 1 FROM information_schema.tables
            WHERE table_schema = current_schema() AND table_name = $1
        )",
    )
    .bind(table)
    .fetch_one(pool)
    .await?;
    Ok(exists)
}
