pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{CategoryService, ProductService};
pub use infra::config::{Config, StorageConfig};
pub use storage::{MemoryStore, Repositories};
pub use transport::http::{create_router, AppState};

use tracing::info;

/// Builds the repositories selected by `config`.
///
/// For PostgreSQL this connects the pool and creates missing tables.
pub async fn build_repositories(config: &StorageConfig) -> anyhow::Result<Repositories> {
    match config {
        StorageConfig::Postgres(db) => {
            let pool = storage::postgres::connect(db).await?;
            storage::postgres::ensure_schema(&pool).await?;
            Ok(Repositories::postgres(pool))
        }
        StorageConfig::Memory => {
            info!("Using in-memory storage; data is lost on restart");
            Ok(Repositories::memory())
        }
    }
}
