pub mod error;
pub mod memory;
pub mod postgres;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use traits::{CategoryRepository, ProductRepository, Repository};

use sqlx::PgPool;
use std::sync::Arc;

/// The pair of repositories the API is wired with.
#[derive(Clone)]
pub struct Repositories {
    pub categories: Arc<dyn CategoryRepository>,
    pub products: Arc<dyn ProductRepository>,
}

impl Repositories {
    /// Repositories backed by PostgreSQL. Both share the same pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            categories: Arc::new(postgres::PgCategoryRepository::new(pool.clone())),
            products: Arc::new(postgres::PgProductRepository::new(pool)),
        }
    }

    /// Repositories backed by a fresh in-process store.
    pub fn memory() -> Self {
        let store = MemoryStore::new();
        Self {
            categories: Arc::new(store.categories()),
            products: Arc::new(store.products()),
        }
    }
}
