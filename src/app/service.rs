//! Service layer between HTTP handlers and repositories.
//!
//! There are no business rules here yet; every call forwards to the repository.

use crate::storage::{CategoryRepository, ProductRepository, Repository, StoreResult};
use std::sync::Arc;

pub struct ResourceService<R: ?Sized> {
    repository: Arc<R>,
}

pub type CategoryService = ResourceService<dyn CategoryRepository>;
pub type ProductService = ResourceService<dyn ProductRepository>;

impl<R: ?Sized> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
        }
    }
}

impl<R: Repository + ?Sized> ResourceService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn get_all(&self) -> StoreResult<Vec<R::Listed>> {
        self.repository.list().await
    }

    pub async fn create(&self, input: R::Create) -> StoreResult<R::Create> {
        self.repository.create(input).await
    }

    /// Detail read. For categories this embeds every product that references the id.
    pub async fn get_by_id(&self, id: i32) -> StoreResult<R::Detail> {
        self.repository.get(id).await
    }

    pub async fn update(&self, id: i32, input: R::Update) -> StoreResult<R::Update> {
        self.repository.update(id, input).await
    }

    pub async fn delete(&self, id: i32) -> StoreResult<()> {
        self.repository.delete(id).await
    }
}
