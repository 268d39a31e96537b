//! Repository seams shared by every backend.

use crate::domain::model::{Category, Product, ProductCreate, ProductUpdate};
use crate::storage::StoreResult;
use async_trait::async_trait;

/// CRUD contract for one resource.
///
/// `Listed` is the list projection, `Detail` the single-item read, `Create` and
/// `Update` the write shapes. Writes return the input with the stored id filled in.
#[async_trait]
pub trait Repository: Send + Sync {
    type Listed: Send;
    type Detail: Send;
    type Create: Send;
    type Update: Send;

    async fn list(&self) -> StoreResult<Vec<Self::Listed>>;

    async fn create(&self, input: Self::Create) -> StoreResult<Self::Create>;

    /// Returns `StoreError::NotFound` when no row has this id.
    async fn get(&self, id: i32) -> StoreResult<Self::Detail>;

    /// Full replace. Returns `StoreError::NotFound` when no row was affected.
    async fn update(&self, id: i32, input: Self::Update) -> StoreResult<Self::Update>;

    /// Physical delete. Returns `StoreError::NotFound` when no row was affected.
    async fn delete(&self, id: i32) -> StoreResult<()>;
}

/// Categories: the detail read embeds the category's products.
pub trait CategoryRepository:
    Repository<Listed = Category, Detail = Category, Create = Category, Update = Category>
{
}

impl<T> CategoryRepository for T where
    T: Repository<Listed = Category, Detail = Category, Create = Category, Update = Category>
{
}

/// Products: reads are left-joined against categories.
pub trait ProductRepository:
    Repository<Listed = Product, Detail = Product, Create = ProductCreate, Update = ProductUpdate>
{
}

impl<T> ProductRepository for T where
    T: Repository<Listed = Product, Detail = Product, Create = ProductCreate, Update = ProductUpdate>
{
}
