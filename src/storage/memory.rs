//! In-process store for running the API without PostgreSQL.
//!
//! Both tables live behind a single `RwLock`, so every repository call observes and
//! mutates a consistent snapshot. Semantics mirror the PostgreSQL backend: ids come
//! from per-table sequences and are never reused, reads are ordered by id, product
//! reads are left-joined against categories and `category_id` may dangle.

use crate::domain::model::{
    Category, CategoryDetail, Product, ProductCreate, ProductSummary, ProductUpdate,
};
use crate::storage::{Repository, StoreError, StoreResult};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct CategoryRow {
    name: String,
    description: String,
}

#[derive(Debug, Clone)]
struct ProductRow {
    name: String,
    price: i64,
    stock: i32,
    category_id: Option<i32>,
}

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i32, CategoryRow>,
    products: BTreeMap<i32, ProductRow>,
    category_seq: i32,
    product_seq: i32,
}

impl Tables {
    fn next_category_id(&mut self) -> i32 {
        self.category_seq += 1;
        self.category_seq
    }

    fn next_product_id(&mut self) -> i32 {
        self.product_seq += 1;
        self.product_seq
    }

    fn joined_product(&self, id: i32, row: &ProductRow) -> Product {
        let category = row
            .category_id
            .and_then(|cid| self.categories.get(&cid))
            .map(|c| CategoryDetail {
                name: c.name.clone(),
                description: c.description.clone(),
            })
            .unwrap_or_default();

        Product {
            id,
            name: row.name.clone(),
            price: row.price,
            stock: row.stock,
            category_id: row.category_id,
            category,
        }
    }
}

/// Same checks as the `products` table constraints.
fn check_product(input: &ProductCreate) -> StoreResult<()> {
    if input.price < 0 {
        return Err(StoreError::Constraint("price must not be negative".to_string()));
    }
    if input.stock < 0 {
        return Err(StoreError::Constraint("stock must not be negative".to_string()));
    }
    Ok(())
}

impl From<&ProductCreate> for ProductRow {
    fn from(input: &ProductCreate) -> Self {
        Self {
            name: input.name.clone(),
            price: input.price,
            stock: input.stock,
            category_id: input.category_id,
        }
    }
}

/// Shared state handed out to both repositories.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> MemoryCategoryRepository {
        MemoryCategoryRepository {
            tables: self.tables.clone(),
        }
    }

    pub fn products(&self) -> MemoryProductRepository {
        MemoryProductRepository {
            tables: self.tables.clone(),
        }
    }
}

#[derive(Clone)]
pub struct MemoryCategoryRepository {
    tables: Arc<RwLock<Tables>>,
}

#[async_trait]
impl Repository for MemoryCategoryRepository {
    type Listed = Category;
    type Detail = Category;
    type Create = Category;
    type Update = Category;

    async fn list(&self) -> StoreResult<Vec<Category>> {
        let tables = self.tables.read().await;
        Ok(tables
            .categories
            .iter()
            .map(|(id, row)| Category::new(*id, row.name.clone(), row.description.clone()))
            .collect())
    }

    async fn create(&self, input: Category) -> StoreResult<Category> {
        let mut tables = self.tables.write().await;
        let id = tables.next_category_id();
        tables.categories.insert(
            id,
            CategoryRow {
                name: input.name.clone(),
                description: input.description.clone(),
            },
        );
        Ok(Category::new(id, input.name, input.description))
    }

    async fn get(&self, id: i32) -> StoreResult<Category> {
        let tables = self.tables.read().await;
        let row = tables
            .categories
            .get(&id)
            .ok_or(StoreError::NotFound("Category"))?;

        let mut category = Category::new(id, row.name.clone(), row.description.clone());
        category.products = tables
            .products
            .iter()
            .filter(|(_, p)| p.category_id == Some(id))
            .map(|(pid, p)| ProductSummary {
                id: *pid,
                name: p.name.clone(),
                price: p.price,
                stock: p.stock,
            })
            .collect();
        Ok(category)
    }

    async fn update(&self, id: i32, input: Category) -> StoreResult<Category> {
        let mut tables = self.tables.write().await;
        let row = tables
            .categories
            .get_mut(&id)
            .ok_or(StoreError::NotFound("Category"))?;
        row.name = input.name.clone();
        row.description = input.description.clone();
        Ok(Category::new(id, input.name, input.description))
    }

    async fn delete(&self, id: i32) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        tables
            .categories
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound("Category"))
    }
}

#[derive(Clone)]
pub struct MemoryProductRepository {
    tables: Arc<RwLock<Tables>>,
}

#[async_trait]
impl Repository for MemoryProductRepository {
    type Listed = Product;
    type Detail = Product;
    type Create = ProductCreate;
    type Update = ProductUpdate;

    async fn list(&self) -> StoreResult<Vec<Product>> {
        let tables = self.tables.read().await;
        Ok(tables
            .products
            .iter()
            .map(|(id, row)| tables.joined_product(*id, row))
            .collect())
    }

    async fn create(&self, input: ProductCreate) -> StoreResult<ProductCreate> {
        check_product(&input)?;
        let mut tables = self.tables.write().await;
        let id = tables.next_product_id();
        tables.products.insert(id, ProductRow::from(&input));
        Ok(input.with_id(id))
    }

    async fn get(&self, id: i32) -> StoreResult<Product> {
        let tables = self.tables.read().await;
        let row = tables
            .products
            .get(&id)
            .ok_or(StoreError::NotFound("Product"))?;
        Ok(tables.joined_product(id, row))
    }

    async fn update(&self, id: i32, input: ProductUpdate) -> StoreResult<ProductUpdate> {
        let mut tables = self.tables.write().await;
        let row = tables
            .products
            .get_mut(&id)
            .ok_or(StoreError::NotFound("Product"))?;
        check_product(&input)?;
        *row = ProductRow::from(&input);
        Ok(input.with_id(id))
    }

    async fn delete(&self, id: i32) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        tables
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound("Product"))
    }
}
