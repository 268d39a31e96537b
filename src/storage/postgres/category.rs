use crate::domain::model::{Category, ProductSummary};
use crate::storage::{Repository, StoreError, StoreResult};
use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::debug;

#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn products_of(&self, category_id: i32) -> StoreResult<Vec<ProductSummary>> {
        let rows = sqlx::query(
            "SELECT id, name, price, stock FROM products WHERE category_id = $1 ORDER BY id",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        let mut products = Vec::with_capacity(rows.len());
        for row in rows {
            products.push(ProductSummary {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                price: row.try_get("price")?,
                stock: row.try_get("stock")?,
            });
        }
        Ok(products)
    }
}

#[async_trait]
impl Repository for PgCategoryRepository {
    type Listed = Category;
    type Detail = Category;
    type Create = Category;
    type Update = Category;

    async fn list(&self) -> StoreResult<Vec<Category>> {
        let rows = sqlx::query("SELECT id, name, description FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let mut categories = Vec::with_capacity(rows.len());
        for row in rows {
            categories.push(Category::new(
                row.try_get("id")?,
                row.try_get::<String, _>("name")?,
                row.try_get::<String, _>("description")?,
            ));
        }
        Ok(categories)
    }

    async fn create(&self, input: Category) -> StoreResult<Category> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO categories (name, description) VALUES ($1, $2) RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.description)
        .fetch_one(&self.pool)
        .await?;

        debug!(id, "Inserted category");
        Ok(Category::new(id, input.name, input.description))
    }

    async fn get(&self, id: i32) -> StoreResult<Category> {
        let row = sqlx::query("SELECT id, name, description FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound("Category"))?;

        let mut category = Category::new(
            row.try_get("id")?,
            row.try_get::<String, _>("name")?,
            row.try_get::<String, _>("description")?,
        );
        category.products = self.products_of(id).await?;
        Ok(category)
    }

    async fn update(&self, id: i32, input: Category) -> StoreResult<Category> {
        let result = sqlx::query("UPDATE categories SET name = $1, description = $2 WHERE id = $3")
            .bind(&input.name)
            .bind(&input.description)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("Category"));
        }
        Ok(Category::new(id, input.name, input.description))
    }

    async fn delete(&self, id: i32) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("Category"));
        }
        debug!(id, "Deleted category");
        Ok(())
    }
}
