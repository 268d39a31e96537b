use crate::domain::model::{CategoryDetail, Product, ProductCreate, ProductUpdate};
use crate::storage::{Repository, StoreError, StoreResult};
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::debug;

const SELECT_JOINED: &str = "SELECT p.id, p.name, p.price, p.stock, p.category_id,
        COALESCE(c.name, '') AS cat_name,
        COALESCE(c.description, '') AS cat_description
    FROM products p
    LEFT JOIN categories c ON p.category_id = c.id";

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn product_from_row(row: &PgRow) -> Result<Product, sqlx::Error> {
    Ok(Product {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        price: row.try_get("price")?,
        stock: row.try_get("stock")?,
        category_id: row.try_get("category_id")?,
        category: CategoryDetail {
            name: row.try_get("cat_name")?,
            description: row.try_get("cat_description")?,
        },
    })
}

#[async_trait]
impl Repository for PgProductRepository {
    type Listed = Product;
    type Detail = Product;
    type Create = ProductCreate;
    type Update = ProductUpdate;

    async fn list(&self) -> StoreResult<Vec<Product>> {
        let rows = sqlx::query(&format!("{} ORDER BY p.id", SELECT_JOINED))
            .fetch_all(&self.pool)
            .await?;

        let mut products = Vec::with_capacity(rows.len());
        for row in &rows {
            products.push(product_from_row(row)?);
        }
        Ok(products)
    }

    async fn create(&self, input: ProductCreate) -> StoreResult<ProductCreate> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO products (name, price, stock, category_id) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(input.stock)
        .bind(input.category_id)
        .fetch_one(&self.pool)
        .await?;

        debug!(id, "Inserted product");
        Ok(input.with_id(id))
    }

    async fn get(&self, id: i32) -> StoreResult<Product> {
        let row = sqlx::query(&format!("{} WHERE p.id = $1", SELECT_JOINED))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound("Product"))?;

        Ok(product_from_row(&row)?)
    }

    async fn update(&self, id: i32, input: ProductUpdate) -> StoreResult<ProductUpdate> {
        let result = sqlx::query(
            "UPDATE products SET name = $1, price = $2, stock = $3, category_id = $4 WHERE id = $5",
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(input.stock)
        .bind(input.category_id)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("Product"));
        }
        Ok(input.with_id(id))
    }

    async fn delete(&self, id: i32) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("Product"));
        }
        debug!(id, "Deleted product");
        Ok(())
    }
}
