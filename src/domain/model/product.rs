use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product as returned by list and detail reads, denormalized with its category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    /// Minor currency unit.
    pub price: i64,
    pub stock: i32,
    /// Nullable reference to `Category.id`. `None` means uncategorized.
    pub category_id: Option<i32>,
    /// Filled by a left join. Empty strings when `category_id` is null or dangling.
    pub category: CategoryDetail,
}

/// Category fields embedded in a product read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryDetail {
    pub name: String,
    pub description: String,
}

/// Write shape for products: no embedded category.
///
/// `id` is ignored on create and replaced by the path id on update; the stored id is
/// reflected back in the response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProductCreate {
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub stock: i32,
    pub category_id: Option<i32>,
}

/// Updates replace every writable field, so they share the create shape.
pub type ProductUpdate = ProductCreate;

impl ProductCreate {
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }
}
