use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product category.
///
/// `products` is only filled on the detail read (`GET /categories/{id}`); every other
/// projection carries an empty list so the field is never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Ignored on input.
    #[serde(skip_deserializing)]
    pub products: Vec<ProductSummary>,
}

impl Category {
    pub fn new(id: i32, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            products: Vec::new(),
        }
    }
}

/// Product projection embedded in a category detail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductSummary {
    pub id: i32,
    pub name: String,
    /// Minor currency unit.
    pub price: i64,
    pub stock: i32,
}
