//! Domain shapes for the two managed resources.
//!
//! The same structs are used on the wire (JSON) and between the service and
//! repository layers. Request bodies are decoded by type only: missing fields fall
//! back to their zero value and unknown fields are ignored.

pub mod category;
pub mod product;

pub use category::{Category, ProductSummary};
pub use product::{CategoryDetail, Product, ProductCreate, ProductUpdate};
