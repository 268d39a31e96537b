pub mod service;

pub use service::{CategoryService, ProductService, ResourceService};
