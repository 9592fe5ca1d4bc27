mod product_adapter;

pub use product_adapter::{ProductRepositoryAdapter, PRODUCT_PHONE};
