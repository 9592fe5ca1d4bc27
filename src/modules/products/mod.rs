// Products module

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Product, ProductAttrs, ProductShort};
pub use repositories::{ProductRepositoryAdapter, PRODUCT_PHONE};
pub use services::{LegacyProductRecord, LegacyProductService};
