mod product;

pub use product::{Product, ProductAttrs, ProductShort};
