pub mod repository;

pub use repository::{CustomerRepository, Filter, SortField, SortSpec};
