mod file_repository;
mod filter_decorator;
pub(crate) mod query;
mod sqlite_repository;

pub use file_repository::{FileCustomerRepository, FileFormat};
pub use filter_decorator::FilteredRepository;
pub use sqlite_repository::SqliteCustomerRepository;
